//! Master index builder
//!
//! Merges the per-category record sets into one id-keyed index. When an id
//! appears in several categories, the category that comes earliest in the
//! configured order wins, together with that category's label text. An id
//! cannot conflict with itself inside one category, since category sets are
//! id-unique.

use crate::config::{CategoryKey, ExportConfig};
use crate::record::{CategoryRecordSet, MasterEntry, MasterIndex};
use std::collections::BTreeMap;

/// Merge per-category sets into the master index, earliest category wins.
pub fn build_master_index(
    per_category: &BTreeMap<CategoryKey, CategoryRecordSet>,
    config: &ExportConfig,
) -> MasterIndex {
    let mut master = MasterIndex::new();

    for &category in &config.categories {
        let Some(set) = per_category.get(&category) else {
            continue;
        };
        for record in set.iter() {
            let keep_existing = master
                .get(&record.id)
                .map(|existing| rank_of(config, existing.category) <= rank_of(config, category))
                .unwrap_or(false);
            if keep_existing {
                continue;
            }
            master.insert(
                record.id.clone(),
                MasterEntry {
                    label: record.label.clone(),
                    category: record.category,
                },
            );
        }
    }
    master
}

/// Configured rank; categories outside the configured order sort last and
/// never displace a configured one.
fn rank_of(config: &ExportConfig, category: CategoryKey) -> usize {
    config.rank(category).unwrap_or(usize::MAX)
}
