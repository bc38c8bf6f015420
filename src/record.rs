//! Record and index types
//!
//! [`CategoryRecordSet`] accumulates the records of one category with
//! id uniqueness; [`MasterIndex`] is the cross-category merge result keyed
//! by id. Both are rebuilt from scratch on every run.

use crate::config::CategoryKey;
use crate::grammar::RecordFields;
use serde::Serialize;
use std::collections::BTreeMap;

/// One parsed record attributed to a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateRecord {
    pub id: String,
    pub label: String,
    pub category: CategoryKey,
}

/// Records of a single category, at most one per id.
///
/// Records always carry the set's own category; that invariant is enforced
/// by construction, since records only enter through [`insert_first`].
///
/// [`insert_first`]: CategoryRecordSet::insert_first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRecordSet {
    category: CategoryKey,
    records: BTreeMap<String, CandidateRecord>,
}

impl CategoryRecordSet {
    pub fn new(category: CategoryKey) -> Self {
        CategoryRecordSet {
            category,
            records: BTreeMap::new(),
        }
    }

    pub fn category(&self) -> CategoryKey {
        self.category
    }

    /// Insert unless the id is already present.
    ///
    /// Returns `true` when the record was inserted. The first occurrence of
    /// an id within a category wins; later rows with the same id are
    /// dropped. This mirrors the source data, where a set re-listed in the
    /// same section is a layout artifact, not new information.
    pub fn insert_first(&mut self, fields: RecordFields) -> bool {
        if self.records.contains_key(&fields.id) {
            return false;
        }
        let record = CandidateRecord {
            id: fields.id.clone(),
            label: fields.label,
            category: self.category,
        };
        self.records.insert(fields.id, record);
        true
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&CandidateRecord> {
        self.records.get(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in id order.
    pub fn iter(&self) -> impl Iterator<Item = &CandidateRecord> {
        self.records.values()
    }
}

/// Label and winning category stored for one id in the master index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MasterEntry {
    pub label: String,
    pub category: CategoryKey,
}

/// Cross-category index keyed by id.
///
/// For every id the stored category is the earliest, by configured order,
/// among all category sets containing that id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MasterIndex {
    entries: BTreeMap<String, MasterEntry>,
}

impl MasterIndex {
    pub fn new() -> Self {
        MasterIndex::default()
    }

    /// Insert or overwrite the entry for `id`.
    pub fn insert(&mut self, id: String, entry: MasterEntry) {
        self.entries.insert(id, entry);
    }

    pub fn get(&self, id: &str) -> Option<&MasterEntry> {
        self.entries.get(id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &MasterEntry)> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(id: &str, label: &str) -> RecordFields {
        RecordFields {
            id: id.to_string(),
            label: label.to_string(),
        }
    }

    #[test]
    fn first_insert_wins_within_category() {
        let mut set = CategoryRecordSet::new(CategoryKey(2025));
        assert!(set.insert_first(fields("10953", "Icons Set")));
        assert!(!set.insert_first(fields("10953", "Icons Set (reissue)")));

        assert_eq!(set.len(), 1);
        assert_eq!(set.get("10953").unwrap().label, "Icons Set");
    }

    #[test]
    fn records_carry_the_set_category() {
        let mut set = CategoryRecordSet::new(CategoryKey(2026));
        set.insert_first(fields("77050", "Speed Set"));

        for record in set.iter() {
            assert_eq!(record.category, set.category());
        }
    }
}
