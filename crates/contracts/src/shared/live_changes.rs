//! Ревизии коллекций для "живого" обновления экранов.
//!
//! Каждая успешная запись увеличивает ревизию своей коллекции.
//! UI периодически запрашивает карту ревизий и перечитывает те
//! коллекции, ревизия которых изменилась.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const COLLECTION_BRANCH: &str = "branch";
pub const COLLECTION_STAFF: &str = "staff";
pub const COLLECTION_SALON_SERVICE: &str = "salon_service";
pub const COLLECTION_PRODUCT: &str = "product";
pub const COLLECTION_MEMBERSHIP: &str = "membership";
pub const COLLECTION_BOOKING: &str = "booking";
pub const COLLECTION_NOTIFICATION: &str = "notification";
pub const COLLECTION_SETTINGS: &str = "settings";

pub const ALL_COLLECTIONS: [&str; 8] = [
    COLLECTION_BRANCH,
    COLLECTION_STAFF,
    COLLECTION_SALON_SERVICE,
    COLLECTION_PRODUCT,
    COLLECTION_MEMBERSHIP,
    COLLECTION_BOOKING,
    COLLECTION_NOTIFICATION,
    COLLECTION_SETTINGS,
];

/// Снимок ревизий всех коллекций
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRevisions {
    pub revisions: BTreeMap<String, u64>,
}

impl ChangeRevisions {
    pub fn get(&self, collection: &str) -> u64 {
        self.revisions.get(collection).copied().unwrap_or(0)
    }

    /// Коллекции, ревизия которых отличается от `previous`
    pub fn changed_since(&self, previous: &ChangeRevisions) -> Vec<String> {
        let mut changed: Vec<String> = self
            .revisions
            .iter()
            .filter(|(name, rev)| previous.get(name) != **rev)
            .map(|(name, _)| name.clone())
            .collect();
        for name in previous.revisions.keys() {
            if !self.revisions.contains_key(name) && previous.get(name) != 0 {
                changed.push(name.clone());
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn revs(pairs: &[(&str, u64)]) -> ChangeRevisions {
        ChangeRevisions {
            revisions: pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        }
    }

    #[test]
    fn detects_changed_collections() {
        let before = revs(&[("booking", 3), ("product", 1)]);
        let after = revs(&[("booking", 4), ("product", 1), ("staff", 1)]);
        assert_eq!(after.changed_since(&before), vec!["booking", "staff"]);
        assert!(after.changed_since(&after).is_empty());
    }

    #[test]
    fn missing_collection_reads_as_zero() {
        let empty = ChangeRevisions::default();
        assert_eq!(empty.get(COLLECTION_BOOKING), 0);
    }
}
