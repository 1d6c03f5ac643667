//! Ревизии коллекций в памяти процесса. Заменяют подписку на живые запросы:
//! UI опрашивает `/api/changes` и перечитывает изменившиеся коллекции.

use contracts::shared::live_changes::{ChangeRevisions, ALL_COLLECTIONS};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::sync::RwLock;

pub struct ChangeTracker {
    revisions: RwLock<BTreeMap<String, u64>>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        let revisions = ALL_COLLECTIONS
            .iter()
            .map(|name| (name.to_string(), 1))
            .collect();
        Self {
            revisions: RwLock::new(revisions),
        }
    }

    /// Увеличить ревизию коллекции, вернуть новое значение
    pub fn bump(&self, collection: &str) -> u64 {
        let mut map = match self.revisions.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let rev = map.entry(collection.to_string()).or_insert(0);
        *rev += 1;
        *rev
    }

    pub fn snapshot(&self) -> ChangeRevisions {
        let map = match self.revisions.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        ChangeRevisions {
            revisions: map.clone(),
        }
    }
}

impl Default for ChangeTracker {
    fn default() -> Self {
        Self::new()
    }
}

static TRACKER: Lazy<ChangeTracker> = Lazy::new(ChangeTracker::new);

/// Отметить изменение коллекции
pub fn notify(collection: &str) {
    let rev = TRACKER.bump(collection);
    tracing::debug!("collection '{}' -> revision {}", collection, rev);
}

pub fn snapshot() -> ChangeRevisions {
    TRACKER.snapshot()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::live_changes::{COLLECTION_BOOKING, COLLECTION_STAFF};

    #[test]
    fn all_collections_start_at_one() {
        let tracker = ChangeTracker::new();
        let snap = tracker.snapshot();
        assert_eq!(snap.revisions.len(), ALL_COLLECTIONS.len());
        assert!(snap.revisions.values().all(|r| *r == 1));
    }

    #[test]
    fn bump_is_monotonic_and_scoped() {
        let tracker = ChangeTracker::new();
        let before = tracker.snapshot();
        assert_eq!(tracker.bump(COLLECTION_BOOKING), 2);
        assert_eq!(tracker.bump(COLLECTION_BOOKING), 3);
        let after = tracker.snapshot();
        assert_eq!(after.get(COLLECTION_STAFF), 1);
        assert_eq!(after.changed_since(&before), vec![COLLECTION_BOOKING.to_string()]);
    }
}
