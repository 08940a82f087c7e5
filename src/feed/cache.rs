use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::Posting;

/// Process-lifetime cache of parsed postings, keyed by item id.
///
/// Entries are written once and never evicted. Writers racing on the same id
/// are harmless: the first write wins, and both parses of the same immutable
/// upstream item carry identical content anyway.
#[derive(Default)]
pub struct PostingCache {
    entries: RwLock<HashMap<u64, Posting>>,
}

impl PostingCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: u64) -> Option<Posting> {
        self.entries
            .read()
            .expect("posting cache lock poisoned")
            .get(&id)
            .cloned()
    }

    /// Insert if absent; returns the cached posting either way.
    pub fn insert(&self, posting: Posting) -> Posting {
        let mut entries = self.entries.write().expect("posting cache lock poisoned");
        entries.entry(posting.id).or_insert(posting).clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().expect("posting cache lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn posting(id: u64, description: &str) -> Posting {
        Posting::from_text(id, description, Utc::now())
    }

    #[test]
    fn test_get_after_insert() {
        let cache = PostingCache::new();
        assert!(cache.get(1).is_none());

        cache.insert(posting(1, "hello"));
        assert_eq!(cache.get(1).unwrap().description, "hello");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_first_write_wins() {
        let cache = PostingCache::new();
        cache.insert(posting(1, "first"));
        let returned = cache.insert(posting(1, "second"));

        assert_eq!(returned.description, "first");
        assert_eq!(cache.get(1).unwrap().description, "first");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_distinct_ids_accumulate() {
        let cache = PostingCache::new();
        cache.insert(posting(1, "a"));
        cache.insert(posting(2, "b"));
        assert_eq!(cache.len(), 2);
        assert!(!cache.is_empty());
    }
}
