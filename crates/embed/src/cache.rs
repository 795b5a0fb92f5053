use std::num::NonZeroUsize;
use std::sync::Mutex;

use lru::LruCache;

/// Bounded cache of backend vectors keyed by the joined skill phrase.
///
/// Candidate pools repeat heavily between requests (the same mentors get
/// scored for every mentee), so a small LRU in front of the HTTP backend
/// removes most round-trips. Only backend vectors are cached; the hash
/// fallback is cheaper than the lookup.
pub(crate) struct EmbeddingCache {
    inner: Mutex<LruCache<String, Vec<f32>>>,
}

impl EmbeddingCache {
    pub(crate) fn new(capacity: NonZeroUsize) -> Self {
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub(crate) fn get(&self, phrase: &str) -> Option<Vec<f32>> {
        let mut guard = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.get(phrase).cloned()
    }

    pub(crate) fn put(&self, phrase: String, vector: Vec<f32>) {
        let mut guard = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.put(phrase, vector);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache(capacity: usize) -> EmbeddingCache {
        EmbeddingCache::new(NonZeroUsize::new(capacity).unwrap())
    }

    #[test]
    fn miss_then_hit() {
        let c = cache(4);
        assert!(c.get("python, sql").is_none());
        c.put("python, sql".into(), vec![0.1, 0.2]);
        assert_eq!(c.get("python, sql"), Some(vec![0.1, 0.2]));
    }

    #[test]
    fn evicts_least_recently_used() {
        let c = cache(2);
        c.put("a".into(), vec![1.0]);
        c.put("b".into(), vec![2.0]);
        // Touch "a" so "b" becomes the eviction victim.
        assert!(c.get("a").is_some());
        c.put("c".into(), vec![3.0]);
        assert!(c.get("a").is_some());
        assert!(c.get("b").is_none());
        assert!(c.get("c").is_some());
    }

    #[test]
    fn overwrite_replaces_value() {
        let c = cache(2);
        c.put("a".into(), vec![1.0]);
        c.put("a".into(), vec![9.0]);
        assert_eq!(c.get("a"), Some(vec![9.0]));
    }
}
