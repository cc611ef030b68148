use lru::LruCache;
use shared_types::{Fingerprint, SearchResponseBody};
use std::num::NonZeroUsize;

/// Bounded response cache keyed by filter fingerprint.
///
/// Least-recently-used entries are evicted once `capacity` is reached. A
/// capacity of zero is treated as one.
pub struct ResponseCache {
    entries: LruCache<Fingerprint, SearchResponseBody>,
}

impl ResponseCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Look up a body, marking it most recently used.
    pub fn get(&mut self, fingerprint: &Fingerprint) -> Option<SearchResponseBody> {
        self.entries.get(fingerprint).cloned()
    }

    /// Presence check that leaves the recency order alone.
    pub fn contains(&self, fingerprint: &Fingerprint) -> bool {
        self.entries.contains(fingerprint)
    }

    /// Store a body. Returns the fingerprint evicted to make room, if any.
    pub fn insert(
        &mut self,
        fingerprint: Fingerprint,
        body: SearchResponseBody,
    ) -> Option<Fingerprint> {
        let key = fingerprint.clone();
        match self.entries.push(fingerprint, body) {
            Some((evicted, _)) if evicted != key => {
                tracing::debug!(evicted = %evicted, "Evicted cached search response");
                Some(evicted)
            }
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }
}
