//! URL Dedup Cache
//!
//! Bounded LRU over URLs already submitted for classification. The
//! `insert_if_absent` call does the membership check and the insert under a
//! single lock, which is the invariant that guarantees at most one in-flight
//! classification per URL: the orchestrator calls it before any await point.
//!
//! Eviction is plain LRU at a fixed capacity; there is no wholesale clear.

use std::collections::{HashSet, VecDeque};

use parking_lot::Mutex;

// ============================================================================
// CACHE
// ============================================================================

pub struct DedupCache {
    inner: Mutex<Inner>,
    capacity: usize,
}

struct Inner {
    seen: HashSet<String>,
    order: VecDeque<String>,
}

impl DedupCache {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0);
        Self {
            inner: Mutex::new(Inner {
                seen: HashSet::with_capacity(capacity),
                order: VecDeque::with_capacity(capacity),
            }),
            capacity,
        }
    }

    /// Atomically check membership and insert. Returns true if the URL was
    /// absent (caller owns the classification), false on a duplicate.
    pub fn insert_if_absent(&self, url: &str) -> bool {
        let mut inner = self.inner.lock();

        if inner.seen.contains(url) {
            // Refresh recency so hot URLs are not evicted under pressure
            if let Some(pos) = inner.order.iter().position(|u| u == url) {
                let entry = inner.order.remove(pos).unwrap();
                inner.order.push_back(entry);
            }
            return false;
        }

        if inner.seen.len() >= self.capacity {
            if let Some(oldest) = inner.order.pop_front() {
                inner.seen.remove(&oldest);
            }
        }

        inner.seen.insert(url.to_string());
        inner.order.push_back(url.to_string());
        true
    }

    pub fn contains(&self, url: &str) -> bool {
        self.inner.lock().seen.contains(url)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.seen.clear();
        inner.order.clear();
    }
}

// ============================================================================
// TESTS
// ============================================================================
