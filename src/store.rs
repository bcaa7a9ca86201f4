use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::Arc;

use crate::code;
use crate::models::Mapping;

/// Thread-safe in-memory store mapping short code -> target URL.
///
/// Backed by a DashMap so reads are concurrent and lock-free for most cases.
/// State lives for the process lifetime only; there is no persistence.
/// Constructed explicitly and carried in the shared application state, so
/// tests can build isolated instances.
#[derive(Clone, Debug)]
pub struct LinkStore {
    inner: Arc<DashMap<String, String>>,
}

impl LinkStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
        }
    }

    /// Shorten a target URL and record the mapping.
    ///
    /// The code is derived from the target itself, so submitting the same
    /// target twice writes the same entry twice. A distinct target that
    /// hashes to an existing code silently overwrites the prior entry
    /// (last write wins); creation never fails.
    pub fn create(&self, target: impl Into<String>) -> Mapping {
        let target = target.into();
        let code = code::generate(&target);
        self.inner.insert(code.clone(), target.clone());
        Mapping { code, target }
    }

    /// Look up a short code. Exact match only; returns a clone of the target
    /// URL if present.
    pub fn resolve(&self, code: &str) -> Option<String> {
        self.inner.get(code).map(|v| v.clone())
    }

    /// Snapshot of all current mappings. Insertion order is not preserved.
    pub fn list(&self) -> HashMap<String, String> {
        self.inner
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    /// Number of mappings currently held.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Default for LinkStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Two distinct URLs with the same FNV-1 32-bit hash (b91a3175).
    const COLLIDING_A: &str = "http://x.io/zhicmaol";
    const COLLIDING_B: &str = "http://x.io/vu8vwnf9";

    #[test]
    fn round_trip() {
        let store = LinkStore::new();
        let mapping = store.create("http://example.com");

        assert_eq!(mapping.target, "http://example.com");
        assert_eq!(
            store.resolve(&mapping.code).as_deref(),
            Some("http://example.com")
        );
    }

    #[test]
    fn empty_target_is_a_valid_mapping() {
        let store = LinkStore::new();
        let mapping = store.create("");

        assert_eq!(mapping.code, "811c9dc5");
        assert_eq!(store.resolve(&mapping.code).as_deref(), Some(""));
    }

    #[test]
    fn unknown_code_resolves_to_none() {
        let store = LinkStore::new();
        assert_eq!(store.resolve("0000"), None);
    }

    #[test]
    fn empty_store_lists_empty() {
        let store = LinkStore::new();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
    }

    #[test]
    fn create_is_idempotent() {
        let store = LinkStore::new();
        let first = store.create("https://example.org/a");
        let second = store.create("https://example.org/a");

        assert_eq!(first, second);
        assert_eq!(store.len(), 1);

        let expected: HashMap<_, _> =
            [(first.code.clone(), first.target.clone())].into();
        assert_eq!(store.list(), expected);
    }

    #[test]
    fn collision_overwrite_is_last_write_wins() {
        assert_eq!(code::generate(COLLIDING_A), code::generate(COLLIDING_B));

        let store = LinkStore::new();
        let a = store.create(COLLIDING_A);
        let b = store.create(COLLIDING_B);

        assert_eq!(a.code, b.code);
        assert_eq!(store.resolve(&a.code).as_deref(), Some(COLLIDING_B));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn concurrent_creates_do_not_corrupt() {
        let store = LinkStore::new();

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for i in 0..64 {
                        store.create(format!("https://example.com/{t}/{i}"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // The chosen targets have no hash collisions among themselves, so
        // every mapping must survive with its own target.
        assert_eq!(store.len(), 512);
        for t in 0..8 {
            for i in 0..64 {
                let target = format!("https://example.com/{t}/{i}");
                assert_eq!(store.resolve(&code::generate(&target)), Some(target));
            }
        }
    }
}
