use std::{collections::HashMap, hash::Hash};

/// Write-once cache of computed values keyed by function input.
///
/// Entries are never evicted or overwritten, so a key always maps to the
/// first value stored for it.
#[derive(Debug, Clone)]
pub struct MemoCache<K, V> {
    entries: HashMap<K, V>,
    hits: usize,
    misses: usize,
}

impl<K, V> Default for MemoCache<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }
}

impl<K: Eq + Hash, V: Clone> MemoCache<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(cap),
            hits: 0,
            misses: 0,
        }
    }

    /// Look up a stored value, counting the lookup as a hit or a miss.
    pub fn get(&mut self, key: &K) -> Option<V> {
        match self.entries.get(key) {
            Some(v) => {
                self.hits += 1;
                Some(v.clone())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Store `value` under `key` unless the key is already set. Returns the value now held.
    pub fn put(&mut self, key: K, value: V) -> V {
        self.entries.entry(key).or_insert(value).clone()
    }

    /// Return the cached value for `key`, or compute, store and return it.
    ///
    /// `compute` receives the cache itself so it can resolve the values it
    /// depends on through the same entries. The result is stored only after
    /// `compute` returns.
    pub fn resolve<F>(&mut self, key: K, compute: F) -> V
    where
        F: FnOnce(&mut Self, &K) -> V,
    {
        if let Some(v) = self.get(&key) {
            return v;
        }
        let value = compute(self, &key);
        self.put(key, value)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }
}
