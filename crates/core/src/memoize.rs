use std::{hash::Hash, marker::PhantomData};

use crate::memo_cache::MemoCache;

/// A single-argument function paired with its own result cache.
pub struct Memoized<A, R, F> {
    f: F,
    cache: MemoCache<A, R>,
    _marker: PhantomData<fn(A) -> R>,
}

/// Wrap a pure function so each distinct argument is computed only once.
pub fn memoize<A, R, F>(f: F) -> Memoized<A, R, F>
where
    A: Eq + Hash + Clone,
    R: Clone,
    F: FnMut(A) -> R,
{
    Memoized {
        f,
        cache: MemoCache::new(),
        _marker: PhantomData,
    }
}

impl<A, R, F> Memoized<A, R, F>
where
    A: Eq + Hash + Clone,
    R: Clone,
    F: FnMut(A) -> R,
{
    pub fn call(&mut self, x: A) -> R {
        if let Some(v) = self.cache.get(&x) {
            return v;
        }
        let value = (self.f)(x.clone());
        self.cache.put(x, value)
    }

    pub fn cache(&self) -> &MemoCache<A, R> {
        &self.cache
    }
}
