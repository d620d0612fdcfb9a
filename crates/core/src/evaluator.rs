use tracing::{debug, trace};

use crate::{
    memo_cache::MemoCache,
    params::{Generations, Litter, GENERATIONS_RANGE},
};

/// Evaluates the litter recurrence `f(1) = f(2) = 1`, `f(n) = f(n-2) * k + f(n-1)`
/// for a litter size `k` fixed at construction.
///
/// Every recursive step goes through the evaluator's own cache, so each
/// generation index is computed at most once per evaluator.
#[derive(Debug, Clone)]
pub struct Evaluator {
    litter: u64,
    cache: MemoCache<u32, u64>,
}

impl Evaluator {
    pub fn new(litter: Litter) -> Self {
        Self {
            litter: u64::from(litter.get()),
            cache: MemoCache::with_capacity(*GENERATIONS_RANGE.end() as usize),
        }
    }

    pub fn evaluate(&mut self, generations: Generations) -> u64 {
        let n = generations.get();
        debug!(generations = n, litter = self.litter, "evaluating recurrence");
        let value = resolve(&mut self.cache, self.litter, n);
        debug!(
            generations = n,
            value,
            cached = self.cache.len(),
            "recurrence evaluated"
        );
        value
    }

    /// Values for generations `1..=n`, in order.
    pub fn sequence(&mut self, generations: Generations) -> Vec<u64> {
        (1..=generations.get())
            .map(|i| resolve(&mut self.cache, self.litter, i))
            .collect()
    }

    pub fn cache(&self) -> &MemoCache<u32, u64> {
        &self.cache
    }
}

// recursion helper: sub-results are looked up and stored in the caller's cache
fn resolve(cache: &mut MemoCache<u32, u64>, litter: u64, n: u32) -> u64 {
    cache.resolve(n, |cache, &n| {
        trace!(n, "cache miss");
        if n <= 2 {
            1
        } else {
            resolve(cache, litter, n - 2) * litter + resolve(cache, litter, n - 1)
        }
    })
}

/// Evaluate the recurrence once with a fresh evaluator.
pub fn fib(generations: Generations, litter: Litter) -> u64 {
    Evaluator::new(litter).evaluate(generations)
}

/// Unmemoized recursion, exponential in `n`. Reference for checking [`Evaluator`].
pub fn naive(n: u32, litter: u64) -> u64 {
    if n <= 2 {
        1
    } else {
        naive(n - 2, litter) * litter + naive(n - 1, litter)
    }
}
