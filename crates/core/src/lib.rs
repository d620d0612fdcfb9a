//! Litter-size generalization of the Fibonacci rabbit problem.
//!
//! Each mature pair produces `k` new pairs per generation, giving
//! `f(1) = f(2) = 1` and `f(n) = f(n-2) * k + f(n-1)`. The [`Evaluator`]
//! computes it with memoized recursion over a [`MemoCache`]; [`memoize`]
//! wraps any pure single-argument function the same way.

pub mod errors;
pub mod evaluator;
pub mod memo_cache;
pub mod memoize;
pub mod params;

pub use errors::ParamError;
pub use evaluator::{fib, naive, Evaluator};
pub use memo_cache::MemoCache;
pub use memoize::{memoize, Memoized};
pub use params::{Generations, Litter, GENERATIONS_RANGE, LITTER_RANGE};
