//! Memoized top-down recursion.
//!
//! Same recurrence as the naive strategy, but every index that is requested
//! is recorded in a cache owned by the caller. Calls that share a cache never
//! recompute an index they have already seen, which brings the cost down to
//! O(n) time and O(n) storage amortized over all calls on that cache.
//!
//! The cache only grows. Base cases are stored as well, so after computing
//! F(n) for n ≥ 1 the cache holds every index in `1..=n`.

use std::collections::HashMap;

use num_bigint::BigUint;
use num_traits::One;
use parking_lot::Mutex;

use crate::calculator::{Calculator, FibError};

/// Storage for previously computed terms, keyed by index.
pub trait MemoCache {
    /// Look up a previously stored F(n).
    fn lookup(&self, n: u64) -> Option<&BigUint>;

    /// Record F(n).
    fn store(&mut self, n: u64, value: BigUint);

    /// Number of stored indices.
    fn len(&self) -> usize;

    /// Whether nothing has been stored yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MemoCache for HashMap<u64, BigUint> {
    fn lookup(&self, n: u64) -> Option<&BigUint> {
        self.get(&n)
    }

    fn store(&mut self, n: u64, value: BigUint) {
        self.insert(n, value);
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

/// Compute F(n), reusing and extending `cache`.
///
/// # Example
/// ```
/// use std::collections::HashMap;
/// use num_bigint::BigUint;
/// use fibref_core::memoized::fib_memoized;
///
/// let mut cache: HashMap<u64, BigUint> = HashMap::new();
/// assert_eq!(fib_memoized(10, &mut cache).to_string(), "55");
/// assert!(cache.contains_key(&10u64));
/// ```
pub fn fib_memoized<C: MemoCache + ?Sized>(n: u64, cache: &mut C) -> BigUint {
    if let Some(value) = cache.lookup(n) {
        return value.clone();
    }

    let value = match n {
        0 => BigUint::ZERO,
        1 | 2 => BigUint::one(),
        _ => {
            let prev = fib_memoized(n - 1, cache);
            let prev2 = fib_memoized(n - 2, cache);
            prev + prev2
        }
    };
    cache.store(n, value.clone());
    value
}

/// Calculator form of the memoized strategy.
///
/// Owns its cache behind a mutex that is held for the whole call, so the
/// calculator can be shared across threads while each computation still has
/// exclusive access to the cache.
pub struct MemoizedRecursion {
    cache: Mutex<HashMap<u64, BigUint>>,
}

impl MemoizedRecursion {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Compute F(n) against the owned cache.
    pub fn fibonacci(&self, n: u64) -> BigUint {
        let mut cache = self.cache.lock();
        let before = cache.len();
        let value = fib_memoized(n, &mut *cache);
        tracing::debug!(
            n,
            cached = cache.len(),
            added = cache.len() - before,
            "memoized recursion"
        );
        value
    }

    /// Number of indices currently held in the cache.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.cache.lock().len()
    }
}

impl Default for MemoizedRecursion {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator for MemoizedRecursion {
    fn calculate(&self, n: u64) -> Result<BigUint, FibError> {
        Ok(self.fibonacci(n))
    }

    fn name(&self) -> &str {
        "MemoizedRecursion"
    }
}
