//! Naive top-down recursion.
//!
//! F(n) = F(n-1) + F(n-2) with two recursive calls per level, so the running
//! time grows exponentially with n. It is the obviously correct baseline the
//! other strategies are measured against; beyond n ≈ 35 it stops being
//! practical. The recursion is n levels deep and cannot be interrupted.

use num_bigint::BigUint;
use num_traits::One;

use crate::calculator::{Calculator, FibError};

/// Plain recursive evaluator without any caching.
pub struct NaiveRecursion;

impl NaiveRecursion {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Compute F(n) by recursion on the two preceding terms.
    #[must_use]
    pub fn fibonacci(&self, n: u64) -> BigUint {
        fib_naive(n)
    }
}

impl Default for NaiveRecursion {
    fn default() -> Self {
        Self::new()
    }
}

fn fib_naive(n: u64) -> BigUint {
    match n {
        0 => BigUint::ZERO,
        1 | 2 => BigUint::one(),
        _ => fib_naive(n - 1) + fib_naive(n - 2),
    }
}

impl Calculator for NaiveRecursion {
    fn calculate(&self, n: u64) -> Result<BigUint, FibError> {
        tracing::debug!(n, "naive recursion");
        Ok(self.fibonacci(n))
    }

    fn name(&self) -> &str {
        "NaiveRecursion"
    }
}
