//! Bottom-up iteration over a growable sequence.
//!
//! The sequence is seeded with F(0) and F(1) and extended by the sum of its
//! last two elements until it reaches index n. Every call starts over.

use num_bigint::BigUint;
use num_traits::One;

use crate::calculator::{Calculator, FibError};

/// Bottom-up evaluator backed by a `Vec` that grows as needed.
pub struct GrowableSequence;

impl GrowableSequence {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Compute F(n) by building the sequence up to index n.
    #[must_use]
    pub fn fibonacci(&self, n: u64) -> BigUint {
        // An index past usize::MAX could never be allocated anyway.
        let index = usize::try_from(n).unwrap_or(usize::MAX);
        let mut sequence = vec![BigUint::ZERO, BigUint::one()];
        while sequence.len() <= index {
            let len = sequence.len();
            let next = &sequence[len - 1] + &sequence[len - 2];
            sequence.push(next);
        }
        sequence.swap_remove(index)
    }
}

impl Default for GrowableSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator for GrowableSequence {
    fn calculate(&self, n: u64) -> Result<BigUint, FibError> {
        tracing::debug!(n, "bottom-up over growable sequence");
        Ok(self.fibonacci(n))
    }

    fn name(&self) -> &str {
        "GrowableSequence"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_are_returned_directly() {
        let seq = GrowableSequence::new();
        assert_eq!(seq.fibonacci(0), BigUint::ZERO);
        assert_eq!(seq.fibonacci(1), BigUint::from(1u32));
        assert_eq!(seq.fibonacci(2), BigUint::from(1u32));
    }

    #[test]
    fn known_values() {
        let seq = GrowableSequence::new();
        assert_eq!(seq.fibonacci(10), BigUint::from(55u32));
        assert_eq!(seq.fibonacci(20), BigUint::from(6765u32));
    }

    #[test]
    fn exact_beyond_u64() {
        let seq = GrowableSequence::new();
        assert_eq!(seq.fibonacci(94).to_string(), "19740274219868223167");
        assert_eq!(seq.fibonacci(100).to_string(), "354224848179261915075");
    }

    #[test]
    fn calls_are_independent() {
        let seq = GrowableSequence::default();
        assert_eq!(seq.calculate(15), Ok(BigUint::from(610u32)));
        assert_eq!(seq.calculate(5), Ok(BigUint::from(5u32)));
        assert_eq!(seq.calculate(15), Ok(BigUint::from(610u32)));
        assert_eq!(seq.name(), "GrowableSequence");
    }
}
