//! Property-based tests for the four strategies.
//!
//! These exercise the `Calculator` trait of each strategy side by side.

use std::collections::HashMap;

use num_bigint::BigUint;
use proptest::prelude::*;

use fibref_core::calculator::Calculator;
use fibref_core::fixed_buffer::FixedBuffer;
use fibref_core::growable::GrowableSequence;
use fibref_core::memoized::{fib_memoized, MemoizedRecursion};
use fibref_core::naive::NaiveRecursion;

fn all_strategies() -> Vec<Box<dyn Calculator>> {
    vec![
        Box::new(NaiveRecursion::new()),
        Box::new(MemoizedRecursion::new()),
        Box::new(GrowableSequence::new()),
        Box::new(FixedBuffer::default()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// For random n in [3..30], all four strategies agree.
    #[test]
    fn all_strategies_agree(n in 3u64..30) {
        let naive = NaiveRecursion::new().fibonacci(n);
        for calc in all_strategies() {
            let value = calc.calculate(n).unwrap();
            prop_assert_eq!(&value, &naive, "{} != NaiveRecursion at n={}", calc.name(), n);
        }
    }

    /// F(n) + F(n+1) == F(n+2) for random n.
    #[test]
    fn fibonacci_addition_property(n in 0u64..900) {
        let seq = GrowableSequence::new();
        let fn_val = seq.fibonacci(n);
        let fn1_val = seq.fibonacci(n + 1);
        let fn2_val = seq.fibonacci(n + 2);
        prop_assert_eq!(&fn_val + &fn1_val, fn2_val, "F({}) + F({}) != F({})", n, n + 1, n + 2);
    }

    /// Bottom-up strategies agree wherever the fixed buffer accepts n.
    #[test]
    fn bottom_up_strategies_agree(n in 0u64..1000) {
        let vector = GrowableSequence::new().fibonacci(n);
        let array = FixedBuffer::default().try_fibonacci(n).unwrap();
        prop_assert_eq!(vector, array, "F({}) vector != array", n);
    }

    /// A shared cache never changes the value, only the work done.
    #[test]
    fn memoized_is_idempotent(requests in proptest::collection::vec(0u64..200, 1..10)) {
        let mut cache: HashMap<u64, BigUint> = HashMap::new();
        let seq = GrowableSequence::new();
        for n in requests {
            let first = fib_memoized(n, &mut cache);
            let second = fib_memoized(n, &mut cache);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first, seq.fibonacci(n), "memoized F({}) wrong", n);
        }
    }

    /// Indices at or beyond the capacity are rejected for any capacity.
    #[test]
    fn fixed_buffer_respects_capacity(capacity in 0usize..64, n in 0u64..128) {
        let fixed = FixedBuffer::new(capacity);
        let fits = usize::try_from(n).unwrap() < capacity;
        prop_assert_eq!(fixed.try_fibonacci(n).is_ok(), fits);
    }
}

/// F(0) = 0, F(1) = 1, F(2) = 1 for all strategies.
#[test]
fn base_cases_all_strategies() {
    for calc in all_strategies() {
        assert_eq!(calc.calculate(0).unwrap(), BigUint::ZERO, "{} F(0)", calc.name());
        assert_eq!(calc.calculate(1).unwrap(), BigUint::from(1u32), "{} F(1)", calc.name());
        assert_eq!(calc.calculate(2).unwrap(), BigUint::from(1u32), "{} F(2)", calc.name());
    }
}

/// Reference scenarios: F(10) = 55 and F(20) = 6765 everywhere.
#[test]
fn reference_values_all_strategies() {
    for calc in all_strategies() {
        assert_eq!(calc.calculate(10).unwrap(), BigUint::from(55u32), "{} F(10)", calc.name());
        assert_eq!(calc.calculate(20).unwrap(), BigUint::from(6765u32), "{} F(20)", calc.name());
    }
}

/// Exhaustive agreement on the shared practical range.
#[test]
fn agreement_on_shared_range() {
    let strategies = all_strategies();
    for n in 3..30 {
        let expected = strategies[0].calculate(n).unwrap();
        for calc in &strategies[1..] {
            assert_eq!(calc.calculate(n).unwrap(), expected, "{} F({n})", calc.name());
        }
    }
}

/// F(94) is the first value past u64; the non-naive strategies stay exact.
#[test]
fn boundary_94_is_exact() {
    let mut cache: HashMap<u64, BigUint> = HashMap::new();
    let expected = "19740274219868223167";
    assert_eq!(fib_memoized(94, &mut cache).to_string(), expected);
    assert_eq!(GrowableSequence::new().fibonacci(94).to_string(), expected);
    assert_eq!(FixedBuffer::default().try_fibonacci(94).unwrap().to_string(), expected);
}
