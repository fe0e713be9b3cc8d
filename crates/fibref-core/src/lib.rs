//! # fibref-core
//!
//! Four interchangeable ways to compute F(n), with F(0)=0, F(1)=F(2)=1:
//! naive recursion, memoized recursion over a caller-owned cache, bottom-up
//! iteration over a growable sequence, and bottom-up iteration over a
//! fixed-capacity buffer.
//!
//! Values are `BigUint`, so large indices are exact instead of overflowing.

pub mod calculator;
pub mod constants;
pub mod fixed_buffer;
pub mod growable;
pub mod memoized;
pub mod naive;
pub mod registry;

// Re-exports
pub use calculator::{Calculator, FibError};
pub use constants::{exit_codes, DEFAULT_CAPACITY, DEFAULT_N, NAIVE_PRACTICAL_LIMIT};
pub use fixed_buffer::FixedBuffer;
pub use growable::GrowableSequence;
pub use memoized::{fib_memoized, MemoCache, MemoizedRecursion};
pub use naive::NaiveRecursion;
pub use registry::{CalculatorFactory, DefaultFactory};
