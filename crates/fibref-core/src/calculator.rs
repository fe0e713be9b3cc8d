//! The `Calculator` trait and the error type shared by every strategy.
//!
//! Each strategy also exposes its own inherent method with the natural
//! signature (`fibonacci`, `try_fibonacci`, ...). `Calculator` is the
//! uniform face consumed by the factory and by orchestration.

use num_bigint::BigUint;

/// Error type for Fibonacci calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// The requested index does not fit in the fixed-capacity buffer.
    #[error("The input is too large, please input a number under: {capacity}.")]
    CapacityExceeded {
        /// Configured buffer capacity.
        capacity: usize,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A calculation error occurred.
    #[error("calculation error: {0}")]
    Calculation(String),

    /// Results from different strategies don't match.
    #[error("result mismatch between strategies")]
    Mismatch,
}

/// Public trait for Fibonacci calculators, consumed by orchestration.
pub trait Calculator: Send + Sync {
    /// Calculate F(n).
    fn calculate(&self, n: u64) -> Result<BigUint, FibError>;

    /// Get the name of this calculator.
    fn name(&self) -> &str;
}
