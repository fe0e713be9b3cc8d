//! Orchestration interfaces.

use std::time::Duration;

use num_bigint::BigUint;

use fibref_core::calculator::FibError;

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a calculation result.
    fn present_result(&self, algorithm: &str, n: u64, result: &BigUint, duration: Duration);

    /// Present a comparison of several results.
    fn present_comparison(&self, results: &[CalculationResult]);

    /// Present a rejected index. This is a notice, not a failure.
    fn present_capacity_exceeded(&self, error: &FibError);
}

/// Result of a single calculation.
#[derive(Debug, Clone)]
pub struct CalculationResult {
    /// Algorithm name.
    pub algorithm: String,
    /// The computed value or a structured error.
    pub outcome: Result<BigUint, FibError>,
    /// Computation duration.
    pub duration: Duration,
}

impl CalculationResult {
    /// Whether the calculator rejected the index because of its capacity.
    #[must_use]
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self.outcome, Err(FibError::CapacityExceeded { .. }))
    }
}
