//! Core orchestration: sequential execution and result analysis.

use std::sync::Arc;
use std::time::Instant;

use fibref_core::calculator::{Calculator, FibError};

use crate::interfaces::CalculationResult;

/// Execute calculations with all given calculators, one after another on the
/// calling thread.
pub fn execute_calculations(
    calculators: &[Arc<dyn Calculator>],
    n: u64,
) -> Vec<CalculationResult> {
    calculators
        .iter()
        .map(|calc| {
            let start = Instant::now();
            let outcome = calc.calculate(n);
            let duration = start.elapsed();
            tracing::debug!(
                algorithm = calc.name(),
                n,
                ok = outcome.is_ok(),
                ?duration,
                "calculation finished"
            );
            CalculationResult {
                algorithm: calc.name().to_string(),
                outcome,
                duration,
            }
        })
        .collect()
}

/// Analyze comparison results for mismatches.
///
/// Failed outcomes are ignored; the successful ones must all be equal.
pub fn analyze_comparison_results(results: &[CalculationResult]) -> Result<(), FibError> {
    let mut values = results.iter().filter_map(|r| r.outcome.as_ref().ok());

    let Some(first_value) = values.next() else {
        return Err(FibError::Calculation("no valid results".into()));
    };

    // Compare all results to the first valid one
    if values.any(|value| value != first_value) {
        return Err(FibError::Mismatch);
    }

    Ok(())
}
