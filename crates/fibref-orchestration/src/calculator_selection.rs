//! Calculator selection logic.

use std::sync::Arc;

use fibref_core::calculator::{Calculator, FibError};
use fibref_core::constants::NAIVE_PRACTICAL_LIMIT;
use fibref_core::registry::CalculatorFactory;

/// Get calculators to run based on algorithm selection.
///
/// `all` leaves the naive recursion out once `n` is past the point where it
/// would finish in reasonable time.
pub fn get_calculators_to_run(
    algo: &str,
    n: u64,
    factory: &dyn CalculatorFactory,
) -> Result<Vec<Arc<dyn Calculator>>, FibError> {
    match algo {
        "all" => {
            let mut calcs = Vec::new();
            for name in factory.available() {
                if name == "naive" && n > NAIVE_PRACTICAL_LIMIT {
                    tracing::info!(
                        n,
                        limit = NAIVE_PRACTICAL_LIMIT,
                        "skipping naive recursion for large n"
                    );
                    continue;
                }
                calcs.push(factory.get(name)?);
            }
            Ok(calcs)
        }
        name => {
            let calc = factory.get(name)?;
            Ok(vec![calc])
        }
    }
}
