//! Application entry point and dispatch.

use anyhow::Result;

use fibref_cli::presenter::CLIResultPresenter;
use fibref_core::calculator::FibError;
use fibref_core::registry::DefaultFactory;
use fibref_orchestration::calculator_selection::get_calculators_to_run;
use fibref_orchestration::interfaces::{CalculationResult, ResultPresenter};
use fibref_orchestration::orchestrator::{analyze_comparison_results, execute_calculations};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    let factory = DefaultFactory::new(config.capacity);
    let calculators = get_calculators_to_run(&config.algo, config.n, &factory)?;
    tracing::debug!(
        n = config.n,
        algo = %config.algo,
        capacity = config.capacity,
        calculators = calculators.len(),
        "starting"
    );

    let results = execute_calculations(&calculators, config.n);

    // Cross-check before printing anything
    if results.len() > 1 {
        analyze_comparison_results(&results)?;
    }
    if let Some(err) = first_failure(&results) {
        return Err(err.clone().into());
    }

    let presenter = CLIResultPresenter::new(config.verbose, config.details);
    present_results(&presenter, config.n, &results);
    Ok(())
}

/// First error that is more than a capacity notice.
fn first_failure(results: &[CalculationResult]) -> Option<&FibError> {
    results.iter().find_map(|r| match &r.outcome {
        Err(FibError::CapacityExceeded { .. }) | Ok(_) => None,
        Err(err) => Some(err),
    })
}

fn present_results(presenter: &CLIResultPresenter, n: u64, results: &[CalculationResult]) {
    if presenter.is_verbose() {
        for result in results {
            present_one(presenter, n, result);
        }
        if results.len() > 1 {
            presenter.present_comparison(results);
        }
        return;
    }

    // Plain mode prints a single value: the agreed one, or the notice when
    // no calculator could produce it.
    if let Some(result) = results
        .iter()
        .find(|r| r.outcome.is_ok())
        .or_else(|| results.first())
    {
        present_one(presenter, n, result);
    }
}

fn present_one(presenter: &CLIResultPresenter, n: u64, result: &CalculationResult) {
    match &result.outcome {
        Ok(value) => presenter.present_result(&result.algorithm, n, value, result.duration),
        Err(err) => {
            tracing::info!(algorithm = %result.algorithm, n, "index rejected: {err}");
            presenter.present_capacity_exceeded(err);
        }
    }
}
