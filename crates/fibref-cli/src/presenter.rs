//! CLI result presenter.
//!
//! Plain mode writes nothing but the decimal value, without a trailing
//! newline, so the output can be compared byte for byte.

use std::io::{self, Write};
use std::time::Duration;

use num_bigint::BigUint;

use fibref_core::calculator::FibError;
use fibref_orchestration::interfaces::{CalculationResult, ResultPresenter};

use crate::output::{format_comparison, format_report};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    details: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, details: bool) -> Self {
        Self { verbose, details }
    }

    /// Whether labelled reports are printed instead of bare values.
    #[must_use]
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

fn write_stdout(text: &str) {
    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush()) {
        tracing::warn!(error = %err, "failed to write to stdout");
    }
}

impl CLIResultPresenter {
    /// Exact text written for a computed value.
    #[must_use]
    pub fn result_text(
        &self,
        algorithm: &str,
        n: u64,
        result: &BigUint,
        duration: Duration,
    ) -> String {
        if self.verbose {
            format_report(algorithm, n, result, duration, self.details)
        } else {
            result.to_string()
        }
    }

    /// Exact text written for a rejected index.
    #[must_use]
    pub fn capacity_text(&self, error: &FibError) -> String {
        if self.verbose {
            format!("{error}\n")
        } else {
            error.to_string()
        }
    }

    /// Comparison table, shown only in verbose mode.
    #[must_use]
    pub fn comparison_text(&self, results: &[CalculationResult]) -> Option<String> {
        self.verbose.then(|| format_comparison(results))
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, algorithm: &str, n: u64, result: &BigUint, duration: Duration) {
        write_stdout(&self.result_text(algorithm, n, result, duration));
    }

    fn present_comparison(&self, results: &[CalculationResult]) {
        if let Some(table) = self.comparison_text(results) {
            write_stdout(&table);
        }
    }

    fn present_capacity_exceeded(&self, error: &FibError) {
        write_stdout(&self.capacity_text(error));
    }
}
