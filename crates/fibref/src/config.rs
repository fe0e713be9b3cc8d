//! Application configuration from CLI flags and environment.

use clap::Parser;

use fibref_core::constants::{DEFAULT_CAPACITY, DEFAULT_N, MAX_CAPACITY};

/// fibref: reference Fibonacci evaluator.
///
/// Without arguments it computes F(20) with the fixed-capacity buffer and
/// prints the bare value.
#[derive(Parser, Debug)]
#[command(name = "fibref", version, about)]
pub struct AppConfig {
    /// Fibonacci index to compute.
    ///
    /// The memo strategy recurses once per index and can exhaust the stack
    /// for indices in the hundreds of thousands.
    #[arg(short, long, default_value_t = DEFAULT_N, env = "FIBREF_N")]
    pub n: u64,

    /// Strategy to use: naive, memo, vector, array, or all.
    ///
    /// naive is exponential and memo is recursive; prefer vector or array
    /// for large indices.
    #[arg(long, default_value = "array")]
    pub algo: String,

    /// Number of indices the fixed-capacity buffer can hold (at most 1000000).
    #[arg(
        long,
        default_value_t = DEFAULT_CAPACITY,
        env = "FIBREF_CAPACITY",
        value_parser = parse_capacity
    )]
    pub capacity: usize,

    /// Print a labelled report instead of the bare value.
    #[arg(short, long)]
    pub verbose: bool,

    /// Add bit and digit counts to the verbose report.
    #[arg(short, long)]
    pub details: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

/// Parse a buffer capacity, bounded by [`MAX_CAPACITY`].
fn parse_capacity(s: &str) -> Result<usize, String> {
    let capacity: usize = s
        .trim()
        .parse()
        .map_err(|e| format!("invalid capacity: {e}"))?;
    if capacity > MAX_CAPACITY {
        return Err(format!("capacity {capacity} exceeds the maximum of {MAX_CAPACITY}"));
    }
    Ok(capacity)
}
