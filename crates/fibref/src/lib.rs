//! fibref library: application logic for the reference Fibonacci evaluator.

pub mod app;
pub mod config;
pub mod errors;
