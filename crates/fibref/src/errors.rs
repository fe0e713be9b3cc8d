//! Error handling and exit codes.

use fibref_core::calculator::FibError;
use fibref_core::constants::exit_codes;

/// Map a calculation error to its exit code.
///
/// A capacity overrun is reported to the user but still exits successfully.
pub fn handle_error(err: &FibError) -> i32 {
    match err {
        FibError::CapacityExceeded { .. } => exit_codes::SUCCESS,
        FibError::Calculation(_) => exit_codes::ERROR_GENERIC,
        FibError::Config(_) => exit_codes::ERROR_CONFIG,
        FibError::Mismatch => exit_codes::ERROR_MISMATCH,
    }
}

/// Exit code for an application-level error.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<FibError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
