//! Constants shared by the strategies and the command-line front end.

/// Default number of slots in the fixed-capacity buffer.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Largest capacity the executable accepts for the fixed-capacity buffer.
pub const MAX_CAPACITY: usize = 1_000_000;

/// Extra slots past the capacity so the two forward writes for the last
/// valid index stay inside the buffer.
pub const BUFFER_HEADROOM: usize = 2;

/// Index up to which the naive recursion finishes in reasonable time.
///
/// Beyond this the `all` selection leaves the naive strategy out.
pub const NAIVE_PRACTICAL_LIMIT: u64 = 35;

/// Index the executable evaluates when none is given.
pub const DEFAULT_N: u64 = 20;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution, including a reported capacity overrun.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Strategy results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
