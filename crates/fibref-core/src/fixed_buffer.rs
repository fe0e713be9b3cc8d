//! Bottom-up iteration over a fixed-capacity buffer.
//!
//! The buffer starts as `[0, 1, 0, 0, ...]`. Walking i from 0 to n, the value
//! at slot i is added into slots i+1 and i+2, so each slot has received the
//! sum of its two predecessors by the time the walk reaches it.
//!
//! Valid indices are `0..capacity`. The walk writes two slots past n, so the
//! buffer carries [`BUFFER_HEADROOM`] extra slots beyond the capacity.

use std::io::Write;

use num_bigint::BigUint;
use num_traits::One;

use crate::calculator::{Calculator, FibError};
use crate::constants::{BUFFER_HEADROOM, DEFAULT_CAPACITY};

/// Bottom-up evaluator with a buffer allocated once per call at a fixed size.
pub struct FixedBuffer {
    capacity: usize,
}

impl FixedBuffer {
    /// Create an evaluator whose buffer holds `capacity` indices.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Configured capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Compute F(n), rejecting indices that do not fit in the buffer.
    ///
    /// # Example
    /// ```
    /// use fibref_core::fixed_buffer::FixedBuffer;
    ///
    /// let fixed = FixedBuffer::new(1000);
    /// assert_eq!(fixed.try_fibonacci(20).unwrap().to_string(), "6765");
    /// assert!(fixed.try_fibonacci(1000).is_err());
    /// ```
    pub fn try_fibonacci(&self, n: u64) -> Result<BigUint, FibError> {
        let index = match usize::try_from(n) {
            Ok(index) if index < self.capacity => index,
            _ => {
                return Err(FibError::CapacityExceeded {
                    capacity: self.capacity,
                })
            }
        };

        let mut buffer = self.allocate()?;
        buffer[1] = BigUint::one();
        for i in 0..=index {
            let current = buffer[i].clone();
            buffer[i + 1] += &current;
            buffer[i + 2] += current;
        }
        Ok(buffer.swap_remove(index))
    }

    /// Zeroed buffer of `capacity + BUFFER_HEADROOM` slots.
    ///
    /// A capacity whose buffer cannot be sized or allocated is a
    /// configuration error rather than an abort.
    fn allocate(&self) -> Result<Vec<BigUint>, FibError> {
        let slots = self.capacity.checked_add(BUFFER_HEADROOM).ok_or_else(|| {
            FibError::Config(format!("buffer capacity {} is too large", self.capacity))
        })?;
        let mut buffer = Vec::new();
        buffer.try_reserve_exact(slots).map_err(|err| {
            FibError::Config(format!(
                "cannot allocate buffer for capacity {}: {err}",
                self.capacity
            ))
        })?;
        buffer.resize(slots, BigUint::ZERO);
        Ok(buffer)
    }

    /// Compute F(n), or report the capacity overrun on `out` and return 0.
    ///
    /// The returned 0 is a sentinel: it is only distinguishable from F(0) if
    /// the caller validated `n` beforehand. Prefer [`Self::try_fibonacci`].
    pub fn fibonacci_or_sentinel<W: Write>(&self, n: u64, out: &mut W) -> BigUint {
        match self.try_fibonacci(n) {
            Ok(value) => value,
            Err(err) => {
                if let Err(io_err) = write!(out, "{err}").and_then(|()| out.flush()) {
                    tracing::warn!(error = %io_err, "failed to write capacity notice");
                }
                BigUint::ZERO
            }
        }
    }
}

impl Default for FixedBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Calculator for FixedBuffer {
    fn calculate(&self, n: u64) -> Result<BigUint, FibError> {
        tracing::debug!(n, capacity = self.capacity, "bottom-up over fixed buffer");
        self.try_fibonacci(n)
    }

    fn name(&self) -> &str {
        "FixedBuffer"
    }
}
