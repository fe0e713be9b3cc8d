//! Calculator factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::calculator::{Calculator, FibError};
use crate::constants::DEFAULT_CAPACITY;
use crate::fixed_buffer::FixedBuffer;
use crate::growable::GrowableSequence;
use crate::memoized::MemoizedRecursion;
use crate::naive::NaiveRecursion;

/// Factory trait for creating calculators.
pub trait CalculatorFactory: Send + Sync {
    /// Get or create a calculator by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, FibError>;

    /// List all available calculator names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
///
/// Aliases resolve to the same cached instance, so a memoized calculator
/// requested as `memo` and as `memoized` shares one cache.
pub struct DefaultFactory {
    capacity: usize,
    cache: RwLock<HashMap<&'static str, Arc<dyn Calculator>>>,
}

impl DefaultFactory {
    /// Create a factory whose fixed-buffer calculator holds `capacity` indices.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn canonical_name(name: &str) -> Result<&'static str, FibError> {
        match name {
            "naive" | "recursive" => Ok("naive"),
            "memo" | "memoized" => Ok("memo"),
            "vector" | "bottom-up" => Ok("vector"),
            "array" | "bottom-up-arr" => Ok("array"),
            _ => Err(FibError::Config(format!("unknown calculator: {name}"))),
        }
    }

    fn create_calculator(&self, canonical: &str) -> Arc<dyn Calculator> {
        match canonical {
            "naive" => Arc::new(NaiveRecursion::new()),
            "memo" => Arc::new(MemoizedRecursion::new()),
            "vector" => Arc::new(GrowableSequence::new()),
            _ => Arc::new(FixedBuffer::new(self.capacity)),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl CalculatorFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, FibError> {
        let canonical = Self::canonical_name(name)?;

        // Check cache first
        if let Some(calc) = self.cache.read().get(canonical) {
            return Ok(Arc::clone(calc));
        }

        // Create and cache
        let mut cache = self.cache.write();
        let calc = cache
            .entry(canonical)
            .or_insert_with(|| self.create_calculator(canonical));
        Ok(Arc::clone(calc))
    }

    fn available(&self) -> Vec<&str> {
        vec!["naive", "memo", "vector", "array"]
    }
}
