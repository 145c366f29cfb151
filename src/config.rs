use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// Tuple size used when the caller does not supply one.
pub const DEFAULT_TUPLE_SIZE: usize = 3;

/// Configuration for a single document comparison.
///
/// Cheap to clone and serde-friendly so it can be embedded in higher-level
/// configs or passed across process boundaries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompareConfig {
    /// Width of the sliding N-gram window.
    #[serde(default = "CompareConfig::default_tuple_size")]
    pub tuple_size: usize,
}

impl CompareConfig {
    pub(crate) fn default_tuple_size() -> usize {
        DEFAULT_TUPLE_SIZE
    }

    /// Validate the configuration before running a comparison.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.tuple_size == 0 {
            return Err(PipelineError::InvalidConfig(
                "tuple_size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            tuple_size: Self::default_tuple_size(),
        }
    }
}
