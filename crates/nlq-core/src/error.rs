// Compile errors
// Genuine faults only. "Nothing matched" is Ok(None) in the extractors, never an error.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("{facet} value '{digits}' is out of range")]
    NumberOutOfRange { facet: &'static str, digits: String },

    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CompileError {
    pub fn out_of_range(facet: &'static str, digits: &str) -> Self {
        Self::NumberOutOfRange {
            facet,
            digits: digits.to_string(),
        }
    }
}
