use thiserror::Error;

/// Errors raised while cutting a cross-section.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SectionError {
    #[error("Invalid section line: {0}")]
    InvalidLine(String),

    #[error("Block {index} has non-numeric {field}")]
    MissingGeometry { index: usize, field: &'static str },

    #[error("Malformed ring for block {index}: {reason}")]
    MalformedRing { index: usize, reason: String },

    #[error("Pit feature {index} has no numeric level")]
    MissingLevel { index: usize },

    #[error("Elevation profile needs at least 2 samples, got {0}")]
    InvalidSampleCount(usize),
}
