use thiserror::Error;

/// Errors raised while resolving projection codes or transforming coordinates.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjError {
    #[error("Unknown projection code: {0}")]
    UnknownProjection(String),

    #[error("Invalid PROJ.4 definition for {code}: {reason}")]
    InvalidDefinition { code: String, reason: String },

    #[error("Failed to transform ({x}, {y}) from {from} to {to}: {reason}")]
    Transform { from: String, to: String, x: f64, y: f64, reason: String },
}
