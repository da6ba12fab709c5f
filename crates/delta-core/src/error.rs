//! Workspace error type.

use thiserror::Error;

/// Errors surfaced by δ-TAYLOR. The numeric core is total and never
/// fails; everything here comes from model loading.
#[derive(Debug, Error)]
pub enum DeltaError {
    #[error("model loading failed: {0}")]
    ModelLoad(String),

    #[error("layer {layer}: missing {what}")]
    MissingLayerData { layer: usize, what: &'static str },

    #[error("layer {layer}: expected {expected} entries, got {got}")]
    ShapeMismatch {
        layer: usize,
        expected: usize,
        got: usize,
    },

    #[error("network references undeclared variable `{0}`")]
    UnknownVariable(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DeltaError>;
