//! Activation kinds supported by the enclosure builders.

use serde::{Deserialize, Serialize};

/// Per-layer activation function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationKind {
    Linear,
    Sigmoid,
    Swish,
    Relu,
    Tanh,
}

impl ActivationKind {
    /// Map a weight-file label to an activation kind by case-insensitive
    /// prefix. Unrecognized labels fall back to `Linear`; callers that
    /// want to surface that should compare the label themselves.
    pub fn from_label(label: &str) -> Self {
        let lower = label.to_ascii_lowercase();
        if lower.starts_with("tanh") {
            ActivationKind::Tanh
        } else if lower.starts_with("sigmoid") {
            ActivationKind::Sigmoid
        } else if lower.starts_with("swish") {
            ActivationKind::Swish
        } else if lower.starts_with("relu") {
            ActivationKind::Relu
        } else {
            ActivationKind::Linear
        }
    }
}
