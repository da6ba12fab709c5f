//! Network loading and per-run analysis state.
//!
//! [`NeuralNetwork::load`] turns a trained controller's weight file into
//! the ordered per-layer `(ResetMap, ActivationKind)` configuration a
//! reachability engine propagates through, and [`AnalysisContext`] owns
//! that configuration together with the run's branch and timing
//! bookkeeping.

pub mod context;
pub mod loader;

pub use context::AnalysisContext;
pub use loader::{affine_reset, NeuralNetwork, LAYER_OUTPUT_PREFIX};
