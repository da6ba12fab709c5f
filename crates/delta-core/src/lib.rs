//! Core types for δ-TAYLOR neural-network enclosure construction.
//!
//! This crate provides the foundational data model shared by the
//! approximation engine and the network loader: a directed-rounding scalar
//! ([`Real`]), closed intervals ([`Interval`]), the monomial/polynomial
//! algebra enclosures are written in, and the [`TaylorModel`] /
//! [`ResetMap`] pair a reachability engine propagates through each
//! network layer.

mod activation;
mod error;
mod interval;
mod polynomial;
mod scalar;
mod taylor;
mod vars;

pub use activation::ActivationKind;
pub use error::{DeltaError, Result};
pub use interval::Interval;
pub use polynomial::{Monomial, Polynomial};
pub use scalar::Real;
pub use taylor::{ResetMap, TaylorModel};
pub use vars::Variables;
