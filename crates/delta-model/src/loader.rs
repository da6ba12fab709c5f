//! Weight-file loading and per-layer reset-map construction.
//!
//! The weight file is a JSON document with three top-level maps, each
//! keyed by 1-indexed layer number: `weights` (one row per neuron, one
//! column per input), `offsets` (one bias per neuron), and `activations`
//! (one label per layer). Layer inputs and outputs share the `f1..fN`
//! naming convention in the declared variable list, so a layer's reset
//! rewrites the `f` variables in place and passes every plant variable
//! through unchanged.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use delta_core::{
    ActivationKind, DeltaError, Interval, Monomial, Polynomial, ResetMap, Result, TaylorModel,
    Variables,
};
use ndarray::{Array1, Array2, ArrayView1};
use serde::Deserialize;
use tracing::{info, warn};

/// Variables with this name prefix are layer outputs. A layer that does
/// not drive such a variable resets it to zero; variables without the
/// prefix are plant state and pass through as the identity.
pub const LAYER_OUTPUT_PREFIX: &str = "f";

#[derive(Debug, Deserialize)]
struct NetworkFile {
    weights: BTreeMap<usize, Vec<Vec<f64>>>,
    offsets: BTreeMap<usize, Vec<f64>>,
    activations: BTreeMap<usize, String>,
}

/// A loaded controller: one pre-activation reset map and activation kind
/// per layer, in layer order. Read-only for the duration of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct NeuralNetwork {
    layers: Vec<(ResetMap, ActivationKind)>,
}

impl NeuralNetwork {
    /// Load the weight file at `path` and build every layer's reset map
    /// over the declared variables.
    pub fn load(vars: &Variables, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let parsed: NetworkFile = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| DeltaError::ModelLoad(e.to_string()))?;

        let num_layers = parsed.weights.len();
        info!(path = %path.display(), num_layers, "loading network");

        let mut layers = Vec::with_capacity(num_layers);
        for layer in 1..=num_layers {
            let rows = parsed
                .weights
                .get(&layer)
                .ok_or(DeltaError::MissingLayerData {
                    layer,
                    what: "weights",
                })?;
            let offsets = parsed
                .offsets
                .get(&layer)
                .ok_or(DeltaError::MissingLayerData {
                    layer,
                    what: "offsets",
                })?;
            let label = parsed
                .activations
                .get(&layer)
                .ok_or(DeltaError::MissingLayerData {
                    layer,
                    what: "activation label",
                })?;

            let weights = to_matrix(layer, rows)?;
            if offsets.len() != weights.nrows() {
                return Err(DeltaError::ShapeMismatch {
                    layer,
                    expected: weights.nrows(),
                    got: offsets.len(),
                });
            }
            let offsets = Array1::from_vec(offsets.clone());

            let kind = ActivationKind::from_label(label);
            if kind == ActivationKind::Linear && !label.eq_ignore_ascii_case("linear") {
                warn!(layer, %label, "unrecognized activation label, treating as linear");
            }

            let reset = layer_reset(&weights, &offsets, vars)?;
            info!(layer, neurons = weights.nrows(), activation = ?kind, "layer loaded");
            layers.push((reset, kind));
        }

        Ok(Self { layers })
    }

    pub fn layers(&self) -> &[(ResetMap, ActivationKind)] {
        &self.layers
    }

    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }
}

/// Affine pre-activation enclosure `w1*f1 + ... + wk*fk + offset` for one
/// neuron, built directly over the declared variables.
pub fn affine_reset(weights: ArrayView1<f64>, offset: f64, vars: &Variables) -> Result<TaylorModel> {
    let num_vars = vars.num_vars();
    let mut monomials = Vec::with_capacity(weights.len() + 1);
    for (k, &w) in weights.iter().enumerate() {
        let input = format!("{LAYER_OUTPUT_PREFIX}{}", k + 1);
        let slot = vars
            .index_of(&input)
            .ok_or(DeltaError::UnknownVariable(input))?;
        let mut degrees = vec![0; num_vars];
        degrees[slot] = 1;
        monomials.push(Monomial::new(Interval::point(w), degrees));
    }
    monomials.push(Monomial::constant(Interval::point(offset), num_vars));
    Ok(TaylorModel::new(
        Polynomial::new(monomials),
        Interval::point(0.0),
    ))
}

fn to_matrix(layer: usize, rows: &[Vec<f64>]) -> Result<Array2<f64>> {
    let num_rows = rows.len();
    let num_cols = rows.first().map_or(0, Vec::len);
    let mut data = Vec::with_capacity(num_rows * num_cols);
    for row in rows {
        if row.len() != num_cols {
            return Err(DeltaError::ShapeMismatch {
                layer,
                expected: num_cols,
                got: row.len(),
            });
        }
        data.extend_from_slice(row);
    }
    Array2::from_shape_vec((num_rows, num_cols), data)
        .map_err(|e| DeltaError::ModelLoad(e.to_string()))
}

/// 1-based output index of a layer-output variable name, if it has one.
fn output_index(name: &str) -> Option<usize> {
    name.strip_prefix(LAYER_OUTPUT_PREFIX)?.parse().ok()
}

/// One layer's reset over every declared state variable: neuron outputs
/// get their affine map, undriven `f` variables reset to zero, and plant
/// variables pass through.
fn layer_reset(weights: &Array2<f64>, offsets: &Array1<f64>, vars: &Variables) -> Result<ResetMap> {
    let num_vars = vars.num_vars();
    let mut components = Vec::with_capacity(vars.state_count());
    let mut is_identity = Vec::with_capacity(vars.state_count());

    for slot in 1..num_vars {
        let name = vars.name(slot);
        match output_index(name) {
            Some(j) if j >= 1 && j <= weights.nrows() => {
                components.push(affine_reset(weights.row(j - 1), offsets[j - 1], vars)?);
                is_identity.push(false);
            }
            _ if name.starts_with(LAYER_OUTPUT_PREFIX) => {
                components.push(TaylorModel::zero(num_vars));
                is_identity.push(false);
            }
            _ => {
                components.push(TaylorModel::identity(slot - 1, num_vars));
                is_identity.push(true);
            }
        }
    }

    Ok(ResetMap::new(components, is_identity))
}
