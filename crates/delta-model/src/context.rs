//! Explicit per-run analysis state.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use delta_core::{Result, Variables};

use crate::NeuralNetwork;

/// State for one reachability run: the loaded controller plus the branch
/// and timing bookkeeping the driver accumulates while propagating
/// flowpipes. Owned by the driver and passed by reference into the layer
/// loop; nothing here is process-global.
///
/// `S` is the driver's saved plant state per branch, opaque to this
/// crate.
#[derive(Debug)]
pub struct AnalysisContext<S = ()> {
    model_path: PathBuf,
    network: NeuralNetwork,
    branch_origin: HashMap<usize, usize>,
    saved_plant_states: HashMap<usize, S>,
    total_branches: usize,
    current_branch: usize,
    dnn_runtime: Duration,
}

impl<S> AnalysisContext<S> {
    /// Load the controller at `path` and start a fresh run on branch 0.
    pub fn load(vars: &Variables, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let network = NeuralNetwork::load(vars, path)?;
        Ok(Self {
            model_path: path.to_path_buf(),
            network,
            branch_origin: HashMap::new(),
            saved_plant_states: HashMap::new(),
            total_branches: 0,
            current_branch: 0,
            dnn_runtime: Duration::ZERO,
        })
    }

    pub fn network(&self) -> &NeuralNetwork {
        &self.network
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    /// Register a branch split off the current branch and return its id.
    pub fn record_branch(&mut self) -> usize {
        self.total_branches += 1;
        let id = self.total_branches;
        self.branch_origin.insert(id, self.current_branch);
        id
    }

    /// Switch the run to the given branch.
    pub fn enter_branch(&mut self, id: usize) {
        self.current_branch = id;
    }

    pub fn current_branch(&self) -> usize {
        self.current_branch
    }

    /// The branch the given branch split off from.
    pub fn origin_of(&self, id: usize) -> Option<usize> {
        self.branch_origin.get(&id).copied()
    }

    pub fn total_branches(&self) -> usize {
        self.total_branches
    }

    /// Stash the plant state to restore when re-entering `branch`.
    pub fn save_plant_state(&mut self, branch: usize, state: S) {
        self.saved_plant_states.insert(branch, state);
    }

    pub fn plant_state(&self, branch: usize) -> Option<&S> {
        self.saved_plant_states.get(&branch)
    }

    /// Add one controller evaluation's elapsed time to the run total.
    pub fn add_dnn_runtime(&mut self, elapsed: Duration) {
        self.dnn_runtime += elapsed;
    }

    pub fn dnn_runtime(&self) -> Duration {
        self.dnn_runtime
    }
}
