use thiserror::Error;

use crate::model::session::Experiment;

pub const N_ACTIONS: usize = 2;

/// One row per trial: probability of choosing action 0 and action 1.
pub type ProbabilityRow = [f64; N_ACTIONS];

#[derive(Debug, Clone, PartialEq)]
pub struct Dynamics {
    pub probabilities: Vec<ProbabilityRow>,
}

#[derive(Debug, Error)]
pub enum DynamicsError {
    /// Malformed or mis-shaped model output. Recoverable within a batch.
    #[error("degenerate model output: {0}")]
    Degenerate(String),
    /// Any other model failure. Aborts a batch.
    #[error("dynamics failed: {0}")]
    Failed(String),
}

/// Capability producing per-trial action probabilities for an experiment.
/// Implemented by fitted agent models upstream; scoring consumes only this.
pub trait UpdateDynamics {
    fn run(&self, experiment: &Experiment) -> Result<Dynamics, DynamicsError>;
}

/// Replays a probability matrix computed ahead of time, e.g. loaded from a
/// sessions file.
#[derive(Debug, Clone, PartialEq)]
pub struct TabulatedDynamics {
    probabilities: Vec<ProbabilityRow>,
}

impl TabulatedDynamics {
    pub fn new(probabilities: Vec<ProbabilityRow>) -> Self {
        Self { probabilities }
    }
}

impl UpdateDynamics for TabulatedDynamics {
    fn run(&self, _experiment: &Experiment) -> Result<Dynamics, DynamicsError> {
        Ok(Dynamics {
            probabilities: self.probabilities.clone(),
        })
    }
}
