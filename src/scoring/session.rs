use thiserror::Error;

use crate::model::dynamics::{DynamicsError, N_ACTIONS, UpdateDynamics};
use crate::model::record::SessionScores;
use crate::model::session::Experiment;
use crate::scoring::criteria::{akaike_information_criterion, bayesian_information_criterion};
use crate::scoring::likelihood::{log_likelihood, one_hot};

#[derive(Debug, Error)]
pub enum ScoreError {
    /// Value/shape failure of the model output. A batch converts this to NaN
    /// scores and continues.
    #[error("degenerate model output: {0}")]
    Degenerate(String),
    /// Non-recoverable dynamics failure.
    #[error(transparent)]
    Dynamics(DynamicsError),
    /// Outcome index outside the binary action space.
    #[error("invalid choice {value} at trial {trial}; outcomes must be 0 or 1")]
    InvalidChoice { trial: usize, value: u8 },
}

impl ScoreError {
    pub fn is_degenerate(&self) -> bool {
        matches!(self, ScoreError::Degenerate(_))
    }
}

impl From<DynamicsError> for ScoreError {
    fn from(err: DynamicsError) -> Self {
        match err {
            DynamicsError::Degenerate(msg) => ScoreError::Degenerate(msg),
            other => ScoreError::Dynamics(other),
        }
    }
}

/// Score one session: run the agent's dynamics over the experiment, compute
/// the log-likelihood of the observed choices once, and derive NLL/AIC/BIC
/// from it. Identical inputs yield bit-identical scores.
pub fn score_session(
    experiment: &Experiment,
    agent: &dyn UpdateDynamics,
    n_parameters: u32,
) -> Result<SessionScores, ScoreError> {
    for (trial, &value) in experiment.choices.iter().enumerate() {
        if value as usize >= N_ACTIONS {
            return Err(ScoreError::InvalidChoice { trial, value });
        }
    }

    let dynamics = agent.run(experiment)?;
    let probabilities = dynamics.probabilities;
    if probabilities.len() != experiment.n_trials() {
        return Err(ScoreError::Degenerate(format!(
            "probability matrix has {} rows for {} trials",
            probabilities.len(),
            experiment.n_trials()
        )));
    }

    let observations = one_hot(&experiment.choices);
    let ll = log_likelihood(&observations, &probabilities);
    let aic = akaike_information_criterion(&observations, &probabilities, n_parameters, Some(ll));
    let bic = bayesian_information_criterion(&observations, &probabilities, n_parameters, Some(ll));

    Ok(SessionScores { nll: -ll, aic, bic })
}
