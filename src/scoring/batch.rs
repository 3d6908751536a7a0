use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::model::dynamics::UpdateDynamics;
use crate::model::record::{ScoreReport, SessionScores};
use crate::model::session::Experiment;
use crate::report::write_scores_csv;
use crate::scoring::session::{ScoreError, score_session};

#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    pub verbose: bool,
    pub save: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum BatchError {
    #[error(
        "experiments/agents/n_parameters lengths differ: {experiments}/{agents}/{n_parameters}"
    )]
    LengthMismatch {
        experiments: usize,
        agents: usize,
        n_parameters: usize,
    },
    #[error("session {job_id}: {source}")]
    Score {
        job_id: usize,
        #[source]
        source: ScoreError,
    },
    #[error("failed to write scores: {0}")]
    Io(#[from] std::io::Error),
}

/// Score every session in order. Degenerate model output (the value/shape
/// failure class, most often a SINDy-family model) is recorded as NaN for that
/// session and the batch continues; any other failure aborts. `Job_ID` equals
/// the positional index regardless of failures.
pub fn score_batch(
    experiments: &[Experiment],
    agents: &[&dyn UpdateDynamics],
    n_parameters: &[u32],
    options: &BatchOptions,
) -> Result<ScoreReport, BatchError> {
    if experiments.len() != agents.len() || experiments.len() != n_parameters.len() {
        return Err(BatchError::LengthMismatch {
            experiments: experiments.len(),
            agents: agents.len(),
            n_parameters: n_parameters.len(),
        });
    }

    let n_sessions = experiments.len();
    info!("scoring {} sessions", n_sessions);
    let mut report = ScoreReport::default();

    for i in 0..n_sessions {
        let scores = match score_session(&experiments[i], agents[i], n_parameters[i]) {
            Ok(scores) => scores,
            Err(err) if err.is_degenerate() => {
                warn!("session {} could not be scored: {}", i, err);
                SessionScores::nan()
            }
            Err(err) => {
                return Err(BatchError::Score {
                    job_id: i,
                    source: err,
                });
            }
        };
        report.push(i, scores);
        debug!("scored session {}/{}", i + 1, n_sessions);
    }

    if options.verbose {
        let totals = report.totals();
        info!(
            "summarized statistics: NLL = {} --- BIC = {} --- AIC = {}",
            totals.nll, totals.bic, totals.aic
        );
    }

    if let Some(path) = &options.save {
        write_scores_csv(&report, path)?;
        info!("wrote {} score rows to {}", report.len(), path.display());
    }

    Ok(report)
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/batch.rs"]
mod tests;
