use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::input::{InputError, open_maybe_gz};
use crate::model::dynamics::{N_ACTIONS, ProbabilityRow, TabulatedDynamics};
use crate::model::session::Experiment;

#[derive(Debug, Deserialize)]
struct SessionsFile {
    sessions: Vec<SessionEntry>,
}

#[derive(Debug, Deserialize)]
struct SessionEntry {
    choices: Vec<u8>,
    probabilities: Vec<Vec<f64>>,
    n_parameters: u32,
}

/// One loaded session: the observed choices plus the agent's precomputed
/// probability trace and parameter count.
#[derive(Debug, Clone)]
pub struct SessionData {
    pub experiment: Experiment,
    pub dynamics: TabulatedDynamics,
    pub n_parameters: u32,
}

#[derive(Debug, Clone)]
pub struct SessionBundle {
    pub path: PathBuf,
    pub sessions: Vec<SessionData>,
}

pub fn load_sessions(path: &Path) -> Result<SessionBundle, InputError> {
    let reader = open_maybe_gz(path)?;
    let file: SessionsFile = serde_json::from_reader(reader)
        .map_err(|e| InputError::Parse(format!("{}: {}", path.display(), e)))?;

    if file.sessions.is_empty() {
        return Err(InputError::InvalidInput(
            "sessions file contains no sessions".to_string(),
        ));
    }

    let mut sessions = Vec::with_capacity(file.sessions.len());
    for (idx, entry) in file.sessions.into_iter().enumerate() {
        sessions.push(convert_session(idx, entry)?);
    }

    tracing::info!("loaded {} sessions from {}", sessions.len(), path.display());

    Ok(SessionBundle {
        path: path.to_path_buf(),
        sessions,
    })
}

fn convert_session(idx: usize, entry: SessionEntry) -> Result<SessionData, InputError> {
    for (trial, &choice) in entry.choices.iter().enumerate() {
        if choice as usize >= N_ACTIONS {
            return Err(InputError::InvalidInput(format!(
                "session {}: choice {} at trial {} is not binary",
                idx, choice, trial
            )));
        }
    }

    // Row count vs. trial count is deliberately not checked here; a mis-shaped
    // probability trace is the batch scorer's recoverable failure class.
    let mut rows: Vec<ProbabilityRow> = Vec::with_capacity(entry.probabilities.len());
    for (trial, row) in entry.probabilities.iter().enumerate() {
        if row.len() != N_ACTIONS {
            return Err(InputError::InvalidInput(format!(
                "session {}: probability row {} has {} entries, expected {}",
                idx,
                trial,
                row.len(),
                N_ACTIONS
            )));
        }
        rows.push([row[0], row[1]]);
    }

    Ok(SessionData {
        experiment: Experiment::new(entry.choices),
        dynamics: TabulatedDynamics::new(rows),
        n_parameters: entry.n_parameters,
    })
}
