use serde::Serialize;

/// Per-session score triple. `nll` is the negated log-likelihood.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionScores {
    pub nll: f64,
    pub aic: f64,
    pub bic: f64,
}

impl SessionScores {
    /// Sentinel for a session whose scores could not be computed.
    pub fn nan() -> Self {
        Self {
            nll: f64::NAN,
            aic: f64::NAN,
            bic: f64::NAN,
        }
    }
}

/// One row of a score report. Field order fixes the CSV column order:
/// `Job_ID,NLL,BIC,AIC`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreRecord {
    pub job_id: usize,
    pub nll: f64,
    pub bic: f64,
    pub aic: f64,
}

#[derive(Debug, Clone, Default)]
pub struct ScoreReport {
    pub records: Vec<ScoreRecord>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReportTotals {
    pub nll: f64,
    pub bic: f64,
    pub aic: f64,
}

impl ScoreReport {
    pub fn push(&mut self, job_id: usize, scores: SessionScores) {
        self.records.push(ScoreRecord {
            job_id,
            nll: scores.nll,
            bic: scores.bic,
            aic: scores.aic,
        });
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Column sums. A failed (NaN) record poisons each total.
    pub fn totals(&self) -> ReportTotals {
        let mut nll = 0.0;
        let mut bic = 0.0;
        let mut aic = 0.0;
        for record in &self.records {
            nll += record.nll;
            bic += record.bic;
            aic += record.aic;
        }
        ReportTotals { nll, bic, aic }
    }

    pub fn failed_job_ids(&self) -> Vec<usize> {
        let mut out = Vec::new();
        for record in &self.records {
            if record.nll.is_nan() {
                out.push(record.job_id);
            }
        }
        out
    }
}
