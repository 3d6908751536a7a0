use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::model::record::{ReportTotals, ScoreReport};

/// Write the report as comma-separated text: header `Job_ID,NLL,BIC,AIC`, one
/// row per session, no row-index column. Floats use default `Display`
/// precision; failed sessions render as `NaN`.
pub fn write_scores_csv(report: &ScoreReport, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "Job_ID,NLL,BIC,AIC")?;
    for record in &report.records {
        writeln!(
            w,
            "{},{},{},{}",
            record.job_id, record.nll, record.bic, record.aic
        )?;
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub tool: String,
    pub version: String,
    pub n_sessions: usize,
    pub n_failed: usize,
    pub failed_job_ids: Vec<usize>,
    pub totals: ReportTotals,
}

pub fn build_summary(report: &ScoreReport) -> RunSummary {
    let failed_job_ids = report.failed_job_ids();
    RunSummary {
        tool: "banditfit".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        n_sessions: report.len(),
        n_failed: failed_job_ids.len(),
        failed_job_ids,
        totals: report.totals(),
    }
}

pub fn write_summary_json(summary: &RunSummary, path: &Path) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(json.as_bytes())?;
    w.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
