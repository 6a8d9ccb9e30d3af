// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::AppOptions,
    error::Result,
    progress::Progress,
    report,
    stages::{extract, fetch, matrix},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    Extract,
    Matrix,
    /// Fetch, then extract, then matrix.
    All,
}

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    /// Console report, present when the matrix stage ran.
    pub report: Option<String>,
}

/// Top-level runner: dispatch on stage and run.
pub fn run(stage: Stage, options: &AppOptions, progress: &mut dyn Progress) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    if matches!(stage, Stage::Fetch | Stage::All) {
        progress.log("Fetching pages…");
        let out = fetch::run(&options.fetch, progress)?;
        summary.files_written.extend(out.written);
    }

    if matches!(stage, Stage::Extract | Stage::All) {
        progress.log("Extracting decklists…");
        let out = extract::run(&options.extract, progress)?;
        summary.files_written.extend(out.written);
    }

    if matches!(stage, Stage::Matrix | Stage::All) {
        progress.log("Building card matrix…");
        let m = &options.matrix;
        let out = matrix::run(m, progress)?;
        summary.report = Some(report::render(&out.summary, m.top_main, m.top_sideboard));
        summary.files_written.push(out.out_path);
    }

    Ok(summary)
}
