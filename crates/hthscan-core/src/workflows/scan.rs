use crate::core::models::evaluation::Evaluation;
use crate::core::models::sequence::SequenceRecord;
use crate::core::scoring::matrix::{HTH_MODEL, ScoringModel};
use crate::engine::config::ScanConfig;
use crate::engine::dispatcher::Dispatcher;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{debug, info, instrument};

/// Counts of outcomes across a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanSummary {
    pub total: usize,
    /// Sequences that produced a score, significant or not.
    pub scored: usize,
    pub significant: usize,
    pub failed: usize,
}

impl ScanSummary {
    pub fn from_evaluations(evaluations: &[Evaluation]) -> Self {
        evaluations
            .iter()
            .fold(Self::default(), |mut summary, evaluation| {
                summary.total += 1;
                match evaluation.motif_hit() {
                    Some(hit) => {
                        summary.scored += 1;
                        if hit.interpretation.is_significant() {
                            summary.significant += 1;
                        }
                    }
                    None => summary.failed += 1,
                }
                summary
            })
    }
}

#[derive(Debug, Clone)]
pub struct ScanResult {
    /// One evaluation per input record, in input order.
    pub evaluations: Vec<Evaluation>,
    pub summary: ScanSummary,
}

/// Scans every record with the helix-turn-helix model.
pub fn run(
    records: &[SequenceRecord],
    config: &ScanConfig,
    reporter: &ProgressReporter,
) -> Result<ScanResult, EngineError> {
    run_with_model(&HTH_MODEL, records, config, reporter)
}

#[instrument(skip_all, name = "scan_workflow", fields(records = records.len(), width = W))]
pub fn run_with_model<const W: usize>(
    model: &ScoringModel<W>,
    records: &[SequenceRecord],
    config: &ScanConfig,
    reporter: &ProgressReporter,
) -> Result<ScanResult, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Scanning sequences",
    });
    debug!(
        max_score = model.max_score(),
        min_score = model.min_score(),
        "Scoring model raw score bounds."
    );
    info!(
        threads = ?config.dispatch.threads,
        "Scanning {} sequence(s) for helix-turn-helix motifs.",
        records.len()
    );

    let evaluations = Dispatcher::new(&config.dispatch, reporter).run(model, records)?;
    if evaluations.len() != records.len() {
        return Err(EngineError::Internal(format!(
            "dispatcher returned {} evaluations for {} records",
            evaluations.len(),
            records.len()
        )));
    }

    let summary = ScanSummary::from_evaluations(&evaluations);
    reporter.report(Progress::PhaseFinish);
    info!(
        total = summary.total,
        scored = summary.scored,
        significant = summary.significant,
        failed = summary.failed,
        "Scan complete."
    );

    Ok(ScanResult {
        evaluations,
        summary,
    })
}
