use super::config::DispatchConfig;
use super::error::EngineError;
use super::evaluator;
use super::progress::{Progress, ProgressReporter};
use crate::core::models::evaluation::{Evaluation, EvaluationError};
use crate::core::models::sequence::SequenceRecord;
use crate::core::scoring::matrix::ScoringModel;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Runs one independent task per sequence record and returns the results in input order.
///
/// Tasks share nothing but read-only data. A task that panics is isolated: its record gets
/// an [`EvaluationError::TaskFault`] and every other task still runs to completion.
pub struct Dispatcher<'a> {
    config: &'a DispatchConfig,
    reporter: &'a ProgressReporter<'a>,
}

impl<'a> Dispatcher<'a> {
    pub fn new(config: &'a DispatchConfig, reporter: &'a ProgressReporter<'a>) -> Self {
        Self { config, reporter }
    }

    /// Evaluates every record against `model`.
    pub fn run<const W: usize>(
        &self,
        model: &ScoringModel<W>,
        records: &[SequenceRecord],
    ) -> Result<Vec<Evaluation>, EngineError> {
        self.run_with(records, |record| evaluator::evaluate(model, record))
    }

    /// Runs `task` once per record. The i-th returned evaluation belongs to the i-th record,
    /// whatever order the workers finish in.
    #[instrument(skip_all, name = "dispatch", fields(records = records.len()))]
    pub fn run_with<F>(
        &self,
        records: &[SequenceRecord],
        task: F,
    ) -> Result<Vec<Evaluation>, EngineError>
    where
        F: Fn(&SequenceRecord) -> Evaluation + Sync,
    {
        if records.is_empty() {
            debug!("No records to dispatch.");
            return Ok(Vec::new());
        }

        self.reporter.report(Progress::TaskStart {
            total_steps: records.len() as u64,
        });
        let evaluations = self.execute(records, &task)?;
        self.reporter.report(Progress::TaskFinish);

        Ok(evaluations)
    }

    #[cfg(feature = "parallel")]
    fn execute<F>(
        &self,
        records: &[SequenceRecord],
        task: &F,
    ) -> Result<Vec<Evaluation>, EngineError>
    where
        F: Fn(&SequenceRecord) -> Evaluation + Sync,
    {
        // Indexed collect writes each result into the slot of its input position.
        let work = || -> Vec<Evaluation> {
            records
                .par_iter()
                .map(|record| self.run_isolated(record, task))
                .collect()
        };

        match self.config.threads {
            Some(threads) => {
                debug!(threads, "Building bounded worker pool.");
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("hthscan-worker-{}", i))
                    .build()
                    .map_err(|e| EngineError::ThreadPool(e.to_string()))?;
                Ok(pool.install(work))
            }
            None => Ok(work()),
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn execute<F>(
        &self,
        records: &[SequenceRecord],
        task: &F,
    ) -> Result<Vec<Evaluation>, EngineError>
    where
        F: Fn(&SequenceRecord) -> Evaluation + Sync,
    {
        if let Some(threads) = self.config.threads {
            debug!(
                threads,
                "Built without the `parallel` feature; running sequentially."
            );
        }
        Ok(records
            .iter()
            .map(|record| self.run_isolated(record, task))
            .collect())
    }

    fn run_isolated<F>(&self, record: &SequenceRecord, task: &F) -> Evaluation
    where
        F: Fn(&SequenceRecord) -> Evaluation,
    {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| task(record)));
        self.reporter.report(Progress::TaskIncrement);

        outcome.unwrap_or_else(|payload| {
            let reason = panic_reason(&*payload);
            warn!(id = %record.id, %reason, "Evaluation task panicked; recording a per-sequence error.");
            Evaluation::failed(record.id.clone(), EvaluationError::TaskFault { reason })
        })
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "task panicked with a non-string payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scoring::matrix::HTH_MODEL;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Mutex;
    use std::thread;
    use std::time::Duration;

    const LAMBDA_CI: &str = "MSTKKKPLTQEQLEDARRLKAIYEKKKNELGLSQESVADKMGMGQSGVGALFNGINALNAYNAALLAKILKVSVEEFSPSIAREIYEMYEAVS";

    fn numbered_records(n: usize) -> Vec<SequenceRecord> {
        (0..n)
            .map(|i| SequenceRecord::new(format!("seq{}", i), LAMBDA_CI))
            .collect()
    }

    fn echo(record: &SequenceRecord) -> Evaluation {
        Evaluation::failed(
            record.id.clone(),
            EvaluationError::TaskFault {
                reason: record.residues.clone(),
            },
        )
    }

    #[test]
    fn empty_batch_returns_no_evaluations() {
        let reporter = ProgressReporter::new();
        let config = DispatchConfig::default();
        let dispatcher = Dispatcher::new(&config, &reporter);
        assert!(dispatcher.run(&HTH_MODEL, &[]).unwrap().is_empty());
    }

    #[test]
    fn results_follow_input_order_despite_completion_order() {
        let records = numbered_records(32);
        let reporter = ProgressReporter::new();
        let config = DispatchConfig { threads: Some(4) };
        let dispatcher = Dispatcher::new(&config, &reporter);

        // Earlier records sleep longer, so they finish last.
        let evaluations = dispatcher
            .run_with(&records, |record| {
                let index: u64 = record.id.trim_start_matches("seq").parse().unwrap();
                thread::sleep(Duration::from_millis(2 * (32 - index)));
                echo(record)
            })
            .unwrap();

        let ids: Vec<_> = evaluations.iter().map(|e| e.id.clone()).collect();
        let expected: Vec<_> = records.iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn mixed_batch_keeps_each_outcome_with_its_record() {
        let records = vec![
            SequenceRecord::new("good", LAMBDA_CI),
            SequenceRecord::new("short", "MSTK"),
            SequenceRecord::new("invalid", format!("{}X", LAMBDA_CI)),
            SequenceRecord::new("good-again", LAMBDA_CI.to_ascii_lowercase()),
        ];
        let reporter = ProgressReporter::new();
        let config = DispatchConfig::default();
        let evaluations = Dispatcher::new(&config, &reporter)
            .run(&HTH_MODEL, &records)
            .unwrap();

        assert_eq!(evaluations.len(), 4);
        assert_eq!(evaluations[0].motif_hit().unwrap().position, 32);
        assert!(matches!(
            evaluations[1].error(),
            Some(EvaluationError::SequenceTooShort { .. })
        ));
        assert!(matches!(
            evaluations[2].error(),
            Some(EvaluationError::InvalidCharacter { .. })
        ));
        assert_eq!(evaluations[3].id, "good-again");
        assert_eq!(evaluations[3].motif_hit().unwrap().raw_score, 1801);
    }

    #[test]
    fn panicking_task_becomes_per_record_fault() {
        let records = numbered_records(8);
        let reporter = ProgressReporter::new();
        let config = DispatchConfig { threads: Some(2) };
        let dispatcher = Dispatcher::new(&config, &reporter);

        let evaluations = dispatcher
            .run_with(&records, |record| {
                if record.id == "seq3" {
                    panic!("simulated resource exhaustion");
                }
                evaluator::evaluate(&HTH_MODEL, record)
            })
            .unwrap();

        assert_eq!(evaluations.len(), 8);
        assert_eq!(
            evaluations[3].error(),
            Some(&EvaluationError::TaskFault {
                reason: "simulated resource exhaustion".to_string()
            })
        );
        for (i, evaluation) in evaluations.iter().enumerate() {
            assert_eq!(evaluation.id, format!("seq{}", i));
            if i != 3 {
                assert!(evaluation.motif_hit().is_some());
            }
        }
    }

    #[test]
    fn formatted_panic_messages_are_captured() {
        let records = numbered_records(1);
        let reporter = ProgressReporter::new();
        let config = DispatchConfig::default();
        let evaluations = Dispatcher::new(&config, &reporter)
            .run_with(&records, |record| panic!("failed on {}", record.id))
            .unwrap();
        assert_eq!(
            evaluations[0].error().unwrap().to_string(),
            "Unexpected failure during evaluation: failed on seq0"
        );
    }

    #[test]
    fn progress_reports_one_increment_per_record() {
        let increments = AtomicU64::new(0);
        let bounds = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| match event {
            Progress::TaskIncrement => {
                increments.fetch_add(1, Ordering::SeqCst);
            }
            other => bounds.lock().unwrap().push(other),
        }));
        let config = DispatchConfig::default();
        let records = numbered_records(10);
        Dispatcher::new(&config, &reporter)
            .run(&HTH_MODEL, &records)
            .unwrap();
        drop(reporter);

        assert_eq!(increments.load(Ordering::SeqCst), 10);
        assert_eq!(
            bounds.into_inner().unwrap(),
            vec![
                Progress::TaskStart { total_steps: 10 },
                Progress::TaskFinish
            ]
        );
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn bounded_pool_limits_worker_count() {
        let records = numbered_records(6);
        let reporter = ProgressReporter::new();
        let config = DispatchConfig { threads: Some(3) };
        let pool_sizes = Mutex::new(Vec::new());

        Dispatcher::new(&config, &reporter)
            .run_with(&records, |record| {
                pool_sizes
                    .lock()
                    .unwrap()
                    .push(rayon::current_num_threads());
                echo(record)
            })
            .unwrap();

        assert!(pool_sizes.into_inner().unwrap().iter().all(|&n| n == 3));
    }

    #[test]
    fn single_worker_matches_default_pool() {
        let records: Vec<_> = (0..20)
            .map(|i| SequenceRecord::new(format!("p{}", i), &LAMBDA_CI[i..]))
            .collect();
        let reporter = ProgressReporter::new();
        let single = DispatchConfig { threads: Some(1) };
        let default = DispatchConfig::default();

        let sequential = Dispatcher::new(&single, &reporter)
            .run(&HTH_MODEL, &records)
            .unwrap();
        let parallel = Dispatcher::new(&default, &reporter)
            .run(&HTH_MODEL, &records)
            .unwrap();
        assert_eq!(sequential, parallel);
    }
}
