use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use hthscan::{
    core::io::{
        fasta::FastaFile,
        report::{ReportError, TsvReport},
        traits::{ReportFile, SequenceFile},
    },
    core::models::evaluation::Evaluation,
    engine::progress::ProgressReporter,
    workflows::{self, scan::ScanSummary},
};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Report file opened before the scan. It is truncated only on commit; a file created
/// here is removed again if the report is never committed.
struct PendingReport {
    path: PathBuf,
    file: File,
    created: bool,
    committed: bool,
}

impl PendingReport {
    fn open(path: &Path) -> io::Result<Self> {
        let created = !path.exists();
        let file = OpenOptions::new().write(true).create(true).open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
            created,
            committed: false,
        })
    }

    fn commit(mut self, evaluations: &[Evaluation]) -> std::result::Result<(), ReportError> {
        self.file.set_len(0)?;
        let mut writer = BufWriter::new(&self.file);
        TsvReport::write_to(evaluations, &mut writer)?;
        writer.flush()?;
        drop(writer);
        self.committed = true;
        Ok(())
    }
}

impl Drop for PendingReport {
    fn drop(&mut self) {
        if !self.committed && self.created {
            debug!("Removing unfinished report {:?}", &self.path);
            let _ = fs::remove_file(&self.path);
        }
    }
}

pub async fn run(config: &AppConfig) -> Result<ScanSummary> {
    info!("Reading sequences from {:?}", &config.input_path);
    let records =
        FastaFile::read_from_path(&config.input_path).map_err(|e| CliError::FileParsing {
            path: config.input_path.clone(),
            source: e.into(),
        })?;

    // Fail on an unwritable report path before spending time on the scan.
    let report = PendingReport::open(&config.output_path).map_err(|e| CliError::OutputFile {
        path: config.output_path.clone(),
        source: e,
    })?;

    if records.is_empty() {
        warn!("No sequences found in {:?}.", &config.input_path);
    }

    let progress_handler = CliProgressHandler::new(config.show_progress);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the scan workflow on {} sequence(s)...", records.len());
    let result = tokio::task::block_in_place(|| {
        workflows::scan::run(&records, &config.scan_config, &reporter)
    })?;

    info!("Writing report to {:?}", &config.output_path);
    report
        .commit(&result.evaluations)
        .map_err(|e| CliError::ReportWriting {
            path: config.output_path.clone(),
            source: e,
        })?;

    let summary = result.summary;
    println!(
        "✓ Scanned {} sequence(s): {} with a probable HTH motif, {} not significant, {} rejected.",
        summary.total,
        summary.significant,
        summary.scored - summary.significant,
        summary.failed
    );
    println!("  Report written to: {}", config.output_path.display());

    Ok(summary)
}
