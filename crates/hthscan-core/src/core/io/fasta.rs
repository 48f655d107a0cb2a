use super::traits::SequenceFile;
use crate::core::models::sequence::SequenceRecord;
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum FastaError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Reader for FASTA-formatted protein sequences.
///
/// A record starts at a `>` header line whose remainder (minus trailing whitespace) is the
/// identifier. Residue lines are concatenated with all whitespace removed. Blank lines are
/// skipped, residue lines before the first header are ignored, and a header with an empty
/// identifier discards its record.
pub struct FastaFile;

impl SequenceFile for FastaFile {
    type Error = FastaError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<SequenceRecord>, Self::Error> {
        let mut records = Vec::new();
        let mut current: Option<SequenceRecord> = None;
        let mut orphan_lines = 0usize;
        let mut dropped_records = 0usize;
        let mut buf = Vec::new();

        // Lines are read as bytes so a stray non-UTF-8 byte only taints its own record.
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            if buf.iter().all(u8::is_ascii_whitespace) {
                continue;
            }

            if let Some(header) = buf.strip_prefix(b">") {
                if let Some(record) = current.take() {
                    push_record(&mut records, record, &mut dropped_records);
                }
                let id = String::from_utf8_lossy(header);
                current = Some(SequenceRecord::new(id.trim_end(), String::new()));
                continue;
            }

            match current.as_mut() {
                Some(record) => record.residues.extend(
                    String::from_utf8_lossy(&buf)
                        .chars()
                        .filter(|c| !c.is_whitespace()),
                ),
                None => orphan_lines += 1,
            }
        }
        if let Some(record) = current.take() {
            push_record(&mut records, record, &mut dropped_records);
        }

        if orphan_lines > 0 {
            warn!(
                lines = orphan_lines,
                "Ignored sequence lines appearing before the first FASTA header."
            );
        }
        if dropped_records > 0 {
            warn!(
                records = dropped_records,
                "Dropped FASTA records with an empty identifier."
            );
        }
        debug!(records = records.len(), "Parsed FASTA input.");

        Ok(records)
    }
}

fn push_record(records: &mut Vec<SequenceRecord>, record: SequenceRecord, dropped: &mut usize) {
    if record.id.is_empty() {
        *dropped += 1;
    } else {
        records.push(record);
    }
}
