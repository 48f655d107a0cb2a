use crate::core::models::evaluation::Evaluation;
use crate::core::models::sequence::SequenceRecord;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// A file format holding a batch of protein sequences.
pub trait SequenceFile {
    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Reads every record from a buffered reader, in file order.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream cannot be read or is malformed.
    fn read_from(reader: &mut impl BufRead) -> Result<Vec<SequenceRecord>, Self::Error>;

    /// Reads every record from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<SequenceRecord>, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}

/// A report format rendering one row per evaluated sequence.
pub trait ReportFile {
    /// The error type for write operations.
    type Error: Error + From<io::Error>;

    /// Writes the evaluations, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the underlying stream fails.
    fn write_to(evaluations: &[Evaluation], writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Creates (or truncates) `path` and writes the evaluations to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(
        evaluations: &[Evaluation],
        path: P,
    ) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(evaluations, &mut writer)
    }
}
