//! Input/output adapters around the scoring engine.
//!
//! Sequences are read from FASTA files and per-sequence evaluations are written as a
//! tab-separated report. Both directions go through the traits in [`traits`] so callers can
//! work with paths or any buffered stream.

pub mod fasta;
pub mod report;
pub mod traits;
