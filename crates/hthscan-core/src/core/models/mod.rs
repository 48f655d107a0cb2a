//! Data models shared by the scoring engine and the file adapters.
//!
//! - [`sequence`] - Input records as read from a FASTA file
//! - [`evaluation`] - Per-sequence outcomes: a [`MotifHit`](evaluation::MotifHit) or an
//!   [`EvaluationError`](evaluation::EvaluationError)

pub mod evaluation;
pub mod sequence;
