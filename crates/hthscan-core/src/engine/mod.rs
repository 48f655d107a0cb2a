//! # Engine Module
//!
//! Execution layer of HTHScan: evaluates individual sequences against a scoring model and
//! distributes a batch of sequences over a worker pool.
//!
//! ## Architecture
//!
//! - **Evaluation** ([`evaluator`]) - Length guard, window scan and interpretation for one record
//! - **Dispatch** ([`dispatcher`]) - Fan-out of records to rayon workers, with per-task fault
//!   isolation and results gathered back in input order
//! - **Configuration** ([`config`]) - Worker pool sizing and validation
//! - **Progress Monitoring** ([`progress`]) - Progress events and the reporter callback sink
//! - **Error Handling** ([`error`]) - Engine-level failures that abort a whole batch
//!
//! Per-sequence problems (too short, invalid residues, a panicking task) never surface as
//! [`error::EngineError`]; they are recorded in that sequence's
//! [`Evaluation`](crate::core::models::evaluation::Evaluation).

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod evaluator;
pub mod progress;
