//! # HTHScan Core Library
//!
//! Detection of helix-turn-helix (HTH) DNA-binding motifs in protein sequences, based on the
//! weight matrix of Dodd & Egan (1990), *Improved detection of helix-turn-helix DNA-binding
//! motifs in protein sequences*, Nucleic Acids Res. 18:5019-5026.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data: the residue alphabet, the static scoring
//!   matrix, the window scanner, the score interpreter, the record/result models and the
//!   FASTA/TSV adapters.
//!
//! - **[`engine`]: The Execution Layer.** Per-sequence evaluation and the parallel dispatcher
//!   that fans a batch out over a worker pool and reassembles results in input order.
//!
//! - **[`workflows`]: The Public API.** Complete batch procedures tying `engine` and `core`
//!   together, with progress reporting and summary statistics.

pub mod core;
pub mod engine;
pub mod workflows;
