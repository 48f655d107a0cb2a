//! # Core Module
//!
//! Fundamental building blocks for helix-turn-helix motif detection.
//!
//! ## Architecture
//!
//! - **Scoring** ([`scoring`]) - Residue alphabet, the position-specific weight matrix, the
//!   exhaustive window scanner and the conversion of raw scores to probability tiers
//! - **Data Models** ([`models`]) - Sequence records, motif hits and per-sequence evaluations
//! - **File I/O** ([`io`]) - FASTA input and tab-separated report output
//!
//! ## Scientific Foundation
//!
//! The weight matrix scores a 22-residue window spanning the two helices and the turn of the
//! HTH motif. Raw scores are rescaled against the mean and standard deviation of scores from
//! non-HTH proteins; the resulting standard deviation units map to the probability tiers
//! published with the matrix.

pub mod io;
pub mod models;
pub mod scoring;
