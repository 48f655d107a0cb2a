//! Scoring of protein sequences against the helix-turn-helix weight matrix.
//!
//! - [`alphabet`] maps residue letters to matrix rows.
//! - [`matrix`] holds the static [`ScoringModel`](matrix::ScoringModel).
//! - [`scanner`] finds the best-scoring window of a sequence.
//! - [`interpretation`] turns a raw score into standard deviation units and a probability tier.

pub mod alphabet;
pub mod interpretation;
pub mod matrix;
pub mod scanner;
