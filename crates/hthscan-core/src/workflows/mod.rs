//! # Workflows Module
//!
//! High-level entry points that run a complete helix-turn-helix scan over a batch of
//! sequences.
//!
//! - **Scan Workflow** ([`scan`]) - Dispatches every record to the evaluator, restores input
//!   order, and summarizes how many sequences were scored, significant or rejected.

pub mod scan;
