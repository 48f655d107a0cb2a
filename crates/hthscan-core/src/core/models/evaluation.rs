use crate::core::scoring::interpretation::Interpretation;
use crate::core::scoring::scanner::ScanError;
use thiserror::Error;

/// The best helix-turn-helix candidate window of a sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct MotifHit {
    pub raw_score: i32,
    /// Raw score in standard deviation units above the non-HTH background.
    pub converted_score: f64,
    /// 1-based start of the window.
    pub position: usize,
    /// The residues of the window, as they appear in the input.
    pub window: String,
    pub interpretation: Interpretation,
}

/// Why a sequence produced no score. The messages are the ones written to reports.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("Sequence too short to analyze.")]
    SequenceTooShort { length: usize, width: usize },

    #[error("Invalid character in sequence.")]
    InvalidCharacter { residue: u8, position: usize },

    #[error("Unexpected failure during evaluation: {reason}")]
    TaskFault { reason: String },
}

impl From<ScanError> for EvaluationError {
    fn from(e: ScanError) -> Self {
        match e {
            ScanError::SequenceTooShort { length, width } => {
                EvaluationError::SequenceTooShort { length, width }
            }
            ScanError::InvalidResidue { residue, position } => {
                EvaluationError::InvalidCharacter { residue, position }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub id: String,
    pub outcome: Result<MotifHit, EvaluationError>,
}

impl Evaluation {
    pub fn hit(id: impl Into<String>, hit: MotifHit) -> Self {
        Self {
            id: id.into(),
            outcome: Ok(hit),
        }
    }

    pub fn failed(id: impl Into<String>, error: EvaluationError) -> Self {
        Self {
            id: id.into(),
            outcome: Err(error),
        }
    }

    pub fn motif_hit(&self) -> Option<&MotifHit> {
        self.outcome.as_ref().ok()
    }

    pub fn error(&self) -> Option<&EvaluationError> {
        self.outcome.as_ref().err()
    }

    pub fn is_significant(&self) -> bool {
        self.motif_hit()
            .is_some_and(|hit| hit.interpretation.is_significant())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_hit(percent: Option<u8>) -> MotifHit {
        MotifHit {
            raw_score: 1801,
            converted_score: 5.32097,
            position: 32,
            window: "LSQESVADKMGMGQSGVGALFN".to_string(),
            interpretation: percent.map_or(Interpretation::NotSignificant, |percent| {
                Interpretation::Probable { percent }
            }),
        }
    }

    #[test]
    fn hit_evaluation_exposes_only_the_hit() {
        let evaluation = Evaluation::hit("cI", sample_hit(Some(100)));
        assert_eq!(evaluation.id, "cI");
        assert_eq!(evaluation.motif_hit().unwrap().position, 32);
        assert!(evaluation.error().is_none());
        assert!(evaluation.is_significant());
    }

    #[test]
    fn failed_evaluation_exposes_only_the_error() {
        let evaluation = Evaluation::failed(
            "short",
            EvaluationError::SequenceTooShort {
                length: 5,
                width: 22,
            },
        );
        assert!(evaluation.motif_hit().is_none());
        assert!(!evaluation.is_significant());
        assert_eq!(
            evaluation.error().unwrap().to_string(),
            "Sequence too short to analyze."
        );
    }

    #[test]
    fn insignificant_hit_is_not_significant() {
        let evaluation = Evaluation::hit("weak", sample_hit(None));
        assert!(!evaluation.is_significant());
    }

    #[test]
    fn error_messages_match_report_wording() {
        assert_eq!(
            EvaluationError::InvalidCharacter {
                residue: b'X',
                position: 0
            }
            .to_string(),
            "Invalid character in sequence."
        );
        assert_eq!(
            EvaluationError::TaskFault {
                reason: "boom".into()
            }
            .to_string(),
            "Unexpected failure during evaluation: boom"
        );
    }
}
