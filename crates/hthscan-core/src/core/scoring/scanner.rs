use super::alphabet::{self, UnknownResidue};
use super::matrix::ScoringModel;
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    #[error("Sequence of length {length} is shorter than the {width}-residue window")]
    SequenceTooShort { length: usize, width: usize },

    #[error("Invalid residue {:?} at position {position}", as_char(.residue))]
    InvalidResidue { residue: u8, position: usize },
}

fn as_char(residue: &u8) -> char {
    char::from(*residue)
}

impl From<UnknownResidue> for ScanError {
    fn from(e: UnknownResidue) -> Self {
        ScanError::InvalidResidue {
            residue: e.residue,
            position: e.position,
        }
    }
}

/// The highest-scoring window of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestWindow {
    pub raw_score: i32,
    /// 0-based start of the window.
    pub offset: usize,
}

/// Sums the matrix contributions of the window starting at `pos` of an encoded sequence.
///
/// # Panics
///
/// Panics if the window extends past the end of `encoded`.
#[inline]
pub fn window_score<const W: usize>(model: &ScoringModel<W>, encoded: &[usize], pos: usize) -> i32 {
    encoded[pos..pos + W]
        .iter()
        .enumerate()
        .map(|(offset, &row)| model.weight(row, offset))
        .sum()
}

/// Scores every window of `residues` and returns the best one.
///
/// Windows are visited in increasing start order and only a strictly greater score
/// replaces the running maximum, so among equal scores the earliest window is reported.
/// A single unknown residue anywhere in the sequence rejects the whole sequence.
pub fn scan<const W: usize>(
    model: &ScoringModel<W>,
    residues: &[u8],
) -> Result<BestWindow, ScanError> {
    if residues.len() < W {
        return Err(ScanError::SequenceTooShort {
            length: residues.len(),
            width: W,
        });
    }

    let encoded = alphabet::encode(residues)?;

    let mut best = BestWindow {
        raw_score: i32::MIN,
        offset: 0,
    };
    for pos in 0..=encoded.len() - W {
        let score = window_score(model, &encoded, pos);
        if score > best.raw_score {
            best = BestWindow {
                raw_score: score,
                offset: pos,
            };
        }
    }

    trace!(
        raw_score = best.raw_score,
        offset = best.offset,
        windows = encoded.len() - W + 1,
        "Window scan complete."
    );
    Ok(best)
}
