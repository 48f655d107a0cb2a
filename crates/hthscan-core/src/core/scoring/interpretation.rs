use super::matrix::ScoringModel;
use std::fmt;

/// Lower bounds (in standard deviation units) of each probability tier, highest first.
///
/// The percentages are the fraction of proteins at or above the score that were found to
/// contain a helix-turn-helix motif in the reference set used to derive the matrix.
pub const PROBABILITY_TIERS: [(f64, u8); 5] = [
    (4.5, 100),
    (4.0, 90),
    (3.5, 71),
    (3.0, 50),
    (2.5, 25),
];

/// Rescales a raw window score against the model's non-HTH background distribution.
#[inline]
pub fn normalize<const W: usize>(model: &ScoringModel<W>, raw_score: i32) -> f64 {
    (f64::from(raw_score) - model.background_mean()) / model.background_std_dev()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interpretation {
    /// Score falls in a published probability tier.
    Probable { percent: u8 },
    NotSignificant,
}

impl Interpretation {
    /// Classifies a normalized score. Tiers are checked from the highest threshold down and
    /// the first one reached wins; NaN is never significant.
    pub fn from_normalized(score: f64) -> Self {
        PROBABILITY_TIERS
            .iter()
            .find(|(threshold, _)| score >= *threshold)
            .map_or(Interpretation::NotSignificant, |&(_, percent)| {
                Interpretation::Probable { percent }
            })
    }

    pub fn percent(&self) -> Option<u8> {
        match self {
            Interpretation::Probable { percent } => Some(*percent),
            Interpretation::NotSignificant => None,
        }
    }

    pub fn is_significant(&self) -> bool {
        matches!(self, Interpretation::Probable { .. })
    }
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interpretation::Probable { percent } => write!(
                f,
                "Approximately {}% probability that this protein contains a helix-turn-helix motif.",
                percent
            ),
            Interpretation::NotSignificant => f.write_str("Not significant."),
        }
    }
}
