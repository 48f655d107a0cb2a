use crate::core::models::evaluation::{Evaluation, EvaluationError, MotifHit};
use crate::core::models::sequence::SequenceRecord;
use crate::core::scoring::interpretation::{Interpretation, normalize};
use crate::core::scoring::matrix::ScoringModel;
use crate::core::scoring::scanner;
use tracing::{debug, instrument};

/// Evaluates one record: length guard, exhaustive window scan, then interpretation of the
/// best window. Never fails; problems are recorded in the returned [`Evaluation`].
#[instrument(level = "debug", skip_all, fields(id = %record.id, length = record.len()))]
pub fn evaluate<const W: usize>(model: &ScoringModel<W>, record: &SequenceRecord) -> Evaluation {
    match evaluate_residues(model, &record.residues) {
        Ok(hit) => {
            debug!(
                raw_score = hit.raw_score,
                position = hit.position,
                "Best window found."
            );
            Evaluation::hit(record.id.clone(), hit)
        }
        Err(e) => {
            debug!(error = ?e, "Sequence rejected.");
            Evaluation::failed(record.id.clone(), e)
        }
    }
}

/// Scores a bare residue string and assembles the [`MotifHit`] for its best window.
pub fn evaluate_residues<const W: usize>(
    model: &ScoringModel<W>,
    residues: &str,
) -> Result<MotifHit, EvaluationError> {
    if residues.len() < W {
        return Err(EvaluationError::SequenceTooShort {
            length: residues.len(),
            width: W,
        });
    }

    let best = scanner::scan(model, residues.as_bytes())?;
    let converted_score = normalize(model, best.raw_score);

    // A successful scan guarantees every residue is ASCII, so byte offsets are char offsets.
    let window = residues[best.offset..best.offset + W].to_string();

    Ok(MotifHit {
        raw_score: best.raw_score,
        converted_score,
        position: best.offset + 1,
        window,
        interpretation: Interpretation::from_normalized(converted_score),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scoring::alphabet::{ALPHABET_SIZE, residue_index};
    use crate::core::scoring::matrix::HTH_MODEL;

    const LAMBDA_CI: &str = "MSTKKKPLTQEQLEDARRLKAIYEKKKNELGLSQESVADKMGMGQSGVGALFNGINALNAYNAALLAKILKVSVEEFSPSIAREIYEMYEAVS";

    fn record(id: &str, residues: &str) -> SequenceRecord {
        SequenceRecord::new(id, residues)
    }

    #[test]
    fn lambda_repressor_is_classified_as_certain_hth() {
        let evaluation = evaluate(&HTH_MODEL, &record("cI", LAMBDA_CI));
        let hit = evaluation.motif_hit().unwrap();
        assert_eq!(evaluation.id, "cI");
        assert_eq!(hit.raw_score, 1801);
        assert_eq!(hit.position, 32);
        assert_eq!(hit.window, "LSQESVADKMGMGQSGVGALFN");
        assert!((hit.converted_score - 5.320969994210006).abs() < 1e-9);
        assert_eq!(hit.interpretation, Interpretation::Probable { percent: 100 });
    }

    #[test]
    fn exact_width_sequence_reports_position_one() {
        let hit = evaluate_residues(&HTH_MODEL, &"A".repeat(22)).unwrap();
        assert_eq!(hit.position, 1);
        assert_eq!(hit.raw_score, -635);
        assert_eq!(hit.window, "A".repeat(22));
        assert_eq!(hit.interpretation, Interpretation::NotSignificant);
    }

    #[test]
    fn sequence_one_residue_short_is_rejected() {
        let evaluation = evaluate(&HTH_MODEL, &record("short", &"A".repeat(21)));
        assert_eq!(
            evaluation.error(),
            Some(&EvaluationError::SequenceTooShort {
                length: 21,
                width: 22
            })
        );
        assert_eq!(
            evaluation.error().unwrap().to_string(),
            "Sequence too short to analyze."
        );
    }

    #[test]
    fn short_sequence_with_invalid_residue_is_reported_as_too_short() {
        let evaluation = evaluate(&HTH_MODEL, &record("short", "XXXX"));
        assert!(matches!(
            evaluation.error(),
            Some(EvaluationError::SequenceTooShort { .. })
        ));
    }

    #[test]
    fn invalid_residue_in_first_window_rejects_sequence() {
        let residues = format!("X{}", &LAMBDA_CI[1..]);
        let evaluation = evaluate(&HTH_MODEL, &record("x", &residues));
        assert_eq!(
            evaluation.error(),
            Some(&EvaluationError::InvalidCharacter {
                residue: b'X',
                position: 0
            })
        );
        assert_eq!(
            evaluation.error().unwrap().to_string(),
            "Invalid character in sequence."
        );
    }

    #[test]
    fn non_ascii_residue_rejects_sequence() {
        let residues = format!("{}é", LAMBDA_CI);
        let evaluation = evaluate(&HTH_MODEL, &record("utf8", &residues));
        assert!(matches!(
            evaluation.error(),
            Some(EvaluationError::InvalidCharacter { .. })
        ));
    }

    #[test]
    fn window_keeps_input_case() {
        let lower = LAMBDA_CI.to_ascii_lowercase();
        let hit = evaluate_residues(&HTH_MODEL, &lower).unwrap();
        assert_eq!(hit.position, 32);
        assert_eq!(hit.window, "lsqesvadkmgmgqsgvgalfn");
        assert_eq!(hit.raw_score, 1801);
    }

    #[test]
    fn position_is_within_valid_range_for_every_length() {
        for len in 22..=LAMBDA_CI.len() {
            let hit = evaluate_residues(&HTH_MODEL, &LAMBDA_CI[..len]).unwrap();
            assert!(hit.position >= 1);
            assert!(hit.position <= len - 22 + 1);
            assert_eq!(hit.window.len(), 22);
        }
    }

    #[test]
    fn ties_report_earliest_position() {
        let mut weights = [[0; 2]; ALPHABET_SIZE];
        weights[residue_index(b'W').unwrap()] = [3, 3];
        let model = ScoringModel::new(weights, 0.0, 1.0);

        let hit = evaluate_residues(&model, "AWWAWWA").unwrap();
        assert_eq!(hit.raw_score, 6);
        assert_eq!(hit.position, 2);
        assert_eq!(hit.window, "WW");
    }

    #[test]
    fn interpretation_tier_follows_converted_score() {
        // One residue type scoring `raw` at offset 0 on a model with mean 0 and sd 100.
        let tier_for = |raw: i32| {
            let mut weights = [[0; 1]; ALPHABET_SIZE];
            weights[residue_index(b'K').unwrap()] = [raw];
            let model = ScoringModel::new(weights, 0.0, 100.0);
            evaluate_residues(&model, "K").unwrap().interpretation.percent()
        };
        assert_eq!(tier_for(450), Some(100));
        assert_eq!(tier_for(400), Some(90));
        assert_eq!(tier_for(350), Some(71));
        assert_eq!(tier_for(300), Some(50));
        assert_eq!(tier_for(250), Some(25));
        assert_eq!(tier_for(249), None);
    }
}
