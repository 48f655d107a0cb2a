use super::traits::ReportFile;
use crate::core::models::evaluation::Evaluation;
use serde::Serialize;
use std::io::{self, Write};
use thiserror::Error;

/// Column headers of the report, in order.
pub const REPORT_HEADER: [&str; 6] = [
    "Sequence_ID",
    "Converted_Score",
    "Max_Score_Position",
    "Max_Score_Sequence",
    "Interpretation",
    "Error",
];

/// Significant digits used for the converted score column.
pub const SCORE_SIGNIFICANT_DIGITS: usize = 6;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to write report row: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    sequence_id: &'a str,
    converted_score: Option<String>,
    max_score_position: Option<usize>,
    max_score_sequence: Option<&'a str>,
    interpretation: Option<String>,
    error: Option<String>,
}

impl<'a> From<&'a Evaluation> for ReportRow<'a> {
    fn from(evaluation: &'a Evaluation) -> Self {
        match &evaluation.outcome {
            Ok(hit) => Self {
                sequence_id: &evaluation.id,
                converted_score: Some(format_significant(
                    hit.converted_score,
                    SCORE_SIGNIFICANT_DIGITS,
                )),
                max_score_position: Some(hit.position),
                max_score_sequence: Some(&hit.window),
                interpretation: Some(hit.interpretation.to_string()),
                error: None,
            },
            Err(e) => Self {
                sequence_id: &evaluation.id,
                converted_score: None,
                max_score_position: None,
                max_score_sequence: None,
                interpretation: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Tab-separated report with one row per evaluation.
///
/// Success rows leave the `Error` column empty; error rows fill only `Sequence_ID` and
/// `Error`. Fields are written verbatim, without quoting.
pub struct TsvReport;

impl ReportFile for TsvReport {
    type Error = ReportError;

    fn write_to(evaluations: &[Evaluation], writer: &mut impl Write) -> Result<(), Self::Error> {
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(csv::QuoteStyle::Never)
            .has_headers(false)
            .from_writer(writer);

        csv_writer.write_record(REPORT_HEADER)?;
        for evaluation in evaluations {
            csv_writer.serialize(ReportRow::from(evaluation))?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// Formats `value` with `digits` significant digits, choosing fixed or scientific notation
/// the way C's `%g` does and dropping trailing zeros.
pub fn format_significant(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let digits = digits.max(1);
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
