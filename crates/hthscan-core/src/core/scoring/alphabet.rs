use phf::{Map, phf_map};
use thiserror::Error;

/// Number of residues in the standard amino acid alphabet.
pub const ALPHABET_SIZE: usize = 20;

/// One-letter codes of the standard amino acids, in matrix row order.
pub const RESIDUES: &[u8; ALPHABET_SIZE] = b"ACDEFGHIKLMNPQRSTVWY";

static RESIDUE_ROWS: Map<char, usize> = phf_map! {
    'A' => 0, 'C' => 1, 'D' => 2, 'E' => 3, 'F' => 4,
    'G' => 5, 'H' => 6, 'I' => 7, 'K' => 8, 'L' => 9,
    'M' => 10, 'N' => 11, 'P' => 12, 'Q' => 13, 'R' => 14,
    'S' => 15, 'T' => 16, 'V' => 17, 'W' => 18, 'Y' => 19,
    'a' => 0, 'c' => 1, 'd' => 2, 'e' => 3, 'f' => 4,
    'g' => 5, 'h' => 6, 'i' => 7, 'k' => 8, 'l' => 9,
    'm' => 10, 'n' => 11, 'p' => 12, 'q' => 13, 'r' => 14,
    's' => 15, 't' => 16, 'v' => 17, 'w' => 18, 'y' => 19,
};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Unknown residue byte 0x{residue:02X} at position {position}")]
pub struct UnknownResidue {
    /// The offending byte, as read from the sequence.
    pub residue: u8,
    /// 0-based position of the byte within the sequence.
    pub position: usize,
}

/// Returns the matrix row of a residue, or `None` for anything outside the 20 standard
/// amino acids (ambiguity codes, stop markers, gaps, whitespace, non-ASCII bytes).
#[inline]
pub fn residue_index(residue: u8) -> Option<usize> {
    if !residue.is_ascii() {
        return None;
    }
    RESIDUE_ROWS.get(&(residue as char)).copied()
}

/// Maps a residue string to matrix rows, stopping at the first unknown residue.
pub fn encode(residues: &[u8]) -> Result<Vec<usize>, UnknownResidue> {
    residues
        .iter()
        .enumerate()
        .map(|(position, &residue)| {
            residue_index(residue).ok_or(UnknownResidue { residue, position })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residue_index_follows_matrix_row_order() {
        for (row, &residue) in RESIDUES.iter().enumerate() {
            assert_eq!(residue_index(residue), Some(row));
        }
    }

    #[test]
    fn residue_index_is_case_insensitive() {
        for &residue in RESIDUES {
            assert_eq!(
                residue_index(residue),
                residue_index(residue.to_ascii_lowercase())
            );
        }
    }

    #[test]
    fn residue_index_rejects_non_standard_symbols() {
        for &symbol in b"BJOUXZbjouxz*-. \t\r\n0123456789" {
            assert_eq!(residue_index(symbol), None, "symbol {:?}", symbol as char);
        }
    }

    #[test]
    fn residue_index_rejects_non_ascii_bytes() {
        assert_eq!(residue_index(0xC1), None);
        assert_eq!(residue_index(0xFF), None);
        assert!("Å".bytes().all(|b| residue_index(b).is_none()));
    }

    #[test]
    fn encode_maps_every_residue() {
        assert_eq!(encode(b"ACy").unwrap(), vec![0, 1, 19]);
        assert!(encode(b"").unwrap().is_empty());
    }

    #[test]
    fn encode_reports_first_unknown_residue() {
        let err = encode(b"ACXDB").unwrap_err();
        assert_eq!(
            err,
            UnknownResidue {
                residue: b'X',
                position: 2
            }
        );
    }
}
