use super::alphabet::ALPHABET_SIZE;

/// Width of the helix-turn-helix window scored by [`HTH_MODEL`].
pub const HTH_WINDOW_WIDTH: usize = 22;

/// Mean raw score of windows drawn from proteins without an HTH motif.
pub const NON_HTH_MEAN_SCORE: f64 = 238.71;

/// Standard deviation of raw scores drawn from proteins without an HTH motif.
pub const NON_HTH_STD_DEV: f64 = 293.61;

/// A position-specific scoring matrix over the 20 standard amino acids.
///
/// `W` is the window width. Row `r`, column `c` holds the contribution of residue `r`
/// (see [`alphabet::RESIDUES`](super::alphabet::RESIDUES)) at offset `c` of a window.
/// The background statistics are used to rescale raw window scores into standard
/// deviation units.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringModel<const W: usize> {
    weights: [[i32; W]; ALPHABET_SIZE],
    background_mean: f64,
    background_std_dev: f64,
}

impl<const W: usize> ScoringModel<W> {
    pub const fn new(
        weights: [[i32; W]; ALPHABET_SIZE],
        background_mean: f64,
        background_std_dev: f64,
    ) -> Self {
        Self {
            weights,
            background_mean,
            background_std_dev,
        }
    }

    #[inline]
    pub const fn width(&self) -> usize {
        W
    }

    #[inline]
    pub fn weight(&self, row: usize, offset: usize) -> i32 {
        self.weights[row][offset]
    }

    pub fn background_mean(&self) -> f64 {
        self.background_mean
    }

    pub fn background_std_dev(&self) -> f64 {
        self.background_std_dev
    }

    /// Highest raw score any window can reach.
    pub fn max_score(&self) -> i32 {
        (0..W)
            .map(|offset| {
                self.weights
                    .iter()
                    .map(|row| row[offset])
                    .max()
                    .unwrap_or(0)
            })
            .sum()
    }

    /// Lowest raw score any window can reach.
    pub fn min_score(&self) -> i32 {
        (0..W)
            .map(|offset| {
                self.weights
                    .iter()
                    .map(|row| row[offset])
                    .min()
                    .unwrap_or(0)
            })
            .sum()
    }
}

/// The Dodd & Egan helix-turn-helix weight matrix.
pub static HTH_MODEL: ScoringModel<HTH_WINDOW_WIDTH> =
    ScoringModel::new(HTH_WEIGHTS, NON_HTH_MEAN_SCORE, NON_HTH_STD_DEV);

#[rustfmt::skip]
const HTH_WEIGHTS: [[i32; HTH_WINDOW_WIDTH]; ALPHABET_SIZE] = [
    // A (Ala)
    [
        -125, -194,  -84,   70,   36,   54,  238,  -15,   77,   26, -194,
        -194,  -56,  -84,   14,   77,  -56,  -56,  -56,   46, -195,   36,
    ],
    // C (Cys)
    [
         -64,  -64,  -63,  -63,  -64,  -64,  -64,  -64,  -64,   47,   47,
         -63,  -63,  -64,  -64,  -64,  -64,  -64,  -64,  -63,  -64,   47,
    ],
    // D (Asp)
    [
        -156, -154, -156, -154,  109, -156, -156,  109, -154, -156,    6,
        -156, -154,  -85, -156, -156, -156, -156, -154, -154, -156,  -85,
    ],
    // E (Glu)
    [
         -31,   -9, -171,   70,  156, -171, -171,  107,   50,  -60,  -60,
        -171,  -60,   78,   86, -171, -171, -101, -171, -170,   86,    9,
    ],
    // F (Phe)
    [
          10, -130,   10, -130, -130,   10, -130, -129, -130,  102, -130,
        -130, -130, -130, -129, -130, -130, -129, -129, -129,  180, -130,
    ],
    // G (Gly)
    [
          30,    5, -190,  -51, -191, -191,   18, -191, -191, -191,  202,
        -191,  -10, -191,    5, -190, -191,  -80, -190, -190, -191,  -51,
    ],
    // H (His)
    [
          62,   33,  -76,  -76,   -7,  -78,  -78,   33,   -7,  -78,   84,
         -78,   33,   33,  -78,   -7,  -78,   -7,   62,   84,  -78,   -7,
    ],
    // I (Ile)
    [
          75, -156,  101,  -45,  -86,  116, -156,  -16,   65,  -16, -156,
         128, -156,  -86, -156, -155,  188, -155,  -16,   53,  122, -155,
    ],
    // K (Lys)
    [
         -31,  -31,   10,   70,   79, -170, -170,   94,   70, -171,   -9,
        -100, -100,   25, -100, -170, -171,   -9,   38,  -31,   -9,  101,
    ],
    // L (Leu)
    [
          66, -212,   72, -213, -212,  144, -213, -102,   37,  132, -213,
          97, -213, -142, -212, -212,   97, -212, -212,   37,   88, -213,
    ],
    // M (Met)
    [
         122,  -74,   -3,  -73,  -73,  -73,  -74,  -74,   88,  122,  -73,
         158,  -74,  -74,   -3,  -74,   -3,  -74,  -74,   -3,  -74,  -73,
    ],
    // N (Asn)
    [
        -137,   72, -137, -136, -137, -137, -137,  -67, -136, -136,  128,
        -137,   72, -136,    2,  -67, -137,    2,   84, -137, -137,  104,
    ],
    // P (Pro)
    [
        -156,   23, -157, -156, -157, -157, -157, -157, -157, -157, -157,
        -157,  -46,  101,   39, -157, -157, -157, -157, -157, -157,  -46,
    ],
    // Q (Gln)
    [
         -60, -130,  175,   90,  110, -131, -131,   90,   78, -131, -131,
         -60, -130,  154,   65,  119, -131,  -20,  119,   31,  -20,   90,
    ],
    // R (Arg)
    [
          65,   76,  110,   65,    7, -155, -154,  123,   76, -155, -154,
        -155, -154,  129,   54,   40, -155,  129,  179,  -45, -155,  123,
    ],
    // S (Ser)
    [
        -118,   96, -188,   21,  -48, -187,   -8, -187, -118, -118,  -77,
        -188,  174, -187,  135,  -26, -188,  150,  -77, -188, -187,  -26,
    ],
    // T (Thr)
    [
          11,  149,  -59,   80, -169,   -8, -170,  -99,  -99,  -30, -170,
          -8,  131,  -30,  -59,  198, -170,  -30, -169, -170,  -30,  -59,
    ],
    // V (Val)
    [
          17,  -67, -177, -177, -108,  100, -178, -178, -108,   71, -178,
         160, -178,  -16,  -67,  -67,  169, -178,   17,   31,   17, -178,
    ],
    // W (Trp)
    [
          44,  -26,  -26,  -26,  -26,  -26,  -26,  -26,  -26,  -26,  -26,
         -26,  -26,  -25,  -26,  -25,  -26,  -26,   44,  279,  -26,  -26,
    ],
    // Y (Tyr)
    [
         -40, -110,   30,    1, -110, -109, -110, -110,  -40,   30, -110,
        -109, -109,  -40, -110,  -40, -110,  162,   52,   86, -110, -110,
    ],
];
