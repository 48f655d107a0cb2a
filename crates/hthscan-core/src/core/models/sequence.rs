/// A named protein sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SequenceRecord {
    pub id: String,
    pub residues: String,
}

impl SequenceRecord {
    pub fn new(id: impl Into<String>, residues: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            residues: residues.into(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}
