//! Serializable summary of a folding result, used for `--json` output.

use serde::Serialize;
use sf_energy::NucleotideVec;
use sf_fold::MfeStructure;
use sf_fold::Stack;
use sf_structure::StructureError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackReport {
    pub outer: (usize, usize),
    pub inner: (usize, usize),
    pub outer_type: String,
    pub inner_type: String,
    pub energy: f64,
}

impl From<&Stack> for StackReport {
    fn from(s: &Stack) -> Self {
        StackReport {
            outer: s.outer.into(),
            inner: s.inner.into(),
            outer_type: s.outer_type.to_string(),
            inner_type: s.inner_type.to_string(),
            energy: s.energy,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MfeReport {
    pub header: Option<String>,
    pub sequence: String,
    pub structure: String,
    pub energy: f64,
    pub pairs: Vec<(usize, usize)>,
    pub stacks: Vec<StackReport>,
}

impl MfeReport {
    pub fn new(
        header: Option<String>,
        sequence: &NucleotideVec,
        mfe: &MfeStructure,
    ) -> Result<Self, StructureError> {
        Ok(MfeReport {
            header,
            sequence: sequence.to_string(),
            structure: mfe.dot_bracket()?.to_string(),
            energy: mfe.energy(),
            pairs: mfe.pairs().iter().map(|&p| p.into()).collect(),
            stacks: mfe.stacks().iter().map(StackReport::from).collect(),
        })
    }
}
