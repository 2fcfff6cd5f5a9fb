use std::path::PathBuf;
use anyhow::{bail, Context, Result};
use sf_energy::Base;
use sf_energy::EnergyModel;
use sf_energy::StackingModel;
use sf_structure::PairTable;
use sf_energy::DEFAULT_MIN_HAIRPIN;
use clap::Args;
use log::debug;

/// Stacking energy model parameters.
#[derive(Debug, Args)]
pub struct StackingModelArguments {
    /// Stacking parameter file (4x4 matrix, rows/columns in order AU CG GC UA)
    #[arg(short = 'p', long, value_name = "FILE")]
    pub parameters: Option<PathBuf>,

    /// Minimum number of unpaired bases in a hairpin loop
    #[arg(long, default_value_t = DEFAULT_MIN_HAIRPIN)]
    pub min_hairpin: usize,
}

impl StackingModelArguments {
    pub fn build_model(&self) -> Result<StackingModel> {
        debug!("Using parameter file: {:?}", self.parameters);
        debug!("Minimum hairpin size: {}", self.min_hairpin);
        let model = if let Some(path) = &self.parameters {
            StackingModel::from_parameter_file(path)
                .with_context(|| format!("Failed to load parameter file {}", path.display()))?
        } else {
            StackingModel::default()
        };
        Ok(model.with_min_hairpin(self.min_hairpin))
    }
}

/// Reject pairs of a given structure that `model` would never form.
pub fn check_pairs<M: EnergyModel>(model: &M, sequence: &[Base], structure: &PairTable) -> Result<()> {
    for (i, &j_opt) in structure.iter().enumerate() {
        let Some(j) = j_opt else { continue };
        if j < i {
            continue;
        }
        if !model.can_pair(sequence[i], sequence[j]) {
            bail!("Pair ({}, {}) {}-{} is not a canonical base pair", i, j, sequence[i], sequence[j]);
        }
        if j - i < model.min_pair_span() {
            bail!("Pair ({}, {}) spans {}, the minimum pair span is {}", i, j, j - i, model.min_pair_span());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_energy::NucleotideVec;
    use sf_energy::PairType;

    #[test]
    fn test_default_model() {
        let args = StackingModelArguments { parameters: None, min_hairpin: 3 };
        let model = args.build_model().unwrap();
        assert_eq!(model, StackingModel::default());
        assert_eq!(model.stack_energy(PairType::AU, PairType::CG), -2.1);
    }

    #[test]
    fn test_missing_parameter_file() {
        let args = StackingModelArguments {
            parameters: Some(PathBuf::from("/nonexistent/stack.par")),
            min_hairpin: 3,
        };
        let err = args.build_model().unwrap_err();
        assert!(err.to_string().contains("Failed to load parameter file"));
    }

    #[test]
    fn test_check_pairs_names_failed_condition() {
        let model = StackingModel::default();
        let pt = PairTable::try_from("((....))").unwrap();

        let seq = NucleotideVec::try_from("ACAAAAGU").unwrap();
        assert!(check_pairs(&model, &seq, &pt).is_ok());

        let seq = NucleotideVec::try_from("AGAAAAGU").unwrap();
        let err = check_pairs(&model, &seq, &pt).unwrap_err();
        assert_eq!(err.to_string(), "Pair (1, 6) G-G is not a canonical base pair");

        let pt = PairTable::try_from(".(..).").unwrap();
        let seq = NucleotideVec::try_from("AGAACA").unwrap();
        let err = check_pairs(&model, &seq, &pt).unwrap_err();
        assert_eq!(err.to_string(), "Pair (1, 4) spans 3, the minimum pair span is 4");
    }
}
