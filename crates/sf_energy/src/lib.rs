
/// Base, NucleotideVec, PairType, ....
mod nucleotides;

/// The energy model trait.
mod energy_model;

/// The 4x4 helix stacking model and its parameter files.
mod stacking_model;

pub use nucleotides::*;
pub use energy_model::*;
pub use stacking_model::*;

