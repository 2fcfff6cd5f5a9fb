//! # stackfold
//!
//! Minimum free energy structures under a helix stacking model.
//!
//! This crate re-exports the main functionality from its submodules.

pub mod input_parsers;
pub mod energy_parsers;
pub mod fold_parsers;
pub mod report;

pub mod structure {
    pub use ::sf_structure::*;
}

pub mod energy {
    pub use ::sf_energy::*;
}

pub mod folding {
    pub use ::sf_fold::*;
}

