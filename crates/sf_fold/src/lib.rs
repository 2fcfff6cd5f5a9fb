//! Minimum free energy folding under a helix stacking model.
//!
//! Two interval tables are filled bottom-up:
//!  - `e[i,j]`: best energy on the span i..=j.
//!  - `b[i,j]`: best energy on i..=j given that (i, j) is paired.
//!
//! Every cell also records which case produced it, so the traceback
//! never has to compare floating point sums.

mod error;
mod tables;
mod fold;
mod traceback;

pub use error::*;
pub use tables::*;
pub use fold::*;
pub use traceback::*;

