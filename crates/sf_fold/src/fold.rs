use log::debug;
use rayon::prelude::*;
use sf_energy::Base;
use sf_energy::EnergyModel;

use crate::tables::Cell;
use crate::FoldTables;

/// Order in which the table cells are filled. Both schedules write every
/// cell only after all cells of shorter spans, and produce identical
/// tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Schedule {
    /// Increasing j, decreasing i.
    #[default]
    Sequential,
    /// One span length at a time, all spans of that length in parallel.
    Wavefront,
}

/// Fill the tables with the sequential schedule.
pub fn fold<M: EnergyModel + Sync>(sequence: &[Base], model: &M) -> FoldTables {
    fold_with(sequence, model, Schedule::Sequential)
}

/// Fill the tables with the wavefront schedule on the current rayon pool.
pub fn fold_parallel<M: EnergyModel + Sync>(sequence: &[Base], model: &M) -> FoldTables {
    fold_with(sequence, model, Schedule::Wavefront)
}

pub fn fold_with<M: EnergyModel + Sync>(
    sequence: &[Base],
    model: &M,
    schedule: Schedule,
) -> FoldTables {
    let n = sequence.len();
    let min_span = model.min_pair_span();
    let mut tables = FoldTables::new(n);
    debug!("Folding {} nt, minimum pair span {}, {:?} schedule", n, min_span, schedule);

    if n <= min_span {
        return tables;
    }

    match schedule {
        Schedule::Sequential => {
            for j in min_span..n {
                for i in (0..=j - min_span).rev() {
                    let cell = tables.compute_cell(sequence, model, i, j);
                    tables.set(i, j, cell);
                }
            }
        }
        Schedule::Wavefront => {
            for span in min_span..n {
                let cells: Vec<Cell> = (0..n - span)
                    .into_par_iter()
                    .map(|i| tables.compute_cell(sequence, model, i, i + span))
                    .collect();
                for (i, cell) in cells.into_iter().enumerate() {
                    tables.set(i, i + span, cell);
                }
            }
        }
    }

    debug!("MFE {:.2} on span (0, {})", tables.mfe(), n - 1);
    tables
}
