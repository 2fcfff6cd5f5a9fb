use std::fmt;

use log::debug;
use sf_energy::Base;
use sf_energy::PairType;
use sf_energy::EnergyModel;
use sf_structure::Pair;
use sf_structure::PairList;
use sf_structure::PairTable;
use sf_structure::DotBracketVec;
use sf_structure::StructureError;

use crate::fold;
use crate::FoldError;
use crate::FoldTables;
use crate::PairChoice;
use crate::SpanChoice;

/// One helix step: `inner` = (i+1, j-1) stacked onto `outer` = (i, j).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stack {
    pub outer: Pair,
    pub inner: Pair,
    pub outer_type: PairType,
    pub inner_type: PairType,
    pub energy: f64,
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:>3},{:>3}) {} / ({:>3},{:>3}) {} {:>6.2}",
            self.outer.i(), self.outer.j(), self.outer_type,
            self.inner.i(), self.inner.j(), self.inner_type,
            self.energy)
    }
}

/// A traced minimum free energy structure.
#[derive(Debug, Clone, PartialEq)]
pub struct MfeStructure {
    pairs: PairList,
    stacks: Vec<Stack>,
    energy: f64,
}

impl MfeStructure {
    /// Pairs in discovery order: a helix from the outside in, the left
    /// branch of a split before the right one.
    pub fn pairs(&self) -> &PairList {
        &self.pairs
    }

    pub fn stacks(&self) -> &[Stack] {
        &self.stacks
    }

    /// `e[0, N-1]` of the tables this structure was traced from.
    pub fn energy(&self) -> f64 {
        self.energy
    }

    /// Sum over all recorded stacks. Equal to `energy()` up to rounding.
    pub fn stack_energy(&self) -> f64 {
        self.stacks.iter().map(|s| s.energy).sum()
    }

    pub fn pair_table(&self) -> Result<PairTable, StructureError> {
        PairTable::try_from(&self.pairs)
    }

    pub fn dot_bracket(&self) -> Result<DotBracketVec, StructureError> {
        Ok(DotBracketVec::from(&self.pair_table()?))
    }
}

/// Accumulates pairs and stacks while walking the tables.
struct Traceback<'a, M: EnergyModel> {
    tables: &'a FoldTables,
    sequence: &'a [Base],
    model: &'a M,
    pairs: PairList,
    stacks: Vec<Stack>,
}

impl<'a, M: EnergyModel> Traceback<'a, M> {
    fn new(tables: &'a FoldTables, sequence: &'a [Base], model: &'a M) -> Self {
        Traceback {
            tables,
            sequence,
            model,
            pairs: PairList::new(sequence.len()),
            stacks: Vec::new(),
        }
    }

    fn span(&mut self, i: usize, j: usize) {
        match self.tables.span_choice(i, j) {
            SpanChoice::Empty => (),
            SpanChoice::Paired => self.helix(i, j),
            SpanChoice::Split(k) => {
                self.span(i, k);
                self.span(k + 1, j);
            }
        }
    }

    /// Record (i, j) and follow the helix inwards as long as it stacks.
    fn helix(&mut self, i: usize, j: usize) {
        let mut outer = Pair::new(i, j);
        self.pairs.push(outer);
        while let Some(inner) = outer.inner() {
            match self.tables.pair_choice(outer.i(), outer.j()) {
                PairChoice::Stack => {
                    let outer_type = PairType::of(self.sequence, outer.i(), outer.j());
                    let inner_type = PairType::of(self.sequence, inner.i(), inner.j());
                    self.pairs.push(inner);
                    self.stacks.push(Stack {
                        outer,
                        inner,
                        outer_type,
                        inner_type,
                        energy: self.model.stack_energy(outer_type, inner_type),
                    });
                    outer = inner;
                }
                PairChoice::Close => {
                    self.span(inner.i(), inner.j());
                    break;
                }
                PairChoice::Unpaired => break,
            }
        }
    }

    fn finish(self) -> MfeStructure {
        MfeStructure {
            pairs: self.pairs,
            stacks: self.stacks,
            energy: self.tables.mfe(),
        }
    }
}

fn trace<M: EnergyModel>(tables: &FoldTables, sequence: &[Base], model: &M) -> MfeStructure {
    let mut tb = Traceback::new(tables, sequence, model);
    if !sequence.is_empty() {
        tb.span(0, sequence.len() - 1);
    }
    let mfe = tb.finish();
    debug!("Traced {} pairs and {} stacks", mfe.pairs.len(), mfe.stacks.len());
    mfe
}

/// Recover one optimal structure from filled tables.
pub fn reconstruct<M: EnergyModel>(
    tables: &FoldTables,
    sequence: &[Base],
    model: &M,
) -> Result<MfeStructure, FoldError> {
    if tables.len() != sequence.len() {
        return Err(FoldError::LengthMismatch {
            tables: tables.len(),
            sequence: sequence.len(),
        });
    }
    Ok(trace(tables, sequence, model))
}

/// Fold and trace in one go.
pub fn mfe<M: EnergyModel + Sync>(sequence: &[Base], model: &M) -> MfeStructure {
    let tables = fold(sequence, model);
    trace(&tables, sequence, model)
}
