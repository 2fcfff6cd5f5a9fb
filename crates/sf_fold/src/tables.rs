use ndarray::Array2;
use sf_energy::Base;
use sf_energy::PairType;
use sf_energy::EnergyModel;

use crate::FoldError;

/// How the optimum of `e[i,j]` was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanChoice {
    /// Nothing to gain: the span stays unpaired (energy 0).
    Empty,
    /// (i, j) is paired, the energy is `b[i,j]`.
    Paired,
    /// Independent substructures on i..=k and k+1..=j.
    Split(usize),
}

/// How `b[i,j]` was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairChoice {
    /// (i, j) cannot pair.
    Unpaired,
    /// (i+1, j-1) is paired too and stacks onto (i, j).
    Stack,
    /// (i, j) closes a loop around the unconstrained interior.
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Cell {
    pub e: f64,
    pub b: f64,
    pub span: SpanChoice,
    pub pair: PairChoice,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        e: 0.0,
        b: 0.0,
        span: SpanChoice::Empty,
        pair: PairChoice::Unpaired,
    };
}

/// The filled `e` and `b` tables together with their choices.
///
/// Only cells with `i <= j` are meaningful. Cells whose span is below the
/// model's minimum pair span stay at energy 0, `Empty` and `Unpaired`.
#[derive(Debug, Clone, PartialEq)]
pub struct FoldTables {
    e: Array2<f64>,
    b: Array2<f64>,
    span: Array2<SpanChoice>,
    pair: Array2<PairChoice>,
}

impl FoldTables {
    pub(crate) fn new(n: usize) -> Self {
        FoldTables {
            e: Array2::from_elem((n, n), 0.0),
            b: Array2::from_elem((n, n), 0.0),
            span: Array2::from_elem((n, n), SpanChoice::Empty),
            pair: Array2::from_elem((n, n), PairChoice::Unpaired),
        }
    }

    /// Wrap raw `e` and `b` matrices, e.g. hand-constructed ones.
    ///
    /// Choices are derived from exact comparisons of the given energies:
    /// `e == 0` is `Empty`, `e == b` on a pairable span is `Paired`,
    /// otherwise the leftmost minimizing split. A pairable `b` equal to
    /// the interior `e` is `Close`, a nonzero `b` whose inner pair can
    /// stack is `Stack`, anything else is `Unpaired`.
    pub fn from_energies<M: EnergyModel>(
        sequence: &[Base],
        model: &M,
        e: Array2<f64>,
        b: Array2<f64>,
    ) -> Result<Self, FoldError> {
        let n = sequence.len();
        for m in [&e, &b] {
            let (rows, cols) = m.dim();
            if rows != n || cols != n {
                return Err(FoldError::ShapeMismatch { rows, cols, sequence: n });
            }
        }

        let mut tables = FoldTables {
            e,
            b,
            span: Array2::from_elem((n, n), SpanChoice::Empty),
            pair: Array2::from_elem((n, n), PairChoice::Unpaired),
        };

        let min_span = model.min_pair_span();
        for j in 0..n {
            for i in (0..=j).rev() {
                if j - i < min_span {
                    continue;
                }
                let pairable = model.can_pair(sequence[i], sequence[j]);
                let (e_ij, b_ij) = (tables.e[(i, j)], tables.b[(i, j)]);

                tables.span[(i, j)] = if e_ij == 0.0 {
                    SpanChoice::Empty
                } else if pairable && e_ij == b_ij {
                    SpanChoice::Paired
                } else {
                    SpanChoice::Split(tables.best_split(i, j).0)
                };

                tables.pair[(i, j)] = if !pairable {
                    PairChoice::Unpaired
                } else if b_ij == tables.e[(i + 1, j - 1)] {
                    PairChoice::Close
                } else if b_ij != 0.0 && tables.can_stack(sequence, model, i, j) {
                    PairChoice::Stack
                } else {
                    PairChoice::Unpaired
                };
            }
        }
        Ok(tables)
    }

    pub fn len(&self) -> usize {
        self.e.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn e(&self, i: usize, j: usize) -> f64 {
        self.e[(i, j)]
    }

    pub fn b(&self, i: usize, j: usize) -> f64 {
        self.b[(i, j)]
    }

    pub fn span_choice(&self, i: usize, j: usize) -> SpanChoice {
        self.span[(i, j)]
    }

    pub fn pair_choice(&self, i: usize, j: usize) -> PairChoice {
        self.pair[(i, j)]
    }

    pub fn e_table(&self) -> &Array2<f64> {
        &self.e
    }

    pub fn b_table(&self) -> &Array2<f64> {
        &self.b
    }

    /// The minimum free energy of the whole sequence, `e[0, N-1]`.
    pub fn mfe(&self) -> f64 {
        match self.len() {
            0 => 0.0,
            n => self.e[(0, n - 1)],
        }
    }

    /// Leftmost `k` in `i..j` minimizing `e[i,k] + e[k+1,j]`.
    pub(crate) fn best_split(&self, i: usize, j: usize) -> (usize, f64) {
        let mut best = (i, f64::INFINITY);
        for k in i..j {
            let energy = self.e[(i, k)] + self.e[(k + 1, j)];
            if energy < best.1 {
                best = (k, energy);
            }
        }
        best
    }

    /// Can (i+1, j-1) pair and still respect the minimum pair span?
    fn can_stack<M: EnergyModel>(&self, sequence: &[Base], model: &M, i: usize, j: usize) -> bool {
        j >= i + model.min_pair_span() + 2 && model.can_pair(sequence[i + 1], sequence[j - 1])
    }

    /// Computes cell (i, j) from cells of strictly shorter spans.
    pub(crate) fn compute_cell<M: EnergyModel>(
        &self,
        sequence: &[Base],
        model: &M,
        i: usize,
        j: usize,
    ) -> Cell {
        if j - i < model.min_pair_span() {
            return Cell::EMPTY;
        }
        let pairable = model.can_pair(sequence[i], sequence[j]);
        let interior = self.e[(i + 1, j - 1)];

        let (b, pair) = if !pairable {
            (0.0, PairChoice::Unpaired)
        } else if self.can_stack(sequence, model, i, j) {
            let outer = PairType::of(sequence, i, j);
            let inner = PairType::of(sequence, i + 1, j - 1);
            let b = model.stack_energy(outer, inner) + self.b[(i + 1, j - 1)];
            // A helix that does no better than the open interior is traced
            // as a closed loop.
            let pair = if b == interior {
                PairChoice::Close
            } else if b != 0.0 {
                PairChoice::Stack
            } else {
                PairChoice::Unpaired
            };
            (b, pair)
        } else {
            (interior, PairChoice::Close)
        };

        let (k, split) = self.best_split(i, j);
        let (e, span) = if pairable && b <= split {
            (b, SpanChoice::Paired)
        } else {
            (split, SpanChoice::Split(k))
        };

        let span = if e == 0.0 { SpanChoice::Empty } else { span };
        Cell { e, b, span, pair }
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, cell: Cell) {
        self.e[(i, j)] = cell.e;
        self.b[(i, j)] = cell.b;
        self.span[(i, j)] = cell.span;
        self.pair[(i, j)] = cell.pair;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_energy::NucleotideVec;
    use sf_energy::StackingModel;

    #[test]
    fn test_new_tables_are_zero() {
        let tables = FoldTables::new(5);
        assert_eq!(tables.len(), 5);
        assert_eq!(tables.mfe(), 0.0);
        assert_eq!(tables.span_choice(0, 4), SpanChoice::Empty);
        assert_eq!(tables.pair_choice(0, 4), PairChoice::Unpaired);
        assert!(FoldTables::new(0).is_empty());
        assert_eq!(FoldTables::new(0).mfe(), 0.0);
    }

    #[test]
    fn test_best_split_is_leftmost() {
        let mut tables = FoldTables::new(6);
        // e[0,1] + e[2,5] == e[0,3] + e[4,5] == -1.0
        tables.e[(2, 5)] = -1.0;
        tables.e[(0, 3)] = -1.0;
        assert_eq!(tables.best_split(0, 5), (1, -1.0));
    }

    #[test]
    fn test_compute_cell_short_span_is_empty() {
        let seq = NucleotideVec::try_from("AAAU").unwrap();
        let model = StackingModel::default();
        let tables = FoldTables::new(seq.len());
        assert_eq!(tables.compute_cell(&seq, &model, 0, 3), Cell::EMPTY);
    }

    #[test]
    fn test_compute_cell_closing_pair() {
        let seq = NucleotideVec::try_from("AAAAU").unwrap();
        let model = StackingModel::default();
        let tables = FoldTables::new(seq.len());
        let cell = tables.compute_cell(&seq, &model, 0, 4);
        assert_eq!(cell.pair, PairChoice::Close);
        assert_eq!(cell.b, 0.0);
        // a lone hairpin is worth nothing
        assert_eq!(cell.span, SpanChoice::Empty);
    }

    #[test]
    fn test_compute_cell_invalid_pair() {
        let seq = NucleotideVec::try_from("GAAAAAAU").unwrap();
        let model = StackingModel::default();
        let tables = FoldTables::new(seq.len());
        let cell = tables.compute_cell(&seq, &model, 0, 7);
        assert_eq!(cell.pair, PairChoice::Unpaired);
        assert_eq!(cell.b, 0.0);
    }

    #[test]
    fn test_compute_cell_stack_tie_closes_loop() {
        // Stacking (8,20) onto (7,21) gives exactly e[8,20], so (7,21)
        // closes a loop instead.
        let seq = NucleotideVec::try_from("GGAUUGCAUAAGUUGUAAGGAUGCAAC").unwrap();
        let model = StackingModel::default();
        let tables = crate::fold(&seq, &model);
        assert_eq!(tables.b(7, 21), tables.e(8, 20));
        assert_eq!(tables.pair_choice(7, 21), PairChoice::Close);
        assert_eq!(tables.pair_choice(8, 16), PairChoice::Stack);
    }

    #[test]
    fn test_from_energies_shape_mismatch() {
        let seq = NucleotideVec::try_from("ACGUA").unwrap();
        let model = StackingModel::default();
        let e = Array2::from_elem((4, 4), 0.0);
        let b = Array2::from_elem((5, 5), 0.0);
        let err = FoldTables::from_energies(&seq, &model, e, b).unwrap_err();
        assert_eq!(err, FoldError::ShapeMismatch { rows: 4, cols: 4, sequence: 5 });
    }
}
