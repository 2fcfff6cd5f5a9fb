
use sf_structure::PairTable;

use crate::Base;
use crate::PairType;

pub trait EnergyModel {
    fn can_pair(&self, b1: Base, b2: Base) -> bool;

    /// Minimum number of unpaired bases enclosed by a hairpin. A pair
    /// (i, j) requires `j - i > min_hairpin_size()`.
    fn min_hairpin_size(&self) -> usize;

    /// Stabilization of `inner` = (i+1, j-1) stacked onto `outer` = (i, j).
    ///
    /// Panics if either argument is `PairType::NN`.
    fn stack_energy(&self, outer: PairType, inner: PairType) -> f64;

    /// Smallest span `j - i` a pair (i, j) may have.
    fn min_pair_span(&self) -> usize {
        self.min_hairpin_size() + 1
    }

    /// Stacking free energy of a given structure: every pair (i, j) whose
    /// immediately nested (i+1, j-1) is also paired contributes one stack.
    /// Loops contribute nothing.
    ///
    /// Panics if `sequence` and `structure` differ in length, or if a
    /// stacked pair is not canonical.
    fn energy_of_structure(&self, sequence: &[Base], structure: &PairTable) -> f64 {
        assert_eq!(sequence.len(), structure.len(), "sequence/structure length mismatch");
        let mut energy = 0.0;
        for (i, &j_opt) in structure.iter().enumerate() {
            let Some(j) = j_opt else { continue };
            if j > i && structure.is_stacked(i, j) {
                let outer = PairType::of(sequence, i, j);
                let inner = PairType::of(sequence, i + 1, j - 1);
                energy += self.stack_energy(outer, inner);
            }
        }
        energy
    }
}
