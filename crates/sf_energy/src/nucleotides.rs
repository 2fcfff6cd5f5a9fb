use std::fmt;
use std::borrow::Borrow;
use std::ops::Deref;


#[derive(Debug, PartialEq, Eq)]
pub enum SequenceError {
    InvalidChar(char, usize),
    Separator(char, usize),
}

impl SequenceError {
    fn at(self, pos: usize) -> Self {
        match self {
            SequenceError::InvalidChar(c, _) => SequenceError::InvalidChar(c, pos),
            SequenceError::Separator(c, _) => SequenceError::Separator(c, pos),
        }
    }
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::InvalidChar(c, i) => {
                write!(f, "Unsupported nucleotide: '{}' at position {}", c, i)
            }
            SequenceError::Separator(c, i) => {
                write!(f, "Unexpected strand separation character '{}' at position {}", c, i)
            }
        }
    }
}

impl std::error::Error for SequenceError {}


#[derive(Clone, Hash, Copy, Debug, Eq, PartialEq)]
pub enum Base { A, C, G, U }
pub const BCOUNT: usize = 4; // 4 Base variants for tables.

impl TryFrom<char> for Base {
    type Error = SequenceError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Base::A),
            'C' => Ok(Base::C),
            'G' => Ok(Base::G),
            'U' | 'T' => Ok(Base::U),
            '&' | '+' => Err(SequenceError::Separator(c, 0)),
            _ => Err(SequenceError::InvalidChar(c, 0)),
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::U => 'U',
        };
        write!(f, "{}", c)
    }
}


#[derive(Clone, Hash, Debug, Eq, PartialEq)]
pub struct NucleotideVec(pub Vec<Base>);

impl Deref for NucleotideVec {
    type Target = [Base];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<[Base]> for NucleotideVec {
    fn borrow(&self) -> &[Base] {
        &self.0
    }
}

impl TryFrom<&str> for NucleotideVec {
    type Error = SequenceError;

    /// Fails on the first character outside the alphabet.
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut vec = Vec::with_capacity(s.len());
        for (i, c) in s.chars().enumerate() {
            vec.push(Base::try_from(c).map_err(|e| e.at(i))?);
        }
        Ok(NucleotideVec(vec))
    }
}

impl fmt::Display for NucleotideVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in &self.0 {
            write!(f, "{}", base)?;
        }
        Ok(())
    }
}

const PAIR_LOOKUP: [[PairType; BCOUNT]; BCOUNT] = {
    use Base::*;
    use PairType::*;
    let mut table = [[NN; BCOUNT]; BCOUNT];
    table[A as usize][U as usize] = AU;
    table[C as usize][G as usize] = CG;
    table[G as usize][C as usize] = GC;
    table[U as usize][A as usize] = UA;
    table
};

/// The canonical pair kinds, in stacking table order. `NN` marks two
/// bases that cannot pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PairType { AU, CG, GC, UA, NN }
pub const PCOUNT: usize = 4; // 4 canonical Pair variants for tables.

impl From<(Base, Base)> for PairType {
    fn from(pair: (Base, Base)) -> Self {
        PAIR_LOOKUP[pair.0 as usize][pair.1 as usize]
    }
}

impl fmt::Display for PairType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PairType::AU => "A-U",
            PairType::CG => "C-G",
            PairType::GC => "G-C",
            PairType::UA => "U-A",
            PairType::NN => "N-N",
        };
        write!(f, "{}", s)
    }
}

impl PairType {
    pub const CANONICAL: [PairType; PCOUNT] = [PairType::AU, PairType::CG, PairType::GC, PairType::UA];

    /// The pair formed by positions `i` and `j` of `sequence`.
    pub fn of(sequence: &[Base], i: usize, j: usize) -> Self {
        PairType::from((sequence[i], sequence[j]))
    }

    pub fn can_pair(&self) -> bool {
       self != &PairType::NN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Base::*;

    #[test]
    fn test_base_from_char() {
        assert_eq!(Base::try_from('a'), Ok(A));
        assert_eq!(Base::try_from('T'), Ok(U));
        assert_eq!(Base::try_from('X'), Err(SequenceError::InvalidChar('X', 0)));
        assert_eq!(Base::try_from('&'), Err(SequenceError::Separator('&', 0)));
    }

    #[test]
    fn test_nucleotide_vec_roundtrip_display() {
        let seq = NucleotideVec::try_from("acgtU").unwrap();
        assert_eq!(seq.len(), 5);
        assert_eq!(seq.to_string(), "ACGUU");
    }

    #[test]
    fn test_nucleotide_vec_reports_position() {
        let err = NucleotideVec::try_from("ACGNU").unwrap_err();
        assert_eq!(err, SequenceError::InvalidChar('N', 3));
        assert_eq!(err.to_string(), "Unsupported nucleotide: 'N' at position 3");

        let err = NucleotideVec::try_from("AC+GU").unwrap_err();
        assert_eq!(err, SequenceError::Separator('+', 2));
    }

    #[test]
    fn test_empty_sequence_is_valid() {
        let seq = NucleotideVec::try_from("").unwrap();
        assert!(seq.is_empty());
    }

    #[test]
    fn test_pair_lookup() {
        assert_eq!(PairType::from((A, U)), PairType::AU);
        assert_eq!(PairType::from((U, A)), PairType::UA);
        assert_eq!(PairType::from((C, G)), PairType::CG);
        assert_eq!(PairType::from((G, C)), PairType::GC);
        assert_eq!(PairType::from((G, U)), PairType::NN);
        assert_eq!(PairType::from((A, A)), PairType::NN);
        assert_eq!(PairType::from((U, U)), PairType::NN);
    }

    #[test]
    fn test_canonical_pairs_can_pair() {
        for pt in PairType::CANONICAL {
            assert!(pt.can_pair());
        }
        assert!(!PairType::NN.can_pair());
    }

    #[test]
    fn test_canonical_order_matches_discriminants() {
        for (idx, pt) in PairType::CANONICAL.iter().enumerate() {
            assert_eq!(*pt as usize, idx);
        }
    }
}
