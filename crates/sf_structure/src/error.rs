
use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum StructureError {
    UnmatchedOpen(usize),                 // '(' at this position was never closed
    UnmatchedClose(usize),                // ')' at this position has no matching '('
    InvalidToken(String, String, usize),  // invalid token, source and position
    SelfPair(usize),                      // (i, i)
    OutOfRange((usize, usize), usize),    // pair and sequence length
    SharedPosition(usize),                // position used by two pairs
    Crossing((usize, usize), (usize, usize)),
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureError::UnmatchedOpen(i) => {
                write!(f, "Unmatched '(' at position {}", i)
            }
            StructureError::UnmatchedClose(i) => {
                write!(f, "Unmatched ')' at position {}", i)
            }
            StructureError::InvalidToken(tok, src, i) => {
                write!(f, "Invalid {} in {} at position {}", tok, src, i)
            }
            StructureError::SelfPair(i) => {
                write!(f, "Position {} cannot pair with itself", i)
            }
            StructureError::OutOfRange((i, j), n) => {
                write!(f, "Pair ({}, {}) out of range for length {}", i, j, n)
            }
            StructureError::SharedPosition(i) => {
                write!(f, "Position {} is part of more than one pair", i)
            }
            StructureError::Crossing((i, j), (k, l)) => {
                write!(f, "Pairs ({}, {}) and ({}, {}) cross", i, j, k, l)
            }
        }
    }
}

impl std::error::Error for StructureError {}

