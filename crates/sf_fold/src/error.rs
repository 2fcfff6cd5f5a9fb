use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum FoldError {
    /// Tables were filled for a sequence of a different length.
    LengthMismatch { tables: usize, sequence: usize },
    /// A raw energy matrix is not `n x n` for a sequence of length `n`.
    ShapeMismatch { rows: usize, cols: usize, sequence: usize },
}

impl fmt::Display for FoldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoldError::LengthMismatch { tables, sequence } => {
                write!(f, "Tables of length {} cannot be traced for a sequence of length {}",
                    tables, sequence)
            }
            FoldError::ShapeMismatch { rows, cols, sequence } => {
                write!(f, "Energy matrix of shape {}x{} does not match sequence length {}",
                    rows, cols, sequence)
            }
        }
    }
}

impl std::error::Error for FoldError {}

