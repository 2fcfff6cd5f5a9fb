//! A minimal nearest neighbor model: canonical Watson-Crick pairs and a
//! 4x4 table of helix stacking energies (kcal/mol). Hairpins and all
//! other loops are free.
//!
//! Parameter files contain exactly four rows of four numbers. Rows are
//! the outer pair, columns the inner pair, both in the order AU CG GC UA.
//! Everything after a `#` is a comment, blank lines are ignored:
//!
//! ```text
//! # stack    AU    CG    GC    UA
//!          -1.1  -2.1  -2.2  -0.6
//!          -2.1  -2.4  -3.3  -1.4
//!          -2.2  -3.3  -3.4  -1.5
//!          -0.6  -1.4  -1.5  -0.3
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use log::{debug, warn};
use colored::*;

use crate::Base;
use crate::PairType;
use crate::PCOUNT;
use crate::EnergyModel;

pub type StackTable = [[f64; PCOUNT]; PCOUNT];

pub const DEFAULT_STACK: StackTable = [
    [-1.1, -2.1, -2.2, -0.6],
    [-2.1, -2.4, -3.3, -1.4],
    [-2.2, -3.3, -3.4, -1.5],
    [-0.6, -1.4, -1.5, -0.3],
];

pub const DEFAULT_MIN_HAIRPIN: usize = 3;

#[derive(Debug)]
pub enum ParameterError {
    Io(std::io::Error),
    RowCount(usize),
    ColumnCount { line: usize, found: usize },
    InvalidNumber { line: usize, token: String },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterError::Io(e) => {
                write!(f, "Cannot read parameter file: {}", e)
            }
            ParameterError::RowCount(n) => {
                write!(f, "Expected {} rows of stacking energies, found {}", PCOUNT, n)
            }
            ParameterError::ColumnCount { line, found } => {
                write!(f, "Expected {} values on line {}, found {}", PCOUNT, line, found)
            }
            ParameterError::InvalidNumber { line, token } => {
                write!(f, "Invalid number '{}' on line {}", token, line)
            }
        }
    }
}

impl std::error::Error for ParameterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParameterError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ParameterError {
    fn from(e: std::io::Error) -> Self {
        ParameterError::Io(e)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StackingModel {
    stack: StackTable,
    min_hairpin: usize,
}

impl Default for StackingModel {
    fn default() -> Self {
        StackingModel::new(DEFAULT_STACK)
    }
}

impl StackingModel {
    pub fn new(stack: StackTable) -> Self {
        for outer in PairType::CANONICAL {
            for inner in PairType::CANONICAL {
                let e = stack[outer as usize][inner as usize];
                if e > 0.0 {
                    warn!("{} Destabilizing stack {}/{}: {} (positive stacks never contribute to an MFE)",
                        "WARNING:".red(), outer, inner, e);
                }
            }
        }
        StackingModel { stack, min_hairpin: DEFAULT_MIN_HAIRPIN }
    }

    pub fn with_min_hairpin(mut self, min_hairpin: usize) -> Self {
        self.min_hairpin = min_hairpin;
        self
    }

    pub fn stack_table(&self) -> &StackTable {
        &self.stack
    }

    pub fn from_parameter_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        debug!("Reading stacking parameters from {:?}", path.as_ref());
        let content = fs::read_to_string(path)?;
        Self::from_parameter_str(&content)
    }

    pub fn from_parameter_str(content: &str) -> Result<Self, ParameterError> {
        let mut stack = [[0.0; PCOUNT]; PCOUNT];
        let mut rows = 0;

        for (lnum, line) in content.lines().enumerate() {
            let line = line.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != PCOUNT {
                return Err(ParameterError::ColumnCount { line: lnum + 1, found: tokens.len() });
            }
            if rows < PCOUNT {
                for (inner, token) in tokens.iter().enumerate() {
                    stack[rows][inner] = token.parse::<f64>().map_err(|_| {
                        ParameterError::InvalidNumber { line: lnum + 1, token: token.to_string() }
                    })?;
                }
            }
            rows += 1;
        }

        if rows != PCOUNT {
            return Err(ParameterError::RowCount(rows));
        }
        Ok(StackingModel::new(stack))
    }
}

impl EnergyModel for StackingModel {
    fn can_pair(&self, b1: Base, b2: Base) -> bool {
        PairType::from((b1, b2)).can_pair()
    }

    fn min_hairpin_size(&self) -> usize {
        self.min_hairpin
    }

    fn stack_energy(&self, outer: PairType, inner: PairType) -> f64 {
        assert!(outer.can_pair() && inner.can_pair(),
            "No stacking energy for non-canonical pair {}/{}", outer, inner);
        self.stack[outer as usize][inner as usize]
    }
}
