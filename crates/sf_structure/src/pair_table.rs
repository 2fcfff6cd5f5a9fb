use std::ops::Deref;
use std::convert::TryFrom;
use crate::StructureError;
use crate::{DotBracket, DotBracketVec};
use crate::PairList;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairTable(pub Vec<Option<usize>>);

impl PairTable {
    /// Are (i, j) and (i+1, j-1) both paired with each other?
    pub fn is_stacked(&self, i: usize, j: usize) -> bool {
        i + 2 < j
            && self.get(i).copied().flatten() == Some(j)
            && self.get(i + 1).copied().flatten() == Some(j - 1)
    }
}

impl Deref for PairTable {
    type Target = [Option<usize>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<&str> for PairTable {
    type Error = StructureError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut stack = Vec::new();
        let mut table = vec![None; s.len()];

        for (i, c) in s.chars().enumerate() {
            match c {
                '(' => stack.push(i),
                ')' => {
                    let j = stack.pop().ok_or(StructureError::UnmatchedClose(i))?;
                    table[i] = Some(j);
                    table[j] = Some(i);
                }
                '.' => (),
                _ => return Err(StructureError::InvalidToken(format!("character '{}'", c), "structure".to_string(), i)),
            }
        }

        if let Some(i) = stack.pop() {
            return Err(StructureError::UnmatchedOpen(i));
        }
        Ok(PairTable(table))
    }
}

impl TryFrom<&DotBracketVec> for PairTable {
    type Error = StructureError;

    fn try_from(db: &DotBracketVec) -> Result<Self, Self::Error> {
        let mut stack: Vec<usize> = Vec::new();
        let mut table = vec![None; db.len()];

        for (i, dot) in db.iter().enumerate() {
            match dot {
                DotBracket::Open => stack.push(i),
                DotBracket::Close => {
                    let j = stack.pop().ok_or(StructureError::UnmatchedClose(i))?;
                    table[i] = Some(j);
                    table[j] = Some(i);
                }
                DotBracket::Unpaired => {}
            }
        }

        if let Some(i) = stack.pop() {
            return Err(StructureError::UnmatchedOpen(i));
        }

        Ok(PairTable(table))
    }
}

impl TryFrom<&PairList> for PairTable {
    type Error = StructureError;

    /// Rejects self pairs, out-of-range positions, positions shared by two
    /// pairs and crossing pairs (pseudoknots).
    fn try_from(pl: &PairList) -> Result<Self, Self::Error> {
        let n = pl.length();
        let mut table = vec![None; n];

        for p in pl.iter() {
            let (i, j) = (p.i(), p.j());
            if i == j {
                return Err(StructureError::SelfPair(i));
            }
            if j >= n {
                return Err(StructureError::OutOfRange((i, j), n));
            }
            for k in [i, j] {
                if table[k].is_some() {
                    return Err(StructureError::SharedPosition(k));
                }
            }
            table[i] = Some(j);
            table[j] = Some(i);
        }

        let mut stack: Vec<usize> = Vec::new();
        for (k, &partner) in table.iter().enumerate() {
            match partner {
                Some(l) if l > k => stack.push(k),
                Some(l) => {
                    // The only open pair we may close is the innermost one.
                    if let Some(&top) = stack.last() {
                        if top != l {
                            let other = table[top].unwrap_or(top);
                            return Err(StructureError::Crossing((l, k), (top, other)));
                        }
                    }
                    stack.pop();
                }
                None => (),
            }
        }

        Ok(PairTable(table))
    }
}
