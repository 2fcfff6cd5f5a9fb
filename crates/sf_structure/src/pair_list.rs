//! Pair and PairList definitions.
//!
//! A PairList keeps base pairs in the order they were discovered, which
//! is what a traceback naturally produces. Positions are 0-based.
//! Converting into a PairTable checks that the list describes a proper
//! (nested, non-overlapping) secondary structure.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair { i: usize, j: usize }

impl Pair {
    /// Positions are stored in increasing order.
    pub fn new(i: usize, j: usize) -> Self {
        if i <= j { Pair { i, j } } else { Pair { i: j, j: i } }
    }

    pub fn i(&self) -> usize {
        self.i
    }

    pub fn j(&self) -> usize {
        self.j
    }

    /// Distance between the two paired positions.
    pub fn span(&self) -> usize {
        self.j - self.i
    }

    /// The pair immediately nested inside this one: (i+1, j-1).
    pub fn inner(&self) -> Option<Pair> {
        (self.j >= self.i + 2).then(|| Pair::new(self.i + 1, self.j - 1))
    }

    pub fn shares_position(&self, other: &Pair) -> bool {
        self.i == other.i || self.i == other.j || self.j == other.i || self.j == other.j
    }

    /// True if exactly one position of `other` lies inside this pair.
    pub fn crosses(&self, other: &Pair) -> bool {
        let inside = |x: usize| self.i < x && x < self.j;
        !self.shares_position(other) && (inside(other.i) != inside(other.j))
    }
}

impl From<(usize, usize)> for Pair {
    fn from((i, j): (usize, usize)) -> Self {
        Pair::new(i, j)
    }
}

impl From<Pair> for (usize, usize) {
    fn from(p: Pair) -> Self {
        (p.i, p.j)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairList {
    length: usize,
    pairs: Vec<Pair>,
}

impl PairList {
    pub fn new(length: usize) -> Self {
        PairList { length, pairs: Vec::new() }
    }

    pub fn from_pairs(length: usize, pairs: impl IntoIterator<Item = (usize, usize)>) -> Self {
        PairList {
            length,
            pairs: pairs.into_iter().map(Pair::from).collect(),
        }
    }

    pub fn push(&mut self, pair: Pair) {
        self.pairs.push(pair);
    }

    pub fn pairs(&self) -> &Vec<Pair> {
        &self.pairs
    }

    /// Length of the underlying sequence (not the number of pairs).
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn contains(&self, i: usize, j: usize) -> bool {
        self.pairs.contains(&Pair::new(i, j))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pair> {
        self.pairs.iter()
    }
}
