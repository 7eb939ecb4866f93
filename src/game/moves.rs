use super::board::COLS;

/// Bitmask of playable columns: bit `i` is set iff column `i` accepts a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Moves(u8);

impl Moves {
    pub fn from_bits(bits: u8) -> Self {
        Moves(bits & ((1 << COLS) - 1))
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, col: usize) -> bool {
        col < COLS && (self.0 >> col) & 1 == 1
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Nth playable column in ascending order.
    pub fn nth(self, n: usize) -> Option<usize> {
        self.into_iter().nth(n)
    }

    pub(super) fn insert(&mut self, col: usize) {
        self.0 |= 1 << col;
    }
}

impl IntoIterator for Moves {
    type Item = usize;
    type IntoIter = MovesIter;

    fn into_iter(self) -> MovesIter {
        MovesIter(self.0)
    }
}

/// Ascending iterator over the columns of a [`Moves`] mask.
pub struct MovesIter(u8);

impl Iterator for MovesIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.0 == 0 {
            return None;
        }
        let col = self.0.trailing_zeros() as usize;
        // clear lowest set bit
        self.0 &= self.0 - 1;
        Some(col)
    }
}
