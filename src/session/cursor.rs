use serde::Serialize;

/// Zero-based position into a non-empty sequence. Moves clamp at both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Cursor {
    index: usize,
    len: usize,
}

impl Cursor {
    /// `len` of zero is treated as one so the index stays valid.
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.len
    }

    /// Returns true if the position changed.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Returns true if the position changed.
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Fraction in (0, 1] for progress display.
    pub fn progress(&self) -> f64 {
        (self.index + 1) as f64 / self.len as f64
    }
}
