// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Listing the cells that can still be committed.

use super::{Cell, EligibilityMatrix};

/// A still-allowed (giver slot, receiver slot) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub giver: usize,
    pub receiver: usize,
}

impl Candidate {
    pub const fn new(giver: usize, receiver: usize) -> Self {
        Self { giver, receiver }
    }
}

impl EligibilityMatrix {
    /// All `Allowed` cells, in row-major order.
    ///
    /// Recomputed on every call: each commit changes what is allowed.
    pub fn candidates(&self) -> Vec<Candidate> {
        let n = self.size();
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Allowed)
            .map(|(offset, _)| Candidate::new(offset / n, offset % n))
            .collect()
    }
}
