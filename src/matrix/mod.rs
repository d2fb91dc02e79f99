// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-attempt eligibility matrix.
//!
//! The matrix is an N×N grid indexed by (giver slot, receiver slot), where a
//! slot is a position in the attempt's shuffled participant order. Each cell
//! is one of three [`Cell`] states.
//!
//! # Lifecycle
//!
//! 1. [`EligibilityMatrix::build`] shuffles the participants and marks
//!    self pairs and excluded pairs `Forbidden`, everything else `Allowed`.
//! 2. [`EligibilityMatrix::candidates`] lists the `Allowed` cells.
//! 3. [`EligibilityMatrix::commit`] fixes one giver→receiver choice.
//!
//! The matrix is owned by exactly one attempt and thrown away afterwards,
//! whether the attempt solved or got stuck.
//!
//! # Invariants
//!
//! - Diagonal cells are always `Forbidden`.
//! - A cell that is `Forbidden` never changes again.
//! - After committing (g, r), row g and column r hold no `Allowed` cell and
//!   (g, r) is `Assigned`.

mod builder;
mod candidates;
mod commit;

pub use candidates::Candidate;

use crate::group::ParticipantId;
use std::fmt;

/// State of one (giver, receiver) cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// The pairing is still possible.
    Allowed,
    /// Self pair, excluded pair, or eliminated by a commit.
    Forbidden,
    /// The committed receiver for this giver.
    Assigned,
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Allowed => '1',
            Cell::Forbidden => '0',
            Cell::Assigned => 'x',
        }
    }
}

/// Eligibility grid for one attempt, together with the attempt's order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibilityMatrix {
    /// Participant occupying each slot.
    order: Vec<ParticipantId>,
    /// Row-major cells, `order.len()` squared.
    cells: Vec<Cell>,
}

impl EligibilityMatrix {
    /// Number of slots (participants in this attempt).
    pub fn size(&self) -> usize {
        self.order.len()
    }

    /// The attempt's participant order; slot `i` is `order()[i]`.
    pub fn order(&self) -> &[ParticipantId] {
        &self.order
    }

    /// Participant in the given slot.
    pub fn participant_at(&self, slot: usize) -> ParticipantId {
        self.order[slot]
    }

    /// State of cell (giver, receiver).
    ///
    /// # Panics
    ///
    /// Panics if either slot is out of range.
    pub fn cell(&self, giver: usize, receiver: usize) -> Cell {
        self.cells[self.offset(giver, receiver)]
    }

    /// The cells of one giver's row.
    pub fn row(&self, giver: usize) -> &[Cell] {
        let n = self.size();
        &self.cells[giver * n..(giver + 1) * n]
    }

    /// Receiver slot committed for `giver`, if any.
    pub fn assigned_receiver(&self, giver: usize) -> Option<usize> {
        self.row(giver).iter().position(|&c| c == Cell::Assigned)
    }

    /// True once every row holds an `Assigned` cell.
    ///
    /// An empty matrix is trivially complete.
    pub fn is_complete(&self) -> bool {
        (0..self.size()).all(|giver| self.assigned_receiver(giver).is_some())
    }

    /// Number of rows that already hold an `Assigned` cell.
    pub fn assigned_count(&self) -> usize {
        (0..self.size())
            .filter(|&giver| self.assigned_receiver(giver).is_some())
            .count()
    }

    fn offset(&self, giver: usize, receiver: usize) -> usize {
        let n = self.size();
        assert!(
            giver < n && receiver < n,
            "Cell ({}, {}) out of range for {}x{} matrix",
            giver,
            receiver,
            n,
            n
        );
        giver * n + receiver
    }

    fn set(&mut self, giver: usize, receiver: usize, cell: Cell) {
        let offset = self.offset(giver, receiver);
        self.cells[offset] = cell;
    }
}

/// Grid rendering: `1` allowed, `0` forbidden, `x` assigned, one row per line.
impl fmt::Display for EligibilityMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for giver in 0..self.size() {
            for (receiver, cell) in self.row(giver).iter().enumerate() {
                if receiver > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
