// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Committing one giver→receiver choice.

use super::{Candidate, Cell, EligibilityMatrix};

impl EligibilityMatrix {
    /// Commit `candidate`: forbid the rest of its row and column, then mark
    /// the cell `Assigned`.
    ///
    /// Clearing the whole row means the giver gets exactly one receiver;
    /// clearing the column means nobody else can pick the same receiver.
    ///
    /// # Panics
    ///
    /// Panics if the cell is not currently `Allowed`.
    pub fn commit(&mut self, candidate: Candidate) {
        let Candidate { giver, receiver } = candidate;
        let current = self.cell(giver, receiver);
        assert_eq!(
            current,
            Cell::Allowed,
            "Cannot commit ({}, {}): cell is {:?}",
            giver,
            receiver,
            current
        );

        for slot in 0..self.size() {
            self.set(giver, slot, Cell::Forbidden);
            self.set(slot, receiver, Cell::Forbidden);
        }
        self.set(giver, receiver, Cell::Assigned);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::{ExclusionSet, ParticipantId};

    fn matrix(n: usize) -> EligibilityMatrix {
        EligibilityMatrix::from_order((0..n).map(ParticipantId::new).collect(), &ExclusionSet::new())
    }

    #[test]
    fn test_row_and_column_cleared() {
        let mut m = matrix(4);
        m.commit(Candidate::new(1, 3));

        for slot in 0..4 {
            if slot != 3 {
                assert_eq!(m.cell(1, slot), Cell::Forbidden);
            }
            if slot != 1 {
                assert_eq!(m.cell(slot, 3), Cell::Forbidden);
            }
        }
        assert_eq!(m.cell(1, 3), Cell::Assigned);
    }

    #[test]
    fn test_other_cells_untouched() {
        let mut m = matrix(4);
        m.commit(Candidate::new(1, 3));
        assert_eq!(m.cell(0, 2), Cell::Allowed);
        assert_eq!(m.cell(2, 0), Cell::Allowed);
        assert_eq!(m.cell(3, 1), Cell::Allowed);
    }

    #[test]
    #[should_panic(expected = "Cannot commit (2, 2)")]
    fn test_commit_diagonal_panics() {
        let mut m = matrix(3);
        m.commit(Candidate::new(2, 2));
    }

    #[test]
    #[should_panic(expected = "cell is Assigned")]
    fn test_commit_twice_panics() {
        let mut m = matrix(3);
        m.commit(Candidate::new(0, 1));
        m.commit(Candidate::new(0, 1));
    }

    #[test]
    #[should_panic(expected = "cell is Forbidden")]
    fn test_commit_claimed_receiver_panics() {
        let mut m = matrix(3);
        m.commit(Candidate::new(0, 1));
        m.commit(Candidate::new(2, 1));
    }
}
