// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! One greedy attempt over a fresh matrix.
//!
//! Each step enumerates the allowed cells, picks one uniformly at random and
//! commits it. There is no backtracking: an unlucky early pick can leave a
//! giver with nothing allowed, and the whole attempt is then abandoned.

use crate::matrix::{Candidate, EligibilityMatrix};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

/// Result of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// One more giver was assigned.
    Committed(Candidate),
    /// Every giver already has a receiver.
    Solved,
    /// Givers remain but nothing is allowed.
    Stuck,
}

/// How an attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    Solved,
    Stuck,
}

/// Drives one attempt, owning mutable access to its matrix.
#[derive(Debug)]
pub struct AttemptSolver<'m> {
    matrix: &'m mut EligibilityMatrix,
    commits: usize,
}

impl<'m> AttemptSolver<'m> {
    pub fn new(matrix: &'m mut EligibilityMatrix) -> Self {
        Self { matrix, commits: 0 }
    }

    /// Number of commits made so far.
    pub fn commits(&self) -> usize {
        self.commits
    }

    /// Read access to the matrix being solved.
    pub fn matrix(&self) -> &EligibilityMatrix {
        &*self.matrix
    }

    /// Commit one randomly chosen candidate, or report that the attempt is over.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Step {
        if self.matrix.is_complete() {
            return Step::Solved;
        }
        let candidates = self.matrix.candidates();
        match candidates.choose(rng) {
            Some(&candidate) => {
                self.matrix.commit(candidate);
                self.commits += 1;
                trace!(
                    giver = candidate.giver,
                    receiver = candidate.receiver,
                    remaining = candidates.len() - 1,
                    "committed"
                );
                Step::Committed(candidate)
            }
            None => Step::Stuck,
        }
    }

    /// Step until solved or stuck.
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> AttemptOutcome {
        loop {
            match self.step(rng) {
                Step::Committed(_) => continue,
                Step::Solved => return AttemptOutcome::Solved,
                Step::Stuck => return AttemptOutcome::Stuck,
            }
        }
    }
}
