// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Retry loop around [`AttemptSolver`].
//!
//! # States
//!
//! ```text
//!             stuck, attempts < cap
//!              ┌──────────────┐
//!              ▼              │
//!        ┌────────────┐───────┘
//!   ───▶ │ Attempting │──── solved ─────▶ Solved
//!        └────────────┘
//!              │ stuck, attempts == cap
//!              ▼
//!            Failed
//! ```
//!
//! Each step builds a fresh, reshuffled matrix and runs one attempt on it.
//! The matrix is dropped at the end of the step; only the winning
//! assignment survives. `Solved` and `Failed` are terminal.

use super::attempt::{AttemptOutcome, AttemptSolver};
use super::statistics::{Counters, Statistics};
use crate::assignment::Assignment;
use crate::group::{ExclusionSet, ParticipantSet};
use crate::matrix::EligibilityMatrix;
use rand::Rng;
use tracing::{debug, info, trace, warn};

/// Attempts made before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// Where the retry loop currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveState {
    /// Still trying; `attempts` have been made and were all stuck.
    Attempting { attempts: u32 },
    /// Terminal: a valid assignment was found.
    Solved(Assignment),
    /// Terminal: every attempt got stuck.
    Failed { attempts: u32 },
}

impl SolveState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SolveState::Attempting { .. })
    }
}

/// What crosses the solver's boundary once it stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    Solved(Assignment),
    Failed { attempts: u32 },
}

impl SolveOutcome {
    /// The assignment, if one was found.
    pub fn assignment(&self) -> Option<&Assignment> {
        match self {
            SolveOutcome::Solved(assignment) => Some(assignment),
            SolveOutcome::Failed { .. } => None,
        }
    }
}

/// Repeats attempts on freshly built matrices until one solves or the cap is hit.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
/// use secret_santa::group::{ExclusionSet, ParticipantSet};
/// use secret_santa::solver::{RetryOrchestrator, SolveOutcome};
///
/// let people = ParticipantSet::new(["Ann", "Bob", "Cid", "Dee"]).unwrap();
/// let couples = ExclusionSet::from_names(&people, [("Ann", ["Bob"])]).unwrap();
/// let mut rng = ChaCha20Rng::seed_from_u64(2025);
///
/// let outcome = RetryOrchestrator::new(&people, &couples).run(&mut rng);
/// match outcome {
///     SolveOutcome::Solved(assignment) => {
///         assert!(assignment.verify(&people, &couples).is_ok());
///     }
///     SolveOutcome::Failed { attempts } => assert_eq!(attempts, 100),
/// }
/// ```
#[derive(Debug)]
pub struct RetryOrchestrator<'a> {
    participants: &'a ParticipantSet,
    exclusions: &'a ExclusionSet,
    max_attempts: u32,
    state: SolveState,
    statistics: Statistics,
}

impl<'a> RetryOrchestrator<'a> {
    /// Create an orchestrator with the default cap of [`DEFAULT_MAX_ATTEMPTS`].
    pub fn new(participants: &'a ParticipantSet, exclusions: &'a ExclusionSet) -> Self {
        Self {
            participants,
            exclusions,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            state: SolveState::Attempting { attempts: 0 },
            statistics: Statistics::new(),
        }
    }

    /// Replace the attempt cap.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn state(&self) -> &SolveState {
        &self.state
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Make one attempt, if still attempting, and return the new state.
    ///
    /// Stepping a terminal orchestrator does nothing.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &SolveState {
        let attempts = match self.state {
            SolveState::Attempting { attempts } => attempts,
            SolveState::Solved(_) | SolveState::Failed { .. } => return &self.state,
        };
        if attempts >= self.max_attempts {
            self.state = SolveState::Failed { attempts };
            return &self.state;
        }

        let attempt = attempts + 1;
        let mut matrix = EligibilityMatrix::build(self.participants, self.exclusions, rng);
        let mut solver = AttemptSolver::new(&mut matrix);
        let outcome = solver.run(rng);
        let commits = solver.commits();

        self.statistics.increment_counter(Counters::Attempts);
        self.statistics.add(Counters::Commits, commits as u64);
        trace!(attempt, "matrix after attempt:\n{}", matrix);

        self.state = match outcome {
            AttemptOutcome::Solved => {
                self.statistics.increment_counter(Counters::Solutions);
                debug!(attempt, commits, "attempt solved");
                match Assignment::from_matrix(&matrix, attempt) {
                    Some(assignment) => SolveState::Solved(assignment),
                    None => unreachable!("solved attempt left a giver unassigned"),
                }
            }
            AttemptOutcome::Stuck => {
                self.statistics.increment_counter(Counters::StuckAttempts);
                debug!(
                    attempt,
                    commits,
                    unassigned = matrix.size() - matrix.assigned_count(),
                    "attempt stuck"
                );
                if attempt >= self.max_attempts {
                    SolveState::Failed { attempts: attempt }
                } else {
                    SolveState::Attempting { attempts: attempt }
                }
            }
        };
        &self.state
    }

    /// Step until a terminal state and return the outcome.
    pub fn run<R: Rng + ?Sized>(mut self, rng: &mut R) -> SolveOutcome {
        while !self.state.is_terminal() {
            self.step(rng);
        }
        match self.state {
            SolveState::Solved(assignment) => {
                info!(
                    participants = assignment.len(),
                    retries = assignment.retries(),
                    statistics = %self.statistics,
                    "found solution"
                );
                SolveOutcome::Solved(assignment)
            }
            SolveState::Failed { attempts } => {
                warn!(attempts, statistics = %self.statistics, "no solution found");
                SolveOutcome::Failed { attempts }
            }
            SolveState::Attempting { .. } => unreachable!("loop exits only on a terminal state"),
        }
    }
}
