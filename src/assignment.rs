// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The final giver→receiver mapping.
//!
//! An [`Assignment`] is only ever produced from a complete matrix, so every
//! giver appears exactly once and every receiver is claimed exactly once.
//! [`Assignment::verify`] re-checks this from scratch against the group and
//! its exclusions; tests and the CLI both use it as a last line of checking.

use crate::group::{ExclusionSet, ParticipantId, ParticipantSet};
use crate::matrix::EligibilityMatrix;
use std::collections::HashSet;
use thiserror::Error;

/// One giver and the person they give to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair {
    pub giver: ParticipantId,
    pub receiver: ParticipantId,
}

/// A way in which a mapping fails to be a valid assignment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("{count} pairs for a group of {expected}")]
    WrongSize { count: usize, expected: usize },

    #[error("{giver} gives more than once")]
    RepeatedGiver { giver: ParticipantId },

    #[error("{receiver} receives more than once")]
    RepeatedReceiver { receiver: ParticipantId },

    #[error("{giver} is assigned to themself")]
    SelfPair { giver: ParticipantId },

    #[error("{giver} and {receiver} are excluded from each other")]
    ExcludedPair {
        giver: ParticipantId,
        receiver: ParticipantId,
    },
}

/// Complete derangement of the group, in the order of the attempt that found it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pairs: Vec<Pair>,
    attempts: u32,
}

impl Assignment {
    /// Read the assignment off a complete matrix.
    ///
    /// Returns `None` if any row is still unassigned.
    pub fn from_matrix(matrix: &EligibilityMatrix, attempts: u32) -> Option<Self> {
        let pairs = (0..matrix.size())
            .map(|giver| {
                matrix.assigned_receiver(giver).map(|receiver| Pair {
                    giver: matrix.participant_at(giver),
                    receiver: matrix.participant_at(receiver),
                })
            })
            .collect::<Option<Vec<_>>>()?;
        Some(Self { pairs, attempts })
    }

    /// Pairs, in the attempt's shuffled order.
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if the assignment has no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Who `giver` gives to.
    pub fn receiver_of(&self, giver: ParticipantId) -> Option<ParticipantId> {
        self.pairs
            .iter()
            .find(|pair| pair.giver == giver)
            .map(|pair| pair.receiver)
    }

    /// Attempts it took, counting the successful one.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Failed attempts before the successful one.
    pub fn retries(&self) -> u32 {
        self.attempts.saturating_sub(1)
    }

    /// `(giver name, receiver name)` for every pair.
    pub fn named<'p>(
        &'p self,
        participants: &'p ParticipantSet,
    ) -> impl Iterator<Item = (&'p str, &'p str)> + 'p {
        self.pairs
            .iter()
            .map(move |pair| (participants.name(pair.giver), participants.name(pair.receiver)))
    }

    /// Check bijection, no self pairs and no excluded pairs.
    pub fn verify(
        &self,
        participants: &ParticipantSet,
        exclusions: &ExclusionSet,
    ) -> Result<(), Violation> {
        if self.pairs.len() != participants.len() {
            return Err(Violation::WrongSize {
                count: self.pairs.len(),
                expected: participants.len(),
            });
        }
        let mut givers = HashSet::new();
        let mut receivers = HashSet::new();
        for &Pair { giver, receiver } in &self.pairs {
            if !givers.insert(giver) {
                return Err(Violation::RepeatedGiver { giver });
            }
            if !receivers.insert(receiver) {
                return Err(Violation::RepeatedReceiver { receiver });
            }
            if giver == receiver {
                return Err(Violation::SelfPair { giver });
            }
            if exclusions.excludes(giver, receiver) {
                return Err(Violation::ExcludedPair { giver, receiver });
            }
        }
        Ok(())
    }
}
