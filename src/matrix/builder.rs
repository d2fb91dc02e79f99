// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Building a fresh matrix for one attempt.

use super::{Cell, EligibilityMatrix};
use crate::group::{ExclusionSet, ParticipantId, ParticipantSet};
use rand::seq::SliceRandom;
use rand::Rng;

impl EligibilityMatrix {
    /// Shuffle the participants and build the attempt's matrix.
    ///
    /// The shuffle is a uniform Fisher-Yates shuffle over a copy of the ids;
    /// `participants` itself is never reordered.
    ///
    /// # Example
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha20Rng;
    /// use secret_santa::group::{ExclusionSet, ParticipantSet};
    /// use secret_santa::matrix::{Cell, EligibilityMatrix};
    ///
    /// let people = ParticipantSet::new(["Ann", "Bob", "Cid"]).unwrap();
    /// let mut rng = ChaCha20Rng::seed_from_u64(7);
    /// let matrix = EligibilityMatrix::build(&people, &ExclusionSet::new(), &mut rng);
    ///
    /// assert_eq!(matrix.size(), 3);
    /// assert_eq!(matrix.cell(1, 1), Cell::Forbidden);
    /// assert_eq!(matrix.candidates().len(), 6);
    /// ```
    pub fn build<R: Rng + ?Sized>(
        participants: &ParticipantSet,
        exclusions: &ExclusionSet,
        rng: &mut R,
    ) -> Self {
        let mut order: Vec<ParticipantId> = participants.ids().collect();
        order.shuffle(rng);
        Self::from_order(order, exclusions)
    }

    /// Build a matrix over an explicit participant order, without shuffling.
    pub fn from_order(order: Vec<ParticipantId>, exclusions: &ExclusionSet) -> Self {
        let cells = order
            .iter()
            .enumerate()
            .flat_map(|(giver_slot, &giver)| {
                order.iter().enumerate().map(move |(receiver_slot, &receiver)| {
                    if giver_slot == receiver_slot || exclusions.excludes(giver, receiver) {
                        Cell::Forbidden
                    } else {
                        Cell::Allowed
                    }
                })
            })
            .collect();
        Self { order, cells }
    }
}
