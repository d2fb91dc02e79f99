// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Property tests over random groups and exclusion lists.

mod common;

use common::{numbered_group, rng};
use proptest::prelude::*;
use secret_santa::group::{ExclusionSet, ParticipantId};
use secret_santa::matrix::{Cell, EligibilityMatrix};
use secret_santa::solver::{Counters, RetryOrchestrator, SolveState};

/// A group size and a list of raw exclusion pairs within it.
fn arb_group() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..12).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..n * 2)))
}

fn exclusions_from(pairs: &[(usize, usize)]) -> ExclusionSet {
    let mut set = ExclusionSet::new();
    for &(a, b) in pairs {
        set.insert(ParticipantId::new(a), ParticipantId::new(b));
    }
    set
}

proptest! {
    /// Whatever the outcome, a solution is valid and the cap is respected.
    #[test]
    fn outcome_valid_or_capped((n, pairs) in arb_group(), seed in any::<u64>(), cap in 1u32..30) {
        let people = numbered_group(n);
        let exclusions = exclusions_from(&pairs);
        let mut orchestrator = RetryOrchestrator::new(&people, &exclusions).with_max_attempts(cap);
        let mut rng = rng(seed);
        while !orchestrator.state().is_terminal() {
            orchestrator.step(&mut rng);
        }
        prop_assert!(orchestrator.statistics().get(Counters::Attempts) <= u64::from(cap));
        match orchestrator.state() {
            SolveState::Solved(assignment) => {
                prop_assert_eq!(assignment.verify(&people, &exclusions), Ok(()));
            }
            SolveState::Failed { attempts } => prop_assert_eq!(*attempts, cap),
            SolveState::Attempting { .. } => prop_assert!(false, "not terminal"),
        }
    }

    /// Exclusion lookups agree in both directions.
    #[test]
    fn exclusion_symmetric((n, pairs) in arb_group()) {
        let exclusions = exclusions_from(&pairs);
        for a in 0..n {
            for b in 0..n {
                let a = ParticipantId::new(a);
                let b = ParticipantId::new(b);
                prop_assert_eq!(exclusions.excludes(a, b), exclusions.excludes(b, a));
            }
        }
    }

    /// A fresh matrix forbids exactly the diagonal and the excluded pairs.
    #[test]
    fn fresh_matrix_matches_exclusions((n, pairs) in arb_group(), seed in any::<u64>()) {
        let people = numbered_group(n);
        let exclusions = exclusions_from(&pairs);
        let matrix = EligibilityMatrix::build(&people, &exclusions, &mut rng(seed));
        for giver in 0..n {
            for receiver in 0..n {
                let forbidden = giver == receiver
                    || exclusions.excludes(matrix.participant_at(giver), matrix.participant_at(receiver));
                let expected = if forbidden { Cell::Forbidden } else { Cell::Allowed };
                prop_assert_eq!(matrix.cell(giver, receiver), expected);
            }
        }
    }
}
