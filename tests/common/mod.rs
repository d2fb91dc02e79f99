// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use secret_santa::group::{ExclusionSet, ParticipantSet};
use secret_santa::solver::{RetryOrchestrator, SolveOutcome};
use secret_santa::Assignment;

/// Seeded random source so every run of a test sees the same draws.
pub fn rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// A group named `P0`, `P1`, ... `P{n-1}`.
pub fn numbered_group(n: usize) -> ParticipantSet {
    ParticipantSet::new((0..n).map(|i| format!("P{}", i))).unwrap()
}

/// Build a group and its exclusions from names and name pairs.
pub fn group(names: &[&str], excluded: &[(&str, &str)]) -> (ParticipantSet, ExclusionSet) {
    let participants = ParticipantSet::new(names).unwrap();
    let exclusions = ExclusionSet::from_names(
        &participants,
        excluded.iter().map(|&(a, b)| (a, [b])),
    )
    .unwrap();
    (participants, exclusions)
}

/// Solve with the default cap, panicking if no solution is found.
pub fn solve(participants: &ParticipantSet, exclusions: &ExclusionSet, seed: u64) -> Assignment {
    match RetryOrchestrator::new(participants, exclusions).run(&mut rng(seed)) {
        SolveOutcome::Solved(assignment) => assignment,
        SolveOutcome::Failed { attempts } => {
            panic!("no solution after {} attempts (seed {})", attempts, seed)
        }
    }
}
