// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Secret santa assignment with exclusions.
//!
//! Every member of a group is assigned a secret recipient such that nobody
//! gives to themself and no excluded pair (couples, say) is matched in either
//! direction. The result is handed to an exporter that produces one anonymous
//! link per giver.
//!
//! # Architecture
//!
//! The matching core is a randomized greedy search with restarts:
//!
//! 1. **Build**: shuffle the group and build an N×N eligibility matrix where
//!    self pairs and excluded pairs are forbidden ([`matrix`]).
//! 2. **Enumerate**: list every still-allowed (giver, receiver) cell.
//! 3. **Commit**: pick one at random, mark it assigned, and forbid the rest of
//!    that giver's row and that receiver's column.
//! 4. **Repeat** until every giver is assigned, or until nothing is allowed
//!    while givers remain ([`solver::AttemptSolver`]).
//! 5. **Retry** a stuck attempt from scratch with a new shuffle, up to a
//!    fixed cap ([`solver::RetryOrchestrator`]).
//!
//! There is no backtracking inside an attempt and no feasibility check up
//! front. A group with no valid assignment fails after the cap is reached;
//! a group with one almost always succeeds long before.
//!
//! Around the core:
//!
//! - [`config`]: TOML configuration, validated into [`group`] types
//! - [`export`]: santa ids, the lookup module, links and the console report
//!
//! All randomness comes from an injected [`rand::Rng`], so seeded runs are
//! reproducible.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//! use secret_santa::group::{ExclusionSet, ParticipantSet};
//! use secret_santa::solver::{RetryOrchestrator, SolveOutcome};
//!
//! let people = ParticipantSet::new(["A", "B", "C", "D"]).unwrap();
//! let none = ExclusionSet::new();
//! let mut rng = ChaCha20Rng::seed_from_u64(4);
//!
//! if let SolveOutcome::Solved(assignment) = RetryOrchestrator::new(&people, &none).run(&mut rng) {
//!     assert_eq!(assignment.len(), 4);
//!     for pair in assignment.pairs() {
//!         assert_ne!(pair.giver, pair.receiver);
//!     }
//! }
//! ```

pub mod assignment;
pub mod config;
pub mod error;
pub mod export;
pub mod group;
pub mod matrix;
pub mod solver;

// Re-export commonly used types
pub use assignment::{Assignment, Pair};
pub use config::SantaConfig;
pub use error::{Result, SantaError};
pub use solver::{RetryOrchestrator, SolveOutcome};
