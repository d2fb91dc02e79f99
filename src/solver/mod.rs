// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Randomized greedy matching with bounded retries.
//!
//! # Architecture
//!
//! - [`AttemptSolver`]: one attempt. Repeatedly enumerate the allowed cells,
//!   pick one uniformly at random and commit it, until every giver is
//!   assigned (solved) or nothing is allowed while givers remain (stuck).
//! - [`RetryOrchestrator`]: runs attempts on freshly shuffled matrices until
//!   one solves or the attempt cap is reached.
//!
//! A stuck attempt never leaves this module. Callers see either
//! [`SolveOutcome::Solved`] with a complete [`Assignment`](crate::Assignment)
//! or [`SolveOutcome::Failed`].
//!
//! The solver does not prove infeasibility: a group with a valid assignment
//! can still fail if every attempt is unlucky.

pub mod attempt;
pub mod orchestrator;
pub mod statistics;

pub use attempt::{AttemptOutcome, AttemptSolver, Step};
pub use orchestrator::{RetryOrchestrator, SolveOutcome, SolveState, DEFAULT_MAX_ATTEMPTS};
pub use statistics::{Counters, Statistics};
