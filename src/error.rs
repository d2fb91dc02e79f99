// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for configuration and export.
//!
//! A stuck attempt is not an error: it is recovered by the retry loop and
//! never leaves the solver. Running out of attempts is reported as
//! [`SolveOutcome::Failed`](crate::solver::SolveOutcome::Failed), also not an
//! error. What remains here are the fatal conditions.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised outside the matching core.
#[derive(Debug, Error)]
pub enum SantaError {
    /// The group has no participants.
    #[error("no participants configured")]
    EmptyGroup,

    /// A participant name is empty or only whitespace.
    #[error("participant at position {position} has an empty name")]
    EmptyName { position: usize },

    /// The same name appears twice in the participant list.
    #[error("participant {name:?} is listed more than once")]
    DuplicateParticipant { name: String },

    /// An exclusion mentions someone who is not in the group.
    #[error("exclusion for {owner:?} names unknown participant {name:?}")]
    UnknownParticipant { owner: String, name: String },

    /// Retry cap of zero would never attempt a solution.
    #[error("max_attempts must be at least 1")]
    ZeroAttempts,

    /// Santa ids of zero length cannot be told apart.
    #[error("id_length must be at least 1")]
    ZeroIdLength,

    /// Two participants drew the same id for the same role.
    #[error("santa id collision on {role} id {id:?}, re-run to draw new ids")]
    IdCollision { role: &'static str, id: String },

    /// The configuration file could not be parsed.
    #[error("invalid configuration in {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Reading the configuration or writing the lookup module failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SantaError>;
