// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The group taking part in the exchange.
//!
//! - [`ParticipantSet`]: ordered, unique participant names
//! - [`ParticipantId`]: index of a participant within its set
//! - [`ExclusionSet`]: symmetric "must not be paired" relation

pub mod exclusion;
pub mod participant;

pub use exclusion::ExclusionSet;
pub use participant::{ParticipantId, ParticipantSet};
