// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symmetric exclusion relation between participants.
//!
//! Pairs are stored with the smaller id first, so `excludes(a, b)` and
//! `excludes(b, a)` always agree no matter which side recorded the entry.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//! use secret_santa::group::{ExclusionSet, ParticipantSet};
//!
//! let people = ParticipantSet::new(["Ann", "Bob", "Cid"]).unwrap();
//! let mut couples = BTreeMap::new();
//! couples.insert("Bob", vec!["Ann"]);
//!
//! let exclusions = ExclusionSet::from_names(&people, couples).unwrap();
//! let ann = people.id_of("Ann").unwrap();
//! let bob = people.id_of("Bob").unwrap();
//! assert!(exclusions.excludes(ann, bob));
//! assert!(exclusions.excludes(bob, ann));
//! ```

use crate::error::{Result, SantaError};
use crate::group::{ParticipantId, ParticipantSet};
use std::collections::BTreeSet;

/// Set of unordered participant pairs that must not be matched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    pairs: BTreeSet<(ParticipantId, ParticipantId)>,
}

impl ExclusionSet {
    /// Create an empty relation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the relation from a name-keyed mapping.
    ///
    /// Every owner and every excluded name must belong to `participants`,
    /// otherwise [`SantaError::UnknownParticipant`] is returned.
    pub fn from_names<I, K, V, N>(participants: &ParticipantSet, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        let mut set = Self::new();
        for (owner, excluded) in entries {
            let owner = owner.as_ref();
            let owner_id = participants
                .id_of(owner)
                .ok_or_else(|| SantaError::UnknownParticipant {
                    owner: owner.to_string(),
                    name: owner.to_string(),
                })?;
            for name in excluded {
                let name = name.as_ref();
                let id = participants
                    .id_of(name)
                    .ok_or_else(|| SantaError::UnknownParticipant {
                        owner: owner.to_string(),
                        name: name.to_string(),
                    })?;
                set.insert(owner_id, id);
            }
        }
        Ok(set)
    }

    /// Record that `a` and `b` must not be paired, in either direction.
    pub fn insert(&mut self, a: ParticipantId, b: ParticipantId) {
        self.pairs.insert(Self::key(a, b));
    }

    /// Check whether `a` and `b` are mutually excluded.
    pub fn excludes(&self, a: ParticipantId, b: ParticipantId) -> bool {
        self.pairs.contains(&Self::key(a, b))
    }

    /// Number of distinct excluded pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if nothing is excluded.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Excluded pairs, smaller id first.
    pub fn iter(&self) -> impl Iterator<Item = (ParticipantId, ParticipantId)> + '_ {
        self.pairs.iter().copied()
    }

    fn key(a: ParticipantId, b: ParticipantId) -> (ParticipantId, ParticipantId) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}
