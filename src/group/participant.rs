// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Participant names and their ids.
//!
//! # Examples
//!
//! ```
//! use secret_santa::group::ParticipantSet;
//!
//! let people = ParticipantSet::new(["Ann", "Bob", "Cid"]).unwrap();
//! assert_eq!(people.len(), 3);
//!
//! let bob = people.id_of("Bob").unwrap();
//! assert_eq!(bob.index(), 1);
//! assert_eq!(people.name(bob), "Bob");
//! ```

use crate::error::{Result, SantaError};
use std::collections::HashMap;
use std::fmt;

/// A participant, identified by position in the configured [`ParticipantSet`].
///
/// This is a newtype wrapper so that participant positions are not mixed up
/// with positions in a shuffled attempt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticipantId(usize);

impl ParticipantId {
    /// Create an id from a raw index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the index (for array indexing).
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ordered sequence of unique participant names.
///
/// The configured order is kept as given. Each attempt shuffles its own copy
/// of the ids, so this set is never reordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantSet {
    names: Vec<String>,
    by_name: HashMap<String, ParticipantId>,
}

impl ParticipantSet {
    /// Build a set from names, rejecting empty and duplicate names.
    ///
    /// Names are trimmed of surrounding whitespace.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self {
            names: Vec::new(),
            by_name: HashMap::new(),
        };
        for (position, name) in names.into_iter().enumerate() {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return Err(SantaError::EmptyName { position });
            }
            if set.by_name.contains_key(name) {
                return Err(SantaError::DuplicateParticipant {
                    name: name.to_string(),
                });
            }
            set.by_name
                .insert(name.to_string(), ParticipantId::new(set.names.len()));
            set.names.push(name.to_string());
        }
        Ok(set)
    }

    /// Number of participants.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the group is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Look up a participant's id by name.
    pub fn id_of(&self, name: &str) -> Option<ParticipantId> {
        self.by_name.get(name.trim()).copied()
    }

    /// Name of the given participant.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this set.
    pub fn name(&self, id: ParticipantId) -> &str {
        &self.names[id.index()]
    }

    /// All ids, in configured order.
    pub fn ids(&self) -> impl Iterator<Item = ParticipantId> + '_ {
        (0..self.names.len()).map(ParticipantId::new)
    }

    /// All names, in configured order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}
