// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lookup table from santa ids back to names.
//!
//! Every participant gets one id as a giver and an independent id as a
//! receiver. A link carries the giver's own giver id and their recipient's
//! receiver id, so whoever holds the table cannot read off who gives to whom
//! without also holding the links.

use super::santa_id::santa_id;
use crate::error::{Result, SantaError};
use crate::group::ParticipantSet;
use rand::Rng;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

/// Which half of a link an id belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Giver,
    Receiver,
}

impl Role {
    fn as_str(self) -> &'static str {
        match self {
            Role::Giver => "giver",
            Role::Receiver => "receiver",
        }
    }
}

/// Ids for one role: id → name, plus name → id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct RoleTable {
    names: BTreeMap<String, String>,
    ids: HashMap<String, String>,
}

impl RoleTable {
    fn insert(&mut self, role: Role, id: String, name: &str) -> Result<()> {
        if self.names.contains_key(&id) {
            return Err(SantaError::IdCollision {
                role: role.as_str(),
                id,
            });
        }
        self.ids.insert(name.to_string(), id.clone());
        self.names.insert(id, name.to_string());
        Ok(())
    }

    fn to_json(&self) -> Value {
        Value::Object(
            self.names
                .iter()
                .map(|(id, name)| (id.clone(), Value::String(name.clone())))
                .collect::<Map<String, Value>>(),
        )
    }
}

/// Giver and receiver ids for a whole group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SantaDb {
    from: RoleTable,
    to: RoleTable,
}

impl SantaDb {
    /// Mint a giver id and a receiver id of `id_length` for every participant.
    ///
    /// Fails with [`SantaError::IdCollision`] if two participants draw the
    /// same id for the same role. With short ids that can happen; running
    /// again draws fresh ids.
    pub fn mint<R: Rng + ?Sized>(
        participants: &ParticipantSet,
        id_length: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let mut db = Self::default();
        for name in participants.names() {
            db.from.insert(Role::Giver, santa_id(rng, id_length), name)?;
            db.to.insert(Role::Receiver, santa_id(rng, id_length), name)?;
        }
        Ok(db)
    }

    /// Id used when `name` is giving.
    pub fn giver_id(&self, name: &str) -> Option<&str> {
        self.from.ids.get(name).map(String::as_str)
    }

    /// Id used when `name` is receiving.
    pub fn receiver_id(&self, name: &str) -> Option<&str> {
        self.to.ids.get(name).map(String::as_str)
    }

    /// Resolve the two halves of a link to `(giver, receiver)` names.
    ///
    /// This is the same lookup the generated module's `pair()` performs.
    pub fn pair(&self, giver_id: &str, receiver_id: &str) -> Option<(&str, &str)> {
        let giver = self.from.names.get(giver_id)?;
        let receiver = self.to.names.get(receiver_id)?;
        Some((giver.as_str(), receiver.as_str()))
    }

    /// Resolve the fragment of a link, `giverId/receiverId`.
    pub fn resolve_fragment(&self, fragment: &str) -> Option<(&str, &str)> {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        let (giver_id, receiver_id) = fragment.split_once('/')?;
        self.pair(giver_id, receiver_id)
    }

    /// Number of participants in the table.
    pub fn len(&self) -> usize {
        self.from.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.from.names.is_empty()
    }

    /// Render the ES module the web page imports.
    ///
    /// Only id → name maps are written; names never appear as keys.
    pub fn render_module(&self) -> String {
        format!(
            "export const db = {{ from: {}, to: {} }};\n\
             export function pair() {{ \
             const [fromId, toId] = location.hash.slice(1).split(\"/\"); \
             return [db.from[fromId], db.to[toId]]; }}\n",
            self.from.to_json(),
            self.to.to_json()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn people() -> ParticipantSet {
        ParticipantSet::new(["Ann", "Bob", "Cid", "Dee"]).unwrap()
    }

    #[test]
    fn test_every_name_has_both_ids() {
        let mut rng = ChaCha20Rng::seed_from_u64(8);
        let db = SantaDb::mint(&people(), 6, &mut rng).unwrap();
        assert_eq!(db.len(), 4);
        for name in people().names() {
            let giver_id = db.giver_id(name).unwrap();
            let receiver_id = db.receiver_id(name).unwrap();
            assert_eq!(giver_id.len(), 6);
            assert_eq!(db.pair(giver_id, receiver_id), Some((name.as_str(), name.as_str())));
        }
    }

    #[test]
    fn test_roles_are_independent() {
        let mut rng = ChaCha20Rng::seed_from_u64(8);
        let db = SantaDb::mint(&people(), 6, &mut rng).unwrap();
        let ann_giver = db.giver_id("Ann").unwrap();
        // A giver id does not resolve as a receiver id.
        assert_eq!(db.to.names.get(ann_giver), None);
    }

    #[test]
    fn test_collision_detected() {
        // One-character ids from a 36-letter alphabet cannot cover 40 people.
        let names: Vec<String> = (0..40).map(|i| format!("p{}", i)).collect();
        let people = ParticipantSet::new(&names).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let err = SantaDb::mint(&people, 1, &mut rng).unwrap_err();
        assert!(matches!(err, SantaError::IdCollision { .. }));
    }

    #[test]
    fn test_resolve_fragment() {
        let mut rng = ChaCha20Rng::seed_from_u64(4);
        let db = SantaDb::mint(&people(), 5, &mut rng).unwrap();
        let fragment = format!(
            "#{}/{}",
            db.giver_id("Bob").unwrap(),
            db.receiver_id("Dee").unwrap()
        );
        assert_eq!(db.resolve_fragment(&fragment), Some(("Bob", "Dee")));
        assert_eq!(db.resolve_fragment("nonsense"), None);
        assert_eq!(db.resolve_fragment("#a/b"), None);
    }

    #[test]
    fn test_render_module() {
        let mut db = SantaDb::default();
        db.from.insert(Role::Giver, "g1".to_string(), "Ann").unwrap();
        db.to.insert(Role::Receiver, "r1".to_string(), "Ann \"A\"").unwrap();
        assert_eq!(
            db.render_module(),
            "export const db = { from: {\"g1\":\"Ann\"}, to: {\"r1\":\"Ann \\\"A\\\"\"} };\n\
             export function pair() { const [fromId, toId] = location.hash.slice(1).split(\"/\"); \
             return [db.from[fromId], db.to[toId]]; }\n"
        );
    }
}
