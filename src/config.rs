// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Group configuration loaded from TOML.
//!
//! ```toml
//! base_url = "https://example.org/santa/"
//! people = ["Ann", "Bob", "Cid", "Dee"]
//!
//! [exclusions]
//! Ann = ["Bob"]
//! ```
//!
//! `output`, `max_attempts` and `id_length` are optional.

use crate::error::{Result, SantaError};
use crate::group::{ExclusionSet, ParticipantSet};
use crate::solver::DEFAULT_MAX_ATTEMPTS;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default location of the generated lookup module.
pub const DEFAULT_OUTPUT: &str = "src/db.js";

/// Contents of the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SantaConfig {
    /// Page the links point at; ids are appended after `#`.
    pub base_url: String,

    /// Everyone taking part, in any order.
    pub people: Vec<String>,

    /// Who must not be paired with whom. Either side may record the pair.
    #[serde(default, alias = "blacklist")]
    pub exclusions: BTreeMap<String, Vec<String>>,

    /// Where to write the lookup module.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Attempts before giving up.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Length of each santa id; defaults to half the group size.
    #[serde(default)]
    pub id_length: Option<usize>,
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

/// Validated inputs for the solver.
#[derive(Debug, Clone)]
pub struct Group {
    pub participants: ParticipantSet,
    pub exclusions: ExclusionSet,
}

impl SantaConfig {
    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| SantaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| SantaError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            path = %path.display(),
            people = config.people.len(),
            exclusions = config.exclusions.len(),
            "loaded configuration"
        );
        Ok(config)
    }

    /// Parse configuration text.
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Check the configuration and build the solver's inputs.
    pub fn validate(&self) -> Result<Group> {
        if self.max_attempts == 0 {
            return Err(SantaError::ZeroAttempts);
        }
        if self.id_length == Some(0) {
            return Err(SantaError::ZeroIdLength);
        }
        let participants = ParticipantSet::new(&self.people)?;
        if participants.is_empty() {
            return Err(SantaError::EmptyGroup);
        }
        let exclusions = ExclusionSet::from_names(&participants, &self.exclusions)?;
        Ok(Group {
            participants,
            exclusions,
        })
    }

    /// Santa id length for a group of `people`: configured, or `max(1, people / 2)`.
    pub fn id_length_for(&self, people: usize) -> usize {
        self.id_length.unwrap_or((people / 2).max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        base_url = "https://example.org/santa/"
        people = ["Ann", "Bob", "Cid"]
    "#;

    #[test]
    fn test_defaults() {
        let config = SantaConfig::parse(MINIMAL).unwrap();
        assert_eq!(config.output, PathBuf::from("src/db.js"));
        assert_eq!(config.max_attempts, 100);
        assert_eq!(config.id_length, None);
        assert!(config.exclusions.is_empty());
    }

    #[test]
    fn test_full_config() {
        let config = SantaConfig::parse(
            r#"
            base_url = "https://example.org/"
            people = ["Ann", "Bob", "Cid", "Dee"]
            output = "out/lookup.js"
            max_attempts = 10
            id_length = 4

            [exclusions]
            Ann = ["Bob"]
            Cid = ["Dee", "Ann"]
            "#,
        )
        .unwrap();
        assert_eq!(config.max_attempts, 10);
        assert_eq!(config.id_length_for(4), 4);

        let group = config.validate().unwrap();
        assert_eq!(group.participants.len(), 4);
        assert_eq!(group.exclusions.len(), 3);
    }

    #[test]
    fn test_blacklist_alias() {
        let config = SantaConfig::parse(
            r#"
            base_url = "x"
            people = ["Ann", "Bob"]
            [blacklist]
            Bob = ["Ann"]
            "#,
        )
        .unwrap();
        assert_eq!(config.exclusions.get("Bob"), Some(&vec!["Ann".to_string()]));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = SantaConfig::parse(
            r#"
            base_url = "x"
            people = ["Ann"]
            peeple = ["Bob"]
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_base_url_rejected() {
        assert!(SantaConfig::parse(r#"people = ["Ann"]"#).is_err());
    }

    #[test]
    fn test_validate_unknown_exclusion() {
        let mut config = SantaConfig::parse(MINIMAL).unwrap();
        config
            .exclusions
            .insert("Ann".to_string(), vec!["Zed".to_string()]);
        assert!(matches!(
            config.validate(),
            Err(SantaError::UnknownParticipant { .. })
        ));
    }

    #[test]
    fn test_validate_empty_group() {
        let mut config = SantaConfig::parse(MINIMAL).unwrap();
        config.people.clear();
        assert!(matches!(config.validate(), Err(SantaError::EmptyGroup)));
    }

    #[test]
    fn test_validate_zero_attempts() {
        let mut config = SantaConfig::parse(MINIMAL).unwrap();
        config.max_attempts = 0;
        assert!(matches!(config.validate(), Err(SantaError::ZeroAttempts)));
    }

    #[test]
    fn test_validate_zero_id_length() {
        let mut config = SantaConfig::parse(MINIMAL).unwrap();
        config.id_length = Some(0);
        assert!(matches!(config.validate(), Err(SantaError::ZeroIdLength)));
    }

    #[test]
    fn test_default_id_length() {
        let config = SantaConfig::parse(MINIMAL).unwrap();
        assert_eq!(config.id_length_for(2), 1);
        assert_eq!(config.id_length_for(3), 1);
        assert_eq!(config.id_length_for(9), 4);
        assert_eq!(config.id_length_for(1), 1);
    }
}
