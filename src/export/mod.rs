// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Turning an assignment into anonymous links.
//!
//! - [`santa_id`]: random short ids
//! - [`SantaDb`]: id → name lookup for both roles, rendered as an ES module
//! - [`Export`]: the table plus one link per giver, and the console report
//!
//! The solver only promises a valid assignment. Id collisions and write
//! failures are this module's own fatal errors.

pub mod db;
pub mod santa_id;

pub use db::{Role, SantaDb};
pub use santa_id::{santa_id, SANTA_ALPHABET};

use crate::assignment::Assignment;
use crate::error::{Result, SantaError};
use crate::group::ParticipantSet;
use rand::Rng;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

const BANNER: &str = "---------- santa --------";

/// The link one giver receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub giver: String,
    pub url: String,
}

/// Everything produced from one solved assignment.
#[derive(Debug, Clone)]
pub struct Export {
    db: SantaDb,
    links: Vec<Link>,
    retries: u32,
}

impl Export {
    /// Mint ids and build one link per giver, in assignment order.
    ///
    /// # Example
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha20Rng;
    /// use secret_santa::export::Export;
    /// use secret_santa::group::{ExclusionSet, ParticipantSet};
    /// use secret_santa::solver::RetryOrchestrator;
    ///
    /// let people = ParticipantSet::new(["Ann", "Bob", "Cid"]).unwrap();
    /// let none = ExclusionSet::new();
    /// let mut rng = ChaCha20Rng::seed_from_u64(12);
    /// let outcome = RetryOrchestrator::new(&people, &none).run(&mut rng);
    /// let assignment = outcome.assignment().expect("three people always solve within 100 tries");
    ///
    /// let export = Export::new(&people, assignment, "https://example.org/", 4, &mut rng).unwrap();
    /// assert_eq!(export.links().len(), 3);
    /// assert!(export.links()[0].url.starts_with("https://example.org/#"));
    /// ```
    pub fn new<R: Rng + ?Sized>(
        participants: &ParticipantSet,
        assignment: &Assignment,
        base_url: &str,
        id_length: usize,
        rng: &mut R,
    ) -> Result<Self> {
        if id_length == 0 {
            return Err(SantaError::ZeroIdLength);
        }
        let db = SantaDb::mint(participants, id_length, rng)?;
        let links = assignment
            .named(participants)
            .map(|(giver, receiver)| {
                let giver_id = db.giver_id(giver).unwrap_or_default();
                let receiver_id = db.receiver_id(receiver).unwrap_or_default();
                Link {
                    giver: giver.to_string(),
                    url: format!("{}#{}/{}", base_url, giver_id, receiver_id),
                }
            })
            .collect();
        Ok(Self {
            db,
            links,
            retries: assignment.retries(),
        })
    }

    pub fn db(&self) -> &SantaDb {
        &self.db
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Write the lookup module to `path`, creating parent directories.
    pub fn write_module(&self, path: &Path) -> Result<()> {
        let io_error = |source| SantaError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        fs::write(path, self.db.render_module()).map_err(io_error)?;
        info!(path = %path.display(), participants = self.db.len(), "wrote lookup module");
        Ok(())
    }

    /// Print the solution banner and one `name\t: link` line per giver.
    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", BANNER)?;
        writeln!(out, "Found solution after {} retries", self.retries)?;
        writeln!(out, "solution is printed only once. make sure to remember urls")?;
        for link in &self.links {
            writeln!(out, "{}\t: {}", link.giver, link.url)?;
        }
        writeln!(out, "{}", BANNER)
    }
}

/// Print the report for a run that found no assignment.
pub fn write_failure_report<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", BANNER)?;
    writeln!(out, "could not solve ;-(")?;
    writeln!(out, "{}", BANNER)
}
