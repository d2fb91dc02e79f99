// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `santa`: draw the pairs, write the lookup module, print the links.

use anyhow::{Context, Result};
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use secret_santa::export::{write_failure_report, Export};
use secret_santa::{RetryOrchestrator, SantaConfig, SolveOutcome};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "santa")]
#[command(about = "Draw secret santa pairs and print one anonymous link per giver", long_about = None)]
struct Cli {
    /// Group configuration file
    #[arg(short, long, default_value = "santa.toml")]
    config: PathBuf,

    /// Seed for the random source; drawn at random and logged if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Override the configured attempt cap
    #[arg(long)]
    max_attempts: Option<u32>,

    /// Print the links without writing the lookup module
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut config = SantaConfig::load(&cli.config)?;
    if let Some(max_attempts) = cli.max_attempts {
        config.max_attempts = max_attempts;
    }
    let group = config.validate()?;

    let seed = cli.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!(seed, people = group.participants.len(), "drawing");
    let mut rng = ChaCha20Rng::seed_from_u64(seed);

    let outcome = RetryOrchestrator::new(&group.participants, &group.exclusions)
        .with_max_attempts(config.max_attempts)
        .run(&mut rng);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let assignment = match outcome {
        SolveOutcome::Solved(assignment) => assignment,
        SolveOutcome::Failed { .. } => {
            write_failure_report(&mut out)?;
            return Ok(ExitCode::FAILURE);
        }
    };
    assignment
        .verify(&group.participants, &group.exclusions)
        .context("solver produced an invalid assignment")?;

    let id_length = config.id_length_for(group.participants.len());
    let export = Export::new(
        &group.participants,
        &assignment,
        &config.base_url,
        id_length,
        &mut rng,
    )?;

    if cli.dry_run {
        warn!("dry run, lookup module not written");
    } else {
        export.write_module(&config.output)?;
    }
    export.write_report(&mut out)?;
    Ok(ExitCode::SUCCESS)
}
