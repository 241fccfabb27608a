//! gd-tool: generate and audit ghost statlines
//!
//! Prints generated demon lords or ugly things as JSON, or checks a JSON
//! file of stored statlines for integrity.

use std::error::Error;
use std::fmt::Display;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use strum::IntoEnumIterator;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gd_core::GameRng;
use gd_core::data::Colour;
use gd_core::monster::GhostDemon;
use gd_core::player::Species;
use gd_core::world::{SyllableNames, check_ghost};

/// Ghost and demon statline tool
#[derive(Parser, Debug)]
#[command(name = "gd-tool")]
#[command(author, version, about = "Generate and audit ghost statlines", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Roll Pandemonium demon lords
    Demons {
        /// Number of demons to roll
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// RNG seed (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Species of the player meeting the demons (e.g. HillOrc)
        #[arg(long, default_value = "Human")]
        viewer: String,
    },

    /// Roll ugly things
    Ugly {
        /// Number of ugly things to roll
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Make very ugly things
        #[arg(long)]
        very: bool,

        /// Force a colour (e.g. Red, Brown)
        #[arg(long)]
        colour: Option<String>,

        /// RNG seed (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Check a JSON array of statlines; exits with status 1 on failure
    Check {
        /// Path to the JSON file
        file: String,
    },
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gd_core=info,gd_tool=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    match args.command {
        Command::Demons {
            count,
            seed,
            viewer,
        } => {
            let viewer = parse_named(Species::iter(), &viewer, "species")?;
            let mut rng = make_rng(seed);
            let demons: Vec<GhostDemon> = (0..count)
                .map(|_| GhostDemon::pandemonium_lord(&mut rng, viewer, &SyllableNames))
                .collect();
            println!("{}", serde_json::to_string_pretty(&demons)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Ugly {
            count,
            very,
            colour,
            seed,
        } => {
            let colour = colour
                .map(|name| parse_named(Colour::iter(), &name, "colour"))
                .transpose()?;
            let mut rng = make_rng(seed);
            let things: Vec<GhostDemon> = (0..count)
                .map(|_| GhostDemon::ugly_thing(&mut rng, very, colour))
                .collect();
            println!("{}", serde_json::to_string_pretty(&things)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { file } => check_file(&file),
    }
}

fn make_rng(seed: Option<u64>) -> GameRng {
    let rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
    tracing::info!(seed = rng.seed(), "Using RNG seed");
    rng
}

/// Find the enum value whose display name matches `name`, ignoring case
fn parse_named<T: Display>(
    mut values: impl Iterator<Item = T>,
    name: &str,
    what: &str,
) -> Result<T, String> {
    values
        .find(|value| value.to_string().eq_ignore_ascii_case(name))
        .ok_or_else(|| format!("unknown {what} '{name}'"))
}

fn check_file(path: &str) -> Result<ExitCode, Box<dyn Error>> {
    let text = std::fs::read_to_string(path)?;
    let ghosts: Vec<GhostDemon> = serde_json::from_str(&text)?;

    let mut failures = 0;
    for (index, ghost) in ghosts.iter().enumerate() {
        if let Err(err) = check_ghost(ghost) {
            println!("#{index} {:?} '{}': {err}", ghost.kind, ghost.name);
            failures += 1;
        }
    }

    tracing::info!(checked = ghosts.len(), failures, "Check complete");

    if failures == 0 {
        println!("{} statlines OK", ghosts.len());
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
