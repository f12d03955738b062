//! Loading the materialized input files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use weekgrid_core::{GridSpec, Snapshot, TeamConfig};

/// The input files every subcommand needs.
#[derive(Args)]
pub struct InputArgs {
    /// Exported event list (JSON array)
    #[arg(long)]
    pub events: PathBuf,

    /// Exported signup map (JSON object keyed by event id)
    #[arg(long)]
    pub signups: PathBuf,

    /// Team configuration (TOML)
    #[arg(long)]
    pub team: PathBuf,

    /// Grid shape override (TOML with days, start_hour, end_hour)
    #[arg(long)]
    pub grid: Option<PathBuf>,
}

/// Everything the layout engine needs for one pass.
pub struct Inputs {
    pub snapshot: Snapshot,
    pub team: TeamConfig,
    pub spec: GridSpec,
}

pub fn load(args: &InputArgs) -> Result<Inputs> {
    let events_json = read(&args.events)?;
    let signups_json = read(&args.signups)?;
    let snapshot = Snapshot::from_json(&events_json, &signups_json)?;

    let team = TeamConfig::load(&args.team)
        .with_context(|| format!("Failed to load team config from {}", args.team.display()))?;

    let spec = match &args.grid {
        Some(path) => {
            let content = read(path)?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse grid spec {}", path.display()))?
        }
        None => GridSpec::default(),
    };

    Ok(Inputs {
        snapshot,
        team,
        spec,
    })
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
