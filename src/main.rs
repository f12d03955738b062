mod commands;
mod html;
mod inputs;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use inputs::InputArgs;

#[derive(Parser)]
#[command(name = "weekgrid")]
#[command(about = "Render the shared week calendar from exported events and signups")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the laid-out week grid to the terminal
    Show {
        #[command(flatten)]
        inputs: InputArgs,

        /// Only show this day (by its configured name)
        #[arg(short, long)]
        day: Option<String>,

        /// Dump the grid model as JSON instead of rendering it
        #[arg(long)]
        json: bool,
    },
    /// Write the week grid as a standalone HTML page
    Export {
        #[command(flatten)]
        inputs: InputArgs,

        /// Output path for the generated HTML
        #[arg(short, long)]
        out: PathBuf,
    },
    /// List renderable events grouped by day
    Events {
        #[command(flatten)]
        inputs: InputArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show { inputs, day, json } => commands::show::run(&inputs, day.as_deref(), json),
        Commands::Export { inputs, out } => commands::export::run(&inputs, &out),
        Commands::Events { inputs } => commands::events::run(&inputs),
    }
}
