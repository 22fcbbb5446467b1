mod commands;
mod render;
mod store;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "postplan-cli")]
#[command(about = "Generate weekly content plans for real-estate agents and export them to CSV/ICS")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a fresh weekly plan and write it to the plan file
    Generate {
        /// Week start date (YYYY-MM-DD), snapped back to Monday. Defaults to the current week
        #[arg(long)]
        start: Option<String>,

        /// Platform to post on (repeatable). Defaults to the configured platforms
        #[arg(short, long = "platform")]
        platforms: Vec<String>,

        /// Posts per week per platform (1-7)
        #[arg(short = 'n', long)]
        posts_per_week: Option<u8>,

        /// Voice style: Expert, Friendly or "Light humor"
        #[arg(long)]
        tone: Option<String>,

        /// Seed the random source for a reproducible plan
        #[arg(long)]
        seed: Option<u64>,

        /// Plan file to write
        #[arg(long, default_value = "content-plan.json")]
        plan: PathBuf,
    },
    /// Show the current plan
    Show {
        /// Plan file to read
        #[arg(long, default_value = "content-plan.json")]
        plan: PathBuf,
    },
    /// Export the current plan to a file
    Export {
        /// Output format: csv or ics
        format: String,

        /// Plan file to read
        #[arg(long, default_value = "content-plan.json")]
        plan: PathBuf,

        /// Output file. Defaults to content-plan-<week-start>.<ext>
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            start,
            platforms,
            posts_per_week,
            tone,
            seed,
            plan,
        } => commands::generate::run(start, platforms, posts_per_week, tone, seed, &plan),
        Commands::Show { plan } => commands::show::run(&plan),
        Commands::Export { format, plan, out } => commands::export::run(&format, &plan, out),
    }
}
