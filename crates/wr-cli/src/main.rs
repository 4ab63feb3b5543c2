//! CLI frontend for the weather roller.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::SimArgs;

#[derive(Parser)]
#[command(
    name = "wr",
    about = "Weather roller: campaign weather for tabletop games",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log roll and segment details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll the weather once
    Roll {
        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the roll as JSON
        #[arg(long)]
        json: bool,
    },

    /// Roll weather for a custom duration starting on a date
    Simulate {
        #[command(flatten)]
        sim: SimArgs,

        /// Show a summary table instead of the full log
        #[arg(short, long)]
        table: bool,

        /// Print the log as JSON
        #[arg(long, conflicts_with = "table")]
        json: bool,
    },

    /// List the weather table and its duration dice
    Table,

    /// Simulate and export the weather log
    Export {
        /// Output format: text, markdown, html, json
        format: String,

        #[command(flatten)]
        sim: SimArgs,

        /// Output file or directory (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Line width for text export
        #[arg(long, default_value = "80")]
        width: usize,

        /// Lines per page for text export
        #[arg(long, default_value = "40")]
        page_lines: usize,
    },
}

fn init_tracing(verbose: bool) {
    let default_directives = if verbose {
        "wr_core=debug,wr_cli=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Roll { seed, json } => commands::roll::run(seed, json),
        Commands::Simulate { sim, table, json } => commands::simulate::run(&sim, table, json),
        Commands::Table => commands::table::run(),
        Commands::Export {
            format,
            sim,
            output,
            width,
            page_lines,
        } => {
            let layout = commands::export::ExportLayout::new(width, page_lines);
            commands::export::run(&sim, &format, output.as_deref(), layout)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
