pub mod export;
pub mod roll;
pub mod simulate;
pub mod table;

use clap::Args;
use colored::Colorize;
use tracing::debug;

use wr_core::{RollOutcome, SimulationLog, WeatherConfig, WeatherRoller};

/// Start date, duration, and seed shared by `simulate` and `export`.
#[derive(Args, Debug, Clone)]
pub struct SimArgs {
    /// Start month (1-12)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: u32,

    /// Start day (1-30)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=30))]
    pub day: u32,

    /// Start year
    #[arg(short, long, allow_negative_numbers = true)]
    pub year: i64,

    /// Duration in days
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub days: i64,

    /// RNG seed for a reproducible simulation
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl SimArgs {
    fn config(&self) -> WeatherConfig {
        config_for(self.seed)
    }
}

fn config_for(seed: Option<u64>) -> WeatherConfig {
    match seed {
        Some(seed) => WeatherConfig::default().with_seed(seed),
        None => WeatherConfig::default(),
    }
}

/// Run the simulation described by the command-line arguments.
fn run_simulation(args: &SimArgs) -> Result<SimulationLog, String> {
    debug!(
        month = args.month,
        day = args.day,
        year = args.year,
        days = args.days,
        seed = ?args.seed,
        "starting simulation"
    );
    let mut roller = WeatherRoller::new(args.config().rng());
    wr_core::simulate(args.month, args.day, args.year, args.days, &mut roller)
        .map_err(|e| e.to_string())
}

/// Print a roll's text, highlighting its heading and duration.
fn print_outcome(outcome: &RollOutcome) {
    let mut lines = outcome.text.lines();
    if let Some(heading) = lines.next() {
        println!("  {}", heading.bold());
    }
    for line in lines {
        if line.is_empty() {
            println!();
        } else if line.starts_with("Duration:") {
            println!("  {}", line.yellow());
        } else if line.trim() == "~and~" {
            println!("  {}", line.trim().dimmed());
        } else {
            println!("  {line}");
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("JSON serialization error: {e}"))
}
