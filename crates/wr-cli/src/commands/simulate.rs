use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use wr_core::SimulationLog;

use super::SimArgs;

pub fn run(args: &SimArgs, table: bool, json: bool) -> Result<(), String> {
    let log = super::run_simulation(args)?;

    if json {
        println!("{}", super::to_json(&log)?);
        return Ok(());
    }

    // Header
    println!(
        "  {} {} - {} {}",
        "Weather".bold(),
        log.start,
        log.end,
        format!(
            "({} day{}, {} segment{})",
            log.total_days,
            if log.total_days == 1 { "" } else { "s" },
            log.len(),
            if log.len() == 1 { "" } else { "s" },
        )
        .dimmed()
    );
    println!();

    if table {
        println!("{}", summary_table(&log));
        println!();
    } else {
        for segment in &log.segments {
            println!("  {}", segment.header().cyan().bold());
            super::print_outcome(&segment.outcome);
            if let Some(natural_end) = segment.natural_end {
                println!("  {}", format!("(Ends {natural_end})").dimmed());
            }
            println!();
        }
    }

    Ok(())
}

fn summary_table(log: &SimulationLog) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["From", "To", "Weather", "Days", "Note"]);

    for segment in &log.segments {
        let note = segment
            .natural_end
            .map(|end| format!("ends {end}"))
            .unwrap_or_default();
        table.add_row(vec![
            segment.start.to_string(),
            segment.end.to_string(),
            segment.outcome.headline(),
            segment.outcome.duration_days.to_string(),
            note,
        ]);
    }

    table
}
