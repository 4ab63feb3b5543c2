use comfy_table::{ContentArrangement, Table};

use wr_core::Die;
use wr_core::roller::NYX_FACE;
use wr_core::table::{self, NYX_TITLE};

pub fn run() -> Result<(), String> {
    println!("{}", weather_table());
    Ok(())
}

fn weather_table() -> Table {
    let mut out = Table::new();
    out.set_content_arrangement(ContentArrangement::Dynamic);
    out.set_header(vec!["d10", "Weather", "Duration", "Effect"]);

    for event in table::all() {
        out.add_row(vec![
            event.id.to_string(),
            event.title.to_string(),
            format!("{} days", event.die),
            event.narrative.to_string(),
        ]);
    }
    out.add_row(vec![
        NYX_FACE.to_string(),
        NYX_TITLE.to_string(),
        format!("{} days", Die::D4),
        "Two different weathers from the table hold at once.".to_string(),
    ]);

    out
}
