use std::path::{Path, PathBuf};

use wr_core::table;
use wr_core::{RollKind, Segment, SimulationLog};

use super::SimArgs;

const MIN_WIDTH: usize = 20;
const MIN_PAGE_LINES: usize = 5;

/// Page geometry for plain-text export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportLayout {
    /// Maximum characters per line.
    pub width: usize,
    /// Lines per page, excluding the page footer.
    pub page_lines: usize,
}

impl ExportLayout {
    pub fn new(width: usize, page_lines: usize) -> Self {
        Self {
            width: width.max(MIN_WIDTH),
            page_lines: page_lines.max(MIN_PAGE_LINES),
        }
    }
}

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExportFormat {
    Text,
    Markdown,
    Html,
    Json,
}

impl ExportFormat {
    fn parse(format: &str) -> Result<Self, String> {
        match format {
            "text" | "txt" => Ok(Self::Text),
            "markdown" | "md" => Ok(Self::Markdown),
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            _ => Err(format!(
                "unsupported format: \"{format}\". Use: text, markdown, html, json"
            )),
        }
    }

    fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Markdown => "md",
            Self::Html => "html",
            Self::Json => "json",
        }
    }
}

pub fn run(
    args: &SimArgs,
    format: &str,
    output: Option<&Path>,
    layout: ExportLayout,
) -> Result<(), String> {
    let format = ExportFormat::parse(format)?;
    let log = super::run_simulation(args)?;

    let content = match format {
        ExportFormat::Text => export_text(&log, layout),
        ExportFormat::Markdown => export_markdown(&log),
        ExportFormat::Html => export_html(&log),
        ExportFormat::Json => super::to_json(&log)?,
    };

    if let Some(path) = output {
        let path = resolve_output(path, format.extension());
        std::fs::write(&path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        print!("{content}");
    }

    Ok(())
}

/// A directory target gets the default file name.
fn resolve_output(path: &Path, extension: &str) -> PathBuf {
    if path.is_dir() {
        path.join(format!("weather.{extension}"))
    } else {
        path.to_path_buf()
    }
}

fn title_line(log: &SimulationLog) -> String {
    format!(
        "Weather {} - {} ({} day{})",
        log.start,
        log.end,
        log.total_days,
        if log.total_days == 1 { "" } else { "s" }
    )
}

fn export_text(log: &SimulationLog, layout: ExportLayout) -> String {
    let mut lines = vec![title_line(log), String::new()];
    let rendered = log.render();
    for line in rendered.trim_end().lines() {
        lines.extend(wrap_line(line, layout.width));
    }

    let pages = paginate(&lines, layout.page_lines);
    let total = pages.len();
    let mut out = String::new();
    for (idx, page) in pages.iter().enumerate() {
        for line in *page {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(&format!("\n-- Page {} of {total} --\n", idx + 1));
        if idx + 1 < total {
            out.push('\n');
        }
    }
    out
}

/// Word-wrap a line to `width` characters. Blank lines are kept; a word
/// longer than the width gets a line of its own.
fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if line.trim().is_empty() {
        return vec![String::new()];
    }

    let mut wrapped = Vec::new();
    let mut current: String = line.chars().take_while(|c| *c == ' ').collect();

    for word in line.split_whitespace() {
        let candidate_len = if current.trim().is_empty() {
            current.chars().count() + word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if candidate_len <= width || current.trim().is_empty() {
            if !current.trim().is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        } else {
            wrapped.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    if !current.trim().is_empty() {
        wrapped.push(current);
    }
    wrapped
}

fn paginate(lines: &[String], page_lines: usize) -> Vec<&[String]> {
    if lines.is_empty() {
        return vec![&[]];
    }
    lines.chunks(page_lines.max(1)).collect()
}

fn export_markdown(log: &SimulationLog) -> String {
    let mut out = String::from("# Weather Log\n\n");
    out.push_str(&format!(
        "**From:** {} **To:** {} **Days:** {}\n\n",
        log.start, log.end, log.total_days
    ));
    out.push_str("---\n\n");

    for segment in &log.segments {
        write_markdown_segment(&mut out, segment);
    }

    out
}

fn write_markdown_segment(out: &mut String, segment: &Segment) {
    out.push_str(&format!("## {}\n\n", segment.header()));
    out.push_str(&format!("### {}\n\n", segment.outcome.headline()));

    let ids = match segment.outcome.kind {
        RollKind::Single { event_id } => vec![event_id],
        RollKind::Combined { first, second } => vec![first, second],
    };
    for id in ids {
        if let Ok(event) = table::lookup(id) {
            out.push_str(&format!("- **{}:** {}\n", event.title, event.narrative));
        }
    }
    out.push('\n');

    out.push_str(&format!(
        "**Duration:** {} days\n",
        segment.outcome.duration_days
    ));
    if let Some(natural_end) = segment.natural_end {
        out.push_str(&format!("\n*Ends {natural_end}*\n"));
    }
    out.push('\n');
}

fn export_html(log: &SimulationLog) -> String {
    // Wrap the markdown in a basic HTML template
    let md = export_markdown(log);

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str(&format!(
        "  <meta charset=\"utf-8\">\n  <title>{}</title>\n",
        escape_html(&title_line(log))
    ));
    html.push_str("  <style>\n");
    html.push_str("    body { font-family: Georgia, serif; max-width: 800px; margin: 2em auto; padding: 0 1em; color: #333; }\n");
    html.push_str("    pre { background: #f5f0fa; padding: 1em; white-space: pre-wrap; }\n");
    html.push_str("  </style>\n</head>\n<body>\n<pre>\n");
    html.push_str(&escape_html(&md));
    html.push_str("</pre>\n</body>\n</html>\n");

    html
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
