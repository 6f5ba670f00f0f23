//! Command handlers for CLI subcommands.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use studio_calendar::{
    aggregate, CalendarEvent, CalendarViewController, DateCell, EventId, ViewMode,
};
use studio_models::Item;
use tracing::info;

use crate::cli::{Cli, Commands, OutputFormat};
use crate::config;
use crate::error::{CliError, Result};
use crate::items::{load_items, save_items};

/// Execute a CLI command.
pub fn execute(cli: Cli) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let items_file = cli.items_file();
    let read_only = cli.read_only();

    match cli.command {
        Commands::Range { anchor, view } => {
            let calendar = open_calendar(anchor.unwrap_or(today), view, read_only);
            print!("{}", render_range(&calendar, today));
            Ok(())
        }
        Commands::Events { format } => {
            let items = load_items(&items_file)?;
            print!("{}", render_events(&aggregate(&items), format)?);
            Ok(())
        }
        Commands::Calendar { anchor, view } => {
            let items = load_items(&items_file)?;
            let mut calendar = open_calendar(anchor.unwrap_or(today), view, read_only);
            print!("{}", render_calendar(&mut calendar, &items, today));
            Ok(())
        }
        Commands::Reschedule {
            event,
            date,
            output,
        } => cmd_reschedule(&items_file, &event, date, output.as_deref(), read_only),
    }
}

fn open_calendar(anchor: NaiveDate, view: Option<ViewMode>, read_only: bool) -> CalendarViewController {
    let view_mode = view.unwrap_or_else(config::default_view_mode);
    CalendarViewController::new(anchor, read_only).with_view_mode(view_mode)
}

fn cmd_reschedule(
    items_file: &Path,
    event: &str,
    date: NaiveDate,
    output: Option<&Path>,
    read_only: bool,
) -> Result<()> {
    let items = load_items(items_file)?;
    let updated = reschedule_items(&items, event, date, read_only)?;

    match output {
        Some(path) => {
            save_items(path, &updated)?;
            info!(path = %path.display(), "wrote rescheduled items");
            eprintln!("Rescheduled '{}' to {} ({})", event, date, path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&updated)?),
    }

    Ok(())
}

/// Moves `event` to `date` and returns the updated items.
pub fn reschedule_items(
    items: &[Item],
    event: &str,
    date: NaiveDate,
    read_only: bool,
) -> Result<Vec<Item>> {
    if event.trim().is_empty() {
        return Err(CliError::InvalidArgument("event ID must not be empty".to_string()));
    }

    let mut calendar = CalendarViewController::new(date, read_only);
    let updated = calendar.reschedule(items, EventId::from(event), date)?;
    Ok(updated)
}

fn cell_marker(cell: &DateCell) -> char {
    if cell.is_today {
        '*'
    } else if !cell.is_current_period {
        '.'
    } else {
        ' '
    }
}

fn render_grid(out: &mut String, cells: &[DateCell], counts: &HashMap<NaiveDate, usize>) {
    out.push_str(" Mon   Tue   Wed   Thu   Fri   Sat   Sun\n");
    for week in cells.chunks(7) {
        let row: Vec<String> = week
            .iter()
            .map(|cell| {
                let count = match counts.get(&cell.date) {
                    Some(n) => format!("+{}", n),
                    None => "  ".to_string(),
                };
                format!("{:>2}{}{}", cell.date.day(), cell_marker(cell), count)
            })
            .collect();
        out.push_str(row.join(" ").trim_end());
        out.push('\n');
    }
}

/// Renders the visible date grid for the controller's period.
pub fn render_range(calendar: &CalendarViewController, today: NaiveDate) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", calendar.period_label(), calendar.view_mode());
    render_grid(&mut out, &calendar.cells(today), &HashMap::new());
    out
}

/// Renders events as a table or JSON.
pub fn render_events(events: &[CalendarEvent], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(events)?)),
        OutputFormat::Table => {
            let mut out = String::new();
            if events.is_empty() {
                out.push_str("No scheduled videos.\n");
                return Ok(out);
            }

            let _ = writeln!(out, "{:<24} {:<22} {:<12} {:<10} TITLE", "ID", "DATE", "STATUS", "TYPE");
            for event in events {
                let _ = writeln!(
                    out,
                    "{:<24} {:<22} {:<12} {:<10} {}",
                    event.id,
                    event.date,
                    event.status,
                    event.video_type.as_deref().unwrap_or("-"),
                    event.title
                );
                if event.is_group() {
                    for item in &event.items {
                        let _ = writeln!(out, "  - {} ({}, {})", item.title, item.id, item.status);
                    }
                }
            }
            Ok(out)
        }
    }
}

/// Renders the grid plus the events of each visible day.
pub fn render_calendar(
    calendar: &mut CalendarViewController,
    items: &[Item],
    today: NaiveDate,
) -> String {
    let cells = calendar.cells(today);
    let heading = format!("{} ({})", calendar.period_label(), calendar.view_mode());
    let read_only = calendar.is_read_only();
    let visible = calendar.visible_events(items);

    let mut counts: HashMap<NaiveDate, usize> = HashMap::new();
    for event in &visible {
        if let Some(day) = event.day() {
            *counts.entry(day).or_insert(0) += event.items.len();
        }
    }

    let mut out = String::new();
    out.push_str(&heading);
    out.push('\n');
    render_grid(&mut out, &cells, &counts);

    if visible.is_empty() {
        out.push_str("\nNo videos scheduled in this period.\n");
        return out;
    }

    out.push('\n');
    for event in &visible {
        let day = event
            .day()
            .map(|d| d.format("%a %Y-%m-%d").to_string())
            .unwrap_or_else(|| event.date.clone());
        let _ = writeln!(out, "{}  [{}] {} ({})", day, event.id, event.title, event.status);
    }
    if read_only {
        out.push_str("\n(read-only)\n");
    }
    out
}
