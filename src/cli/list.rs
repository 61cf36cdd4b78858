use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::settings::load_settings;

use super::open_dashboard;

pub fn run(
    data: Option<&str>,
    from_date: Option<String>,
    to_date: Option<String>,
    json: bool,
) -> Result<()> {
    let settings = load_settings();
    let mut dashboard = open_dashboard(data, &settings, from_date.as_deref(), to_date.as_deref())?;
    let title = dashboard.summary().title();
    let range = dashboard.filter().applied().describe();
    let visible = dashboard.visible();

    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["", "ID", "Report Name", "Description", "Report Date", "Status", "Download"]);
    for r in &visible {
        table.add_row(vec![
            Cell::new(if r.is_selected() { "x" } else { "" }),
            Cell::new(r.id()),
            Cell::new(r.name()),
            Cell::new(r.description()),
            Cell::new(r.date()),
            Cell::new(r.status()),
            Cell::new(r.url()),
        ]);
    }
    if visible.is_empty() {
        println!("No reports found matching the criteria.");
    } else {
        println!("{table}");
    }
    println!("{} ({})", title.bold(), range);
    Ok(())
}
