use std::path::Path;

use crate::error::Result;
use crate::loader::open_store;
use crate::settings::{load_settings, settings_path};

pub fn run(data: Option<&str>) -> Result<()> {
    let settings = load_settings();
    let source = data
        .or(settings.data_file.as_deref())
        .map(str::to_string)
        .unwrap_or_else(|| format!("sample data ({} reports, {})", settings.report_count, settings.fixture_year));

    println!("Settings:   {}", settings_path().display());
    println!("Reports:    {source}");
    println!("Manifests:  {}", settings.manifest_dir.as_deref().unwrap_or("(not set)"));
    println!("Log file:   {}", settings.log_path().display());

    let store = open_store(data.map(Path::new), &settings)?;
    let malformed = store
        .reports()
        .iter()
        .filter(|r| r.parsed_date().is_none())
        .count();

    println!();
    println!("Total:      {}", store.len());
    println!("Selected:   {}", store.selected_count());
    println!("Bad dates:  {malformed}");
    Ok(())
}
