use std::path::Path;

use crate::error::Result;
use crate::fixtures::generate_reports;
use crate::models::Report;
use crate::settings::Settings;
use crate::store::ReportStore;

/// Read a JSON array of reports. Malformed dates are kept (they stay
/// selectable by id) but logged, since they never show up in a view.
pub fn load_reports(path: &Path) -> Result<Vec<Report>> {
    let content = std::fs::read_to_string(path)?;
    let reports: Vec<Report> = serde_json::from_str(&content)?;
    for r in reports.iter().filter(|r| r.parsed_date().is_none()) {
        tracing::warn!(id = r.id(), date = r.date(), "report has malformed date");
    }
    Ok(reports)
}

/// Build the store from `data` if given, else the settings' data file,
/// else synthetic fixtures.
pub fn open_store(data: Option<&Path>, settings: &Settings) -> Result<ReportStore> {
    let configured = settings.data_file.as_deref().map(Path::new);
    let reports = match data.or(configured) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading reports");
            load_reports(path)?
        }
        None => generate_reports(settings.report_count, settings.fixture_year),
    };
    ReportStore::new(reports)
}
