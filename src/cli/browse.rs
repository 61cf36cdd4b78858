use crate::browser::ReportBrowser;
use crate::download::{Downloader, ManifestDownloader, StubDownloader};
use crate::error::Result;
use crate::logging;
use crate::settings::{load_settings, shellexpand_path, Settings};

use super::open_dashboard;

pub(crate) fn downloader_for(output: Option<&str>, settings: &Settings) -> Box<dyn Downloader> {
    match output.or(settings.manifest_dir.as_deref()) {
        Some(dir) => Box::new(ManifestDownloader::new(shellexpand_path(dir))),
        None => Box::new(StubDownloader),
    }
}

pub fn run(data: Option<&str>, from_date: Option<String>, to_date: Option<String>) -> Result<()> {
    let settings = load_settings();
    logging::init_file_or_warn(&settings);

    let dashboard = open_dashboard(data, &settings, from_date.as_deref(), to_date.as_deref())?;
    if dashboard.store().is_empty() {
        println!("No reports found.");
        return Ok(());
    }
    tracing::info!(reports = dashboard.store().len(), "opening dashboard");

    let mut browser = ReportBrowser::new(dashboard, downloader_for(None, &settings));
    browser.run()?;
    tracing::info!(
        selected = browser.dashboard().store().selected_count(),
        "dashboard closed"
    );
    Ok(())
}
