use crate::error::Result;
use crate::settings::load_settings;

use super::browse::downloader_for;
use super::open_dashboard;

/// Select `ids` and hand them to the download service. Unknown ids are
/// skipped the same way a stray toggle is.
pub fn run(data: Option<&str>, ids: &[u32], output: Option<String>) -> Result<()> {
    let settings = load_settings();
    let mut dashboard = open_dashboard(data, &settings, None, None)?;
    for &id in ids {
        if !dashboard.store().get(id).is_some_and(|r| r.is_selected()) {
            dashboard.toggle(id);
        }
    }
    let downloader = downloader_for(output.as_deref(), &settings);
    let outcome = dashboard.download(downloader.as_ref())?;
    println!("{}", outcome.message);
    Ok(())
}
