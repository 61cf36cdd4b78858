use crate::error::Result;
use crate::settings::{load_settings, save_settings, settings_path, shellexpand_path};

pub fn run(
    data_file: Option<String>,
    manifest_dir: Option<String>,
    log_file: Option<String>,
    report_count: Option<u32>,
) -> Result<()> {
    let mut settings = load_settings();
    if let Some(path) = data_file {
        settings.data_file = Some(shellexpand_path(&path));
    }
    if let Some(dir) = manifest_dir {
        settings.manifest_dir = Some(shellexpand_path(&dir));
    }
    if let Some(path) = log_file {
        settings.log_file = Some(shellexpand_path(&path));
    }
    if let Some(n) = report_count {
        settings.report_count = n;
    }
    save_settings(&settings)?;
    println!("Saved settings to {}", settings_path().display());
    Ok(())
}
