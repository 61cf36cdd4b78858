pub mod browse;
pub mod config;
pub mod download;
pub mod list;
pub mod status;

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::dashboard::Dashboard;
use crate::error::Result;
use crate::loader::open_store;
use crate::settings::Settings;

/// Load reports and pre-apply a date range, as if typed and searched.
pub(crate) fn open_dashboard(
    data: Option<&str>,
    settings: &Settings,
    from_date: Option<&str>,
    to_date: Option<&str>,
) -> Result<Dashboard> {
    let store = open_store(data.map(Path::new), settings)?;
    let mut dashboard = Dashboard::new(store);
    dashboard.set_pending_from(from_date.unwrap_or_default());
    dashboard.set_pending_to(to_date.unwrap_or_default());
    dashboard.apply_filter()?;
    Ok(dashboard)
}

#[derive(Parser)]
#[command(name = "subreports", about = "Filter, select and download subscriber reports.")]
pub struct Cli {
    /// JSON file of reports (default: settings data_file, else sample data)
    #[arg(long, global = true)]
    pub data: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive report dashboard.
    Browse {
        /// Start date: YYYY-MM-DD
        #[arg(long = "from")]
        from_date: Option<String>,
        /// End date (inclusive): YYYY-MM-DD
        #[arg(long = "to")]
        to_date: Option<String>,
    },
    /// Print the reports inside a date range.
    List {
        /// Start date: YYYY-MM-DD
        #[arg(long = "from")]
        from_date: Option<String>,
        /// End date (inclusive): YYYY-MM-DD
        #[arg(long = "to")]
        to_date: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Download the given reports.
    Download {
        /// Report IDs, comma separated
        #[arg(long, value_delimiter = ',')]
        ids: Vec<u32>,
        /// Directory for the download manifest (default: settings manifest_dir)
        #[arg(long)]
        output: Option<String>,
    },
    /// Update saved settings.
    Config {
        /// Default JSON report file
        #[arg(long = "data-file")]
        data_file: Option<String>,
        /// Directory where download manifests are written
        #[arg(long = "manifest-dir")]
        manifest_dir: Option<String>,
        /// Dashboard log file
        #[arg(long = "log-file")]
        log_file: Option<String>,
        /// Number of sample reports when no data file is set
        #[arg(long = "report-count")]
        report_count: Option<u32>,
    },
    /// Show settings and report counts.
    Status,
}
