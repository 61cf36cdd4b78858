use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type ReportId = u32;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStatus {
    Processed,
    Pending,
    Failed,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 3] = [
        ReportStatus::Processed,
        ReportStatus::Pending,
        ReportStatus::Failed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReportStatus::Processed => "Processed",
            ReportStatus::Pending => "Pending",
            ReportStatus::Failed => "Failed",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A downloadable subscriber report. Everything except `selected` is fixed
/// once the record is built; selection is flipped through `ReportStore`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    id: ReportId,
    #[serde(alias = "rname")]
    name: String,
    description: String,
    date: String,
    status: ReportStatus,
    url: String,
    #[serde(default)]
    selected: bool,
}

impl Report {
    pub fn new(
        id: ReportId,
        name: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
        status: ReportStatus,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            date: date.into(),
            status,
            url: url.into(),
            selected: false,
        }
    }

    pub fn id(&self) -> ReportId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Raw `YYYY-MM-DD` string as stored.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// `None` when the stored date is malformed.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    pub fn status(&self) -> ReportStatus {
        self.status
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Name offered when the report is saved on its own.
    pub fn file_name(&self) -> String {
        format!("Report-{}.pdf", self.id)
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn set_selected(&mut self, value: bool) {
        self.selected = value;
    }
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}
