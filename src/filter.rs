use chrono::NaiveDate;

use crate::error::{ReportError, Result};
use crate::models::{parse_date, Report};

/// Inclusive date window. A missing bound is open; `to` covers its whole day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FilterRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl FilterRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn is_open(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Malformed report dates never match, bounded or not.
    pub fn contains(&self, report: &Report) -> bool {
        let Some(date) = report.parsed_date() else {
            return false;
        };
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }

    pub fn describe(&self) -> String {
        match (self.from, self.to) {
            (None, None) => "all dates".to_string(),
            (Some(f), None) => format!("from {f}"),
            (None, Some(t)) => format!("through {t}"),
            (Some(f), Some(t)) => format!("{f} to {t}"),
        }
    }
}

/// Parse one date field. Blank means no bound.
pub fn parse_bound(input: &str) -> Result<Option<NaiveDate>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    parse_date(trimmed)
        .map(Some)
        .ok_or_else(|| ReportError::InvalidDate(trimmed.to_string()))
}

/// Reports inside `range`, in collection order.
pub fn compute_visible<'a>(reports: &'a [Report], range: &FilterRange) -> Vec<&'a Report> {
    reports.iter().filter(|r| range.contains(r)).collect()
}

/// Pending (typed, uncommitted) and applied (in force) date bounds.
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    pending_from: String,
    pending_to: String,
    applied: FilterRange,
}

impl FilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_pending_from(&mut self, input: impl Into<String>) {
        self.pending_from = input.into();
    }

    pub fn set_pending_to(&mut self, input: impl Into<String>) {
        self.pending_to = input.into();
    }

    pub fn pending_from(&self) -> &str {
        &self.pending_from
    }

    pub fn pending_to(&self) -> &str {
        &self.pending_to
    }

    pub fn applied(&self) -> FilterRange {
        self.applied
    }

    /// Commit the pending inputs. Both fields are validated before anything
    /// changes; on error the applied range stays as it was.
    pub fn apply_filter(&mut self) -> Result<FilterRange> {
        let from = parse_bound(&self.pending_from)?;
        let to = parse_bound(&self.pending_to)?;
        self.applied = FilterRange::new(from, to);
        Ok(self.applied)
    }

    pub fn clear_filter(&mut self) {
        self.pending_from.clear();
        self.pending_to.clear();
        self.applied = FilterRange::default();
    }

    /// The clear control is live while any field, pending or applied, is set.
    pub fn can_clear(&self) -> bool {
        !self.pending_from.is_empty() || !self.pending_to.is_empty() || !self.applied.is_open()
    }
}
