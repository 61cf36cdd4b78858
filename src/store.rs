use std::collections::{HashMap, HashSet};

use crate::error::{ReportError, Result};
use crate::models::{Report, ReportId};

/// Authoritative report list. Selection is always addressed by id, so a
/// report's flag survives whatever filter happens to hide it.
#[derive(Debug, Clone, Default)]
pub struct ReportStore {
    reports: Vec<Report>,
    index: HashMap<ReportId, usize>,
    version: u64,
}

impl ReportStore {
    pub fn new(reports: Vec<Report>) -> Result<Self> {
        let mut index = HashMap::with_capacity(reports.len());
        for (pos, report) in reports.iter().enumerate() {
            if report.id() == 0 {
                return Err(ReportError::InvalidId(0));
            }
            if index.insert(report.id(), pos).is_some() {
                return Err(ReportError::DuplicateId(report.id()));
            }
        }
        Ok(Self {
            reports,
            index,
            version: 0,
        })
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn get(&self, id: ReportId) -> Option<&Report> {
        self.index.get(&id).map(|&pos| &self.reports[pos])
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Bumped on every selection change.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Flip one report's flag. Unknown ids are ignored; returns whether a
    /// report was found.
    pub fn toggle_selection(&mut self, id: ReportId) -> bool {
        let Some(&pos) = self.index.get(&id) else {
            return false;
        };
        let report = &mut self.reports[pos];
        report.set_selected(!report.is_selected());
        self.version += 1;
        true
    }

    /// Set the flag for every report in `ids`; reports outside the set are
    /// untouched. Returns how many reports were addressed.
    pub fn set_selection_for_visible(&mut self, ids: &HashSet<ReportId>, value: bool) -> usize {
        let mut touched = 0;
        for report in self.reports.iter_mut().filter(|r| ids.contains(&r.id())) {
            report.set_selected(value);
            touched += 1;
        }
        if touched > 0 {
            self.version += 1;
        }
        touched
    }

    /// Selected reports across the whole collection, visible or not.
    pub fn selected_count(&self) -> usize {
        self.reports.iter().filter(|r| r.is_selected()).count()
    }

    pub fn selected(&self) -> Vec<&Report> {
        self.reports.iter().filter(|r| r.is_selected()).collect()
    }
}
