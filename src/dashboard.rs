use std::collections::HashSet;

use crate::download::{DownloadOutcome, Downloader};
use crate::error::{ReportError, Result};
use crate::filter::{FilterEngine, FilterRange};
use crate::models::{Report, ReportId};
use crate::store::ReportStore;
use crate::summary::{Summary, VisibleCache};

/// Owns the report store and the filter. Views read from it and call back
/// into it; nothing else holds report state.
pub struct Dashboard {
    store: ReportStore,
    filter: FilterEngine,
    cache: VisibleCache,
}

impl Dashboard {
    pub fn new(store: ReportStore) -> Self {
        Self {
            store,
            filter: FilterEngine::new(),
            cache: VisibleCache::default(),
        }
    }

    pub fn store(&self) -> &ReportStore {
        &self.store
    }

    pub fn filter(&self) -> &FilterEngine {
        &self.filter
    }

    pub fn set_pending_from(&mut self, input: impl Into<String>) {
        self.filter.set_pending_from(input);
    }

    pub fn set_pending_to(&mut self, input: impl Into<String>) {
        self.filter.set_pending_to(input);
    }

    pub fn apply_filter(&mut self) -> Result<FilterRange> {
        let range = self.filter.apply_filter()?;
        tracing::info!(range = %range.describe(), visible = self.visible_ids().len(), "filter applied");
        Ok(range)
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear_filter();
        tracing::info!("filter cleared");
    }

    pub fn toggle(&mut self, id: ReportId) -> bool {
        let found = self.store.toggle_selection(id);
        if !found {
            tracing::debug!(id, "toggle ignored for unknown report");
        }
        found
    }

    /// Set selection for every visible report; hidden selections are kept.
    pub fn set_all_visible(&mut self, value: bool) -> usize {
        let ids: HashSet<ReportId> = self.visible_ids().iter().copied().collect();
        let touched = self.store.set_selection_for_visible(&ids, value);
        tracing::info!(value, touched, "select all visible");
        touched
    }

    /// Header checkbox click: select all visible unless they already are.
    pub fn toggle_all_visible(&mut self) -> usize {
        let summary = self.summary();
        if !summary.select_all_enabled {
            return 0;
        }
        self.set_all_visible(!summary.all_visible_selected)
    }

    pub fn visible_ids(&mut self) -> &[ReportId] {
        self.cache.ids(&self.store, self.filter.applied())
    }

    pub fn visible(&mut self) -> Vec<&Report> {
        let ids = self.cache.ids(&self.store, self.filter.applied());
        ids.iter().filter_map(|id| self.store.get(*id)).collect()
    }

    pub fn summary(&mut self) -> Summary {
        let ids = self.cache.ids(&self.store, self.filter.applied());
        Summary::compute(&self.store, &self.filter, ids)
    }

    /// Deliver one report on its own, selected or not.
    pub fn download_one(&self, id: ReportId, downloader: &dyn Downloader) -> Result<DownloadOutcome> {
        let report = self.store.get(id).ok_or(ReportError::UnknownReport(id))?;
        let outcome = downloader.deliver_one(report)?;
        tracing::info!(id, path = ?outcome.path, "single report download requested");
        Ok(outcome)
    }

    /// Deliver every selected report, visible or not.
    pub fn download(&self, downloader: &dyn Downloader) -> Result<DownloadOutcome> {
        let selected = self.store.selected();
        if selected.is_empty() {
            return Err(ReportError::NothingSelected);
        }
        let outcome = downloader.deliver(&selected)?;
        tracing::info!(count = outcome.count, path = ?outcome.path, "download requested");
        Ok(outcome)
    }
}
