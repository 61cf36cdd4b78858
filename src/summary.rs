use crate::filter::{compute_visible, FilterEngine, FilterRange};
use crate::models::ReportId;
use crate::store::ReportStore;

/// Derived counters and control states for one frame. Always rebuilt from
/// the store and filter, never stored alongside them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub visible_count: usize,
    pub visible_selected: usize,
    pub all_visible_selected: bool,
    pub some_visible_selected: bool,
    pub select_all_enabled: bool,
    pub clear_enabled: bool,
    pub global_selected: usize,
    pub download_enabled: bool,
}

impl Summary {
    pub fn compute(store: &ReportStore, filter: &FilterEngine, visible: &[ReportId]) -> Self {
        let visible_count = visible.len();
        let visible_selected = visible
            .iter()
            .filter_map(|id| store.get(*id))
            .filter(|r| r.is_selected())
            .count();
        let global_selected = store.selected_count();
        Self {
            visible_count,
            visible_selected,
            all_visible_selected: visible_count > 0 && visible_selected == visible_count,
            some_visible_selected: visible_selected > 0 && visible_selected < visible_count,
            select_all_enabled: visible_count > 0,
            clear_enabled: filter.can_clear(),
            global_selected,
            download_enabled: global_selected > 0,
        }
    }

    pub fn download_label(&self) -> String {
        format!("Download Selected Files (ZIP) ({})", self.global_selected)
    }

    pub fn title(&self) -> String {
        format!("Filtered Reports ({} found)", self.visible_count)
    }
}

/// Visible ids memoized on (applied range, store version).
#[derive(Debug, Default)]
pub struct VisibleCache {
    key: Option<(FilterRange, u64)>,
    ids: Vec<ReportId>,
}

impl VisibleCache {
    pub fn ids(&mut self, store: &ReportStore, range: FilterRange) -> &[ReportId] {
        let key = (range, store.version());
        if self.key != Some(key) {
            self.ids = compute_visible(store.reports(), &range)
                .iter()
                .map(|r| r.id())
                .collect();
            self.key = Some(key);
        }
        &self.ids
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::fixtures::generate_reports;

    fn setup(n: u32) -> (ReportStore, FilterEngine) {
        (
            ReportStore::new(generate_reports(n, 2024)).unwrap(),
            FilterEngine::new(),
        )
    }

    fn all_ids(n: u32) -> Vec<u32> {
        (1..=n).collect()
    }

    #[test]
    fn test_nothing_selected() {
        let (store, filter) = setup(10);
        let s = Summary::compute(&store, &filter, &all_ids(10));
        assert_eq!(s.visible_count, 10);
        assert!(!s.all_visible_selected);
        assert!(!s.some_visible_selected);
        assert!(s.select_all_enabled);
        assert!(!s.download_enabled);
        assert!(!s.clear_enabled);
        assert_eq!(s.download_label(), "Download Selected Files (ZIP) (0)");
    }

    #[test]
    fn test_partial_selection_is_indeterminate() {
        let (mut store, filter) = setup(10);
        store.toggle_selection(2);
        let s = Summary::compute(&store, &filter, &all_ids(10));
        assert_eq!(s.visible_selected, 1);
        assert!(s.some_visible_selected);
        assert!(!s.all_visible_selected);
        assert!(s.download_enabled);
    }

    #[test]
    fn test_all_visible_selected() {
        let (mut store, filter) = setup(10);
        let visible = vec![1, 2, 3];
        let set: HashSet<u32> = visible.iter().copied().collect();
        store.set_selection_for_visible(&set, true);
        let s = Summary::compute(&store, &filter, &visible);
        assert!(s.all_visible_selected);
        assert!(!s.some_visible_selected);
        assert_eq!(s.global_selected, 3);
    }

    #[test]
    fn test_empty_visible_set() {
        let (mut store, filter) = setup(10);
        store.toggle_selection(1);
        let s = Summary::compute(&store, &filter, &[]);
        assert_eq!(s.visible_count, 0);
        assert!(!s.all_visible_selected);
        assert!(!s.some_visible_selected);
        assert!(!s.select_all_enabled);
        // hidden selection still counts for download
        assert!(s.download_enabled);
        assert_eq!(s.title(), "Filtered Reports (0 found)");
    }

    #[test]
    fn test_cache_recomputes_on_range_or_version_change() {
        let (mut store, _) = setup(100);
        let mut cache = VisibleCache::default();
        assert_eq!(cache.ids(&store, FilterRange::default()).len(), 100);

        let march = FilterRange::new(
            chrono::NaiveDate::from_ymd_opt(2024, 3, 1),
            chrono::NaiveDate::from_ymd_opt(2024, 3, 31),
        );
        let march_ids = cache.ids(&store, march).to_vec();
        assert!(march_ids.len() < 100);

        store.toggle_selection(march_ids[0]);
        assert_eq!(cache.ids(&store, march), march_ids.as_slice());
        assert_eq!(cache.ids(&store, FilterRange::default()).len(), 100);
    }
}
