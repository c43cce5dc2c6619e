//! Catalog engine - owns the record collection and the library view state
//!
//! The renderer only reads derived views (vocabulary, ordered list, page
//! slice, overlay position) and calls the operations below. Derived views
//! are recomputed from state on every read.

pub mod filters;
pub mod overlay;

use crate::constants::ALL_SUBJECTS;
use crate::types::{Direction, OverlayKey, SortOrder, ZineRecord};
use overlay::Overlay;
use std::collections::HashSet;
use tracing::{debug, warn};

pub struct Catalog {
    records: Option<Vec<ZineRecord>>,
    excluded_subjects: Vec<String>,
    selected_subject: String,
    sort_order: SortOrder,
    current_page: usize,
    overlay: Overlay,
}

impl Catalog {
    pub fn new(excluded_subjects: Vec<String>) -> Self {
        Self {
            records: None,
            excluded_subjects,
            selected_subject: ALL_SUBJECTS.to_string(),
            sort_order: SortOrder::Default,
            current_page: 1,
            overlay: Overlay::Closed,
        }
    }

    /// Install a delivered record collection.
    ///
    /// Filter, sort and page survive a reload; only the page is pulled back
    /// into range if the new collection is shorter. An open overlay whose
    /// record is gone from the new collection is closed.
    pub fn set_records(&mut self, records: Vec<ZineRecord>) {
        let records = retain_addressable(records);
        debug!(count = records.len(), "Catalog records installed");
        self.records = Some(records);
        self.current_page = self.current_page.clamp(1, self.total_pages());

        if self.overlay.is_open() && self.selected_record().is_none() {
            debug!("Open record missing after reload");
            self.overlay.close();
        }
    }

    pub fn records(&self) -> Option<&[ZineRecord]> {
        self.records.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.records.is_some()
    }

    // ------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------

    pub fn subjects(&self) -> Vec<String> {
        filters::subject_vocabulary(self.records(), &self.excluded_subjects)
    }

    /// Filtered and sorted records, before pagination
    pub fn processed(&self) -> Vec<&ZineRecord> {
        filters::filter_and_sort(self.records(), &self.selected_subject, self.sort_order)
    }

    pub fn current_page_records(&self) -> Vec<&ZineRecord> {
        self.page_records(self.current_page)
    }

    /// Records on an arbitrary page; empty when `page` is out of range
    pub fn page_records(&self, page: usize) -> Vec<&ZineRecord> {
        let processed = self.processed();
        filters::page_slice(&processed, page).to_vec()
    }

    pub fn total_pages(&self) -> usize {
        filters::total_pages(self.processed().len())
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn selected_subject(&self) -> &str {
        &self.selected_subject
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Whether anything differs from the default view (drives the RESET button)
    pub fn filters_active(&self) -> bool {
        self.selected_subject != ALL_SUBJECTS || self.sort_order != SortOrder::Default
    }

    // ------------------------------------------------------------------
    // Filter / sort / page operations
    // ------------------------------------------------------------------

    pub fn select_subject(&mut self, subject: impl Into<String>) {
        let subject = subject.into();
        if subject != self.selected_subject {
            debug!(subject = %subject, "Subject filter changed");
            self.selected_subject = subject;
            self.current_page = 1;
        }
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        if order != self.sort_order {
            debug!(order = ?order, "Sort order changed");
            self.sort_order = order;
            self.current_page = 1;
        }
    }

    pub fn reset_filters(&mut self) {
        self.selected_subject = ALL_SUBJECTS.to_string();
        self.sort_order = SortOrder::Default;
        self.current_page = 1;
    }

    /// Forget all view state when the library view is left.
    pub fn reset_view(&mut self) {
        self.reset_filters();
        self.overlay.close();
    }

    /// Jump to a page. Requests outside `1..=total_pages` are clamped.
    pub fn paginate(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages());
    }

    // ------------------------------------------------------------------
    // Detail overlay
    // ------------------------------------------------------------------

    pub fn is_overlay_open(&self) -> bool {
        self.overlay.is_open()
    }

    pub fn direction(&self) -> Direction {
        self.overlay.direction()
    }

    pub fn open_from_grid(&mut self, identifier: &str) {
        debug!(identifier, "Overlay opened");
        self.overlay.open(identifier);
    }

    pub fn close_overlay(&mut self) {
        if self.overlay.is_open() {
            debug!("Overlay closed");
        }
        self.overlay.close();
    }

    pub fn next(&mut self) -> bool {
        let list = filters::filter_and_sort(
            self.records.as_deref(),
            &self.selected_subject,
            self.sort_order,
        );
        self.overlay.next(&list)
    }

    pub fn prev(&mut self) -> bool {
        let list = filters::filter_and_sort(
            self.records.as_deref(),
            &self.selected_subject,
            self.sort_order,
        );
        self.overlay.prev(&list)
    }

    /// Keyboard routing for the overlay. Inert while the overlay is closed.
    pub fn handle_key(&mut self, key: OverlayKey) -> bool {
        if !self.overlay.is_open() {
            return false;
        }
        match key {
            OverlayKey::Escape => {
                self.close_overlay();
                true
            }
            OverlayKey::ArrowRight => self.next(),
            OverlayKey::ArrowLeft => self.prev(),
        }
    }

    /// The open record, looked up in the full collection so it stays
    /// displayable even after a filter change hides it from the grid.
    pub fn selected_record(&self) -> Option<&ZineRecord> {
        let id = self.overlay.identifier()?;
        self.records()?.iter().find(|z| z.identifier == id)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.overlay.current_index(&self.processed())
    }

    pub fn has_next(&self) -> bool {
        self.overlay.has_next(&self.processed())
    }

    pub fn has_prev(&self) -> bool {
        self.overlay.has_prev(&self.processed())
    }
}

/// Keep only records the overlay can address: a non-blank identifier that
/// no earlier record already uses.
fn retain_addressable(records: Vec<ZineRecord>) -> Vec<ZineRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|z| {
            if z.identifier.trim().is_empty() {
                warn!(title = z.title().unwrap_or_default(), "Skipping zine without identifier");
                return false;
            }
            if !seen.insert(z.identifier.clone()) {
                warn!(identifier = %z.identifier, "Skipping zine with duplicate identifier");
                return false;
            }
            true
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::filters::tests::zine;
    use crate::constants::DEFAULT_EXCLUDED_SUBJECTS;

    fn catalog_with(records: Vec<ZineRecord>) -> Catalog {
        let mut catalog = Catalog::new(
            DEFAULT_EXCLUDED_SUBJECTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        );
        catalog.set_records(records);
        catalog
    }

    fn hundred() -> Vec<ZineRecord> {
        (0..100)
            .map(|i| {
                let subject = if i % 2 == 0 { "Housing" } else { "Art" };
                zine(&format!("Z{i:03}"), &format!("Title {i:03}"), subject, "")
            })
            .collect()
    }

    #[test]
    fn defaults_before_load() {
        let catalog = Catalog::new(Vec::new());
        assert!(!catalog.is_loaded());
        assert!(catalog.subjects().is_empty());
        assert!(catalog.processed().is_empty());
        assert_eq!(catalog.current_page(), 1);
        assert_eq!(catalog.total_pages(), 1);
        assert_eq!(catalog.selected_subject(), "All");
        assert_eq!(catalog.sort_order(), SortOrder::Default);
        assert!(!catalog.filters_active());
    }

    #[test]
    fn paging_through_one_hundred_records() {
        let mut catalog = catalog_with(hundred());
        assert_eq!(catalog.total_pages(), 5);
        catalog.paginate(5);
        assert_eq!(catalog.current_page(), 5);
        assert_eq!(catalog.current_page_records().len(), 4);
        assert!(catalog.page_records(6).is_empty());
    }

    #[test]
    fn paginate_clamps_into_range() {
        let mut catalog = catalog_with(hundred());
        catalog.paginate(0);
        assert_eq!(catalog.current_page(), 1);
        catalog.paginate(42);
        assert_eq!(catalog.current_page(), 5);
    }

    #[test]
    fn subject_and_sort_changes_reset_page() {
        let mut catalog = catalog_with(hundred());
        catalog.paginate(3);
        catalog.select_subject("Housing");
        assert_eq!(catalog.current_page(), 1);
        assert_eq!(catalog.processed().len(), 50);
        assert!(catalog.filters_active());

        catalog.paginate(2);
        catalog.set_sort_order(SortOrder::Desc);
        assert_eq!(catalog.current_page(), 1);
        assert_eq!(catalog.current_page_records()[0].identifier, "Z098");

        catalog.paginate(2);
        catalog.reset_filters();
        assert_eq!(catalog.current_page(), 1);
        assert!(!catalog.filters_active());
    }

    #[test]
    fn reselecting_same_subject_keeps_page() {
        let mut catalog = catalog_with(hundred());
        catalog.paginate(2);
        catalog.select_subject("All");
        catalog.set_sort_order(SortOrder::Default);
        assert_eq!(catalog.current_page(), 2);
    }

    #[test]
    fn reload_keeps_view_state_but_clamps_page() {
        let mut catalog = catalog_with(hundred());
        catalog.set_sort_order(SortOrder::Asc);
        catalog.paginate(5);
        catalog.set_records(hundred().into_iter().take(30).collect());
        assert_eq!(catalog.sort_order(), SortOrder::Asc);
        assert_eq!(catalog.current_page(), 2);
    }

    #[test]
    fn overlay_navigation_over_derived_list() {
        let mut catalog = catalog_with(vec![
            zine("A", "Alpha", "X", ""),
            zine("B", "Beta", "X", ""),
            zine("C", "Gamma", "X", ""),
        ]);
        catalog.open_from_grid("B");
        assert_eq!(catalog.current_index(), Some(1));
        assert!(catalog.next());
        assert_eq!(catalog.selected_record().map(|z| z.identifier.as_str()), Some("C"));
        assert_eq!(catalog.direction(), Direction::Forward);
        assert!(!catalog.next());
        assert!(!catalog.has_next());
        assert!(catalog.prev());
        assert!(catalog.prev());
        assert_eq!(catalog.direction(), Direction::Backward);
        assert!(!catalog.has_prev());
        assert_eq!(catalog.selected_record().map(|z| z.identifier.as_str()), Some("A"));
    }

    #[test]
    fn overlay_follows_sort_order() {
        let mut catalog = catalog_with(vec![
            zine("1", "cherry", "", ""),
            zine("2", "apple", "", ""),
            zine("3", "banana", "", ""),
        ]);
        catalog.set_sort_order(SortOrder::Asc);
        catalog.open_from_grid("2");
        assert!(catalog.next());
        assert_eq!(catalog.selected_record().map(|z| z.identifier.as_str()), Some("3"));
    }

    #[test]
    fn overlay_noops_after_filter_hides_record() {
        let mut catalog = catalog_with(vec![
            zine("A", "Alpha", "Art", ""),
            zine("B", "Beta", "Housing", ""),
            zine("C", "Gamma", "Art", ""),
        ]);
        catalog.open_from_grid("B");
        catalog.select_subject("Art");
        assert_eq!(catalog.current_index(), None);
        assert!(!catalog.next());
        assert!(!catalog.prev());
        assert!(!catalog.handle_key(OverlayKey::ArrowRight));
        assert_eq!(catalog.selected_record().map(|z| z.identifier.as_str()), Some("B"));
        assert_eq!(catalog.direction(), Direction::None);
    }

    #[test]
    fn records_without_identifier_are_skipped() {
        let mut catalog = catalog_with(vec![
            zine("", "First", "", ""),
            zine("  ", "Second", "", ""),
            zine("C", "Third", "", ""),
        ]);
        assert_eq!(catalog.records().map(<[ZineRecord]>::len), Some(1));

        let clicked = catalog.current_page_records()[0].identifier.clone();
        catalog.open_from_grid(&clicked);
        assert_eq!(catalog.selected_record().and_then(ZineRecord::title), Some("Third"));
    }

    #[test]
    fn duplicate_identifiers_keep_the_first_record() {
        let mut catalog = catalog_with(vec![
            zine("A", "Alpha", "", ""),
            zine("A", "Alpha reprint", "", ""),
            zine("B", "Beta", "", ""),
        ]);
        let ids: Vec<&str> = catalog.processed().iter().map(|z| z.identifier.as_str()).collect();
        assert_eq!(ids, ["A", "B"]);

        catalog.open_from_grid("A");
        assert!(catalog.next());
        assert_eq!(catalog.selected_record().and_then(ZineRecord::title), Some("Beta"));
    }

    #[test]
    fn reload_closes_overlay_when_its_record_is_gone() {
        let mut catalog = catalog_with(vec![zine("A", "Alpha", "", ""), zine("B", "Beta", "", "")]);
        catalog.open_from_grid("B");
        catalog.set_records(vec![zine("A", "Alpha", "", "")]);
        assert!(!catalog.is_overlay_open());
        assert!(!catalog.handle_key(OverlayKey::ArrowLeft));
    }

    #[test]
    fn reload_keeps_overlay_when_its_record_survives() {
        let mut catalog = catalog_with(vec![zine("A", "Alpha", "", ""), zine("B", "Beta", "", "")]);
        catalog.open_from_grid("B");
        catalog.set_records(vec![zine("B", "Beta", "", ""), zine("C", "Gamma", "", "")]);
        assert!(catalog.is_overlay_open());
        assert_eq!(catalog.current_index(), Some(0));
    }

    #[test]
    fn leaving_the_view_forgets_view_state() {
        let mut catalog = catalog_with(hundred());
        catalog.select_subject("Art");
        catalog.set_sort_order(SortOrder::Desc);
        catalog.paginate(2);
        catalog.open_from_grid("Z001");

        catalog.reset_view();
        assert_eq!(catalog.selected_subject(), "All");
        assert_eq!(catalog.sort_order(), SortOrder::Default);
        assert_eq!(catalog.current_page(), 1);
        assert!(!catalog.is_overlay_open());
        assert!(catalog.is_loaded());
    }

    #[test]
    fn keyboard_is_inert_while_closed() {
        let mut catalog = catalog_with(vec![zine("A", "Alpha", "", ""), zine("B", "Beta", "", "")]);
        assert!(!catalog.handle_key(OverlayKey::Escape));
        assert!(!catalog.handle_key(OverlayKey::ArrowRight));
        assert!(!catalog.handle_key(OverlayKey::ArrowLeft));
        assert!(!catalog.is_overlay_open());
    }

    #[test]
    fn keyboard_drives_open_overlay() {
        let mut catalog = catalog_with(vec![zine("A", "Alpha", "", ""), zine("B", "Beta", "", "")]);
        catalog.open_from_grid("A");
        assert!(catalog.handle_key(OverlayKey::ArrowRight));
        assert_eq!(catalog.direction(), Direction::Forward);
        assert!(catalog.handle_key(OverlayKey::ArrowLeft));
        assert_eq!(catalog.direction(), Direction::Backward);
        assert!(catalog.handle_key(OverlayKey::Escape));
        assert!(!catalog.is_overlay_open());
        assert_eq!(catalog.direction(), Direction::None);
        assert_eq!(catalog.selected_record(), None);
    }
}
