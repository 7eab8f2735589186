//! List, search and selection over a collection of labeled items
//!
//! A [`Catalog`] owns the items of one content domain plus the navigation
//! state around them: the filter typed into the search box, the subsequence
//! of items that match it, the cursor row within that subsequence and the
//! key of the item currently shown in the detail pane.
//!
//! Matching is a case-insensitive substring test on the label and the visible
//! list is recomputed on every filter change.

use crate::content::model::{ManifestEntry, Unit};
use rustc_hash::FxHashMap;

/// Something that can appear in a catalog list
pub trait Listed {
    /// Text the filter is matched against
    fn label(&self) -> &str;

    /// Identifier persisted across sessions
    fn key(&self) -> Option<&str>;

    /// Text shown in the list row
    fn display(&self) -> &str {
        self.label()
    }
}

impl Listed for ManifestEntry {
    fn label(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }

    fn key(&self) -> Option<&str> {
        self.file.as_deref()
    }
}

impl Listed for Unit {
    fn label(&self) -> &str {
        self.unit_title.as_deref().unwrap_or("")
    }

    fn key(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    fn display(&self) -> &str {
        self.unit_title
            .as_deref()
            .unwrap_or(crate::render::math::TITLE_FALLBACK)
    }
}

/// Does `label` contain `filter`, ignoring case?
pub fn matches(label: &str, filter: &str) -> bool {
    label.to_lowercase().contains(&filter.to_lowercase())
}

/// Indices of the items whose label matches `filter`, in source order
pub fn filter_indices<T: Listed>(items: &[T], filter: &str) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| matches(item.label(), filter))
        .map(|(i, _)| i)
        .collect()
}

#[derive(Debug, Clone)]
pub struct Catalog<T> {
    items: Vec<T>,
    by_key: FxHashMap<String, usize>,
    filter: String,
    visible: Vec<usize>,
    /// Row within `visible`
    cursor: usize,
    active: Option<String>,
}

impl<T: Listed> Catalog<T> {
    pub fn new(items: Vec<T>) -> Self {
        let mut by_key = FxHashMap::default();
        for (i, item) in items.iter().enumerate() {
            if let Some(key) = item.key() {
                // First occurrence wins, matching a front-to-back search
                by_key.entry(key.to_string()).or_insert(i);
            }
        }
        let visible = (0..items.len()).collect();
        Catalog {
            items,
            by_key,
            filter: String::new(),
            visible,
            cursor: 0,
            active: None,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Replace the filter and recompute the visible list
    pub fn set_filter(&mut self, filter: &str) {
        self.filter = filter.to_string();
        self.refresh();
    }

    pub fn push_filter_char(&mut self, c: char) {
        self.filter.push(c);
        self.refresh();
    }

    pub fn pop_filter_char(&mut self) {
        self.filter.pop();
        self.refresh();
    }

    fn refresh(&mut self) {
        self.visible = filter_indices(&self.items, &self.filter);
        // Keep the cursor on the active item when it is still listed
        self.cursor = self
            .active
            .as_deref()
            .and_then(|key| self.visible.iter().position(|&i| self.items[i].key() == Some(key)))
            .unwrap_or(0);
    }

    /// Items passing the current filter, in source order
    pub fn visible(&self) -> impl Iterator<Item = &T> + '_ {
        self.visible.iter().map(move |&i| &self.items[i])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor by `delta` rows, wrapping around the visible list
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.visible.len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let len = len as isize;
        self.cursor = (self.cursor as isize + delta).rem_euclid(len) as usize;
    }

    /// Item under the cursor
    pub fn highlighted(&self) -> Option<&T> {
        self.visible.get(self.cursor).map(|&i| &self.items[i])
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.by_key.get(key).map(|&i| &self.items[i])
    }

    /// Mark the item with `key` as the one being shown
    pub fn activate(&mut self, key: &str) {
        self.active = Some(key.to_string());
        if let Some(pos) = self
            .visible
            .iter()
            .position(|&i| self.items[i].key() == Some(key))
        {
            self.cursor = pos;
        }
    }

    pub fn active_key(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, item: &T) -> bool {
        match (self.active.as_deref(), item.key()) {
            (Some(active), Some(key)) => active == key,
            _ => false,
        }
    }

    /// Item to show on startup: the persisted one if it is still in the
    /// collection, otherwise the first item
    pub fn initial(&self, persisted: Option<&str>) -> Option<&T> {
        persisted
            .and_then(|key| self.get(key))
            .or_else(|| self.items.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn entry(label: &str, file: &str) -> ManifestEntry {
        ManifestEntry {
            label: Some(label.to_string()),
            file: Some(file.to_string()),
        }
    }

    fn sample() -> Catalog<ManifestEntry> {
        Catalog::new(vec![
            entry("Words in Context", "words.json"),
            entry("Text Structure", "structure.json"),
            entry("Transitions", "transitions.json"),
            entry("Boundaries", "boundaries.json"),
        ])
    }

    fn visible_labels(catalog: &Catalog<ManifestEntry>) -> Vec<&str> {
        catalog.visible().map(|e| e.label()).collect()
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let mut catalog = sample();
        catalog.set_filter("TEXT");
        assert_eq!(visible_labels(&catalog), vec!["Words in Context", "Text Structure"]);
    }

    #[test]
    fn test_filter_by_keystroke() {
        let mut catalog = sample();
        for c in "tr".chars() {
            catalog.push_filter_char(c);
        }
        assert_eq!(visible_labels(&catalog), vec!["Text Structure", "Transitions"]);
        catalog.pop_filter_char();
        catalog.pop_filter_char();
        assert_eq!(catalog.visible_len(), 4);
    }

    #[test]
    fn test_initial_prefers_persisted() {
        let catalog = sample();
        let chosen = catalog.initial(Some("transitions.json")).expect("item");
        assert_eq!(chosen.label(), "Transitions");
    }

    #[test]
    fn test_initial_falls_back_to_first() {
        let catalog = sample();
        assert_eq!(catalog.initial(None).map(|e| e.label()), Some("Words in Context"));
        assert_eq!(
            catalog.initial(Some("deleted.json")).map(|e| e.label()),
            Some("Words in Context")
        );
    }

    #[test]
    fn test_initial_on_empty_catalog() {
        let catalog: Catalog<ManifestEntry> = Catalog::new(Vec::new());
        assert!(catalog.initial(Some("x")).is_none());
    }

    #[test]
    fn test_cursor_wraps() {
        let mut catalog = sample();
        catalog.move_cursor(-1);
        assert_eq!(catalog.highlighted().map(|e| e.label()), Some("Boundaries"));
        catalog.move_cursor(1);
        assert_eq!(catalog.highlighted().map(|e| e.label()), Some("Words in Context"));
    }

    #[test]
    fn test_cursor_on_empty_filter_result() {
        let mut catalog = sample();
        catalog.set_filter("zzz");
        catalog.move_cursor(1);
        assert!(catalog.highlighted().is_none());
    }

    #[test]
    fn test_active_item_survives_filtering() {
        let mut catalog = sample();
        catalog.activate("transitions.json");
        assert_eq!(catalog.cursor(), 2);

        catalog.set_filter("t");
        let active: Vec<_> = catalog
            .visible()
            .filter(|e| catalog.is_active(e))
            .map(|e| e.label())
            .collect();
        assert_eq!(active, vec!["Transitions"]);
        assert_eq!(catalog.highlighted().map(|e| e.label()), Some("Transitions"));
    }

    #[test]
    fn test_unit_display_fallback() {
        let unit = Unit::default();
        assert_eq!(unit.label(), "");
        assert_eq!(unit.display(), "Unit");
    }

    proptest! {
        #[test]
        fn prop_visible_is_matching_subsequence(
            labels in proptest::collection::vec("[a-zA-Z ]{0,12}", 0..20),
            filter in "[a-zA-Z]{0,3}",
        ) {
            let items: Vec<ManifestEntry> = labels
                .iter()
                .enumerate()
                .map(|(i, l)| entry(l, &format!("{}.json", i)))
                .collect();
            let mut catalog = Catalog::new(items);
            catalog.set_filter(&filter);

            let expected: Vec<&str> = labels
                .iter()
                .map(String::as_str)
                .filter(|l| l.to_lowercase().contains(&filter.to_lowercase()))
                .collect();
            let actual: Vec<&str> = catalog.visible().map(|e| e.label()).collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
