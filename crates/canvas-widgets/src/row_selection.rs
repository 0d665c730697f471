//! Selection engine: a set of row identifiers plus derived flags.

use std::collections::HashSet;

/// How many rows can be selected at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectMode {
    /// Selection disabled; no checkboxes are rendered.
    #[default]
    Off,
    /// At most one row; selecting another replaces the previous one.
    Single,
    /// Independent per-row toggles plus an all/none master toggle.
    Multiple,
}

/// Tracks which rows are selected, keyed by row identifier.
///
/// Membership of the key set is the single source of truth — row objects
/// are never stored, so replacing the data set cannot leave two
/// identities for the same logical row. Rows whose identifier cannot be
/// resolved simply never match, and therefore can never appear selected.
#[derive(Debug, Default)]
pub struct RowSelection {
    mode: SelectMode,
    keys: HashSet<String>,
}

impl RowSelection {
    /// Create an empty selection with the given mode.
    pub fn new(mode: SelectMode) -> Self {
        Self {
            mode,
            keys: HashSet::new(),
        }
    }

    /// The selection cardinality mode.
    pub fn mode(&self) -> SelectMode {
        self.mode
    }

    /// Whether the row with this identifier is selected.
    pub fn is_selected(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Number of selected rows.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Set or clear one row's selected state.
    ///
    /// In `Single` mode selecting replaces the whole set with this key;
    /// in `Multiple` mode keys toggle independently. No-op when selection
    /// is off.
    pub fn toggle(&mut self, key: &str, selected: bool) {
        match self.mode {
            SelectMode::Off => {}
            SelectMode::Single => {
                self.keys.clear();
                if selected {
                    self.keys.insert(key.to_string());
                }
            }
            SelectMode::Multiple => {
                if selected {
                    self.keys.insert(key.to_string());
                } else {
                    self.keys.remove(key);
                }
            }
        }
    }

    /// Replace the selection with exactly the given keys.
    pub fn select_all(&mut self, keys: impl IntoIterator<Item = String>) {
        if self.mode == SelectMode::Off {
            return;
        }
        self.keys = keys.into_iter().collect();
    }

    /// Empty the selection.
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Drop selected keys that no longer satisfy `keep` — used to prune
    /// identifiers that stopped resolving to any row after a data swap.
    pub fn retain(&mut self, keep: impl Fn(&str) -> bool) {
        self.keys.retain(|k| keep(k));
    }

    /// Whether every visible row is selected (and there is at least one).
    pub fn all_selected(&self, visible: &[String]) -> bool {
        self.mode != SelectMode::Off
            && !visible.is_empty()
            && visible.iter().all(|k| self.keys.contains(k))
    }

    /// Whether the selection is non-empty but not complete — drives the
    /// indeterminate state of the header checkbox.
    pub fn some_selected(&self, visible: &[String]) -> bool {
        self.mode != SelectMode::Off && !self.keys.is_empty() && !self.all_selected(visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn off_mode_ignores_toggles() {
        let mut sel = RowSelection::new(SelectMode::Off);
        sel.toggle("1", true);
        assert!(sel.is_empty());
        sel.select_all(keys(&["1", "2"]));
        assert!(sel.is_empty());
    }

    #[test]
    fn single_mode_replaces_selection() {
        let mut sel = RowSelection::new(SelectMode::Single);
        sel.toggle("1", true);
        assert!(sel.is_selected("1"));
        sel.toggle("2", true);
        assert!(!sel.is_selected("1"));
        assert!(sel.is_selected("2"));
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn single_mode_deselect_empties() {
        let mut sel = RowSelection::new(SelectMode::Single);
        sel.toggle("1", true);
        sel.toggle("1", false);
        assert!(sel.is_empty());
    }

    #[test]
    fn multiple_mode_toggles_independently() {
        let mut sel = RowSelection::new(SelectMode::Multiple);
        sel.toggle("1", true);
        sel.toggle("2", true);
        assert_eq!(sel.len(), 2);
        sel.toggle("1", false);
        assert!(!sel.is_selected("1"));
        assert!(sel.is_selected("2"));
    }

    #[test]
    fn all_selected_requires_nonempty_visible() {
        let sel = RowSelection::new(SelectMode::Multiple);
        assert!(!sel.all_selected(&[]));

        let mut sel = RowSelection::new(SelectMode::Multiple);
        sel.select_all(keys(&["1", "2"]));
        assert!(sel.all_selected(&keys(&["1", "2"])));
        assert!(!sel.all_selected(&[]));
    }

    #[test]
    fn some_selected_is_partial_only() {
        let mut sel = RowSelection::new(SelectMode::Multiple);
        let visible = keys(&["1", "2", "3"]);
        assert!(!sel.some_selected(&visible));

        sel.toggle("1", true);
        assert!(sel.some_selected(&visible));
        assert!(!sel.all_selected(&visible));

        sel.toggle("2", true);
        sel.toggle("3", true);
        assert!(sel.all_selected(&visible));
        assert!(!sel.some_selected(&visible));
    }

    #[test]
    fn toggle_all_off_then_on_restores_full_selection() {
        let mut sel = RowSelection::new(SelectMode::Multiple);
        let visible = keys(&["1", "2", "3"]);
        sel.select_all(visible.clone());
        assert!(sel.all_selected(&visible));
        sel.clear();
        assert!(sel.is_empty());
        sel.select_all(visible.clone());
        assert!(sel.all_selected(&visible));
    }

    #[test]
    fn retain_prunes_stale_keys() {
        let mut sel = RowSelection::new(SelectMode::Multiple);
        sel.select_all(keys(&["1", "2", "3"]));
        sel.retain(|k| k != "2");
        assert!(sel.is_selected("1"));
        assert!(!sel.is_selected("2"));
        assert!(sel.is_selected("3"));
    }

    #[test]
    fn superset_of_visible_counts_as_all_selected() {
        // Selection can hold keys from other pages; visibility is what the
        // flag is judged against.
        let mut sel = RowSelection::new(SelectMode::Multiple);
        sel.select_all(keys(&["1", "2", "3", "4"]));
        assert!(sel.all_selected(&keys(&["2", "3"])));
    }
}
