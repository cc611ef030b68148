use std::collections::BTreeSet;

use shared_types::{AggregationSnapshot, Facet, FacetSelections, StatusLabel};

/// One button of the status selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusChip {
    All,
    Label(StatusLabel),
}

/// Status chips in display order.
pub const STATUS_CHIPS: [StatusChip; 5] = [
    StatusChip::All,
    StatusChip::Label(StatusLabel::Registered),
    StatusChip::Label(StatusLabel::Pending),
    StatusChip::Label(StatusLabel::Abandoned),
    StatusChip::Label(StatusLabel::Others),
];

impl StatusChip {
    pub fn label(&self) -> &'static str {
        match self {
            StatusChip::All => "All",
            StatusChip::Label(label) => label.display_name(),
        }
    }
}

/// Selection state of the status selector.
///
/// Either "All" alone is active (empty set) or a non-empty set of labels is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusToggle {
    active: BTreeSet<StatusLabel>,
}

impl StatusToggle {
    pub fn new(active: BTreeSet<StatusLabel>) -> Self {
        Self { active }
    }

    /// Apply a click. Returns true when the selection changed.
    pub fn click(&mut self, chip: StatusChip) -> bool {
        match chip {
            StatusChip::All => {
                let changed = !self.active.is_empty();
                self.active.clear();
                changed
            }
            StatusChip::Label(label) => {
                if !self.active.remove(&label) {
                    self.active.insert(label);
                }
                // Removing the last label falls back to "All" by construction.
                true
            }
        }
    }

    pub fn is_active(&self, chip: StatusChip) -> bool {
        match chip {
            StatusChip::All => self.active.is_empty(),
            StatusChip::Label(label) => self.active.contains(&label),
        }
    }

    pub fn selection(&self) -> &BTreeSet<StatusLabel> {
        &self.active
    }

    /// Follow the store after an external change.
    pub fn sync(&mut self, active: &BTreeSet<StatusLabel>) {
        if self.active != *active {
            self.active = active.clone();
        }
    }
}

/// Bucket keys worth listing: blank keys dropped, then a case-insensitive
/// substring match against `search` (ignored when blank).
pub fn filter_options<'a>(keys: &[&'a str], search: &str) -> Vec<&'a str> {
    let needle = search.trim().to_lowercase();
    keys.iter()
        .copied()
        .filter(|key| !key.trim().is_empty())
        .filter(|key| needle.is_empty() || key.to_lowercase().contains(&needle))
        .collect()
}

/// State of the tabbed facet selector.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FacetPicker {
    active_tab: Facet,
    search_text: String,
    selections: FacetSelections,
}

impl FacetPicker {
    pub fn new(selections: FacetSelections) -> Self {
        Self {
            selections,
            ..Self::default()
        }
    }

    pub fn active_tab(&self) -> Facet {
        self.active_tab
    }

    /// Switch tabs. The search text always resets.
    pub fn switch_tab(&mut self, facet: Facet) {
        self.active_tab = facet;
        self.search_text.clear();
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Flip `value` in the active tab. Returns true when it is now selected.
    pub fn toggle(&mut self, value: &str) -> bool {
        self.selections.get_mut(self.active_tab).toggle(value)
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selections.get(self.active_tab).contains(value)
    }

    pub fn selections(&self) -> &FacetSelections {
        &self.selections
    }

    /// Follow the store after an external change.
    pub fn sync_selections(&mut self, selections: &FacetSelections) {
        if self.selections != *selections {
            self.selections = selections.clone();
        }
    }

    /// Options of the active tab after local filtering.
    pub fn visible_options<'a>(&self, snapshot: &'a AggregationSnapshot) -> Vec<&'a str> {
        filter_options(&snapshot.keys(self.active_tab), &self.search_text)
    }

    /// Placeholder shown when [`visible_options`](Self::visible_options) is empty.
    pub fn empty_message(&self) -> String {
        if self.search_text.is_empty() {
            "No data available".to_string()
        } else {
            format!("No results found for \"{}\"", self.search_text)
        }
    }
}

/// "Also try searching for" alternatives: trailing and leading wildcards.
pub fn wildcard_suggestions(query: &str) -> Vec<String> {
    let candidates = [format!("{query}*"), format!("*{query}")];
    candidates
        .into_iter()
        .filter(|candidate| candidate != query)
        .collect()
}

/// The query to submit from the search bar, or `None` when the trimmed input
/// is empty or equal to the current query.
pub fn normalize_submission(input: &str, current: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed == current {
        None
    } else {
        Some(trimmed.to_string())
    }
}
