use std::collections::BTreeSet;

use shared_types::{Facet, FacetSelection, FacetSelections, FilterState, StatusLabel};

/// The current filter tuple and its mutation rules.
///
/// Status and facet updates flag a pending URL update; a new query clears all
/// refinements instead. `revision` increases on every effective change.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterStore {
    state: FilterState,
    url_update_pending: bool,
    revision: u64,
}

impl FilterStore {
    pub fn new(state: FilterState) -> Self {
        Self {
            state,
            url_update_pending: false,
            revision: 0,
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_url_update_pending(&self) -> bool {
        self.url_update_pending
    }

    fn bump(&mut self) {
        self.revision += 1;
    }

    /// Replace the query text, dropping status and facet filters.
    ///
    /// Returns false when the query is unchanged.
    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        if query == self.state.query {
            return false;
        }
        self.state.query = query;
        self.state.clear_filters();
        self.url_update_pending = false;
        self.bump();
        true
    }

    /// Start over from a query and country with no filters.
    pub fn reset_search(&mut self, query: impl Into<String>, country: impl Into<String>) {
        let country = country.into();
        if country != self.state.country {
            self.state = FilterState::new(query, country);
            self.bump();
        } else if !self.set_query(query) && !self.state.is_unfiltered() {
            self.state.clear_filters();
            self.bump();
        }
        self.url_update_pending = false;
    }

    /// Replace the status filter. An empty set means "All".
    pub fn set_status(&mut self, status: BTreeSet<StatusLabel>) -> bool {
        if status == self.state.status {
            return false;
        }
        self.state.status = status;
        self.url_update_pending = true;
        self.bump();
        true
    }

    /// Replace one facet category's selection.
    pub fn set_facet(&mut self, facet: Facet, selection: FacetSelection) -> bool {
        if *self.state.facets.get(facet) == selection {
            return false;
        }
        *self.state.facets.get_mut(facet) = selection;
        self.url_update_pending = true;
        self.bump();
        true
    }

    /// Replace every facet category at once.
    pub fn set_facets(&mut self, facets: FacetSelections) -> bool {
        if facets == self.state.facets {
            return false;
        }
        self.state.facets = facets;
        self.url_update_pending = true;
        self.bump();
        true
    }

    /// Take a state that came from the address bar. The URL already says this,
    /// so no update is flagged.
    pub fn adopt(&mut self, state: FilterState) -> bool {
        if state == self.state {
            return false;
        }
        self.state = state;
        self.url_update_pending = false;
        self.bump();
        true
    }

    /// Clear the pending flag, returning whether it was set.
    pub fn take_url_update(&mut self) -> bool {
        std::mem::take(&mut self.url_update_pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> FilterStore {
        FilterStore::new(FilterState::new("nike", "us"))
    }

    #[test]
    fn status_change_flags_url_update() {
        let mut store = store();
        assert!(store.set_status([StatusLabel::Pending].into()));
        assert!(store.is_url_update_pending());
        assert_eq!(store.revision(), 1);
        assert!(store.take_url_update());
        assert!(!store.take_url_update());
    }

    #[test]
    fn unchanged_updates_are_ignored() {
        let mut store = store();
        assert!(!store.set_status(BTreeSet::new()));
        assert!(!store.set_facet(Facet::Owners, FacetSelection::new()));
        assert!(!store.set_facets(FacetSelections::default()));
        assert!(!store.set_query("nike"));
        assert_eq!(store.revision(), 0);
        assert!(!store.is_url_update_pending());
    }

    #[test]
    fn query_change_resets_filters() {
        let mut store = store();
        store.set_status([StatusLabel::Registered].into());
        store.set_facet(Facet::Attorneys, ["Jane Doe"].into_iter().collect());
        let before = store.state().fingerprint();

        assert!(store.set_query("adidas"));
        assert!(store.state().is_unfiltered());
        assert_eq!(store.state().country, "us");
        assert!(!store.is_url_update_pending());
        assert_ne!(store.state().fingerprint(), before);
    }

    #[test]
    fn set_facet_touches_only_its_category() {
        let mut store = store();
        store.set_facet(Facet::Owners, ["Nike Inc"].into_iter().collect());
        store.set_facet(Facet::LawFirms, ["Acme LLP"].into_iter().collect());
        assert_eq!(store.state().facets.owners.as_slice(), &["Nike Inc"]);
        assert_eq!(store.state().facets.law_firms.as_slice(), &["Acme LLP"]);
        assert!(store.state().facets.attorneys.is_empty());
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn adopt_does_not_flag_url_update() {
        let mut store = store();
        let mut from_url = FilterState::new("nike", "us");
        from_url.status.insert(StatusLabel::Abandoned);
        assert!(store.adopt(from_url.clone()));
        assert_eq!(store.state(), &from_url);
        assert!(!store.is_url_update_pending());
        assert!(!store.adopt(from_url));
    }

    #[test]
    fn reset_search_clears_pending_flag() {
        let mut store = store();
        store.set_status([StatusLabel::Others].into());
        store.reset_search("puma", "us");
        assert_eq!(store.state(), &FilterState::new("puma", "us"));
        assert!(!store.is_url_update_pending());
    }

    #[test]
    fn reset_search_on_new_country_starts_over() {
        let mut store = store();
        store.set_facet(Facet::Owners, ["Nike Inc"].into_iter().collect());
        store.reset_search("nike", "ca");
        assert_eq!(store.state(), &FilterState::new("nike", "ca"));
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn reset_search_with_same_query_drops_filters() {
        let mut store = store();
        store.set_status([StatusLabel::Pending].into());
        store.reset_search("nike", "us");
        assert!(store.state().is_unfiltered());
        assert_eq!(store.revision(), 2);

        store.reset_search("nike", "us");
        assert_eq!(store.revision(), 2);
    }
}
