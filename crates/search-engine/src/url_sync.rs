use shared_types::{FilterState, SearchParams, SearchSettings};

/// Initial state derived from the address bar on page load.
#[derive(Debug, Clone, PartialEq)]
pub struct Bootstrap {
    pub state: FilterState,
    /// Set when `query` or `country` was missing; replace the URL with this.
    pub redirect: Option<SearchParams>,
}

/// How the address bar changed relative to the filter store.
#[derive(Debug, Clone, PartialEq)]
pub enum UrlChange {
    /// The URL already describes the store.
    Unchanged,
    /// A new query or country: start a fresh, unfiltered search. `redirect`
    /// strips stale filter parameters from the URL when present.
    QueryChanged {
        state: FilterState,
        redirect: Option<SearchParams>,
    },
    /// Same search, different refinements (history navigation).
    FiltersChanged(FilterState),
}

/// Keeps the address bar and the filter store describing the same search.
///
/// Remembers the last query string it applied so that writing an unchanged
/// state is a no-op, and so that the route change caused by its own write is
/// recognised as [`UrlChange::Unchanged`].
#[derive(Debug, Clone)]
pub struct UrlSynchronizer {
    default_query: String,
    default_country: String,
    last_applied: Option<String>,
    current: SearchParams,
}

impl UrlSynchronizer {
    pub fn new(default_query: impl Into<String>, default_country: impl Into<String>) -> Self {
        Self {
            default_query: default_query.into(),
            default_country: default_country.into(),
            last_applied: None,
            current: SearchParams::default(),
        }
    }

    pub fn from_settings(settings: &SearchSettings) -> Self {
        Self::new(&settings.default_query, &settings.default_country)
    }

    fn remember(&mut self, params: SearchParams) {
        self.last_applied = Some(params.to_string());
        self.current = params;
    }

    /// Read the landing URL, filling in a missing query or country.
    pub fn bootstrap(&mut self, params: &SearchParams) -> Bootstrap {
        let mut params = params.clone();
        let corrected = params.apply_defaults(&self.default_query, &self.default_country);
        let state = params.to_state(&self.default_query, &self.default_country);
        if corrected {
            tracing::info!(url = %params, "Filled in missing search parameters");
        }
        self.remember(params.clone());
        Bootstrap {
            state,
            redirect: corrected.then_some(params),
        }
    }

    /// Parameters for the store's current filters, or `None` when the address
    /// bar already shows them.
    pub fn publish(&mut self, state: &FilterState) -> Option<SearchParams> {
        let next = self.current.with_filters_from(state);
        let serialized = next.to_string();
        if self.last_applied.as_deref() == Some(serialized.as_str()) {
            return None;
        }
        tracing::debug!(url = %serialized, "Publishing filters to URL");
        self.remember(next.clone());
        Some(next)
    }

    /// Parameters for a newly submitted query. Filters are dropped; unknown
    /// parameters are kept.
    pub fn search_for(&self, query: &str) -> SearchParams {
        let country = self
            .current
            .country
            .clone()
            .unwrap_or_else(|| self.default_country.clone());
        SearchParams {
            extra: self.current.extra.clone(),
            ..SearchParams::query_only(query, &country)
        }
    }

    /// Reconcile a route change with the store's `state`.
    pub fn observe(&mut self, params: &SearchParams, state: &FilterState) -> UrlChange {
        let mut params = params.clone();
        params.apply_defaults(&self.default_query, &self.default_country);
        let incoming = params.to_state(&self.default_query, &self.default_country);

        if incoming.query != state.query || incoming.country != state.country {
            let fresh = FilterState::new(incoming.query, incoming.country);
            let reset = SearchParams {
                extra: params.extra.clone(),
                ..SearchParams::from_state(&fresh)
            };
            let redirect = (reset != params).then(|| reset.clone());
            tracing::info!(query = %fresh.query, country = %fresh.country, "Search query changed");
            self.remember(reset);
            return UrlChange::QueryChanged {
                state: fresh,
                redirect,
            };
        }

        self.remember(params);
        if incoming == *state {
            UrlChange::Unchanged
        } else {
            tracing::debug!("Adopting filters from URL");
            UrlChange::FiltersChanged(incoming)
        }
    }
}
