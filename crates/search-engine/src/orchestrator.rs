use std::cell::{Cell, RefCell};

use shared_types::{
    FilterState, Fingerprint, RequestDefaults, SearchError, SearchRequest, SearchResponseBody,
    SearchSettings,
};
use tokio_util::sync::CancellationToken;

use crate::backend::SearchBackend;
use crate::cache::ResponseCache;

/// A completed search.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub fingerprint: Fingerprint,
    pub body: SearchResponseBody,
    pub from_cache: bool,
    /// The filter tuple had no status or facet filter.
    pub unfiltered: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Resolved(Resolution),
    Failed(SearchError),
    /// A newer search started before this one finished. Its result is dropped.
    Superseded,
}

/// Turns filter states into search results.
///
/// Answers from the response cache when the fingerprint is known and goes to
/// the backend otherwise. Only the most recent call may finish: starting a new
/// one cancels the previous in-flight request.
pub struct SearchOrchestrator<B> {
    backend: B,
    defaults: RequestDefaults,
    cache: RefCell<ResponseCache>,
    inflight: RefCell<Option<CancellationToken>>,
    generation: Cell<u64>,
    network_calls: Cell<u64>,
}

impl<B: SearchBackend> SearchOrchestrator<B> {
    pub fn new(backend: B, settings: &SearchSettings) -> Self {
        Self {
            backend,
            defaults: settings.request_defaults(),
            cache: RefCell::new(ResponseCache::new(settings.cache_capacity)),
            inflight: RefCell::new(None),
            generation: Cell::new(0),
            network_calls: Cell::new(0),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The request body sent for `filters`.
    pub fn request_for(&self, filters: &FilterState) -> SearchRequest {
        SearchRequest::from_filters(filters, &self.defaults)
    }

    pub fn is_cached(&self, filters: &FilterState) -> bool {
        self.cache.borrow().contains(&filters.fingerprint())
    }

    pub fn cache_len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Number of requests handed to the backend so far.
    pub fn network_calls(&self) -> u64 {
        self.network_calls.get()
    }

    /// Cancel the in-flight request, if any. Used on teardown.
    pub fn cancel_inflight(&self) {
        if let Some(token) = self.inflight.borrow_mut().take() {
            token.cancel();
        }
        self.generation.set(self.generation.get() + 1);
    }

    fn begin(&self) -> (u64, CancellationToken) {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        let token = CancellationToken::new();
        if let Some(previous) = self.inflight.borrow_mut().replace(token.clone()) {
            previous.cancel();
        }
        (generation, token)
    }

    fn finish(&self, generation: u64) {
        if self.generation.get() == generation {
            self.inflight.borrow_mut().take();
        }
    }

    /// Resolve `filters` from the cache or the backend.
    pub async fn execute(&self, filters: &FilterState) -> SearchOutcome {
        let fingerprint = filters.fingerprint();
        let unfiltered = filters.is_unfiltered();
        let (generation, token) = self.begin();

        let cached = self.cache.borrow_mut().get(&fingerprint);
        if let Some(body) = cached {
            tracing::debug!(fingerprint = %fingerprint, "Search served from cache");
            self.finish(generation);
            return SearchOutcome::Resolved(Resolution {
                fingerprint,
                body,
                from_cache: true,
                unfiltered,
            });
        }

        let request = self.request_for(filters);
        self.network_calls.set(self.network_calls.get() + 1);

        let result = tokio::select! {
            biased;
            _ = token.cancelled() => {
                tracing::debug!(fingerprint = %fingerprint, "Superseded search discarded");
                return SearchOutcome::Superseded;
            }
            result = self.backend.search(&request) => result,
        };

        if self.generation.get() != generation {
            return SearchOutcome::Superseded;
        }
        self.finish(generation);

        match result {
            Ok(body) => {
                tracing::info!(
                    fingerprint = %fingerprint,
                    hits = body.hits.hits.len(),
                    total = ?body.total(),
                    "Search resolved"
                );
                self.cache
                    .borrow_mut()
                    .insert(fingerprint.clone(), body.clone());
                SearchOutcome::Resolved(Resolution {
                    fingerprint,
                    body,
                    from_cache: false,
                    unfiltered,
                })
            }
            Err(error) => {
                tracing::warn!(fingerprint = %fingerprint, error = %error, "Search failed");
                SearchOutcome::Failed(error)
            }
        }
    }
}
