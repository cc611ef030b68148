use std::collections::BTreeSet;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use search_engine::{
    normalize_submission, FilterStore, HttpSearchBackend, SearchOrchestrator, SearchView,
    UrlChange, UrlSynchronizer,
};
use shared_types::{Facet, FacetSelection, FilterState, SearchParams, SearchSettings, StatusLabel};

use crate::common;

/// The page's moving parts without a renderer.
struct Session {
    sync: UrlSynchronizer,
    store: FilterStore,
    view: SearchView,
    orchestrator: SearchOrchestrator<HttpSearchBackend>,
    address_bar: SearchParams,
}

impl Session {
    fn open(url: &str, landing: &str) -> Self {
        let settings = SearchSettings {
            endpoint: url.to_string(),
            ..SearchSettings::default()
        };
        let mut sync = UrlSynchronizer::from_settings(&settings);
        let landing = SearchParams::parse(landing);
        let boot = sync.bootstrap(&landing);
        let address_bar = boot.redirect.clone().unwrap_or(landing);
        Self {
            sync,
            store: FilterStore::new(boot.state),
            view: SearchView::default(),
            orchestrator: SearchOrchestrator::new(HttpSearchBackend::new(url), &settings),
            address_bar,
        }
    }

    async fn refresh(&mut self) {
        self.view.begin_loading();
        let outcome = self.orchestrator.execute(self.store.state()).await;
        self.view.apply(outcome);
    }

    fn flush_url(&mut self) {
        if self.store.take_url_update() {
            if let Some(params) = self.sync.publish(self.store.state()) {
                self.address_bar = params;
            }
        }
    }

    /// The router delivering a URL, either ours or from history.
    fn navigate(&mut self, url: &str) -> UrlChange {
        let params = SearchParams::parse(url);
        let change = self.sync.observe(&params, self.store.state());
        match &change {
            UrlChange::Unchanged => {}
            UrlChange::QueryChanged { state, redirect } => {
                self.store.reset_search(state.query.clone(), state.country.clone());
                if let Some(redirect) = redirect {
                    self.address_bar = redirect.clone();
                }
            }
            UrlChange::FiltersChanged(state) => {
                self.store.adopt(state.clone());
            }
        }
        change
    }
}

#[tokio::test]
async fn test_bare_landing_url_gets_defaults() {
    let endpoint = common::mock_endpoint(StatusCode::OK, common::two_hit_response()).await;
    let mut session = Session::open(&endpoint.url, "");

    assert_eq!(session.store.state(), &FilterState::new("nike", "us"));
    assert_eq!(session.address_bar.to_string(), "query=nike&country=us");

    session.refresh().await;
    assert_eq!(endpoint.requests()[0]["input_query"], "nike");
    assert_eq!(session.view.total, Some(2));
}

#[tokio::test]
async fn test_status_toggle_round_trips_through_url() {
    let endpoint = common::mock_endpoint(StatusCode::OK, common::two_hit_response()).await;
    let mut session = Session::open(&endpoint.url, "?query=nike&country=us");
    session.refresh().await;

    let status: BTreeSet<_> = [StatusLabel::Registered].into_iter().collect();
    assert!(session.store.set_status(status.clone()));
    session.flush_url();
    assert_eq!(
        session.address_bar.to_string(),
        "query=nike&country=us&status=registered"
    );
    session.refresh().await;

    // The router echoes our own write back.
    let echoed = session.address_bar.to_string();
    assert_eq!(session.navigate(&echoed), UrlChange::Unchanged);
    assert_eq!(session.store.state().status, status);
    assert_eq!(endpoint.calls(), 2);

    // Back button to the unfiltered URL is served from cache.
    let change = session.navigate("?query=nike&country=us");
    assert!(matches!(change, UrlChange::FiltersChanged(_)));
    assert!(session.store.state().status.is_empty());
    assert!(!session.store.is_url_update_pending());
    session.refresh().await;
    assert_eq!(endpoint.calls(), 2);
}

#[tokio::test]
async fn test_facet_selection_keeps_unknown_params() {
    let endpoint = common::mock_endpoint(StatusCode::OK, common::two_hit_response()).await;
    let mut session = Session::open(&endpoint.url, "?query=nike&country=us&ref=home");

    let mut owners = FacetSelection::new();
    owners.insert("Nike Inc");
    assert!(session.store.set_facet(Facet::Owners, owners));
    session.flush_url();

    assert_eq!(
        session.address_bar.to_string(),
        "query=nike&country=us&owners=Nike%20Inc&ref=home"
    );
    session.refresh().await;
    assert_eq!(endpoint.requests()[0]["owners"], serde_json::json!(["Nike Inc"]));
}

#[tokio::test]
async fn test_new_query_drops_filters() {
    let endpoint = common::mock_endpoint(StatusCode::OK, common::two_hit_response()).await;
    let mut session = Session::open(
        &endpoint.url,
        "?query=nike&country=us&status=pending&owners=Nike%20Inc",
    );
    assert!(!session.store.state().is_unfiltered());

    let query = normalize_submission("  adidas ", &session.store.state().query);
    assert_eq!(query.as_deref(), Some("adidas"));
    let params = session.sync.search_for("adidas");
    assert_eq!(params.to_string(), "query=adidas&country=us");

    let change = session.navigate(&params.to_string());
    assert!(matches!(change, UrlChange::QueryChanged { redirect: None, .. }));
    assert_eq!(session.store.state(), &FilterState::new("adidas", "us"));

    session.refresh().await;
    let sent = &endpoint.requests()[0];
    assert_eq!(sent["input_query"], "adidas");
    assert_eq!(sent["status"], serde_json::json!([]));
    assert_eq!(sent["owners"], serde_json::json!([]));
}

#[tokio::test]
async fn test_unchanged_submission_is_ignored() {
    let endpoint = common::mock_endpoint(StatusCode::OK, common::two_hit_response()).await;
    let session = Session::open(&endpoint.url, "?query=nike&country=us");

    assert_eq!(normalize_submission("nike", &session.store.state().query), None);
    assert_eq!(normalize_submission("   ", &session.store.state().query), None);
    assert_eq!(endpoint.calls(), 0);
}
