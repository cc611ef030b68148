use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use search_engine::{HttpSearchBackend, SearchOrchestrator, SearchOutcome, SearchView};
use shared_types::{Facet, FilterState, SearchErrorKind, SearchSettings, StatusLabel};

use crate::common;

fn orchestrator_for(url: &str) -> SearchOrchestrator<HttpSearchBackend> {
    let settings = SearchSettings {
        endpoint: url.to_string(),
        ..SearchSettings::default()
    };
    SearchOrchestrator::new(HttpSearchBackend::new(&settings.endpoint), &settings)
}

#[tokio::test]
async fn test_repeated_filters_hit_network_once() {
    let endpoint = common::mock_endpoint(StatusCode::OK, common::two_hit_response()).await;
    let orchestrator = orchestrator_for(&endpoint.url);
    let filters = FilterState::new("nike", "us");

    let first = orchestrator.execute(&filters).await;
    let second = orchestrator.execute(&filters).await;

    assert_eq!(endpoint.calls(), 1);
    assert_eq!(orchestrator.network_calls(), 1);
    match (first, second) {
        (SearchOutcome::Resolved(first), SearchOutcome::Resolved(second)) => {
            assert!(!first.from_cache);
            assert!(second.from_cache);
            assert_eq!(first.body, second.body);
            assert_eq!(first.fingerprint, second.fingerprint);
        }
        other => panic!("expected two resolutions, got {other:?}"),
    }
}

#[tokio::test]
async fn test_status_order_does_not_change_cache_key() {
    let endpoint = common::mock_endpoint(StatusCode::OK, common::two_hit_response()).await;
    let orchestrator = orchestrator_for(&endpoint.url);

    let mut a = FilterState::new("nike", "us");
    a.status.insert(StatusLabel::Pending);
    a.status.insert(StatusLabel::Registered);
    let mut b = FilterState::new("nike", "us");
    b.status.insert(StatusLabel::Registered);
    b.status.insert(StatusLabel::Pending);

    orchestrator.execute(&a).await;
    orchestrator.execute(&b).await;

    assert_eq!(endpoint.calls(), 1);
    assert_eq!(
        endpoint.requests()[0]["status"],
        serde_json::json!(["registered", "pending"])
    );
}

#[tokio::test]
async fn test_changed_facet_fetches_again() {
    let endpoint = common::mock_endpoint(StatusCode::OK, common::two_hit_response()).await;
    let orchestrator = orchestrator_for(&endpoint.url);

    let base = FilterState::new("nike", "us");
    let mut narrowed = base.clone();
    narrowed.facets.get_mut(Facet::Owners).insert("Nike Inc");

    orchestrator.execute(&base).await;
    orchestrator.execute(&narrowed).await;
    orchestrator.execute(&base).await;

    assert_eq!(endpoint.calls(), 2);
    assert_eq!(orchestrator.cache_len(), 2);
    assert_eq!(endpoint.requests()[1]["owners"], serde_json::json!(["Nike Inc"]));
}

#[tokio::test]
async fn test_failures_are_retried() {
    let endpoint = common::mock_endpoint(StatusCode::SERVICE_UNAVAILABLE, "").await;
    let orchestrator = orchestrator_for(&endpoint.url);
    let filters = FilterState::new("nike", "us");

    let first = orchestrator.execute(&filters).await;
    let second = orchestrator.execute(&filters).await;

    assert_eq!(endpoint.calls(), 2);
    assert!(!orchestrator.is_cached(&filters));
    match first {
        SearchOutcome::Failed(err) => assert_eq!(err.kind, SearchErrorKind::HttpStatus),
        other => panic!("expected a failure, got {other:?}"),
    }
    assert!(matches!(second, SearchOutcome::Failed(_)));
}

#[tokio::test]
async fn test_resolution_populates_view() {
    let endpoint = common::mock_endpoint(StatusCode::OK, common::two_hit_response()).await;
    let orchestrator = orchestrator_for(&endpoint.url);
    let mut view = SearchView::default();

    view.begin_loading();
    assert!(view.loading);
    assert!(!view.phase.is_ready());

    let outcome = orchestrator.execute(&FilterState::new("nike", "us")).await;
    view.apply(outcome);

    assert!(!view.loading);
    assert!(view.phase.is_ready());
    assert_eq!(view.total, Some(2));
    assert_eq!(view.hits.len(), 2);
    assert_eq!(view.error, None);
    assert_eq!(
        view.snapshot.keys(Facet::Owners),
        vec!["Nike Inc", "Nike Innovate C.V."]
    );
}

#[tokio::test]
async fn test_error_clears_hits_but_keeps_count() {
    let good = common::mock_endpoint(StatusCode::OK, common::two_hit_response()).await;
    let bad = common::mock_endpoint(StatusCode::INTERNAL_SERVER_ERROR, "").await;
    let mut view = SearchView::default();

    view.begin_loading();
    view.apply(orchestrator_for(&good.url).execute(&FilterState::new("nike", "us")).await);

    view.begin_loading();
    view.apply(orchestrator_for(&bad.url).execute(&FilterState::new("adidas", "us")).await);

    assert!(view.hits.is_empty());
    assert_eq!(view.total, Some(2));
    assert_eq!(
        view.error.as_ref().map(|e| e.user_message()),
        Some(
            "Error loading results: API Error: 500 Internal Server Error. Please try again later."
                .to_string()
        )
    );
    assert!(!view.snapshot.keys(Facet::Owners).is_empty());
}
