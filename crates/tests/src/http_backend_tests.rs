use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use search_engine::{HttpSearchBackend, SearchBackend};
use shared_types::{
    FilterState, RequestDefaults, SearchErrorKind, SearchRequest, StatusLabel,
};

use crate::common;

fn nike_request() -> SearchRequest {
    let mut filters = FilterState::new("nike", "us");
    filters.status.insert(StatusLabel::Registered);
    filters.facets.owners.insert("Nike Inc");
    SearchRequest::from_filters(&filters, &RequestDefaults::default())
}

#[tokio::test]
async fn test_search_posts_full_request_body() {
    let endpoint = common::mock_endpoint(StatusCode::OK, common::two_hit_response()).await;
    let backend = HttpSearchBackend::new(&endpoint.url);

    backend.search(&nike_request()).await.unwrap();

    let requests = endpoint.requests();
    assert_eq!(requests.len(), 1);
    let sent = &requests[0];
    assert_eq!(sent["input_query"], "nike");
    assert_eq!(sent["input_query_type"], "");
    assert_eq!(sent["sort_by"], "default");
    assert_eq!(sent["status"], serde_json::json!(["registered"]));
    assert_eq!(sent["exact_match"], false);
    assert_eq!(sent["date_query"], false);
    assert_eq!(sent["owners"], serde_json::json!(["Nike Inc"]));
    assert_eq!(sent["attorneys"], serde_json::json!([]));
    assert_eq!(sent["law_firms"], serde_json::json!([]));
    assert_eq!(sent["mark_description_description"], serde_json::json!([]));
    assert_eq!(sent["classes"], serde_json::json!([]));
    assert_eq!(sent["page"], 1);
    assert_eq!(sent["rows"], 10);
    assert_eq!(sent["sort_order"], "desc");
    assert_eq!(sent["states"], serde_json::json!([]));
    assert_eq!(sent["counties"], serde_json::json!([]));
}

#[tokio::test]
async fn test_search_parses_hits_and_aggregations() {
    let endpoint = common::mock_endpoint(StatusCode::OK, common::two_hit_response()).await;
    let backend = HttpSearchBackend::new(&endpoint.url);

    let body = backend.search(&nike_request()).await.unwrap();

    assert_eq!(body.total(), Some(2));
    assert_eq!(body.hits.hits.len(), 2);
    assert_eq!(body.hits.hits[0].id, "97000001");
    assert_eq!(
        body.hits.hits[0].source.mark_identification.as_deref(),
        Some("NIKE")
    );
    assert_eq!(
        body.aggregations.keys(shared_types::Facet::Owners),
        vec!["Nike Inc", "Nike Innovate C.V."]
    );
    assert_eq!(
        body.aggregations.keys(shared_types::Facet::Attorneys),
        vec!["Jane Roe"]
    );
    assert!(body.aggregations.keys(shared_types::Facet::LawFirms).is_empty());
}

#[tokio::test]
async fn test_search_server_error_reports_status() {
    let endpoint =
        common::mock_endpoint(StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").await;
    let backend = HttpSearchBackend::new(&endpoint.url);

    let err = backend.search(&nike_request()).await.unwrap_err();

    assert_eq!(err.kind, SearchErrorKind::HttpStatus);
    assert_eq!(err.status, Some(500));
    assert_eq!(err.message, "API Error: 500 Internal Server Error");
    assert_eq!(
        err.user_message(),
        "Error loading results: API Error: 500 Internal Server Error. Please try again later."
    );
}

#[tokio::test]
async fn test_search_missing_hits_is_malformed() {
    let endpoint =
        common::mock_endpoint(StatusCode::OK, r#"{"body":{"aggregations":{}}}"#).await;
    let backend = HttpSearchBackend::new(&endpoint.url);

    let err = backend.search(&nike_request()).await.unwrap_err();

    assert_eq!(err.kind, SearchErrorKind::MalformedBody);
    assert!(err.message.starts_with("Invalid response format from API"));
}

#[tokio::test]
async fn test_search_tolerates_null_hit_fields() {
    let body = r#"{"body":{"hits":{"total":{"value":2},"hits":[
        {"_id":"1","_source":null},
        {"_id":"2","_source":{"mark_identification":"NIKE","class_codes":null}}
    ]}}}"#;
    let endpoint = common::mock_endpoint(StatusCode::OK, body).await;
    let backend = HttpSearchBackend::new(&endpoint.url);

    let body = backend.search(&nike_request()).await.unwrap();

    assert_eq!(body.total(), Some(2));
    assert_eq!(body.hits.hits.len(), 2);
    assert_eq!(body.hits.hits[0].source.mark_identification, None);
    assert!(body.hits.hits[1].source.class_codes.is_empty());
}

#[tokio::test]
async fn test_search_non_json_is_malformed() {
    let endpoint = common::mock_endpoint(StatusCode::OK, "<html>maintenance</html>").await;
    let backend = HttpSearchBackend::new(&endpoint.url);

    let err = backend.search(&nike_request()).await.unwrap_err();

    assert_eq!(err.kind, SearchErrorKind::MalformedBody);
}

#[tokio::test]
async fn test_search_unreachable_endpoint_is_transport_error() {
    let url = common::closed_endpoint().await;
    let backend = HttpSearchBackend::new(&url);

    let err = backend.search(&nike_request()).await.unwrap_err();

    assert_eq!(err.kind, SearchErrorKind::Transport);
    assert_eq!(err.status, None);
    assert!(err.message.starts_with("Search request failed"));
}

#[tokio::test]
async fn test_with_client_keeps_endpoint() {
    let backend = HttpSearchBackend::with_client(reqwest::Client::new(), "http://127.0.0.1:9/search");
    assert_eq!(backend.endpoint(), "http://127.0.0.1:9/search");
}
