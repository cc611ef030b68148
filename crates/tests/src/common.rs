use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};

/// What the mock endpoint answers and what it has seen.
#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<Value>>>,
}

/// A local stand-in for the trademark search endpoint.
pub struct MockEndpoint {
    pub url: String,
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl MockEndpoint {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Request bodies received so far, oldest first.
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

async fn handle(State(state): State<MockState>, Json(request): Json<Value>) -> (StatusCode, String) {
    state.calls.fetch_add(1, Ordering::SeqCst);
    state.requests.lock().unwrap().push(request);
    (state.status, state.body.clone())
}

/// Serve `body` with `status` for every `POST /search` on an ephemeral port.
pub async fn mock_endpoint(status: StatusCode, body: impl Into<String>) -> MockEndpoint {
    let calls = Arc::new(AtomicUsize::new(0));
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        status,
        body: body.into(),
        calls: calls.clone(),
        requests: requests.clone(),
    };
    let app = Router::new()
        .route("/search", post(handle))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock endpoint");
    let addr = listener.local_addr().expect("Mock endpoint has no address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock endpoint stopped");
    });

    MockEndpoint {
        url: format!("http://{addr}/search"),
        calls,
        requests,
    }
}

/// A URL on a port nothing listens on.
pub async fn closed_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe port");
    let addr = listener.local_addr().expect("Probe port has no address");
    drop(listener);
    format!("http://{addr}/search")
}

/// A two-hit response in the endpoint's envelope, with owner aggregations.
pub fn two_hit_response() -> String {
    json!({
        "body": {
            "hits": {
                "total": { "value": 2 },
                "hits": [
                    {
                        "_id": "97000001",
                        "_source": {
                            "mark_identification": "NIKE",
                            "current_owner": "Nike Inc",
                            "filing_date": "2019-03-05",
                            "registration_date": 1577836800,
                            "status_type": "registered",
                            "mark_description_description": ["Athletic footwear"],
                            "class_codes": ["25", 28]
                        }
                    },
                    {
                        "_id": "97000002",
                        "_source": {
                            "mark_identification": "NIKE AIR",
                            "current_owner": "Nike Innovate C.V.",
                            "status_type": "pending",
                            "class_codes": []
                        }
                    }
                ]
            },
            "aggregations": {
                "current_owners": {
                    "buckets": [
                        { "key": "Nike Inc", "doc_count": 1 },
                        { "key": "Nike Innovate C.V.", "doc_count": 1 }
                    ]
                },
                "law_firms": { "buckets": [] },
                "attorneys": { "buckets": [{ "key": "Jane Roe" }] }
            }
        }
    })
    .to_string()
}
