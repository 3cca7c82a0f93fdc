use axum::body::Body;
use http::Request;

/// Build the router exactly the way the binary does, for `oneshot()` calls.
pub fn test_app() -> axum::Router {
    pipecheck::routes::router()
}

/// Build a GET request with no body.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Parse a response body into a `serde_json::Value`.
pub async fn parse_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
