mod health;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the application router. Both probe routes are stateless reads, so
/// no shared state is wired up; the middleware layers apply to both.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/version", get(health::version))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
