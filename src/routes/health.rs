use axum::Json;
use serde::Serialize;

/// Body of `GET /health`. Always `{"status": "ok"}`.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// Body of `GET /version`.
#[derive(Debug, Serialize)]
pub struct VersionInfo {
    pub version: String,
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}

pub async fn version() -> Json<VersionInfo> {
    Json(VersionInfo {
        version: app_version(),
    })
}

/// Deployment version as stamped by the pipeline (Docker ARG/ENV at image
/// build time). Read from `APP_VERSION` on every call, not cached at
/// startup, so a changed environment takes effect immediately. Unset or
/// empty means a local build, reported as "dev".
pub fn app_version() -> String {
    std::env::var("APP_VERSION")
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "dev".to_string())
}
