use axum::http::header;
use axum::{Json, response::IntoResponse};
use petreg_derive::{api_handler, api_model};
use petreg_domain::constants::SYSTEM_TAG;
use std::sync::LazyLock;
use std::time::Instant;

#[api_model]
/// Liveness report
struct HealthResponse {
    /// Always `up` while the process serves requests
    status: String,
    /// Server version
    version: String,
    /// Uptime in seconds
    uptime: u64,
}

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Marks the process start so `uptime` counts from boot rather than the first probe.
pub(crate) fn mark_started() {
    LazyLock::force(&START_TIME);
}

#[api_handler(
    get,
    path = "/health",
    responses((status = OK, description = "Healthcheck endpoint", body = HealthResponse)),
    tag = SYSTEM_TAG,
)]
pub(super) async fn health_handler() -> impl IntoResponse {
    let body = HealthResponse {
        status: "up".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        uptime: START_TIME.elapsed().as_secs(),
    };

    (
        [
            (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
            (header::PRAGMA, "no-cache"),
        ],
        Json(body),
    )
}
