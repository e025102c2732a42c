use axum::Router;
use petreg::kernel::server::state::ApiState;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(info(
    title = "Pet Registry",
    description = "Registers pets together with their owners, lists and removes them."
))]
struct ApiDoc;

/// Documented API routes, the Scalar UI at `/docs` and static assets as fallback.
pub(crate) fn init(state: ApiState) -> Router {
    let static_dir = state.config().storage.static_dir.clone();

    let (api_routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(petreg::server::router::system_router())
        .merge(petreg::server::router::pets_router())
        .with_state(state)
        .split_for_parts();

    Router::new()
        .merge(api_routes)
        .merge(Scalar::with_url("/docs", api_doc))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
}
