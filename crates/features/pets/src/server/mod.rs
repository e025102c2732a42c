mod error;
mod handlers;
mod page;

use axum::routing::get;
use petreg_kernel::server::state::ApiState;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// JSON endpoints (documented) plus the registration page at `/`.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::create_pet))
        .routes(routes!(handlers::list_pets))
        .routes(routes!(handlers::delete_pet))
        .route("/", get(page::index))
}
