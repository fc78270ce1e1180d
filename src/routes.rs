// Route path constants - single source of truth for all API paths

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;

pub const ROOT: &str = "/";
pub const HEALTH: &str = "/health";
pub const PROXY: &str = "/vaultn-proxy";
pub const PROXY_WILDCARD: &str = "/vaultn-proxy/{*path}";

/// Assemble the full application router.
///
/// The wildcard route needs a separate registration for the bare mount
/// prefix: `{*path}` only matches when at least one segment follows it.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(ROOT, get(handlers::info_handler))
        .route(HEALTH, get(handlers::health_handler))
        .route(
            PROXY,
            get(handlers::proxy_root_handler).post(handlers::proxy_root_handler),
        )
        .route(
            PROXY_WILDCARD,
            get(handlers::proxy_handler).post(handlers::proxy_handler),
        )
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
