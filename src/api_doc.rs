use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{HealthResponse, ServiceEndpoints, ServiceInfo};

/// OpenAPI documentation
///
/// Covers the fixed endpoints only. The wildcard relay mirrors whatever
/// the upstream API exposes, so it is described by the service descriptor
/// at `/` rather than enumerated here.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "VaultN Proxy API",
        version = "1.1.0",
        description = "Authenticated forwarding proxy for the VaultN API"
    ),
    paths(
        handlers::health::health_handler,
        handlers::info::info_handler
    ),
    components(
        schemas(
            HealthResponse,
            ServiceInfo,
            ServiceEndpoints,
            ErrorResponse
        )
    ),
    tags(
        (name = "health", description = "Liveness and configuration presence checks"),
        (name = "meta", description = "Service discovery")
    )
)]
pub struct ApiDoc;
