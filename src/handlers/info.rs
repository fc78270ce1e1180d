use crate::models::{ServiceEndpoints, ServiceInfo};
use crate::routes;
use axum::Json;

/// GET / handler - Static service descriptor
///
/// Names the service, its version, and the exposed paths and methods so a
/// caller can discover the proxy surface without documentation.
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Service descriptor", body = ServiceInfo)
    ),
    tag = "meta"
)]
pub async fn info_handler() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: "VaultN Proxy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: ServiceEndpoints {
            health: routes::HEALTH.to_string(),
            proxy: "/vaultn-proxy/*".to_string(),
        },
        methods: vec!["GET".to_string(), "POST".to_string()],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::routes;
    use crate::state::AppState;
    use crate::upstream::UpstreamClient;
    use axum::{body::Body, http::Request, http::StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_root_returns_service_descriptor() {
        let config = Config {
            internal_secret: "sekrit".to_string(),
            vaultn_api_key: "api-key".to_string(),
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
        };
        let upstream = UpstreamClient::from_config(&config).unwrap();
        let app = routes::app(AppState {
            upstream,
            config: Arc::new(config),
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let info: ServiceInfo = serde_json::from_slice(&body).unwrap();
        assert_eq!(info.service, "VaultN Proxy");
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(info.endpoints.health, "/health");
        assert_eq!(info.endpoints.proxy, "/vaultn-proxy/*");
        assert_eq!(info.methods, vec!["GET", "POST"]);
    }
}
