use crate::models::HealthResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};

/// GET /health handler - Health check endpoint
///
/// Always reports `ok: true` while the process is up, plus whether the
/// upstream API key and the internal secret are configured. Only presence
/// booleans are exposed, never the values.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        has_api_key: state.config.has_api_key(),
        has_secret: state.config.has_secret(),
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

    fn test_app(internal_secret: &str, api_key: &str) -> axum::Router {
        let config = Config {
            internal_secret: internal_secret.to_string(),
            vaultn_api_key: api_key.to_string(),
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
        };

        let upstream = UpstreamClient::from_config(&config).unwrap();

        routes::app(AppState {
            upstream,
            config: Arc::new(config),
        })
    }

    #[tokio::test]
    async fn test_health_reports_ok_and_configured_credentials() {
        let app = test_app("sekrit", "api-key");

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let health: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert!(health.ok);
        assert!(health.has_api_key);
        assert!(health.has_secret);
        assert!(chrono::DateTime::parse_from_rfc3339(&health.timestamp).is_ok());
    }

    #[tokio::test]
    async fn test_health_flags_missing_credentials() {
        let app = test_app("", "");

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // Missing credentials never fail the health check, only the flags
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let health: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert!(health.ok);
        assert!(!health.has_api_key);
        assert!(!health.has_secret);
    }

    #[tokio::test]
    async fn test_health_body_uses_camel_case_fields() {
        let app = test_app("sekrit", "api-key");

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let raw: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(raw["ok"], serde_json::json!(true));
        assert!(raw.get("hasApiKey").is_some());
        assert!(raw.get("hasSecret").is_some());
    }
}
