use crate::auth::{self, INTERNAL_SECRET_HEADER};
use crate::error::ApiError;
use crate::state::AppState;
use crate::upstream::RelayBody;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, Method},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use uuid::Uuid;

/// GET/POST /vaultn-proxy/{*path} handler - the forwarding relay
///
/// Authenticates the shared-secret header, rebuilds the URL against the
/// upstream API host, forwards the request with the injected bearer
/// credential, and mirrors the upstream response back to the caller.
pub async fn proxy_handler(
    State(state): State<AppState>,
    method: Method,
    Path(path): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Option<Json<JsonValue>>,
) -> Result<Response, ApiError> {
    relay(state, method, path, params, headers, body).await
}

/// GET/POST /vaultn-proxy handler - same relay with an empty path suffix,
/// forwarding to the upstream host's root
pub async fn proxy_root_handler(
    State(state): State<AppState>,
    method: Method,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Option<Json<JsonValue>>,
) -> Result<Response, ApiError> {
    relay(state, method, String::new(), params, headers, body).await
}

async fn relay(
    state: AppState,
    method: Method,
    path_suffix: String,
    params: HashMap<String, String>,
    headers: HeaderMap,
    body: Option<Json<JsonValue>>,
) -> Result<Response, ApiError> {
    // Step 1: authenticate before anything else. No upstream call happens
    // for a rejected request.
    let provided = headers
        .get(INTERNAL_SECRET_HEADER)
        .and_then(|value| value.to_str().ok());
    if !auth::secret_matches(&state.config.internal_secret, provided) {
        tracing::warn!("Rejected proxied request: missing or invalid shared secret");
        return Err(ApiError::Unauthorized);
    }

    let request_id = Uuid::new_v4();

    // A body only travels on POST; GET requests never carry one.
    let body = match method {
        Method::POST => body.map(|Json(value)| value),
        _ => None,
    };

    let url = state.upstream.build_url(&path_suffix, &params)?;
    tracing::info!(
        request_id = %request_id,
        "[Proxy] {} {}{}",
        method,
        url.path(),
        url.query().map(|q| format!("?{q}")).unwrap_or_default()
    );

    let reply = state.upstream.forward(method, url, body.as_ref()).await?;

    tracing::info!(
        request_id = %request_id,
        status = %reply.status,
        "[Proxy] upstream responded"
    );

    // Mirror the upstream status; JSON bodies relay as JSON, anything
    // else as raw text.
    Ok(match reply.body {
        RelayBody::Parsed(value) => (reply.status, Json(value)).into_response(),
        RelayBody::Raw(text) => (reply.status, text).into_response(),
    })
}
