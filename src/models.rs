use serde::{Deserialize, Serialize};

/// Response type for the health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub ok: bool,
    pub timestamp: String,
    pub has_api_key: bool,
    pub has_secret: bool,
}

/// Static service descriptor returned at the root path
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub endpoints: ServiceEndpoints,
    pub methods: Vec<String>,
}

/// Exposed paths, by role
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ServiceEndpoints {
    pub health: String,
    pub proxy: String,
}
