use std::env;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub internal_secret: String,
    pub vaultn_api_key: String,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let internal_secret = env::var("INTERNAL_SECRET").unwrap_or_default();

        let vaultn_api_key = env::var("VAULTN_API_KEY").unwrap_or_default();

        let service_port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            internal_secret,
            vaultn_api_key,
            service_port,
            service_host,
        })
    }

    /// Whether a bearer credential for the upstream API is configured.
    pub fn has_api_key(&self) -> bool {
        !self.vaultn_api_key.is_empty()
    }

    /// Whether a caller-facing shared secret is configured.
    pub fn has_secret(&self) -> bool {
        !self.internal_secret.is_empty()
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  VaultN API key: {}", if self.has_api_key() { "set" } else { "MISSING" });
        tracing::info!("  Internal secret: {}", if self.has_secret() { "set" } else { "MISSING" });
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);

        // Missing credentials are not fatal: the service still starts, but
        // every proxied request will fail authentication (no secret) or be
        // rejected by the upstream (no API key).
        if !self.has_api_key() {
            tracing::warn!("VAULTN_API_KEY environment variable is not set!");
        }
        if !self.has_secret() {
            tracing::warn!("INTERNAL_SECRET environment variable is not set!");
        }
    }
}
