use std::collections::HashMap;

use narratix_core::prompts::DEFAULT_MODEL;
use narratix_core::vendor::{Vendor, ALL_VENDORS};
use narratix_providers::openai::DEFAULT_BASE_URL;
use narratix_providers::vendor::VendorSettings;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds, also applied to outbound AI calls (default: `60`).
    pub request_timeout_secs: u64,
    /// Seed the built-in template catalog at startup (default: `true`).
    pub seed_templates: bool,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// OpenAI and vendor endpoints and keys.
    pub ai: AiConfig,
}

/// Outbound AI provider configuration.
#[derive(Debug, Clone)]
pub struct AiConfig {
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub vendors: HashMap<Vendor, VendorSettings>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `5000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `60`                       |
    /// | `SEED_TEMPLATES`       | `true`                     |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let seed_templates: bool = std::env::var("SEED_TEMPLATES")
            .unwrap_or_else(|_| "true".into())
            .parse()
            .expect("SEED_TEMPLATES must be true or false");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            seed_templates,
            jwt: JwtConfig::from_env(),
            ai: AiConfig::from_env(),
        }
    }
}

impl AiConfig {
    /// Load provider settings from the environment.
    ///
    /// | Env Var            | Default                      |
    /// |--------------------|------------------------------|
    /// | `OPENAI_API_KEY`   | unset                        |
    /// | `OPENAI_BASE_URL`  | `https://api.openai.com/v1`  |
    /// | `OPENAI_MODEL`     | `gpt-4o`                     |
    ///
    /// Each vendor reads its key (e.g. `RUNWAY_API_KEY`) and an optional
    /// endpoint override (e.g. `RUNWAY_API_URL`). Empty values count as unset.
    pub fn from_env() -> Self {
        let vendors = ALL_VENDORS
            .iter()
            .map(|&vendor| {
                let settings = VendorSettings {
                    endpoint: non_empty_var(vendor.endpoint_env())
                        .unwrap_or_else(|| vendor.default_endpoint().to_string()),
                    api_key: non_empty_var(vendor.api_key_env()),
                };
                (vendor, settings)
            })
            .collect();

        Self {
            openai_api_key: non_empty_var("OPENAI_API_KEY"),
            openai_base_url: non_empty_var("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            openai_model: non_empty_var("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            vendors,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
