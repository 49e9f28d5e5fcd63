use std::sync::Arc;

use narratix_providers::{CompletionProvider, OpenAiClient, VendorRegistry};
use narratix_store::StoreHandle;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: every field is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// In-memory record store.
    pub store: StoreHandle,
    pub config: Arc<ServerConfig>,
    /// Chat completion backend (OpenAI in production).
    pub completions: Arc<dyn CompletionProvider>,
    /// Creative-AI vendor clients.
    pub vendors: Arc<VendorRegistry>,
}

impl AppState {
    /// Wire the production providers from configuration, sharing one HTTP
    /// connection pool between OpenAI and the vendors.
    pub fn new(store: StoreHandle, config: ServerConfig, http: reqwest::Client) -> Self {
        let openai = OpenAiClient::with_client(
            http.clone(),
            config.ai.openai_base_url.clone(),
            config.ai.openai_api_key.clone(),
            config.ai.openai_model.clone(),
        );
        if !openai.is_configured() {
            tracing::warn!("OPENAI_API_KEY is not set; AI text features will fail");
        }

        let vendors = VendorRegistry::new(http, &config.ai.vendors);
        let configured: Vec<_> = vendors
            .configured()
            .iter()
            .map(|v| v.display_name())
            .collect();
        tracing::info!(vendors = ?configured, "Vendor clients ready");

        Self {
            store,
            config: Arc::new(config),
            completions: Arc::new(openai),
            vendors: Arc::new(vendors),
        }
    }
}
