//! REST clients for the creative-AI vendors (Runway, Stability, Omniverse,
//! Metahuman, Maya, Blender).
//!
//! Every vendor takes a JSON body with bearer auth and answers JSON; the
//! request shapes live in [`narratix_core::vendor`].

use std::collections::HashMap;

use narratix_core::vendor::{Vendor, ALL_VENDORS};
use reqwest::Url;
use serde_json::Value;

use crate::error::ProviderError;
use crate::openai::ensure_success;

/// HTTP client for one vendor endpoint.
pub struct VendorClient {
    client: reqwest::Client,
    vendor: Vendor,
    endpoint: String,
    api_key: Option<String>,
}

impl VendorClient {
    pub fn new(
        client: reqwest::Client,
        vendor: Vendor,
        endpoint: String,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client,
            vendor,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST `body` to the vendor endpoint and return its JSON answer.
    pub async fn submit(&self, body: &Value) -> Result<Value, ProviderError> {
        let api_key = self.api_key()?;
        tracing::info!(vendor = %self.vendor, endpoint = %self.endpoint, "Submitting vendor job");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(body)
            .send()
            .await?;

        let response = ensure_success(self.vendor.display_name(), response).await?;
        Ok(response.json::<Value>().await?)
    }

    /// GET `{endpoint}/{job_id}` (job status polling).
    pub async fn job_status(&self, job_id: &str) -> Result<Value, ProviderError> {
        let api_key = self.api_key()?;
        let url = self.job_url(job_id)?;

        let response = self
            .client
            .get(url)
            .bearer_auth(api_key)
            .send()
            .await?;

        let response = ensure_success(self.vendor.display_name(), response).await?;
        Ok(response.json::<Value>().await?)
    }

    /// `job_id` becomes exactly one percent-encoded path segment.
    fn job_url(&self, job_id: &str) -> Result<Url, ProviderError> {
        let mut url = Url::parse(&self.endpoint)
            .map_err(|e| ProviderError::InvalidEndpoint(format!("{}: {e}", self.endpoint)))?;
        url.path_segments_mut()
            .map_err(|()| ProviderError::InvalidEndpoint(self.endpoint.clone()))?
            .pop_if_empty()
            .push(job_id);
        Ok(url)
    }

    fn api_key(&self) -> Result<&str, ProviderError> {
        self.api_key
            .as_deref()
            .ok_or(ProviderError::MissingApiKey(self.vendor.display_name()))
    }
}

/// Endpoint and key for one vendor, as loaded from configuration.
#[derive(Debug, Clone)]
pub struct VendorSettings {
    pub endpoint: String,
    pub api_key: Option<String>,
}

/// One client per vendor, sharing a connection pool.
pub struct VendorRegistry {
    clients: HashMap<Vendor, VendorClient>,
}

impl VendorRegistry {
    /// Build clients for every vendor. Vendors absent from `settings` use
    /// their default endpoint and no key.
    pub fn new(client: reqwest::Client, settings: &HashMap<Vendor, VendorSettings>) -> Self {
        let clients = ALL_VENDORS
            .iter()
            .map(|&vendor| {
                let (endpoint, api_key) = match settings.get(&vendor) {
                    Some(s) => (s.endpoint.clone(), s.api_key.clone()),
                    None => (vendor.default_endpoint().to_string(), None),
                };
                (vendor, VendorClient::new(client.clone(), vendor, endpoint, api_key))
            })
            .collect();
        Self { clients }
    }

    pub fn get(&self, vendor: Vendor) -> &VendorClient {
        // Every vendor is inserted in `new`.
        &self.clients[&vendor]
    }

    /// Vendors that have an API key configured.
    pub fn configured(&self) -> Vec<Vendor> {
        ALL_VENDORS
            .iter()
            .copied()
            .filter(|v| self.clients[v].api_key.is_some())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    fn client_for(server: &MockServer, vendor: Vendor, key: Option<&str>) -> VendorClient {
        VendorClient::new(
            reqwest::Client::new(),
            vendor,
            server.url("/v1/render"),
            key.map(str::to_string),
        )
    }

    #[tokio::test]
    async fn submit_relays_json() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1/render")
                    .header("authorization", "Bearer bl-key")
                    .json_body(json!({ "scene_data": "s" }));
                then.status(200).json_body(json!({ "job": "42" }));
            })
            .await;

        let client = client_for(&server, Vendor::Blender, Some("bl-key"));
        let result = client.submit(&json!({ "scene_data": "s" })).await.unwrap();

        mock.assert_async().await;
        assert_eq!(result["job"], "42");
    }

    #[tokio::test]
    async fn upstream_failure_keeps_reason() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/render");
                then.status(503).body("maintenance");
            })
            .await;

        let client = client_for(&server, Vendor::Maya, Some("k"));
        let result = client.submit(&json!({})).await;
        assert_matches!(
            result,
            Err(ProviderError::Api { status: 503, ref reason, .. }) if reason == "Service Unavailable"
        );
    }

    #[tokio::test]
    async fn job_status_appends_id() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/render/job-7");
                then.status(200).json_body(json!({ "status": "RUNNING" }));
            })
            .await;

        let client = client_for(&server, Vendor::Runway, Some("rw"));
        let status = client.job_status("job-7").await.unwrap();

        mock.assert_async().await;
        assert_eq!(status["status"], "RUNNING");
    }

    #[test]
    fn job_id_is_a_single_encoded_segment() {
        let client = VendorClient::new(
            reqwest::Client::new(),
            Vendor::Runway,
            "http://localhost:9/v1/render/".into(),
            Some("rw".into()),
        );
        let url = client.job_url("a/b?x#y").unwrap();

        assert_eq!(url.as_str(), "http://localhost:9/v1/render/a%2Fb%3Fx%23y");
        assert_eq!(url.query(), None);
        assert_eq!(url.path_segments().unwrap().count(), 3);
    }

    #[tokio::test]
    async fn job_status_rejects_unparseable_endpoint() {
        let client = VendorClient::new(
            reqwest::Client::new(),
            Vendor::Runway,
            "not a url".into(),
            Some("rw".into()),
        );
        assert_matches!(
            client.job_status("job-7").await,
            Err(ProviderError::InvalidEndpoint(_))
        );
    }

    #[tokio::test]
    async fn missing_key_short_circuits() {
        let client = VendorClient::new(
            reqwest::Client::new(),
            Vendor::Metahuman,
            Vendor::Metahuman.default_endpoint().into(),
            None,
        );
        assert_matches!(
            client.submit(&json!({})).await,
            Err(ProviderError::MissingApiKey("Metahuman"))
        );
    }

    #[test]
    fn registry_covers_every_vendor() {
        let mut settings = HashMap::new();
        settings.insert(
            Vendor::Runway,
            VendorSettings {
                endpoint: "http://localhost:9/runway".into(),
                api_key: Some("rw".into()),
            },
        );
        let registry = VendorRegistry::new(reqwest::Client::new(), &settings);

        assert_eq!(registry.get(Vendor::Runway).endpoint(), "http://localhost:9/runway");
        assert_eq!(
            registry.get(Vendor::Blender).endpoint(),
            Vendor::Blender.default_endpoint()
        );
        assert_eq!(registry.configured(), vec![Vendor::Runway]);
    }
}
