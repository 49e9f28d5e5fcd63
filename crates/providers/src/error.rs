/// Errors from outbound provider calls.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The HTTP request itself failed (network, DNS, TLS, body decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("{provider} API error ({status}): {body}")]
    Api {
        provider: &'static str,
        status: u16,
        /// Canonical reason phrase for `status`.
        reason: String,
        /// Raw response body for debugging.
        body: String,
    },

    /// The configured endpoint cannot carry a path segment.
    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    /// No API key is configured for the named provider.
    #[error("{0} API key is not configured")]
    MissingApiKey(&'static str),

    /// The completion carried no choices.
    #[error("Completion returned no choices")]
    EmptyCompletion,

    /// The model's JSON output could not be parsed.
    #[error("Failed to parse model output: {0}")]
    Decode(#[from] serde_json::Error),
}
