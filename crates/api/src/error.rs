use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use narratix_core::error::CoreError;
use narratix_providers::ProviderError;
use narratix_store::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds store, provider and
/// HTTP-specific variants. Renders `{ "error", "code", "details"? }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// An outbound AI call failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Request body failed to parse or validate; `details` names the fields.
    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        details: serde_json::Value,
    },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut details = None;
        let (status, code, message) = match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg),
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg),
                CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg),
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },

            AppError::Store(StoreError::Conflict(msg)) => (StatusCode::CONFLICT, "CONFLICT", msg),

            AppError::Provider(err) => classify_provider_error(&err),

            AppError::Validation {
                message,
                details: d,
            } => {
                details = Some(d);
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message)
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(details) = details {
            body["details"] = details;
        }

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Map a provider failure to an HTTP status, error code, and message.
///
/// Upstream 429, 401 and 500 are passed through with a user-facing message;
/// everything else becomes a 500.
pub fn classify_provider_error(err: &ProviderError) -> (StatusCode, &'static str, String) {
    match err {
        ProviderError::Api {
            provider,
            status: 429,
            ..
        } => (
            StatusCode::TOO_MANY_REQUESTS,
            "RATE_LIMITED",
            format!("{provider} API rate limit exceeded. Please try again in a few minutes."),
        ),
        ProviderError::Api {
            provider,
            status: 401,
            ..
        } => (
            StatusCode::UNAUTHORIZED,
            "UPSTREAM_UNAUTHORIZED",
            format!("Invalid {provider} API key. Please check your API key configuration."),
        ),
        ProviderError::Api {
            provider,
            status: 500,
            ..
        } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "UPSTREAM_ERROR",
            format!("{provider} service is currently experiencing issues. Please try again later."),
        ),
        ProviderError::MissingApiKey(provider) => {
            tracing::error!(provider, "Provider API key missing");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "PROVIDER_NOT_CONFIGURED",
                err.to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Provider call failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "UPSTREAM_ERROR",
                "The AI provider request failed".to_string(),
            )
        }
    }
}

/// Error for the `{ success, data | error }` envelope used by `/ai` routes.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ServiceError {
    pub status: StatusCode,
    pub message: String,
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    /// Provider failure with OpenAI statuses passed through, as
    /// [`classify_provider_error`] does for [`AppError`].
    pub fn upstream(err: ProviderError) -> Self {
        let (status, _, message) = classify_provider_error(&err);
        Self { status, message }
    }
}

impl From<ProviderError> for ServiceError {
    fn from(err: ProviderError) -> Self {
        tracing::error!(error = %err, "AI service call failed");
        Self::internal(err.to_string())
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let body = json!({
            "success": false,
            "error": self.message,
        });
        (self.status, axum::Json(body)).into_response()
    }
}
