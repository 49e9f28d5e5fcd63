//! Body and path extractors with project error shapes.
//!
//! axum's plain `Json` and `Path` reject bad input with a text body.
//! These wrappers turn every body or path problem into a 400 in the caller's
//! error format instead.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use narratix_core::validation::error_details;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::{AppError, ServiceError};

/// Deserialize and [`Validate`] a JSON body. Failures become
/// [`AppError::Validation`] with field details.
///
/// Put it last in the handler's argument list so authentication runs first.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation {
                message: "Invalid request body".into(),
                details: serde_json::Value::String(rejection.body_text()),
            })?;

        value.validate().map_err(|errors| AppError::Validation {
            message: "Validation failed".into(),
            details: error_details(&errors),
        })?;

        Ok(Self(value))
    }
}

/// Deserialize a JSON body for an `/ai` route. Failures become a 400
/// `{ success: false, error }` envelope.
#[derive(Debug, Clone)]
pub struct ServiceJson<T>(pub T);

impl<T, S> FromRequest<S> for ServiceJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ServiceError::bad_request(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Typed path parameters. A segment that fails to parse becomes
/// [`AppError::BadRequest`] so the JSON `{error, code}` shape holds.
#[derive(Debug, Clone)]
pub struct PathParam<T>(pub T);

impl<T, S> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}
