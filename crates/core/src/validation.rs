//! Field validators used by request DTOs, plus error-detail rendering.

use std::borrow::Cow;

use serde_json::{Map, Value};
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

pub const MIN_USERNAME_LEN: u64 = 3;
pub const MAX_USERNAME_LEN: u64 = 64;
pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_PROJECT_NAME_LEN: u64 = 200;

/// Reject strings that are empty once surrounding whitespace is removed.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::Borrowed("must not be blank"));
        return Err(err);
    }
    Ok(())
}

/// Reject usernames containing anything but ASCII letters, digits, `_`, `-` and `.`.
pub fn username_charset(value: &str) -> Result<(), ValidationError> {
    let ok = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if !ok {
        let mut err = ValidationError::new("charset");
        err.message = Some(Cow::Borrowed(
            "may only contain letters, digits, '_', '-' and '.'",
        ));
        return Err(err);
    }
    Ok(())
}

/// Flatten validator errors into `{ field: [message, ...] }`.
pub fn error_details(errors: &ValidationErrors) -> Value {
    let mut out = Map::new();
    for (field, kind) in errors.errors() {
        let messages: Vec<Value> = match kind {
            ValidationErrorsKind::Field(errs) => errs
                .iter()
                .map(|e| {
                    let msg = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    Value::String(msg)
                })
                .collect(),
            ValidationErrorsKind::Struct(_) | ValidationErrorsKind::List(_) => {
                vec![Value::String("invalid".into())]
            }
        };
        out.insert(field.to_string(), Value::Array(messages));
    }
    Value::Object(out)
}
