//! AI service types understood by the orchestration dispatcher.
//!
//! The dispatcher accepts a `type` string and routes the request to the
//! matching service. `avatar` and `video` have no backing integration yet and
//! answer with a placeholder payload.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

pub const SERVICE_TEXT: &str = "text";
pub const SERVICE_SPEECH: &str = "speech";
pub const SERVICE_AVATAR: &str = "avatar";
pub const SERVICE_VIDEO: &str = "video";
pub const SERVICE_OPTIMIZATION: &str = "optimization";

/// All accepted service type names, in documentation order.
pub const VALID_SERVICE_TYPES: &[&str] = &[
    SERVICE_TEXT,
    SERVICE_SPEECH,
    SERVICE_AVATAR,
    SERVICE_VIDEO,
    SERVICE_OPTIMIZATION,
];

/// Message returned by the dispatcher when `type` or `input` is absent.
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields: type and input";

/// Message returned by the dispatcher for an unknown `type`.
pub const INVALID_TYPE_MESSAGE: &str = "Invalid service type";

/// Default voice used by speech synthesis when the caller names none.
pub const DEFAULT_VOICE: &str = "default";

/// Placeholder text returned by the speech service.
pub const SPEECH_PLACEHOLDER_MESSAGE: &str = "Speech synthesis placeholder - Integration pending";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceType {
    Text,
    Speech,
    Avatar,
    Video,
    Optimization,
}

impl ServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => SERVICE_TEXT,
            Self::Speech => SERVICE_SPEECH,
            Self::Avatar => SERVICE_AVATAR,
            Self::Video => SERVICE_VIDEO,
            Self::Optimization => SERVICE_OPTIMIZATION,
        }
    }

    /// Payload message for services without an integration, if any.
    pub fn placeholder_message(&self) -> Option<&'static str> {
        match self {
            Self::Avatar => Some("Avatar generation service placeholder"),
            Self::Video => Some("Video creation service placeholder"),
            _ => None,
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            SERVICE_TEXT => Ok(Self::Text),
            SERVICE_SPEECH => Ok(Self::Speech),
            SERVICE_AVATAR => Ok(Self::Avatar),
            SERVICE_VIDEO => Ok(Self::Video),
            SERVICE_OPTIMIZATION => Ok(Self::Optimization),
            _ => Err(CoreError::Validation(INVALID_TYPE_MESSAGE.to_string())),
        }
    }
}

/// Whether a dispatcher field counts as present.
///
/// Loose truthiness: `null`, `false`, `0` and
/// the empty string are all treated as missing.
pub fn is_present(value: Option<&serde_json::Value>) -> bool {
    match value {
        None | Some(serde_json::Value::Null) => false,
        Some(serde_json::Value::Bool(b)) => *b,
        Some(serde_json::Value::String(s)) => !s.is_empty(),
        Some(serde_json::Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(_) => true,
    }
}
