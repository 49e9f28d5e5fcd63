//! Speech synthesis.
//!
//! No synthesis vendor is wired in yet; the service echoes its inputs with a
//! placeholder message so the client flow can be exercised end to end.

use narratix_core::service::{DEFAULT_VOICE, SPEECH_PLACEHOLDER_MESSAGE};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeechResult {
    pub message: &'static str,
    pub text: Value,
    pub voice: String,
}

/// Synthesize `text` with `voice` (defaulting to [`DEFAULT_VOICE`]).
pub fn synthesize(text: Value, voice: Option<&str>) -> SpeechResult {
    SpeechResult {
        message: SPEECH_PLACEHOLDER_MESSAGE,
        text,
        voice: voice.unwrap_or(DEFAULT_VOICE).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn voice_defaults() {
        let result = synthesize(json!("Hello"), None);
        assert_eq!(result.voice, "default");
        assert_eq!(result.text, "Hello");
    }

    #[test]
    fn explicit_voice_is_kept() {
        assert_eq!(synthesize(json!("Hi"), Some("alloy")).voice, "alloy");
    }
}
