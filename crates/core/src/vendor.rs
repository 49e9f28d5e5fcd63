//! Creative-AI vendors proxied under `/api/ai/3d/*` and the request bodies sent to them.
//!
//! Each vendor has a fixed upstream endpoint, an API key variable and a body
//! shape. Option defaults apply when the caller's value is missing or falsy.

use std::fmt;

use serde_json::{json, Map, Value};

use crate::service::is_present;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vendor {
    Runway,
    StableDiffusion,
    Omniverse,
    Metahuman,
    Maya,
    Blender,
}

/// Every vendor, in route order.
pub const ALL_VENDORS: [Vendor; 6] = [
    Vendor::Runway,
    Vendor::StableDiffusion,
    Vendor::Omniverse,
    Vendor::Metahuman,
    Vendor::Maya,
    Vendor::Blender,
];

impl Vendor {
    /// Human-readable name used in error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Runway => "Runway ML",
            Self::StableDiffusion => "Stable Diffusion",
            Self::Omniverse => "NVIDIA Omniverse",
            Self::Metahuman => "Metahuman",
            Self::Maya => "Maya",
            Self::Blender => "Blender",
        }
    }

    /// Short name used in upstream error messages ("Omniverse API error").
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Omniverse => "Omniverse",
            other => other.display_name(),
        }
    }

    /// Environment variable holding the vendor's API key.
    pub fn api_key_env(&self) -> &'static str {
        match self {
            Self::Runway => "RUNWAY_API_KEY",
            Self::StableDiffusion => "STABLE_DIFFUSION_API_KEY",
            Self::Omniverse => "OMNIVERSE_API_KEY",
            Self::Metahuman => "METAHUMAN_API_KEY",
            Self::Maya => "MAYA_API_KEY",
            Self::Blender => "BLENDER_API_KEY",
        }
    }

    /// Environment variable that overrides the upstream endpoint.
    pub fn endpoint_env(&self) -> &'static str {
        match self {
            Self::Runway => "RUNWAY_API_URL",
            Self::StableDiffusion => "STABLE_DIFFUSION_API_URL",
            Self::Omniverse => "OMNIVERSE_API_URL",
            Self::Metahuman => "METAHUMAN_API_URL",
            Self::Maya => "MAYA_API_URL",
            Self::Blender => "BLENDER_API_URL",
        }
    }

    /// Upstream endpoint the job/render request is POSTed to.
    pub fn default_endpoint(&self) -> &'static str {
        match self {
            Self::Runway => "https://api.runwayml.com/v1/inference",
            Self::StableDiffusion => {
                "https://api.stability.ai/v1/generation/stable-diffusion-xl-1024-v1-0/text-to-image"
            }
            Self::Omniverse => "https://api.omniverse.nvidia.com/v1/render",
            Self::Metahuman => "https://api.metahuman.unrealengine.com/v1/create",
            Self::Maya => "https://api.autodesk.maya/v1/render",
            Self::Blender => "https://api.blender.org/v1/render",
        }
    }

    /// Message for a request made while the API key is unset.
    pub fn missing_key_message(&self) -> String {
        format!("{} API key is not configured", self.display_name())
    }

    /// Message for a non-2xx upstream answer.
    pub fn api_error_message(&self, reason: &str) -> String {
        format!("{} API error: {reason}", self.short_name())
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Read `options[key]`, falling back to `default` when missing or falsy.
pub fn option_or(options: &Value, key: &str, default: Value) -> Value {
    let value = options.get(key);
    if is_present(value) {
        value.cloned().unwrap_or(default)
    } else {
        default
    }
}

fn default_resolution() -> Value {
    json!({ "width": 1920, "height": 1080 })
}

/// Runway text-to-video inference body.
///
/// Every caller option is forwarded inside `parameters`; `num_frames` and
/// `fps` are always present.
pub fn runway_body(prompt: &Value, options: &Value) -> Value {
    let mut parameters = match options {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };
    parameters.insert("num_frames".into(), option_or(options, "num_frames", json!(30)));
    parameters.insert("fps".into(), option_or(options, "fps", json!(24)));

    json!({
        "prompt": prompt,
        "model": option_or(options, "model", json!("text-to-video")),
        "parameters": parameters,
    })
}

pub fn stable_diffusion_body(prompt: &Value, options: &Value) -> Value {
    json!({
        "text_prompts": [{ "text": prompt }],
        "cfg_scale": option_or(options, "cfg_scale", json!(7)),
        "height": option_or(options, "height", json!(1024)),
        "width": option_or(options, "width", json!(1024)),
        "steps": option_or(options, "steps", json!(50)),
        "samples": option_or(options, "samples", json!(1)),
    })
}

pub fn omniverse_body(scene: &Value, options: &Value) -> Value {
    json!({
        "scene_data": scene,
        "render_quality": option_or(options, "quality", json!("high")),
        "output_format": option_or(options, "format", json!("png")),
        "resolution": option_or(options, "resolution", default_resolution()),
    })
}

/// Metahuman character body. `parameters` must be a JSON object.
pub fn metahuman_body(parameters: &Value, options: &Value) -> Value {
    let field = |key: &str| parameters.get(key).cloned().unwrap_or(Value::Null);
    json!({
        "facial_features": field("facial_features"),
        "body_type": field("body_type"),
        "animations": field("animations"),
        "output_format": option_or(options, "format", json!("fbx")),
    })
}

pub fn maya_body(scene: &Value, options: &Value) -> Value {
    json!({
        "scene_data": scene,
        "render_settings": {
            "quality": option_or(options, "quality", json!("production")),
            "frame_range": option_or(options, "frame_range", json!({ "start": 1, "end": 1 })),
            "resolution": option_or(options, "resolution", default_resolution()),
        },
    })
}

pub fn blender_body(scene: &Value, options: &Value) -> Value {
    json!({
        "scene_data": scene,
        "render_engine": option_or(options, "engine", json!("cycles")),
        "samples": option_or(options, "samples", json!(128)),
        "resolution": option_or(options, "resolution", default_resolution()),
    })
}
