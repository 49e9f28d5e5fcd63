//! Built-in ad template catalog seeded into the store at startup.

use serde_json::{json, Value};

/// A template definition before it receives a store id.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSeed {
    pub name: &'static str,
    pub description: &'static str,
    pub thumbnail_url: &'static str,
    pub settings: Value,
}

/// The catalog shown in the video editor's template picker.
pub fn builtin_templates() -> Vec<TemplateSeed> {
    vec![
        TemplateSeed {
            name: "Product Showcase",
            description: "Hero shots and feature callouts for a single product.",
            thumbnail_url: "/templates/product-showcase.jpg",
            settings: json!({ "aspectRatio": "16:9", "durationSecs": 30, "scenes": 5 }),
        },
        TemplateSeed {
            name: "Customer Testimonial",
            description: "Avatar-led testimonial with quote overlays.",
            thumbnail_url: "/templates/testimonial.jpg",
            settings: json!({ "aspectRatio": "16:9", "durationSecs": 45, "scenes": 3 }),
        },
        TemplateSeed {
            name: "Social Story",
            description: "Vertical short-form story for TikTok, Reels and Shorts.",
            thumbnail_url: "/templates/social-story.jpg",
            settings: json!({ "aspectRatio": "9:16", "durationSecs": 15, "scenes": 4 }),
        },
        TemplateSeed {
            name: "Explainer",
            description: "Narrated walkthrough that breaks a service into simple steps.",
            thumbnail_url: "/templates/explainer.jpg",
            settings: json!({ "aspectRatio": "16:9", "durationSecs": 60, "scenes": 6 }),
        },
    ]
}
