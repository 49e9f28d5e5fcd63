//! Prompt text and sampling parameters for every OpenAI call the backend makes.

/// Chat model used unless `OPENAI_MODEL` overrides it.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Returned as script content when the model answers with no text.
pub const EMPTY_SCRIPT_FALLBACK: &str = "Failed to generate script";

pub const SCRIPT_TEMPERATURE: f32 = 0.7;
pub const SCRIPT_MAX_TOKENS: u32 = 500;
pub const OPTIMIZATION_TEMPERATURE: f32 = 0.3;
pub const VARIATIONS_TEMPERATURE: f32 = 0.5;
pub const AUDIENCE_TEMPERATURE: f32 = 0.4;

/// System prompt for the site's help chat.
pub const CHAT_SYSTEM_PROMPT: &str = "You are an AI assistant for NarratixAI, an advanced AI-powered ad creation platform.
You help users understand our features:
- AI Script Generation
- Next-Gen CGI Video Creation
- Neural Avatars
- Real-time Ad Optimization
- Performance Analytics
Be concise, professional, and focus on helping users understand how our platform can help their advertising needs.";

pub const COPYWRITER_SYSTEM_PROMPT: &str =
    "You are an expert advertising copywriter specialized in creating persuasive, engaging ad scripts.";

pub const ANALYST_SYSTEM_PROMPT: &str =
    "You are an AI advertising analyst specialized in evaluating ad effectiveness.";

pub const OPTIMIZATION_SYSTEM_PROMPT: &str = "Analyze this ad content and provide optimization suggestions. Return a JSON object with:
- Target audience identification
- Engagement score and improvement suggestions
- Tone analysis and recommendations
Format the response as valid JSON.";

pub const VARIATIONS_SYSTEM_PROMPT: &str = "Create platform-specific variations of this ad script. Adapt the content for each platform while maintaining the core message. Return a JSON object with platform names as keys and adapted scripts as values.";

pub const AUDIENCE_SYSTEM_PROMPT: &str = "Analyze the target audience data and provide actionable insights. Return a JSON object with:
- Audience segments
- Content preferences
- Engagement patterns
- Platform recommendations";

/// System prompt for project script generation, parameterised by tone and audience.
pub fn script_system_prompt(tone: &str, audience: &str) -> String {
    format!(
        "You are an expert advertising copywriter. Create a persuasive ad script with the following characteristics:
- Tone: {tone}
- Target Audience: {audience}
- Format: Return only the script content, no additional formatting or metadata
- Length: 2-3 short paragraphs
- Style: Engaging, memorable, and aligned with modern advertising best practices"
    )
}

/// Inputs for a structured ad script (script, suggestions, tone analysis).
#[derive(Debug, Clone)]
pub struct AdScriptBrief<'a> {
    pub industry: &'a str,
    pub tone: &'a str,
    pub target_audience: &'a str,
    pub key_points: &'a [String],
    pub duration_secs: u32,
}

pub fn ad_script_user_prompt(brief: &AdScriptBrief<'_>) -> String {
    format!(
        "Create an ad script with the following parameters:
- Industry: {}
- Tone: {}
- Target Audience: {}
- Key Points: {}
- Duration: {} seconds

Provide the response in JSON format with:
- script: the complete ad script
- suggestions: array of improvement suggestions
- tone_analysis: object with persuasiveness, clarity, and engagement scores (0-1)",
        brief.industry,
        brief.tone,
        brief.target_audience,
        brief.key_points.join(", "),
        brief.duration_secs,
    )
}

pub fn performance_user_prompt(script: &str) -> String {
    format!(
        "Analyze this ad script for effectiveness and provide suggestions for improvement:\n\n{script}\n\nRespond in JSON format with performance_score (0-1) and improvement_suggestions array."
    )
}

pub fn variations_user_prompt(base_script: &str, platforms: &[String]) -> String {
    format!(
        "Base script: {base_script}\nPlatforms: {}",
        platforms.join(", ")
    )
}

pub fn audience_user_prompt(demographics: &str, behavior: &str) -> String {
    format!("Demographics: {demographics}\nBehavior patterns: {behavior}")
}
