//! Gemini `generateContent` data transfer objects.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Inline binary payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type of the data
    mime_type: String,
    /// Base64 encoded bytes
    data: String,
}

impl InlineData {
    /// Creates inline data.
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }
}

/// One content part: text or inline data.
///
/// Unknown part kinds in responses (e.g. thought signatures) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Text content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    /// Inline binary content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
    /// Marks model reasoning parts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    thought: Option<bool>,
}

impl Part {
    /// Text part.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Inline data part.
    pub fn from_inline(data: InlineData) -> Self {
        Self {
            inline_data: Some(data),
            ..Default::default()
        }
    }

    /// True for model reasoning parts that are not part of the answer.
    pub fn is_thought(&self) -> bool {
        self.thought.unwrap_or(false)
    }
}

/// A turn of content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Content {
    /// Author role ("user" or "model")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    /// Ordered parts
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    /// User turn with the given parts.
    pub fn user(parts: Vec<Part>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts,
        }
    }
}

/// Image output options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    /// Aspect ratio such as "9:16"
    aspect_ratio: String,
}

impl ImageConfig {
    /// Creates image options.
    pub fn new(aspect_ratio: impl Into<String>) -> Self {
        Self {
            aspect_ratio: aspect_ratio.into(),
        }
    }
}

/// Generation options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Response MIME type, e.g. "application/json"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    /// Structured output schema
    #[serde(default, skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
    /// Requested output modalities
    #[serde(default, skip_serializing_if = "Option::is_none")]
    response_modalities: Option<Vec<String>>,
    /// Image output options
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_config: Option<ImageConfig>,
}

impl GenerationConfig {
    /// Structured JSON output following `schema`.
    pub fn json(schema: serde_json::Value) -> Self {
        Self {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(schema),
            ..Default::default()
        }
    }

    /// Image output with the given aspect ratio.
    pub fn image(aspect_ratio: impl Into<String>) -> Self {
        Self {
            response_modalities: Some(vec!["IMAGE".to_string()]),
            image_config: Some(ImageConfig::new(aspect_ratio)),
            ..Default::default()
        }
    }
}

/// Request body of `models/{model}:generateContent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation contents
    contents: Vec<Content>,
    /// Generation options
    #[serde(default, skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Single user turn with options.
    pub fn new(parts: Vec<Part>, generation_config: GenerationConfig) -> Self {
        Self {
            contents: vec![Content::user(parts)],
            generation_config: Some(generation_config),
        }
    }
}

/// Prompt-level safety feedback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Why the prompt was blocked, if it was
    #[serde(default)]
    block_reason: Option<String>,
}

/// One response candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content
    #[serde(default)]
    content: Option<Content>,
    /// Finish reason ("STOP", "SAFETY", ...)
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Response body of `generateContent`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidates, usually one
    #[serde(default)]
    candidates: Vec<Candidate>,
    /// Prompt feedback
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}
