//! Payloads handed to the external services.

use crate::{AspectRatio, ImagePayload, TargetCount};
use serde::{Deserialize, Serialize};

/// One analysis request: director instructions plus up to two reference images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct AnalysisRequest {
    /// Director instructions, including the script
    instruction: String,
    /// Reference images, style first then character
    images: Vec<ImagePayload>,
    /// Number of scenes the analyzer was asked for
    target_count: TargetCount,
    /// JSON schema of the expected answer
    response_schema: serde_json::Value,
}

impl AnalysisRequest {
    /// Assemble a request.
    pub fn new(
        instruction: impl Into<String>,
        images: Vec<ImagePayload>,
        target_count: TargetCount,
        response_schema: serde_json::Value,
    ) -> Self {
        Self {
            instruction: instruction.into(),
            images,
            target_count,
            response_schema,
        }
    }
}

/// One image-generation request for a single scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ImageRequest {
    /// Frame instructions
    instruction: String,
    /// Output aspect ratio
    aspect_ratio: AspectRatio,
    /// Reference images, style first then character
    images: Vec<ImagePayload>,
}

impl ImageRequest {
    /// Assemble a request.
    pub fn new(
        instruction: impl Into<String>,
        aspect_ratio: AspectRatio,
        images: Vec<ImagePayload>,
    ) -> Self {
        Self {
            instruction: instruction.into(),
            aspect_ratio,
            images,
        }
    }
}
