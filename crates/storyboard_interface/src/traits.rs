//! Service traits.

use async_trait::async_trait;
use storyboard_core::{AnalysisRequest, AnalysisResult, ImagePayload, ImageRequest};
use storyboard_error::StoryboardResult;

/// Turns a script plus director instructions into structured scene data.
///
/// One call per run, no internal retry.
#[async_trait]
pub trait Analyzer: Send + Sync {
    /// Analyze the script and return the scene list with shared artifacts.
    ///
    /// # Errors
    ///
    /// Any failure, including an unparsable or schema-invalid answer, is an
    /// analysis error and aborts the run.
    async fn analyze(&self, request: &AnalysisRequest) -> StoryboardResult<AnalysisResult>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier.
    fn model_name(&self) -> &str;
}

/// Renders one storyboard frame.
#[async_trait]
pub trait Imager: Send + Sync {
    /// Render the frame described by `request`.
    ///
    /// # Errors
    ///
    /// Returns an image error on transport failure and when the service answers
    /// without any image data.
    async fn render(&self, request: &ImageRequest) -> StoryboardResult<ImagePayload>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier.
    fn model_name(&self) -> &str;
}
