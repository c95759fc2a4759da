//! Script analysis backed by a Gemini text model.

use super::{GeminiClient, conversion};
use crate::{extract_json, parse_json};
use async_trait::async_trait;
use storyboard_core::{AnalysisRequest, AnalysisResult};
use storyboard_error::{AnalysisError, AnalysisErrorKind, StoryboardResult};
use storyboard_interface::Analyzer;
use storyboard_rate_limit::{RateLimiter, StoryboardSettings, TierConfig};
use tracing::{debug, instrument};

/// [`Analyzer`] using Gemini structured output.
#[derive(Clone)]
pub struct GeminiAnalyzer {
    client: GeminiClient,
    model: String,
    limiter: RateLimiter<TierConfig>,
}

impl std::fmt::Debug for GeminiAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiAnalyzer")
            .field("model", &self.model)
            .field("tier", &self.limiter.inner().name)
            .finish_non_exhaustive()
    }
}

impl GeminiAnalyzer {
    /// Analyzer for the configured analyzer model; `tier` overrides the default tier.
    pub fn new(client: GeminiClient, settings: &StoryboardSettings, tier: Option<&str>) -> Self {
        let model = settings.gemini.analyzer_model().clone();
        let limiter = RateLimiter::new(settings.tier_for_model("gemini", tier, &model));
        Self {
            client,
            model,
            limiter,
        }
    }
}

#[async_trait]
impl Analyzer for GeminiAnalyzer {
    #[instrument(skip(self, request), fields(model = %self.model, target_count = request.target_count().get(), images = request.images().len()))]
    async fn analyze(&self, request: &AnalysisRequest) -> StoryboardResult<AnalysisResult> {
        let body = conversion::analysis_body(request);

        let response = self
            .limiter
            .execute(|| self.client.generate_content(&self.model, &body))
            .await
            .map_err(|e| AnalysisError::new(AnalysisErrorKind::Request(e.kind.to_string())))?;

        let text = conversion::response_text(&response)
            .map_err(|e| AnalysisError::new(AnalysisErrorKind::Request(e.kind.to_string())))?;

        let json = extract_json(&text)?;
        let result: AnalysisResult = parse_json(&json)?;

        debug!(scenes = result.scenes.len(), "Analysis parsed");
        Ok(result)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
