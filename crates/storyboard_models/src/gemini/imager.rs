//! Frame rendering backed by a Gemini image model.

use super::{GeminiClient, conversion};
use async_trait::async_trait;
use storyboard_core::{ImagePayload, ImageRequest};
use storyboard_error::{ImageError, ImageErrorKind, StoryboardResult};
use storyboard_interface::Imager;
use storyboard_rate_limit::{RateLimiter, StoryboardSettings, TierConfig};
use tracing::{debug, instrument};

/// [`Imager`] using a Gemini image model.
#[derive(Clone)]
pub struct GeminiImager {
    client: GeminiClient,
    model: String,
    limiter: RateLimiter<TierConfig>,
}

impl std::fmt::Debug for GeminiImager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiImager")
            .field("model", &self.model)
            .field("tier", &self.limiter.inner().name)
            .finish_non_exhaustive()
    }
}

impl GeminiImager {
    /// Imager for the configured image model; `tier` overrides the default tier.
    pub fn new(client: GeminiClient, settings: &StoryboardSettings, tier: Option<&str>) -> Self {
        let model = settings.gemini.imager_model().clone();
        let limiter = RateLimiter::new(settings.tier_for_model("gemini", tier, &model));
        Self {
            client,
            model,
            limiter,
        }
    }
}

#[async_trait]
impl Imager for GeminiImager {
    #[instrument(skip(self, request), fields(model = %self.model, aspect_ratio = %request.aspect_ratio(), images = request.images().len()))]
    async fn render(&self, request: &ImageRequest) -> StoryboardResult<ImagePayload> {
        let body = conversion::image_body(request);

        let response = self
            .limiter
            .execute(|| self.client.generate_content(&self.model, &body))
            .await
            .map_err(|e| ImageError::new(ImageErrorKind::Request(e.kind.to_string())))?;

        // A successful call without image data is still a failure
        let inline = conversion::response_image(&response)
            .map_err(|e| ImageError::new(ImageErrorKind::Request(e.kind.to_string())))?
            .ok_or_else(|| ImageError::new(ImageErrorKind::NoImageReturned))?;

        let payload = ImagePayload::from_base64(inline.mime_type(), inline.data())
            .map_err(|e| ImageError::new(ImageErrorKind::Decode(e.to_string())))?;

        debug!(mime = payload.mime(), "Frame rendered");
        Ok(payload)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
