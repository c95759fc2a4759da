//! Shared Gemini REST transport.

use super::GeminiResult;
use super::dto::{GenerateContentRequest, GenerateContentResponse};
use reqwest::Client;
use std::sync::Arc;
use storyboard_error::{GeminiError, GeminiErrorKind, StoryboardResult};
use storyboard_rate_limit::StoryboardSettings;
use tracing::{debug, instrument};

/// Gemini REST client: HTTP connection pool, API key and base URL.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: Arc<str>,
    base_url: Arc<str>,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client reading the API key from the configured environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is unset or the HTTP client cannot be built.
    #[instrument(name = "gemini_client_new", skip_all)]
    pub fn from_settings(settings: &StoryboardSettings) -> StoryboardResult<Self> {
        let env_name = settings.gemini.api_key_env();
        let api_key = std::env::var(env_name)
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey(env_name.clone())))?;
        Self::with_api_key(api_key, settings)
    }

    /// Create a client with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_api_key(
        api_key: impl Into<String>,
        settings: &StoryboardSettings,
    ) -> StoryboardResult<Self> {
        let mut builder = Client::builder().gzip(true);
        if let Some(timeout) = settings.gemini.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        Ok(Self {
            http,
            api_key: Arc::from(api_key.into()),
            base_url: Arc::from(settings.gemini.base_url().trim_end_matches('/')),
        })
    }

    /// POST `models/{model}:generateContent`.
    #[instrument(skip(self, body), fields(model = %model))]
    pub(crate) async fn generate_content(
        &self,
        model: &str,
        body: &GenerateContentRequest,
    ) -> GeminiResult<GenerateContentResponse> {
        let model = model.strip_prefix("models/").unwrap_or(model);
        let url = format!("{}/models/{}:generateContent", self.base_url, model);
        debug!(url = %url, "Sending Gemini request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", self.api_key.as_ref())
            .json(body)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            }));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::InvalidResponse(e.to_string())))?;

        debug!(candidates = parsed.candidates().len(), "Gemini response received");
        Ok(parsed)
    }
}
