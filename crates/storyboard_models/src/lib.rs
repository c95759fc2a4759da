//! Gemini backends for the storyboard pipeline.
//!
//! [`GeminiAnalyzer`] implements [`Analyzer`](storyboard_interface::Analyzer) with a
//! structured-output text model; [`GeminiImager`] implements
//! [`Imager`](storyboard_interface::Imager) with an image model. Both share one
//! [`GeminiClient`] transport talking to the REST `generateContent` endpoint.
//!
//! # Example
//!
//! ```no_run
//! use storyboard_models::{GeminiAnalyzer, GeminiClient, GeminiImager};
//! use storyboard_rate_limit::StoryboardSettings;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = StoryboardSettings::load()?;
//! let client = GeminiClient::from_settings(&settings)?;
//! let analyzer = GeminiAnalyzer::new(client.clone(), &settings, None);
//! let imager = GeminiImager::new(client, &settings, None);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extraction;
mod gemini;

pub use extraction::{extract_json, parse_json};
pub use gemini::{
    Candidate, Content, GeminiAnalyzer, GeminiClient, GeminiImager, GenerateContentRequest,
    GenerateContentResponse, GenerationConfig, ImageConfig, InlineData, Part, PromptFeedback,
};
