//! Google Gemini REST integration.
//!
//! - [`GeminiClient`]: shared transport (HTTP client, API key, base URL)
//! - [`GeminiAnalyzer`]: script analysis with a JSON response schema
//! - [`GeminiImager`]: frame rendering with an image model

mod analyzer;
mod client;
mod conversion;
mod dto;
mod imager;

pub use analyzer::GeminiAnalyzer;
pub use client::GeminiClient;
pub use dto::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    ImageConfig, InlineData, Part, PromptFeedback,
};
pub use imager::GeminiImager;

/// Result type for Gemini transport operations.
pub(crate) type GeminiResult<T> = Result<T, storyboard_error::GeminiError>;
