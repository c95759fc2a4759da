//! Storyboard - script to storyboard generation
//!
//! Turns a narration script into an ordered storyboard: one analysis call splits
//! the script into scenes and derives a shared style guide and character profile,
//! then every scene is rendered as one image, strictly in order, with a fixed
//! pause between requests.
//!
//! # Features
//!
//! - **Scene estimation**: target scene count from script length and density
//! - **Director prompts**: style, focus mode, character identity and custom
//!   directing instructions folded into one analysis request
//! - **Sequential rendering**: throttled, cancellable, failure-isolated per scene
//! - **Regeneration**: retry one scene without touching the others
//! - **Exports**: image zip, script and description text, HTML report
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use storyboard::{
//!     GeminiAnalyzer, GeminiClient, GeminiImager, GenerationConfig, GenerationOrchestrator,
//!     StoryboardSettings,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = StoryboardSettings::load()?;
//!     let client = GeminiClient::from_settings(&settings)?;
//!
//!     let orchestrator = GenerationOrchestrator::new(
//!         Arc::new(GeminiAnalyzer::new(client.clone(), &settings, None)),
//!         Arc::new(GeminiImager::new(client, &settings, None)),
//!     )
//!     .with_settings(&settings.pipeline);
//!
//!     let config = GenerationConfig::builder()
//!         .script(std::fs::read_to_string("script.txt")?)
//!         .build()?;
//!
//!     let summary = orchestrator.start(config).await?;
//!     println!("{} scenes rendered", summary.succeeded());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `storyboard_error` - Error types
//! - `storyboard_core` - Configuration, scenes and request payloads
//! - `storyboard_interface` - `Analyzer` and `Imager` traits
//! - `storyboard_rate_limit` - Settings, rate limiting and throttle
//! - `storyboard_director` - Scene count estimation and prompt builders
//! - `storyboard_models` - Gemini backends
//! - `storyboard_pipeline` - Scene board and orchestrator
//! - `storyboard_export` - Download bundles
//!
//! This crate (`storyboard`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod observability;

pub use observability::{ObservabilityConfig, init_observability, init_observability_with_config};

pub use storyboard_core::*;
pub use storyboard_director::*;
pub use storyboard_error::*;
pub use storyboard_export::*;
pub use storyboard_interface::*;
pub use storyboard_pipeline::*;
pub use storyboard_rate_limit::*;

// Gemini wire types are left out; their `GenerationConfig` would shadow the core one
pub use storyboard_models::{
    GeminiAnalyzer, GeminiClient, GeminiImager, extract_json, parse_json,
};
