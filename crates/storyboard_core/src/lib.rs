//! Core data types for the storyboard generation pipeline.
//!
//! This crate holds the data model shared by every stage of a run: the user's
//! [`GenerationConfig`], the analyzer's [`AnalysisResult`], the runtime [`Scene`]
//! panels, and the request payloads handed to the external services.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analysis;
mod config;
mod media;
mod options;
mod request;
mod scene;
mod style;

pub use analysis::{AnalysisResult, RawScene, StyleArtifacts};
pub use config::{GenerationConfig, GenerationConfigBuilder};
pub use media::ImagePayload;
pub use options::{AspectRatio, FocusMode, SceneDetail, TargetCount};
pub use request::{AnalysisRequest, ImageRequest};
pub use scene::{Scene, SceneId};
pub use style::{
    DEFAULT_PRESET_ID, PROMPT_TAGS, PresetCategory, StylePreset, find_preset, style_presets,
};
