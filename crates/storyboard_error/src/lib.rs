//! Error types for the storyboard generation pipeline.
//!
//! This crate provides the foundation error types used throughout the storyboard workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! The three failure classes of a generation run map onto dedicated types:
//! - [`InputError`]: the run was rejected before any remote call
//! - [`AnalysisError`]: the analysis call failed, the run produced no scenes
//! - [`ImageError`]: a single image request failed, isolated to one scene
//!
//! # Examples
//!
//! ```
//! use storyboard_error::{InputError, InputErrorKind, StoryboardResult};
//!
//! fn check_script(script: &str) -> StoryboardResult<()> {
//!     if script.trim().is_empty() {
//!         Err(InputError::new(InputErrorKind::EmptyScript))?
//!     }
//!     Ok(())
//! }
//!
//! let err = check_script("   ").unwrap_err();
//! assert!(err.is_input_invalid());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analysis;
mod builder;
mod config;
mod error;
mod export;
mod gemini;
mod image;
mod input;
mod pipeline;

pub use analysis::{AnalysisError, AnalysisErrorKind};
pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use error::{StoryboardError, StoryboardErrorKind, StoryboardResult};
pub use export::{ExportError, ExportErrorKind};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use image::{ImageError, ImageErrorKind};
pub use input::{InputError, InputErrorKind};
pub use pipeline::{PipelineError, PipelineErrorKind};
