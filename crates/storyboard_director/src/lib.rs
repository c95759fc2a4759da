//! Pure request builders for a storyboard run.
//!
//! Nothing in this crate performs I/O. Given a [`GenerationConfig`], it decides
//! how many scenes to ask for, writes the director instructions for the analyzer,
//! and writes the per-frame instructions for the imager.
//!
//! # Example
//!
//! ```
//! use storyboard_core::{GenerationConfig, SceneDetail};
//! use storyboard_director::{build_analysis_request, target_count_for};
//!
//! let config = GenerationConfig::builder()
//!     .script("x".repeat(4000))
//!     .scene_detail(SceneDetail::Standard)
//!     .build()
//!     .unwrap();
//!
//! let target = target_count_for(&config);
//! assert_eq!(target.get(), 16);
//!
//! let request = build_analysis_request(&config, target, "Korean");
//! assert!(request.instruction().contains("exactly 16 scenes"));
//! ```
//!
//! [`GenerationConfig`]: storyboard_core::GenerationConfig

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analysis;
mod count;
mod frame;
mod schema;

pub use analysis::build_analysis_request;
pub use count::{estimate_scene_count, target_count_for};
pub use frame::build_image_request;
pub use schema::analysis_response_schema;
