//! Test utilities for pipeline tests.
//!
//! This module provides mock services and scene fixtures.

use std::time::Duration;
use storyboard_core::{AnalysisResult, GenerationConfig, RawScene, StyleArtifacts};
use storyboard_rate_limit::Throttle;

pub mod mock_services;

#[allow(unused_imports)]
pub use mock_services::{MockAnalyzer, MockBehavior, MockImager, MockResponse, frame};

/// Throttle short enough to keep tests fast.
pub fn fast_throttle() -> Throttle {
    Throttle::new(Duration::from_millis(1))
}

/// Analyzer answer with `count` numbered scenes.
pub fn analysis_with(count: usize) -> AnalysisResult {
    AnalysisResult {
        scenes: (0..count)
            .map(|n| RawScene {
                script_segment: format!("segment {n}"),
                prompt_english: format!("prompt {n}"),
                prompt_localized: format!("장면 {n}"),
            })
            .collect(),
        artifacts: StyleArtifacts {
            style_guide: "ink wash on rice paper".to_string(),
            character_profile: "sharp jaw, silver bob cut".to_string(),
        },
    }
}

/// Configuration asking for exactly `count` scenes.
pub fn config_with_count(count: u32) -> GenerationConfig {
    GenerationConfig::builder()
        .script("The harbour wakes before the sun. Gulls circle the cranes.")
        .target_scene_count(count)
        .build()
        .expect("valid test config")
}
