//! Run phases, snapshots and summaries.

use serde::{Deserialize, Serialize};
use storyboard_core::{Scene, StyleArtifacts};

/// Where the current (or last) run stands.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RunPhase {
    /// No run has started
    #[default]
    Idle,
    /// Waiting for the analyzer
    Analyzing,
    /// Analysis failed; no scenes were produced
    AnalysisFailed,
    /// Rendering scenes in order
    Generating,
    /// Every scene reached a terminal state
    Completed,
    /// Stopped early by a cancellation request
    Cancelled,
}

/// Read-only view of the orchestrator for presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct RunSnapshot {
    /// Current phase
    phase: RunPhase,
    /// True while a main pass is running
    in_progress: bool,
    /// Scenes in order
    scenes: Vec<Scene>,
    /// Artifacts of the last successful analysis
    artifacts: Option<StyleArtifacts>,
}

impl RunSnapshot {
    pub(crate) fn new(
        phase: RunPhase,
        in_progress: bool,
        scenes: Vec<Scene>,
        artifacts: Option<StyleArtifacts>,
    ) -> Self {
        Self {
            phase,
            in_progress,
            scenes,
            artifacts,
        }
    }
}

/// Outcome counts of one main pass.
///
/// # Examples
///
/// ```
/// use storyboard_core::{ImagePayload, RawScene, Scene};
/// use storyboard_pipeline::{RunPhase, RunSummary};
///
/// let raw = RawScene {
///     script_segment: "A".into(),
///     prompt_english: "A".into(),
///     prompt_localized: "A".into(),
/// };
/// let image = ImagePayload::from_bytes("image/png", b"png").unwrap();
/// let scenes = vec![
///     Scene::pending(raw.clone()).completed(image),
///     Scene::pending(raw.clone()).failed(),
///     Scene::pending(raw),
/// ];
///
/// let summary = RunSummary::from_scenes(RunPhase::Cancelled, &scenes);
/// assert_eq!(*summary.succeeded(), 1);
/// assert_eq!(*summary.failed(), 1);
/// assert_eq!(*summary.unfinished(), 1);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct RunSummary {
    /// Terminal phase
    phase: RunPhase,
    /// Scenes on the board
    total: usize,
    /// Scenes holding an image
    succeeded: usize,
    /// Scenes that stopped without an image
    failed: usize,
    /// Scenes still pending
    unfinished: usize,
}

impl RunSummary {
    /// Count outcomes over an ordered scene list.
    pub fn from_scenes(phase: RunPhase, scenes: &[Scene]) -> Self {
        let mut summary = Self {
            phase,
            total: scenes.len(),
            succeeded: 0,
            failed: 0,
            unfinished: 0,
        };
        for scene in scenes {
            if scene.image().is_some() {
                summary.succeeded += 1;
            } else if scene.is_generating() {
                summary.unfinished += 1;
            } else {
                summary.failed += 1;
            }
        }
        summary
    }
}
