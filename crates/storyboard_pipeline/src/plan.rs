//! Scene plan materialization.

use storyboard_core::{AnalysisResult, Scene, StyleArtifacts, TargetCount};
use tracing::{debug, warn};

/// Ordered scene list plus the shared artifacts of one analysis.
///
/// # Examples
///
/// ```
/// use storyboard_core::{AnalysisResult, RawScene, TargetCount};
/// use storyboard_pipeline::ScenePlan;
///
/// let raw = |n: usize| RawScene {
///     script_segment: format!("segment {n}"),
///     prompt_english: format!("prompt {n}"),
///     prompt_localized: format!("장면 {n}"),
/// };
/// let result = AnalysisResult {
///     scenes: (0..8).map(raw).collect(),
///     ..Default::default()
/// };
///
/// let plan = ScenePlan::materialize(result, TargetCount::clamped(5));
/// assert_eq!(plan.len(), 5);
/// assert_eq!(plan.scenes()[4].script_segment(), "segment 4");
/// assert!(plan.scenes().iter().all(|s| s.is_generating() && s.image().is_none()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenePlan {
    scenes: Vec<Scene>,
    artifacts: StyleArtifacts,
}

impl ScenePlan {
    /// Keep the first `target` scene records and create one pending scene for each.
    ///
    /// Short answers are kept as they are; the plan is never padded.
    pub fn materialize(mut result: AnalysisResult, target: TargetCount) -> Self {
        let returned = result.scenes.len();
        if returned > target.as_usize() {
            debug!(returned, target_count = target.get(), "Truncating analyzer scenes");
        } else if returned < target.as_usize() {
            warn!(returned, target_count = target.get(), "Analyzer returned fewer scenes than requested");
        }
        result.truncate(target.as_usize());

        let scenes = result.scenes.into_iter().map(Scene::pending).collect();
        Self {
            scenes,
            artifacts: result.artifacts,
        }
    }

    /// Pending scenes in order.
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    /// Shared style guide and character profile.
    pub fn artifacts(&self) -> &StyleArtifacts {
        &self.artifacts
    }

    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// True when the analyzer returned no scenes.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Split into scenes and artifacts.
    pub fn into_parts(self) -> (Vec<Scene>, StyleArtifacts) {
        (self.scenes, self.artifacts)
    }
}
