//! Progress events published while a run advances.

use crate::RunPhase;
use serde::{Deserialize, Serialize};
use storyboard_core::Scene;

/// One observable change on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BoardEvent {
    /// A run was accepted and analysis is starting
    RunStarted,
    /// Analysis succeeded
    AnalysisCompleted {
        /// Scenes kept after truncation
        scene_count: usize,
    },
    /// Analysis failed and the run is over
    AnalysisFailed {
        /// Human-readable failure
        message: String,
    },
    /// Placeholders for every scene, before any image arrives
    ScenesPublished {
        /// Pending scenes in order
        scenes: Vec<Scene>,
    },
    /// One scene changed state
    SceneUpdated {
        /// Position in the list
        index: usize,
        /// New state of that scene
        scene: Scene,
    },
    /// The run reached a terminal phase
    RunFinished {
        /// Terminal phase
        phase: RunPhase,
    },
}
