//! Structured analyzer output.

use serde::{Deserialize, Serialize};

/// One scene record as returned by the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawScene {
    /// Script lines covered by this scene
    pub script_segment: String,
    /// Full cinematic prompt in English
    #[serde(alias = "videoPromptEn")]
    pub prompt_english: String,
    /// Directing notes in the localized language
    #[serde(alias = "videoPromptKo")]
    pub prompt_localized: String,
}

/// Cross-scene artifacts produced by one analysis and reused by every image request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleArtifacts {
    /// Artistic medium and texture description
    #[serde(default, alias = "globalStyleGuide")]
    pub style_guide: String,
    /// Face and hair identity description
    #[serde(default, alias = "characterDescription")]
    pub character_profile: String,
}

/// The analyzer's answer for one run.
///
/// # Examples
///
/// ```
/// use storyboard_core::AnalysisResult;
///
/// let json = r#"{
///     "scenes": [
///         {"scriptSegment": "Dawn.", "promptEnglish": "Wide shot of dawn", "promptLocalized": "새벽"}
///     ],
///     "styleGuide": "soft watercolor",
///     "characterProfile": "round face, short black hair"
/// }"#;
///
/// let result: AnalysisResult = serde_json::from_str(json).unwrap();
/// assert_eq!(result.scenes.len(), 1);
/// assert_eq!(result.artifacts.style_guide, "soft watercolor");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Ordered scene records
    pub scenes: Vec<RawScene>,
    /// Shared style guide and character profile
    #[serde(flatten)]
    pub artifacts: StyleArtifacts,
}

impl AnalysisResult {
    /// Keep at most `limit` scenes, preserving order. Never pads.
    pub fn truncate(&mut self, limit: usize) {
        self.scenes.truncate(limit);
    }
}
