//! Plain-text exports.

use storyboard_core::Scene;

/// Script segments, numbered from 1, blocks separated by a blank line.
///
/// # Examples
///
/// ```
/// use storyboard_core::{RawScene, Scene};
/// use storyboard_export::script_text;
///
/// let scene = |s: &str| Scene::pending(RawScene {
///     script_segment: s.into(),
///     prompt_english: String::new(),
///     prompt_localized: String::new(),
/// });
///
/// let text = script_text(&[scene("Dawn."), scene("Noon.")]);
/// assert_eq!(text, "[Scene 1]\nDawn.\n\n[Scene 2]\nNoon.");
/// ```
pub fn script_text(scenes: &[Scene]) -> String {
    scenes
        .iter()
        .enumerate()
        .map(|(i, s)| format!("[Scene {}]\n{}", i + 1, s.script_segment()))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Localized and English prompts per scene, numbered from 1.
pub fn descriptions_text(scenes: &[Scene]) -> String {
    scenes
        .iter()
        .enumerate()
        .map(|(i, s)| {
            format!(
                "[Scene {} Direction]\nLocalized: {}\nEnglish: {}",
                i + 1,
                s.prompt_localized(),
                s.prompt_english()
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
