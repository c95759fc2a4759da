//! Scene count estimation.

use storyboard_core::{GenerationConfig, SceneDetail, TargetCount};

/// Characters of narration per minute.
const CHARS_PER_MINUTE: f64 = 400.0;

/// Shortest duration the estimate assumes, in minutes.
const MIN_MINUTES: f64 = 0.5;

/// Derive the number of scenes for a script.
///
/// A positive `manual` count wins and is only rounded and clamped. Zero,
/// negative and non-finite values mean "derive from density".
///
/// # Examples
///
/// ```
/// use storyboard_core::SceneDetail;
/// use storyboard_director::estimate_scene_count;
///
/// assert_eq!(estimate_scene_count(0, SceneDetail::Standard, 0.0).get(), 2);
/// assert_eq!(estimate_scene_count(4000, SceneDetail::Essential, 0.0).get(), 20);
/// assert_eq!(estimate_scene_count(4000, SceneDetail::Detailed, 0.0).get(), 50);
/// assert_eq!(estimate_scene_count(4000, SceneDetail::Detailed, 5.0).get(), 5);
/// ```
pub fn estimate_scene_count(script_len: usize, detail: SceneDetail, manual: f64) -> TargetCount {
    if manual.is_finite() && manual > 0.0 {
        return clamp_rounded(manual);
    }

    let chars = script_len as f64;
    let minutes = (chars / CHARS_PER_MINUTE).max(MIN_MINUTES);

    let target = match detail {
        SceneDetail::Essential => (minutes * 2.0).ceil().max(2.0),
        SceneDetail::Detailed => (minutes * 12.0).ceil(),
        SceneDetail::Standard => (chars / 1000.0 * 4.0).ceil().max(2.0),
    };
    clamp_rounded(target)
}

/// Scene count for a configuration, measuring the script in characters.
pub fn target_count_for(config: &GenerationConfig) -> TargetCount {
    estimate_scene_count(
        config.script_len(),
        *config.scene_detail(),
        f64::from(*config.target_scene_count()),
    )
}

fn clamp_rounded(value: f64) -> TargetCount {
    // f64 -> i64 saturates, so huge manual values still clamp to the maximum
    TargetCount::clamped(value.round() as i64)
}
