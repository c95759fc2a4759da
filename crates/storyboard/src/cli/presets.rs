//! Presets command handler.

use storyboard::{
    AspectRatio, DEFAULT_PRESET_ID, PROMPT_TAGS, PresetCategory, SceneDetail, style_presets,
};
use strum::IntoEnumIterator;

/// Print the style preset catalog, the frame and density options, and the directing tags.
pub fn list_presets() {
    print!("{}", presets_listing());
}

fn presets_listing() -> String {
    let mut text = String::new();

    for category in PresetCategory::iter() {
        text.push_str(&format!("{}\n", category));
        for preset in style_presets().iter().filter(|p| p.category == category) {
            let marker = if preset.id == DEFAULT_PRESET_ID { " (default)" } else { "" };
            text.push_str(&format!(
                "  {:<12} {} / {}{}\n",
                preset.id, preset.name, preset.label, marker
            ));
        }
        text.push('\n');
    }

    text.push_str("Aspect ratios (--aspect-ratio):\n");
    for ratio in AspectRatio::iter() {
        text.push_str(&format!("  {:<12} {}\n", ratio, ratio.label()));
    }
    text.push('\n');

    text.push_str("Scene density (--detail):\n");
    for detail in SceneDetail::iter() {
        text.push_str(&format!("  {:<12} {}\n", detail, detail.label()));
    }
    text.push('\n');

    text.push_str("Directing tags (--tag):\n");
    for tag in PROMPT_TAGS {
        text.push_str(&format!("  {}\n", tag));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_shows_ratio_and_density_labels() {
        let text = presets_listing();
        assert!(text.contains("9:16         Shorts (9:16)"));
        assert!(text.contains("1:1          Square (1:1)"));
        assert!(text.contains("standard     Standard (3-4 per 1000 characters)"));
        assert!(text.contains("detailed     Short-form (about 12 per minute)"));
        assert!(text.contains("Golden Hour Lighting"));
    }
}
