//! Style preset catalog and directing tags.

use serde::Serialize;
use PresetCategory::{Animation, Art, LiveAction, Special, Webtoon};

/// Preset used when the caller picks nothing.
pub const DEFAULT_PRESET_ID: &str = "cinematic";

/// Directing tags that can be toggled into the custom instructions.
pub const PROMPT_TAGS: &[&str] = &[
    "Golden Hour Lighting",
    "Dutch Angle Shots",
    "Dynamic Motion Blur",
    "High Contrast Shadows",
    "Hyper-Realistic Textures",
    "Macro Close-ups",
    "Anamorphic Lens Flare",
    "Muted Color Palette",
    "Aggressive Camera Movement",
    "Film Grain Effect",
    "Minimalist Composition",
    "Surreal Atmosphere",
];

/// Grouping of presets.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display, strum::EnumIter,
)]
pub enum PresetCategory {
    /// Photographic looks
    #[strum(serialize = "Live Action")]
    LiveAction,
    /// 2D and 3D animation
    Animation,
    /// Comics and webtoons
    Webtoon,
    /// Illustration and painting
    Art,
    /// Novelty media
    Special,
}

/// A named visual style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StylePreset {
    /// Stable identifier
    pub id: &'static str,
    /// Localized display name; this is the style label sent to the analyzer
    pub name: &'static str,
    /// English label
    pub label: &'static str,
    /// Category the preset belongs to
    pub category: PresetCategory,
}

const fn preset(
    id: &'static str,
    name: &'static str,
    label: &'static str,
    category: PresetCategory,
) -> StylePreset {
    StylePreset {
        id,
        name,
        label,
        category,
    }
}

static PRESETS: &[StylePreset] = &[
    preset("cinematic", "시네마틱 실사", "CINEMATIC", LiveAction),
    preset("drama", "K-드라마 실사", "DRAMA", LiveAction),
    preset("noir", "누아르", "NOIR", LiveAction),
    preset("gopro", "초광각 고프로", "WIDE ANGLE", LiveAction),
    preset("western", "외국형 인물 (실존인물형)", "WESTERN REALISM", LiveAction),
    preset("korean", "한국형 인물 (실존인물형)", "KOREAN REALISM", LiveAction),
    preset("disney", "디즈니 픽사 스타일", "DISNEY PIXAR", Animation),
    preset("klife", "K-라이프 3D 피규어 스타일", "K-LIFE 3D FIGURE", Animation),
    preset("anime3d", "3D 애니메이션", "PIXAR STYLE", Animation),
    preset("hybrid3d", "실사 배경 + 3D 애니메이션", "REAL + 3D MIX", Animation),
    preset("ghibli", "지브리풍", "GHIBLI", Animation),
    preset("anime2d", "2D 애니메이션", "2D ANIME", Animation),
    preset("hybrid2d", "실사 배경 + 2D 애니메이션", "REAL + 2D MIX", Animation),
    preset("cyberpunk", "사이버펑크", "CYBERPUNK", Animation),
    preset("lowpoly", "로우 폴리 스타일", "LOW POLY", Animation),
    preset("webtoon", "웹툰", "WEBTOON", Webtoon),
    preset("comics", "만화/코믹스", "COMICS", Webtoon),
    preset("webnovel", "웹소설 시그니처", "WEB NOVEL", Webtoon),
    preset("fairy", "동화 일러스트", "FAIRY TALE", Art),
    preset("historical", "감성 사극 일러스트", "EMOTIONAL HISTORICAL", Art),
    preset("folklore", "동양 설화 일러스트", "ORIENTAL FOLKLORE", Art),
    preset("watercolor", "수채화", "WATERCOLOR", Art),
    preset("oil", "유화", "OIL PAINTING", Art),
    preset("concept", "콘셉트 아트", "CONCEPT ART", Art),
    preset("clay", "클레이 애니메이션", "CLAY ANIMATION", Special),
    preset("wool", "동화 양모인형", "WOOL FELT", Special),
    preset("diorama", "디오라마", "DIORAMA", Special),
    preset("stickman", "졸라맨 스타일", "STICKMAN", Special),
    preset("sketch_c", "스케치 컬러", "SKETCH COLOR", Special),
    preset("sketch_bw", "스케치 흑백", "SKETCH B&W", Special),
    preset("pixel", "픽셀아트", "PIXEL ART", Special),
    preset("lego", "레고 스타일", "LEGO BRICK", Special),
    preset("roblox", "로블록스 스타일", "ROBLOX", Special),
    preset("vhs", "90s VHS", "VINTAGE", Special),
    preset("neon", "네온 글로우", "NEON GLOW", Special),
    preset("xray", "x-ray 해골스타일", "X-RAY SKELETON", Special),
    preset("zack", "Zack.D.Films 스타일", "ZACK D FILMS", Special),
];

/// All presets in catalog order.
pub fn style_presets() -> &'static [StylePreset] {
    PRESETS
}

/// Look up a preset by id (case-insensitive).
///
/// # Examples
///
/// ```
/// use storyboard_core::{find_preset, PresetCategory};
///
/// let ghibli = find_preset("GHIBLI").unwrap();
/// assert_eq!(ghibli.category, PresetCategory::Animation);
/// assert!(find_preset("unknown").is_none());
/// ```
pub fn find_preset(id: &str) -> Option<&'static StylePreset> {
    PRESETS.iter().find(|p| p.id.eq_ignore_ascii_case(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn preset_ids_are_unique() {
        let ids: HashSet<_> = style_presets().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), style_presets().len());
    }

    #[test]
    fn default_preset_exists() {
        assert!(find_preset(DEFAULT_PRESET_ID).is_some());
    }
}
