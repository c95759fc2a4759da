//! Enumerated configuration options.

use serde::{Deserialize, Serialize};

/// Output frame aspect ratio.
///
/// # Examples
///
/// ```
/// use storyboard_core::AspectRatio;
/// use std::str::FromStr;
///
/// let ratio = AspectRatio::from_str("16:9").unwrap();
/// assert_eq!(ratio, AspectRatio::Landscape);
/// assert_eq!(ratio.to_string(), "16:9");
/// assert_eq!(AspectRatio::default(), AspectRatio::Portrait);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
pub enum AspectRatio {
    /// Shorts (9:16)
    #[default]
    #[serde(rename = "9:16")]
    #[strum(serialize = "9:16")]
    Portrait,
    /// Long-form (16:9)
    #[serde(rename = "16:9")]
    #[strum(serialize = "16:9")]
    Landscape,
    /// Social (3:4)
    #[serde(rename = "3:4")]
    #[strum(serialize = "3:4")]
    Social,
    /// Classic (4:3)
    #[serde(rename = "4:3")]
    #[strum(serialize = "4:3")]
    Classic,
    /// Square (1:1)
    #[serde(rename = "1:1")]
    #[strum(serialize = "1:1")]
    Square,
}

impl AspectRatio {
    /// Human label used by front ends.
    pub fn label(&self) -> &'static str {
        match self {
            AspectRatio::Portrait => "Shorts (9:16)",
            AspectRatio::Landscape => "Long-form (16:9)",
            AspectRatio::Social => "Social (3:4)",
            AspectRatio::Classic => "Classic (4:3)",
            AspectRatio::Square => "Square (1:1)",
        }
    }
}

/// Scene density selector used when no manual count is set.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SceneDetail {
    /// Long-form pacing, about two scenes per minute of narration
    Essential,
    /// Balanced, three to four scenes per 1000 characters
    #[default]
    Standard,
    /// Short-form pacing, about twelve scenes per minute
    Detailed,
}

impl SceneDetail {
    /// Short label describing the density.
    pub fn label(&self) -> &'static str {
        match self {
            SceneDetail::Essential => "Long-form (about 2 per minute)",
            SceneDetail::Standard => "Standard (3-4 per 1000 characters)",
            SceneDetail::Detailed => "Short-form (about 12 per minute)",
        }
    }

    /// Longer description of the intended use.
    pub fn description(&self) -> &'static str {
        match self {
            SceneDetail::Essential => "Film and long-form video, relaxed cuts",
            SceneDetail::Standard => "Balanced generation driven by script length",
            SceneDetail::Detailed => "Shorts and reels, rapid cuts",
        }
    }
}

/// Where the analyzer should put the visual emphasis.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FocusMode {
    /// Decide per scene
    #[default]
    Auto,
    /// Character-driven narrative framing
    Character,
    /// Script and information centred framing
    Script,
}

/// Number of scenes a run must produce.
///
/// Always within `1..=50`.
///
/// # Examples
///
/// ```
/// use storyboard_core::TargetCount;
///
/// assert_eq!(TargetCount::clamped(120).get(), 50);
/// assert_eq!(TargetCount::clamped(0).get(), 1);
/// assert_eq!(TargetCount::clamped(16).get(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(from = "i64")]
pub struct TargetCount(u32);

impl From<i64> for TargetCount {
    fn from(value: i64) -> Self {
        Self::clamped(value)
    }
}

impl TargetCount {
    /// Smallest allowed count.
    pub const MIN: u32 = 1;
    /// Largest allowed count.
    pub const MAX: u32 = 50;

    /// Clamp an arbitrary integer into the valid range.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u32)
    }

    /// The count as an integer.
    pub fn get(&self) -> u32 {
        self.0
    }

    /// The count as a `usize` for slicing.
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}
