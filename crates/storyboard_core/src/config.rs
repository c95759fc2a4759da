//! User-supplied configuration for one generation run.

use crate::{AspectRatio, DEFAULT_PRESET_ID, FocusMode, ImagePayload, SceneDetail, find_preset};
use serde::{Deserialize, Serialize};
use storyboard_error::{
    BuilderError, BuilderErrorKind, InputError, InputErrorKind, StoryboardResult,
};

/// Everything the user chose before pressing start.
///
/// Immutable for the duration of a run; the orchestrator keeps its own copy.
///
/// # Examples
///
/// ```
/// use storyboard_core::{AspectRatio, GenerationConfig, SceneDetail};
///
/// let config = GenerationConfig::builder()
///     .script("A lighthouse keeper finds a message in a bottle.")
///     .aspect_ratio(AspectRatio::Landscape)
///     .scene_detail(SceneDetail::Essential)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.effective_style(), "시네마틱 실사");
/// assert_eq!(*config.target_scene_count(), 0);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), build_fn(private, name = "build_internal"))]
pub struct GenerationConfig {
    /// Style label, normally a preset's display name
    #[builder(default = "default_style()")]
    style: String,
    /// Free-text style that overrides `style` when non-empty
    #[builder(default)]
    custom_style: String,
    /// Frame aspect ratio
    #[builder(default)]
    aspect_ratio: AspectRatio,
    /// Script text
    script: String,
    /// Density used when no manual count is set
    #[builder(default)]
    scene_detail: SceneDetail,
    /// Manual scene count; 0 derives the count from `scene_detail`
    #[builder(default)]
    target_scene_count: u32,
    /// Free-text character description
    #[builder(default)]
    main_character: String,
    /// Optional style reference image
    #[builder(default, setter(strip_option))]
    style_image: Option<ImagePayload>,
    /// Optional character reference image
    #[builder(default, setter(strip_option))]
    character_image: Option<ImagePayload>,
    /// Informational (news/economy) mode without human protagonists
    #[builder(default)]
    non_humanoid: bool,
    /// Visual emphasis
    #[builder(default)]
    focus_mode: FocusMode,
    /// Free-text directing instructions honoured in every scene
    #[builder(default)]
    custom_instructions: String,
}

fn default_style() -> String {
    find_preset(DEFAULT_PRESET_ID)
        .map(|p| p.name.to_string())
        .unwrap_or_else(|| DEFAULT_PRESET_ID.to_string())
}

impl GenerationConfigBuilder {
    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns a builder error if the script was never set.
    pub fn build(&self) -> StoryboardResult<GenerationConfig> {
        Ok(self
            .build_internal()
            .map_err(|e| BuilderError::new(BuilderErrorKind::MissingField(e.to_string())))?)
    }

    /// Select a style preset by id; its display name becomes the style label.
    ///
    /// # Errors
    ///
    /// Returns an input error for unknown preset ids.
    pub fn preset(&mut self, id: &str) -> StoryboardResult<&mut Self> {
        let preset = find_preset(id)
            .ok_or_else(|| InputError::new(InputErrorKind::UnknownPreset(id.to_string())))?;
        Ok(self.style(preset.name))
    }
}

impl GenerationConfig {
    /// Create a new builder.
    pub fn builder() -> GenerationConfigBuilder {
        GenerationConfigBuilder::default()
    }

    /// The style label sent to the analyzer: custom text wins over the preset.
    pub fn effective_style(&self) -> &str {
        let custom = self.custom_style.trim();
        if custom.is_empty() {
            &self.style
        } else {
            custom
        }
    }

    /// Check the run preconditions.
    ///
    /// # Errors
    ///
    /// Returns an input error when the script is empty or whitespace only.
    pub fn validate(&self) -> StoryboardResult<()> {
        if self.script.trim().is_empty() {
            return Err(InputError::new(InputErrorKind::EmptyScript).into());
        }
        Ok(())
    }

    /// Script length in characters (not bytes).
    pub fn script_len(&self) -> usize {
        self.script.chars().count()
    }

    /// Reference images in request order: style first, then character.
    pub fn reference_images(&self) -> Vec<ImagePayload> {
        self.style_image
            .iter()
            .chain(self.character_image.iter())
            .cloned()
            .collect()
    }

    /// Add a directing tag to the custom instructions, or remove it if present.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyboard_core::GenerationConfig;
    ///
    /// let mut config = GenerationConfig::builder().script("x").build().unwrap();
    /// config.toggle_prompt_tag("Film Grain Effect");
    /// config.toggle_prompt_tag("Golden Hour Lighting");
    /// assert_eq!(config.custom_instructions(), "Film Grain Effect, Golden Hour Lighting");
    /// config.toggle_prompt_tag("Film Grain Effect");
    /// assert_eq!(config.custom_instructions(), "Golden Hour Lighting");
    /// ```
    pub fn toggle_prompt_tag(&mut self, tag: &str) {
        let tag = tag.trim();
        if tag.is_empty() {
            return;
        }
        let mut parts: Vec<&str> = self
            .custom_instructions
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        if let Some(position) = parts.iter().position(|part| *part == tag) {
            parts.remove(position);
        } else {
            parts.push(tag);
        }
        self.custom_instructions = parts.join(", ");
    }

    /// Replace the aspect ratio.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: AspectRatio) {
        self.aspect_ratio = aspect_ratio;
    }
}
