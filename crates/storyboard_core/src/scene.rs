//! Runtime storyboard panels.

use crate::{ImagePayload, RawScene};
use serde::{Deserialize, Serialize};

/// Unique identifier of a scene, stable for one run.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub struct SceneId(uuid::Uuid);

impl SceneId {
    /// Allocate a fresh id.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for SceneId {
    fn default() -> Self {
        Self::new()
    }
}

/// One storyboard panel.
///
/// Text fields are copied from the analyzer and never change. Only the image and
/// the generating flag move, through the consuming transitions below.
///
/// # Examples
///
/// ```
/// use storyboard_core::{ImagePayload, RawScene, Scene};
///
/// let raw = RawScene {
///     script_segment: "Rain on the window.".into(),
///     prompt_english: "Close-up of raindrops".into(),
///     prompt_localized: "빗방울 클로즈업".into(),
/// };
/// let scene = Scene::pending(raw);
/// assert!(scene.is_generating());
///
/// let image = ImagePayload::from_bytes("image/png", b"png").unwrap();
/// let done = scene.completed(image);
/// assert!(!done.is_generating());
/// assert!(done.image().is_some());
///
/// // a failed retry keeps the earlier image
/// let retried = done.regenerating().failed();
/// assert!(retried.image().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Scene {
    id: SceneId,
    script_segment: String,
    prompt_english: String,
    prompt_localized: String,
    #[getter(skip)]
    image: Option<ImagePayload>,
    #[getter(skip)]
    is_generating: bool,
}

impl Scene {
    /// New placeholder: fresh id, generating, no image.
    pub fn pending(raw: RawScene) -> Self {
        Self {
            id: SceneId::new(),
            script_segment: raw.script_segment,
            prompt_english: raw.prompt_english,
            prompt_localized: raw.prompt_localized,
            image: None,
            is_generating: true,
        }
    }

    /// Rendered image, if any.
    pub fn image(&self) -> Option<&ImagePayload> {
        self.image.as_ref()
    }

    /// True while an image request for this scene is in flight or queued.
    pub fn is_generating(&self) -> bool {
        self.is_generating
    }

    /// Success: store the image and stop generating.
    pub fn completed(self, image: ImagePayload) -> Self {
        Self {
            image: Some(image),
            is_generating: false,
            ..self
        }
    }

    /// Failure: stop generating, keep whatever image was there before.
    pub fn failed(self) -> Self {
        Self {
            is_generating: false,
            ..self
        }
    }

    /// Re-enter the generating state for a retry. The image is kept.
    pub fn regenerating(self) -> Self {
        Self {
            is_generating: true,
            ..self
        }
    }
}
