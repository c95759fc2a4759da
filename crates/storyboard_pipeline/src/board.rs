//! Id-keyed scene arena.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use storyboard_core::{Scene, SceneId};
use tracing::trace;

#[derive(Debug, Default)]
struct Slots {
    order: Vec<SceneId>,
    scenes: HashMap<SceneId, Scene>,
}

/// The run's ordered scene list.
///
/// Writers replace one slot at a time by id. A write for an id that is no longer
/// on the board (the list was replaced by a newer run) is dropped.
///
/// # Examples
///
/// ```
/// use storyboard_core::{ImagePayload, RawScene, Scene};
/// use storyboard_pipeline::SceneBoard;
///
/// let raw = RawScene {
///     script_segment: "Dusk.".into(),
///     prompt_english: "Wide shot at dusk".into(),
///     prompt_localized: "해질녘".into(),
/// };
/// let board = SceneBoard::new();
/// board.replace_all(vec![Scene::pending(raw.clone()), Scene::pending(raw)]);
///
/// let id = board.id_at(1).unwrap();
/// let image = ImagePayload::from_bytes("image/png", b"png").unwrap();
/// let (index, scene) = board.update(id, |s| s.completed(image)).unwrap();
///
/// assert_eq!(index, 1);
/// assert!(scene.image().is_some());
/// assert!(board.snapshot()[0].is_generating());
/// ```
#[derive(Debug, Default)]
pub struct SceneBoard {
    slots: Mutex<Slots>,
}

impl SceneBoard {
    /// Empty board.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Slots> {
        self.slots.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Replace the whole list. Nothing is merged from the previous one.
    pub fn replace_all(&self, scenes: Vec<Scene>) {
        let mut slots = self.lock();
        slots.order = scenes.iter().map(|s| *s.id()).collect();
        slots.scenes = scenes.into_iter().map(|s| (*s.id(), s)).collect();
    }

    /// Remove every scene.
    pub fn clear(&self) {
        let mut slots = self.lock();
        slots.order.clear();
        slots.scenes.clear();
    }

    /// Replace the scene with `id` by `f(scene)`.
    ///
    /// Returns the scene's position and new state, or `None` if the id is unknown.
    pub fn update<F>(&self, id: SceneId, f: F) -> Option<(usize, Scene)>
    where
        F: FnOnce(Scene) -> Scene,
    {
        let mut slots = self.lock();
        let Some(index) = slots.order.iter().position(|s| *s == id) else {
            trace!(scene_id = %id, "Dropping update for scene not on the board");
            return None;
        };
        let scene = slots.scenes.remove(&id)?;
        let updated = f(scene);
        slots.scenes.insert(id, updated.clone());
        Some((index, updated))
    }

    /// Id of the scene at `index`.
    pub fn id_at(&self, index: usize) -> Option<SceneId> {
        self.lock().order.get(index).copied()
    }

    /// Current state of one scene.
    pub fn get(&self, id: SceneId) -> Option<Scene> {
        self.lock().scenes.get(&id).cloned()
    }

    /// Ids in order.
    pub fn ids(&self) -> Vec<SceneId> {
        self.lock().order.clone()
    }

    /// Ordered copy of every scene.
    pub fn snapshot(&self) -> Vec<Scene> {
        let slots = self.lock();
        slots
            .order
            .iter()
            .filter_map(|id| slots.scenes.get(id).cloned())
            .collect()
    }

    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.lock().order.len()
    }

    /// True when the board holds no scenes.
    pub fn is_empty(&self) -> bool {
        self.lock().order.is_empty()
    }
}
