//! The generation orchestrator.

use crate::{BoardEvent, RunPhase, RunSnapshot, RunSummary, SceneBoard, ScenePlan};
use std::sync::{Arc, Mutex, MutexGuard};
use storyboard_core::{GenerationConfig, ImagePayload, Scene, SceneId, StyleArtifacts};
use storyboard_director::{build_analysis_request, build_image_request, target_count_for};
use storyboard_error::{PipelineError, PipelineErrorKind, StoryboardResult};
use storyboard_interface::{Analyzer, Imager};
use storyboard_rate_limit::{PipelineSettings, Throttle};
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, trace, warn};

/// Buffered events per subscriber before the slowest one starts lagging.
pub const EVENT_CAPACITY: usize = 256;

#[derive(Debug, Default)]
struct RunState {
    phase: RunPhase,
    in_progress: bool,
    cancel: CancellationToken,
    config: Option<GenerationConfig>,
    artifacts: Option<StyleArtifacts>,
}

/// Drives analysis, the sequential image pass, cancellation and regeneration.
///
/// Cloning is cheap and every clone drives the same run, so one handle can await
/// [`start`](Self::start) while another calls [`cancel`](Self::cancel) or
/// [`regenerate`](Self::regenerate).
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use storyboard_pipeline::GenerationOrchestrator;
///
/// let orchestrator = GenerationOrchestrator::new(Arc::new(analyzer), Arc::new(imager))
///     .with_settings(&settings.pipeline);
///
/// let summary = orchestrator.start(config).await?;
/// println!("{} of {} scenes rendered", summary.succeeded(), summary.total());
/// ```
#[derive(Clone)]
pub struct GenerationOrchestrator {
    analyzer: Arc<dyn Analyzer>,
    imager: Arc<dyn Imager>,
    throttle: Throttle,
    localized_language: Arc<str>,
    board: Arc<SceneBoard>,
    state: Arc<Mutex<RunState>>,
    events: broadcast::Sender<BoardEvent>,
}

impl std::fmt::Debug for GenerationOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationOrchestrator")
            .field("analyzer", &self.analyzer.model_name())
            .field("imager", &self.imager.model_name())
            .field("throttle", &self.throttle)
            .field("localized_language", &self.localized_language)
            .finish_non_exhaustive()
    }
}

impl GenerationOrchestrator {
    /// Create an orchestrator with the default throttle and Korean localized notes.
    pub fn new(analyzer: Arc<dyn Analyzer>, imager: Arc<dyn Imager>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let defaults = PipelineSettings::default();
        Self {
            analyzer,
            imager,
            throttle: Throttle::new(defaults.throttle()),
            localized_language: Arc::from(defaults.localized_language().as_str()),
            board: Arc::new(SceneBoard::new()),
            state: Arc::new(Mutex::new(RunState::default())),
            events,
        }
    }

    /// Replace the pause taken between scene requests.
    pub fn with_throttle(mut self, throttle: Throttle) -> Self {
        self.throttle = throttle;
        self
    }

    /// Language the analyzer writes its localized directing notes in.
    pub fn with_localized_language(mut self, language: impl AsRef<str>) -> Self {
        self.localized_language = Arc::from(language.as_ref());
        self
    }

    /// Apply the `[pipeline]` settings section.
    pub fn with_settings(self, settings: &PipelineSettings) -> Self {
        self.with_throttle(Throttle::new(settings.throttle()))
            .with_localized_language(settings.localized_language())
    }

    fn lock_state(&self) -> MutexGuard<'_, RunState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn emit(&self, event: BoardEvent) {
        if self.events.send(event).is_err() {
            trace!("No event subscribers");
        }
    }

    /// Subscribe to progress events.
    pub fn subscribe(&self) -> broadcast::Receiver<BoardEvent> {
        self.events.subscribe()
    }

    /// Ordered scene list, phase and retained artifacts.
    pub fn snapshot(&self) -> RunSnapshot {
        let state = self.lock_state();
        RunSnapshot::new(
            state.phase,
            state.in_progress,
            self.board.snapshot(),
            state.artifacts.clone(),
        )
    }

    /// Current scene list.
    pub fn scenes(&self) -> Vec<Scene> {
        self.board.snapshot()
    }

    /// True while a main pass is running.
    pub fn is_in_progress(&self) -> bool {
        self.lock_state().in_progress
    }

    /// Run one storyboard generation to the end.
    ///
    /// Analyzes the script, publishes placeholders for every scene, then renders
    /// the scenes strictly in order with a fixed pause before every scene after
    /// the first. A failed image is logged and leaves only that scene without an
    /// image. Cancellation is observed before every scene, including one
    /// requested while analysis runs, and during the pause; an in-flight image
    /// request always completes.
    ///
    /// # Errors
    ///
    /// - Input error for an empty script; nothing is called and no state changes
    /// - Pipeline error if another run is still in progress
    /// - Analysis error if the analyzer fails; the board stays empty
    #[instrument(skip(self, config), fields(script_len = config.script_len()))]
    pub async fn start(&self, config: GenerationConfig) -> StoryboardResult<RunSummary> {
        config.validate()?;
        let cancel = self.begin_run(&config)?;
        self.emit(BoardEvent::RunStarted);

        let target = target_count_for(&config);
        let request = build_analysis_request(&config, target, &self.localized_language);
        info!(
            target_count = target.get(),
            analyzer = self.analyzer.model_name(),
            "Analyzing script"
        );

        let result = match self.analyzer.analyze(&request).await {
            Ok(result) => result,
            Err(e) => {
                error!(error = %e, "Script analysis failed");
                self.emit(BoardEvent::AnalysisFailed {
                    message: e.to_string(),
                });
                self.finish_run(RunPhase::AnalysisFailed);
                return Err(e);
            }
        };

        let (scenes, artifacts) = ScenePlan::materialize(result, target).into_parts();
        let scene_count = scenes.len();
        self.board.replace_all(scenes);
        {
            let mut state = self.lock_state();
            state.artifacts = Some(artifacts.clone());
            state.phase = RunPhase::Generating;
        }
        info!(scene_count, "Analysis complete");
        self.emit(BoardEvent::AnalysisCompleted { scene_count });
        self.emit(BoardEvent::ScenesPublished {
            scenes: self.board.snapshot(),
        });

        let phase = self.render_all(&config, &artifacts, &cancel).await;
        Ok(self.finish_run(phase))
    }

    fn begin_run(&self, config: &GenerationConfig) -> StoryboardResult<CancellationToken> {
        let mut state = self.lock_state();
        if state.in_progress {
            Err(PipelineError::new(PipelineErrorKind::RunInProgress))?
        }
        state.in_progress = true;
        state.phase = RunPhase::Analyzing;
        state.cancel = CancellationToken::new();
        state.config = Some(config.clone());
        state.artifacts = None;
        self.board.clear();
        Ok(state.cancel.clone())
    }

    async fn render_all(
        &self,
        config: &GenerationConfig,
        artifacts: &StyleArtifacts,
        cancel: &CancellationToken,
    ) -> RunPhase {
        for (index, id) in self.board.ids().into_iter().enumerate() {
            if cancel.is_cancelled()
                || (index > 0 && !self.throttle.pause_or_cancel(cancel).await)
            {
                info!(scene_index = index, "Generation cancelled");
                return RunPhase::Cancelled;
            }

            let Some(scene) = self.board.get(id) else {
                continue;
            };
            match self.render(&scene, config, artifacts).await {
                Ok(image) => {
                    debug!(scene_index = index, "Scene rendered");
                    self.publish(id, |s| s.completed(image));
                }
                Err(e) => {
                    warn!(scene_index = index, scene_id = %id, error = %e, "Scene image failed, continuing");
                    self.publish(id, Scene::failed);
                }
            }
        }
        RunPhase::Completed
    }

    async fn render(
        &self,
        scene: &Scene,
        config: &GenerationConfig,
        artifacts: &StyleArtifacts,
    ) -> StoryboardResult<ImagePayload> {
        let request = build_image_request(
            scene.prompt_english(),
            artifacts,
            *config.aspect_ratio(),
            config.style_image().as_ref(),
            config.character_image().as_ref(),
        );
        self.imager.render(&request).await
    }

    fn publish<F>(&self, id: SceneId, f: F) -> Option<Scene>
    where
        F: FnOnce(Scene) -> Scene,
    {
        let (index, scene) = self.board.update(id, f)?;
        self.emit(BoardEvent::SceneUpdated {
            index,
            scene: scene.clone(),
        });
        Some(scene)
    }

    fn finish_run(&self, phase: RunPhase) -> RunSummary {
        {
            let mut state = self.lock_state();
            state.in_progress = false;
            state.phase = phase;
        }
        let summary = RunSummary::from_scenes(phase, &self.board.snapshot());
        info!(
            phase = %phase,
            succeeded = summary.succeeded(),
            failed = summary.failed(),
            unfinished = summary.unfinished(),
            "Run finished"
        );
        self.emit(BoardEvent::RunFinished { phase });
        summary
    }

    /// Request cooperative cancellation of the running main pass.
    ///
    /// Takes effect before the next scene; the in-flight request completes.
    /// Without a running pass this does nothing.
    #[instrument(skip(self))]
    pub fn cancel(&self) {
        let state = self.lock_state();
        if state.in_progress {
            info!("Cancellation requested");
            state.cancel.cancel();
        }
    }

    /// Replace the configuration later regenerations read.
    ///
    /// Aspect ratio and reference images take effect on the next regeneration.
    /// The retained style guide and character profile are kept. A running main
    /// pass keeps the configuration it started with.
    pub fn reconfigure(&self, config: GenerationConfig) {
        self.lock_state().config = Some(config);
    }

    fn retained(&self) -> StoryboardResult<(GenerationConfig, StyleArtifacts)> {
        let state = self.lock_state();
        match (&state.config, &state.artifacts) {
            (Some(config), Some(artifacts)) => Ok((config.clone(), artifacts.clone())),
            _ => Err(PipelineError::new(PipelineErrorKind::NoAnalysis).into()),
        }
    }

    /// Render the scene at `index` again.
    ///
    /// See [`regenerate_scene`](Self::regenerate_scene).
    ///
    /// # Errors
    ///
    /// Pipeline error if no analysis is retained or the index is out of range,
    /// otherwise the image error of the failed attempt.
    #[instrument(skip(self))]
    pub async fn regenerate(&self, index: usize) -> StoryboardResult<Scene> {
        self.retained()?;
        let id = self.board.id_at(index).ok_or_else(|| {
            PipelineError::new(PipelineErrorKind::SceneIndexOutOfRange(index))
        })?;
        self.regenerate_scene(id).await
    }

    /// Render one scene again with the retained artifacts and the current configuration.
    ///
    /// Only this scene's slot is touched. It is marked generating immediately. On
    /// success the new image replaces the old one; on failure the previous image,
    /// if any, is kept. May run while the main pass is still going.
    ///
    /// # Errors
    ///
    /// Pipeline error if no analysis is retained or the id is unknown, otherwise
    /// the image error of the failed attempt.
    #[instrument(skip(self), fields(scene_id = %id))]
    pub async fn regenerate_scene(&self, id: SceneId) -> StoryboardResult<Scene> {
        let (config, artifacts) = self.retained()?;
        let not_found = || PipelineError::new(PipelineErrorKind::SceneNotFound(id.to_string()));
        let scene = self.publish(id, Scene::regenerating).ok_or_else(not_found)?;

        match self.render(&scene, &config, &artifacts).await {
            Ok(image) => {
                info!("Scene regenerated");
                // the board may have been replaced by a newer run meanwhile
                Ok(self
                    .publish(id, |s| s.completed(image))
                    .ok_or_else(not_found)?)
            }
            Err(e) => {
                warn!(error = %e, "Scene regeneration failed, keeping previous image");
                self.publish(id, Scene::failed);
                Err(e)
            }
        }
    }
}
