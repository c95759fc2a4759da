//! Tests for the generation orchestrator.

mod test_utils;

use std::sync::{Arc, OnceLock};
use std::time::Duration;
use storyboard_core::{AspectRatio, GenerationConfig};
use storyboard_error::{
    AnalysisErrorKind, ImageErrorKind, PipelineErrorKind, StoryboardErrorKind,
};
use storyboard_pipeline::{BoardEvent, GenerationOrchestrator, RunPhase};
use storyboard_rate_limit::Throttle;
use test_utils::{
    MockAnalyzer, MockImager, MockResponse, analysis_with, config_with_count, fast_throttle,
    frame,
};

fn orchestrator(analyzer: &Arc<MockAnalyzer>, imager: &Arc<MockImager>) -> GenerationOrchestrator {
    GenerationOrchestrator::new(analyzer.clone(), imager.clone()).with_throttle(fast_throttle())
}

fn is_pipeline_error(err: &storyboard_error::StoryboardError, kind: PipelineErrorKind) -> bool {
    matches!(err.kind(), StoryboardErrorKind::Pipeline(e) if e.kind == kind)
}

#[tokio::test]
async fn test_full_pass_renders_every_scene_in_order() -> anyhow::Result<()> {
    let analyzer = Arc::new(MockAnalyzer::new_success(analysis_with(3)));
    let imager = Arc::new(MockImager::new_success());
    let orch = orchestrator(&analyzer, &imager);

    let summary = orch.start(config_with_count(3)).await?;

    assert_eq!(*summary.phase(), RunPhase::Completed);
    assert_eq!(*summary.total(), 3);
    assert_eq!(*summary.succeeded(), 3);
    assert_eq!(imager.call_count(), 3);

    let scenes = orch.scenes();
    for (i, scene) in scenes.iter().enumerate() {
        assert_eq!(scene.image(), Some(&frame(i)));
        assert!(!scene.is_generating());
    }

    let prompts: Vec<_> = imager
        .requests()
        .iter()
        .map(|r| r.instruction().clone())
        .collect();
    assert!(prompts[0].contains("TARGET SCENE: prompt 0"));
    assert!(prompts[2].contains("TARGET SCENE: prompt 2"));
    assert!(prompts.iter().all(|p| p.contains("ink wash on rice paper")));
    assert!(!orch.is_in_progress());
    Ok(())
}

#[tokio::test]
async fn test_analysis_result_truncated_to_target() -> anyhow::Result<()> {
    let analyzer = Arc::new(MockAnalyzer::new_success(analysis_with(8)));
    let imager = Arc::new(MockImager::new_success());
    let orch = orchestrator(&analyzer, &imager);

    let summary = orch.start(config_with_count(5)).await?;

    assert_eq!(*summary.total(), 5);
    assert_eq!(imager.call_count(), 5);
    let segments: Vec<_> = orch
        .scenes()
        .iter()
        .map(|s| s.script_segment().clone())
        .collect();
    assert_eq!(
        segments,
        vec!["segment 0", "segment 1", "segment 2", "segment 3", "segment 4"]
    );
    assert_eq!(analyzer.requests()[0].target_count().get(), 5);
    Ok(())
}

#[tokio::test]
async fn test_short_analysis_is_not_padded() -> anyhow::Result<()> {
    let analyzer = Arc::new(MockAnalyzer::new_success(analysis_with(2)));
    let imager = Arc::new(MockImager::new_success());
    let orch = orchestrator(&analyzer, &imager);

    let summary = orch.start(config_with_count(6)).await?;

    assert_eq!(*summary.total(), 2);
    assert_eq!(imager.call_count(), 2);
    Ok(())
}

#[tokio::test]
async fn test_image_failure_is_isolated() -> anyhow::Result<()> {
    let analyzer = Arc::new(MockAnalyzer::new_success(analysis_with(5)));
    let imager = Arc::new(MockImager::new_sequence(vec![
        MockResponse::Success,
        MockResponse::Success,
        MockResponse::Error(ImageErrorKind::NoImageReturned),
        MockResponse::Success,
        MockResponse::Success,
    ]));
    let orch = orchestrator(&analyzer, &imager);

    let summary = orch.start(config_with_count(5)).await?;

    assert_eq!(*summary.phase(), RunPhase::Completed);
    assert_eq!(*summary.succeeded(), 4);
    assert_eq!(*summary.failed(), 1);
    assert_eq!(imager.call_count(), 5);

    let scenes = orch.scenes();
    assert!(scenes.iter().all(|s| !s.is_generating()));
    assert!(scenes[2].image().is_none());
    for i in [0, 1, 3, 4] {
        assert_eq!(scenes[i].image(), Some(&frame(i)));
    }
    Ok(())
}

#[tokio::test]
async fn test_cancel_after_second_scene_leaves_rest_pending() -> anyhow::Result<()> {
    let handle: Arc<OnceLock<GenerationOrchestrator>> = Arc::new(OnceLock::new());
    let hook_handle = handle.clone();

    let analyzer = Arc::new(MockAnalyzer::new_success(analysis_with(5)));
    let imager = Arc::new(MockImager::new_success().with_hook(move |call| {
        if call == 1 {
            if let Some(orch) = hook_handle.get() {
                orch.cancel();
            }
        }
    }));
    let orch = orchestrator(&analyzer, &imager);
    let _ = handle.set(orch.clone());

    let summary = orch.start(config_with_count(5)).await?;

    assert_eq!(*summary.phase(), RunPhase::Cancelled);
    assert_eq!(*summary.succeeded(), 2);
    assert_eq!(*summary.unfinished(), 3);
    assert_eq!(imager.call_count(), 2);

    let scenes = orch.scenes();
    assert_eq!(scenes[1].image(), Some(&frame(1)));
    for scene in &scenes[2..] {
        assert!(scene.is_generating());
        assert!(scene.image().is_none());
    }
    assert!(!orch.is_in_progress());
    assert_eq!(*orch.snapshot().phase(), RunPhase::Cancelled);
    Ok(())
}

#[tokio::test]
async fn test_cancel_during_analysis_renders_nothing() -> anyhow::Result<()> {
    let handle: Arc<OnceLock<GenerationOrchestrator>> = Arc::new(OnceLock::new());
    let hook_handle = handle.clone();

    let analyzer = Arc::new(MockAnalyzer::new_success(analysis_with(3)).with_hook(move |_| {
        if let Some(orch) = hook_handle.get() {
            orch.cancel();
        }
    }));
    let imager = Arc::new(MockImager::new_success());
    let orch = orchestrator(&analyzer, &imager);
    let _ = handle.set(orch.clone());

    let summary = orch.start(config_with_count(3)).await?;

    assert_eq!(*summary.phase(), RunPhase::Cancelled);
    assert_eq!(*summary.total(), 3);
    assert_eq!(*summary.succeeded(), 0);
    assert_eq!(*summary.unfinished(), 3);
    assert_eq!(imager.call_count(), 0);
    assert!(orch.scenes().iter().all(|s| s.is_generating() && s.image().is_none()));
    assert!(!orch.is_in_progress());
    Ok(())
}

#[tokio::test]
async fn test_cancel_interrupts_throttle_pause() -> anyhow::Result<()> {
    let analyzer = Arc::new(MockAnalyzer::new_success(analysis_with(3)));
    let imager = Arc::new(MockImager::new_success());
    let orch = GenerationOrchestrator::new(analyzer.clone(), imager.clone())
        .with_throttle(Throttle::new(Duration::from_secs(30)));
    let mut events = orch.subscribe();

    let runner = orch.clone();
    let run = tokio::spawn(async move { runner.start(config_with_count(3)).await });

    loop {
        if let BoardEvent::SceneUpdated { index: 0, .. } = events.recv().await? {
            break;
        }
    }
    orch.cancel();

    let summary = tokio::time::timeout(Duration::from_secs(5), run).await???;
    assert_eq!(*summary.phase(), RunPhase::Cancelled);
    assert_eq!(imager.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_analysis_failure_produces_no_scenes() -> anyhow::Result<()> {
    let analyzer = Arc::new(MockAnalyzer::new_error(AnalysisErrorKind::MissingJson(
        "no braces".to_string(),
    )));
    let imager = Arc::new(MockImager::new_success());
    let orch = orchestrator(&analyzer, &imager);

    let err = orch.start(config_with_count(4)).await.unwrap_err();

    assert!(err.is_analysis_failure());
    assert!(orch.scenes().is_empty());
    assert!(!orch.is_in_progress());
    assert_eq!(*orch.snapshot().phase(), RunPhase::AnalysisFailed);
    assert!(orch.snapshot().artifacts().is_none());
    assert_eq!(imager.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_empty_script_makes_no_calls() -> anyhow::Result<()> {
    let analyzer = Arc::new(MockAnalyzer::new_success(analysis_with(3)));
    let imager = Arc::new(MockImager::new_success());
    let orch = orchestrator(&analyzer, &imager);
    let mut events = orch.subscribe();

    let config = GenerationConfig::builder().script("  \n\t ").build()?;
    let err = orch.start(config).await.unwrap_err();

    assert!(err.is_input_invalid());
    assert_eq!(analyzer.call_count(), 0);
    assert_eq!(imager.call_count(), 0);
    assert_eq!(*orch.snapshot().phase(), RunPhase::Idle);
    assert!(events.try_recv().is_err());
    Ok(())
}

#[tokio::test]
async fn test_zero_scene_analysis_completes_empty() -> anyhow::Result<()> {
    let analyzer = Arc::new(MockAnalyzer::new_success(analysis_with(0)));
    let imager = Arc::new(MockImager::new_success());
    let orch = orchestrator(&analyzer, &imager);

    let summary = orch.start(config_with_count(3)).await?;

    assert_eq!(*summary.phase(), RunPhase::Completed);
    assert_eq!(*summary.total(), 0);
    assert_eq!(imager.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_failed_regenerations_keep_previous_image() -> anyhow::Result<()> {
    let analyzer = Arc::new(MockAnalyzer::new_success(analysis_with(1)));
    let imager = Arc::new(MockImager::new_sequence(vec![
        MockResponse::Success,
        MockResponse::Error(ImageErrorKind::Request("503".to_string())),
        MockResponse::Error(ImageErrorKind::NoImageReturned),
    ]));
    let orch = orchestrator(&analyzer, &imager);
    orch.start(config_with_count(1)).await?;
    let before = orch.scenes()[0].clone();
    assert_eq!(before.image(), Some(&frame(0)));

    let first = orch.regenerate(0).await.unwrap_err();
    let second = orch.regenerate(0).await.unwrap_err();

    assert!(first.is_image_failure());
    assert!(second.is_image_failure());
    let after = orch.scenes()[0].clone();
    assert_eq!(after, before);
    assert_eq!(imager.call_count(), 3);
    Ok(())
}

#[tokio::test]
async fn test_regeneration_replaces_image_on_success() -> anyhow::Result<()> {
    let analyzer = Arc::new(MockAnalyzer::new_success(analysis_with(2)));
    let imager = Arc::new(MockImager::new_sequence(vec![
        MockResponse::Success,
        MockResponse::Error(ImageErrorKind::NoImageReturned),
        MockResponse::Success,
    ]));
    let orch = orchestrator(&analyzer, &imager);
    orch.start(config_with_count(2)).await?;
    let untouched = orch.scenes()[0].clone();
    assert!(orch.scenes()[1].image().is_none());

    let scene = orch.regenerate(1).await?;

    assert_eq!(scene.image(), Some(&frame(2)));
    assert!(!scene.is_generating());
    assert_eq!(orch.scenes()[1], scene);
    assert_eq!(orch.scenes()[0], untouched);
    Ok(())
}

#[tokio::test]
async fn test_regeneration_uses_current_config_and_retained_artifacts() -> anyhow::Result<()> {
    let analyzer = Arc::new(MockAnalyzer::new_success(analysis_with(2)));
    let imager = Arc::new(MockImager::new_success());
    let orch = orchestrator(&analyzer, &imager);
    orch.start(config_with_count(2)).await?;

    let mut changed = config_with_count(2);
    changed.set_aspect_ratio(AspectRatio::Landscape);
    orch.reconfigure(changed);

    let id = *orch.scenes()[1].id();
    orch.regenerate_scene(id).await?;

    let requests = imager.requests();
    let last = requests.last().expect("regeneration request");
    assert_eq!(*requests[0].aspect_ratio(), AspectRatio::Portrait);
    assert_eq!(*last.aspect_ratio(), AspectRatio::Landscape);
    assert!(last.instruction().contains("TARGET SCENE: prompt 1"));
    assert!(last.instruction().contains("ink wash on rice paper"));
    assert!(last.instruction().contains("sharp jaw, silver bob cut"));
    Ok(())
}

#[tokio::test]
async fn test_regenerate_requires_prior_analysis() -> anyhow::Result<()> {
    let analyzer = Arc::new(MockAnalyzer::new_error(AnalysisErrorKind::Request(
        "timeout".to_string(),
    )));
    let imager = Arc::new(MockImager::new_success());
    let orch = orchestrator(&analyzer, &imager);

    let before_any = orch.regenerate(0).await.unwrap_err();
    assert!(is_pipeline_error(&before_any, PipelineErrorKind::NoAnalysis));

    let _ = orch.start(config_with_count(2)).await;
    let after_failure = orch.regenerate(0).await.unwrap_err();
    assert!(is_pipeline_error(&after_failure, PipelineErrorKind::NoAnalysis));
    assert_eq!(imager.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_regenerate_out_of_range() -> anyhow::Result<()> {
    let analyzer = Arc::new(MockAnalyzer::new_success(analysis_with(2)));
    let imager = Arc::new(MockImager::new_success());
    let orch = orchestrator(&analyzer, &imager);
    orch.start(config_with_count(2)).await?;

    let err = orch.regenerate(7).await.unwrap_err();

    assert!(is_pipeline_error(
        &err,
        PipelineErrorKind::SceneIndexOutOfRange(7)
    ));
    assert_eq!(imager.call_count(), 2);
    Ok(())
}

#[tokio::test]
async fn test_second_start_rejected_while_running() -> anyhow::Result<()> {
    let analyzer = Arc::new(MockAnalyzer::new_success(analysis_with(3)));
    let imager = Arc::new(MockImager::new_success());
    let orch = GenerationOrchestrator::new(analyzer.clone(), imager.clone())
        .with_throttle(Throttle::new(Duration::from_secs(30)));
    let mut events = orch.subscribe();

    let runner = orch.clone();
    let run = tokio::spawn(async move { runner.start(config_with_count(3)).await });

    loop {
        if let BoardEvent::ScenesPublished { .. } = events.recv().await? {
            break;
        }
    }

    let err = orch.start(config_with_count(3)).await.unwrap_err();
    assert!(is_pipeline_error(&err, PipelineErrorKind::RunInProgress));
    assert_eq!(analyzer.call_count(), 1);

    orch.cancel();
    let summary = tokio::time::timeout(Duration::from_secs(5), run).await???;
    assert_eq!(*summary.phase(), RunPhase::Cancelled);
    Ok(())
}

#[tokio::test]
async fn test_regenerate_unreached_scene_during_pass() -> anyhow::Result<()> {
    let analyzer = Arc::new(MockAnalyzer::new_success(analysis_with(3)));
    let imager = Arc::new(MockImager::new_success());
    let orch = GenerationOrchestrator::new(analyzer.clone(), imager.clone())
        .with_throttle(Throttle::new(Duration::from_secs(30)));
    let mut events = orch.subscribe();

    let runner = orch.clone();
    let run = tokio::spawn(async move { runner.start(config_with_count(3)).await });

    loop {
        if let BoardEvent::SceneUpdated { index: 0, .. } = events.recv().await? {
            break;
        }
    }

    let scene = orch.regenerate(2).await?;
    assert_eq!(scene.image(), Some(&frame(1)));
    assert!(orch.is_in_progress());
    assert!(orch.scenes()[1].is_generating());

    orch.cancel();
    let summary = tokio::time::timeout(Duration::from_secs(5), run).await???;
    assert_eq!(*summary.phase(), RunPhase::Cancelled);
    assert_eq!(*summary.succeeded(), 2);
    assert_eq!(*summary.unfinished(), 1);
    Ok(())
}

#[tokio::test]
async fn test_new_run_replaces_previous_scenes() -> anyhow::Result<()> {
    let analyzer = Arc::new(MockAnalyzer::new_success(analysis_with(2)));
    let imager = Arc::new(MockImager::new_success());
    let orch = orchestrator(&analyzer, &imager);

    orch.start(config_with_count(2)).await?;
    let first: Vec<_> = orch.scenes().iter().map(|s| *s.id()).collect();
    orch.start(config_with_count(2)).await?;
    let second: Vec<_> = orch.scenes().iter().map(|s| *s.id()).collect();

    assert_eq!(second.len(), 2);
    assert!(first.iter().all(|id| !second.contains(id)));
    Ok(())
}

#[tokio::test]
async fn test_events_follow_run_progress() -> anyhow::Result<()> {
    let analyzer = Arc::new(MockAnalyzer::new_success(analysis_with(2)));
    let imager = Arc::new(MockImager::new_sequence(vec![
        MockResponse::Success,
        MockResponse::Error(ImageErrorKind::NoImageReturned),
    ]));
    let orch = orchestrator(&analyzer, &imager);
    let mut events = orch.subscribe();

    orch.start(config_with_count(2)).await?;

    assert_eq!(events.try_recv()?, BoardEvent::RunStarted);
    assert_eq!(
        events.try_recv()?,
        BoardEvent::AnalysisCompleted { scene_count: 2 }
    );
    match events.try_recv()? {
        BoardEvent::ScenesPublished { scenes } => {
            assert_eq!(scenes.len(), 2);
            assert!(scenes.iter().all(|s| s.is_generating() && s.image().is_none()));
        }
        other => panic!("expected placeholders, got {other:?}"),
    }
    match events.try_recv()? {
        BoardEvent::SceneUpdated { index, scene } => {
            assert_eq!(index, 0);
            assert_eq!(scene.image(), Some(&frame(0)));
        }
        other => panic!("expected scene 0 update, got {other:?}"),
    }
    match events.try_recv()? {
        BoardEvent::SceneUpdated { index, scene } => {
            assert_eq!(index, 1);
            assert!(scene.image().is_none());
            assert!(!scene.is_generating());
        }
        other => panic!("expected scene 1 update, got {other:?}"),
    }
    assert_eq!(
        events.try_recv()?,
        BoardEvent::RunFinished {
            phase: RunPhase::Completed
        }
    );
    Ok(())
}

#[tokio::test]
async fn test_analysis_failure_event() -> anyhow::Result<()> {
    let analyzer = Arc::new(MockAnalyzer::new_error(AnalysisErrorKind::Schema(
        "missing field `scenes`".to_string(),
    )));
    let imager = Arc::new(MockImager::new_success());
    let orch = orchestrator(&analyzer, &imager);
    let mut events = orch.subscribe();

    let _ = orch.start(config_with_count(2)).await;

    assert_eq!(events.try_recv()?, BoardEvent::RunStarted);
    match events.try_recv()? {
        BoardEvent::AnalysisFailed { message } => assert!(message.contains("scenes")),
        other => panic!("expected analysis failure, got {other:?}"),
    }
    assert_eq!(
        events.try_recv()?,
        BoardEvent::RunFinished {
            phase: RunPhase::AnalysisFailed
        }
    );
    Ok(())
}
