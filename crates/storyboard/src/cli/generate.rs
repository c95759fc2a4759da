//! Generate command handler.

use super::commands::{GenerateArgs, ScriptArgs};
use std::str::FromStr;
use std::sync::Arc;
use storyboard::{
    AspectRatio, BoardEvent, ExportBundle, FocusMode, GeminiAnalyzer, GeminiClient, GeminiImager,
    GenerationConfig, GenerationOrchestrator, ImagePayload, InputError, InputErrorKind,
    RunSummary, SceneDetail, StoryboardResult, StoryboardSettings,
};
use tokio::sync::broadcast::error::RecvError;

/// Read the script from a file or take it inline.
pub fn read_script(args: &ScriptArgs) -> StoryboardResult<String> {
    match (&args.script, &args.text) {
        (Some(path), _) => Ok(std::fs::read_to_string(path).map_err(|e| {
            InputError::new(InputErrorKind::FileRead {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        })?),
        (None, Some(text)) => Ok(text.clone()),
        (None, None) => Ok(String::new()),
    }
}

/// Parse a density name.
pub fn parse_detail(value: &str) -> Result<SceneDetail, Box<dyn std::error::Error>> {
    SceneDetail::from_str(value)
        .map_err(|_| format!("Unknown scene detail '{}' (essential, standard, detailed)", value).into())
}

/// Assemble the run configuration from command-line options.
pub fn build_config(
    args: &GenerateArgs,
    script: String,
) -> Result<GenerationConfig, Box<dyn std::error::Error>> {
    let aspect_ratio = AspectRatio::from_str(&args.aspect_ratio).map_err(|_| {
        format!(
            "Unknown aspect ratio '{}' (9:16, 16:9, 3:4, 4:3, 1:1)",
            args.aspect_ratio
        )
    })?;
    let focus_mode = FocusMode::from_str(&args.focus)
        .map_err(|_| format!("Unknown focus mode '{}' (auto, character, script)", args.focus))?;

    let mut builder = GenerationConfig::builder();
    builder
        .script(script)
        .aspect_ratio(aspect_ratio)
        .scene_detail(parse_detail(&args.detail)?)
        .target_scene_count(args.scenes)
        .non_humanoid(args.non_humanoid)
        .focus_mode(focus_mode);

    if let Some(id) = &args.preset {
        builder.preset(id)?;
    }
    if let Some(style) = &args.custom_style {
        builder.custom_style(style.as_str());
    }
    if let Some(character) = &args.character {
        builder.main_character(character.as_str());
    }
    if let Some(instructions) = &args.instructions {
        builder.custom_instructions(instructions.as_str());
    }
    if let Some(path) = &args.style_image {
        builder.style_image(ImagePayload::from_path(path)?);
    }
    if let Some(path) = &args.character_image {
        builder.character_image(ImagePayload::from_path(path)?);
    }

    let mut config = builder.build()?;
    for tag in &args.tags {
        config.toggle_prompt_tag(tag);
    }
    Ok(config)
}

fn print_summary(summary: &RunSummary) {
    println!(
        "Run {}: {} scenes, {} rendered, {} failed, {} unfinished",
        summary.phase(),
        summary.total(),
        summary.succeeded(),
        summary.failed(),
        summary.unfinished()
    );
}

/// Analyze the script, render every scene and write the requested exports.
pub async fn run_generate(args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let script = read_script(&args.script)?;
    let config = build_config(&args, script)?;
    config.validate()?;

    let settings = match &args.config {
        Some(path) => StoryboardSettings::from_file(path)?,
        None => StoryboardSettings::load()?,
    };

    let client = GeminiClient::from_settings(&settings)?;
    let tier = args.tier.as_deref();
    let orchestrator = GenerationOrchestrator::new(
        Arc::new(GeminiAnalyzer::new(client.clone(), &settings, tier)),
        Arc::new(GeminiImager::new(client, &settings, tier)),
    )
    .with_settings(&settings.pipeline);

    tracing::info!(
        analyzer = settings.gemini.analyzer_model().as_str(),
        imager = settings.gemini.imager_model().as_str(),
        style = config.effective_style(),
        aspect_ratio = %config.aspect_ratio(),
        "Starting storyboard generation"
    );

    let mut events = orchestrator.subscribe();
    let printer = tokio::spawn(async move {
        let mut total = 0usize;
        loop {
            match events.recv().await {
                Ok(BoardEvent::AnalysisCompleted { scene_count }) => {
                    total = scene_count;
                    println!("Analysis complete: {} scenes", scene_count);
                }
                Ok(BoardEvent::SceneUpdated { index, scene }) if !scene.is_generating() => {
                    let outcome = if scene.image().is_some() { "rendered" } else { "failed" };
                    println!("Scene {}/{} {}", index + 1, total, outcome);
                }
                Ok(BoardEvent::RunFinished { .. }) | Err(RecvError::Closed) => break,
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "Progress printer lagged");
                }
            }
        }
    });

    let canceller = orchestrator.clone();
    let ctrl_c = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!("Cancelling after the current scene...");
            canceller.cancel();
        }
    });

    let result = orchestrator.start(config).await;
    ctrl_c.abort();
    match &result {
        Ok(_) => {
            if let Err(e) = printer.await {
                tracing::debug!(error = %e, "Progress printer stopped");
            }
        }
        Err(_) => printer.abort(),
    }
    let mut summary = result?;
    print_summary(&summary);

    if args.regenerate_failed && *summary.failed() > 0 {
        let failed: Vec<usize> = orchestrator
            .scenes()
            .iter()
            .enumerate()
            .filter(|(_, s)| s.image().is_none() && !s.is_generating())
            .map(|(i, _)| i)
            .collect();
        for index in failed {
            match orchestrator.regenerate(index).await {
                Ok(_) => println!("Scene {} regenerated", index + 1),
                Err(e) => tracing::warn!(scene_index = index, error = %e, "Regeneration failed"),
            }
        }
        summary = RunSummary::from_scenes(*summary.phase(), &orchestrator.scenes());
        print_summary(&summary);
    }

    if !args.export.is_empty() {
        let bundle = ExportBundle::new(orchestrator.scenes());
        for path in bundle.write_to_dir(&args.out, &args.export).await? {
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}
