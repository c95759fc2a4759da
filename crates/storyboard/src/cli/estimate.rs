//! Estimate command handler.

use super::commands::ScriptArgs;
use super::generate::{parse_detail, read_script};
use storyboard::estimate_scene_count;

/// Print the scene count a `generate` run would ask for.
pub fn run_estimate(
    script: &ScriptArgs,
    detail: &str,
    scenes: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let script = read_script(script)?;
    let detail = parse_detail(detail)?;
    let length = script.chars().count();
    let target = estimate_scene_count(length, detail, f64::from(scenes));

    tracing::debug!(script_len = length, detail = %detail, manual = scenes, "Estimated scene count");
    println!("{} characters, {} ({}): {} scenes", length, detail, detail.description(), target);
    Ok(())
}
