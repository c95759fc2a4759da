//! Director instructions for the script analysis call.

use crate::analysis_response_schema;
use storyboard_core::{AnalysisRequest, FocusMode, GenerationConfig, TargetCount};
use tracing::{debug, instrument};

/// Build the analysis request for one run.
///
/// The instruction text embeds the effective style label, the style and character
/// extraction rules, the optional news, focus, character-note and custom
/// directing blocks, the aspect ratio, the exact scene count, the script and the
/// expected output shape. Reference images are attached style first, then
/// character, and only when present.
#[instrument(skip(config, target), fields(target_count = target.get(), script_len = config.script_len()))]
pub fn build_analysis_request(
    config: &GenerationConfig,
    target: TargetCount,
    localized_language: &str,
) -> AnalysisRequest {
    let mut text = String::new();

    text.push_str("# ROLE: Visual Director & Style Analyst\n");
    text.push_str(
        "# TASK: Analyze the script and the provided reference images to create a storyboard.\n\n",
    );

    push_reference_list(&mut text, config);

    text.push_str("# STYLE ANALYSIS (HIGHEST PRIORITY):\n");
    text.push_str(&format!("- Requested style: {}\n", config.effective_style()));
    text.push_str(
        "- If a \"Style Reference\" image is attached, IGNORE the requested style name and extract the \
         exact artistic medium, brush strokes, line weight, color palette and lighting from the image.\n",
    );
    text.push_str(
        "- Write a detailed \"styleGuide\" describing the medium and texture every frame must share.\n\n",
    );

    if config.character_image().is_some() {
        text.push_str("# CHARACTER IDENTITY ANALYSIS:\n");
        text.push_str(
            "- A \"Character Reference\" image is attached. Describe the face shape, eye color and shape, \
             hair texture, length and color, and any unique facial markers in \"characterProfile\".\n",
        );
        text.push_str(
            "- Use this profile for consistency while letting the character perform new actions.\n\n",
        );
    }

    let notes = config.main_character().trim();
    if !notes.is_empty() {
        text.push_str("# MAIN CHARACTER NOTES:\n");
        text.push_str(&format!("{}\n", notes));
        text.push_str("- Keep these traits consistent in every scene.\n\n");
    }

    text.push_str("# SCENE DIRECTING:\n");
    text.push_str(&format!("- Screen ratio: {}\n\n", config.aspect_ratio()));

    if *config.non_humanoid() {
        text.push_str("# STYLE MODE: NEWS & ECONOMY\n");
        text.push_str(
            "- Focus on professional presentation, charts, infographics and realistic office or studio settings.\n\n",
        );
    }

    text.push_str(focus_block(*config.focus_mode()));

    let custom = config.custom_instructions().trim();
    if !custom.is_empty() {
        text.push_str("# CRITICAL USER DIRECTING PARAMETERS:\n");
        text.push_str(&format!("{}\n", custom));
        text.push_str(
            "- These instructions MUST be reflected in every scene description and visual prompt.\n\n",
        );
    }

    text.push_str("# CONSTRAINTS:\n");
    text.push_str(&format!("- Split into exactly {} scenes.\n", target));
    text.push_str("- Group related sentences. No excessive cutting.\n");
    text.push_str("- Each \"promptEnglish\" must be a full cinematic description in English.\n");
    text.push_str(&format!(
        "- Each \"promptLocalized\" is a short directing note written in {}.\n\n",
        localized_language
    ));

    text.push_str("# SCRIPT:\n");
    text.push_str(&format!("{}\n\n", config.script()));

    text.push_str("# OUTPUT SCHEMA (JSON):\n");
    text.push_str(&format!(
        r#"{{
  "scenes": [
    {{
      "scriptSegment": "Script lines covered by the scene",
      "promptEnglish": "Detailed cinematic prompt in English",
      "promptLocalized": "Directing note in {}"
    }}
  ],
  "characterProfile": "Face and hair identity profile extracted from the reference image",
  "styleGuide": "Detailed artistic medium and texture guide"
}}
"#,
        localized_language
    ));

    let images = config.reference_images();
    debug!(images = images.len(), chars = text.len(), "Built analysis request");

    AnalysisRequest::new(text, images, target, analysis_response_schema())
}

fn push_reference_list(text: &mut String, config: &GenerationConfig) {
    let mut labels = Vec::new();
    if config.style_image().is_some() {
        labels.push("Style Reference");
    }
    if config.character_image().is_some() {
        labels.push("Character Reference");
    }
    if labels.is_empty() {
        return;
    }

    text.push_str("# ATTACHED REFERENCES (in order):\n");
    for (i, label) in labels.iter().enumerate() {
        text.push_str(&format!("- Image {}: {}\n", i + 1, label));
    }
    text.push('\n');
}

fn focus_block(focus: FocusMode) -> &'static str {
    match focus {
        FocusMode::Auto => {
            "# PRODUCTION FOCUS: AUTO\n\
             - Decide the best visual focus for each scene: the character when the line is about a person, \
             the information when the line explains facts.\n\n"
        }
        FocusMode::Character => {
            "# PRODUCTION FOCUS: CHARACTER NARRATIVE\n\
             - Frame every scene around the character: expressions, gestures and relationships drive the shot.\n\n"
        }
        FocusMode::Script => {
            "# PRODUCTION FOCUS: SCRIPT & INFORMATION\n\
             - Visualize the content of each line: objects, places, data and symbols take priority over people.\n\n"
        }
    }
}
