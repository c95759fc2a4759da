//! Per-scene frame instructions for the imager.

use storyboard_core::{AspectRatio, ImagePayload, ImageRequest, StyleArtifacts};

/// Rendering rules every frame must follow.
const RENDERING_RULES: &str = "# STRICT DIRECTIVE - DYNAMIC CHARACTER RENDERING:\n\
1. IDENTITY ONLY: If a character image is provided, extract ONLY the identity (face shape, eye details, hair). \
Never copy its pose or facial expression.\n\
2. NEW POSE & EXPRESSION: The character MUST perform the action described in \"TARGET SCENE\", not the pose of the reference image.\n\
3. NEW CLOTHING: Unless the script explicitly calls for the reference clothing, generate new attire suitable for the current scene and context.\n\
4. NEW BACKGROUND: Do not use the background from the reference image.\n\
5. STYLE HARMONY: The entire frame, including the character, must be rendered in the exact artistic medium described in \"ARTISTIC STYLE\".\n\
6. Ensure professional cinematic lighting and high-end visual production quality.\n";

/// Build the image request for one scene.
///
/// Reference images follow the same style-then-character order as the analysis
/// request.
///
/// # Examples
///
/// ```
/// use storyboard_core::{AspectRatio, StyleArtifacts};
/// use storyboard_director::build_image_request;
///
/// let artifacts = StyleArtifacts {
///     style_guide: "gouache, flat shadows".into(),
///     character_profile: "oval face, bob haircut".into(),
/// };
/// let request = build_image_request(
///     "A girl runs through the rain",
///     &artifacts,
///     AspectRatio::Square,
///     None,
///     None,
/// );
/// assert!(request.instruction().contains("TARGET SCENE: A girl runs through the rain"));
/// assert!(request.images().is_empty());
/// ```
pub fn build_image_request(
    prompt_english: &str,
    artifacts: &StyleArtifacts,
    aspect_ratio: AspectRatio,
    style_image: Option<&ImagePayload>,
    character_image: Option<&ImagePayload>,
) -> ImageRequest {
    let mut text = String::new();

    text.push_str("MASTER STORYBOARD FRAME GENERATION:\n");
    text.push_str(&format!("- TARGET SCENE: {}\n", prompt_english));
    text.push_str(&format!("- ARTISTIC STYLE: {}\n", artifacts.style_guide));
    text.push_str(&format!(
        "- CHARACTER IDENTITY PROFILE: {}\n",
        artifacts.character_profile
    ));
    text.push_str(&format!("- ASPECT RATIO: {}\n\n", aspect_ratio));
    text.push_str(RENDERING_RULES);

    let images = style_image
        .into_iter()
        .chain(character_image)
        .cloned()
        .collect();

    ImageRequest::new(text, aspect_ratio, images)
}
