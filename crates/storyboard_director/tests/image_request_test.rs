use storyboard_core::{AspectRatio, ImagePayload, StyleArtifacts};
use storyboard_director::build_image_request;

fn artifacts() -> StyleArtifacts {
    StyleArtifacts {
        style_guide: "thick impasto oil, warm palette".into(),
        character_profile: "square jaw, green eyes, curly red hair".into(),
    }
}

#[test]
fn encodes_scene_style_and_identity() {
    let request = build_image_request(
        "He climbs the lighthouse stairs",
        &artifacts(),
        AspectRatio::Portrait,
        None,
        None,
    );
    let text = request.instruction();

    assert!(text.contains("TARGET SCENE: He climbs the lighthouse stairs"));
    assert!(text.contains("ARTISTIC STYLE: thick impasto oil, warm palette"));
    assert!(text.contains("CHARACTER IDENTITY PROFILE: square jaw, green eyes, curly red hair"));
    assert_eq!(*request.aspect_ratio(), AspectRatio::Portrait);
}

#[test]
fn carries_all_rendering_rules() {
    let request = build_image_request("x", &artifacts(), AspectRatio::Square, None, None);
    let text = request.instruction();

    for rule in [
        "IDENTITY ONLY",
        "NEW POSE & EXPRESSION",
        "NEW CLOTHING",
        "NEW BACKGROUND",
        "STYLE HARMONY",
        "cinematic lighting",
    ] {
        assert!(text.contains(rule), "missing rule {rule}");
    }
    assert!(text.contains("Never copy its pose or facial expression"));
}

#[test]
fn references_keep_style_then_character_order() -> anyhow::Result<()> {
    let style = ImagePayload::from_bytes("image/png", b"s")?;
    let character = ImagePayload::from_bytes("image/jpeg", b"c")?;

    let request = build_image_request(
        "x",
        &artifacts(),
        AspectRatio::Classic,
        Some(&style),
        Some(&character),
    );
    assert_eq!(request.images(), &vec![style.clone(), character.clone()]);

    let only_style = build_image_request("x", &artifacts(), AspectRatio::Classic, Some(&style), None);
    assert_eq!(only_style.images(), &vec![style]);
    Ok(())
}
