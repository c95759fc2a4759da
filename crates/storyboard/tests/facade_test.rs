//! End-to-end checks through the facade re-exports, without network access.

use storyboard::{
    AnalysisResult, ExportKind, GenerationConfig, SceneDetail, ScenePlan, StyleArtifacts,
    analysis_response_schema, build_analysis_request, build_image_request, extract_json,
    parse_json, report_html, script_text, target_count_for,
};

#[test]
fn test_script_to_plan_to_exports() -> anyhow::Result<()> {
    let config = GenerationConfig::builder()
        .script("x".repeat(1000))
        .scene_detail(SceneDetail::Standard)
        .preset("ghibli")?
        .build()?;
    let target = target_count_for(&config);
    assert_eq!(target.get(), 4);

    let request = build_analysis_request(&config, target, "Korean");
    assert!(request.instruction().contains("지브리풍"));
    assert_eq!(request.response_schema(), &analysis_response_schema());

    let answer = r#"Here is the storyboard:
```json
{
  "scenes": [
    {"scriptSegment": "One", "promptEnglish": "Shot one", "promptLocalized": "하나"},
    {"scriptSegment": "Two", "promptEnglish": "Shot two", "promptLocalized": "둘"}
  ],
  "styleGuide": "hand-painted backgrounds",
  "characterProfile": "freckles, auburn braid"
}
```"#;
    let result: AnalysisResult = parse_json(&extract_json(answer)?)?;
    let plan = ScenePlan::materialize(result, target);
    assert_eq!(plan.len(), 2);
    assert_eq!(
        plan.artifacts(),
        &StyleArtifacts {
            style_guide: "hand-painted backgrounds".to_string(),
            character_profile: "freckles, auburn braid".to_string(),
        }
    );

    let frame = build_image_request(
        plan.scenes()[0].prompt_english(),
        plan.artifacts(),
        *config.aspect_ratio(),
        None,
        None,
    );
    assert!(frame.instruction().contains("hand-painted backgrounds"));

    assert_eq!(script_text(plan.scenes()), "[Scene 1]\nOne\n\n[Scene 2]\nTwo");
    assert!(report_html(plan.scenes()).contains("Shot two"));
    assert_eq!(ExportKind::Descriptions.file_name(7), "descriptions_7.txt");
    Ok(())
}
