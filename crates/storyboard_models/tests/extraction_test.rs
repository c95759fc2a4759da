use storyboard_core::AnalysisResult;
use storyboard_models::{extract_json, parse_json};

#[test]
fn parses_fenced_analysis_with_prose() -> anyhow::Result<()> {
    let response = r#"Of course! Here is your storyboard.

```json
{
  "scenes": [
    {"scriptSegment": "She opens the door.", "promptEnglish": "Medium shot, door creaks open", "promptLocalized": "문이 열린다"},
    {"scriptSegment": "Snow falls.", "promptEnglish": "Wide shot, heavy snow", "promptLocalized": "눈이 내린다"}
  ],
  "characterProfile": "heart-shaped face, long braided hair",
  "styleGuide": "muted gouache"
}
```
Let me know if you need changes."#;

    let json = extract_json(response)?;
    let result: AnalysisResult = parse_json(&json)?;
    assert_eq!(result.scenes.len(), 2);
    assert_eq!(result.scenes[1].prompt_localized, "눈이 내린다");
    assert_eq!(result.artifacts.character_profile, "heart-shaped face, long braided hair");
    Ok(())
}

#[test]
fn accepts_legacy_field_names() -> anyhow::Result<()> {
    let json = r#"{
        "scenes": [{"scriptSegment": "a", "videoPromptEn": "b", "videoPromptKo": "c"}],
        "characterDescription": "d",
        "globalStyleGuide": "e"
    }"#;
    let result: AnalysisResult = parse_json(&extract_json(json)?)?;
    assert_eq!(result.scenes[0].prompt_english, "b");
    assert_eq!(result.artifacts.style_guide, "e");
    Ok(())
}

#[test]
fn schema_mismatch_is_analysis_failure() -> anyhow::Result<()> {
    let json = extract_json(r#"{"panels": []}"#)?;
    let err = parse_json::<AnalysisResult>(&json).unwrap_err();
    assert!(err.is_analysis_failure());
    Ok(())
}

#[test]
fn scene_missing_prompt_is_analysis_failure() -> anyhow::Result<()> {
    let json = extract_json(r#"{"scenes": [{"scriptSegment": "x"}]}"#)?;
    assert!(parse_json::<AnalysisResult>(&json).unwrap_err().is_analysis_failure());
    Ok(())
}
