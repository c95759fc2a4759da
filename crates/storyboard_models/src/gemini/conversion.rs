//! Conversions between pipeline payloads and Gemini DTOs.

use super::GeminiResult;
use super::dto::{GenerateContentRequest, GenerateContentResponse, GenerationConfig, InlineData, Part};
use storyboard_core::{AnalysisRequest, ImagePayload, ImageRequest};
use storyboard_error::{GeminiError, GeminiErrorKind};

/// Instruction text first, then the reference images in order.
fn parts_for(instruction: &str, images: &[ImagePayload]) -> Vec<Part> {
    std::iter::once(Part::from_text(instruction))
        .chain(
            images
                .iter()
                .map(|image| Part::from_inline(InlineData::new(image.mime(), image.data()))),
        )
        .collect()
}

/// Body for a structured analysis call.
pub(crate) fn analysis_body(request: &AnalysisRequest) -> GenerateContentRequest {
    GenerateContentRequest::new(
        parts_for(request.instruction(), request.images()),
        GenerationConfig::json(request.response_schema().clone()),
    )
}

/// Body for a frame rendering call.
pub(crate) fn image_body(request: &ImageRequest) -> GenerateContentRequest {
    GenerateContentRequest::new(
        parts_for(request.instruction(), request.images()),
        GenerationConfig::image(request.aspect_ratio().to_string()),
    )
}

/// Parts of the first candidate; blocked or empty responses are errors.
fn answer_parts(response: &GenerateContentResponse) -> GeminiResult<&[Part]> {
    if let Some(reason) = response
        .prompt_feedback()
        .as_ref()
        .and_then(|feedback| feedback.block_reason().clone())
    {
        return Err(GeminiError::new(GeminiErrorKind::Blocked(reason)));
    }

    let candidate = response
        .candidates()
        .first()
        .ok_or_else(|| GeminiError::new(GeminiErrorKind::NoCandidates))?;

    match candidate.content() {
        Some(content) => Ok(content.parts()),
        None => Err(GeminiError::new(GeminiErrorKind::InvalidResponse(format!(
            "candidate has no content (finish reason: {})",
            candidate.finish_reason().as_deref().unwrap_or("unknown")
        )))),
    }
}

/// Concatenated answer text, skipping reasoning parts.
pub(crate) fn response_text(response: &GenerateContentResponse) -> GeminiResult<String> {
    let text: String = answer_parts(response)?
        .iter()
        .filter(|part| !part.is_thought())
        .filter_map(|part| part.text().as_deref())
        .collect();

    if text.trim().is_empty() {
        return Err(GeminiError::new(GeminiErrorKind::InvalidResponse(
            "response contained no text".to_string(),
        )));
    }
    Ok(text)
}

/// First inline image of the answer, if any.
pub(crate) fn response_image(response: &GenerateContentResponse) -> GeminiResult<Option<InlineData>> {
    Ok(answer_parts(response)?
        .iter()
        .filter(|part| !part.is_thought())
        .filter_map(|part| part.inline_data().clone())
        .find(|data| data.mime_type().starts_with("image/")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyboard_core::{AspectRatio, TargetCount};

    fn parse(json: &str) -> GenerateContentResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn analysis_body_requests_json_with_images_after_text() {
        let style = ImagePayload::from_bytes("image/png", b"s").unwrap();
        let request = AnalysisRequest::new(
            "direct this",
            vec![style.clone()],
            TargetCount::clamped(3),
            serde_json::json!({"type": "OBJECT"}),
        );

        let body = serde_json::to_value(analysis_body(&request)).unwrap();
        let parts = &body["contents"][0]["parts"];
        assert_eq!(parts[0]["text"], "direct this");
        assert_eq!(parts[1]["inlineData"]["mimeType"], "image/png");
        assert_eq!(parts[1]["inlineData"]["data"], style.data());
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn image_body_carries_aspect_ratio() {
        let request = ImageRequest::new("frame", AspectRatio::Social, Vec::new());
        let body = serde_json::to_value(image_body(&request)).unwrap();
        assert_eq!(body["generationConfig"]["imageConfig"]["aspectRatio"], "3:4");
        assert_eq!(body["contents"][0]["parts"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn text_skips_thoughts() {
        let response = parse(
            r#"{"candidates":[{"content":{"role":"model","parts":[
                {"text":"thinking...","thought":true},
                {"text":"{\"scenes\":[]}"}
            ]},"finishReason":"STOP"}]}"#,
        );
        assert_eq!(response_text(&response).unwrap(), "{\"scenes\":[]}");
    }

    #[test]
    fn blocked_prompt_is_an_error() {
        let response = parse(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#);
        let err = response_text(&response).unwrap_err();
        assert_eq!(err.kind, GeminiErrorKind::Blocked("SAFETY".to_string()));
    }

    #[test]
    fn no_candidates_is_an_error() {
        let err = response_image(&parse("{}")).unwrap_err();
        assert_eq!(err.kind, GeminiErrorKind::NoCandidates);
    }

    #[test]
    fn text_only_answer_has_no_image() {
        let response = parse(
            r#"{"candidates":[{"content":{"parts":[{"text":"I can't draw that."}]}}]}"#,
        );
        assert!(response_image(&response).unwrap().is_none());
    }

    #[test]
    fn finds_inline_image() {
        let response = parse(
            r#"{"candidates":[{"content":{"parts":[
                {"text":"Here you go"},
                {"inlineData":{"mimeType":"image/png","data":"iVBORw0KGgo="}}
            ]}}]}"#,
        );
        let image = response_image(&response).unwrap().unwrap();
        assert_eq!(image.mime_type(), "image/png");
        assert_eq!(image.data(), "iVBORw0KGgo=");
    }
}
