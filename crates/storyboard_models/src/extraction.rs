//! Extract structured data from model text.
//!
//! Structured-output mode normally returns bare JSON, but models still wrap it
//! in Markdown fences or prepend prose now and then.

use storyboard_error::{AnalysisError, AnalysisErrorKind, StoryboardResult};

/// Extract the JSON object from a response that may contain Markdown or prose.
///
/// Strategies, in order:
/// 1. Fenced code block (```` ```json ```` or a bare fence)
/// 2. First balanced `{ ... }`
///
/// # Errors
///
/// Returns an analysis error if no JSON object is found.
///
/// # Examples
///
/// ```
/// use storyboard_models::extract_json;
///
/// let response = "Here is the storyboard:\n```json\n{\"scenes\": []}\n```\n";
/// assert_eq!(extract_json(response).unwrap(), "{\"scenes\": []}");
/// ```
pub fn extract_json(response: &str) -> StoryboardResult<String> {
    if let Some(json) = extract_from_code_block(response) {
        if json.starts_with('{') {
            return Ok(json);
        }
    }

    if let Some(json) = extract_balanced(response, '{', '}') {
        return Ok(json);
    }

    tracing::error!(
        response_length = response.len(),
        "No JSON object found in analyzer response"
    );

    Err(AnalysisError::new(AnalysisErrorKind::MissingJson(format!(
        "response length {}",
        response.len()
    )))
    .into())
}

/// Contents of the first fenced code block.
fn extract_from_code_block(response: &str) -> Option<String> {
    let pattern = "```json";
    if let Some(start) = response.find(pattern) {
        let content_start = start + pattern.len();
        return Some(match response[content_start..].find("```") {
            Some(end) => response[content_start..content_start + end].trim().to_string(),
            // Unclosed fence, likely a truncated response
            None => response[content_start..].trim().to_string(),
        });
    }

    let start = response.find("```")?;
    let content_start = start + 3;
    // Skip an optional language tag
    let skip_to = response[content_start..]
        .find('\n')
        .map(|n| content_start + n + 1)
        .unwrap_or(content_start);

    Some(match response[skip_to..].find("```") {
        Some(end) => response[skip_to..skip_to + end].trim().to_string(),
        None => response[skip_to..].trim().to_string(),
    })
}

/// Content between the first `open` and its matching `close`, string-aware.
fn extract_balanced(response: &str, open: char, close: char) -> Option<String> {
    let start = response.find(open)?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in response[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(response[start..start + i + ch.len_utf8()].to_string());
                }
            }
            _ => {}
        }
    }

    None
}

/// Deserialize extracted JSON into `T`.
///
/// # Errors
///
/// Returns an analysis error when the JSON is malformed or does not match `T`.
pub fn parse_json<T>(json_str: &str) -> StoryboardResult<T>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(json_str).map_err(|e| {
        let preview = json_str.chars().take(100).collect::<String>();

        tracing::error!(
            error = %e,
            json_preview = %preview,
            "Analyzer JSON does not match the scene schema"
        );

        AnalysisError::new(AnalysisErrorKind::Schema(format!(
            "{} (JSON: {}...)",
            e, preview
        )))
        .into()
    })
}
