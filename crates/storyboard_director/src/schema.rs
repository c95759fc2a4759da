//! Structured output schema for the analyzer.

use serde_json::{Value, json};

/// JSON schema the analyzer's answer must follow.
///
/// Uses the Gemini `responseSchema` dialect (upper-case type names).
pub fn analysis_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "scenes": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "scriptSegment": { "type": "STRING" },
                        "promptEnglish": { "type": "STRING" },
                        "promptLocalized": { "type": "STRING" }
                    },
                    "required": ["scriptSegment", "promptEnglish", "promptLocalized"]
                }
            },
            "characterProfile": { "type": "STRING" },
            "styleGuide": { "type": "STRING" }
        },
        "required": ["scenes", "characterProfile", "styleGuide"]
    })
}
