use lexifind_types::CategorizedResults;
use serde_json::{Value, json};

use crate::GenerateError;

/// Keys every response must carry, in the order the model should emit them
pub const CATEGORY_KEYS: [&str; 3] = ["start", "middle", "end"];

fn word_list_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "word": { "type": "STRING" },
                "ipa": { "type": "STRING" },
            },
            "required": ["word", "ipa"],
        },
    })
}

/// Structured-output schema in the OpenAPI subset the generation API accepts
pub fn response_schema() -> Value {
    let properties: serde_json::Map<String, Value> = CATEGORY_KEYS
        .iter()
        .map(|key| (key.to_string(), word_list_schema()))
        .collect();

    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": CATEGORY_KEYS,
        "propertyOrdering": CATEGORY_KEYS,
    })
}

/// Parse the model's JSON text. Any deviation from the schema is an error.
pub fn parse_results(text: &str) -> Result<CategorizedResults, GenerateError> {
    if text.trim().is_empty() {
        return Err(GenerateError::EmptyResponse);
    }

    let results = serde_json::from_str::<CategorizedResults>(text)?;
    tracing::debug!(
        start = results.start.len(),
        middle = results.middle.len(),
        end = results.end.len(),
        "parsed generator response"
    );
    Ok(results)
}
