/*!
 * Structured output extraction.
 *
 * The generation backend is asked for a single JSON object but routinely
 * wraps it in prose or markdown code fences. Extraction slices from the first
 * `{` to the last `}` and decodes from there, so fencing and commentary never
 * reach the JSON parser. Parse failures and shape mismatches surface as
 * distinct error kinds; nothing at this layer is retried.
 */

use crate::errors::ExtractError;
use crate::scene::graph::SceneGraph;

/// Slice the JSON object embedded in raw generated text.
///
/// Returns the substring spanning the first `{` through the last `}`
/// inclusive. Fails when either brace is absent.
pub fn extract_json_object(raw: &str) -> Result<&str, ExtractError> {
    let start = raw.find('{').ok_or(ExtractError::NoStructuredOutput)?;
    let end = raw.rfind('}').ok_or(ExtractError::NoStructuredOutput)?;
    if end < start {
        // A lone "}" before the "{" cannot span an object.
        return Err(ExtractError::MalformedJson(
            "closing brace precedes opening brace".to_string(),
        ));
    }
    Ok(&raw[start..=end])
}

/// Extract and decode the scene graph embedded in raw generated text.
///
/// Invalid JSON is reported as [`ExtractError::MalformedJson`]; JSON that
/// parses but does not match the scene graph shape is reported as
/// [`ExtractError::SchemaViolation`]. Absent `relationships` or `sequence`
/// arrays are not violations — they decode to empty.
pub fn extract_scene_graph(raw: &str) -> Result<SceneGraph, ExtractError> {
    let json = extract_json_object(raw)?;
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| ExtractError::MalformedJson(e.to_string()))?;
    serde_json::from_value(value).map_err(|e| ExtractError::SchemaViolation(e.to_string()))
}
