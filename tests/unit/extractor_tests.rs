/*!
 * Tests for structured-output extraction from raw generated text
 */

use vistutor::errors::ExtractError;
use vistutor::scene::extractor::{extract_json_object, extract_scene_graph};

use crate::common;

#[test]
fn test_extractJsonObject_fencedOutput_shouldYieldEmptyObjectGraph() {
    let raw = "Sure! ```json\n{\"objects\":[]}\n``` Thanks";

    let graph = extract_scene_graph(raw).unwrap();

    assert!(graph.objects.is_empty());
    assert!(graph.relationships.is_empty());
    assert!(graph.sequence.is_empty());
}

#[test]
fn test_extractJsonObject_noBraces_shouldBeFatal() {
    let result = extract_json_object("I could not produce a scene for that.");

    assert!(matches!(result, Err(ExtractError::NoStructuredOutput)));
}

#[test]
fn test_extractSceneGraph_realisticWrappedBody_shouldDecodeObjectsAndSequence() {
    let raw = common::water_cycle_scene_json();

    let graph = extract_scene_graph(&raw).unwrap();

    assert_eq!(graph.objects.len(), 2);
    assert_eq!(graph.objects[0].id, "ocean");
    assert_eq!(graph.objects[1].id, "vapor");
    assert_eq!(graph.sequence.len(), 2);
    assert_eq!(graph.sequence[0].step, 1);
    assert_eq!(graph.sequence[1].action, "move");
    assert!(graph.unresolved_references().is_empty());
}

#[test]
fn test_extractSceneGraph_truncatedJson_shouldReportMalformed() {
    // The outer braces are present, but the body was cut off mid-array.
    let raw = "{\"objects\": [ {\"id\": \"a\"}";

    let result = extract_scene_graph(raw);

    assert!(matches!(result, Err(ExtractError::MalformedJson(_))));
}

#[test]
fn test_extractSceneGraph_nonGraphJson_shouldReportSchemaViolation() {
    // Valid JSON, but "objects" is not an array of scene objects.
    let raw = "{\"objects\": \"none\"}";

    let result = extract_scene_graph(raw);

    assert!(matches!(result, Err(ExtractError::SchemaViolation(_))));
}
