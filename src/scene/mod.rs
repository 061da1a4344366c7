/*!
 * Scene generation: the structured description consumed by a 3D renderer.
 *
 * This module is split into several submodules:
 *
 * - `graph`: Scene graph data model (objects, relationships, sequence)
 * - `extractor`: Locating and decoding the JSON object embedded in raw
 *   generated text
 * - `pipeline`: The two-stage explanation + scene-graph orchestrator
 */

pub use self::extractor::{extract_json_object, extract_scene_graph};
pub use self::graph::{RelationType, Relationship, SceneGraph, SceneObject, SequenceStep};
pub use self::pipeline::{ScenePipeline, SceneResult};

pub mod extractor;
pub mod graph;
pub mod pipeline;
