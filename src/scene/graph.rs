/*!
 * Scene graph data model.
 *
 * The wire format mirrors what the generation backend is instructed to emit:
 * camelCase field names, 3-tuples for position and size, and optional
 * `relationships`/`sequence` arrays. Deserialization is the schema check —
 * required fields, tuple lengths, and relation types are enforced by the
 * types themselves, while absent arrays default to empty.
 */

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One renderable object in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneObject {
    /// Unique id, the stable reference key for relationships and sequence steps
    pub id: String,

    /// Geometric shape tag, lowercase (e.g. "sphere", "cube", "plane")
    pub shape: String,

    /// Color name or hex string, passed through to the renderer
    pub color: String,

    /// Position as [x, y, z]
    pub position: [f64; 3],

    /// Size as [width, height, depth]
    pub size: [f64; 3],

    /// Human-readable label
    pub label: String,

    /// Whether the renderer should display the label
    pub show_label: bool,

    /// Initial visibility; absent means renderer default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,

    /// Id of the parent object for part/whole decomposition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

/// Visual connector type between two objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationType {
    Line,
    Arrow,
}

/// A conceptual connection between two objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    /// Id of the source object
    pub from: String,

    /// Id of the target object
    pub to: String,

    /// Connector type
    #[serde(rename = "type")]
    pub relation_type: RelationType,

    /// Label shown on the connector
    pub label: String,
}

/// One timeline entry describing an animation action on a scene object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceStep {
    /// 1-based step number
    pub step: u32,

    /// Label shown while the step plays
    pub label: String,

    /// Id of the object the action applies to
    pub target_id: String,

    /// Action tag interpreted by the renderer (e.g. "appear", "move")
    pub action: String,

    /// Action parameters; shape depends on the action
    #[serde(default)]
    pub params: serde_json::Map<String, serde_json::Value>,
}

/// The structured scene description consumed by the 3D renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneGraph {
    /// Scene objects, in declaration order
    #[serde(default)]
    pub objects: Vec<SceneObject>,

    /// Conceptual connections between objects
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<Relationship>,

    /// Animation timeline; non-empty marks a process visualization
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sequence: Vec<SequenceStep>,
}

impl SceneGraph {
    /// Whether this graph describes a step-by-step process rather than a
    /// static scene.
    pub fn is_process(&self) -> bool {
        !self.sequence.is_empty()
    }

    /// Ids referenced by relationships, sequence steps, or parent links that
    /// do not resolve to a declared object.
    ///
    /// The generator is trusted to keep references closed, but is not
    /// verified; renderers and callers use this to degrade gracefully instead
    /// of crashing on a dangling id.
    pub fn unresolved_references(&self) -> Vec<String> {
        let declared: HashSet<&str> = self.objects.iter().map(|o| o.id.as_str()).collect();
        let mut unresolved = Vec::new();
        let mut seen = HashSet::new();

        let mut check = |id: &str| {
            if !declared.contains(id) && seen.insert(id.to_string()) {
                unresolved.push(id.to_string());
            }
        };

        for object in &self.objects {
            if let Some(parent) = &object.parent {
                check(parent);
            }
        }
        for relationship in &self.relationships {
            check(&relationship.from);
            check(&relationship.to);
        }
        for step in &self.sequence {
            check(&step.target_id);
        }

        unresolved
    }
}
