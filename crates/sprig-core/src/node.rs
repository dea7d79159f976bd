//! The simplified design-node tree.
//!
//! Nodes arrive already flattened from the richer native design-file
//! format. The tree is constructed once per generation request and read
//! many times; child order is render order.

use serde::{Deserialize, Serialize};

use crate::vars::GlobalVars;

/// Kind of a design node, as reported by the extractor.
///
/// Unknown kinds deserialize to [`NodeKind::Other`] so a newer extractor
/// cannot break an older generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Text,
    Frame,
    Group,
    Rectangle,
    Ellipse,
    Image,
    Instance,
    Component,
    Line,
    #[serde(other)]
    Other,
}

/// Layout box of a node in the source document, in design units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One node in the simplified design tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignNode {
    /// Stable identifier, unique within one tree.
    pub id: String,
    /// Author-controlled display name. May be empty.
    #[serde(default)]
    pub name: String,
    /// Node kind.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Literal text content, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Layout box, if the extractor reported one.
    #[serde(
        default,
        rename = "boundingBox",
        skip_serializing_if = "Option::is_none"
    )]
    pub bounds: Option<BoundingBox>,
    /// Opacity in [0, 1]. Absent means fully opaque.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Corner radius in design units.
    #[serde(
        default,
        rename = "cornerRadius",
        skip_serializing_if = "Option::is_none"
    )]
    pub corner_radius: Option<f64>,
    /// Child nodes in render order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DesignNode>,
}

impl DesignNode {
    /// Create a new leaf node.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            text: None,
            bounds: None,
            opacity: None,
            corner_radius: None,
            children: Vec::new(),
        }
    }

    /// Set the literal text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Add a child node.
    pub fn with_child(mut self, child: DesignNode) -> Self {
        self.children.push(child);
        self
    }

    /// Set the layout box.
    pub fn with_bounds(mut self, width: f64, height: f64) -> Self {
        self.bounds = Some(BoundingBox {
            x: 0.0,
            y: 0.0,
            width,
            height,
        });
        self
    }

    /// Set the opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Set the corner radius.
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    /// Whether this node carries non-empty literal text.
    pub fn is_text_bearing(&self) -> bool {
        self.text.as_deref().is_some_and(|t| !t.trim().is_empty())
    }
}

/// A full generation request: the node tree plus its shared variables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignDocument {
    /// Document name, if the source provided one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Top-level nodes in render order.
    #[serde(default)]
    pub nodes: Vec<DesignNode>,
    /// Shared style/variable definitions referenced by nodes.
    #[serde(default, rename = "globalVars")]
    pub vars: GlobalVars,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_constructs_tree() {
        let node = DesignNode::new("1:1", "Card", NodeKind::Frame)
            .with_corner_radius(8.0)
            .with_child(DesignNode::new("1:2", "Title", NodeKind::Text).with_text("Hello"));

        assert_eq!(node.kind, NodeKind::Frame);
        assert_eq!(node.children.len(), 1);
        assert!(node.children[0].is_text_bearing());
        assert!(!node.is_text_bearing());
    }

    #[test]
    fn deserializes_extractor_json() {
        let json = r##"{
            "name": "Landing",
            "nodes": [{
                "id": "10:2",
                "name": "Primary Button",
                "type": "FRAME",
                "text": "Submit",
                "boundingBox": { "x": 0.0, "y": 0.0, "width": 120.0, "height": 40.0 },
                "cornerRadius": 6.0
            }],
            "globalVars": {
                "c1": { "name": "brand/600", "value": "#7F56D9" }
            }
        }"##;

        let doc: DesignDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.name.as_deref(), Some("Landing"));
        assert_eq!(doc.nodes.len(), 1);
        assert_eq!(doc.nodes[0].kind, NodeKind::Frame);
        assert_eq!(doc.nodes[0].text.as_deref(), Some("Submit"));
        assert_eq!(doc.nodes[0].corner_radius, Some(6.0));
        assert!(doc.vars.get("c1").is_some());
    }

    #[test]
    fn unknown_kind_becomes_other() {
        let json = r#"{ "id": "1:1", "name": "Star", "type": "VECTOR" }"#;
        let node: DesignNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.kind, NodeKind::Other);
    }
}
