use super::node::Metadata;
use serde::{Deserialize, Serialize};

/// Rendering hint carried by every edge unless the caller picks another.
pub const DEFAULT_EDGE_KIND: &str = "default";

fn default_edge_kind() -> String {
    DEFAULT_EDGE_KIND.to_string()
}

/// A directed connection between two node ids.
///
/// Endpoints are plain ids and may point at nodes that do not exist (for
/// example an edge added with empty endpoints). Such edges are legal while
/// editing; layout simply does not traverse them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type", default = "default_edge_kind")]
    pub kind: String,
    #[serde(default)]
    pub metadata: Metadata,
}

impl Edge {
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            label: String::new(),
            kind: default_edge_kind(),
            metadata: Metadata::new(),
        }
    }

    pub(crate) fn apply(&mut self, field: EdgeField) {
        match field {
            EdgeField::Source(source) => self.source = source,
            EdgeField::Target(target) => self.target = target,
            EdgeField::Label(label) => self.label = label,
            EdgeField::Kind(kind) => self.kind = kind,
            EdgeField::Metadata(metadata) => self.metadata = metadata,
        }
    }
}

/// A replacement value for one field of an [`Edge`].
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeField {
    Source(String),
    Target(String),
    Label(String),
    Kind(String),
    Metadata(Metadata),
}
