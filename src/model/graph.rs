use super::edge::Edge;
use super::node::{Node, NodeKind};
use crate::error::ImportError;
use ahash::AHashSet;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// The complete flowchart document: nodes and edges in display order plus
/// free-form settings and metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    #[serde(default)]
    pub settings: IndexMap<String, serde_json::Value>,
    #[serde(default)]
    pub metadata: IndexMap<String, serde_json::Value>,
}

impl Default for FlowGraph {
    /// A fresh document holds a single start node.
    fn default() -> Self {
        Self {
            nodes: vec![Node::new("1", NodeKind::Start, "Start")],
            edges: Vec::new(),
            settings: IndexMap::new(),
            metadata: IndexMap::new(),
        }
    }
}

impl FlowGraph {
    /// A document with no nodes at all.
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            settings: IndexMap::new(),
            metadata: IndexMap::new(),
        }
    }

    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self {
            nodes,
            edges,
            ..Self::empty()
        }
    }

    /// Reads back a document previously produced by the JSON export.
    ///
    /// Duplicate node or edge ids are accepted but logged; edits then only
    /// reach the first element with that id.
    pub fn from_json(json: &str) -> Result<Self, ImportError> {
        let graph: FlowGraph = serde_json::from_str(json)?;
        let (nodes, edges) = graph.duplicate_ids();
        if !nodes.is_empty() || !edges.is_empty() {
            warn!(?nodes, ?edges, "imported document repeats ids");
        }
        Ok(graph)
    }

    /// Node ids and edge ids that occur more than once, each listed once in
    /// order of their second occurrence.
    pub fn duplicate_ids(&self) -> (Vec<&str>, Vec<&str>) {
        (
            repeated(self.nodes.iter().map(|n| n.id.as_str())),
            repeated(self.edges.iter().map(|e| e.id.as_str())),
        )
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    pub fn contains_edge(&self, id: &str) -> bool {
        self.edge(id).is_some()
    }
}

fn repeated<'a>(ids: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = AHashSet::new();
    let mut reported = AHashSet::new();
    ids.filter(|id| !seen.insert(*id) && reported.insert(*id))
        .collect()
}
