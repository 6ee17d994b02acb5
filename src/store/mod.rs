//! The canonical, in-memory flowchart and every operation that edits it.
//!
//! All edits are synchronous and visible to the next reader immediately. Nodes
//! and edges are only ever appended or edited in place; edges disappear solely
//! through the slot operations in [`connections`].

use crate::model::{Edge, EdgeField, FlowGraph, Node, NodeField, NodeKind, Position};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

pub mod connections;

pub use connections::{ConnectableNode, Direction, NodeConnections};

const DEFAULT_LABEL_PREFIX: &str = "Node";

static NEXT_SESSION: AtomicU64 = AtomicU64::new(1);

/// Owns the flowchart for one editing session.
///
/// Each store carries a session number of its own, so views can tell two
/// stores at the same revision apart. Take a copy of the document with
/// [`GraphStore::graph`] and start a new store from it instead of cloning.
#[derive(Debug)]
pub struct GraphStore {
    session: u64,
    graph: FlowGraph,
    revision: u64,
    pending_connect: Option<String>,
    label_prefix: String,
}

pub struct GraphStoreBuilder {
    graph: FlowGraph,
    label_prefix: String,
}

impl GraphStoreBuilder {
    pub fn new() -> Self {
        Self {
            graph: FlowGraph::default(),
            label_prefix: DEFAULT_LABEL_PREFIX.to_string(),
        }
    }

    /// Starts the session from an existing document instead of the single start node.
    pub fn graph(mut self, graph: FlowGraph) -> Self {
        self.graph = graph;
        self
    }

    /// New nodes are labelled `"{prefix} {id}"`.
    pub fn node_label_prefix(mut self, prefix: &str) -> Self {
        self.label_prefix = prefix.to_string();
        self
    }

    pub fn build(self) -> GraphStore {
        let (nodes, edges) = self.graph.duplicate_ids();
        if !nodes.is_empty() || !edges.is_empty() {
            warn!(?nodes, ?edges, "session starts from a document with repeated ids");
        }
        GraphStore {
            session: NEXT_SESSION.fetch_add(1, Ordering::Relaxed),
            graph: self.graph,
            revision: 0,
            pending_connect: None,
            label_prefix: self.label_prefix,
        }
    }
}

impl Default for GraphStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        GraphStoreBuilder::new().build()
    }
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> GraphStoreBuilder {
        GraphStoreBuilder::new()
    }

    pub fn from_graph(graph: FlowGraph) -> Self {
        GraphStoreBuilder::new().graph(graph).build()
    }

    /// The current snapshot of the document.
    pub fn graph(&self) -> &FlowGraph {
        &self.graph
    }

    pub fn nodes(&self) -> &[Node] {
        &self.graph.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.graph.edges
    }

    pub fn into_graph(self) -> FlowGraph {
        self.graph
    }

    /// Incremented on every edit that changed the document.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Distinguishes this store from every other store built in the process.
    pub fn session(&self) -> u64 {
        self.session
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    /// Appends a `process` node with the next free numeric id and returns that id.
    pub fn add_node(&mut self) -> String {
        let id = allocate_id(self.graph.nodes.len() + 1, |n| n.to_string(), |id| {
            self.graph.contains_node(id)
        });
        let label = format!("{} {}", self.label_prefix, id);
        self.graph
            .nodes
            .push(Node::new(id.clone(), NodeKind::Process, label));
        self.touch();
        debug!(node_id = %id, "added node");
        id
    }

    /// Replaces one field of the node `node_id`. Returns `false` (and changes
    /// nothing) when no such node exists.
    pub fn update_node_field(&mut self, node_id: &str, field: NodeField) -> bool {
        let Some(node) = self.graph.nodes.iter_mut().find(|n| n.id == node_id) else {
            debug!(node_id, "ignoring update of unknown node");
            return false;
        };
        debug!(node_id, ?field, "updating node");
        node.apply(field);
        self.touch();
        true
    }

    /// Commits a drag from the diagram as the node's explicit position,
    /// rounded to whole pixels.
    pub fn move_node(&mut self, node_id: &str, x: f64, y: f64) -> bool {
        self.update_node_field(node_id, NodeField::Position(Some(Position::rounded(x, y))))
    }

    /// Appends an edge with empty endpoints, to be filled in by field edits.
    pub fn add_edge(&mut self) -> String {
        let id = self.push_edge(self.graph.edges.len(), String::new(), String::new());
        debug!(edge_id = %id, "added blank edge");
        id
    }

    /// Replaces one field of the edge `edge_id`. Endpoints are not validated.
    pub fn update_edge_field(&mut self, edge_id: &str, field: EdgeField) -> bool {
        let Some(edge) = self.graph.edges.iter_mut().find(|e| e.id == edge_id) else {
            debug!(edge_id, "ignoring update of unknown edge");
            return false;
        };
        debug!(edge_id, ?field, "updating edge");
        edge.apply(field);
        self.touch();
        true
    }

    /// Appends `source -> target` without touching any existing edge.
    /// A self-loop, or an endpoint that is not a node of the graph, is refused
    /// and yields `None`.
    pub fn connect(&mut self, source: &str, target: &str) -> Option<String> {
        if source == target {
            debug!(node_id = source, "refusing self-loop");
            return None;
        }
        if let Some(missing) = [source, target]
            .into_iter()
            .find(|id| !self.graph.contains_node(id))
        {
            debug!(source, target, missing, "ignoring connection to unknown node");
            return None;
        }
        let id = self.push_edge(self.graph.edges.len(), source.to_string(), target.to_string());
        debug!(edge_id = %id, source, target, "connected nodes");
        Some(id)
    }

    /// Enters connect mode with `source` as the pending origin.
    pub fn begin_connect(&mut self, source: &str) {
        self.pending_connect = Some(source.to_string());
    }

    /// The origin of the connection being drawn, if any.
    pub fn pending_connect(&self) -> Option<&str> {
        self.pending_connect.as_deref()
    }

    /// Leaves connect mode, linking the pending origin to `target` when they differ.
    pub fn finish_connect(&mut self, target: &str) -> Option<String> {
        let source = self.pending_connect.take()?;
        self.connect(&source, target)
    }

    pub fn cancel_connect(&mut self) {
        self.pending_connect = None;
    }

    /// Pushes a new edge whose id is derived from `count`, the edge count the
    /// caller observed before editing.
    fn push_edge(&mut self, count: usize, source: String, target: String) -> String {
        let id = allocate_id(count + 1, |n| format!("edge-{n}"), |id| {
            self.graph.contains_edge(id)
        });
        self.graph.edges.push(Edge::new(id.clone(), source, target));
        self.touch();
        id
    }
}

/// Picks the first of `format(start)`, `format(start + 1)`, ... not yet taken.
fn allocate_id(
    start: usize,
    format: impl Fn(usize) -> String,
    taken: impl Fn(&str) -> bool,
) -> String {
    (start..)
        .map(format)
        .find(|id| !taken(id))
        .unwrap_or_default()
}
