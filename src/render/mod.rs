//! What the diagram surface draws, derived from the store on demand.

use crate::layout::{LayoutEngine, LayoutMap, resolve_position};
use crate::model::{FlowGraph, Position};
use crate::store::GraphStore;
use serde::Serialize;
use tracing::debug;

pub mod style;

pub use style::{NodeStyle, ShapeKind};

/// Arrow head drawn at the target end of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArrowStyle {
    ClosedArrow,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderNode {
    pub id: String,
    pub shape: ShapeKind,
    pub label: String,
    pub fill: &'static str,
    pub text_color: &'static str,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub arrow: ArrowStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderScene {
    pub nodes: Vec<RenderNode>,
    pub edges: Vec<RenderEdge>,
}

impl RenderScene {
    pub fn node(&self, id: &str) -> Option<&RenderNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

/// Builds the scene for `graph` using an already computed layout.
///
/// Edges with an endpoint missing from the graph are left out.
pub fn build_scene(graph: &FlowGraph, layout: &LayoutMap) -> RenderScene {
    let nodes = graph
        .nodes
        .iter()
        .map(|node| {
            let style = node.kind.style();
            RenderNode {
                id: node.id.clone(),
                shape: style.shape,
                label: node.label.clone(),
                fill: style.fill,
                text_color: style.text,
                position: resolve_position(node, layout),
            }
        })
        .collect();
    let edges = graph
        .edges
        .iter()
        .filter(|e| graph.contains_node(&e.source) && graph.contains_node(&e.target))
        .map(|e| RenderEdge {
            id: e.id.clone(),
            source: e.source.clone(),
            target: e.target.clone(),
            arrow: ArrowStyle::ClosedArrow,
        })
        .collect();
    RenderScene { nodes, edges }
}

/// The diagram side of an editing session.
///
/// Keeps the last layout and only recomputes it when the store has been
/// edited since, or when the view is handed a different store.
#[derive(Debug, Default)]
pub struct DiagramView {
    engine: LayoutEngine,
    cached: Option<CachedLayout>,
}

#[derive(Debug)]
struct CachedLayout {
    session: u64,
    revision: u64,
    layout: LayoutMap,
}

impl DiagramView {
    pub fn new(engine: LayoutEngine) -> Self {
        Self {
            engine,
            cached: None,
        }
    }

    /// Store revision the cached layout was computed for.
    pub fn cached_revision(&self) -> Option<u64> {
        self.cached.as_ref().map(|cached| cached.revision)
    }

    /// The auto-layout for the store's current revision.
    pub fn layout(&mut self, store: &GraphStore) -> &LayoutMap {
        let (session, revision) = (store.session(), store.revision());
        if !matches!(&self.cached, Some(c) if c.session == session && c.revision == revision) {
            self.cached = None;
        }
        let engine = self.engine;
        let cached = self.cached.get_or_insert_with(|| {
            debug!(session, revision, "recomputing layout");
            CachedLayout {
                session,
                revision,
                layout: engine.compute(store.nodes(), store.edges()),
            }
        });
        &cached.layout
    }

    pub fn scene(&mut self, store: &GraphStore) -> RenderScene {
        let layout = self.layout(store);
        build_scene(store.graph(), layout)
    }

    /// Applies a drag reported by the surface; the node keeps this position
    /// from now on instead of its computed one.
    pub fn commit_drag(&self, store: &mut GraphStore, node_id: &str, x: f64, y: f64) -> bool {
        store.move_node(node_id, x, y)
    }
}
