//! Common test utilities for building flowcharts.
use flowtable::prelude::*;

#[allow(dead_code)]
pub fn node(id: &str, kind: NodeKind) -> Node {
    Node::new(id, kind, format!("Node {}", id))
}

#[allow(dead_code)]
pub fn edge(id: &str, source: &str, target: &str) -> Edge {
    Edge::new(id, source, target)
}

/// `start(1) -> process(2) -> end(3)`
#[allow(dead_code)]
pub fn create_linear_flow() -> FlowGraph {
    FlowGraph::from_parts(
        vec![
            node("1", NodeKind::Start),
            node("2", NodeKind::Process),
            node("3", NodeKind::End),
        ],
        vec![edge("edge-1", "1", "2"), edge("edge-2", "2", "3")],
    )
}

/// A start node fanning out to a decision and a process that merge again.
///
/// Edges: `1->2, 1->3, 3->4, 2->4`
#[allow(dead_code)]
pub fn create_diamond_flow() -> FlowGraph {
    FlowGraph::from_parts(
        vec![
            node("1", NodeKind::Start),
            node("2", NodeKind::Decision),
            node("3", NodeKind::Process),
            node("4", NodeKind::End),
        ],
        vec![
            edge("edge-1", "1", "2"),
            edge("edge-2", "1", "3"),
            edge("edge-3", "3", "4"),
            edge("edge-4", "2", "4"),
        ],
    )
}

/// Edges whose `source` is `node_id`.
#[allow(dead_code)]
pub fn outgoing<'a>(store: &'a GraphStore, node_id: &str) -> Vec<&'a Edge> {
    store.edges().iter().filter(|e| e.source == node_id).collect()
}

/// Edges whose `target` is `node_id`.
#[allow(dead_code)]
pub fn incoming<'a>(store: &'a GraphStore, node_id: &str) -> Vec<&'a Edge> {
    store.edges().iter().filter(|e| e.target == node_id).collect()
}
