use super::LayoutMap;
use crate::model::{Node, Position};

/// Where `node` is drawn: its explicit position if it has one, else the
/// computed one, else the origin.
pub fn resolve_position(node: &Node, layout: &LayoutMap) -> Position {
    node.position
        .or_else(|| layout.get(&node.id).copied())
        .unwrap_or(Position::ORIGIN)
}

/// Final positions for every node, in node order.
pub fn resolve_positions(nodes: &[Node], layout: &LayoutMap) -> LayoutMap {
    nodes
        .iter()
        .map(|node| (node.id.clone(), resolve_position(node, layout)))
        .collect()
}
