//! Automatic left-to-right placement of flowchart nodes.
//!
//! Levels come from a depth-first walk over outgoing edges starting at the
//! `start` node. The first path to reach a node fixes its level, so in a merge
//! the edge order decides, not the longest or shortest path. Each level is a
//! column; nodes within it are stacked in the order they were first visited.
//! Nodes the walk never reaches are stacked in one extra column on the right.

use crate::model::{Edge, Node, NodeKind, Position};
use ahash::{AHashMap, AHashSet};
use indexmap::IndexMap;
use tracing::{debug, trace, warn};

mod resolve;

pub use resolve::{resolve_position, resolve_positions};

pub const HORIZONTAL_SPACING: i64 = 250;
pub const VERTICAL_SPACING: i64 = 150;

/// Node id to computed position, in placement order.
pub type LayoutMap = IndexMap<String, Position>;

/// Computes a layout with the default spacing.
pub fn compute_layout(nodes: &[Node], edges: &[Edge]) -> LayoutMap {
    LayoutEngine::default().compute(nodes, edges)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutEngine {
    horizontal_spacing: i64,
    vertical_spacing: i64,
}

pub struct LayoutEngineBuilder {
    horizontal_spacing: i64,
    vertical_spacing: i64,
}

impl LayoutEngineBuilder {
    pub fn new() -> Self {
        Self {
            horizontal_spacing: HORIZONTAL_SPACING,
            vertical_spacing: VERTICAL_SPACING,
        }
    }

    /// Distance between consecutive level columns.
    pub fn horizontal_spacing(mut self, spacing: i64) -> Self {
        self.horizontal_spacing = spacing;
        self
    }

    /// Distance between nodes stacked in one column.
    pub fn vertical_spacing(mut self, spacing: i64) -> Self {
        self.vertical_spacing = spacing;
        self
    }

    pub fn build(self) -> LayoutEngine {
        LayoutEngine {
            horizontal_spacing: self.horizontal_spacing,
            vertical_spacing: self.vertical_spacing,
        }
    }
}

impl Default for LayoutEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        LayoutEngineBuilder::new().build()
    }
}

impl LayoutEngine {
    pub fn builder() -> LayoutEngineBuilder {
        LayoutEngineBuilder::new()
    }

    /// Places every node, or none at all when there is no `start` node.
    ///
    /// With several `start` nodes the first one in node order anchors the
    /// layout. Edges whose endpoints are not in `nodes` are ignored.
    pub fn compute(&self, nodes: &[Node], edges: &[Edge]) -> LayoutMap {
        let mut starts = nodes.iter().filter(|n| n.kind == NodeKind::Start);
        let Some(start) = starts.next() else {
            debug!(nodes = nodes.len(), "no start node; skipping auto-layout");
            return LayoutMap::new();
        };
        if starts.next().is_some() {
            warn!(start_id = %start.id, "several start nodes; anchoring on the first");
        }

        let levels = assign_levels(&start.id, nodes, edges);
        let mut positions = LayoutMap::with_capacity(nodes.len());
        let mut column_fill: AHashMap<usize, i64> = AHashMap::new();
        for (id, level) in &levels {
            let row = column_fill.entry(*level).or_insert(0);
            positions.insert(
                id.to_string(),
                Position::new(
                    *level as i64 * self.horizontal_spacing,
                    *row * self.vertical_spacing,
                ),
            );
            *row += 1;
        }

        let reached = positions.len();
        let fallback_x =
            positions.values().map(|p| p.x).max().unwrap_or(0) + self.horizontal_spacing;
        let mut row = 0;
        for node in nodes {
            if !positions.contains_key(&node.id) {
                positions.insert(
                    node.id.clone(),
                    Position::new(fallback_x, row * self.vertical_spacing),
                );
                row += 1;
            }
        }

        debug!(
            reached,
            unreached = positions.len() - reached,
            "computed layout"
        );
        positions
    }
}

/// Depth-first walk from `start_id`, returning `(node id, level)` in visit order.
fn assign_levels<'a>(
    start_id: &'a str,
    nodes: &'a [Node],
    edges: &'a [Edge],
) -> Vec<(&'a str, usize)> {
    let known: AHashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    let mut children: AHashMap<&str, Vec<&str>> = AHashMap::new();
    for edge in edges {
        if known.contains(edge.source.as_str()) && known.contains(edge.target.as_str()) {
            children
                .entry(edge.source.as_str())
                .or_default()
                .push(edge.target.as_str());
        }
    }

    let mut visited: AHashSet<&str> = AHashSet::new();
    let mut order = Vec::new();
    let mut stack = vec![(start_id, 0usize)];
    while let Some((id, level)) = stack.pop() {
        if !visited.insert(id) {
            continue;
        }
        trace!(node_id = id, level, "assigned level");
        order.push((id, level));
        if let Some(targets) = children.get(id) {
            // Reversed so the first outgoing edge is explored first.
            stack.extend(targets.iter().rev().map(|target| (*target, level + 1)));
        }
    }
    order
}
