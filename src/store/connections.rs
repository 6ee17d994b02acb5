//! Single-slot connection editing on top of the multi-edge graph.
//!
//! Each node exposes one editable "in" and one editable "out" slot. Storage
//! keeps every edge; only these operations collapse a direction to one edge.

use super::GraphStore;
use crate::error::ParseError;
use crate::model::Edge;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Which side of a node a slot refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Incoming,
    Outgoing,
}

impl Direction {
    /// Whether `node_id` sits on this side of `edge`.
    pub fn occupied_by(&self, edge: &Edge, node_id: &str) -> bool {
        match self {
            Direction::Incoming => edge.target == node_id,
            Direction::Outgoing => edge.source == node_id,
        }
    }

    /// The endpoint of `edge` opposite to this side.
    pub fn other_end<'a>(&self, edge: &'a Edge) -> &'a str {
        match self {
            Direction::Incoming => &edge.source,
            Direction::Outgoing => &edge.target,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Incoming => f.pad("in"),
            Direction::Outgoing => f.pad("out"),
        }
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in" | "incoming" => Ok(Direction::Incoming),
            "out" | "outgoing" => Ok(Direction::Outgoing),
            _ => Err(ParseError::UnknownDirection(s.to_string())),
        }
    }
}

/// The primary connection of each slot, for display.
///
/// Empty strings mean the slot has no edge. When several edges share a slot,
/// only the first in edge order is reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NodeConnections {
    pub incoming: String,
    pub outgoing: String,
    pub incoming_label: String,
    pub outgoing_label: String,
}

/// An entry in an in/out selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectableNode {
    pub id: String,
    pub label: String,
}

impl GraphStore {
    /// Points the `direction` slot of `node_id` at `other`, or empties it.
    ///
    /// Every edge currently occupying the slot is removed first. With
    /// `Some(other)` (non-empty) one new edge is then appended; its id is
    /// returned.
    ///
    /// Nothing changes when `node_id`, or a non-empty `other`, is not a node
    /// of the graph.
    pub fn set_connection(
        &mut self,
        node_id: &str,
        direction: Direction,
        other: Option<&str>,
    ) -> Option<String> {
        let other = other.filter(|id| !id.is_empty());
        if let Some(missing) = [Some(node_id), other]
            .into_iter()
            .flatten()
            .find(|id| !self.graph.contains_node(id))
        {
            debug!(node_id, %direction, missing, "ignoring connection change for unknown node");
            return None;
        }

        let count_before = self.graph.edges.len();
        self.graph
            .edges
            .retain(|edge| !direction.occupied_by(edge, node_id));
        let removed = count_before - self.graph.edges.len();
        if removed > 0 {
            debug!(node_id, %direction, removed, "cleared connection slot");
            self.touch();
        }

        let other = other?;
        let (source, target) = match direction {
            Direction::Incoming => (other, node_id),
            Direction::Outgoing => (node_id, other),
        };
        let id = self.push_edge(count_before, source.to_string(), target.to_string());
        debug!(edge_id = %id, source, target, "set connection");
        Some(id)
    }

    /// Empties the `direction` slot of `node_id`.
    pub fn remove_connection(&mut self, node_id: &str, direction: Direction) {
        self.set_connection(node_id, direction, None);
    }

    /// The first edge occupying the `direction` slot of `node_id`.
    pub fn primary_edge(&self, node_id: &str, direction: Direction) -> Option<&Edge> {
        self.graph
            .edges
            .iter()
            .find(|edge| direction.occupied_by(edge, node_id))
    }

    pub fn connections(&self, node_id: &str) -> NodeConnections {
        let (incoming, incoming_label) = self.slot_summary(node_id, Direction::Incoming);
        let (outgoing, outgoing_label) = self.slot_summary(node_id, Direction::Outgoing);
        NodeConnections {
            incoming,
            outgoing,
            incoming_label,
            outgoing_label,
        }
    }

    fn slot_summary(&self, node_id: &str, direction: Direction) -> (String, String) {
        let Some(edge) = self.primary_edge(node_id, direction) else {
            return (String::new(), String::new());
        };
        let other = direction.other_end(edge);
        // A dangling endpoint still shows its id; the label part stays empty.
        let label = self.graph.node(other).map_or("", |n| n.label.as_str());
        (other.to_string(), format!("{label} ({other})"))
    }

    /// Every node other than `node_id`, in display order.
    pub fn connectable_nodes(&self, node_id: &str) -> Vec<ConnectableNode> {
        self.graph
            .nodes
            .iter()
            .filter(|node| node.id != node_id)
            .map(|node| ConnectableNode {
                id: node.id.clone(),
                label: node.display_name(),
            })
            .collect()
    }
}
