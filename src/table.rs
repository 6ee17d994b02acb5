//! Row model for the table editor: one row per node with its two slot selectors.

use crate::model::NodeKind;
use crate::store::{ConnectableNode, GraphStore, NodeConnections};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub id: String,
    pub kind: NodeKind,
    pub meaning: String,
    pub label: String,
    pub connections: NodeConnections,
    /// Choices for both selectors: every other node.
    pub choices: Vec<ConnectableNode>,
    /// The incoming selector of a `start` node is locked.
    pub incoming_editable: bool,
}

/// Rows in node display order.
pub fn rows(store: &GraphStore) -> Vec<TableRow> {
    store
        .nodes()
        .iter()
        .map(|node| TableRow {
            id: node.id.clone(),
            kind: node.kind,
            meaning: node.meaning().to_string(),
            label: node.label.clone(),
            connections: store.connections(&node.id),
            choices: store.connectable_nodes(&node.id),
            incoming_editable: node.kind != NodeKind::Start,
        })
        .collect()
}
