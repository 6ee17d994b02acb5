//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the flowtable crate.
//!
//! # Example
//!
//! ```rust
//! use flowtable::prelude::*;
//!
//! let mut store = GraphStore::new();
//! let id = store.add_node();
//! store.set_connection("1", Direction::Outgoing, Some(id.as_str()));
//!
//! let json = to_pretty_json(store.graph()).expect("graph serializes");
//! assert!(json.contains("\"edge-1\""));
//! ```

// Editing
pub use crate::store::{ConnectableNode, Direction, GraphStore, NodeConnections};
pub use crate::table::{TableRow, rows as table_rows};

// Data model
pub use crate::model::{Edge, EdgeField, FlowGraph, Metadata, Node, NodeField, NodeKind, Position};

// Layout and rendering
pub use crate::layout::{LayoutEngine, LayoutMap, compute_layout, resolve_positions};
pub use crate::render::{DiagramView, NodeStyle, RenderScene, ShapeKind};

// Export
pub use crate::export::{Clipboard, ExportNotice, MemoryClipboard, copy_to_clipboard, to_pretty_json};

// Error types
pub use crate::error::{ClipboardError, ExportError, ImportError, ParseError};
