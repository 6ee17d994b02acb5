//! # Flowtable - Flowchart Editing and Layout Engine
//!
//! **Flowtable** keeps a flowchart (typed nodes joined by directed edges)
//! consistent while it is edited from two sides: a table where every node has
//! one "in" and one "out" selector, and a diagram where nodes can be dragged.
//!
//! ## Core Workflow
//!
//! 1.  **Edit**: Every change goes through a [`GraphStore`](store::GraphStore):
//!     add nodes, edit their fields, and point their in/out slots at other nodes.
//! 2.  **Lay Out**: The [`LayoutEngine`](layout::LayoutEngine) places every node
//!     from the graph topology, walking outgoing edges from the `start` node.
//! 3.  **Render**: A [`DiagramView`](render::DiagramView) merges explicit
//!     positions with the computed ones and produces a [`RenderScene`](render::RenderScene).
//! 4.  **Drag**: Positions reported back by the diagram are committed as explicit
//!     positions and win over auto-layout from then on.
//!
//! ## Quick Start
//!
//! ```rust
//! use flowtable::prelude::*;
//!
//! let mut store = GraphStore::new(); // holds node "1", the start node
//! let process = store.add_node();
//! let end = store.add_node();
//! store.update_node_field(&end, NodeField::Kind(NodeKind::End));
//!
//! store.set_connection("1", Direction::Outgoing, Some(process.as_str()));
//! store.set_connection(&end, Direction::Incoming, Some(process.as_str()));
//!
//! let layout = compute_layout(store.nodes(), store.edges());
//! assert_eq!(layout["1"], Position::new(0, 0));
//! assert_eq!(layout[&process], Position::new(250, 0));
//! assert_eq!(layout[&end], Position::new(500, 0));
//!
//! let mut view = DiagramView::default();
//! view.commit_drag(&mut store, &end, 612.4, 80.6);
//! let scene = view.scene(&store);
//! assert_eq!(scene.node(&end).map(|n| n.position), Some(Position::new(612, 81)));
//! ```

pub mod error;
pub mod export;
pub mod layout;
pub mod model;
pub mod prelude;
pub mod render;
pub mod store;
pub mod table;
