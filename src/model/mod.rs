pub mod edge;
pub mod graph;
pub mod node;

pub use edge::*;
pub use graph::*;
pub use node::*;
