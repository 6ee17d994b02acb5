use crate::model::NodeKind;
use serde::Serialize;

/// Outline family a renderer draws for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    RoundedRectangle,
    Diamond,
    Parallelogram,
    /// Rectangle whose bottom edge is a wave.
    WaveBottomedRectangle,
}

/// Static appearance of one node type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NodeStyle {
    pub shape: ShapeKind,
    pub fill: &'static str,
    pub text: &'static str,
}

impl NodeKind {
    pub fn style(&self) -> NodeStyle {
        let (shape, fill, text) = match self {
            NodeKind::Start => (ShapeKind::RoundedRectangle, "#E8F5E9", "#2E7D32"),
            NodeKind::Process => (ShapeKind::RoundedRectangle, "#E3F2FD", "#1976D2"),
            NodeKind::Decision => (ShapeKind::Diamond, "#FFF8E1", "#F57F17"),
            NodeKind::End => (ShapeKind::RoundedRectangle, "#FFEBEE", "#D32F2F"),
            NodeKind::Document => (ShapeKind::WaveBottomedRectangle, "#F3E5F5", "#7B1FA2"),
            NodeKind::Input => (ShapeKind::Parallelogram, "#FFF3E0", "#E65100"),
            NodeKind::Output => (ShapeKind::Parallelogram, "#EFEBE9", "#4E342E"),
        };
        NodeStyle { shape, fill, text }
    }
}
