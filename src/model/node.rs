use crate::error::ParseError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Key under which the table's "meaning" column is stored in node metadata.
pub const MEANING_KEY: &str = "meaning";

/// Free-form string metadata, kept in insertion order.
pub type Metadata = IndexMap<String, String>;

/// The closed set of flowchart shapes a node can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Start,
    Process,
    Decision,
    End,
    Document,
    Input,
    Output,
}

impl NodeKind {
    pub const ALL: [NodeKind; 7] = [
        NodeKind::Start,
        NodeKind::Process,
        NodeKind::Decision,
        NodeKind::End,
        NodeKind::Document,
        NodeKind::Input,
        NodeKind::Output,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Start => "start",
            NodeKind::Process => "process",
            NodeKind::Decision => "decision",
            NodeKind::End => "end",
            NodeKind::Document => "document",
            NodeKind::Input => "input",
            NodeKind::Output => "output",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownNodeKind(s.to_string()))
    }
}

/// A point on the diagram canvas, in whole pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Snaps a fractional canvas coordinate to the nearest pixel.
    pub fn rounded(x: f64, y: f64) -> Self {
        Self {
            x: x.round() as i64,
            y: y.round() as i64,
        }
    }
}

/// A typed vertex of the flowchart.
///
/// `position` is `Some` only when the user placed the node explicitly (by
/// dragging it or typing coordinates). Such positions win over auto-layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl Node {
    pub fn new(id: impl Into<String>, kind: NodeKind, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            label: label.into(),
            position: None,
            metadata: Metadata::new(),
        }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_meaning(mut self, meaning: impl Into<String>) -> Self {
        self.metadata.insert(MEANING_KEY.to_string(), meaning.into());
        self
    }

    pub fn meaning(&self) -> &str {
        self.metadata.get(MEANING_KEY).map_or("", String::as_str)
    }

    /// `"{label} ({id})"`, the form used by the connection selectors.
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.label, self.id)
    }

    pub(crate) fn apply(&mut self, field: NodeField) {
        match field {
            NodeField::Kind(kind) => self.kind = kind,
            NodeField::Label(label) => self.label = label,
            NodeField::Position(position) => self.position = position,
            NodeField::Metadata(metadata) => self.metadata = metadata,
            NodeField::Meaning(meaning) => {
                self.metadata.insert(MEANING_KEY.to_string(), meaning);
            }
        }
    }
}

/// A replacement value for one field of a [`Node`].
#[derive(Debug, Clone, PartialEq)]
pub enum NodeField {
    Kind(NodeKind),
    Label(String),
    /// `None` clears the explicit position and hands the node back to auto-layout.
    Position(Option<Position>),
    Metadata(Metadata),
    /// Sets `metadata["meaning"]`, leaving other keys alone.
    Meaning(String),
}
