//! Pretty JSON export of the whole document and hand-off to a clipboard.

use crate::error::{ClipboardError, ExportError};
use crate::model::FlowGraph;
use std::fmt;
use tracing::warn;

/// The document as indented JSON.
pub fn to_pretty_json(graph: &FlowGraph) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(graph)?)
}

/// A system clipboard, or anything standing in for one.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Keeps the last copied text in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Message shown to the user after an export attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportNotice {
    Copied,
    Failed(String),
}

impl fmt::Display for ExportNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportNotice::Copied => f.write_str("JSON data copied to the clipboard."),
            ExportNotice::Failed(reason) => write!(f, "Could not copy JSON data: {reason}"),
        }
    }
}

/// Copies the exported document. Failures become a notice and never touch
/// the graph.
pub fn copy_to_clipboard(graph: &FlowGraph, clipboard: &mut dyn Clipboard) -> ExportNotice {
    let result = to_pretty_json(graph)
        .and_then(|json| clipboard.write_text(&json).map_err(ExportError::from));
    match result {
        Ok(()) => ExportNotice::Copied,
        Err(e) => {
            warn!(error = %e, "export to clipboard failed");
            ExportNotice::Failed(e.to_string())
        }
    }
}
