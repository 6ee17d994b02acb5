use thiserror::Error;

/// Errors raised when turning user text into model values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error(
        "'{0}' is not a node type (expected one of start, process, decision, end, document, input, output)"
    )]
    UnknownNodeKind(String),

    #[error("'{0}' is not a connection direction (expected 'in' or 'out')")]
    UnknownDirection(String),
}

/// Errors raised while loading a previously exported document.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Failed to parse flowchart JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors reported by a clipboard implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard is not available: {0}")]
    Unavailable(String),
}

/// Errors that can occur when exporting the graph.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to serialize flowchart: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}
