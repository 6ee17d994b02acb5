//! Integration tests for Flowtable
//!
//! End-to-end editing sessions: table edits, layout, drags and export.
//!
mod common;
use common::*;
use flowtable::prelude::*;

/// A clipboard that is never reachable, as in a sandboxed environment.
struct DeniedClipboard;

impl Clipboard for DeniedClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable("permission denied".to_string()))
    }
}

#[test]
fn test_table_session_builds_expected_diagram() {
    let mut store = GraphStore::new();
    let check = store.add_node();
    let done = store.add_node();
    let report = store.add_node();

    store.update_node_field(&check, NodeField::Kind(NodeKind::Decision));
    store.update_node_field(&check, NodeField::Label("In stock?".to_string()));
    store.update_node_field(&done, NodeField::Kind(NodeKind::End));
    store.update_node_field(&report, NodeField::Kind(NodeKind::Document));

    store.set_connection("1", Direction::Outgoing, Some(check.as_str()));
    store.set_connection(&done, Direction::Incoming, Some(check.as_str()));

    let mut view = DiagramView::default();
    let scene = view.scene(&store);

    let position_of = |id: &str| scene.node(id).map(|n| n.position);
    assert_eq!(position_of("1"), Some(Position::new(0, 0)));
    assert_eq!(position_of(&check), Some(Position::new(250, 0)));
    assert_eq!(position_of(&done), Some(Position::new(500, 0)));
    // The report was never connected.
    assert_eq!(position_of(&report), Some(Position::new(750, 0)));
    assert_eq!(
        scene.node(&check).map(|n| n.shape),
        Some(ShapeKind::Diamond)
    );
}

#[test]
fn test_retargeting_a_slot_moves_the_node() {
    let mut store = GraphStore::from_graph(create_linear_flow());
    let mut view = DiagramView::default();
    assert_eq!(
        view.scene(&store).node("3").map(|n| n.position),
        Some(Position::new(500, 0))
    );

    store.set_connection("3", Direction::Incoming, Some("1"));

    let scene = view.scene(&store);
    assert_eq!(scene.node("3").map(|n| n.position), Some(Position::new(250, 150)));
    assert_eq!(scene.node("2").map(|n| n.position), Some(Position::new(250, 0)));
}

#[test]
fn test_export_is_pretty_json_of_the_model() {
    let mut store = GraphStore::from_graph(create_linear_flow());
    store.update_node_field("2", NodeField::Meaning("work".to_string()));
    store.move_node("3", 10.0, 20.0);

    let json = to_pretty_json(store.graph()).expect("graph serializes");

    assert!(json.contains('\n'));
    assert!(json.contains("  \"nodes\": ["));
    assert!(json.contains("\"type\": \"start\""));
    assert!(json.contains("\"meaning\": \"work\""));
    assert!(json.contains("\"type\": \"default\""));

    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
    assert_eq!(value["nodes"][2]["position"]["x"], 10);
    assert_eq!(value["edges"][0]["source"], "1");
    assert!(value["settings"].is_object());
    assert!(value["metadata"].is_object());
}

#[test]
fn test_export_reads_back() {
    let mut store = GraphStore::new();
    let id = store.add_node();
    store.set_connection("1", Direction::Outgoing, Some(id.as_str()));
    store.move_node(&id, 5.0, 6.0);

    let json = to_pretty_json(store.graph()).expect("graph serializes");
    let restored = FlowGraph::from_json(&json).expect("export parses");

    assert_eq!(&restored, store.graph());
}

#[test]
fn test_import_fills_edge_defaults() {
    let json = r#"{
        "nodes": [
            { "id": "1", "type": "start", "label": "Begin", "metadata": {} },
            { "id": "2", "type": "output", "label": "Print" }
        ],
        "edges": [ { "id": "edge-1", "source": "1", "target": "2" } ]
    }"#;

    let graph = FlowGraph::from_json(json).expect("document parses");

    assert_eq!(graph.edges[0].kind, "default");
    assert_eq!(graph.edges[0].label, "");
    assert_eq!(graph.nodes[1].kind, NodeKind::Output);
    assert!(graph.settings.is_empty());
}

#[test]
fn test_import_reports_repeated_ids() {
    let json = r#"{
        "nodes": [
            { "id": "1", "type": "start", "label": "Begin" },
            { "id": "2", "type": "process", "label": "Pack" },
            { "id": "2", "type": "end", "label": "Ship" },
            { "id": "2", "type": "end", "label": "Ship again" }
        ],
        "edges": [
            { "id": "edge-1", "source": "1", "target": "2" },
            { "id": "edge-1", "source": "2", "target": "1" }
        ]
    }"#;

    let graph = FlowGraph::from_json(json).expect("document parses");

    assert_eq!(graph.duplicate_ids(), (vec!["2"], vec!["edge-1"]));
    assert_eq!(graph.nodes.len(), 4);
    assert_eq!(
        create_diamond_flow().duplicate_ids(),
        (Vec::<&str>::new(), Vec::<&str>::new())
    );

    // The store keeps the document as given; edits reach the first match.
    let mut store = GraphStore::from_graph(graph);
    store.update_node_field("2", NodeField::Label("Packed".to_string()));
    assert_eq!(store.nodes()[1].label, "Packed");
    assert_eq!(store.nodes()[2].label, "Ship");
}

#[test]
fn test_import_rejects_unknown_node_type() {
    let json = r#"{ "nodes": [ { "id": "1", "type": "circle", "label": "x" } ], "edges": [] }"#;

    let result = FlowGraph::from_json(json);

    assert!(matches!(result, Err(ImportError::Json(_))));
}

#[test]
fn test_copy_to_clipboard() {
    let store = GraphStore::from_graph(create_diamond_flow());
    let mut clipboard = MemoryClipboard::default();

    let notice = copy_to_clipboard(store.graph(), &mut clipboard);

    assert_eq!(notice, ExportNotice::Copied);
    let expected = to_pretty_json(store.graph()).expect("graph serializes");
    assert_eq!(clipboard.contents, Some(expected));
}

#[test]
fn test_clipboard_failure_becomes_notice() {
    let store = GraphStore::from_graph(create_diamond_flow());
    let before = store.graph().clone();

    let notice = copy_to_clipboard(store.graph(), &mut DeniedClipboard);

    match &notice {
        ExportNotice::Failed(reason) => assert!(reason.contains("permission denied")),
        ExportNotice::Copied => panic!("Expected the copy to fail"),
    }
    assert!(notice.to_string().starts_with("Could not copy JSON data"));
    assert_eq!(store.graph(), &before);
}
