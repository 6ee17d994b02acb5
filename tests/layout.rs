//! Tests for automatic placement and position resolution.
mod common;
use common::*;
use flowtable::prelude::*;

fn pos(x: i64, y: i64) -> Position {
    Position::new(x, y)
}

#[test]
fn test_linear_flow_layout() {
    let flow = create_linear_flow();

    let layout = compute_layout(&flow.nodes, &flow.edges);

    assert_eq!(layout.len(), 3);
    assert_eq!(layout["1"], pos(0, 0));
    assert_eq!(layout["2"], pos(250, 0));
    assert_eq!(layout["3"], pos(500, 0));
}

#[test]
fn test_layout_is_deterministic() {
    let flow = create_diamond_flow();

    let first = compute_layout(&flow.nodes, &flow.edges);
    let second = compute_layout(&flow.nodes, &flow.edges);

    assert_eq!(first, second);
}

#[test]
fn test_start_node_anchors_at_origin_wherever_it_sits() {
    let flow = FlowGraph::from_parts(
        vec![
            node("a", NodeKind::Process),
            node("b", NodeKind::End),
            node("s", NodeKind::Start),
        ],
        vec![edge("e1", "s", "a"), edge("e2", "a", "b")],
    );

    let layout = compute_layout(&flow.nodes, &flow.edges);

    assert_eq!(layout["s"], pos(0, 0));
    assert_eq!(layout["a"], pos(250, 0));
    assert_eq!(layout["b"], pos(500, 0));
}

#[test]
fn test_no_start_node_yields_empty_layout() {
    let nodes = vec![node("4", NodeKind::Process), node("5", NodeKind::End)];

    let layout = compute_layout(&nodes, &[]);
    assert!(layout.is_empty());

    // The caller falls back to stored positions, defaulting to the origin.
    let nodes = vec![
        node("4", NodeKind::Process).with_position(pos(30, 60)),
        node("5", NodeKind::End),
    ];
    let resolved = resolve_positions(&nodes, &layout);
    assert_eq!(resolved["4"], pos(30, 60));
    assert_eq!(resolved["5"], pos(0, 0));
}

#[test]
fn test_levels_share_a_column_in_visit_order() {
    let flow = FlowGraph::from_parts(
        vec![
            node("1", NodeKind::Start),
            node("2", NodeKind::Process),
            node("3", NodeKind::Process),
            node("4", NodeKind::Process),
        ],
        vec![
            edge("edge-1", "1", "3"),
            edge("edge-2", "1", "2"),
            edge("edge-3", "1", "4"),
        ],
    );

    let layout = compute_layout(&flow.nodes, &flow.edges);

    assert_eq!(layout["3"], pos(250, 0));
    assert_eq!(layout["2"], pos(250, 150));
    assert_eq!(layout["4"], pos(250, 300));
}

#[test]
fn test_merge_node_takes_level_of_first_discovery() {
    let flow = create_diamond_flow();

    let layout = compute_layout(&flow.nodes, &flow.edges);

    // 1 -> 2 -> 4 is walked before 1 -> 3, so 4 sits right after 2.
    assert_eq!(layout["1"], pos(0, 0));
    assert_eq!(layout["2"], pos(250, 0));
    assert_eq!(layout["4"], pos(500, 0));
    assert_eq!(layout["3"], pos(250, 150));
}

#[test]
fn test_edge_order_decides_merge_level() {
    let nodes = vec![
        node("1", NodeKind::Start),
        node("2", NodeKind::Process),
        node("3", NodeKind::Process),
        node("4", NodeKind::End),
    ];
    let long_first = vec![
        edge("e1", "1", "2"),
        edge("e2", "2", "3"),
        edge("e3", "3", "4"),
        edge("e4", "1", "4"),
    ];
    let short_first = vec![
        edge("e4", "1", "4"),
        edge("e1", "1", "2"),
        edge("e2", "2", "3"),
        edge("e3", "3", "4"),
    ];

    let long = compute_layout(&nodes, &long_first);
    let short = compute_layout(&nodes, &short_first);

    assert_eq!(long["4"], pos(750, 0));
    assert_eq!(short["4"], pos(250, 0));
    assert_eq!(short["2"], pos(250, 150));
    assert_eq!(short["3"], pos(500, 0));
}

#[test]
fn test_cycles_terminate() {
    let flow = FlowGraph::from_parts(
        vec![
            node("1", NodeKind::Start),
            node("2", NodeKind::Process),
            node("3", NodeKind::Decision),
        ],
        vec![
            edge("edge-1", "1", "2"),
            edge("edge-2", "2", "3"),
            edge("edge-3", "3", "2"),
            edge("edge-4", "3", "1"),
        ],
    );

    let layout = compute_layout(&flow.nodes, &flow.edges);

    assert_eq!(layout.len(), 3);
    assert_eq!(layout["2"], pos(250, 0));
    assert_eq!(layout["3"], pos(500, 0));
}

#[test]
fn test_unreached_nodes_go_to_fallback_column() {
    let mut flow = create_linear_flow();
    flow.nodes.push(node("9", NodeKind::Document));
    flow.nodes.push(node("8", NodeKind::Input));
    // An edge into the start node does not make 8 reachable.
    flow.edges.push(edge("edge-3", "8", "1"));

    let layout = compute_layout(&flow.nodes, &flow.edges);

    assert_eq!(layout["9"], pos(750, 0));
    assert_eq!(layout["8"], pos(750, 150));
    let reachable_max = ["1", "2", "3"].iter().map(|id| layout[*id].x).max();
    assert!(reachable_max.is_some_and(|max| layout["9"].x > max));
}

#[test]
fn test_lone_start_node_puts_others_one_column_right() {
    let nodes = vec![
        node("1", NodeKind::Start),
        node("2", NodeKind::Process),
        node("3", NodeKind::Process),
    ];

    let layout = compute_layout(&nodes, &[]);

    assert_eq!(layout["1"], pos(0, 0));
    assert_eq!(layout["2"], pos(250, 0));
    assert_eq!(layout["3"], pos(250, 150));
}

#[test]
fn test_dangling_edges_are_skipped() {
    let mut flow = create_linear_flow();
    flow.edges.insert(0, edge("edge-0", "1", ""));
    flow.edges.push(edge("edge-9", "2", "ghost"));
    flow.edges.push(edge("edge-10", "", ""));

    let layout = compute_layout(&flow.nodes, &flow.edges);

    assert_eq!(layout.len(), 3);
    assert!(!layout.contains_key(""));
    assert!(!layout.contains_key("ghost"));
    assert_eq!(layout["2"], pos(250, 0));
    assert_eq!(layout["3"], pos(500, 0));
}

#[test]
fn test_first_of_several_start_nodes_anchors() {
    let nodes = vec![
        node("1", NodeKind::Start),
        node("2", NodeKind::Start),
        node("3", NodeKind::End),
    ];
    let edges = vec![edge("e1", "2", "3")];

    let layout = compute_layout(&nodes, &edges);

    assert_eq!(layout["1"], pos(0, 0));
    assert_eq!(layout["2"], pos(250, 0));
    assert_eq!(layout["3"], pos(250, 150));
}

#[test]
fn test_custom_spacing() {
    let flow = create_diamond_flow();
    let engine = LayoutEngine::builder()
        .horizontal_spacing(100)
        .vertical_spacing(40)
        .build();

    let layout = engine.compute(&flow.nodes, &flow.edges);

    assert_eq!(layout["2"], pos(100, 0));
    assert_eq!(layout["3"], pos(100, 40));
    assert_eq!(layout["4"], pos(200, 0));
}

#[test]
fn test_layout_leaves_inputs_untouched() {
    let flow = create_diamond_flow();
    let snapshot = flow.clone();

    let _ = compute_layout(&flow.nodes, &flow.edges);

    assert_eq!(flow, snapshot);
}

#[test]
fn test_explicit_position_wins_over_layout() {
    let mut flow = create_linear_flow();
    flow.nodes[1].position = Some(pos(42, 420));

    let layout = compute_layout(&flow.nodes, &flow.edges);
    let resolved = resolve_positions(&flow.nodes, &layout);

    assert_eq!(layout["2"], pos(250, 0));
    assert_eq!(resolved["2"], pos(42, 420));
    assert_eq!(resolved["3"], pos(500, 0));
}
