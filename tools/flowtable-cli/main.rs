use clap::Parser;
use flowtable::layout::LayoutEngine;
use flowtable::prelude::*;
use itertools::Itertools;
use std::fs;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// A terminal front-end for the flowchart table editor
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a flowchart JSON document to start from
    graph_path: Option<String>,

    /// Print the exported JSON document after the table and layout
    #[arg(short, long)]
    json: bool,

    /// Horizontal distance between layout columns
    #[arg(long, default_value_t = flowtable::layout::HORIZONTAL_SPACING)]
    h_spacing: i64,

    /// Vertical distance between nodes in a column
    #[arg(long, default_value_t = flowtable::layout::VERTICAL_SPACING)]
    v_spacing: i64,

    /// Run in interactive mode to edit the flowchart with commands
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

/// One line typed in interactive mode.
#[derive(Debug)]
enum Command {
    Add,
    Kind(String, NodeKind),
    Label(String, String),
    Meaning(String, String),
    Slot(String, Direction, Option<String>),
    Link(String, String),
    Move(String, f64, f64),
    Unpin(String),
    Table,
    Layout,
    Json,
    Copy,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err("empty command".to_string());
        };
        let mut arg = |name: &str| {
            words
                .next()
                .map(str::to_string)
                .ok_or_else(|| format!("'{verb}' needs a {name}"))
        };
        let command = match verb {
            "add" => Command::Add,
            "type" => {
                let id = arg("node id")?;
                let kind = arg("node type")?
                    .parse::<NodeKind>()
                    .map_err(|e| e.to_string())?;
                Command::Kind(id, kind)
            }
            "label" | "meaning" => {
                let id = arg("node id")?;
                let rest = words.join(" ");
                if verb == "label" {
                    Command::Label(id, rest)
                } else {
                    Command::Meaning(id, rest)
                }
            }
            "in" | "out" => {
                let direction = verb.parse::<Direction>().map_err(|e| e.to_string())?;
                let id = arg("node id")?;
                Command::Slot(id, direction, words.next().map(str::to_string))
            }
            "link" => Command::Link(arg("source id")?, arg("target id")?),
            "move" => {
                let id = arg("node id")?;
                let x = parse_coordinate(&arg("x coordinate")?)?;
                let y = parse_coordinate(&arg("y coordinate")?)?;
                Command::Move(id, x, y)
            }
            "unpin" => Command::Unpin(arg("node id")?),
            "table" => Command::Table,
            "layout" => Command::Layout,
            "json" => Command::Json,
            "copy" => Command::Copy,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(format!("unknown command '{other}' (try 'help')")),
        };
        Ok(command)
    }
}

fn parse_coordinate(text: &str) -> Result<f64, String> {
    text.parse()
        .map_err(|_| format!("'{text}' is not a coordinate"))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let graph = match &cli.graph_path {
        Some(path) => load_graph(path),
        None => FlowGraph::default(),
    };
    let store = GraphStore::from_graph(graph);
    let engine = LayoutEngine::builder()
        .horizontal_spacing(cli.h_spacing)
        .vertical_spacing(cli.v_spacing)
        .build();
    let mut view = DiagramView::new(engine);

    if cli.human {
        run_interactive(store, view);
    } else {
        print_table(&store);
        print_layout(&store, &mut view);
        if cli.json {
            print_json(&store);
        }
    }
}

fn load_graph(path: &str) -> FlowGraph {
    let json = fs::read_to_string(path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read flowchart file '{}': {}", path, e))
    });
    FlowGraph::from_json(&json).unwrap_or_else(|e| exit_with_error(&e.to_string()))
}

/// Runs the editor as a prompt loop until `quit` or end of input.
fn run_interactive(mut store: GraphStore, mut view: DiagramView) {
    println!("--- Flowtable Interactive Mode ---");
    println!("Type 'help' for the list of commands.");
    print_table(&store);

    // Stands in for the system clipboard.
    let mut clipboard = MemoryClipboard::default();

    loop {
        let Some(line) = prompt_for_input("flowtable") else {
            break;
        };
        if line.is_empty() {
            continue;
        }
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("  ! {}", message);
                continue;
            }
        };

        let applied = match command {
            Command::Add => {
                let id = store.add_node();
                println!("  + node {}", id);
                true
            }
            Command::Kind(id, kind) => store.update_node_field(&id, NodeField::Kind(kind)),
            Command::Label(id, label) => store.update_node_field(&id, NodeField::Label(label)),
            Command::Meaning(id, meaning) => {
                store.update_node_field(&id, NodeField::Meaning(meaning))
            }
            Command::Slot(id, direction, other) => {
                let locked = direction == Direction::Incoming
                    && store.graph().node(&id).is_some_and(|n| n.kind == NodeKind::Start);
                if locked {
                    println!("  ! the start node has no incoming connection");
                    continue;
                }
                let revision = store.revision();
                match store.set_connection(&id, direction, other.as_deref()) {
                    Some(edge_id) => {
                        println!("  + edge {}", edge_id);
                        true
                    }
                    None if store.revision() != revision => {
                        println!("  - {} slot of {} cleared", direction, id);
                        true
                    }
                    None => false,
                }
            }
            Command::Link(source, target) => {
                store.begin_connect(&source);
                match store.finish_connect(&target) {
                    Some(edge_id) => {
                        println!("  + edge {}", edge_id);
                        true
                    }
                    None => false,
                }
            }
            Command::Move(id, x, y) => view.commit_drag(&mut store, &id, x, y),
            Command::Unpin(id) => store.update_node_field(&id, NodeField::Position(None)),
            Command::Table => {
                print_table(&store);
                true
            }
            Command::Layout => {
                print_layout(&store, &mut view);
                true
            }
            Command::Json => {
                print_json(&store);
                true
            }
            Command::Copy => {
                println!("  {}", copy_to_clipboard(store.graph(), &mut clipboard));
                true
            }
            Command::Help => {
                print_help();
                true
            }
            Command::Quit => break,
        };

        if !applied {
            println!("  ! nothing changed");
        }
    }
}

fn print_table(store: &GraphStore) {
    println!(
        "\n{:<6} {:<10} {:<16} {:<20} {:<20} {:<20}",
        "ID", "TYPE", "MEANING", "LABEL", "IN", "OUT"
    );
    for row in table_rows(store) {
        let incoming = if row.incoming_editable {
            row.connections.incoming_label.as_str()
        } else {
            "-"
        };
        println!(
            "{:<6} {:<10} {:<16} {:<20} {:<20} {:<20}",
            row.id,
            row.kind,
            row.meaning,
            row.label,
            incoming,
            row.connections.outgoing_label
        );
    }
    println!();
}

fn print_layout(store: &GraphStore, view: &mut DiagramView) {
    let scene = view.scene(store);
    println!("--- Diagram ---");
    for node in &scene.nodes {
        println!(
            "  {:<6} ({:>5}, {:>5})  {:?} fill={} text={}",
            node.id, node.position.x, node.position.y, node.shape, node.fill, node.text_color
        );
    }
    let arrows = scene
        .edges
        .iter()
        .map(|e| format!("{} -> {}", e.source, e.target))
        .join(", ");
    println!("  edges: {}", if arrows.is_empty() { "none" } else { arrows.as_str() });
    println!();
}

fn print_json(store: &GraphStore) {
    match to_pretty_json(store.graph()) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn print_help() {
    println!(
        "  add                      append a process node
  type <id> <type>         start|process|decision|end|document|input|output
  label <id> <text>        set the text inside the shape
  meaning <id> <text>      set the meaning column
  in <id> [other]          set or clear the incoming connection
  out <id> [other]         set or clear the outgoing connection
  link <source> <target>   draw an extra edge
  move <id> <x> <y>        pin a node to a position
  unpin <id>               hand a node back to auto-layout
  table | layout | json    show the document
  copy                     copy the JSON document
  quit"
    );
}

/// Prompts the user and reads one trimmed line; `None` at end of input.
fn prompt_for_input(prompt_text: &str) -> Option<String> {
    let mut line = String::new();
    print!("> {}: ", prompt_text);
    io::stdout().flush().ok()?;

    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
