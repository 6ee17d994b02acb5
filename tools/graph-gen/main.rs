use clap::Parser;
use flowtable::prelude::*;
use rand::Rng;
use rand::rngs::ThreadRng;
use std::fs;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// A CLI tool to generate random flowcharts for exercising the layout engine
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_flow.json")]
    output: String,

    /// Number of nodes, including the start node
    #[arg(short, long, default_value_t = 12)]
    nodes: usize,

    /// Probability that a node gets a second, branching outgoing edge
    #[arg(long, default_value_t = 0.3)]
    branch: f64,

    /// Probability that a node links back to an earlier node
    #[arg(long, default_value_t = 0.1)]
    cycle: f64,

    /// Number of blank edges with empty endpoints to append
    #[arg(long, default_value_t = 0)]
    dangling: usize,
}

const BODY_KINDS: [NodeKind; 5] = [
    NodeKind::Process,
    NodeKind::Decision,
    NodeKind::Document,
    NodeKind::Input,
    NodeKind::Output,
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    if cli.nodes == 0 {
        eprintln!("Error: --nodes must be at least 1");
        std::process::exit(1);
    }
    for (name, p) in [("--branch", cli.branch), ("--cycle", cli.cycle)] {
        if !(0.0..=1.0).contains(&p) {
            eprintln!("Error: {} ({}) must be between 0 and 1", name, p);
            std::process::exit(1);
        }
    }

    let mut rng = rand::rng();
    let store = generate(&cli, &mut rng);
    info!(
        nodes = store.nodes().len(),
        edges = store.edges().len(),
        "generated flowchart"
    );

    let json_output = to_pretty_json(store.graph())?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved flowchart to '{}'",
        cli.output
    );

    Ok(())
}

/// Builds the flowchart through the store so ids follow the editor's scheme.
fn generate(cli: &Cli, rng: &mut ThreadRng) -> GraphStore {
    let mut store = GraphStore::builder().node_label_prefix("Step").build();
    let mut previous = "1".to_string();

    for index in 1..cli.nodes {
        let id = store.add_node();
        let kind = if index + 1 == cli.nodes {
            NodeKind::End
        } else {
            BODY_KINDS[rng.random_range(0..BODY_KINDS.len())]
        };
        store.update_node_field(&id, NodeField::Kind(kind));
        store.update_node_field(&id, NodeField::Meaning(format!("step {index}")));
        store.connect(&previous, &id);

        if index > 1 && rng.random_bool(cli.branch) {
            // Skip ahead from an earlier node to create a merge.
            let from = rng.random_range(1..index).to_string();
            store.connect(&from, &id);
        }
        if index > 2 && rng.random_bool(cli.cycle) {
            let back = rng.random_range(2..index).to_string();
            store.connect(&id, &back);
        }
        previous = id;
    }

    for _ in 0..cli.dangling {
        store.add_edge();
    }
    store
}
