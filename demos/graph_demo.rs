//! Builds the thirteen-vertex demo graph and prints each query next to the
//! answer it should give.
//!
//! Usage:
//!   cargo run --example graph_demo
//!   cargo run --example graph_demo -- --backend matrix --verbose

use clap::{Parser, ValueEnum};
use digraphs::{prelude::*, tracing_support::init_tracing};

/// Exercise a directed graph backend and print expected-vs-actual results.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Which storage backend to exercise
    #[arg(long, value_enum, default_value_t = Backend::Both)]
    backend: Backend,

    /// Log every vertex and edge as it is added
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Backend {
    List,
    Matrix,
    Both,
}

const EDGES: [(usize, usize); 12] = [
    (0, 1),
    (0, 2),
    (2, 3),
    (3, 4),
    (3, 5),
    (4, 6),
    (4, 7),
    (6, 8),
    (5, 10),
    (5, 9),
    (9, 11),
    (9, 12),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if matches!(args.backend, Backend::List | Backend::Both) {
        println!("== adjacency list ==");
        run(AdjacencyListGraph::new())?;
    }
    if matches!(args.backend, Backend::Matrix | Backend::Both) {
        println!("== adjacency matrix ==");
        let graph = AdjacencyMatrixGraph::new();
        let initial_capacity = graph.capacity();
        let graph = run(graph)?;
        println!(
            "Matrix capacity grew from {initial_capacity} to {}",
            graph.capacity()
        );
    }
    Ok(())
}

fn run<G: GraphMut>(mut graph: G) -> Result<G, GraphError> {
    println!("Initial vertices in the graph: {}", graph.num_vertices());
    println!("Initial edges in the graph: {}", graph.num_edges());

    graph.add_vertices(13);
    graph.add_edges(EDGES)?;
    println!("Vertex count: {}, edge count: {}", graph.num_vertices(), graph.num_edges());
    println!();

    println!("Vertex 0's out-neighbors should be 1 and 2: {:?}", graph.neighbors(0)?);
    println!("Vertex 1's out-neighbors should be none: {:?}", graph.neighbors(1)?);
    println!("Vertex 2's out-neighbors should be 3: {:?}", graph.neighbors(2)?);
    println!("Vertex 3's out-neighbors should be 4 and 5: {:?}", graph.neighbors(3)?);
    println!("Vertex 9's out-neighbors should be 11 and 12: {:?}", graph.neighbors(9)?);
    println!();

    println!("Vertex 0's in-neighbors should be none: {:?}", graph.in_neighbors(0)?);
    println!("Vertex 1's in-neighbors should be 0: {:?}", graph.in_neighbors(1)?);
    println!("Vertex 3's in-neighbors should be 2: {:?}", graph.in_neighbors(3)?);
    println!("Vertex 7's in-neighbors should be 4: {:?}", graph.in_neighbors(7)?);
    println!();

    println!("Vertex 0's two-hop neighbors should be 3: {:?}", graph.distance2(0)?);
    println!("Vertex 4's two-hop neighbors should be 8: {:?}", graph.distance2(4)?);
    println!("Vertex 5's two-hop neighbors should be 11 and 12: {:?}", graph.distance2(5)?);
    println!();

    println!("Degree sequence: {:?}", graph.degree_sequence()?);
    println!();

    for (name, order) in [
        ("Depth-first", SearchOrder::DepthFirst),
        ("Breadth-first", SearchOrder::BreadthFirst),
    ] {
        println!("{name} path 0 -> 10 should be found: {:?}", graph.find_path(0, 10, order)?);
        println!("{name} path 1 -> 3 should not be found: {:?}", graph.find_path(1, 3, order)?);
    }

    if let Err(err) = graph.add_edge(0, 13) {
        println!("Adding edge 0 -> 13 should fail: {err}");
    }
    println!();
    Ok(graph)
}
