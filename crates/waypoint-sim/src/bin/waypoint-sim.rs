//! Waypoint Route Animator
//!
//! Load a topology file, compare every algorithm on it, then animate one.

use std::env;
use std::time::Duration;

use waypoint_routing::AlgorithmKind;
use waypoint_sim::{
    render_report, run_batch, run_playback, ConsoleSink, SimulationController, DEFAULT_TICK,
};
use waypoint_topology::{load_path, VertexId};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Parse command line args
    let args: Vec<String> = env::args().collect();

    let Some(path) = args.get(1) else {
        eprintln!("usage: waypoint-sim <topology-file> [algorithm] [source] [target] [tick-ms]");
        std::process::exit(2);
    };

    let kind: AlgorithmKind = match args.get(2) {
        Some(name) => name.parse()?,
        None => AlgorithmKind::Dijkstra,
    };

    let topology = load_path(path)?;
    let last = VertexId(topology.vertex_count() as u32 - 1);

    let source = args
        .get(3)
        .and_then(|s| s.parse().ok())
        .map(VertexId)
        .unwrap_or(VertexId(0));

    let target = args
        .get(4)
        .and_then(|s| s.parse().ok())
        .map(VertexId)
        .unwrap_or(last);

    let tick = args
        .get(5)
        .and_then(|s| s.parse().ok())
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_TICK);

    println!("Waypoint Route Animator");
    println!("=======================");
    println!();
    println!(
        "Loaded {} vertices, {} edges from {}",
        topology.vertex_count(),
        topology.edge_count(),
        path
    );
    println!();

    println!("Comparing algorithms from {} (target {}):", source, target);
    println!();
    print!("{}", render_report(&run_batch(&topology, source, target, source)));
    println!();

    println!("Animating {} at one frame per {:?}:", kind, tick);
    println!();

    let mut controller = SimulationController::new(topology, ConsoleSink::default());
    let aim = if kind.is_tree() { None } else { Some(target) };
    controller.start(kind, source, aim)?;
    let emitted = run_playback(&mut controller, tick).await;

    println!();
    if let Some(result) = controller.result() {
        println!("Animation complete: {} frames ({})", emitted, result);
    }

    Ok(())
}
