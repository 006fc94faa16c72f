use std::path::PathBuf;

use flightplan_lib::{build_graph, FlightRecord, Graph};

#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// A–B (10, 5) and B–C (20, 15) plus an isolated city D.
#[allow(dead_code)]
pub fn chain_graph() -> Graph {
    let mut graph = build_graph(&[
        FlightRecord::new("A", "B", 10.0, 5),
        FlightRecord::new("B", "C", 20.0, 15),
    ]);
    graph.add_city("D");
    graph
}

/// Four fully connected cities, giving five simple paths between any pair.
#[allow(dead_code)]
pub fn complete_graph() -> Graph {
    build_graph(&[
        FlightRecord::new("A", "B", 1.0, 40),
        FlightRecord::new("A", "C", 2.0, 30),
        FlightRecord::new("A", "D", 3.0, 20),
        FlightRecord::new("B", "C", 4.0, 10),
        FlightRecord::new("B", "D", 5.0, 50),
        FlightRecord::new("C", "D", 6.0, 60),
    ])
}
