mod common;

use flightplan_lib::{build_graph, load_flights, FlightRecord, Graph};

#[test]
fn duplicate_city_names_collapse_to_one() {
    let mut graph = Graph::new();
    graph.add_city("Lisbon");
    graph.add_city("Lisbon");

    assert_eq!(graph.city_count(), 1);
    assert_eq!(graph.city_names(), vec!["Lisbon"]);
}

#[test]
fn every_flight_is_mirrored_with_identical_cost_and_time() {
    let records = vec![
        FlightRecord::new("Dallas", "Austin", 98.0, 47),
        FlightRecord::new("Austin", "Houston", 95.5, 39),
        FlightRecord::new("Dallas", "Houston", 101.0, 51),
    ];
    let graph = build_graph(&records);

    for record in &records {
        let forward = graph
            .flights(&record.origin)
            .iter()
            .find(|flight| flight.destination == record.destination)
            .expect("forward flight present");
        let reverse = graph
            .flights(&record.destination)
            .iter()
            .find(|flight| flight.destination == record.origin)
            .expect("reverse flight present");

        assert_eq!(forward.cost, record.cost);
        assert_eq!(forward.time, record.time);
        assert_eq!(reverse.cost, record.cost);
        assert_eq!(reverse.time, record.time);
    }
    assert_eq!(graph.flight_count(), records.len() * 2);
}

#[test]
fn flights_keep_insertion_order() {
    let graph = build_graph(&[
        FlightRecord::new("Hub", "Zeta", 1.0, 1),
        FlightRecord::new("Hub", "Alpha", 1.0, 1),
        FlightRecord::new("Mid", "Hub", 1.0, 1),
    ]);

    let destinations: Vec<_> = graph
        .flights("Hub")
        .iter()
        .map(|flight| flight.destination.as_str())
        .collect();
    assert_eq!(destinations, vec!["Zeta", "Alpha", "Mid"]);
}

#[test]
fn flight_to_unknown_city_adds_nothing() {
    let mut graph = common::chain_graph();
    let before = graph.flight_count();

    assert!(!graph.add_flight("A", "Nowhere", 1.0, 1));
    assert_eq!(graph.flight_count(), before);
    assert!(graph.find_city("Nowhere").is_none());
}

#[test]
fn fixture_flight_data_builds_a_connected_graph() {
    let records =
        load_flights(&common::fixtures_dir().join("flights.txt")).expect("fixture loads");
    let graph = build_graph(&records);

    assert_eq!(graph.city_count(), 5);
    assert_eq!(graph.flight_count(), records.len() * 2);
    assert!(graph.contains("Dallas"));
    assert!(graph.contains("Chicago"));
}
