use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, info};

/// Outgoing flight stored on its origin city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Flight {
    pub destination: String,
    pub cost: f64,
    pub time: u32,
}

/// Named node in the flight graph.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    name: String,
    flights: Vec<Flight>,
}

impl City {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            flights: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outgoing flights in insertion order.
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }
}

/// One line of flight data as handed over by the input layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightRecord {
    pub origin: String,
    pub destination: String,
    pub cost: f64,
    pub time: u32,
}

impl FlightRecord {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        cost: f64,
        time: u32,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            cost,
            time,
        }
    }
}

/// Graph of cities connected by bidirectional flights.
///
/// Every flight added through [`Graph::add_flight`] is stored twice, once on
/// each endpoint, with identical cost and time. The graph is built once and
/// only read afterwards, so it can be shared freely between queries.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    cities: HashMap<String, City>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a city with no flights. Re-adding an existing name is a no-op.
    pub fn add_city(&mut self, name: &str) {
        if !self.cities.contains_key(name) {
            self.cities.insert(name.to_string(), City::new(name));
        }
    }

    /// Add a flight in both directions between two existing cities.
    ///
    /// When either endpoint is unknown nothing is added and `false` is
    /// returned; this is not treated as an error.
    pub fn add_flight(&mut self, from: &str, to: &str, cost: f64, time: u32) -> bool {
        if !self.cities.contains_key(from) || !self.cities.contains_key(to) {
            debug!(from, to, "skipping flight with unknown endpoint");
            return false;
        }

        if let Some(city) = self.cities.get_mut(from) {
            city.flights.push(Flight {
                destination: to.to_string(),
                cost,
                time,
            });
        }
        if let Some(city) = self.cities.get_mut(to) {
            city.flights.push(Flight {
                destination: from.to_string(),
                cost,
                time,
            });
        }
        true
    }

    pub fn find_city(&self, name: &str) -> Option<&City> {
        self.cities.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.cities.contains_key(name)
    }

    /// Return the outgoing flights for a city, or an empty slice when unknown.
    pub fn flights(&self, name: &str) -> &[Flight] {
        self.cities
            .get(name)
            .map(City::flights)
            .unwrap_or(&[])
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Number of directed flight entries (twice the number of added flights).
    pub fn flight_count(&self) -> usize {
        self.cities.values().map(|city| city.flights.len()).sum()
    }

    /// City names in lexical order.
    pub fn city_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.cities.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Build a graph from flight records, preserving their order on each city.
pub fn build_graph(records: &[FlightRecord]) -> Graph {
    let mut graph = Graph::new();
    for record in records {
        graph.add_city(&record.origin);
        graph.add_city(&record.destination);
        graph.add_flight(&record.origin, &record.destination, record.cost, record.time);
    }

    info!(
        cities = graph.city_count(),
        flights = graph.flight_count(),
        "flight graph built"
    );
    graph
}
