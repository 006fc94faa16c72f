use serde::Serialize;
use tracing::debug;

use crate::graph::Graph;

/// Simple path between two cities with its accumulated cost and time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub cities: Vec<String>,
    pub total_cost: f64,
    pub total_time: u64,
}

impl PathResult {
    /// Number of flights taken along the path.
    pub fn hop_count(&self) -> usize {
        self.cities.len().saturating_sub(1)
    }
}

/// Partial path waiting on the work stack.
#[derive(Debug, Clone)]
struct SearchState {
    current: String,
    path: Vec<String>,
    cost: f64,
    time: u64,
}

impl SearchState {
    fn origin(start: &str) -> Self {
        Self {
            current: start.to_string(),
            path: vec![start.to_string()],
            cost: 0.0,
            time: 0,
        }
    }

    fn has_visited(&self, city: &str) -> bool {
        self.path.iter().any(|visited| visited == city)
    }

    fn into_result(self) -> PathResult {
        PathResult {
            cities: self.path,
            total_cost: self.cost,
            total_time: self.time,
        }
    }
}

/// Enumerate every simple path from `start` to `goal`.
///
/// The search uses an explicit LIFO stack, so depth is bounded by memory
/// rather than the call stack. Flights are pushed in their stored order,
/// which means the last-listed flight of a city is explored first; results
/// are returned in that discovery order.
///
/// A path never visits a city twice and always contains at least one
/// flight. Unknown cities and unreachable goals produce an empty list.
pub fn find_paths(graph: &Graph, start: &str, goal: &str) -> Vec<PathResult> {
    let mut results = Vec::new();
    let mut stack = vec![SearchState::origin(start)];
    let mut expanded = 0usize;

    while let Some(state) = stack.pop() {
        if state.current == goal && state.path.len() >= 2 {
            results.push(state.into_result());
            continue;
        }

        let Some(city) = graph.find_city(&state.current) else {
            continue;
        };
        expanded += 1;

        for flight in city.flights() {
            if state.has_visited(&flight.destination) {
                continue;
            }

            let mut path = state.path.clone();
            path.push(flight.destination.clone());
            stack.push(SearchState {
                current: flight.destination.clone(),
                path,
                cost: state.cost + flight.cost,
                time: state.time + u64::from(flight.time),
            });
        }
    }

    debug!(start, goal, expanded, found = results.len(), "path enumeration finished");
    results
}
