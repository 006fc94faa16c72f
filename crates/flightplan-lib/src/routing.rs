use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crate::graph::Graph;
use crate::path::{find_paths, PathResult};

/// Number of paths reported per request unless configured otherwise.
pub const DEFAULT_MAX_PATHS: usize = 3;

/// Metric a request asks to optimise for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Preference {
    Time,
    Cost,
}

impl Preference {
    /// `'T'` selects time; every other character selects cost.
    pub fn from_char(value: char) -> Self {
        if value == 'T' {
            Preference::Time
        } else {
            Preference::Cost
        }
    }

    /// Human-readable label shown in textual renderings.
    pub fn label(self) -> &'static str {
        match self {
            Preference::Time => "Time",
            Preference::Cost => "Cost",
        }
    }

    fn compare(self, a: &PathResult, b: &PathResult) -> Ordering {
        match self {
            Preference::Time => a
                .total_time
                .cmp(&b.total_time)
                .then_with(|| a.total_cost.total_cmp(&b.total_cost)),
            Preference::Cost => a
                .total_cost
                .total_cmp(&b.total_cost)
                .then_with(|| a.total_time.cmp(&b.total_time)),
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How enumerated paths are ordered before the cap is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathOrdering {
    /// Keep the depth-first discovery order. The preference only labels output.
    #[default]
    Discovery,
    /// Stable sort by the requested preference, ties broken by the other metric.
    Preference,
}

impl fmt::Display for PathOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            PathOrdering::Discovery => "discovery",
            PathOrdering::Preference => "preference",
        };
        f.write_str(value)
    }
}

/// Options applied to every request of a planning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanOptions {
    pub max_paths: usize,
    pub ordering: PathOrdering,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            max_paths: DEFAULT_MAX_PATHS,
            ordering: PathOrdering::default(),
        }
    }
}

/// One route request: where from, where to, and what to optimise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteRequest {
    pub origin: String,
    pub destination: String,
    pub preference: Preference,
}

impl RouteRequest {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        preference: Preference,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            preference,
        }
    }
}

/// Paths retained for a single request.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightPlan {
    pub request: RouteRequest,
    pub paths: Vec<PathResult>,
}

impl FlightPlan {
    /// `true` when no viable path connects the two cities.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Enumerate paths for a request, then order and cap them per `options`.
pub fn plan_route(graph: &Graph, request: &RouteRequest, options: &PlanOptions) -> FlightPlan {
    for city in [&request.origin, &request.destination] {
        if !graph.contains(city) {
            debug!(city = %city, "request references a city with no flights");
        }
    }

    let mut paths = find_paths(graph, &request.origin, &request.destination);
    let discovered = paths.len();

    if options.ordering == PathOrdering::Preference {
        paths.sort_by(|a, b| request.preference.compare(a, b));
    }
    paths.truncate(options.max_paths);

    info!(
        origin = %request.origin,
        destination = %request.destination,
        preference = %request.preference,
        ordering = %options.ordering,
        discovered,
        retained = paths.len(),
        "flight plan computed"
    );

    FlightPlan {
        request: request.clone(),
        paths,
    }
}
