//! Flight planner library entry points.
//!
//! This crate builds a bidirectional flight graph from flight records,
//! enumerates simple paths between two cities, and formats the retained
//! paths for display. Higher-level consumers (the CLI) should only depend on
//! the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod input;
pub mod output;
pub mod path;
pub mod routing;

pub use error::{Error, Result};
pub use graph::{build_graph, City, Flight, FlightRecord, Graph};
pub use input::{load_flights, load_requests, parse_flights, parse_requests};
pub use output::{format_path, format_route, PathSummary, PlanRenderMode, PlanSummary};
pub use path::{find_paths, PathResult};
pub use routing::{
    plan_route, FlightPlan, PathOrdering, PlanOptions, Preference, RouteRequest,
    DEFAULT_MAX_PATHS,
};
