use std::fmt::Write;

use serde::Serialize;

use crate::path::PathResult;
use crate::routing::{FlightPlan, Preference};

/// Presentation style for turning a [`PlanSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanRenderMode {
    /// Console layout: `Flight 1: A, C (Time)` followed by `Path n:` lines.
    PlainText,
    /// Markdown-flavoured layout.
    RichText,
}

/// Join the cities of a path with ` -> `.
pub fn format_route(path: &PathResult) -> String {
    path.cities.join(" -> ")
}

/// Format a path as `A -> B -> C. Time: 20 Cost: 30.00`.
pub fn format_path(path: &PathResult) -> String {
    path_line(&format_route(path), path.total_time, path.total_cost)
}

fn path_line(route: &str, total_time: u64, total_cost: f64) -> String {
    format!("{route}. Time: {total_time} Cost: {total_cost:.2}")
}

/// Single retained path within a [`PlanSummary`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PathSummary {
    pub index: usize,
    pub route: String,
    pub cities: Vec<String>,
    pub hops: usize,
    pub total_time: u64,
    pub total_cost: f64,
}

/// Structured representation of one answered request that higher-level
/// consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlanSummary {
    pub index: usize,
    pub origin: String,
    pub destination: String,
    pub preference: Preference,
    pub viable: bool,
    pub paths: Vec<PathSummary>,
}

impl PlanSummary {
    /// Convert a [`FlightPlan`] into a summary. `index` is 1-based.
    pub fn from_plan(index: usize, plan: &FlightPlan) -> Self {
        let paths = plan
            .paths
            .iter()
            .enumerate()
            .map(|(offset, path)| PathSummary {
                index: offset + 1,
                route: format_route(path),
                cities: path.cities.clone(),
                hops: path.hop_count(),
                total_time: path.total_time,
                total_cost: path.total_cost,
            })
            .collect::<Vec<_>>();

        Self {
            index,
            origin: plan.request.origin.clone(),
            destination: plan.request.destination.clone(),
            preference: plan.request.preference,
            viable: !paths.is_empty(),
            paths,
        }
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: PlanRenderMode) -> String {
        match mode {
            PlanRenderMode::PlainText => self.render_plain(),
            PlanRenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        if !self.viable {
            let _ = writeln!(
                buffer,
                "No viable flight plan from {} to {}",
                self.origin, self.destination
            );
            return buffer;
        }

        let _ = writeln!(
            buffer,
            "Flight {}: {}, {} ({})",
            self.index,
            self.origin,
            self.destination,
            self.preference.label()
        );
        for path in &self.paths {
            let _ = writeln!(
                buffer,
                "Path {}: {}",
                path.index,
                path_line(&path.route, path.total_time, path.total_cost)
            );
        }
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Flight {}** _{} → {}_ (by {})",
            self.index,
            self.origin,
            self.destination,
            self.preference.label()
        );
        if !self.viable {
            let _ = writeln!(buffer, "* no viable flight plan");
            return buffer;
        }
        for path in &self.paths {
            let _ = writeln!(
                buffer,
                "* {}. **{}** ({} hops, `{}` min, `{:.2}`)",
                path.index, path.route, path.hops, path.total_time, path.total_cost
            );
        }
        buffer
    }
}
