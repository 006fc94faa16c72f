//! Output formatting for flight plan rendering.
//!
//! Text output reproduces the classic console layout, `rich` produces a
//! markdown-flavoured listing, and `json` emits the serialised summaries.

use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;

use flightplan_lib::{PlanRenderMode, PlanSummary};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `Flight n: ...` header followed by `Path n: ...` lines.
    #[default]
    Text,
    /// Markdown-flavoured listing.
    Rich,
    /// Pretty-printed JSON array of plan summaries.
    Json,
}

/// Write every summary to `out` in the requested format.
pub fn write_plans<W: Write>(
    out: &mut W,
    summaries: &[PlanSummary],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_rendered(out, summaries, PlanRenderMode::PlainText),
        OutputFormat::Rich => write_rendered(out, summaries, PlanRenderMode::RichText),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, summaries)
                .context("failed to serialise flight plans")?;
            writeln!(out)?;
            Ok(())
        }
    }
}

fn write_rendered<W: Write>(
    out: &mut W,
    summaries: &[PlanSummary],
    mode: PlanRenderMode,
) -> Result<()> {
    for summary in summaries {
        out.write_all(summary.render(mode).as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flightplan_lib::{FlightPlan, PathResult, Preference, RouteRequest};

    fn summaries() -> Vec<PlanSummary> {
        let found = FlightPlan {
            request: RouteRequest::new("A", "B", Preference::Cost),
            paths: vec![PathResult {
                cities: vec!["A".into(), "B".into()],
                total_cost: 12.5,
                total_time: 30,
            }],
        };
        let missing = FlightPlan {
            request: RouteRequest::new("A", "Z", Preference::Time),
            paths: Vec::new(),
        };
        vec![
            PlanSummary::from_plan(1, &found),
            PlanSummary::from_plan(2, &missing),
        ]
    }

    #[test]
    fn text_output_concatenates_plans() {
        let mut buffer = Vec::new();
        write_plans(&mut buffer, &summaries(), OutputFormat::Text).expect("write text");

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Flight 1: A, B (Cost)\nPath 1: A -> B. Time: 30 Cost: 12.50\n\
             No viable flight plan from A to Z\n"
        );
    }

    #[test]
    fn json_output_is_an_array() {
        let mut buffer = Vec::new();
        write_plans(&mut buffer, &summaries(), OutputFormat::Json).expect("write json");

        let value: serde_json::Value = serde_json::from_slice(&buffer).expect("valid json");
        let plans = value.as_array().expect("array");
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0]["paths"][0]["total_cost"], 12.5);
        assert_eq!(plans[1]["viable"], false);
    }
}
