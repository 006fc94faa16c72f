//! Plan command handler: load both input files and answer every request.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use flightplan_cli::output::{write_plans, OutputFormat};
use flightplan_cli::prompt::{resolve_path, FLIGHT_DATA_PROMPT, REQUEST_FILE_PROMPT};
use flightplan_lib::{
    build_graph, load_flights, load_requests, plan_route, PlanOptions, PlanSummary,
};

/// Arguments for the plan command.
#[derive(Debug, Clone)]
pub struct PlanCommandArgs {
    /// Flight data file, prompted for when absent.
    pub flights: Option<PathBuf>,
    /// Request file, prompted for when absent.
    pub requests: Option<PathBuf>,
    pub format: OutputFormat,
    pub options: PlanOptions,
}

/// Handle the plan command.
///
/// The flight graph is built completely before the request file is resolved,
/// and requests are answered one at a time in file order.
pub fn handle_plan_command(args: &PlanCommandArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    // JSON output must be the only thing on stdout.
    let mut prompts: Box<dyn Write> = if args.format == OutputFormat::Json {
        Box::new(io::stderr().lock())
    } else {
        Box::new(io::stdout().lock())
    };

    let flights_path =
        resolve_path(args.flights.clone(), FLIGHT_DATA_PROMPT, &mut input, &mut prompts)
            .context("failed to read the flight data path")?;
    let records = load_flights(&flights_path).with_context(|| {
        format!("failed to load flight data from {}", flights_path.display())
    })?;
    let graph = build_graph(&records);

    let requests_path =
        resolve_path(args.requests.clone(), REQUEST_FILE_PROMPT, &mut input, &mut prompts)
            .context("failed to read the request file path")?;
    prompts.flush()?;
    drop(prompts);
    let requests = load_requests(&requests_path).with_context(|| {
        format!("failed to load requests from {}", requests_path.display())
    })?;

    info!(requests = requests.len(), "answering flight requests");
    let summaries = requests
        .iter()
        .enumerate()
        .map(|(offset, request)| {
            let plan = plan_route(&graph, request, &args.options);
            PlanSummary::from_plan(offset + 1, &plan)
        })
        .collect::<Vec<_>>();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_plans(&mut out, &summaries, args.format)?;
    out.flush()?;
    Ok(())
}
