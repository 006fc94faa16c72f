use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use flightplan_cli::output::OutputFormat;
use flightplan_lib::{PathOrdering, PlanOptions, DEFAULT_MAX_PATHS};

mod commands;

use commands::plan::{handle_plan_command, PlanCommandArgs};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Enumerate cycle-free flight plans between cities"
)]
struct Cli {
    /// Flight data file: a count line, then `origin|destination|cost|time` lines.
    /// Prompted for on stdin when omitted.
    flights: Option<PathBuf>,

    /// Request file: a count line, then `origin|destination|preference` lines.
    /// Prompted for on stdin when omitted.
    requests: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// How paths are ordered before only the first few are kept.
    #[arg(long, value_enum, default_value_t = OrderingArg::Discovery)]
    ordering: OrderingArg,

    /// Maximum number of paths reported per request.
    #[arg(long, default_value_t = DEFAULT_MAX_PATHS, value_parser = parse_max_paths)]
    max_paths: usize,
}

/// Path ordering as exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OrderingArg {
    /// Depth-first discovery order; the request preference is only a label.
    Discovery,
    /// Sort by the request preference (time or cost) before truncating.
    Preference,
}

impl From<OrderingArg> for PathOrdering {
    fn from(value: OrderingArg) -> Self {
        match value {
            OrderingArg::Discovery => PathOrdering::Discovery,
            OrderingArg::Preference => PathOrdering::Preference,
        }
    }
}

fn parse_max_paths(value: &str) -> std::result::Result<usize, String> {
    let parsed = value
        .parse::<usize>()
        .map_err(|err| format!("'{value}' is not a valid path count: {err}"))?;
    if parsed == 0 {
        return Err("at least one path must be reported".to_string());
    }
    Ok(parsed)
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let args = PlanCommandArgs {
        flights: cli.flights,
        requests: cli.requests,
        format: cli.format,
        options: PlanOptions {
            max_paths: cli.max_paths,
            ordering: cli.ordering.into(),
        },
    };
    handle_plan_command(&args)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
