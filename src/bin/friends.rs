//! Friends CLI
//!
//! Loads an acquaintance graph from a text file and runs one query on it.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default: `friends=info,friendship_graph=info`)
//! - `LOG_FORMAT`: "json" for structured logs, "pretty" for development (default: pretty)
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin friends --features cli -- people.txt path sam bob
//! cargo run --bin friends --features cli -- people.txt school rutgers
//! ```

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use friendship_graph::{
    text, ArticulationPointFinder, ComponentFinder, GraphConfig, GraphFingerprint, PeopleGraph,
    SchoolSubgraphExtractor, ShortestPathFinder,
};

/// Friends: structural queries over an acquaintance graph.
#[derive(Parser)]
#[command(name = "friends")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Graph file in the pipe-delimited text format
    file: PathBuf,

    /// JSON file with graph construction settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the subgraph of people attending a school
    School {
        /// School name (case-insensitive; empty selects people without a school)
        school: String,
    },

    /// Print the shortest introduction chain between two people
    Path {
        /// Starting person
        from: String,
        /// Destination person
        to: String,
    },

    /// Print every connected group of people
    #[command(alias = "cliques")]
    Components,

    /// Print the people whose removal disconnects a group
    Connectors,

    /// Print the whole graph
    Show,

    /// Print the content fingerprint of the graph as JSON
    Fingerprint,
}

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "friends=info,friendship_graph=info";

/// Initialize the tracing subscriber with JSON or pretty format
fn init_tracing() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    if log_format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_target(true).with_writer(io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(io::stderr))
            .init();
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<GraphConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(GraphConfig::from_json(&std::fs::read_to_string(path)?)?),
        None => Ok(GraphConfig::default()),
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(cli.config.as_ref())?;
    let file = File::open(&cli.file)?;
    let graph = text::read_with(BufReader::new(file), &config)?;

    info!(
        file = %cli.file.display(),
        persons = graph.len(),
        edges = graph.edge_count(),
        "Graph loaded"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::School { school } => {
            let subgraph = SchoolSubgraphExtractor::extract(&graph, &school);
            text::write(&subgraph, &mut out)?;
        }
        Commands::Path { from, to } => match ShortestPathFinder::find(&graph, &from, &to)? {
            Some(chain) => writeln!(out, "{chain}")?,
            None => writeln!(out, "No introduction chain between {} and {}", from.trim(), to.trim())?,
        },
        Commands::Components => print_components(&graph, &mut out)?,
        Commands::Connectors => {
            for person in ArticulationPointFinder::find(&graph) {
                writeln!(out, "{}", person.name())?;
            }
        }
        Commands::Show => text::write(&graph, &mut out)?,
        Commands::Fingerprint => {
            let fingerprint = GraphFingerprint::compute(&graph)?;
            writeln!(out, "{}", serde_json::to_string_pretty(&fingerprint)?)?;
        }
    }

    Ok(())
}

fn print_components(graph: &PeopleGraph, out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    for (i, component) in ComponentFinder::find(graph).iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        text::write(component, &mut *out)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Query failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
