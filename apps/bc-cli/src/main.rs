use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use bc_graph::{Graph, GraphError};
use bc_model::ModelError;
use bc_pg::{ContentType, FormatError, PgDocument, PgJsonFormatter};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "bc-cli")]
#[command(about = "Basin connectivity graphs as PG-JSON", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the connectivity graph of every basin in a file
    Graph {
        /// Path to the basin file (JSON, or YAML by extension)
        basin_path: PathBuf,
        /// Output media type or alias (pgjson, named-pgjson)
        #[arg(short, long, default_value = "pgjson")]
        format: String,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a basin file
    Validate {
        /// Path to the basin file
        basin_path: PathBuf,
    },
    /// Summarize a PG-JSON document
    Inspect {
        /// Path to a PG-JSON document
        document_path: PathBuf,
    },
}

type CliResult<T> = Result<T, CliError>;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Plain lists are concatenated documents, named lists are one array.
#[derive(Deserialize)]
#[serde(untagged)]
enum InspectInput {
    Many(Vec<PgDocument>),
    One(PgDocument),
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into());
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();

    match cli.command {
        Commands::Graph {
            basin_path,
            format,
            pretty,
            output,
        } => cmd_graph(&basin_path, &format, pretty, output.as_deref()),
        Commands::Validate { basin_path } => cmd_validate(&basin_path),
        Commands::Inspect { document_path } => cmd_inspect(&document_path),
    }
}

fn cmd_graph(
    basin_path: &Path,
    format: &str,
    pretty: bool,
    output: Option<&Path>,
) -> CliResult<()> {
    let content_type: ContentType = format.parse()?;
    let basins = bc_model::load_validated(basin_path)?;
    tracing::debug!(
        path = %basin_path.display(),
        basins = basins.len(),
        "loaded basins"
    );

    let formatter = PgJsonFormatter::new(content_type).pretty(pretty);
    let json = match basins.as_slice() {
        [basin] => formatter.format(basin)?,
        all => formatter.format_all(all)?,
    };

    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            eprintln!("✓ Wrote {} to {}", content_type, path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_validate(basin_path: &Path) -> CliResult<()> {
    println!("Validating basin file: {}", basin_path.display());
    let basins = bc_model::load_validated(basin_path)?;
    for basin in &basins {
        let graph = bc_graph::build_basin_graph(basin)?;
        println!(
            "  {} ({} nodes, {} edges)",
            basin.name,
            graph.nodes().len(),
            graph.edges().len()
        );
    }
    println!("✓ {} basin(s) are valid", basins.len());
    Ok(())
}

fn cmd_inspect(document_path: &Path) -> CliResult<()> {
    let content = std::fs::read_to_string(document_path)?;

    let inputs = serde_json::Deserializer::from_str(&content).into_iter::<InspectInput>();
    let mut documents = Vec::new();
    for input in inputs {
        match input? {
            InspectInput::Many(many) => documents.extend(many),
            InspectInput::One(one) => documents.push(one),
        }
    }

    if documents.is_empty() {
        println!("No graphs found in document");
        return Ok(());
    }

    for (i, document) in documents.iter().enumerate() {
        let graph = bc_pg::decode(document.graph())?;
        match document.name() {
            Some(name) => println!("{name}:"),
            None => println!("Graph {}:", i + 1),
        }
        print_summary(&graph);
    }
    Ok(())
}

fn print_summary(graph: &Graph) {
    let mut nodes: BTreeMap<&str, usize> = BTreeMap::new();
    for node in graph.nodes() {
        *nodes.entry(node.label()).or_default() += 1;
    }
    let mut edges: BTreeMap<&str, usize> = BTreeMap::new();
    for edge in graph.edges() {
        *edges.entry(edge.label()).or_default() += 1;
    }

    println!("  Nodes: {}", graph.nodes().len());
    for (label, count) in &nodes {
        println!("    {label}: {count}");
    }
    println!("  Edges: {}", graph.edges().len());
    for (label, count) in &edges {
        println!("    {label}: {count}");
    }
}
