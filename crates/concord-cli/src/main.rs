//! Concord CLI - relation matrices, ranking reconciliation and fuzzy inference

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use concord_core::{load_document, Concord, ConcordConfig};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "concord")]
#[command(version, about = "Concord - relation matrices, ranking reconciliation and fuzzy inference")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(short, long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Adjacency matrix of an undirected edge list
    Adjacency {
        /// Edge list file, one `u,v` pair per line
        edges: PathBuf,
    },
    /// Relation matrices r1..r5 of a directed edge list
    Relations {
        /// Edge list file, one `u,v` pair per line
        edges: PathBuf,
    },
    /// Reconcile two rankings into a kernel and a consistent ranking
    Reconcile {
        /// First ranking (JSON)
        ranking_a: PathBuf,
        /// Second ranking (JSON)
        ranking_b: PathBuf,
    },
    /// Infer a crisp output value with Mamdani inference
    Infer {
        /// Input variable terms (JSON)
        #[arg(long)]
        input_terms: PathBuf,
        /// Output variable terms (JSON)
        #[arg(long)]
        output_terms: PathBuf,
        /// Rule base (JSON)
        #[arg(long)]
        rules: PathBuf,
        /// Crisp input value
        #[arg(long, allow_hyphen_values = true)]
        value: f64,
    },
    /// Check configuration validity
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => ConcordConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ConcordConfig::default(),
    };
    if cli.pretty {
        config.output.pretty = true;
    }
    let concord = Concord::new(config).context("Invalid configuration")?;

    let output = match cli.command {
        Commands::Adjacency { edges } => {
            let matrix = concord
                .adjacency(&read(&edges)?)
                .with_context(|| format!("Failed to build adjacency matrix from {}", edges.display()))?;
            concord.render(&matrix)?
        }
        Commands::Relations { edges } => {
            let relations = concord
                .relations(&read(&edges)?)
                .with_context(|| format!("Failed to build relations from {}", edges.display()))?;
            concord.render(&relations)?
        }
        Commands::Reconcile {
            ranking_a,
            ranking_b,
        } => {
            let result = concord
                .reconcile(&read(&ranking_a)?, &read(&ranking_b)?)
                .with_context(|| {
                    format!(
                        "Failed to reconcile {} with {}",
                        ranking_a.display(),
                        ranking_b.display()
                    )
                })?;
            concord.render(&result)?
        }
        Commands::Infer {
            input_terms,
            output_terms,
            rules,
            value,
        } => {
            let crisp = concord
                .infer(
                    &read(&input_terms)?,
                    &read(&output_terms)?,
                    &read(&rules)?,
                    value,
                )
                .context("Fuzzy inference failed")?;
            concord.render(&crisp)?
        }
        Commands::Check => concord.render(concord.config())?,
    };

    println!("{}", output);
    Ok(())
}

fn read(path: &Path) -> anyhow::Result<String> {
    debug!("Reading {}", path.display());
    load_document(path).with_context(|| format!("Failed to read input {}", path.display()))
}
