use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Debug, Parser)]
#[command(
    name = "ratatoskrs-cli",
    version,
    about = "ratatoskrs command line interface"
)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Version,
    #[command(about = "Per-read sequence entropy and traversal bounds as TSV")]
    Entropy {
        #[arg(long)]
        reads: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
        /// Window length; the whole read when omitted.
        #[arg(long)]
        window: Option<usize>,
        #[arg(short = 'k', long, default_value_t = 63)]
        k: usize,
        #[arg(long, default_value_t = 1000)]
        max_len_path: usize,
    },
    #[command(about = "Build the haplotype registry and report its content")]
    PhaseStats {
        #[arg(long)]
        reads: PathBuf,
        #[arg(long = "phase", required = true, num_args = 1..)]
        phase: Vec<PathBuf>,
    },
    #[command(about = "Clamp FASTQ quality strings into the standard Sanger range")]
    StdQual {
        #[arg(long)]
        reads: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    #[command(about = "Decode IUPAC ambiguity symbols into nucleotide flags")]
    Ambiguity {
        #[arg(required = true)]
        symbols: Vec<String>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Commands::Version => commands::version::run(),
        Commands::Entropy {
            reads,
            out,
            window,
            k,
            max_len_path,
        } => commands::entropy::run(commands::entropy::EntropyArgs {
            reads,
            out,
            window,
            k,
            max_len_path,
        }),
        Commands::PhaseStats { reads, phase } => commands::phase_stats::run(&reads, &phase),
        Commands::StdQual { reads, out } => commands::std_qual::run(&reads, &out),
        Commands::Ambiguity { symbols } => commands::ambiguity::run(&symbols),
    }
}
