mod commands;
mod config;
mod error;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::CliConfig;

#[derive(Parser)]
#[command(
    name = "metalindex",
    version,
    about = "Heavy-metal pollution and health-risk indices for water samples"
)]
struct Cli {
    /// Config file (default: <config dir>/metalindex/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "metalindex_core=trace"
    #[arg(long, global = true, value_name = "FILTER")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate one index for a sample
    Calculate {
        /// Index: hpi, mei, metal-index, risk-index, hazard-quotient,
        /// hazard-index, carcinogenic-risk, non-carcinogenic-risk
        index: String,

        /// Path to a sample JSON file
        sample_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Calculate every index for a sample
    Comprehensive {
        /// Path to a sample JSON file
        sample_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long)]
        output: Option<String>,

        /// Show per-metal values for every index
        #[arg(long)]
        verbose: bool,
    },
    /// Calculate HPI and MEI for every sample in a file
    Batch {
        /// Path to a JSON file holding an array of samples
        samples_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print the heavy-metal drinking-water standards
    Standards {
        /// Output format: table (default) or json
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Explain the classification bands of an index
    Bands {
        /// Index name or abbreviation (e.g., "hpi", "hq")
        index: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match CliConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    init_logging(cli.log_level.as_deref(), &config);

    let result = match cli.command {
        Commands::Calculate {
            index,
            sample_file,
            output,
        } => commands::calculate::run(&index, &sample_file, &config.output_format(output)),
        Commands::Comprehensive {
            sample_file,
            output,
            verbose,
        } => commands::comprehensive::run(&sample_file, &config.output_format(output), verbose),
        Commands::Batch {
            samples_file,
            output,
        } => commands::batch::run(&samples_file, &config.output_format(output)),
        Commands::Standards { output } => commands::standards::run(&config.output_format(output)),
        Commands::Bands { index } => commands::bands::run(&index),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so JSON on stdout stays parseable.
fn init_logging(flag: Option<&str>, config: &CliConfig) {
    let filter = flag
        .map(str::to_string)
        .or_else(|| config.log_level.clone())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(EnvFilter::from_default_env);

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
