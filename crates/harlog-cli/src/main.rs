use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use harlog_cli::{OutputFormat, commands};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "harlog")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "A CLI tool for inspecting, validating, and filtering HTTP Archive (HAR) files",
    long_about = "harlog works with HAR files: it reports summary and timing statistics, \
                  checks documents for structural problems and producer defects, and \
                  extracts subsets of entries into new HAR files."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Display HAR file statistics
    Stats {
        /// Path to the HAR file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Include per-phase timing breakdown
        #[arg(long)]
        timings: bool,
    },

    /// Filter HAR entries by various criteria
    Filter {
        /// Path to the HAR file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Filter by host (exact or glob, repeatable)
        #[arg(long = "host")]
        hosts: Vec<String>,

        /// Filter by HTTP status code (supports 404, 2xx, 200-299)
        #[arg(long)]
        status: Option<String>,

        /// Filter by HTTP method (GET, POST, etc.)
        #[arg(long)]
        method: Option<String>,

        /// Filter by content type pattern
        #[arg(long)]
        content_type: Option<String>,

        /// Filter by parent page id (pageref)
        #[arg(long)]
        page: Option<String>,

        /// Output filtered HAR to file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check a HAR file for structural problems and producer defects
    Validate {
        /// Path to the HAR file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Fail when producer defects are found, not only on malformed input
        #[arg(long)]
        strict: bool,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Stats { file, timings } => commands::stats::execute(&file, timings, cli.format),
        Commands::Filter {
            file,
            hosts,
            status,
            method,
            content_type,
            page,
            output,
        } => commands::filter::execute(&file, hosts, status, method, content_type, page, output),
        Commands::Validate { file, strict } => commands::validate::execute(&file, strict, cli.format),
        Commands::Completion { shell } => commands::completion::execute(shell, &mut Cli::command()),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("harlog=debug,harlog_core=debug")
    } else {
        EnvFilter::new("harlog=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
