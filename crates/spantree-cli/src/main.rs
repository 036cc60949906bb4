//! spantree - Reduce a weighted network to its minimum spanning tree.
//!
//! # Commands
//!
//! - `spantree reduce [INPUT]` - Report incoming cost, reduced cost and savings
//! - `spantree completions <SHELL>` - Generate shell completions
//!
//! # Examples
//!
//! ```bash
//! # Reduce network.txt in the current directory
//! spantree reduce
//!
//! # Read the matrix from stdin and emit JSON
//! cat network.txt | spantree reduce - --format json
//!
//! # Fail instead of reporting a partial tree for disconnected input
//! spantree reduce data/network.txt --require-connected
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod error;

use commands::reduce;

/// spantree - minimum spanning tree network reduction
#[derive(Parser)]
#[command(name = "spantree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reduce a network to its minimum spanning tree and report the savings
    Reduce {
        /// Adjacency matrix file, or '-' for stdin [default: network.txt]
        input: Option<PathBuf>,

        /// Output format (text, json) [default: text]
        #[arg(short, long)]
        format: Option<String>,

        /// Fail if the spanning tree does not reach every vertex
        #[arg(long)]
        require_connected: bool,

        /// Accept matrices where cell[r][c] differs from cell[c][r]
        #[arg(long)]
        skip_symmetry_check: bool,

        /// Configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Reduce {
            input,
            format,
            require_connected,
            skip_symmetry_check,
            config,
        } => reduce::execute(&reduce::ReduceArgs {
            input,
            format,
            require_connected,
            skip_symmetry_check,
            config,
        }),

        Commands::Completions { shell } => {
            use clap::CommandFactory;
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "spantree",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
