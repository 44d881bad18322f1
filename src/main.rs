//! Literalize CLI - converts annotated source into literate markdown.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use literalize::commands::{self, ConvertOptions};

#[derive(Parser)]
#[command(name = "literalize")]
#[command(author, version, about = "Convert annotated source into literate markdown", long_about = None)]
struct Cli {
    /// Annotated source file to convert
    input: PathBuf,

    /// Write markdown here instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging; diagnostics go to stderr so stdout stays clean for
    // the generated markdown.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Read configuration from file or use defaults
    let config = match cli.config {
        Some(ref path) => literalize::config::read_config_file(path).unwrap_or_default(),
        None => {
            let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            literalize::config::read_config(&base_dir).unwrap_or_default()
        }
    };

    let options = ConvertOptions {
        input: cli.input,
        output: cli.output,
    };

    match commands::convert(&config, options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
