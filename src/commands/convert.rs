//! Convert command implementation.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use crate::config::Config;
use crate::engine;
use crate::errors::{LiteralizeError, Result};

/// Options for the convert command.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Path to the annotated source file.
    pub input: PathBuf,
    /// Destination path (standard output when absent).
    pub output: Option<PathBuf>,
}

/// Executes the convert command.
///
/// The input is read in full before any output is opened, so a missing
/// source file never leaves partial markdown behind.
pub fn convert(config: &Config, options: ConvertOptions) -> Result<()> {
    tracing::info!("Converting {}", options.input.display());

    let source =
        std::fs::read_to_string(&options.input).map_err(|source| LiteralizeError::InputUnavailable {
            path: options.input.clone(),
            source,
        })?;

    match options.output {
        Some(ref path) => {
            let writer = BufWriter::new(File::create(path)?);
            engine::convert(&source, &config.markers, writer)?;
        }
        None => {
            let stdout = io::stdout();
            engine::convert(&source, &config.markers, stdout.lock())?;
        }
    }

    Ok(())
}
