//! Literalize - literate source conversion engine.
//!
//! Converts an annotated source file into a literate markdown document:
//! `/// ` comment lines become prose, ordinary lines become fenced code,
//! `/// $$` delimited blocks become blockquoted equations, and declaration
//! signatures become section headers.
//!
//! The whole transformation is a single-pass line classifier with one line
//! of lookback and a carried equation buffer; output order is a
//! deterministic function of input order and content.
//!
//! # Example
//!
//! ```
//! use literalize::config::Markers;
//!
//! let mut out = Vec::new();
//! literalize::convert("/// Hello\nint x = 1;", &Markers::default(), &mut out).unwrap();
//!
//! let markdown = String::from_utf8(out).unwrap();
//! assert_eq!(markdown, "Hello\n```\nint x = 1;\n```\n");
//! ```

pub mod commands;
pub mod config;
pub mod emit;
pub mod engine;
pub mod errors;
pub mod model;

// Re-export commonly used types
pub use config::{Config, Markers};
pub use emit::Emitter;
pub use engine::{convert, Engine, Outcome};
pub use errors::{LiteralizeError, Result};
pub use model::{EquationBuffer, State};
