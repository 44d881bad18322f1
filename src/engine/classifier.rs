//! Per-line classification.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::Markers;
use crate::model::State;

/// Pattern for declaration signatures: a trimmed line ending in `);`.
static SIGNATURE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\);$").unwrap());

/// The result of classifying one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The line enters `state`, optionally with text to emit.
    Enter {
        state: State,
        emission: Option<String>,
    },

    /// The line opens a new equation block; the buffer must be reset.
    OpenEquation,

    /// The line belongs to the open equation block.
    AppendEquation(String),

    /// The line is transparent: no state change, no emission, no fence
    /// toggling, no effect on blank collapsing.
    NoOp,
}

impl Outcome {
    fn enter(state: State, emission: Option<String>) -> Self {
        Self::Enter { state, emission }
    }
}

/// Classifies one input line relative to the previous state.
///
/// Rules are tried in a fixed priority order; the fallback treats the line
/// as code, so classification never fails.
pub fn classify(previous: State, line: &str, markers: &Markers) -> Outcome {
    let s = line.trim();

    // Equation delimiters toggle equation mode.
    if s == markers.equation_delimiter {
        if previous.is_equation() {
            return Outcome::enter(State::EquationClosing, None);
        }
        return Outcome::OpenEquation;
    }

    // Comment lines become prose, or equation text while a block is open.
    if let Some(rest) = s.strip_prefix(&markers.comment_prefix) {
        if previous.is_equation() {
            return Outcome::AppendEquation(rest.to_string());
        }
        return Outcome::enter(State::Comment, Some(rest.to_string()));
    }

    if s == markers.pragma {
        return Outcome::NoOp;
    }

    // Blank lines pass through untrimmed; the emitter collapses runs.
    if s.is_empty() {
        return Outcome::enter(State::Blank, Some(line.to_string()));
    }

    // Visibility labels, body braces, and type definitions are dropped.
    if markers.is_structural_noise(s) {
        return Outcome::enter(State::Blank, None);
    }

    // Lines ending with `);` are declaration signatures, turned into
    // headings with the trailing semicolon stripped.
    if SIGNATURE_PATTERN.is_match(s) {
        let heading = format!("#### {}\n", &s[..s.len() - 1]);
        return Outcome::enter(State::Function, Some(heading));
    }

    Outcome::enter(State::Code, Some(s.to_string()))
}
