//! The line-classification and re-emission engine.
//!
//! Input lines are pulled one at a time and classified relative to the
//! current state; comparing the old and new state decides which block
//! delimiters to emit. Data flows strictly forward, single pass, no
//! backtracking.

mod classifier;

use std::io::Write;

use crate::config::Markers;
use crate::emit::Emitter;
use crate::errors::Result;
use crate::model::{EquationBuffer, State};

pub use classifier::{classify, Outcome};

/// Drives classification across lines, emitting fences and equation
/// flushes exactly at the boundary lines.
#[derive(Debug)]
pub struct Engine {
    markers: Markers,
    state: State,
    equation: EquationBuffer,
}

impl Engine {
    /// Creates an engine recognizing the given tokens.
    pub fn new(markers: Markers) -> Self {
        Self {
            markers,
            state: State::Initial,
            equation: EquationBuffer::new(),
        }
    }

    /// Returns the current classification state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Processes one input line, writing any output through `emitter`.
    pub fn process_line<W: Write>(&mut self, line: &str, emitter: &mut Emitter<W>) -> Result<()> {
        let outcome = classify(self.state, line, &self.markers);

        let (new_state, emission) = match outcome {
            Outcome::NoOp => return Ok(()),
            Outcome::OpenEquation => {
                self.equation.reset();
                (State::Equation, None)
            }
            Outcome::AppendEquation(text) => {
                self.equation.push(&text);
                (State::Equation, None)
            }
            Outcome::Enter { state, emission } => (state, emission),
        };

        self.transition(new_state, emitter)?;

        if let Some(text) = emission {
            emitter.emit(&text)?;
        }

        Ok(())
    }

    /// Emits the delimiters that straddle a state boundary, then records
    /// the new state.
    ///
    /// The equation flush happens on the same line whose classification
    /// closes the block, after any fence change.
    fn transition<W: Write>(&mut self, new_state: State, emitter: &mut Emitter<W>) -> Result<()> {
        if new_state.is_code() && !self.state.is_code() {
            emitter.fence()?;
        }
        if !new_state.is_code() && self.state.is_code() {
            emitter.fence()?;
        }
        if self.state.is_equation() && !new_state.is_equation() {
            self.flush_equation(emitter)?;
        }
        self.state = new_state;
        Ok(())
    }

    /// Renders the buffered equation as a blockquote between blank
    /// separators, skipping blank lines inside the equation text.
    fn flush_equation<W: Write>(&mut self, emitter: &mut Emitter<W>) -> Result<()> {
        emitter.separator()?;
        for line in self.equation.drain() {
            if !line.trim().is_empty() {
                emitter.blockquote(&line)?;
            }
        }
        emitter.separator()
    }

    /// Closes any block still open when the input ends.
    ///
    /// An unclosed fence or a dropped equation would leave the document
    /// invalid, so both are force-closed here.
    pub fn finish<W: Write>(&mut self, emitter: &mut Emitter<W>) -> Result<()> {
        if self.state.is_code() {
            emitter.fence()?;
        }
        if self.state.is_equation() {
            self.flush_equation(emitter)?;
        }
        self.state = State::Initial;
        Ok(())
    }
}

/// Converts annotated source text into literate markdown.
pub fn convert<W: Write>(input: &str, markers: &Markers, writer: W) -> Result<()> {
    let mut engine = Engine::new(markers.clone());
    let mut emitter = Emitter::new(writer);

    for line in input.lines() {
        engine.process_line(line, &mut emitter)?;
    }
    engine.finish(&mut emitter)?;
    emitter.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn convert_str(input: &str) -> String {
        let mut out = Vec::new();
        convert(input, &Markers::default(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_code_run_is_fenced() {
        let output = convert_str("int x = 1;\nint y = 2;\n");
        assert_eq!(output, "```\nint x = 1;\nint y = 2;\n```\n");
    }

    #[test]
    fn test_comment_becomes_prose() {
        let output = convert_str("/// Hello world\n");
        assert_eq!(output, "Hello world\n");
    }

    #[test]
    fn test_fence_closes_on_comment() {
        let input = "/// Intro\nint main() {\n/// Done\n";
        let output = convert_str(input);
        assert_eq!(output, "Intro\n```\nint main() {\n```\nDone\n");
    }

    #[test]
    fn test_equation_block() {
        let output = convert_str("/// $$\n/// a = b\n/// $$\n");
        assert_eq!(output, "\n> a = b\n\n");
    }

    #[test]
    fn test_multi_line_equation() {
        let output = convert_str("/// $$\n/// a = b\n/// c = d\n/// $$\n");
        assert_eq!(output, "\n> a = b\n> c = d\n\n");
    }

    #[test]
    fn test_equation_closed_by_code_line() {
        // Any non-comment line ends the block; the opening fence comes
        // first, then the flush, then the line's own emission.
        let output = convert_str("/// $$\n/// a = b\nint x;\n");
        assert_eq!(output, "```\n\n> a = b\n\nint x;\n```\n");
    }

    #[test]
    fn test_equation_closed_by_blank_line() {
        let output = convert_str("/// $$\n/// a = b\n\n/// Done\n");
        assert_eq!(output, "\n> a = b\n\n\nDone\n");
    }

    #[test]
    fn test_reopened_equation_resets_buffer() {
        let input = "/// $$\n/// a = b\n/// $$\n/// $$\n/// c = d\n/// $$\n";
        let output = convert_str(input);
        assert_eq!(output, "\n> a = b\n\n\n> c = d\n\n");
    }

    #[test]
    fn test_blank_run_collapses() {
        let output = convert_str("\n\n\n");
        assert_eq!(output, "\n");
    }

    #[test]
    fn test_declaration_heading() {
        let output = convert_str("void foo(int x);\n");
        assert_eq!(output, "#### void foo(int x)\n\n");
    }

    #[test]
    fn test_pragma_keeps_fence_open() {
        let output = convert_str("int a;\n#pragma once\nint b;\n");
        assert_eq!(output, "```\nint a;\nint b;\n```\n");
    }

    #[test]
    fn test_structural_noise_emits_nothing() {
        let output = convert_str("class Foo\n{\npublic:\n};\n");
        assert_eq!(output, "");
    }

    #[test]
    fn test_fence_forced_closed_at_end_of_input() {
        let output = convert_str("int x = 1;");
        assert_eq!(output, "```\nint x = 1;\n```\n");
    }

    #[test]
    fn test_equation_flushed_at_end_of_input() {
        let output = convert_str("/// $$\n/// x = y\n");
        assert_eq!(output, "\n> x = y\n\n");
    }

    #[test]
    fn test_header_file_conversion() {
        let input = "\
#pragma once

/// # Mallet

class Mallet
{
public:
    /// Resets the mallet state.
    void reset();

    float compute(float in);
};
";
        let expected = "
# Mallet

Resets the mallet state.
#### void reset()


#### float compute(float in)

";
        assert_eq!(convert_str(input), expected);
    }
}
