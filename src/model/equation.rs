//! Accumulates the lines of an open equation block.

/// Buffer for the text between a pair of equation delimiter lines.
///
/// Owned exclusively by the engine: reset when a block opens, drained and
/// cleared when it closes.
#[derive(Debug, Clone, Default)]
pub struct EquationBuffer {
    lines: Vec<String>,
}

impl EquationBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards any accumulated text. Called when a new block opens.
    pub fn reset(&mut self) {
        self.lines.clear();
    }

    /// Appends one line of equation text.
    pub fn push(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    /// Returns true if nothing has been accumulated.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Takes the accumulated lines, leaving the buffer empty.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}
