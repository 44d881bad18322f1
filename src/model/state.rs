//! Classification states for the conversion engine.

/// The classification assigned to the most recently processed line.
///
/// `Code` and `Equation` are the only states that persist across a run of
/// consecutive lines; every other state is a single-line classification
/// re-evaluated on each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// No line has been classified yet.
    #[default]
    Initial,
    /// Inside a run of ordinary source lines.
    Code,
    /// A prose comment line.
    Comment,
    /// A blank line, or structural noise dropped from the output.
    Blank,
    /// A declaration signature rendered as a heading.
    Function,
    /// Inside an open equation block.
    Equation,
    /// The line that closed an equation block.
    ///
    /// A distinct variant, not reused as `Blank`, so the fence and flush
    /// comparisons stay exhaustive. It matches no classifier rule itself.
    EquationClosing,
}

impl State {
    /// Returns true while a code fence is open.
    pub fn is_code(self) -> bool {
        matches!(self, Self::Code)
    }

    /// Returns true while an equation block is open.
    pub fn is_equation(self) -> bool {
        matches!(self, Self::Equation)
    }
}
