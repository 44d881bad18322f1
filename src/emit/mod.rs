//! Output emission with blank-run collapsing.

use std::io::Write;

use crate::errors::Result;

/// Writes markdown fragments to the destination stream.
///
/// Classified line emissions go through [`Emitter::emit`], which collapses
/// any run of blank lines down to exactly one. Block delimiters (fences,
/// equation separators, blockquote lines) are written directly and do not
/// touch the collapse tracker.
#[derive(Debug)]
pub struct Emitter<W: Write> {
    writer: W,
    last_was_blank: bool,
}

impl<W: Write> Emitter<W> {
    /// Wraps a destination stream.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_was_blank: false,
        }
    }

    /// Writes a line's emission, collapsing consecutive blank lines.
    pub fn emit(&mut self, text: &str) -> Result<()> {
        if text.trim().is_empty() {
            if !self.last_was_blank {
                writeln!(self.writer)?;
            }
            self.last_was_blank = true;
        } else {
            writeln!(self.writer, "{}", text)?;
            self.last_was_blank = false;
        }
        Ok(())
    }

    /// Writes a code fence delimiter.
    pub fn fence(&mut self) -> Result<()> {
        writeln!(self.writer, "```")?;
        Ok(())
    }

    /// Writes a blank separator around an equation block.
    pub fn separator(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        Ok(())
    }

    /// Writes one blockquoted equation line.
    pub fn blockquote(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "> {}", line)?;
        Ok(())
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
