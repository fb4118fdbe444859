use std::io::{BufRead, Write};

use crate::ReverseError;

/// A single non-empty line of input, without its terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line(Box<[u8]>);

impl Line {
    /// Returns `None` for an empty line, which is never stored.
    pub fn new(bytes: Vec<u8>) -> Option<Self> {
        if bytes.is_empty() {
            None
        } else {
            Some(Line(bytes.into_boxed_slice()))
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Lines in ingestion order. Popping yields them in emission order.
#[derive(Debug, Default)]
pub struct LineStack {
    lines: Vec<Line>,
}

impl LineStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: Line) -> Result<(), ReverseError> {
        self.lines.try_reserve(1)?;
        self.lines.push(line);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<Line> {
        self.lines.pop()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterates in emission order (last ingested first) without consuming.
    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().rev()
    }
}

/// Reads `input` to end-of-stream, keeping every non-empty line.
///
/// Exactly one trailing `\n` is stripped from each line; anything else
/// (including `\r`) is kept as content. A final line without terminator
/// is treated like any other.
pub fn ingest(mut input: impl BufRead) -> Result<LineStack, ReverseError> {
    let mut stack = LineStack::new();
    let mut buf = Vec::new();
    let mut skipped = 0usize;

    loop {
        buf.clear();
        let read = input.read_until(b'\n', &mut buf).map_err(ReverseError::Read)?;
        if read == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.is_empty() {
            skipped += 1;
            tracing::trace!(skipped, "skipping blank line");
            continue;
        }

        let mut owned = Vec::new();
        owned.try_reserve_exact(buf.len())?;
        owned.extend_from_slice(&buf);
        if let Some(line) = Line::new(owned) {
            stack.push(line)?;
        }
    }

    tracing::debug!(lines = stack.len(), skipped, "ingested input");
    Ok(stack)
}

/// Writes every line of `stack` to `output`, last ingested first, each
/// followed by `\n`. Returns the number of lines written.
pub fn emit(mut stack: LineStack, output: impl Write) -> Result<usize, ReverseError> {
    let mut output = std::io::BufWriter::new(output);
    let mut written = 0;

    while let Some(line) = stack.pop() {
        output
            .write_all(line.as_bytes())
            .map_err(ReverseError::Write)?;
        output.write_all(b"\n").map_err(ReverseError::Write)?;
        written += 1;
    }
    output.flush().map_err(ReverseError::Write)?;

    tracing::debug!(lines = written, "emitted output");
    Ok(written)
}
