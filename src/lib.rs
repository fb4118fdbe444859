//! Line reversal filter.
//!
//! Reads every line of the input, drops the empty ones, and writes the rest
//! back out last-first. Input and output default to the standard streams and
//! may be redirected to named files.

use std::{
    collections::TryReserveError,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use thiserror::Error;

pub mod endpoints;
pub mod exit_codes;
pub mod lines;
pub mod logging;

pub use endpoints::{Endpoints, Sink, Source};
pub use lines::{emit, ingest, Line, LineStack};

pub const USAGE: &str = "usage: reverse <input> <output>";

#[derive(Error, Debug)]
pub enum ReverseError {
    #[error("{}", USAGE)]
    Usage,
    #[error("cannot open file '{}': {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("cannot stat file '{}': {source}", .path.display())]
    Stat { path: PathBuf, source: io::Error },
    #[error("input and output file must differ ('{}' and '{}' are the same file)", .input.display(), .output.display())]
    SameFile { input: PathBuf, output: PathBuf },
    #[error("out of memory: {0}")]
    OutOfMemory(#[from] TryReserveError),
    #[error("read failed: {0}")]
    Read(#[source] io::Error),
    #[error("write failed: {0}")]
    Write(#[source] io::Error),
}

/// Reverses the non-empty lines of `input` into `output`.
///
/// Nothing is written until the whole input has been read. Returns the
/// number of lines written.
pub fn reverse(input: impl BufRead, output: impl Write) -> Result<usize, ReverseError> {
    let stack = ingest(input)?;
    emit(stack, output)
}

/// Runs one invocation with the given positional arguments.
pub fn run(paths: &[PathBuf]) -> Result<usize, ReverseError> {
    let mut endpoints = Endpoints::resolve(paths)?;
    let Endpoints { source, sink } = &mut endpoints;
    let written = reverse(source.reader(), sink.writer())?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use std::{fs, io::Cursor};

    use super::*;

    #[test]
    fn reverse_elides_blank_lines() {
        let mut out = Vec::new();
        let written = reverse(Cursor::new("a\n\nb\n"), &mut out).unwrap();
        assert_eq!(written, 2);
        assert_eq!(out, b"b\na\n");
    }

    #[test]
    fn run_between_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "1\n2\n\n3").unwrap();

        assert_eq!(run(&[input, output.clone()]).unwrap(), 3);
        assert_eq!(fs::read_to_string(output).unwrap(), "3\n2\n1\n");
    }

    #[test]
    fn error_messages_name_paths() {
        let err = ReverseError::Open {
            path: PathBuf::from("nope.txt"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(err.to_string().starts_with("cannot open file 'nope.txt'"));
        assert_eq!(ReverseError::Usage.to_string(), USAGE);
    }
}
