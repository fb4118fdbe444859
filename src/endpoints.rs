use std::{
    fmt,
    fs::{File, OpenOptions},
    io::{self, BufRead, BufReader, Stdin, Stdout, Write},
    path::{Path, PathBuf},
};

use crate::ReverseError;

/// Where lines are read from.
pub enum Source {
    Stdin(Stdin),
    File { path: PathBuf, file: BufReader<File> },
}

/// Where reversed lines are written to.
pub enum Sink {
    Stdout(Stdout),
    File { path: PathBuf, file: File },
}

/// Resolved input and output. Named files are closed when this is dropped.
pub struct Endpoints {
    pub source: Source,
    pub sink: Sink,
}

impl Endpoints {
    /// Opens the endpoints named by the positional arguments.
    ///
    /// With two paths, the output file is opened without truncation first so
    /// that a same-file conflict leaves its content untouched; it is only
    /// truncated once both files are known to be distinct.
    pub fn resolve(paths: &[PathBuf]) -> Result<Self, ReverseError> {
        let endpoints = match paths {
            [] => Endpoints {
                source: Source::Stdin(io::stdin()),
                sink: Sink::Stdout(io::stdout()),
            },
            [input] => Endpoints {
                source: Source::file(input, open_input(input)?),
                sink: Sink::Stdout(io::stdout()),
            },
            [input, output] => {
                let reader = open_input(input)?;
                let writer = OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(false)
                    .open(output)
                    .map_err(|source| ReverseError::Open {
                        path: output.clone(),
                        source,
                    })?;

                if FileId::of(&reader, input)? == FileId::of(&writer, output)? {
                    tracing::debug!(
                        input = %input.display(),
                        output = %output.display(),
                        "input and output are the same file"
                    );
                    return Err(ReverseError::SameFile {
                        input: input.clone(),
                        output: output.clone(),
                    });
                }

                truncate(&writer)?;
                Endpoints {
                    source: Source::file(input, reader),
                    sink: Sink::File {
                        path: output.clone(),
                        file: writer,
                    },
                }
            }
            _ => return Err(ReverseError::Usage),
        };

        tracing::debug!(source = %endpoints.source, sink = %endpoints.sink, "resolved endpoints");
        Ok(endpoints)
    }
}

fn open_input(path: &Path) -> Result<File, ReverseError> {
    File::open(path).map_err(|source| ReverseError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Empties an output file that is already open for writing.
fn truncate(file: &File) -> Result<(), ReverseError> {
    file.set_len(0).map_err(ReverseError::Write)
}

/// Identity of the storage object behind an open file.
#[derive(Debug, PartialEq, Eq)]
struct FileId {
    #[cfg(unix)]
    dev: u64,
    #[cfg(unix)]
    ino: u64,
    #[cfg(not(unix))]
    canonical: PathBuf,
}

impl FileId {
    #[cfg(unix)]
    fn of(file: &File, path: &Path) -> Result<Self, ReverseError> {
        use std::os::unix::fs::MetadataExt;

        let meta = file.metadata().map_err(|source| ReverseError::Stat {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(FileId {
            dev: meta.dev(),
            ino: meta.ino(),
        })
    }

    // No stable file index outside unix; resolved paths still catch symlinks.
    #[cfg(not(unix))]
    fn of(_file: &File, path: &Path) -> Result<Self, ReverseError> {
        let canonical = std::fs::canonicalize(path).map_err(|source| ReverseError::Stat {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(FileId { canonical })
    }
}

impl Source {
    fn file(path: &Path, file: File) -> Self {
        Source::File {
            path: path.to_path_buf(),
            file: BufReader::new(file),
        }
    }

    pub fn reader(&mut self) -> Box<dyn BufRead + '_> {
        match self {
            Source::Stdin(stdin) => Box::new(stdin.lock()),
            Source::File { file, .. } => Box::new(file),
        }
    }
}

impl Sink {
    pub fn writer(&mut self) -> Box<dyn Write + '_> {
        match self {
            Sink::Stdout(stdout) => Box::new(stdout.lock()),
            Sink::File { file, .. } => Box::new(file),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin(_) => f.write_str("<stdin>"),
            Source::File { path, .. } => write!(f, "{}", path.display()),
        }
    }
}

impl fmt::Display for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::Stdout(_) => f.write_str("<stdout>"),
            Sink::File { path, .. } => write!(f, "{}", path.display()),
        }
    }
}
