use std::{path::PathBuf, process::ExitCode};

use clap::{
    error::{ContextKind, ErrorKind},
    Parser,
};
use reverse::{exit_codes, logging, USAGE};

#[derive(Parser)]
#[command(
    name = "reverse",
    version,
    about = "Print the non-empty lines of a file in reverse order"
)]
struct Cli {
    /// Input file (defaults to stdin), then output file (defaults to stdout).
    ///
    /// Names starting with `-` are taken as files unless they are one of the
    /// help or version flags.
    #[arg(value_name = "FILE", allow_hyphen_values = true)]
    paths: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            eprintln!("reverse: {}", parse_failure(&err));
            eprintln!("{USAGE}");
            return ExitCode::from(exit_codes::FAILURE as u8);
        }
    };

    logging::init();

    match reverse::run(&cli.paths) {
        Ok(_) => ExitCode::from(exit_codes::OK as u8),
        Err(err) => {
            eprintln!("reverse: {err}");
            ExitCode::from(exit_codes::FAILURE as u8)
        }
    }
}

/// One-line description of a command-line error, naming the offending argument.
fn parse_failure(err: &clap::Error) -> String {
    let kind = err.kind().as_str().unwrap_or("invalid arguments");
    match err.get(ContextKind::InvalidArg) {
        Some(arg) => format!("{kind}: '{arg}'"),
        None => kind.to_owned(),
    }
}
