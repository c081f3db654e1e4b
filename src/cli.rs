//! Shared plumbing for the command-line tools.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::ArticleError;

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Parse arguments; `--help` and `--version` exit with status 0, anything
/// else clap rejects becomes a usage error.
pub fn parse_args<P: Parser>() -> Result<P, ArticleError> {
    match P::try_parse() {
        Ok(args) => Ok(args),
        Err(e) => match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                let _ = e.print();
                std::process::exit(0);
            }
            _ => Err(ArticleError::Usage(e.render().to_string().trim_end().to_string())),
        },
    }
}

pub fn read_input(path: &Path) -> Result<String, ArticleError> {
    debug!("Reading from file: {:?}", path);
    fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ArticleError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ArticleError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

pub fn write_output(path: &Path, content: &str) -> Result<(), ArticleError> {
    debug!("Writing to file: {:?}", path);
    fs::write(path, content).map_err(|source| ArticleError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Print the outcome of a run and turn it into the process exit status.
pub fn finish(result: Result<String, ArticleError>) -> ExitCode {
    match result {
        Ok(summary) => {
            println!("✓ {}", summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("✗ {}", e);
            ExitCode::FAILURE
        }
    }
}
