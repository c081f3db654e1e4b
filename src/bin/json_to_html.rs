use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use magbridge::{cli, converter, ArticleError};

#[derive(Parser)]
#[command(name = "json-to-html", version)]
#[command(about = "Convert an article JSON document into a Korean HTML page", long_about = None)]
struct Cli {
    /// Article JSON file
    input: PathBuf,

    /// HTML file to write
    output: PathBuf,
}

fn run() -> Result<String, ArticleError> {
    let cli: Cli = cli::parse_args()?;
    let json = cli::read_input(&cli.input)?;
    let html = converter::json_to_html(&json)?;
    cli::write_output(&cli.output, &html)?;

    Ok(format!(
        "Converted {} -> {} ({} characters)",
        cli.input.display(),
        cli.output.display(),
        html.chars().count()
    ))
}

fn main() -> ExitCode {
    cli::init_tracing();
    cli::finish(run())
}
