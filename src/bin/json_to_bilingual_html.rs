use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use magbridge::{cli, converter, ArticleError, Language, RenderOptions};

#[derive(Parser)]
#[command(name = "json-to-bilingual-html", version)]
#[command(about = "Convert an article JSON document into an English/Korean HTML page with a language toggle", long_about = None)]
struct Cli {
    /// Article JSON file; text fields may be plain strings or {"en", "ko"} pairs
    input: PathBuf,

    /// HTML file to write
    output: PathBuf,

    /// Language for front matter and other single-language values (ko or en)
    #[arg(long, default_value = "ko")]
    default_lang: Language,
}

fn run() -> Result<String, ArticleError> {
    let cli: Cli = cli::parse_args()?;
    let json = cli::read_input(&cli.input)?;
    let options = RenderOptions {
        language: cli.default_lang,
    };
    let html = converter::json_to_bilingual_html(&json, &options)?;
    cli::write_output(&cli.output, &html)?;

    Ok(format!(
        "Converted {} -> {} ({} characters, bilingual)",
        cli.input.display(),
        cli.output.display(),
        html.chars().count()
    ))
}

fn main() -> ExitCode {
    cli::init_tracing();
    cli::finish(run())
}
