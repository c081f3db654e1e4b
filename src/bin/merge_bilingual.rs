use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use magbridge::{cli, converter, ArticleError, MergeOptions};

#[derive(Parser)]
#[command(name = "merge-bilingual", version)]
#[command(about = "Merge an English and a Korean article JSON document into one bilingual document", long_about = None)]
struct Cli {
    /// English article JSON file
    english: PathBuf,

    /// Korean article JSON file with the same structure
    korean: PathBuf,

    /// Bilingual JSON file to write
    output: PathBuf,

    /// Drop unmatched trailing items instead of failing on length mismatches
    #[arg(long)]
    truncate: bool,
}

fn run() -> Result<String, ArticleError> {
    let cli: Cli = cli::parse_args()?;
    let english = cli::read_input(&cli.english)?;
    let korean = cli::read_input(&cli.korean)?;
    let options = MergeOptions {
        truncate: cli.truncate,
    };
    let merged = converter::merge_json(&english, &korean, &options)?;
    cli::write_output(&cli.output, &merged.json)?;

    Ok(format!(
        "Merged {} sections into {}",
        merged.section_count,
        cli.output.display()
    ))
}

fn main() -> ExitCode {
    cli::init_tracing();
    cli::finish(run())
}
