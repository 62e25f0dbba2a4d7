use std::{path::PathBuf, process};

use clap::{Parser, error::ErrorKind};
use colored::Colorize;
use log::LevelFilter;
use wavhex::ConvertOptions;

const USAGE: &str = "Usage: wavhex <wav file> <output file>";

const CLI_AFTER_HELP: &str = "Examples:\n  wavhex input.wav samples.txt\n  wavhex --strict --verbose input.wav samples.txt";

#[derive(Debug, Parser)]
#[command(
    name = "wavhex",
    version,
    about = "Write every sample of a PCM WAVE file as one hex value per line",
    after_help = CLI_AFTER_HELP
)]
struct Cli {
    /// Input WAVE file.
    input: PathBuf,

    /// Output text file (created or truncated).
    output: PathBuf,

    /// Fail instead of dropping bytes after the last whole frame.
    #[arg(long)]
    strict: bool,

    /// Show additional logging output.
    #[arg(long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn);
    builder.parse_default_env();
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let options = if cli.strict {
        ConvertOptions::new().strict()
    } else {
        ConvertOptions::new()
    };

    let summary = wavhex::convert(&cli.input, &cli.output, &options)?;
    log::debug!("{summary:?}");

    println!(
        "{} Samples successfully exported to {}",
        "saved".green().bold(),
        summary.output.display()
    );
    Ok(())
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => match error.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => error.exit(),
            _ => {
                eprintln!("{USAGE}");
                process::exit(1);
            }
        },
    };

    init_logging(cli.verbose);

    if let Err(error) = run(cli) {
        eprintln!("{} {error}", "error:".red().bold());
        process::exit(1);
    }
}
