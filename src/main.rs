use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use busnet::{AppConfig, AppError, InputDocument, process_document};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Answers bus network queries from a JSON document
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Input document, stdin when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Where to write the responses, stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// TOML config with default routing settings and log filter
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Pretty-print the response array
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match args.config.as_deref().map(AppConfig::load).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, config: &AppConfig) -> Result<(), AppError> {
    let document: InputDocument = match &args.input {
        Some(path) => {
            info!("Reading {}", path.display());
            serde_json::from_reader(BufReader::new(File::open(path)?))?
        }
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            serde_json::from_str(&text)?
        }
    };

    let responses = process_document(&document, config.routing)?;

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    if args.pretty {
        serde_json::to_writer_pretty(&mut out, &responses)?;
    } else {
        serde_json::to_writer(&mut out, &responses)?;
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
