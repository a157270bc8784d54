use std::path::PathBuf;

use clap::Parser;
use dicttool::{
    config::{DEFAULT_INPUT, DEFAULT_OUTPUT, DEFAULT_WORD_INDEX},
    convert_file, io_utils::dict_cli_error, logging, ConvertConfig, DictError, HeaderLayout,
    OnShortHeader,
};
use tracing::{error, info};

/// Convert a WordNet-style data file into the dicttool JSON dictionary.
#[derive(Parser)]
struct Args {
    /// Lexical-database dump to read
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,
    /// Distribution file to create or truncate
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Zero-based header field holding the word
    #[arg(long, default_value_t = DEFAULT_WORD_INDEX)]
    word_index: usize,
    /// Stop at the first line whose header is too short instead of skipping it
    #[arg(long)]
    strict: bool,
    /// Increase log output on stderr (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);
    if let Err(e) = run(args) {
        error!("conversion failed: {e}");
        println!("{e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = ConvertConfig {
        input: args.input,
        output: args.output,
        layout: HeaderLayout::new(args.word_index),
        on_short_header: if args.strict {
            OnShortHeader::Abort
        } else {
            OnShortHeader::Skip
        },
    };
    let report = convert_file(&config).map_err(|e| {
        let context = match &e {
            DictError::Io { path: Some(p), .. } if *p == config.output => "Error writing JSON",
            _ => "Error parsing data",
        };
        dict_cli_error(context, e)
    })?;
    if report.skipped > 0 {
        info!(skipped = report.skipped, "dropped lines with short headers");
    }

    println!(
        "Dictionary data has been written to {}",
        config.output.display()
    );
    Ok(())
}
