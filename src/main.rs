use std::io;
use std::path::PathBuf;

use clap::Parser;
use dicttool::{exit_code, io_utils::dict_cli_error, logging, respond, Dictionary, USAGE};
use tracing::{debug, error};

/// Look up a word's definition and synonyms.
#[derive(Parser)]
#[command(name = "dicttool", version)]
struct Args {
    /// Read the dictionary from this JSON file instead of the built-in one
    #[arg(long, value_name = "PATH")]
    dict: Option<PathBuf>,
    /// Increase log output on stderr (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Word to search for (case-insensitive). Anything after it is ignored.
    #[arg(value_name = "WORD", trailing_var_arg = true, allow_hyphen_values = true)]
    words: Vec<String>,
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);
    std::process::exit(run(args));
}

fn run(args: Args) -> i32 {
    let Some(word) = args.words.first() else {
        println!("{USAGE}");
        return exit_code::USAGE;
    };
    if args.words.len() > 1 {
        debug!(ignored = args.words.len() - 1, "extra arguments after the word");
    }

    let loaded = match &args.dict {
        Some(path) => Dictionary::load(path),
        None => Dictionary::embedded(),
    };
    let dict = match loaded {
        Ok(dict) => dict,
        Err(e) => {
            error!("load failed: {e}");
            println!("{}", dict_cli_error("Error loading dictionary", e));
            return exit_code::LOAD_FAILED;
        }
    };
    debug!(entries = dict.len(), "dictionary ready");

    respond(&dict, word, io::stdout().lock())
}
