use std::{io, process};

use clap::Parser;
use info_calc::Ensemble;
use tracing::{debug, Level};

use crate::input::{read_ensemble_file, CliError, Prompter};

mod input;

/// Marginal, conditional and entropy figures of a two-variable joint distribution.
#[derive(Debug, Parser)]
struct Args {
    /// JSON file with `x_size`, `y_size` and `probabilities`
    #[arg(short, long, conflicts_with = "probs")]
    file: Option<String>,

    #[arg(short, long, requires = "probs")]
    x_size: Option<usize>,

    #[arg(short, long, requires = "probs")]
    y_size: Option<usize>,

    /// Row-major joint probabilities, comma separated
    #[arg(short, long, value_delimiter = ',')]
    probs: Vec<f64>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn load_ensemble(args: &Args) -> Result<Ensemble, CliError> {
    if let Some(path) = &args.file {
        debug!(%path, "reading ensemble file");
        return read_ensemble_file(path);
    }
    match (args.x_size, args.y_size) {
        (Some(x_size), Some(y_size)) => Ok(Ensemble::from_flat(x_size, y_size, args.probs.clone())?),
        _ if !args.probs.is_empty() => {
            Err(CliError::Input(String::from("--probs needs both --x-size and --y-size")))
        },
        _ => {
            let stdin = io::stdin();
            Prompter::new(stdin.lock(), io::stdout()).read_ensemble()
        },
    }
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let ensemble = load_ensemble(&args).unwrap_or_else(|err| {
        eprintln!("Problem reading ensemble: {}", err);
        process::exit(1);
    });
    debug!(x_size = ensemble.x_size(), y_size = ensemble.y_size(), "loaded ensemble");

    let report = ensemble.analyze().unwrap_or_else(|err| {
        eprintln!("Problem analyzing ensemble: {}", err);
        process::exit(2);
    });

    if args.json {
        let json = serde_json::to_string_pretty(&report).unwrap_or_else(|err| {
            eprintln!("Problem serializing report: {}", err);
            process::exit(3);
        });
        println!("{}", json);
    } else {
        print!("{}", report);
    }
}
