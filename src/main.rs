use std::{env, io, process};

use score_heap::Config;
use tracing_subscriber::EnvFilter;

fn main() {
    // stdout carries the report, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let config = Config::new(&args).unwrap_or_else(|err| {
        eprintln!("Failed to parse config: {}", err);
        eprintln!("Usage: score_heap [--json | --text] [FILE | -]");
        process::exit(1);
    });

    if let Err(e) = score_heap::run(config) {
        eprintln!("Application error: {:#}", e);
        process::exit(1);
    }
}
