pub mod config;
pub mod error;
pub mod extremes;
pub mod heap;
pub mod input;
pub mod report;
pub mod sorting;

use std::fs::File;
use std::io::{self, Read, Write};

use anyhow::Context;
use tracing::debug;

pub use config::{Config, Format, Input};
pub use error::ScoreError;
pub use extremes::{find_extremes, Extremes};
pub use input::parse_scores;
pub use report::Report;
pub use sorting::heap_sort;

/// A single exam mark.
pub type Score = i64;

pub fn run(config: Config) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let out = stdout.lock();

    match &config.input {
        Input::Stdin => {
            debug!("reading scores from stdin");
            run_with(config.format, io::stdin().lock(), out)
        }
        Input::File(path) => {
            debug!(path = %path.display(), "reading scores from file");
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            run_with(config.format, file, out)
        }
    }
}

/// Reads `<count> <score>...`, then writes the report in `format`.
pub fn run_with<R: Read, W: Write>(
    format: Format,
    mut reader: R,
    mut writer: W,
) -> anyhow::Result<()> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(ScoreError::from)?;

    let scores = parse_scores(&text)?;
    debug!(count = scores.len(), "parsed scores");

    let report = Report::from_scores(&scores)?;
    match format {
        Format::Text => writeln!(writer, "{}", report)?,
        Format::Json => writeln!(writer, "{}", report.to_json()?)?,
    }
    writer.flush().context("failed to write report")?;

    Ok(())
}
