#![warn(clippy::pedantic)]
#![allow(
    clippy::cast_precision_loss,       // durations and offsets as f64 in reports
    clippy::module_name_repetitions,   // Rust naming conventions
    clippy::similar_names,             // i/j cursors in the matchers
    clippy::missing_errors_doc,        // every error is a SeekError with a Display
    clippy::missing_panics_doc,        // same
)]

pub mod bench;
pub mod config;
pub mod corpus;
pub mod error;
pub mod format;
pub mod logging;
pub mod search;
pub mod types;

use std::path::Path;

use bench::Report;
use config::Config;
use corpus::{Corpus, Units, read_document};
use error::SeekError;
use search::rolling::HashParams;
use types::{Algorithm, Unit};

/// Load the configured corpus and benchmark it. The corpus location and glob
/// come from `config`.
pub fn run_bench(config: &Config) -> Result<Report, SeekError> {
    config.validate()?;
    let corpus = Corpus::load(&config.corpus.dir, &config.corpus.glob)?;
    bench::run(&corpus, config)
}

/// Search `pattern` in `text` with one algorithm, counting offsets in `unit`.
/// Rabin-Karp uses [`HashParams::DEFAULT`].
#[must_use]
pub fn find(algorithm: Algorithm, text: &str, pattern: &str, unit: Unit) -> Option<usize> {
    match unit {
        Unit::Byte => algorithm.find(text.as_bytes(), pattern.as_bytes()),
        Unit::Char => {
            let text: Vec<char> = text.chars().collect();
            let pattern: Vec<char> = pattern.chars().collect();
            algorithm.find(&text, &pattern)
        }
    }
}

/// Search a file with each of `algorithms`, decoding it once.
pub fn find_in_file(
    path: &Path,
    pattern: &str,
    unit: Unit,
    algorithms: &[Algorithm],
    params: HashParams,
) -> Result<Vec<(Algorithm, Option<usize>)>, SeekError> {
    let name = path.file_name().map_or_else(
        || path.display().to_string(),
        |n| n.to_string_lossy().into_owned(),
    );
    let doc = read_document(path, &name)?;

    let results = match doc.units(unit) {
        Units::Bytes(text) => algorithms
            .iter()
            .map(|&alg| (alg, alg.find_with(text, pattern.as_bytes(), params)))
            .collect(),
        Units::Chars(text) => {
            let needle: Vec<char> = pattern.chars().collect();
            algorithms
                .iter()
                .map(|&alg| (alg, alg.find_with(text, &needle, params)))
                .collect()
        }
    };
    Ok(results)
}
