use std::hint::black_box;
use std::time::{Duration, Instant};

use serde::{Serialize, Serializer};
use tracing::{debug, warn};

use crate::config::Config;
use crate::corpus::{Corpus, Document, Units};
use crate::error::{SeekError, abbreviate};
use crate::search::Symbol;
use crate::search::rolling::HashParams;
use crate::types::{Algorithm, PatternClass, Unit};

/// Commit the binary was built from, embedded by build.rs.
pub const BUILD_COMMIT: &str = env!("SEEKBENCH_BUILD_COMMIT");

/// Label of the per-class aggregate table.
pub const TOTAL_LABEL: &str = "total";

/// Everything measured in one run.
#[derive(Debug, Serialize)]
pub struct Report {
    pub commit: String,
    pub unit: Unit,
    pub repetitions: u32,
    pub sections: Vec<Section>,
}

/// Results for one pattern class: a table per (document, pattern), then a
/// total.
#[derive(Debug, Serialize)]
pub struct Section {
    pub class: PatternClass,
    pub tables: Vec<Table>,
}

/// Timings for every algorithm over one document (or the class total).
/// Rows are sorted slowest first.
#[derive(Debug, Serialize)]
pub struct Table {
    pub label: String,
    /// The searched pattern and its verified offset; absent for totals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<Query>,
    pub rows: Vec<Row>,
    pub comparison: Option<Comparison>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Query {
    pub pattern: String,
    pub offset: Option<usize>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Row {
    pub algorithm: Algorithm,
    #[serde(rename = "seconds", serialize_with = "as_secs_f64")]
    pub elapsed: Duration,
}

/// How much slower each algorithm is than the fastest, as a percentage of
/// the fastest one's time (250.0 means two and a half times as long).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Comparison {
    pub fastest: Algorithm,
    pub slower: Vec<Relative>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Relative {
    pub algorithm: Algorithm,
    pub percent: f64,
}

fn as_secs_f64<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

impl Table {
    #[must_use]
    pub fn new(label: impl Into<String>, query: Option<Query>, mut rows: Vec<Row>) -> Self {
        rows.sort_by(|a, b| b.elapsed.cmp(&a.elapsed));
        let comparison = compare(&rows);
        Self {
            label: label.into(),
            query,
            rows,
            comparison,
        }
    }
}

/// `rows` must be sorted slowest first. `None` when there is nothing to
/// compare against or the fastest time is zero.
fn compare(rows: &[Row]) -> Option<Comparison> {
    let (fastest, slower) = rows.split_last()?;
    if fastest.elapsed.is_zero() {
        return None;
    }
    let base = fastest.elapsed.as_secs_f64();
    let slower = slower
        .iter()
        .map(|row| Relative {
            algorithm: row.algorithm,
            percent: round2(row.elapsed.as_secs_f64() / base * 100.0),
        })
        .collect();
    Some(Comparison {
        fastest: fastest.algorithm,
        slower,
    })
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Run every configured pattern class against `corpus`. Each (document,
/// pattern) pair is verified before it is timed.
pub fn run(corpus: &Corpus, config: &Config) -> Result<Report, SeekError> {
    config.validate()?;

    let mut sections = Vec::new();
    for class in PatternClass::ALL {
        let mut tables = Vec::new();
        let mut totals: Vec<Row> = Algorithm::ALL
            .iter()
            .map(|&algorithm| Row {
                algorithm,
                elapsed: Duration::ZERO,
            })
            .collect();

        for doc in &corpus.documents {
            for spec in config.patterns_for(class, &doc.name) {
                let offset = verify(doc, &spec.text, config.unit, config.hash)?;
                if class == PatternClass::Absent {
                    if let Some(at) = offset {
                        warn!(
                            document = %doc.name,
                            offset = at,
                            "absent pattern occurs in document"
                        );
                    }
                }

                debug!(%class, document = %doc.name, reps = config.repetitions, "timing");
                let rows = time_document(doc, &spec.text, config);
                for (total, row) in totals.iter_mut().zip(&rows) {
                    total.elapsed += row.elapsed;
                }

                tables.push(Table::new(
                    doc.name.clone(),
                    Some(Query {
                        pattern: spec.text.clone(),
                        offset,
                    }),
                    rows,
                ));
            }
        }

        if tables.is_empty() {
            continue;
        }
        tables.push(Table::new(TOTAL_LABEL, None, totals));
        sections.push(Section { class, tables });
    }

    Ok(Report {
        commit: BUILD_COMMIT.to_string(),
        unit: config.unit,
        repetitions: config.repetitions,
        sections,
    })
}

/// Search once with every algorithm and with `memchr` as an oracle. All
/// answers must agree; the agreed offset is returned in `unit`.
pub fn verify(
    doc: &Document,
    pattern: &str,
    unit: Unit,
    params: HashParams,
) -> Result<Option<usize>, SeekError> {
    let oracle =
        memchr::memmem::find(doc.text.as_bytes(), pattern.as_bytes()).map(|at| match unit {
            Unit::Byte => at,
            Unit::Char => doc.text[..at].chars().count(),
        });

    let answers: Vec<(Algorithm, Option<usize>)> = match doc.units(unit) {
        Units::Bytes(text) => search_all(text, pattern.as_bytes(), params),
        Units::Chars(text) => {
            let needle: Vec<char> = pattern.chars().collect();
            search_all(text, &needle, params)
        }
    };

    if answers.iter().all(|&(_, found)| found == oracle) {
        return Ok(oracle);
    }

    let mut results: Vec<String> = answers
        .iter()
        .map(|(alg, found)| format!("{alg}={}", describe(*found)))
        .collect();
    results.push(format!("oracle={}", describe(oracle)));
    Err(SeekError::Disagreement {
        document: doc.name.clone(),
        pattern: abbreviate(pattern, 60),
        results: results.join(", "),
    })
}

fn describe(found: Option<usize>) -> String {
    found.map_or_else(|| "none".to_string(), |at| at.to_string())
}

fn search_all<S: Symbol>(
    text: &[S],
    pattern: &[S],
    params: HashParams,
) -> Vec<(Algorithm, Option<usize>)> {
    Algorithm::ALL
        .iter()
        .map(|&alg| (alg, alg.find_with(text, pattern, params)))
        .collect()
}

/// One row per algorithm, in `Algorithm::ALL` order.
fn time_document(doc: &Document, pattern: &str, config: &Config) -> Vec<Row> {
    match doc.units(config.unit) {
        Units::Bytes(text) => time_all(text, pattern.as_bytes(), config),
        Units::Chars(text) => {
            let needle: Vec<char> = pattern.chars().collect();
            time_all(text, &needle, config)
        }
    }
}

fn time_all<S: Symbol>(text: &[S], pattern: &[S], config: &Config) -> Vec<Row> {
    Algorithm::ALL
        .iter()
        .map(|&algorithm| Row {
            algorithm,
            elapsed: time_one(algorithm, text, pattern, config.repetitions, config.hash),
        })
        .collect()
}

/// Total wall time of `repetitions` back-to-back searches.
pub fn time_one<S: Symbol>(
    algorithm: Algorithm,
    text: &[S],
    pattern: &[S],
    repetitions: u32,
    params: HashParams,
) -> Duration {
    let start = Instant::now();
    for _ in 0..repetitions {
        black_box(algorithm.find_with(black_box(text), black_box(pattern), params));
    }
    start.elapsed()
}
