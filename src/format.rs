use std::fmt::Write;
use std::path::Path;
use std::time::Duration;

use crate::bench::{Report, Table};
use crate::error::abbreviate;
use crate::types::{Algorithm, Unit};

const PATTERN_PREVIEW_CHARS: usize = 48;

/// Header line: `# seekbench abc1234 — 500 repetitions, char units`
pub fn report_header(report: &Report) -> String {
    format!(
        "# seekbench {} — {} repetitions, {} units",
        report.commit, report.repetitions, report.unit
    )
}

/// Plain-text report: one block per pattern class, one table per document,
/// slowest algorithm first.
pub fn report(report: &Report) -> String {
    let mut out = report_header(report);
    out.push('\n');

    for section in &report.sections {
        let _ = write!(out, "\n<====> {} <====>\n", section.class.label());
        for table in &section.tables {
            out.push('\n');
            write_table(&mut out, table);
        }
    }
    out
}

fn write_table(out: &mut String, table: &Table) {
    match &table.query {
        Some(query) => {
            let found = match query.offset {
                Some(at) => format!("found at {at}"),
                None => "not found".to_string(),
            };
            let _ = writeln!(
                out,
                "## {} — \"{}\" {found}",
                table.label,
                abbreviate(&query.pattern, PATTERN_PREVIEW_CHARS)
            );
        }
        None => {
            let _ = writeln!(out, "## {}", table.label);
        }
    }

    let width = table
        .rows
        .iter()
        .map(|r| r.algorithm.label().len())
        .max()
        .unwrap_or(0);
    for row in &table.rows {
        let _ = writeln!(
            out,
            "  {:<width$}  {}",
            row.algorithm.label(),
            duration(row.elapsed)
        );
    }

    if let Some(cmp) = &table.comparison {
        let parts: Vec<String> = cmp
            .slower
            .iter()
            .map(|r| format!("{} {:.2}%", r.algorithm.label(), r.percent))
            .collect();
        if !parts.is_empty() {
            let _ = writeln!(
                out,
                "  {} is fastest; others take {} of its time",
                cmp.fastest.label(),
                parts.join(", ")
            );
        }
    }
}

/// Seconds with enough precision to separate sub-millisecond runs.
pub fn duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs >= 1.0 {
        format!("{secs:.3} s")
    } else if secs >= 1e-3 {
        format!("{:.3} ms", secs * 1e3)
    } else {
        format!("{:.3} µs", secs * 1e6)
    }
}

/// Output of the `find` command: one line per algorithm.
pub fn find_results(
    path: &Path,
    pattern: &str,
    unit: Unit,
    results: &[(Algorithm, Option<usize>)],
) -> String {
    let mut out = format!(
        "# Find: \"{}\" in {} ({unit} offsets)\n",
        abbreviate(pattern, PATTERN_PREVIEW_CHARS),
        path.display()
    );
    let width = results
        .iter()
        .map(|(alg, _)| alg.label().len())
        .max()
        .unwrap_or(0);
    for (alg, found) in results {
        let found = match found {
            Some(at) => at.to_string(),
            None => "not found".to_string(),
        };
        let _ = writeln!(out, "{:<width$}  {found}", alg.label());
    }
    out
}
