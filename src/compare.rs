//! Side-by-side comparison of two aligned result tables.
//!
//! Columns from the baseline take a `.1` suffix, columns from the current
//! run a `.2` suffix. A benchmark regresses when its current average
//! latency is at least `1 + threshold` times the baseline average.

use std::{collections::HashSet, path::Path};

use tracing::{debug, info, warn};

use crate::{
    align::align_rows,
    config::CompareConfig,
    errors::CompareError,
    ignore_list::IgnoreList,
    latency::average_latency,
    loader::load_table,
    table::{DESCRIPTION, MICROSECONDS, NUM_CALLS, ResultTable},
};

pub const PERCENTAGE_DIFFERENCE: &str = "Percentage Difference";
pub const BASELINE_SUFFIX: &str = ".1";
pub const CURRENT_SUFFIX: &str = ".2";

#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    /// Every regressed row, ignored benchmarks included.
    pub regressions: ResultTable,
    /// Whether any regressed benchmark is outside the ignore list.
    pub significant: bool,
}

impl Comparison {
    pub fn is_empty(&self) -> bool {
        self.regressions.is_empty()
    }
}

pub fn compare_files(
    baseline: &Path,
    current: &Path,
    config: &CompareConfig,
) -> Result<Comparison, CompareError> {
    let first = load_table(baseline)?;
    let second = load_table(current)?;
    compare_tables(first, second, config)
}

pub fn compare_tables(
    baseline: ResultTable,
    current: ResultTable,
    config: &CompareConfig,
) -> Result<Comparison, CompareError> {
    let aligned = align_rows(baseline, current);
    let first = aligned.first.with_suffix(BASELINE_SUFFIX);
    let second = aligned.second.with_suffix(CURRENT_SUFFIX);
    debug!(first = ?first.columns(), second = ?second.columns(), "suffixed columns");

    let regressions = find_regressions(&first, &second, config.threshold)?;
    let significant = significant_regressions(&regressions, &config.ignore)?;
    if significant {
        info!(count = regressions.len(), "significant regressions found");
    } else if !regressions.is_empty() {
        warn!(
            count = regressions.len(),
            "all regressions are on the ignore list"
        );
    }
    Ok(Comparison {
        regressions,
        significant,
    })
}

/// Joins the suffixed tables and keeps the rows whose benchmark regressed,
/// decorated with a `Percentage Difference` column.
pub fn find_regressions(
    first: &ResultTable,
    second: &ResultTable,
    threshold: f64,
) -> Result<ResultTable, CompareError> {
    let calls_1 = suffixed(NUM_CALLS, BASELINE_SUFFIX);
    let time_1 = suffixed(MICROSECONDS, BASELINE_SUFFIX);
    let calls_2 = suffixed(NUM_CALLS, CURRENT_SUFFIX);
    let time_2 = suffixed(MICROSECONDS, CURRENT_SUFFIX);

    let avg_1 = average_latency(first, &calls_1, &time_1)?;
    let avg_2 = average_latency(second, &calls_2, &time_2)?;
    let joined = first.concat_columns(second);

    let limit = 1.0 + threshold;
    let mut regressed: HashSet<&str> = HashSet::new();
    for row in 0..joined.len() {
        let (Some(a), Some(b)) = (avg_1.get(row), avg_2.get(row)) else {
            continue;
        };
        // NaN ratios compare false and drop out here.
        if b / a >= limit {
            if let Some(key) = first.key(row) {
                regressed.insert(key);
            }
        }
    }

    let selected: Vec<usize> = (0..first.len())
        .filter(|&row| first.key(row).is_some_and(|key| regressed.contains(key)))
        .collect();
    let mut table = joined.select_rows(&selected);

    let avg_1 = average_latency(&table, &calls_1, &time_1)?;
    let avg_2 = average_latency(&table, &calls_2, &time_2)?;
    let difference = avg_1
        .iter()
        .zip(&avg_2)
        .map(|(a, b)| format_number(100.0 * (b / a - 1.0)))
        .collect();
    table.push_column(PERCENTAGE_DIFFERENCE, difference)?;
    Ok(table)
}

/// A regression set fails the run unless it is empty or made up entirely
/// of ignored benchmarks.
pub fn significant_regressions(
    regressions: &ResultTable,
    ignore: &IgnoreList,
) -> Result<bool, CompareError> {
    if regressions.is_empty() {
        return Ok(false);
    }
    let descriptions = regressions.column(&suffixed(DESCRIPTION, BASELINE_SUFFIX))?;
    Ok(!ignore.all_ignored(descriptions))
}

fn suffixed(column: &str, suffix: &str) -> String {
    format!("{column}{suffix}")
}

fn format_number(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        format!("{value:?}")
    }
}
