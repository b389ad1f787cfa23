use crate::{errors::CompareError, table::ResultTable};

/// Mean time per call for each row: `time / calls` in floating point.
/// A zero call count yields an infinite or NaN average rather than an error.
pub fn average_latency(
    table: &ResultTable,
    calls_column: &str,
    time_column: &str,
) -> Result<Vec<f64>, CompareError> {
    let calls = table.numeric_column(calls_column)?;
    let time = table.numeric_column(time_column)?;
    Ok(time
        .into_iter()
        .zip(calls)
        .map(|(time, calls)| time / calls)
        .collect())
}
