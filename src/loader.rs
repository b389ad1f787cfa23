use std::{fs, path::Path};

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::{errors::CompareError, table::ResultTable};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Csv,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Result<Self, CompareError> {
        let name = path.to_string_lossy();
        if name.ends_with(".json") {
            Ok(InputFormat::Json)
        } else if name.ends_with(".csv") {
            Ok(InputFormat::Csv)
        } else {
            Err(CompareError::unsupported_format(path))
        }
    }
}

/// Shapes a speed-tool JSON dump can take: a list of row objects, or an
/// object of columns keyed by row label.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonLayout {
    Records(Vec<Map<String, Value>>),
    Columns(Map<String, Value>),
}

pub fn load_table<P: AsRef<Path>>(path: P) -> Result<ResultTable, CompareError> {
    let path = path.as_ref();
    let format = InputFormat::from_path(path)?;
    let text = fs::read_to_string(path).map_err(|e| CompareError::io(path, e))?;
    let table = match format {
        InputFormat::Json => parse_json(path, &text)?,
        InputFormat::Csv => parse_csv(path, &text)?,
    };
    debug!(
        path = %path.display(),
        rows = table.len(),
        columns = ?table.columns(),
        "loaded result table"
    );
    Ok(table)
}

pub fn parse_json(path: &Path, text: &str) -> Result<ResultTable, CompareError> {
    let layout: JsonLayout = serde_json::from_str(text).map_err(|e| CompareError::json(path, e))?;
    match layout {
        JsonLayout::Records(records) => records_to_table(records),
        JsonLayout::Columns(columns) => columns_to_table(path, columns),
    }
}

fn records_to_table(records: Vec<Map<String, Value>>) -> Result<ResultTable, CompareError> {
    let mut columns: Vec<String> = Vec::new();
    for record in &records {
        for key in record.keys() {
            if !columns.contains(key) {
                columns.push(key.clone());
            }
        }
    }
    let rows = records
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|column| record.get(column).map(render_cell).unwrap_or_default())
                .collect()
        })
        .collect();
    ResultTable::new(columns, rows)
}

fn columns_to_table(path: &Path, columns: Map<String, Value>) -> Result<ResultTable, CompareError> {
    let mut labels: Vec<String> = Vec::new();
    let mut by_column = Vec::with_capacity(columns.len());
    for (name, cells) in columns {
        let Value::Object(cells) = cells else {
            return Err(CompareError::invalid_input(format!(
                "{}: column {name} is not an object of row labels",
                path.display()
            )));
        };
        for label in cells.keys() {
            if !labels.contains(label) {
                labels.push(label.clone());
            }
        }
        by_column.push((name, cells));
    }
    sort_labels(&mut labels);
    let names = by_column.iter().map(|(name, _)| name.clone()).collect();
    let rows = labels
        .iter()
        .map(|label| {
            by_column
                .iter()
                .map(|(_, cells)| cells.get(label).map(render_cell).unwrap_or_default())
                .collect()
        })
        .collect();
    ResultTable::new(names, rows)
}

// Integer labels sort numerically; anything else keeps first-seen order.
fn sort_labels(labels: &mut [String]) {
    if labels.iter().all(|label| label.parse::<u64>().is_ok()) {
        labels.sort_by_key(|label| label.parse::<u64>().unwrap_or(u64::MAX));
    }
}

fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Parses the csv layout produced by the json-to-csv converter: a title
/// line, a header line, then rows whose first column is a row index.
pub fn parse_csv(path: &Path, text: &str) -> Result<ResultTable, CompareError> {
    let body = match text.find('\n') {
        Some(pos) => &text[pos + 1..],
        None => "",
    };
    if body.trim().is_empty() {
        return Err(CompareError::invalid_input(format!(
            "{}: no header line after the title line",
            path.display()
        )));
    }
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());
    let columns = reader
        .headers()
        .map_err(|e| CompareError::csv(path, e))?
        .iter()
        .skip(1)
        .map(str::to_string)
        .collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| CompareError::csv(path, e))?;
        rows.push(record.iter().skip(1).map(str::to_string).collect());
    }
    ResultTable::new(columns, rows)
}
