//! Column-labelled table of raw benchmark cells.
//!
//! Cells are kept as the text they were loaded from so that columns the
//! comparison never looks at are written back out exactly as read. Numeric
//! access goes through [`ResultTable::numeric_column`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::CompareError;

pub const DESCRIPTION: &str = "description";
pub const NUM_CALLS: &str = "numCalls";
pub const MICROSECONDS: &str = "microseconds";

/// Typed view of the three columns every speed-tool row carries.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BenchmarkRow {
    pub description: String,
    pub num_calls: f64,
    pub microseconds: f64,
}

impl BenchmarkRow {
    pub fn average_latency(&self) -> f64 {
        self.microseconds / self.num_calls
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ResultTable {
    /// Builds a table, padding short rows with empty cells. Rows wider than
    /// the header are rejected.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, CompareError> {
        let width = columns.len();
        let mut padded = Vec::with_capacity(rows.len());
        for (idx, mut row) in rows.into_iter().enumerate() {
            if row.len() > width {
                return Err(CompareError::invalid_input(format!(
                    "row {idx} has {} cells but the header has {width}",
                    row.len()
                )));
            }
            row.resize(width, String::new());
            padded.push(row);
        }
        Ok(Self {
            columns,
            rows: padded,
        })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// First-column value of `row`, the benchmark key.
    pub fn key(&self, row: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|cells| cells.first())
            .map(String::as_str)
    }

    pub fn keys(&self) -> HashSet<&str> {
        (0..self.len()).filter_map(|row| self.key(row)).collect()
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row).map(|cells| cells[idx].as_str())
    }

    pub fn column(&self, name: &str) -> Result<Vec<&str>, CompareError> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| CompareError::missing_column(name))?;
        Ok(self.rows.iter().map(|cells| cells[idx].as_str()).collect())
    }

    /// Parses every cell of `name` as `f64`. Empty cells become NaN.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>, CompareError> {
        self.column(name)?
            .into_iter()
            .map(|value| parse_number(name, value))
            .collect()
    }

    /// Keeps only rows whose key is in `keys`; row order is preserved.
    pub fn retain_keys(&mut self, keys: &HashSet<String>) {
        self.rows
            .retain(|cells| cells.first().is_some_and(|key| keys.contains(key)));
    }

    pub fn with_suffix(mut self, suffix: &str) -> Self {
        for column in &mut self.columns {
            column.push_str(suffix);
        }
        self
    }

    /// Places `other` to the right of `self`, matching rows by position.
    /// The shorter side is padded with empty cells.
    pub fn concat_columns(&self, other: &ResultTable) -> ResultTable {
        let height = self.len().max(other.len());
        let mut columns = self.columns.clone();
        columns.extend(other.columns.iter().cloned());
        let rows = (0..height)
            .map(|row| {
                let mut cells = padded_row(self, row);
                cells.extend(padded_row(other, row));
                cells
            })
            .collect();
        ResultTable { columns, rows }
    }

    pub fn select_rows(&self, indices: &[usize]) -> ResultTable {
        ResultTable {
            columns: self.columns.clone(),
            rows: indices
                .iter()
                .filter_map(|&row| self.rows.get(row).cloned())
                .collect(),
        }
    }

    pub fn push_column(&mut self, name: &str, values: Vec<String>) -> Result<(), CompareError> {
        if values.len() != self.len() {
            return Err(CompareError::invalid_input(format!(
                "column {name} has {} values for {} rows",
                values.len(),
                self.len()
            )));
        }
        self.columns.push(name.to_string());
        for (cells, value) in self.rows.iter_mut().zip(values) {
            cells.push(value);
        }
        Ok(())
    }

    pub fn benchmark_rows(&self) -> Result<Vec<BenchmarkRow>, CompareError> {
        let descriptions = self.column(DESCRIPTION)?;
        let calls = self.numeric_column(NUM_CALLS)?;
        let micros = self.numeric_column(MICROSECONDS)?;
        Ok(descriptions
            .into_iter()
            .zip(calls)
            .zip(micros)
            .map(|((description, num_calls), microseconds)| BenchmarkRow {
                description: description.to_string(),
                num_calls,
                microseconds,
            })
            .collect())
    }
}

fn padded_row(table: &ResultTable, row: usize) -> Vec<String> {
    match table.rows.get(row) {
        Some(cells) => cells.clone(),
        None => vec![String::new(); table.columns.len()],
    }
}

fn parse_number(column: &str, value: &str) -> Result<f64, CompareError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(f64::NAN);
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| CompareError::InvalidNumber {
            column: column.to_string(),
            value: value.to_string(),
        })
}
