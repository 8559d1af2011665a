//! Table and Row types
//!
//! The table is parsed once from CSV and never mutated afterwards. Every
//! column of the source file is kept so the data table can show it.

use serde::Serialize;
use std::collections::HashSet;
use std::io::Read;

use super::error::{LoadError, LoadResult};

/// Names of the two columns the dashboard needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnConfig {
    /// Column holding the country or region name
    pub country: String,
    /// Column holding the numeric happiness score
    pub score: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            country: "Country or region".to_string(),
            score: "Score".to_string(),
        }
    }
}

impl ColumnConfig {
    pub fn new(country: impl Into<String>, score: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            score: score.into(),
        }
    }
}

/// A single CSV cell, passed through to the table display unchanged
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Integer(i64),
    Number(f64),
    Text(String),
    Empty,
}

impl CellValue {
    fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return CellValue::Empty;
        }
        if let Ok(i) = raw.parse::<i64>() {
            return CellValue::Integer(i);
        }
        match raw.parse::<f64>() {
            Ok(f) if f.is_finite() => CellValue::Number(f),
            _ => CellValue::Text(raw.to_string()),
        }
    }

    /// Convert to a JSON value (non-finite numbers become null)
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            CellValue::Integer(i) => serde_json::Value::from(*i),
            CellValue::Number(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            CellValue::Text(s) => serde_json::Value::String(s.clone()),
            CellValue::Empty => serde_json::Value::Null,
        }
    }
}

/// One country's record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    /// Country or region name
    pub country: String,
    /// Happiness score
    pub score: f64,
    /// Every cell of the CSV row, aligned with [`Table::columns`]
    pub cells: Vec<CellValue>,
}

impl Row {
    /// Render the row as a column-name keyed JSON object
    pub fn record(&self, columns: &[String]) -> serde_json::Map<String, serde_json::Value> {
        columns
            .iter()
            .zip(&self.cells)
            .map(|(name, cell)| (name.clone(), cell.to_json()))
            .collect()
    }
}

/// Minimum and maximum score over a set of rows
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
}

impl ScoreRange {
    /// Compute the range of the given rows, `None` when there are none
    pub fn of<'a>(rows: impl IntoIterator<Item = &'a Row>) -> Option<Self> {
        rows.into_iter().fold(None, |acc, row| {
            Some(match acc {
                None => ScoreRange {
                    min: row.score,
                    max: row.score,
                },
                Some(r) => ScoreRange {
                    min: r.min.min(row.score),
                    max: r.max.max(row.score),
                },
            })
        })
    }
}

/// The full in-memory dataset
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Parse a table from any CSV reader
    pub fn from_reader<R: Read>(reader: R, columns: &ColumnConfig) -> LoadResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        // Records are keyed by column name, so names must be unique
        let mut seen = HashSet::new();
        if let Some(dup) = headers.iter().find(|h| !seen.insert(h.as_str())) {
            return Err(LoadError::DuplicateColumn(dup.clone()));
        }

        let country_idx = find_column(&headers, &columns.country)?;
        let score_idx = find_column(&headers, &columns.score)?;

        let mut rows = Vec::new();
        for (line_num, result) in reader.records().enumerate() {
            let record = result?;
            // Header is line 1
            let line = line_num + 2;

            let raw_score = record.get(score_idx).unwrap_or_default();
            let score = match raw_score.parse::<f64>() {
                Ok(s) if s.is_finite() => s,
                _ => {
                    return Err(LoadError::InvalidScore {
                        line,
                        value: raw_score.to_string(),
                    })
                }
            };

            rows.push(Row {
                country: record.get(country_idx).unwrap_or_default().to_string(),
                score,
                cells: record.iter().map(CellValue::parse).collect(),
            });
        }

        Ok(Self {
            columns: headers,
            rows,
        })
    }

    /// Parse a table from a CSV string
    pub fn from_csv_str(data: &str, columns: &ColumnConfig) -> LoadResult<Self> {
        Self::from_reader(data.as_bytes(), columns)
    }

    /// Column headers in file order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in file order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct country names in first-seen order
    pub fn country_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .map(|r| r.country.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Score range over the whole table
    pub fn score_range(&self) -> Option<ScoreRange> {
        ScoreRange::of(&self.rows)
    }
}

fn find_column(headers: &[String], name: &str) -> LoadResult<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
}
