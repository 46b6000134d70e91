//! Year-indexed table of labelled columns with optional cells.

use core::fmt;

use serde::Serialize;
use slr_core::{SlrError, SlrResult};
use tracing::debug;

/// Index label used when joined tables disagree on theirs.
pub const DEFAULT_INDEX_LABEL: &str = "Year";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub year: f64,
    pub values: Vec<Option<f64>>,
}

/// Rows are kept sorted by year with no duplicate years.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    index_label: String,
    columns: Vec<String>,
    rows: Vec<TableRow>,
}

impl Table {
    pub fn new(index_label: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            index_label: index_label.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Single-column table from paired samples.
    ///
    /// A year repeated in `x` keeps only its last sample.
    pub fn from_column(
        index_label: impl Into<String>,
        label: impl Into<String>,
        x: &[f64],
        y: &[f64],
    ) -> Self {
        let mut table = Self::new(index_label, vec![label.into()]);
        for (&year, &value) in x.iter().zip(y) {
            if table.row(year).is_some() {
                debug!(year, "duplicate year in column samples; keeping the later value");
            }
            table.put(year, vec![Some(value)]);
        }
        table
    }

    /// Outer join on the year index. Cells a table has no row for stay empty.
    pub fn join(tables: impl IntoIterator<Item = Table>) -> Table {
        let tables: Vec<Table> = tables.into_iter().collect();

        let index_label = match tables.first() {
            Some(first) if tables.iter().all(|t| t.index_label == first.index_label) => {
                first.index_label.clone()
            }
            _ => DEFAULT_INDEX_LABEL.to_string(),
        };

        let mut years: Vec<f64> = tables
            .iter()
            .flat_map(|t| t.rows.iter().map(|r| r.year))
            .collect();
        years.sort_by(f64::total_cmp);
        years.dedup();

        let columns: Vec<String> = tables.iter().flat_map(|t| t.columns.clone()).collect();
        let rows = years
            .into_iter()
            .map(|year| {
                let values = tables
                    .iter()
                    .flat_map(|t| match t.row(year) {
                        Some(row) => row.values.clone(),
                        None => vec![None; t.width()],
                    })
                    .collect();
                TableRow { year, values }
            })
            .collect();

        Table {
            index_label,
            columns,
            rows,
        }
    }

    pub fn index_label(&self) -> &str {
        &self.index_label
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn years(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.year).collect()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn position(&self, year: f64) -> Result<usize, usize> {
        self.rows.binary_search_by(|r| r.year.total_cmp(&year))
    }

    fn put(&mut self, year: f64, values: Vec<Option<f64>>) {
        match self.position(year) {
            Ok(i) => self.rows[i].values = values,
            Err(i) => self.rows.insert(i, TableRow { year, values }),
        }
    }

    /// Insert a row at its year-sorted position, overwriting an existing row for `year`.
    pub fn upsert_row(&mut self, year: f64, values: Vec<Option<f64>>) -> SlrResult<()> {
        if values.len() != self.width() {
            return Err(SlrError::LengthMismatch {
                x_len: self.width(),
                y_len: values.len(),
            });
        }
        self.put(year, values);
        Ok(())
    }

    pub fn row(&self, year: f64) -> Option<&TableRow> {
        self.position(year).ok().map(|i| &self.rows[i])
    }

    pub fn value(&self, year: f64, column: &str) -> Option<f64> {
        let col = self.columns.iter().position(|c| c == column)?;
        self.row(year)?.values[col]
    }

    pub fn column(&self, label: &str) -> Option<Vec<(f64, Option<f64>)>> {
        let col = self.columns.iter().position(|c| c == label)?;
        Some(self.rows.iter().map(|r| (r.year, r.values[col])).collect())
    }

    /// CSV with a header line; empty cells are left blank.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        let header: Vec<String> = std::iter::once(self.index_label.as_str())
            .chain(self.columns.iter().map(String::as_str))
            .map(csv_field)
            .collect();
        out.push_str(&header.join(","));
        out.push('\n');

        for row in &self.rows {
            out.push_str(&row.year.to_string());
            for value in &row.values {
                out.push(',');
                if let Some(v) = value {
                    out.push_str(&v.to_string());
                }
            }
            out.push('\n');
        }
        out
    }
}

fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| {
                std::iter::once(row.year.to_string())
                    .chain(row.values.iter().map(|v| match v {
                        Some(v) => format!("{v:.3}"),
                        None => "-".to_string(),
                    }))
                    .collect()
            })
            .collect();

        let header: Vec<&str> = std::iter::once(self.index_label.as_str())
            .chain(self.columns.iter().map(String::as_str))
            .collect();
        let widths: Vec<usize> = header
            .iter()
            .enumerate()
            .map(|(i, h)| {
                cells
                    .iter()
                    .map(|row| row[i].len())
                    .chain(std::iter::once(h.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let line = |f: &mut fmt::Formatter<'_>, items: &[&str]| -> fmt::Result {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str("  ")?;
                }
                write!(f, "{:>width$}", item, width = widths[i])?;
            }
            writeln!(f)
        };

        line(f, &header)?;
        for row in &cells {
            let items: Vec<&str> = row.iter().map(String::as_str).collect();
            line(f, &items)?;
        }
        Ok(())
    }
}
