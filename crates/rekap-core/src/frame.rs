//! In-memory table loaded from a headered CSV export.
//!
//! Cells stay as strings; the pipeline parses numbers and dates at the point
//! of use, the same way the export itself carries them.

use std::path::Path;

use crate::{RecapError, RecapResult};

#[derive(Debug, Clone)]
pub struct Frame {
    label: String,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Frame {
    pub fn new(label: &str, columns: Vec<String>) -> Self {
        Self {
            label: label.to_string(),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn from_csv_path(label: &str, path: &Path) -> RecapResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|error| RecapError::source_not_found(label, path, &error.to_string()))?;
        Self::parse_csv(label, &content, path)
    }

    pub fn from_csv_str(label: &str, content: &str) -> RecapResult<Self> {
        Self::parse_csv(label, content, Path::new("<memory>"))
    }

    fn parse_csv(label: &str, content: &str, path: &Path) -> RecapResult<Self> {
        if content.trim().is_empty() {
            return Err(RecapError::empty_source(label, path));
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(content.as_bytes());

        let columns = reader
            .headers()
            .map_err(|error| RecapError::malformed_csv(label, path, &error.to_string()))?
            .iter()
            .map(|value| value.trim().to_string())
            .collect::<Vec<String>>();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record =
                record.map_err(|error| RecapError::malformed_csv(label, path, &error.to_string()))?;
            rows.push(record.iter().map(str::to_string).collect::<Vec<String>>());
        }

        Ok(Self {
            label: label.to_string(),
            columns,
            rows,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Returns every cell of the named column, top to bottom.
    pub fn column(&self, name: &str) -> RecapResult<Vec<&str>> {
        let index = self
            .column_index(name)
            .ok_or_else(|| RecapError::missing_column(&self.label, name))?;
        Ok(self
            .rows
            .iter()
            .map(|row| row.get(index).map(String::as_str).unwrap_or(""))
            .collect())
    }

    pub fn rename_column(&mut self, from: &str, to: &str) -> RecapResult<()> {
        let index = self
            .column_index(from)
            .ok_or_else(|| RecapError::missing_column(&self.label, from))?;
        self.columns[index] = to.to_string();
        Ok(())
    }

    /// Keeps only the rows whose mask entry is true. The mask must cover
    /// every row.
    pub fn retain_rows(&mut self, keep: &[bool]) -> RecapResult<()> {
        if keep.len() != self.rows.len() {
            return Err(frame_shape_error(
                &self.label,
                &format!(
                    "row mask covers {} rows but the table has {}",
                    keep.len(),
                    self.rows.len()
                ),
            ));
        }
        let mut index = 0;
        self.rows.retain(|_| {
            let kept = keep[index];
            index += 1;
            kept
        });
        Ok(())
    }

    /// Overwrites the named column, or appends it when absent. The values
    /// must cover every row.
    pub fn set_column(&mut self, name: &str, values: Vec<String>) -> RecapResult<()> {
        if values.len() != self.rows.len() {
            return Err(frame_shape_error(
                &self.label,
                &format!(
                    "column `{name}` carries {} values but the table has {} rows",
                    values.len(),
                    self.rows.len()
                ),
            ));
        }

        match self.column_index(name) {
            Some(index) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[index] = value;
                }
            }
            None => {
                self.columns.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
        Ok(())
    }

    pub fn push_row(&mut self, row: Vec<String>) -> RecapResult<()> {
        if row.len() != self.columns.len() {
            return Err(frame_shape_error(
                &self.label,
                &format!(
                    "row carries {} cells but the table has {} columns",
                    row.len(),
                    self.columns.len()
                ),
            ));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Builds a new frame holding only the named columns, in the given order.
    pub fn select(&self, label: &str, columns: &[String]) -> RecapResult<Self> {
        let mut indexes = Vec::with_capacity(columns.len());
        for name in columns {
            let index = self
                .column_index(name)
                .ok_or_else(|| RecapError::missing_column(&self.label, name))?;
            indexes.push(index);
        }

        let rows = self
            .rows
            .iter()
            .map(|row| {
                indexes
                    .iter()
                    .map(|&index| row.get(index).cloned().unwrap_or_default())
                    .collect::<Vec<String>>()
            })
            .collect::<Vec<Vec<String>>>();

        Ok(Self {
            label: label.to_string(),
            columns: columns.to_vec(),
            rows,
        })
    }

    /// Appends the other frame's rows below this one. Column names must match
    /// exactly, in order.
    pub fn concat(&self, other: &Frame, label: &str) -> RecapResult<Self> {
        if self.columns != other.columns {
            return Err(frame_shape_error(
                &self.label,
                &format!(
                    "cannot concatenate `{}` onto `{}`: column sets differ",
                    other.label, self.label
                ),
            ));
        }

        let mut rows = self.rows.clone();
        rows.extend(other.rows.iter().cloned());
        Ok(Self {
            label: label.to_string(),
            columns: self.columns.clone(),
            rows,
        })
    }

    pub fn to_csv_string(&self) -> RecapResult<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(&self.columns)
            .map_err(|error| RecapError::internal_serialization(&error.to_string()))?;
        for row in &self.rows {
            writer
                .write_record(row)
                .map_err(|error| RecapError::internal_serialization(&error.to_string()))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|error| RecapError::internal_serialization(&error.to_string()))?;
        String::from_utf8(bytes)
            .map_err(|error| RecapError::internal_serialization(&error.to_string()))
    }

    pub fn write_csv(&self, path: &Path) -> RecapResult<()> {
        let body = self.to_csv_string()?;
        std::fs::write(path, body)
            .map_err(|error| RecapError::export_failed(path, &error.to_string()))
    }
}

fn frame_shape_error(label: &str, detail: &str) -> RecapError {
    RecapError::new(
        "internal_frame_shape",
        &format!("Frame `{label}` was used inconsistently: {detail}."),
        Vec::new(),
    )
}
