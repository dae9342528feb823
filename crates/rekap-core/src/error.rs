use std::path::Path;

use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct RecapError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl RecapError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::invalid_argument_for_command(message, None)
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `rekap {cmd} --help` for usage."),
            None => "Run `rekap --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn source_not_found(label: &str, path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "source_not_found",
            &format!("Cannot read the {label} file at `{location}`: {detail}"),
            vec![
                format!("Check that `{location}` exists and is readable."),
                "Pass the file with `--daily <path>` and `--db <path>`.".to_string(),
            ],
        )
        .with_data(json!({
            "source": label,
            "path": location,
        }))
    }

    pub fn empty_source(label: &str, path: &Path) -> Self {
        let location = path.display().to_string();
        Self::new(
            "empty_source",
            &format!("The {label} file at `{location}` has no header row."),
            vec![
                "Export the spreadsheet as CSV with one header row.".to_string(),
                "Rerun `rekap run` once the file has content.".to_string(),
            ],
        )
        .with_data(json!({
            "source": label,
            "path": location,
        }))
    }

    pub fn malformed_csv(label: &str, path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "malformed_csv",
            &format!("The {label} file at `{location}` is not readable as CSV: {detail}"),
            vec![
                "Export the spreadsheet as UTF-8 CSV with one header row.".to_string(),
                "Check that every row has the same number of fields as the header.".to_string(),
            ],
        )
        .with_data(json!({
            "source": label,
            "path": location,
        }))
    }

    pub fn missing_column(label: &str, column: &str) -> Self {
        Self::new(
            "missing_column",
            &format!("The {label} table has no `{column}` column."),
            vec![
                format!("Add a `{column}` header to the {label} export."),
                "Column names must match the export headers exactly, including case.".to_string(),
            ],
        )
        .with_data(json!({
            "source": label,
            "column": column,
        }))
    }

    pub fn unreadable_dates(label: &str, column: &str) -> Self {
        Self::new(
            "unreadable_dates",
            &format!("No `{column}` value in the {label} table parses as a date."),
            vec![
                format!("Use `YYYY-MM-DD` or `YYYY-MM-DD HH:MM:SS` values in `{column}`."),
                "Rerun `rekap run` once the dates are readable.".to_string(),
            ],
        )
        .with_data(json!({
            "source": label,
            "column": column,
        }))
    }

    pub fn unrecognized_class_flag(flag: &str) -> Self {
        Self::new(
            "unrecognized_class_flag",
            &format!("Customer class flag `{flag}` is not recognized."),
            vec!["Use `NC` for new customers or `RO` for returning customers.".to_string()],
        )
        .with_data(json!({
            "flag": flag,
        }))
    }

    pub fn export_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "export_failed",
            &format!("Cannot write the merged database to `{location}`: {detail}"),
            vec![
                format!("Grant write access to `{location}` or pass `--out-dir <dir>`."),
                "Rerun with `--no-export` to compute the recap without writing.".to_string(),
            ],
        )
        .with_data(json!({
            "path": location,
        }))
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }
}

pub type RecapResult<T> = Result<T, RecapError>;
