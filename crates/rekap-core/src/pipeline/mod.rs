//! The one-shot recap pipeline: load, validate, clean, summarize, merge,
//! export. No state survives an invocation.

pub mod classify;
pub mod clean;
pub mod dates;
pub mod merge;
pub mod phone;
pub mod platform;
pub mod summary;

use std::path::PathBuf;

use crate::contracts::types::RecapWarning;
use crate::frame::Frame;
use crate::pipeline::summary::DailySummary;
use crate::RecapResult;

pub const DAILY_LABEL: &str = "daily";
pub const DB_LABEL: &str = "db";

#[derive(Debug, Clone)]
pub struct RecapRequest {
    pub daily_path: PathBuf,
    pub db_path: PathBuf,
    pub out_dir: PathBuf,
    pub export: bool,
}

#[derive(Debug, Clone)]
pub struct ExportOutcome {
    pub filename: String,
    pub path: PathBuf,
    pub rows: usize,
}

#[derive(Debug, Clone)]
pub struct RecapExecution {
    pub daily_rows_read: usize,
    pub rows_excluded: usize,
    pub cleaned_rows: usize,
    pub db_rows: usize,
    pub merged_rows: usize,
    pub summary: DailySummary,
    pub warnings: Vec<RecapWarning>,
    pub export: Option<ExportOutcome>,
}

/// Runs the whole pipeline against the two exports. Any failure aborts the
/// run; there are no partial results and no retries.
pub fn execute(request: &RecapRequest) -> RecapResult<RecapExecution> {
    let daily = Frame::from_csv_path(DAILY_LABEL, &request.daily_path)?;
    let db = Frame::from_csv_path(DB_LABEL, &request.db_path)?;

    let mut warnings = Vec::new();
    let order = dates::check_date_order(&db, &daily)?;
    if order.db_newer_than_daily {
        warnings.push(date_order_warning(&order));
    }

    let cleaned = clean::clean_daily(&daily, &db)?;
    let summary = summary::summarize(&cleaned)?;
    let merged = merge::merge_into_db(&db, &cleaned)?;

    let export = if request.export {
        let latest = dates::required_latest_tanggal(&cleaned)?;
        let filename = format!("DB - {}.csv", dates::format_export_date(&latest));
        let path = request.out_dir.join(&filename);
        merged.write_csv(&path)?;
        Some(ExportOutcome {
            filename,
            path,
            rows: merged.row_count(),
        })
    } else {
        None
    };

    Ok(RecapExecution {
        daily_rows_read: daily.row_count(),
        rows_excluded: daily.row_count() - cleaned.row_count(),
        cleaned_rows: cleaned.row_count(),
        db_rows: db.row_count(),
        merged_rows: merged.row_count(),
        summary,
        warnings,
        export,
    })
}

/// Advisory only: the DB being newer than the daily export usually means the
/// wrong file was uploaded, but the recap still runs to completion.
pub fn date_order_warning(order: &dates::DateOrderReport) -> RecapWarning {
    let db_latest = order
        .db_latest
        .map(|value| dates::format_tanggal(&value))
        .unwrap_or_else(|| "unknown".to_string());
    let daily_latest = order
        .daily_latest
        .map(|value| dates::format_tanggal(&value))
        .unwrap_or_else(|| "unknown".to_string());
    RecapWarning {
        code: "db_newer_than_daily".to_string(),
        message: format!(
            "The DB's latest Tanggal ({db_latest}) is newer than the daily export's ({daily_latest}). Check that today's rows are not already in the DB."
        ),
    }
}
