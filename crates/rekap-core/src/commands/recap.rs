//! Command layer: runs the pipeline and shapes its output into the success
//! envelope the CLI renders.

use std::path::PathBuf;

use serde_json::{Value, json};

use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{CheckData, ExportInfo, KpiRow, RecapData, RecapRunSummary};
use crate::frame::Frame;
use crate::pipeline::summary::{KpiEntry, KpiValue};
use crate::pipeline::{self, DAILY_LABEL, DB_LABEL, RecapRequest, dates};
use crate::RecapResult;

#[derive(Debug, Clone)]
pub struct RecapRunOptions {
    pub daily_path: String,
    pub db_path: String,
    pub out_dir: Option<String>,
    pub export: bool,
}

#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub daily_path: String,
    pub db_path: String,
}

pub fn run_with_options(options: RecapRunOptions) -> RecapResult<SuccessEnvelope> {
    let request = RecapRequest {
        daily_path: PathBuf::from(&options.daily_path),
        db_path: PathBuf::from(&options.db_path),
        out_dir: PathBuf::from(options.out_dir.as_deref().unwrap_or(".")),
        export: options.export,
    };
    let execution = pipeline::execute(&request)?;

    let message = if execution.export.is_some() {
        "Recap completed successfully.".to_string()
    } else {
        "Recap completed successfully. No merged database was written.".to_string()
    };

    let data = RecapData {
        daily_path: options.daily_path,
        db_path: options.db_path,
        message,
        summary: RecapRunSummary {
            daily_rows_read: execution.daily_rows_read as i64,
            rows_excluded: execution.rows_excluded as i64,
            cleaned_rows: execution.cleaned_rows as i64,
            db_rows: execution.db_rows as i64,
            merged_rows: execution.merged_rows as i64,
        },
        kpi: execution.summary.entries.iter().map(kpi_row).collect(),
        warnings: execution.warnings,
        export: execution.export.map(|outcome| ExportInfo {
            filename: outcome.filename,
            path: outcome.path.display().to_string(),
            rows: outcome.rows as i64,
        }),
    };

    success("run", data)
}

pub fn check_with_options(options: CheckOptions) -> RecapResult<SuccessEnvelope> {
    let daily = Frame::from_csv_path(DAILY_LABEL, &PathBuf::from(&options.daily_path))?;
    let db = Frame::from_csv_path(DB_LABEL, &PathBuf::from(&options.db_path))?;

    let order = dates::check_date_order(&db, &daily)?;
    let warnings = if order.db_newer_than_daily {
        vec![pipeline::date_order_warning(&order)]
    } else {
        Vec::new()
    };

    let data = CheckData {
        daily_path: options.daily_path,
        db_path: options.db_path,
        db_latest: order.db_latest.map(|value| dates::format_tanggal(&value)),
        daily_latest: order
            .daily_latest
            .map(|value| dates::format_tanggal(&value)),
        in_order: !order.db_newer_than_daily,
        warnings,
    };

    success("check", data)
}

fn kpi_row(entry: &KpiEntry) -> KpiRow {
    KpiRow {
        label: entry.label.to_string(),
        value: kpi_value_to_json(entry.value),
    }
}

/// Whole amounts serialize as integers so the JSON matches the pasted KPI
/// sheet; fractional amounts keep their decimals.
fn kpi_value_to_json(value: KpiValue) -> Value {
    match value {
        KpiValue::Section => Value::String(String::new()),
        KpiValue::Count(count) => json!(count),
        KpiValue::Amount(amount) => {
            if amount.fract() == 0.0 && amount.abs() < 9_007_199_254_740_992.0 {
                json!(amount as i64)
            } else {
                json!(amount)
            }
        }
    }
}
