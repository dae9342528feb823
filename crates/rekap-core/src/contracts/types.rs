use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct RecapWarning {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecapRunSummary {
    pub daily_rows_read: i64,
    pub rows_excluded: i64,
    pub cleaned_rows: i64,
    pub db_rows: i64,
    pub merged_rows: i64,
}

/// One line of the KPI table. Section headers carry an empty-string value;
/// metrics carry a number.
#[derive(Debug, Clone, Serialize)]
pub struct KpiRow {
    pub label: String,
    pub value: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportInfo {
    pub filename: String,
    pub path: String,
    pub rows: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecapData {
    pub daily_path: String,
    pub db_path: String,
    pub message: String,
    pub summary: RecapRunSummary,
    pub kpi: Vec<KpiRow>,
    pub warnings: Vec<RecapWarning>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<ExportInfo>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckData {
    pub daily_path: String,
    pub db_path: String,
    pub db_latest: Option<String>,
    pub daily_latest: Option<String>,
    pub in_order: bool,
    pub warnings: Vec<RecapWarning>,
}
