use std::io;

use serde_json::Value;

use super::format;

pub fn render_run(data: &Value) -> io::Result<String> {
    let message = data
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("Recap completed.");
    let summary = data
        .get("summary")
        .and_then(Value::as_object)
        .ok_or_else(|| io::Error::other("run output requires summary"))?;

    let mut lines = vec![message.to_string(), String::new(), "Summary:".to_string()];

    let entries = vec![
        ("Daily rows read:", get_i64(summary, "daily_rows_read").to_string()),
        ("Rows excluded:", get_i64(summary, "rows_excluded").to_string()),
        ("Rows cleaned:", get_i64(summary, "cleaned_rows").to_string()),
        ("DB rows:", get_i64(summary, "db_rows").to_string()),
        ("Merged rows:", get_i64(summary, "merged_rows").to_string()),
    ];
    lines.extend(format::key_value_rows(&entries, 2));

    let warnings = render_warnings(data);
    if !warnings.is_empty() {
        lines.push(String::new());
        lines.extend(warnings);
    }

    lines.push(String::new());
    lines.push("KPI recap:".to_string());
    lines.extend(render_kpi_table(data));

    if let Some(export) = data.get("export").and_then(Value::as_object) {
        lines.push(String::new());
        lines.push("Merged database:".to_string());
        let export_entries = vec![
            (
                "File:",
                export
                    .get("filename")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
                    .to_string(),
            ),
            (
                "Path:",
                export
                    .get("path")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
                    .to_string(),
            ),
            ("Rows:", get_i64(export, "rows").to_string()),
        ];
        lines.extend(format::key_value_rows(&export_entries, 2));
    }

    Ok(lines.join("\n"))
}

pub fn render_check(data: &Value) -> io::Result<String> {
    let in_order = data
        .get("in_order")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let mut lines = Vec::new();
    if in_order {
        lines.push("The DB predates the daily export. Safe to run the recap.".to_string());
    } else {
        lines.push("The DB is newer than the daily export.".to_string());
    }
    lines.push(String::new());

    let entries = vec![
        ("DB latest:", optional_str(data, "db_latest")),
        ("Daily latest:", optional_str(data, "daily_latest")),
    ];
    lines.extend(format::key_value_rows(&entries, 2));

    let warnings = render_warnings(data);
    if !warnings.is_empty() {
        lines.push(String::new());
        lines.extend(warnings);
    }

    Ok(lines.join("\n"))
}

/// Section headers sit flush left; the metrics under them indent with their
/// values in one column, mirroring the KPI sheet layout.
fn render_kpi_table(data: &Value) -> Vec<String> {
    let rows = data
        .get("kpi")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    let mut lines = Vec::new();
    let mut pending: Vec<(String, String)> = Vec::new();

    for row in &rows {
        let label = row.get("label").and_then(Value::as_str).unwrap_or("");
        let value = row.get("value").cloned().unwrap_or(Value::Null);
        if value.as_str() == Some("") {
            flush_section(&mut lines, &mut pending);
            lines.push(label.to_string());
        } else {
            pending.push((label.to_string(), render_kpi_value(&value)));
        }
    }
    flush_section(&mut lines, &mut pending);

    lines
}

fn flush_section(lines: &mut Vec<String>, pending: &mut Vec<(String, String)>) {
    if pending.is_empty() {
        return;
    }
    let borrowed = pending
        .iter()
        .map(|(label, value)| (label.as_str(), value.clone()))
        .collect::<Vec<(&str, String)>>();
    lines.extend(format::key_value_rows(&borrowed, 2));
    pending.clear();
}

fn render_kpi_value(value: &Value) -> String {
    match value {
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn render_warnings(data: &Value) -> Vec<String> {
    let warnings = data
        .get("warnings")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    if warnings.is_empty() {
        return Vec::new();
    }

    let mut lines = vec!["Warnings:".to_string()];
    for warning in &warnings {
        let message = warning
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("unknown warning");
        lines.push(format!("  - {message}"));
    }
    lines
}

fn optional_str(data: &Value, key: &str) -> String {
    data.get(key)
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string()
}

fn get_i64(object: &serde_json::Map<String, Value>, key: &str) -> i64 {
    object.get(key).and_then(Value::as_i64).unwrap_or(0)
}
