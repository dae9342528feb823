use std::fs;
use std::path::{Path, PathBuf};

use rekap_core::commands::recap::{self, RecapRunOptions};
use serde_json::Value;
use tempfile::TempDir;

pub const DAILY_HEADER: &str = "Tanggal,Kota/Kabupaten,No. Telepon,Nama toko,Status MP,Platform,SKU Induk,Jumlah Produk di Pesan,Jumlah,No. Pesanan";

pub const DB_HEADER: &str = "Tanggal,Telepon,KOTA,Platform,SKU Induk,Jumlah Produk di Pesan,Jumlah,No. Pesanan";

pub fn temp_workdir(prefix: &str) -> std::io::Result<TempDir> {
    tempfile::Builder::new().prefix(prefix).tempdir_in("/tmp")
}

pub fn write_csv(dir: &Path, name: &str, header: &str, rows: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let body = format!("{header}\n{}\n", rows.join("\n"));
    let written = fs::write(&path, body);
    assert!(written.is_ok());
    path
}

/// One raw daily export line with sensible defaults; callers override the
/// fields a scenario cares about.
pub fn daily_row(
    tanggal: &str,
    telepon: &str,
    store: &str,
    status: &str,
    platform: &str,
    sku: &str,
    jumlah: &str,
    order: &str,
) -> String {
    format!("{tanggal},Jakarta,{telepon},{store},{status},{platform},{sku},1,{jumlah},{order}")
}

pub fn db_row(tanggal: &str, telepon: &str) -> String {
    format!("{tanggal},{telepon},Jakarta,Shopee,X,1,1000,OLD-1")
}

pub fn run_recap(
    daily_path: &Path,
    db_path: &Path,
    out_dir: &Path,
    export: bool,
) -> rekap_core::RecapResult<rekap_core::SuccessEnvelope> {
    recap::run_with_options(RecapRunOptions {
        daily_path: daily_path.display().to_string(),
        db_path: db_path.display().to_string(),
        out_dir: Some(out_dir.display().to_string()),
        export,
    })
}

pub fn kpi_value(data: &Value, label: &str) -> Value {
    data["kpi"]
        .as_array()
        .into_iter()
        .flatten()
        .find(|row| row["label"] == label)
        .map(|row| row["value"].clone())
        .unwrap_or(Value::Null)
}
