//! Per-day KPI aggregation over the cleaned daily rows.
//!
//! Everything is counting and summing over boolean masks; the cleaned frame
//! is never mutated. Labels and ordering mirror the KPI sheet the recap is
//! pasted into, section headers included.

use std::collections::HashSet;

use crate::frame::Frame;
use crate::pipeline::clean::BOOL_TRUE;
use crate::vocab::{PAKET_BASIC_SKUS, Platform, columns};
use crate::RecapResult;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KpiValue {
    /// Blank-valued section header, purely presentational.
    Section,
    Count(i64),
    Amount(f64),
}

#[derive(Debug, Clone)]
pub struct KpiEntry {
    pub label: &'static str,
    pub value: KpiValue,
}

#[derive(Debug, Clone)]
pub struct DailySummary {
    pub entries: Vec<KpiEntry>,
}

impl DailySummary {
    pub fn value(&self, label: &str) -> Option<KpiValue> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.value)
    }
}

/// Computes the fixed KPI table from the cleaned daily frame.
pub fn summarize(cleaned: &Frame) -> RecapResult<DailySummary> {
    let platforms = cleaned.column(columns::PLATFORM)?;
    let orders = cleaned.column(columns::NO_PESANAN)?;
    let amounts = cleaned.column(columns::JUMLAH)?;
    let identities = cleaned.column(columns::TELEPON_PLACEHOLDER)?;
    let skus = cleaned.column(columns::SKU_INDUK)?;
    let units = cleaned.column(columns::JUMLAH_PRODUK)?;
    let is_nc = truth_mask(&cleaned.column(columns::IS_NC)?);
    let is_ro = truth_mask(&cleaned.column(columns::IS_RO)?);

    let order_per_platform = |platform: &str| {
        let mask = equals_mask(&platforms, platform);
        distinct_where(&orders, &mask)
    };

    let num_reseller = order_per_platform(Platform::Reseller.as_str());
    let num_tiktok = order_per_platform(Platform::Tiktok.as_str());
    let num_tokopedia = order_per_platform(Platform::Tokopedia.as_str());
    let num_shopee = order_per_platform(Platform::Shopee.as_str());
    // TODO: reconcile with Platform::Wa — the normalizer emits "WA", so this
    // lookup key never matches and the count stays zero. Kept verbatim until
    // the KPI sheet owner confirms which label is intended.
    let num_wa = order_per_platform("Wa");
    let num_lazada = order_per_platform(Platform::Lazada.as_str());

    let order_nc = distinct_where(&orders, &is_nc);
    let order_ro = distinct_where(&orders, &is_ro);
    let total_order = order_nc + order_ro;

    let omzet_nc = sum_where(&amounts, &is_nc);
    let omzet_ro = sum_where(&amounts, &is_ro);
    let total_omzet = omzet_nc + omzet_ro;

    let nc_per_platform = |platform: Platform| {
        let mask = and_masks(&equals_mask(&platforms, platform.as_str()), &is_nc);
        distinct_where(&identities, &mask)
    };
    let nc_tiktok = nc_per_platform(Platform::Tiktok);
    let nc_shopee = nc_per_platform(Platform::Shopee);
    let nc_tokopedia = nc_per_platform(Platform::Tokopedia);
    let nc_lazada = nc_per_platform(Platform::Lazada);

    let basic_mask = skus
        .iter()
        .map(|sku| PAKET_BASIC_SKUS.contains(sku))
        .collect::<Vec<bool>>();
    let basic_total = distinct_where(&identities, &basic_mask);
    let basic_nc = distinct_where(&identities, &and_masks(&basic_mask, &is_nc));

    let reseller_mask = equals_mask(&platforms, Platform::Reseller.as_str());
    let regular_mask = reseller_mask.iter().map(|flag| !flag).collect::<Vec<bool>>();
    let units_regular = sum_where(&units, &regular_mask);
    let units_reseller = sum_where(&units, &reseller_mask);

    let entries = vec![
        section("ORDER PER PLATFORM"),
        count("Order Reseller", num_reseller),
        count("Order Tiktok", num_tiktok),
        count("Order Tokopedia", num_tokopedia),
        count("Order Shopee", num_shopee),
        count("Order WA", num_wa),
        count("Order Lazada", num_lazada),
        section("ORDER PER BUYER"),
        count("Order NC", order_nc),
        amount("Omzet NC", omzet_nc),
        count("Order RO", order_ro),
        amount("Omzet RO", omzet_ro),
        section("TOTAL ORDER AND OMZET"),
        count("Total Order", total_order),
        amount("Total Omzet", total_omzet),
        section("NC PER PLATFORM"),
        count("NC Tiktok", nc_tiktok),
        count("NC Shopee", nc_shopee),
        count("NC Tokopedia", nc_tokopedia),
        count("NC Lazada", nc_lazada),
        section("PAKET BASIC"),
        count("NC Paket Basic", basic_nc),
        count("Total Customer Paket Basic", basic_total),
        section("JUMLAH PRODUK TERJUAL"),
        amount("Regular", units_regular),
        amount("Reseller", units_reseller),
    ];

    Ok(DailySummary { entries })
}

fn section(label: &'static str) -> KpiEntry {
    KpiEntry {
        label,
        value: KpiValue::Section,
    }
}

fn count(label: &'static str, value: i64) -> KpiEntry {
    KpiEntry {
        label,
        value: KpiValue::Count(value),
    }
}

fn amount(label: &'static str, value: f64) -> KpiEntry {
    KpiEntry {
        label,
        value: KpiValue::Amount(value),
    }
}

fn truth_mask(values: &[&str]) -> Vec<bool> {
    values.iter().map(|value| *value == BOOL_TRUE).collect()
}

fn equals_mask(values: &[&str], expected: &str) -> Vec<bool> {
    values.iter().map(|value| *value == expected).collect()
}

fn and_masks(left: &[bool], right: &[bool]) -> Vec<bool> {
    left.iter()
        .zip(right)
        .map(|(a, b)| *a && *b)
        .collect()
}

fn distinct_where(values: &[&str], mask: &[bool]) -> i64 {
    values
        .iter()
        .zip(mask)
        .filter(|(_, keep)| **keep)
        .map(|(value, _)| *value)
        .collect::<HashSet<&str>>()
        .len() as i64
}

/// Sums the parseable numbers under the mask; unparseable cells contribute
/// nothing, matching how blank spreadsheet cells sum.
fn sum_where(values: &[&str], mask: &[bool]) -> f64 {
    values
        .iter()
        .zip(mask)
        .filter(|(_, keep)| **keep)
        .filter_map(|(value, _)| value.trim().parse::<f64>().ok())
        .sum()
}
