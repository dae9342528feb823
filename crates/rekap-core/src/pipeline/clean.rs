//! Daily cleaner: turns the raw marketplace export into rows aligned with
//! the accumulated DB schema, with identity and NC/RO columns attached.

use crate::frame::Frame;
use crate::pipeline::classify::{self, CustomerClass};
use crate::pipeline::{phone, platform};
use crate::vocab::{EXCLUDED_STORE, MISSING_PHONE, STATUS_PENDING, columns};
use crate::RecapResult;

pub const BOOL_TRUE: &str = "true";
pub const BOOL_FALSE: &str = "false";

/// Runs the cleaning steps in order: filter internal-store and pending rows,
/// rename to the DB schema, normalize phone and platform, derive the
/// placeholder identity, classify NC/RO. Returns a new frame; the raw export
/// is untouched.
pub fn clean_daily(daily: &Frame, db: &Frame) -> RecapResult<Frame> {
    let mut cleaned = daily.clone();

    let store_mask = keep_mask(&cleaned, columns::NAMA_TOKO, |value| {
        !value.trim().eq_ignore_ascii_case(EXCLUDED_STORE)
    })?;
    cleaned.retain_rows(&store_mask)?;

    let status_mask = keep_mask(&cleaned, columns::STATUS_MP, |value| {
        value.trim() != STATUS_PENDING
    })?;
    cleaned.retain_rows(&status_mask)?;

    cleaned.rename_column(columns::RAW_KOTA, columns::KOTA)?;
    cleaned.rename_column(columns::RAW_TELEPON, columns::TELEPON)?;

    let phones = phone::normalize_phone_column(&cleaned.column(columns::TELEPON)?);
    cleaned.set_column(columns::TELEPON, phones)?;

    let platforms = platform::normalize_platform_column(&cleaned.column(columns::PLATFORM)?);
    cleaned.set_column(columns::PLATFORM, platforms)?;

    let placeholders = placeholder_identities(&cleaned)?;
    cleaned.set_column(columns::TELEPON_PLACEHOLDER, placeholders)?;

    let known = classify::known_customers(db)?;
    let identifiers = cleaned.column(columns::TELEPON_PLACEHOLDER)?;
    let is_nc = classify::classify(&identifiers, &known, CustomerClass::NewCustomer);
    let is_ro = classify::classify(&identifiers, &known, CustomerClass::Returning);
    let is_nc = bool_column(&is_nc);
    let is_ro = bool_column(&is_ro);
    cleaned.set_column(columns::IS_NC, is_nc)?;
    cleaned.set_column(columns::IS_RO, is_ro)?;

    Ok(cleaned)
}

/// Orders without a phone number still need a distinct identity; the order
/// number stands in for the missing phone.
fn placeholder_identities(cleaned: &Frame) -> RecapResult<Vec<String>> {
    let phones = cleaned.column(columns::TELEPON)?;
    let orders = cleaned.column(columns::NO_PESANAN)?;
    Ok(phones
        .iter()
        .zip(&orders)
        .map(|(phone, order)| {
            if *phone == MISSING_PHONE {
                (*order).to_string()
            } else {
                (*phone).to_string()
            }
        })
        .collect())
}

fn keep_mask(
    frame: &Frame,
    column: &str,
    keep: impl Fn(&str) -> bool,
) -> RecapResult<Vec<bool>> {
    Ok(frame
        .column(column)?
        .into_iter()
        .map(keep)
        .collect())
}

fn bool_column(values: &[bool]) -> Vec<String> {
    values
        .iter()
        .map(|value| {
            if *value {
                BOOL_TRUE.to_string()
            } else {
                BOOL_FALSE.to_string()
            }
        })
        .collect()
}
