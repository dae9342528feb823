//! `Tanggal` timestamp handling: parsing, maxima, and the advisory
//! daily-vs-DB ordering check.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::frame::Frame;
use crate::vocab::columns;
use crate::{RecapError, RecapResult};

/// The DB may legitimately carry a timestamp a sliver past the daily export's
/// cutoff; one minute of slack keeps that from warning.
const ORDER_TOLERANCE_MINUTES: i64 = 1;

const TIMESTAMP_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_LAYOUTS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

/// Parses one `Tanggal` cell. Dates without a time component count as
/// midnight.
pub fn parse_tanggal(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    for layout in TIMESTAMP_LAYOUTS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, layout) {
            return Some(parsed);
        }
    }
    for layout in DATE_LAYOUTS {
        if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, layout) {
            return parsed.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// The latest parseable `Tanggal` in the table, if any cell parses at all.
pub fn latest_tanggal(frame: &Frame) -> RecapResult<Option<NaiveDateTime>> {
    let values = frame.column(columns::TANGGAL)?;
    Ok(values.iter().filter_map(|value| parse_tanggal(value)).max())
}

/// Like [`latest_tanggal`] but treats an unparseable column as an error, for
/// the callers that need a concrete date (the export filename).
pub fn required_latest_tanggal(frame: &Frame) -> RecapResult<NaiveDateTime> {
    latest_tanggal(frame)?
        .ok_or_else(|| RecapError::unreadable_dates(frame.label(), columns::TANGGAL))
}

#[derive(Debug, Clone)]
pub struct DateOrderReport {
    pub db_latest: Option<NaiveDateTime>,
    pub daily_latest: Option<NaiveDateTime>,
    pub db_newer_than_daily: bool,
}

/// Advisory check that the DB predates the daily export. A stale daily file
/// is worth flagging but never halts the recap; the finding travels as a
/// warning.
pub fn check_date_order(db: &Frame, daily: &Frame) -> RecapResult<DateOrderReport> {
    let db_latest = latest_tanggal(db)?;
    let daily_latest = latest_tanggal(daily)?;

    let db_newer_than_daily = match (db_latest, daily_latest) {
        (Some(db_max), Some(daily_max)) => {
            db_max - Duration::minutes(ORDER_TOLERANCE_MINUTES) > daily_max
        }
        _ => false,
    };

    Ok(DateOrderReport {
        db_latest,
        daily_latest,
        db_newer_than_daily,
    })
}

pub fn format_tanggal(value: &NaiveDateTime) -> String {
    value.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Export-name date stem, e.g. `05 Jan 2024`.
pub fn format_export_date(value: &NaiveDateTime) -> String {
    value.format("%d %b %Y").to_string()
}
