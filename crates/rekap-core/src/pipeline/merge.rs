//! Merging the cleaned daily rows onto the accumulated DB.

use crate::frame::Frame;
use crate::RecapResult;

pub const MERGED_LABEL: &str = "merged";

/// Reduces the cleaned daily frame to the DB's columns and appends it below
/// the DB rows. Historical rows keep their order and come first.
pub fn merge_into_db(db: &Frame, cleaned: &Frame) -> RecapResult<Frame> {
    let db_columns = db.columns().to_vec();
    let reduced = cleaned.select(cleaned.label(), &db_columns)?;
    db.concat(&reduced, MERGED_LABEL)
}

#[cfg(test)]
mod tests {
    use super::merge_into_db;
    use crate::frame::Frame;

    #[test]
    fn merged_rows_equal_db_plus_cleaned() {
        let db = Frame::from_csv_str("db", "Tanggal,Telepon\n2024-01-04,6281\n2024-01-04,6282\n");
        let cleaned = Frame::from_csv_str(
            "daily",
            "Telepon,Tanggal,is_nc\n6283,2024-01-05,true\n",
        );
        assert!(db.is_ok() && cleaned.is_ok());
        if let (Ok(db), Ok(cleaned)) = (db, cleaned) {
            let merged = merge_into_db(&db, &cleaned);
            assert!(merged.is_ok());
            if let Ok(merged) = merged {
                assert_eq!(merged.row_count(), 3);
                assert_eq!(merged.columns(), db.columns());
                // DB rows first, daily rows after.
                assert_eq!(
                    merged.column("Telepon").ok(),
                    Some(vec!["6281", "6282", "6283"])
                );
            }
        }
    }

    #[test]
    fn cleaned_frame_missing_a_db_column_is_an_error() {
        let db = Frame::from_csv_str("db", "Tanggal,Telepon,KOTA\n2024-01-04,6281,Jakarta\n");
        let cleaned = Frame::from_csv_str("daily", "Telepon,Tanggal\n6283,2024-01-05\n");
        assert!(db.is_ok() && cleaned.is_ok());
        if let (Ok(db), Ok(cleaned)) = (db, cleaned) {
            let merged = merge_into_db(&db, &cleaned);
            assert!(merged.is_err());
            if let Err(error) = merged {
                assert_eq!(error.code, "missing_column");
            }
        }
    }
}
