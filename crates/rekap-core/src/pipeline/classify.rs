//! New-customer / returning-customer classification against the DB.

use std::collections::HashSet;

use crate::frame::Frame;
use crate::vocab::columns;
use crate::{RecapError, RecapResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerClass {
    NewCustomer,
    Returning,
}

impl CustomerClass {
    /// Parses the `NC` / `RO` mode flag. Anything else is a contract
    /// violation and fails fast.
    pub fn parse(flag: &str) -> RecapResult<Self> {
        match flag {
            "NC" => Ok(Self::NewCustomer),
            "RO" => Ok(Self::Returning),
            other => Err(RecapError::unrecognized_class_flag(other)),
        }
    }

    pub const fn as_flag(self) -> &'static str {
        match self {
            Self::NewCustomer => "NC",
            Self::Returning => "RO",
        }
    }
}

/// Collects the unique normalized phone numbers already present in the DB.
pub fn known_customers(db: &Frame) -> RecapResult<HashSet<String>> {
    Ok(db
        .column(columns::TELEPON)?
        .into_iter()
        .map(str::to_string)
        .collect())
}

/// Marks each identifier according to the requested class: membership in the
/// DB means returning, absence means new. Pure function of its inputs.
pub fn classify(
    identifiers: &[&str],
    known: &HashSet<String>,
    class: CustomerClass,
) -> Vec<bool> {
    identifiers
        .iter()
        .map(|identifier| {
            let returning = known.contains(*identifier);
            match class {
                CustomerClass::Returning => returning,
                CustomerClass::NewCustomer => !returning,
            }
        })
        .collect()
}
