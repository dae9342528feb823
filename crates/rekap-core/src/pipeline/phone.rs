//! Phone number canonicalization.
//!
//! Every number ends up in the `628...` dialing-code form the accumulated DB
//! already uses. Punctuation is stripped first, then the first matching
//! prefix rule wins.

use crate::vocab::MISSING_PHONE;

/// Ordered `(prefix, replacement)` rewrites. `6208` must run before the bare
/// `8` rule or the prefix would be rewritten twice.
const PREFIX_RULES: &[(&str, &str)] = &[("6208", "628"), ("8", "628"), ("08", "628")];

const STRIPPED: &[char] = &['+', '(', ')', '-', ' '];

/// Canonicalizes one raw phone cell. Blank cells become the `nan` sentinel,
/// which no prefix rule touches.
pub fn normalize_phone(raw: &str) -> String {
    let stripped = raw
        .chars()
        .filter(|character| !STRIPPED.contains(character))
        .collect::<String>();

    if stripped.trim().is_empty() {
        return MISSING_PHONE.to_string();
    }

    for (prefix, replacement) in PREFIX_RULES {
        if let Some(rest) = stripped.strip_prefix(prefix) {
            return format!("{replacement}{rest}");
        }
    }

    stripped
}

pub fn normalize_phone_column(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| normalize_phone(value)).collect()
}
