//! Channel label canonicalization.
//!
//! Free-text platform labels from the marketplaces collapse into the small
//! vocabulary the KPI table keys on. Unknown labels pass through title-cased
//! so new channels surface in the output instead of vanishing.

use crate::vocab::Platform;

/// Canonicalizes one raw platform cell.
pub fn normalize_platform(raw: &str) -> String {
    let cleaned = title_case(&raw.replace('_', " "));
    let cleaned = cleaned.trim();

    let canonical = match cleaned {
        "Shopee" => Platform::Shopee,
        "Tokopedia" => Platform::Tokopedia,
        "Tiktok" => Platform::Tiktok,
        "Lazada" => Platform::Lazada,
        "Webstore" | "Website" | "Web" | "Tada" | "Internal" => Platform::Website,
        "Social Media" | "Wa" => Platform::Wa,
        "Reseller" => Platform::Reseller,
        other => return other.to_string(),
    };
    canonical.as_str().to_string()
}

pub fn normalize_platform_column(values: &[&str]) -> Vec<String> {
    values
        .iter()
        .map(|value| normalize_platform(value))
        .collect()
}

/// Title-cases with word boundaries at non-alphabetic characters and the
/// remainder lowercased, matching how the marketplace exports were cleaned
/// historically.
fn title_case(value: &str) -> String {
    let mut output = String::with_capacity(value.len());
    let mut at_boundary = true;
    for character in value.chars() {
        if character.is_alphabetic() {
            if at_boundary {
                output.extend(character.to_uppercase());
            } else {
                output.extend(character.to_lowercase());
            }
            at_boundary = false;
        } else {
            output.push(character);
            at_boundary = true;
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::{normalize_platform, normalize_platform_column};

    #[test]
    fn marketplace_labels_map_to_themselves() {
        assert_eq!(normalize_platform("shopee"), "Shopee");
        assert_eq!(normalize_platform("TOKOPEDIA"), "Tokopedia");
        assert_eq!(normalize_platform("tiktok"), "Tiktok");
        assert_eq!(normalize_platform(" lazada "), "Lazada");
    }

    #[test]
    fn website_aliases_collapse_to_one_label() {
        for raw in ["webstore", "website", "web", "tada", "internal"] {
            assert_eq!(normalize_platform(raw), "Website");
        }
    }

    #[test]
    fn chat_channels_collapse_to_wa() {
        assert_eq!(normalize_platform("social_media"), "WA");
        assert_eq!(normalize_platform("wa"), "WA");
        assert_eq!(normalize_platform("WA"), "WA");
    }

    #[test]
    fn reseller_stays_reseller() {
        assert_eq!(normalize_platform("reseller"), "Reseller");
    }

    #[test]
    fn unknown_labels_pass_through_title_cased() {
        assert_eq!(normalize_platform("blibli"), "Blibli");
        assert_eq!(normalize_platform("some_new channel"), "Some New Channel");
    }

    #[test]
    fn column_preserves_order_and_length() {
        let normalized = normalize_platform_column(&["wa", "shopee", "blibli"]);
        assert_eq!(normalized, ["WA", "Shopee", "Blibli"]);
    }
}
