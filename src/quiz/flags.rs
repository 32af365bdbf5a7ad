//! Flag image keys.
//!
//! The quiz never downloads flag images itself; it only derives the key a
//! UI needs to resolve one. Keys follow the hjnilsson/country-flags
//! repository convention: lowercase ISO 3166-1 alpha-2 code.

/// Repository of public-domain flag images, keyed by lowercase ISO code.
pub const FLAG_IMAGE_BASE_URL: &str =
    "https://raw.githubusercontent.com/hjnilsson/country-flags/master/png250px";

/// Derive the flag-image key for a country code.
///
/// Lowercasing an already-lowercase code is a no-op.
pub fn flag_key(country_code: &str) -> String {
    country_code.to_ascii_lowercase()
}

/// Full URL of the 250px PNG for a flag key.
pub fn flag_url(flag_key: &str) -> String {
    format!("{FLAG_IMAGE_BASE_URL}/{flag_key}.png")
}
