//! Phone number utilities
//!
//! Kukaya identifies accounts by Tanzanian mobile numbers. Numbers are
//! accepted in local (`07XXXXXXXX`, `06XXXXXXXX`) or international
//! (`255XXXXXXXXX`, `+255XXXXXXXXX`) form and canonicalized to the
//! digits-only international form `255XXXXXXXXX`.

use once_cell::sync::Lazy;
use regex::Regex;

// Canonical Tanzanian mobile: 255 followed by a 6x/7x subscriber number
static TZ_MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^255[67]\d{8}$").unwrap());

/// Strip common formatting characters, keeping digits and a leading `+`
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Canonicalize a phone number to `255XXXXXXXXX` form
///
/// Returns `None` when the input is not a valid Tanzanian mobile number in
/// any accepted form.
pub fn canonicalize_tz_phone(phone: &str) -> Option<String> {
    let normalized = normalize_phone_number(phone);
    let digits = normalized.strip_prefix('+').unwrap_or(&normalized);

    let canonical = if let Some(subscriber) = digits.strip_prefix('0') {
        // Local form: 0XXXXXXXXX
        format!("255{}", subscriber)
    } else {
        digits.to_string()
    };

    if TZ_MOBILE_REGEX.is_match(&canonical) {
        Some(canonical)
    } else {
        None
    }
}

/// Check if a phone number is a valid Tanzanian mobile in any accepted form
pub fn is_valid_tz_phone(phone: &str) -> bool {
    canonicalize_tz_phone(phone).is_some()
}

/// Mask a phone number for logging (e.g. `255712****78`)
pub fn mask_phone(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 8 {
        format!(
            "{}****{}",
            &normalized[..normalized.len() - 6],
            &normalized[normalized.len() - 2..]
        )
    } else {
        "****".to_string()
    }
}
