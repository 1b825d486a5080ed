//! Phone-number normalization, validation, and phone-key encoding.
//!
//! The backend stores phone numbers in an email-shaped key,
//! `<digits>@<domain>`, so they can double as sign-in addresses. Lookup
//! only works on exact key equality, so both validation and key
//! construction run on the same normalized digit string.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Default domain suffix for phone keys.
pub const DEFAULT_PHONE_DOMAIN: &str = "chatlist.app";

/// Validation failures for user-entered phone numbers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneError {
    #[error("Please enter a phone number")]
    Empty,
    #[error("Enter a valid phone number (10-15 digits)")]
    Format,
}

fn digits_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]{10,15}$").expect("valid regex"))
}

/// Strip formatting characters: spaces, hyphens, parentheses, dots, and a
/// leading `+`.
pub fn strip_formatting(raw: &str) -> String {
    raw.trim()
        .strip_prefix('+')
        .unwrap_or(raw.trim())
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')' | '.'))
        .collect()
}

/// Normalize and validate a raw phone input.
///
/// Returns the bare digit string (10-15 decimal digits) on success.
pub fn normalize(raw: &str) -> Result<String, PhoneError> {
    if raw.trim().is_empty() {
        return Err(PhoneError::Empty);
    }
    let digits = strip_formatting(raw);
    if !digits_pattern().is_match(&digits) {
        return Err(PhoneError::Format);
    }
    Ok(digits)
}

/// Encode normalized digits into the backend's lookup key.
///
/// Example: `("5551234567", "chatlist.app")` → `"5551234567@chatlist.app"`
pub fn encode_key(digits: &str, domain: &str) -> String {
    format!("{}@{}", digits, domain)
}

/// Extract the digit portion of a stored phone key (best-effort, for
/// display). Returns the whole string when it is not key-shaped.
pub fn digits_from_key(key: &str) -> &str {
    key.split('@').next().unwrap_or(key)
}
