//! Input validation rules for the API boundary
//!
//! Verdict-only helpers with no side effects; callers decide what a failed
//! check means for their result envelope.

use regex::Regex;
use std::sync::OnceLock;

/// Check a phone number against the accepted formats.
///
/// Accepts either `+` followed by 10-15 digits, or three digit groups of
/// 3-3-4 separated by hyphens (`NNN-NNN-NNNN`). An absent phone is valid at
/// the boundary; this helper only judges supplied values.
pub fn is_valid_phone(phone: &str) -> bool {
    static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = PHONE_REGEX
        .get_or_init(|| Regex::new(r"^(\+\d{10,15}|\d{3}-\d{3}-\d{4})$").unwrap());
    regex.is_match(phone)
}

/// A product price must be strictly positive.
pub fn is_valid_price(price: f64) -> bool {
    price > 0.0
}

/// Stock levels may be zero but never negative.
pub fn is_valid_stock(stock: i32) -> bool {
    stock >= 0
}
