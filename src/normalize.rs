//! String cleanup applied to fields before persistence or comparison.
//!
//! Absent values pass through untouched, so callers can feed optional
//! fields directly. Both helpers are idempotent.

/// Trim surrounding whitespace.
///
/// # Example
/// ```rust
/// use identity_domain::normalize::trim;
///
/// assert_eq!(trim(Some("  bob  ".into())), Some("bob".into()));
/// assert_eq!(trim(None), None);
/// ```
pub fn trim(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}

/// Lower-case the value.
///
/// # Example
/// ```rust
/// use identity_domain::normalize::to_lower_case;
///
/// assert_eq!(to_lower_case(Some("A@B.com".into())), Some("a@b.com".into()));
/// ```
pub fn to_lower_case(value: Option<String>) -> Option<String> {
    value.map(|v| v.to_lowercase())
}
