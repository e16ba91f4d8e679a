//! Postcode Model
//!
//! Normalization and the outward/inward/area/district split.
//! No validation rules live here - see [`crate::validation`].

pub mod parts;

pub use parts::{Postcode, PostcodeParts};

/// Remove every space character, leaving casing untouched
pub fn strip_spaces(raw: &str) -> String {
    raw.replace(' ', "")
}

/// Normalize a raw postcode: strip spaces and upper-case all letters
///
/// Only the space character is stripped; tabs and newlines are kept so
/// they fail the structural check.
pub fn normalize(raw: &str) -> String {
    strip_spaces(raw).to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_spaces_and_uppercases() {
        assert_eq!(normalize("ec1a 1bb"), "EC1A1BB");
        assert_eq!(normalize("  w1a   0ax "), "W1A0AX");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize("sw1a 2aa");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_strip_spaces_keeps_case() {
        assert_eq!(strip_spaces("wc1A 0ax"), "wc1A0ax");
    }

    #[test]
    fn test_normalize_keeps_other_whitespace() {
        assert_eq!(normalize("m1\t1ae"), "M1\t1AE");
    }
}
