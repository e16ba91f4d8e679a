//! Outward/inward split of a normalized postcode.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PostcodeError, Result};
use crate::validation::{self, Rejection};

/// Length of the inward code (sector digit plus two unit letters)
pub const INWARD_LEN: usize = 3;

/// Byte offset where the last `INWARD_LEN` characters of `text` begin.
///
/// Strings shorter than that split at 0, so the whole string is the inward
/// part and the outward part is empty.
pub(crate) fn inward_boundary(text: &str) -> usize {
    text.char_indices()
        .rev()
        .nth(INWARD_LEN - 1)
        .map_or(0, |(idx, _)| idx)
}

/// Borrowed view of a normalized postcode split into its components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostcodeParts<'a> {
    /// Area + district, e.g. "SW1A"
    pub outward: &'a str,
    /// Sector + unit, e.g. "0AA"
    pub inward: &'a str,
    /// Leading one or two letters of the outward code
    pub area: &'a str,
    /// Remainder of the outward code after the area
    pub district: &'a str,
}

impl<'a> PostcodeParts<'a> {
    /// Split a normalized postcode.
    ///
    /// The area is a single letter when the second outward character is a
    /// digit, two characters otherwise. Returns `None` when there are not
    /// enough characters to tell.
    pub fn split(normalized: &'a str) -> Option<Self> {
        if normalized.chars().count() <= INWARD_LEN {
            return None;
        }
        let (outward, inward) = normalized.split_at(inward_boundary(normalized));

        let mut chars = outward.chars();
        let first = chars.next()?;
        let second = chars.next()?;
        let area_len = if second.is_ascii_digit() {
            first.len_utf8()
        } else {
            first.len_utf8() + second.len_utf8()
        };
        let (area, district) = outward.split_at(area_len);

        Some(Self {
            outward,
            inward,
            area,
            district,
        })
    }
}

/// A validated, upper-cased UK postcode
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Postcode {
    outward: String,
    inward: String,
    area_len: usize,
}

impl Postcode {
    /// Run the full rule engine over `raw` and keep the normalized result
    pub fn parse(raw: &str) -> Result<Self> {
        let normalized = super::normalize(raw);
        validation::check_normalized(&normalized)
            .map_err(|reason| PostcodeError::invalid(raw, reason))?;

        let parts = PostcodeParts::split(&normalized)
            .ok_or_else(|| PostcodeError::invalid(raw, Rejection::Malformed))?;

        Ok(Self {
            outward: parts.outward.to_string(),
            inward: parts.inward.to_string(),
            area_len: parts.area.len(),
        })
    }

    pub fn outward(&self) -> &str {
        &self.outward
    }

    pub fn inward(&self) -> &str {
        &self.inward
    }

    pub fn area(&self) -> &str {
        &self.outward[..self.area_len]
    }

    pub fn district(&self) -> &str {
        &self.outward[self.area_len..]
    }
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.outward, self.inward)
    }
}

impl FromStr for Postcode {
    type Err = PostcodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Postcode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Postcode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
