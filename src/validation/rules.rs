//! Rule Tables
//!
//! Process-wide immutable tables behind the exception rules, built once on
//! first use.

use std::collections::HashSet;
use std::hash::Hash;
use std::sync::LazyLock;

use regex::Regex;

/// Structural pattern: `A9A 9AA`, `A9 9AA`, `A99 9AA`, `AA9A 9AA`, `AA9 9AA`,
/// `AA99 9AA`, or the literal `GIR 0AA`.
pub static STRUCTURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([A-Za-z][A-Ha-hJ-Yj-y]?[0-9][A-Za-z0-9]? ?[0-9][A-Za-z]{2}|[Gg][Ii][Rr] ?0[Aa]{2})$",
    )
    .expect("postcode structure pattern compiles")
});

/// Areas whose districts are all single-digit
pub static SINGLE_DIGIT_DISTRICT_AREAS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        "BR", "FY", "HA", "HD", "HG", "HR", "HS", "HX", "JE", "LD", "SM", "SR", "WN", "ZE",
    ])
});

/// Areas whose districts are all double-digit
pub static DOUBLE_DIGIT_DISTRICT_AREAS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| set(&["AB", "LL", "SO"]));

/// Areas that have a district "0"
pub static ZERO_DISTRICT_AREAS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| set(&["BL", "CM", "CR", "FY", "HA", "PR", "SL", "SS"]));

/// Central London areas restricted to single-digit districts
pub static CENTRAL_LONDON_AREAS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| set(&["EC", "SW", "WC", "NW", "SE"]));

pub static FORBIDDEN_FIRST_LETTERS: LazyLock<HashSet<char>> =
    LazyLock::new(|| set(&['Q', 'V', 'X']));

pub static FORBIDDEN_SECOND_LETTERS: LazyLock<HashSet<char>> =
    LazyLock::new(|| set(&['I', 'J', 'Z']));

/// Letters allowed after the digit in an `A9A` outward code
pub static ALLOWED_THIRD_LETTERS: LazyLock<HashSet<char>> = LazyLock::new(|| {
    set(&[
        'A', 'C', 'E', 'F', 'G', 'H', 'J', 'K', 'P', 'S', 'T', 'U', 'W',
    ])
});

/// Letters allowed after the digit in an `AA9A` outward code
pub static ALLOWED_FOURTH_LETTERS: LazyLock<HashSet<char>> = LazyLock::new(|| {
    set(&[
        'A', 'B', 'E', 'H', 'M', 'N', 'P', 'R', 'V', 'W', 'X', 'Y',
    ])
});

/// Letters never used to end the inward code
pub static FORBIDDEN_FINAL_LETTERS: LazyLock<HashSet<char>> =
    LazyLock::new(|| set(&['C', 'I', 'K', 'M', 'O', 'V']));

fn set<T: Copy + Eq + Hash>(items: &[T]) -> HashSet<T> {
    items.iter().copied().collect()
}
