//! Validation Engine
//!
//! The structural check followed by the cascade of area and letter
//! exception rules. Every operation is a pure function of its input.

use thiserror::Error;

use super::rules;
use crate::error::{PostcodeError, Result};
use crate::postcode::parts::inward_boundary;
use crate::postcode::{PostcodeParts, normalize, strip_spaces};

/// The first rule a postcode broke
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("does not match the postcode structure")]
    Malformed,

    #[error("area {0} only has single-digit districts")]
    SingleDigitDistrictArea(String),

    #[error("area {0} only has double-digit districts")]
    DoubleDigitDistrictArea(String),

    #[error("area {0} has no district 0")]
    ZeroDistrict(String),

    #[error("central London area {area} has no district {district}")]
    CentralLondonDistrict { area: String, district: String },

    #[error("letter {0} is not used in the first position")]
    FirstLetter(char),

    #[error("letter {0} is not used in the second position")]
    SecondLetter(char),

    #[error("letter {0} is not used in the third position")]
    ThirdLetter(char),

    #[error("letter {0} is not used in the fourth position")]
    FourthLetter(char),

    #[error("letter {0} is not used in the final position")]
    FinalLetter(char),
}

/// Check a postcode, reporting the first rule it breaks
pub fn check(raw: &str) -> std::result::Result<(), Rejection> {
    let result = check_normalized(&normalize(raw));
    match &result {
        Ok(()) => log::trace!("accepted postcode {:?}", raw),
        Err(reason) => log::debug!("rejected postcode {:?}: {}", raw, reason),
    }
    result
}

/// Validate a UK postcode, ignoring case and spaces
pub fn validate(raw: &str) -> bool {
    check(raw).is_ok()
}

/// Format a postcode as "OUTWARD INWARD".
///
/// Spaces are stripped before validation but the casing of the input is
/// kept in the output.
pub fn format(raw: &str) -> Result<String> {
    let stripped = strip_spaces(raw);
    check(&stripped).map_err(|reason| PostcodeError::invalid(raw, reason))?;

    let (outward, inward) = stripped.split_at(inward_boundary(&stripped));
    Ok(format!("{} {}", outward, inward))
}

/// Apply every rule to an already normalized postcode
pub(crate) fn check_normalized(normalized: &str) -> std::result::Result<(), Rejection> {
    if !rules::STRUCTURE.is_match(normalized) {
        return Err(Rejection::Malformed);
    }

    let PostcodeParts {
        inward,
        area,
        district,
        ..
    } = PostcodeParts::split(normalized).ok_or(Rejection::Malformed)?;

    check_district(area, district)?;
    check_area_letters(area)?;
    check_district_letter(area, district)?;

    if let Some(last) = inward.chars().last() {
        if rules::FORBIDDEN_FINAL_LETTERS.contains(&last) {
            return Err(Rejection::FinalLetter(last));
        }
    }

    Ok(())
}

fn check_district(area: &str, district: &str) -> std::result::Result<(), Rejection> {
    if rules::SINGLE_DIGIT_DISTRICT_AREAS.contains(area) && district.len() > 1 {
        return Err(Rejection::SingleDigitDistrictArea(area.to_string()));
    }

    if rules::DOUBLE_DIGIT_DISTRICT_AREAS.contains(area) && district.len() < 2 {
        return Err(Rejection::DoubleDigitDistrictArea(area.to_string()));
    }

    if district == "0" && !rules::ZERO_DISTRICT_AREAS.contains(area) {
        return Err(Rejection::ZeroDistrict(area.to_string()));
    }

    if rules::CENTRAL_LONDON_AREAS.contains(area) {
        let mut chars = district.chars();
        let starts_with_digit = chars.next().is_some_and(|c| c.is_ascii_digit());
        let second_is_digit = chars.next().is_some_and(|c| c.is_ascii_digit());
        if !starts_with_digit || second_is_digit {
            return Err(Rejection::CentralLondonDistrict {
                area: area.to_string(),
                district: district.to_string(),
            });
        }
    }

    Ok(())
}

fn check_area_letters(area: &str) -> std::result::Result<(), Rejection> {
    let mut letters = area.chars();

    if let Some(first) = letters.next() {
        if rules::FORBIDDEN_FIRST_LETTERS.contains(&first) {
            return Err(Rejection::FirstLetter(first));
        }
    }

    if let Some(second) = letters.next() {
        if rules::FORBIDDEN_SECOND_LETTERS.contains(&second) {
            return Err(Rejection::SecondLetter(second));
        }
    }

    Ok(())
}

/// Restrict the letter that may end the district (`A9A` and `AA9A` shapes)
fn check_district_letter(area: &str, district: &str) -> std::result::Result<(), Rejection> {
    let Some(last) = district.chars().last().filter(|c| !c.is_ascii_digit()) else {
        return Ok(());
    };

    match area.len() {
        1 if district.len() == 2 && !rules::ALLOWED_THIRD_LETTERS.contains(&last) => {
            Err(Rejection::ThirdLetter(last))
        }
        2 if !rules::ALLOWED_FOURTH_LETTERS.contains(&last) => Err(Rejection::FourthLetter(last)),
        _ => Ok(()),
    }
}
