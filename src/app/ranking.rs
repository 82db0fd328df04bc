//! Top-N rankings over a roster
//!
//! Both rankings are pure functions that take ownership of the roster and
//! return the selected characters. Characters a ranking cannot place (no
//! usable height for BMI, an unparseable birth year for age) are dropped from
//! that ranking rather than reported as errors.

use std::cmp::Ordering;

use tracing::debug;

use crate::app::models::Character;
use crate::constants::ranking::{AFTER_SUFFIX, BEFORE_SUFFIX, MIN_BIRTH_YEAR_LEN};
use crate::errors::BirthYearError;

/// Body mass index, `mass / (height_m)^2`
///
/// Returns `None` when the height is not strictly positive.
pub fn bmi(character: &Character) -> Option<f64> {
    if character.height.is_nan() || character.height <= 0.0 {
        return None;
    }
    let height_m = character.height / 100.0;
    Some(character.mass / (height_m * height_m))
}

/// Signed offset in years from the reference event
///
/// `"<years>BBY"` is negative, `"<years>ABY"` positive. `<years>` is a
/// non-negative decimal made of ASCII digits with at most one `.`.
///
/// # Examples
///
/// ```
/// use swapi_fetcher::app::ranking::abs_birth_year;
///
/// assert_eq!(abs_birth_year("19BBY").unwrap(), -19.0);
/// assert_eq!(abs_birth_year("10.5ABY").unwrap(), 10.5);
/// assert!(abs_birth_year("unknown").is_err());
/// ```
pub fn abs_birth_year(value: &str) -> Result<f64, BirthYearError> {
    let unparseable = || BirthYearError::Unparseable {
        value: value.to_string(),
    };

    if value.len() < MIN_BIRTH_YEAR_LEN {
        return Err(unparseable());
    }

    let (years, sign) = if let Some(years) = value.strip_suffix(BEFORE_SUFFIX) {
        (years, -1.0)
    } else if let Some(years) = value.strip_suffix(AFTER_SUFFIX) {
        (years, 1.0)
    } else {
        return Err(unparseable());
    };

    let digits = years.bytes().filter(u8::is_ascii_digit).count();
    let dots = years.bytes().filter(|b| *b == b'.').count();
    if digits == 0 || dots > 1 || digits + dots != years.len() {
        return Err(unparseable());
    }

    let magnitude: f64 = years.parse().map_err(|_| unparseable())?;
    Ok(sign * magnitude)
}

/// The `n` characters with the highest BMI, highest first
///
/// Characters without a positive height are excluded. Equal BMIs are ordered
/// by name.
pub fn top_by_bmi(characters: Vec<Character>, n: usize) -> Vec<Character> {
    let mut ranked: Vec<(f64, Character)> = characters
        .into_iter()
        .filter_map(|character| match bmi(&character) {
            Some(value) => Some((value, character)),
            None => {
                debug!("Excluding {} from BMI ranking: no height", character.name);
                None
            }
        })
        .collect();

    ranked.sort_by(|(a, left), (b, right)| {
        b.total_cmp(a).then_with(|| left.name.cmp(&right.name))
    });

    ranked
        .into_iter()
        .take(n)
        .map(|(_, character)| character)
        .collect()
}

/// The `n` oldest characters, oldest first
///
/// Characters whose birth year is missing or unparseable are excluded. Equal
/// birth years are ordered by name.
pub fn top_by_age(characters: Vec<Character>, n: usize) -> Vec<Character> {
    let mut ranked: Vec<(f64, Character)> = characters
        .into_iter()
        .filter_map(|character| {
            let parsed = match character.birth_year.as_deref() {
                Some(raw) => abs_birth_year(raw),
                None => Err(BirthYearError::Unparseable {
                    value: String::new(),
                }),
            };
            match parsed {
                Ok(offset) => Some((offset, character)),
                Err(e) => {
                    debug!("Excluding {} from age ranking: {}", character.name, e);
                    None
                }
            }
        })
        .collect();

    ranked.sort_by(|(a, left), (b, right)| {
        a.partial_cmp(b)
            .unwrap_or(Ordering::Equal)
            .then_with(|| left.name.cmp(&right.name))
    });

    ranked
        .into_iter()
        .take(n)
        .map(|(_, character)| character)
        .collect()
}
