//! Transcription between ASCII and Bengali-script digits.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{BANGLA_DIGITS, ORDINAL_SUFFIX};
use crate::prelude::*;

/// Text whose ASCII digits have been replaced by Bengali digits.
///
/// Non-digit characters are kept as they were, so `"05:30"` becomes `"০৫:৩০"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, Into, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BengaliNumeral(String);

impl BengaliNumeral {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substitutes Bengali digits back to ASCII digits.
    ///
    /// ```
    /// use bangla_date::convert_number;
    ///
    /// assert_eq!(convert_number("09:05").to_ascii(), "09:05");
    /// ```
    pub fn to_ascii(&self) -> String {
        self.0
            .chars()
            .map(|c| {
                ('0'..='9')
                    .zip(BANGLA_DIGITS)
                    .find(|&(_, bangla)| bangla == c)
                    .map_or(c, |(ascii, _)| ascii)
            })
            .collect()
    }
}

impl AsRef<str> for BengaliNumeral {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Renders `value` and replaces each ASCII digit with its Bengali digit.
///
/// Accepts integers as well as preformatted strings.
///
/// ```
/// use bangla_date::convert_number;
///
/// assert_eq!(convert_number(1830).as_str(), "১৮৩০");
/// assert_eq!(convert_number("05:30").as_str(), "০৫:৩০");
/// ```
pub fn convert_number<T: fmt::Display>(value: T) -> BengaliNumeral {
    let rendered = value.to_string();
    BengaliNumeral(rendered.chars().map(bangla_digit).collect())
}

fn bangla_digit(c: char) -> char {
    ('0'..='9')
        .zip(BANGLA_DIGITS)
        .find(|&(ascii, _)| ascii == c)
        .map_or(c, |(_, bangla)| bangla)
}

/// Appends the "ই" suffix used after the day of month.
pub fn add_ordinal_suffix(numeral: &BengaliNumeral) -> String {
    let mut out = String::with_capacity(numeral.len() + ORDINAL_SUFFIX.len_utf8());
    out.push_str(numeral);
    out.push(ORDINAL_SUFFIX);
    out
}
