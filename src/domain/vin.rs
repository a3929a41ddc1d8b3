//! Vehicle Identification Number value type and structural validation.

use crate::utils::hashing::{char_code, sum_codes};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Number of characters in every VIN.
pub const VIN_LENGTH: usize = 17;

/// Allowed VIN alphabet: `A-Z` without `I`, `O`, `Q`, plus digits.
static VIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-HJ-NPR-Z0-9]{17}$").expect("VIN pattern is valid"));

/// Reasons a string is rejected as a VIN.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidVinFormat {
    #[error("VIN is empty")]
    Empty,

    #[error("VIN must be exactly 17 characters, got {0}")]
    Length(usize),

    #[error("VIN contains disallowed character '{character}' at position {position}")]
    Character { character: char, position: usize },
}

/// A structurally valid 17-character VIN.
///
/// The character set is checked once in [`Vin::parse`]; everything downstream
/// relies on the value being pure ASCII of exactly [`VIN_LENGTH`] bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Vin(String);

impl Vin {
    /// Parses and validates a raw VIN string.
    ///
    /// Input is taken verbatim: lowercase letters and surrounding whitespace
    /// are rejected rather than normalized.
    ///
    /// # Errors
    ///
    /// - [`InvalidVinFormat::Empty`] for an empty string
    /// - [`InvalidVinFormat::Length`] when the length is not 17 characters
    /// - [`InvalidVinFormat::Character`] for the first character outside the alphabet
    pub fn parse(raw: &str) -> Result<Self, InvalidVinFormat> {
        if raw.is_empty() {
            return Err(InvalidVinFormat::Empty);
        }

        let length = raw.chars().count();
        if length != VIN_LENGTH {
            return Err(InvalidVinFormat::Length(length));
        }

        if !VIN_REGEX.is_match(raw) {
            let (position, character) = raw
                .chars()
                .enumerate()
                .find(|&(_, c)| !is_vin_char(c))
                .unwrap_or((0, '?'));
            return Err(InvalidVinFormat::Character {
                character,
                position,
            });
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Character code of the VIN character at `index` (0-based).
    ///
    /// # Panics
    ///
    /// Panics if `index >= 17`; callers only use fixed in-range offsets.
    pub fn code_at(&self, index: usize) -> u32 {
        char_code(self.0.as_bytes()[index])
    }

    /// Sum of the character codes over a byte range of the VIN.
    pub fn code_sum(&self, range: std::ops::Range<usize>) -> u32 {
        sum_codes(&self.0.as_bytes()[range])
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Vin {
    type Error = InvalidVinFormat;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Vin::parse(&value)
    }
}

impl From<Vin> for String {
    fn from(vin: Vin) -> Self {
        vin.0
    }
}

impl std::str::FromStr for Vin {
    type Err = InvalidVinFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Vin::parse(s)
    }
}

fn is_vin_char(c: char) -> bool {
    matches!(c, 'A'..='H' | 'J'..='N' | 'P' | 'R'..='Z' | '0'..='9')
}

/// Returns `true` if `raw` would be accepted by [`Vin::parse`].
///
/// Intended for immediate form feedback before a full lookup.
pub fn validate_structure(raw: &str) -> bool {
    VIN_REGEX.is_match(raw)
}

/// Renders a VIN as `WMI-VDS-VIS` for presentation.
///
/// Works on any string: segments are cut at character offsets 3 and 9 and
/// empty trailing segments are dropped. Inputs shorter than four characters
/// are returned unchanged.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_for_display("WVWBZZZ1JW123456"), "WVW-BZZZ1J-W123456");
/// assert_eq!(format_for_display("WVWZZZ1J"), "WVW-ZZZ1J");
/// ```
pub fn format_for_display(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    if chars.len() < 4 {
        return raw.to_string();
    }

    let wmi: String = chars[..3].iter().collect();
    let vds: String = chars[3..chars.len().min(9)].iter().collect();
    let vis: String = chars.get(9..).map(|c| c.iter().collect()).unwrap_or_default();

    if vis.is_empty() {
        format!("{wmi}-{vds}")
    } else {
        format!("{wmi}-{vds}-{vis}")
    }
}
