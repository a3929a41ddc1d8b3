//! Fixed-offset slicing of a VIN into its ISO 3779 sections.

use crate::domain::vin::Vin;

/// Year assigned to model-year codes outside the ISO 30-year cycle (`0`, `U`, `Z`).
pub const UNMAPPED_MODEL_YEAR: i32 = 2000;

/// Borrowed view over the sections of a [`Vin`].
///
/// `check_digit` is extracted for completeness but is never validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VinSegments<'a> {
    /// World Manufacturer Identifier, characters 0..3.
    pub wmi: &'a str,
    /// Vehicle Descriptor Section, characters 3..9.
    pub vds: &'a str,
    /// Vehicle Identifier Section, characters 9..17.
    pub vis: &'a str,
    pub check_digit: char,
    pub model_year_char: char,
    pub plant_code: char,
    /// Production serial, characters 11..17.
    pub serial: &'a str,
}

impl<'a> VinSegments<'a> {
    /// Two-character engine code taken from the start of the VDS.
    pub fn engine_code(&self) -> &'a str {
        &self.vds[..2]
    }
}

/// Splits a validated VIN into its segments.
///
/// Infallible: a [`Vin`] is always 17 ASCII characters.
pub fn split(vin: &Vin) -> VinSegments<'_> {
    let s = vin.as_str();
    let bytes = s.as_bytes();

    VinSegments {
        wmi: &s[0..3],
        vds: &s[3..9],
        vis: &s[9..17],
        check_digit: bytes[8] as char,
        model_year_char: bytes[9] as char,
        plant_code: bytes[10] as char,
        serial: &s[11..17],
    }
}

/// Decodes the model-year character into a calendar year.
///
/// Digits `1..=9` map to 2001-2009 and letters `A..=Y` (skipping `I`, `O`,
/// `Q`, `U`, `Z`) map to 2010-2030. Other codes decode to
/// [`UNMAPPED_MODEL_YEAR`]. The result is moved back in 30-year cycles until
/// it is not later than `reference_year`.
pub fn decode_model_year(code: char, reference_year: i32) -> i32 {
    let mut year = match code {
        '1'..='9' => 2000 + (code as i32 - '0' as i32),
        'A' => 2010,
        'B' => 2011,
        'C' => 2012,
        'D' => 2013,
        'E' => 2014,
        'F' => 2015,
        'G' => 2016,
        'H' => 2017,
        'J' => 2018,
        'K' => 2019,
        'L' => 2020,
        'M' => 2021,
        'N' => 2022,
        'P' => 2023,
        'R' => 2024,
        'S' => 2025,
        'T' => 2026,
        'V' => 2027,
        'W' => 2028,
        'X' => 2029,
        'Y' => 2030,
        _ => UNMAPPED_MODEL_YEAR,
    };

    while year > reference_year {
        year -= 30;
    }
    year
}

/// Whole years between production and the reference year, never negative.
pub fn vehicle_age(reference_year: i32, production_year: i32) -> u32 {
    reference_year.saturating_sub(production_year).max(0) as u32
}
