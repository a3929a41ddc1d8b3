//! Synthetic mileage, seat count, registration plate and model selection.
//!
//! None of these values can be read from a real VIN. They are derived from
//! character codes so that the same VIN always produces the same listing.

use crate::domain::vin::Vin;
use crate::utils::hashing::string_hash;

/// Two-letter registration prefixes of 15 Polish cities.
pub const POLISH_CITY_CODES: [&str; 15] = [
    "WA", "KR", "PO", "WR", "GD", "LD", "SK", "ZS", "LU", "BI", "CB", "OP", "RZ", "KI", "GA",
];

/// Plate character set: `A-Z` without `I` and `O`, then digits.
pub const PLATE_ALPHABET: &[u8; 34] = b"ABCDEFGHJKLMNPQRSTUVWXYZ0123456789";

pub const DEFAULT_SEATS: u8 = 5;

/// Manufacturer seat defaults that differ from [`DEFAULT_SEATS`].
const MANUFACTURER_SEATS: &[(&str, u8)] = &[
    ("Porsche", 4),
    ("Mini", 4),
    ("Aston Martin", 4),
    ("Maserati", 4),
    ("Ferrari", 2),
    ("Lamborghini", 2),
    ("McLaren", 2),
    ("Lotus", 2),
    ("Smart", 2),
];

/// Model-name overrides; the first matching substring wins.
const MODEL_SEAT_OVERRIDES: [(&str, u8); 4] =
    [("van", 7), ("coupe", 4), ("cabrio", 4), ("roadster", 2)];

/// Odometer reading in kilometres.
///
/// The sum of character codes at indices 10..=14 seeds an average yearly
/// mileage in `[10000, 20000)`, multiplied by `age`. Vehicles younger than one
/// year get `hash % 10000`; vehicles older than ten years are scaled by 0.8.
pub fn mileage(vin: &Vin, age: u32) -> u32 {
    let hash = vin.code_sum(10..15);

    if age < 1 {
        return hash % 10_000;
    }

    let yearly = f64::from(10_000 + hash % 10_000);
    let mut total = yearly * f64::from(age);
    if age > 10 {
        total *= 0.8;
    }

    total.round() as u32
}

/// Seat count for a manufacturer/model pair.
pub fn seats_count(manufacturer: &str, model: &str) -> u8 {
    let model = model.to_ascii_lowercase();

    if let Some(&(_, seats)) = MODEL_SEAT_OVERRIDES
        .iter()
        .find(|(needle, _)| model.contains(needle))
    {
        return seats;
    }

    MANUFACTURER_SEATS
        .iter()
        .find(|(name, _)| *name == manufacturer)
        .map(|&(_, seats)| seats)
        .unwrap_or(DEFAULT_SEATS)
}

/// Synthesizes a Polish-looking registration plate.
///
/// The city prefix is chosen by the sum of the first three character codes
/// modulo 15; five more characters come from indices 12..=16 mapped through
/// [`PLATE_ALPHABET`].
pub fn registration_plate(vin: &Vin) -> String {
    let city = POLISH_CITY_CODES[(vin.code_sum(0..3) % 15) as usize];

    let suffix: String = (12..17)
        .map(|i| PLATE_ALPHABET[(vin.code_at(i) % 34) as usize] as char)
        .collect();

    format!("{city}{suffix}")
}

/// Index into a model list of length `count`, derived from VIN characters 9..13.
///
/// Returns 0 when `count` is 0 so callers never divide by zero.
pub fn model_index(vin: &Vin, count: usize) -> usize {
    if count == 0 {
        return 0;
    }

    let hash = string_hash(&vin.as_bytes()[9..13]);
    hash.unsigned_abs() as usize % count
}
