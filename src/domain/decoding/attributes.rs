//! Single-character attribute decoders: transmission, drive, color and paint finish.

use crate::domain::entities::{DriveType, Transmission};

/// Color returned for characters outside [`COLOR_TABLE`].
pub const DEFAULT_COLOR: &str = "Silver";

/// Paint finish returned for characters outside [`PAINT_FINISH_TABLE`].
pub const DEFAULT_PAINT_FINISH: &str = "Standard";

/// Brands whose ambiguous drive codes are read as 4x4.
pub const AWD_BIASED_BRANDS: [&str; 4] = ["Audi", "Subaru", "Jeep", "Land Rover"];

/// Brands whose ambiguous drive codes are read as rear-wheel drive.
pub const RWD_BIASED_BRANDS: [&str; 4] = ["BMW", "Mercedes-Benz", "Porsche", "Jaguar"];

/// Fallback cycle for transmission characters outside the curated table.
const TRANSMISSION_CYCLE: [Transmission; 3] = [
    Transmission::Automatic,
    Transmission::Manual,
    Transmission::SemiAutomatic,
];

pub const COLOR_TABLE: [(char, &str); 36] = [
    ('A', "Black"),
    ('B', "Blue"),
    ('C', "Beige"),
    ('D', "Dark Gray"),
    ('E', "Green"),
    ('F', "Gold"),
    ('G', "Gray"),
    ('H', "Brown"),
    ('I', "Ivory"),
    ('J', "Dark Blue"),
    ('K', "Black"),
    ('L', "Light Blue"),
    ('M', "Maroon"),
    ('N', "Navy"),
    ('O', "Orange"),
    ('P', "Purple"),
    ('Q', "Bronze"),
    ('R', "Red"),
    ('S', "Silver"),
    ('T', "Titanium"),
    ('U', "Burgundy"),
    ('V', "Violet"),
    ('W', "White"),
    ('X', "Graphite"),
    ('Y', "Yellow"),
    ('Z', "Copper"),
    ('0', "White"),
    ('1', "Black"),
    ('2', "Silver"),
    ('3', "Gray"),
    ('4', "Blue"),
    ('5', "Red"),
    ('6', "Green"),
    ('7', "Beige"),
    ('8', "Brown"),
    ('9', "Other"),
];

pub const PAINT_FINISH_TABLE: [(char, &str); 36] = [
    ('A', "Standard"),
    ('B', "Metallic"),
    ('C', "Pearl"),
    ('D', "Matte"),
    ('E', "Standard"),
    ('F', "Metallic"),
    ('G', "Metallic"),
    ('H', "Pearl"),
    ('I', "Standard"),
    ('J', "Metallic"),
    ('K', "Matte"),
    ('L', "Standard"),
    ('M', "Metallic"),
    ('N', "Pearl"),
    ('O', "Standard"),
    ('P', "Pearl"),
    ('Q', "Standard"),
    ('R', "Metallic"),
    ('S', "Standard"),
    ('T', "Metallic"),
    ('U', "Standard"),
    ('V', "Metallic"),
    ('W', "Standard"),
    ('X', "Matte"),
    ('Y', "Standard"),
    ('Z', "Metallic"),
    ('0', "Standard"),
    ('1', "Metallic"),
    ('2', "Metallic"),
    ('3', "Pearl"),
    ('4', "Standard"),
    ('5', "Metallic"),
    ('6', "Standard"),
    ('7', "Pearl"),
    ('8', "Metallic"),
    ('9', "Matte"),
];

/// Decodes the transmission character (VIN index 6).
///
/// Characters outside the curated set fall back to `char_code % 3` over
/// Automatic, Manual and Semi-automatic, in that order.
pub fn decode_transmission(code: char) -> Transmission {
    match code {
        'A' | 'B' | 'E' => Transmission::Automatic,
        'D' | 'G' => Transmission::AutomaticDsg,
        'M' | 'N' | 'P' => Transmission::Manual,
        'S' | 'H' => Transmission::SemiAutomatic,
        'C' | 'V' => Transmission::Cvt,
        _ => TRANSMISSION_CYCLE[(u32::from(code) % 3) as usize],
    }
}

/// Decodes the drive character (VIN index 7) for a manufacturer.
///
/// Definite codes map directly. Any other code is ambiguous and resolves by
/// brand: AWD-biased brands get 4x4, RWD-biased brands get rear-wheel drive,
/// everything else front-wheel drive.
pub fn decode_drive(code: char, manufacturer: &str) -> DriveType {
    match code {
        'F' | '1' | '2' => DriveType::FrontWheel,
        'R' | '3' => DriveType::RearWheel,
        '4' | 'X' | 'A' => DriveType::FourByFour,
        _ if AWD_BIASED_BRANDS.contains(&manufacturer) => DriveType::FourByFour,
        _ if RWD_BIASED_BRANDS.contains(&manufacturer) => DriveType::RearWheel,
        _ => DriveType::FrontWheel,
    }
}

/// Decodes the color character (VIN index 11).
pub fn decode_color(code: char) -> &'static str {
    lookup_char(&COLOR_TABLE, code).unwrap_or(DEFAULT_COLOR)
}

/// Decodes the paint finish character (VIN index 12).
pub fn decode_paint_finish(code: char) -> &'static str {
    lookup_char(&PAINT_FINISH_TABLE, code).unwrap_or(DEFAULT_PAINT_FINISH)
}

fn lookup_char(table: &[(char, &'static str)], code: char) -> Option<&'static str> {
    table.iter().find(|(c, _)| *c == code).map(|&(_, v)| v)
}
