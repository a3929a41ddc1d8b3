//! Manufacturer and country resolution from the World Manufacturer Identifier.

use crate::domain::entities::{ManufacturerInfo, Region};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Country used when the first VIN character has no regional mapping.
pub const DEFAULT_COUNTRY: &str = "Germany";

/// Known WMI prefixes and the manufacturer they identify.
pub const WMI_TABLE: &[(&str, &str)] = &[
    // Volkswagen group
    ("WVW", "Volkswagen"),
    ("WVG", "Volkswagen"),
    ("WV1", "Volkswagen"),
    ("WV2", "Volkswagen"),
    ("1VW", "Volkswagen"),
    ("3VW", "Volkswagen"),
    ("9BW", "Volkswagen"),
    ("AAV", "Volkswagen"),
    ("WAU", "Audi"),
    ("WA1", "Audi"),
    ("WUA", "Audi"),
    ("TRU", "Audi"),
    ("TMB", "Skoda"),
    ("VSS", "Seat"),
    ("WP0", "Porsche"),
    ("WP1", "Porsche"),
    ("SCB", "Bentley"),
    ("ZHW", "Lamborghini"),
    // BMW group
    ("WBA", "BMW"),
    ("WBS", "BMW"),
    ("WBX", "BMW"),
    ("WBY", "BMW"),
    ("4US", "BMW"),
    ("5UX", "BMW"),
    ("5YM", "BMW"),
    ("WMW", "Mini"),
    ("SCA", "Rolls-Royce"),
    // Mercedes-Benz
    ("WDB", "Mercedes-Benz"),
    ("WDD", "Mercedes-Benz"),
    ("WDC", "Mercedes-Benz"),
    ("WMX", "Mercedes-Benz"),
    ("W1K", "Mercedes-Benz"),
    ("W1N", "Mercedes-Benz"),
    ("4JG", "Mercedes-Benz"),
    ("55S", "Mercedes-Benz"),
    ("WME", "Smart"),
    // Opel / Ford
    ("W0L", "Opel"),
    ("W0V", "Opel"),
    ("WF0", "Ford"),
    ("1FA", "Ford"),
    ("1FT", "Ford"),
    ("1FM", "Ford"),
    ("2FA", "Ford"),
    ("3FA", "Ford"),
    ("NM0", "Ford"),
    // French
    ("VF1", "Renault"),
    ("VF6", "Renault"),
    ("93Y", "Renault"),
    ("UU1", "Dacia"),
    ("VF3", "Peugeot"),
    ("VR3", "Peugeot"),
    ("8AD", "Peugeot"),
    ("VF7", "Citroen"),
    ("VR7", "Citroen"),
    ("VR1", "DS"),
    // Italian
    ("ZFA", "Fiat"),
    ("ZFC", "Fiat"),
    ("SUF", "Fiat"),
    ("ZAR", "Alfa Romeo"),
    ("ZLA", "Lancia"),
    ("ZFF", "Ferrari"),
    ("ZAM", "Maserati"),
    // Scandinavian
    ("YV1", "Volvo"),
    ("YV4", "Volvo"),
    ("7JR", "Volvo"),
    ("YS3", "Saab"),
    ("LPS", "Polestar"),
    // Japanese
    ("JTD", "Toyota"),
    ("JTE", "Toyota"),
    ("JTM", "Toyota"),
    ("JTN", "Toyota"),
    ("SB1", "Toyota"),
    ("VNK", "Toyota"),
    ("NMT", "Toyota"),
    ("4T1", "Toyota"),
    ("5TD", "Toyota"),
    ("2T1", "Toyota"),
    ("JTH", "Lexus"),
    ("JTJ", "Lexus"),
    ("2T2", "Lexus"),
    ("JHM", "Honda"),
    ("JHL", "Honda"),
    ("SHH", "Honda"),
    ("1HG", "Honda"),
    ("2HG", "Honda"),
    ("19X", "Honda"),
    ("19U", "Acura"),
    ("JN1", "Nissan"),
    ("JN8", "Nissan"),
    ("SJN", "Nissan"),
    ("VSK", "Nissan"),
    ("1N4", "Nissan"),
    ("3N1", "Nissan"),
    ("5N1", "Nissan"),
    ("JNK", "Infiniti"),
    ("JM1", "Mazda"),
    ("JMZ", "Mazda"),
    ("JM3", "Mazda"),
    ("JA3", "Mitsubishi"),
    ("JA4", "Mitsubishi"),
    ("JMB", "Mitsubishi"),
    ("JMY", "Mitsubishi"),
    ("XMC", "Mitsubishi"),
    ("JF1", "Subaru"),
    ("JF2", "Subaru"),
    ("4S3", "Subaru"),
    ("4S4", "Subaru"),
    ("JS2", "Suzuki"),
    ("JS3", "Suzuki"),
    ("TSM", "Suzuki"),
    // Korean
    ("KMH", "Hyundai"),
    ("KM8", "Hyundai"),
    ("TMA", "Hyundai"),
    ("NLH", "Hyundai"),
    ("5NP", "Hyundai"),
    ("KMT", "Genesis"),
    ("KNA", "Kia"),
    ("KND", "Kia"),
    ("U5Y", "Kia"),
    ("5XY", "Kia"),
    // American
    ("5YJ", "Tesla"),
    ("7SA", "Tesla"),
    ("LRW", "Tesla"),
    ("XP7", "Tesla"),
    ("1C4", "Jeep"),
    ("1J4", "Jeep"),
    ("1J8", "Jeep"),
    ("ZAC", "Jeep"),
    ("1C3", "Chrysler"),
    ("2C3", "Chrysler"),
    ("1B3", "Dodge"),
    ("2B3", "Dodge"),
    ("1G1", "Chevrolet"),
    ("1GC", "Chevrolet"),
    ("2G1", "Chevrolet"),
    ("KL1", "Chevrolet"),
    ("1G6", "Cadillac"),
    ("1GT", "GMC"),
    ("1G4", "Buick"),
    // British
    ("SAL", "Land Rover"),
    ("SAJ", "Jaguar"),
    ("SCF", "Aston Martin"),
    ("SCC", "Lotus"),
    ("SBM", "McLaren"),
    // Other
    ("XTA", "Lada"),
    ("L6T", "Geely"),
    ("LGX", "BYD"),
    ("LC0", "BYD"),
    ("LSJ", "MG"),
];

static WMI_INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| WMI_TABLE.iter().copied().collect());

/// Manufacturer-specific origin overrides, checked before the regional table.
const COUNTRY_OVERRIDES: [(&str, &str); 4] = [
    ("WVW", "Germany"),
    ("TMB", "Czech Republic"),
    ("VSS", "Spain"),
    ("SUF", "Poland"),
];

const EUROPE: &[&str] = &[
    "Germany",
    "France",
    "Italy",
    "Spain",
    "United Kingdom",
    "Sweden",
    "Czech Republic",
    "Poland",
    "Romania",
    "Netherlands",
    "Belgium",
    "Austria",
    "Slovakia",
    "Hungary",
    "Switzerland",
    "Russia",
    "Turkey",
];

const ASIA: &[&str] = &["Japan", "South Korea", "China", "India", "Taiwan", "Thailand"];

const AMERICA: &[&str] = &["United States", "Canada", "Mexico", "Brazil", "Argentina"];

/// Looks up the manufacturer for a WMI and attaches its origin.
///
/// Returns `None` when the WMI is not in [`WMI_TABLE`]; this is a normal
/// "no data for this VIN" outcome rather than an error.
pub fn resolve_manufacturer(wmi: &str) -> Option<ManufacturerInfo> {
    let name = manufacturer_name(wmi)?;
    let country = country_of_origin(wmi);

    Some(ManufacturerInfo {
        name: name.to_string(),
        country_of_origin: country.to_string(),
        region: region(country),
    })
}

/// Manufacturer name for an exact WMI match.
pub fn manufacturer_name(wmi: &str) -> Option<&'static str> {
    WMI_INDEX.get(wmi).copied()
}

/// Country of origin for a WMI.
///
/// Exact-WMI overrides win; otherwise the first character selects a region
/// per the ISO 3780 allocation, falling back to [`DEFAULT_COUNTRY`].
pub fn country_of_origin(wmi: &str) -> &'static str {
    if let Some(&(_, country)) = COUNTRY_OVERRIDES.iter().find(|(w, _)| *w == wmi) {
        return country;
    }

    match wmi.chars().next() {
        Some('1' | '4' | '5' | '7') => "United States",
        Some('2') => "Canada",
        Some('3') => "Mexico",
        Some('6') => "Australia",
        Some('8') => "Argentina",
        Some('9') => "Brazil",
        Some('J') => "Japan",
        Some('K') => "South Korea",
        Some('L') => "China",
        Some('M') => "India",
        Some('N') => "Turkey",
        Some('S') => "United Kingdom",
        Some('T') => "Czech Republic",
        Some('U') => "Romania",
        Some('V') => "France",
        Some('W') => "Germany",
        Some('X') => "Russia",
        Some('Y') => "Sweden",
        Some('Z') => "Italy",
        _ => DEFAULT_COUNTRY,
    }
}

/// Groups a country into a [`Region`]; informational only.
pub fn region(country: &str) -> Region {
    if EUROPE.contains(&country) {
        Region::Europe
    } else if ASIA.contains(&country) {
        Region::Asia
    } else if AMERICA.contains(&country) {
        Region::America
    } else {
        Region::Other
    }
}
