//! Engine variant lookup keyed by manufacturer and 2-character engine code.

use crate::domain::entities::FuelType::{Diesel, Electric, Hybrid, Petrol};
use crate::domain::entities::{EngineSpec, FuelType};

/// One engine variant in a manufacturer's table.
#[derive(Debug, Clone, Copy)]
pub struct EngineRow {
    pub code: &'static str,
    pub label: &'static str,
    pub fuel: FuelType,
    pub displacement_cc: u32,
    pub power_hp: u32,
}

const fn row(
    code: &'static str,
    label: &'static str,
    fuel: FuelType,
    displacement_cc: u32,
    power_hp: u32,
) -> EngineRow {
    EngineRow {
        code,
        label,
        fuel,
        displacement_cc,
        power_hp,
    }
}

/// Engine returned for unmodelled manufacturers and unknown codes.
pub const DEFAULT_ENGINE: EngineRow = row("", "2.0", Petrol, 2000, 150);

const VOLKSWAGEN: [EngineRow; 8] = [
    row("AA", "1.0 TSI", Petrol, 999, 110),
    row("AB", "1.5 TSI", Petrol, 1498, 150),
    row("AC", "2.0 TSI", Petrol, 1984, 190),
    row("AD", "1.6 TDI", Diesel, 1598, 115),
    row("AE", "2.0 TDI", Diesel, 1968, 150),
    row("AF", "2.0 TDI 4Motion", Diesel, 1968, 200),
    row("AG", "1.4 eHybrid", Hybrid, 1395, 204),
    row("AH", "e-Golf", Electric, 0, 136),
];

const AUDI: [EngineRow; 8] = [
    row("AA", "30 TFSI", Petrol, 999, 110),
    row("AB", "35 TFSI", Petrol, 1498, 150),
    row("AC", "45 TFSI quattro", Petrol, 1984, 265),
    row("AD", "30 TDI", Diesel, 1968, 136),
    row("AE", "40 TDI quattro", Diesel, 1968, 204),
    row("AF", "50 TDI quattro", Diesel, 2967, 286),
    row("AG", "55 TFSI e quattro", Hybrid, 2995, 367),
    row("AH", "e-tron 55 quattro", Electric, 0, 408),
];

const BMW: [EngineRow; 8] = [
    row("AA", "118i", Petrol, 1499, 136),
    row("AB", "320i", Petrol, 1998, 184),
    row("AC", "330i", Petrol, 1998, 258),
    row("AD", "318d", Diesel, 1995, 150),
    row("AE", "320d", Diesel, 1995, 190),
    row("AF", "530d xDrive", Diesel, 2993, 286),
    row("AG", "330e", Hybrid, 1998, 292),
    row("AH", "i4 eDrive40", Electric, 0, 340),
];

const MERCEDES_BENZ: [EngineRow; 8] = [
    row("AA", "A 180", Petrol, 1332, 136),
    row("AB", "C 200", Petrol, 1496, 204),
    row("AC", "E 300", Petrol, 1991, 258),
    row("AD", "C 220 d", Diesel, 1993, 200),
    row("AE", "E 220 d", Diesel, 1993, 194),
    row("AF", "GLE 350 d 4MATIC", Diesel, 2925, 272),
    row("AG", "C 300 e", Hybrid, 1999, 313),
    row("AH", "EQC 400 4MATIC", Electric, 0, 408),
];

const SKODA: [EngineRow; 8] = [
    row("AA", "1.0 TSI", Petrol, 999, 110),
    row("AB", "1.5 TSI", Petrol, 1498, 150),
    row("AC", "2.0 TSI RS", Petrol, 1984, 245),
    row("AD", "1.6 TDI", Diesel, 1598, 115),
    row("AE", "2.0 TDI", Diesel, 1968, 150),
    row("AF", "2.0 TDI 4x4", Diesel, 1968, 200),
    row("AG", "1.4 TSI iV", Hybrid, 1395, 204),
    row("AH", "Enyaq iV 80", Electric, 0, 204),
];

const TOYOTA: [EngineRow; 8] = [
    row("AA", "1.0 VVT-i", Petrol, 998, 72),
    row("AB", "1.5 Dual VVT-i", Petrol, 1490, 125),
    row("AC", "2.0 Dynamic Force", Petrol, 1987, 175),
    row("AD", "2.0 D-4D", Diesel, 1995, 143),
    row("AE", "1.8 Hybrid", Hybrid, 1798, 122),
    row("AF", "2.0 Hybrid", Hybrid, 1987, 184),
    row("AG", "2.5 Hybrid AWD-i", Hybrid, 2487, 222),
    row("AH", "bZ4X", Electric, 0, 218),
];

const FORD: [EngineRow; 8] = [
    row("AA", "1.0 EcoBoost", Petrol, 999, 125),
    row("AB", "1.5 EcoBoost", Petrol, 1497, 150),
    row("AC", "2.3 EcoBoost", Petrol, 2261, 280),
    row("AD", "1.5 EcoBlue", Diesel, 1499, 120),
    row("AE", "2.0 EcoBlue", Diesel, 1995, 150),
    row("AF", "2.0 EcoBlue AWD", Diesel, 1995, 190),
    row("AG", "2.5 Duratec Hybrid", Hybrid, 2488, 190),
    row("AH", "Mustang Mach-E", Electric, 0, 269),
];

const OPEL: [EngineRow; 8] = [
    row("AA", "1.2", Petrol, 1199, 75),
    row("AB", "1.2 Turbo", Petrol, 1199, 130),
    row("AC", "1.4 Turbo", Petrol, 1399, 150),
    row("AD", "1.5 CDTI", Diesel, 1496, 122),
    row("AE", "1.6 CDTI", Diesel, 1598, 136),
    row("AF", "2.0 CDTI", Diesel, 1956, 170),
    row("AG", "1.6 Hybrid", Hybrid, 1598, 225),
    row("AH", "Corsa-e", Electric, 0, 136),
];

const RENAULT: [EngineRow; 8] = [
    row("AA", "1.0 TCe", Petrol, 999, 90),
    row("AB", "1.3 TCe", Petrol, 1332, 140),
    row("AC", "1.8 TCe", Petrol, 1798, 300),
    row("AD", "1.5 dCi", Diesel, 1461, 115),
    row("AE", "1.7 Blue dCi", Diesel, 1749, 150),
    row("AF", "2.0 Blue dCi", Diesel, 1997, 190),
    row("AG", "1.6 E-Tech Hybrid", Hybrid, 1598, 145),
    row("AH", "Zoe R135", Electric, 0, 135),
];

const PEUGEOT: [EngineRow; 8] = [
    row("AA", "1.2 PureTech", Petrol, 1199, 100),
    row("AB", "1.2 PureTech", Petrol, 1199, 130),
    row("AC", "1.6 PureTech", Petrol, 1598, 180),
    row("AD", "1.5 BlueHDi", Diesel, 1499, 130),
    row("AE", "2.0 BlueHDi", Diesel, 1997, 150),
    row("AF", "2.0 BlueHDi", Diesel, 1997, 180),
    row("AG", "1.6 Hybrid4", Hybrid, 1598, 300),
    row("AH", "e-208", Electric, 0, 136),
];

const HYUNDAI: [EngineRow; 8] = [
    row("AA", "1.0 T-GDI", Petrol, 998, 120),
    row("AB", "1.6 T-GDI", Petrol, 1591, 177),
    row("AC", "2.0 T-GDI N", Petrol, 1998, 280),
    row("AD", "1.6 CRDi", Diesel, 1598, 136),
    row("AE", "2.0 CRDi", Diesel, 1995, 185),
    row("AF", "2.2 CRDi 4WD", Diesel, 2199, 202),
    row("AG", "1.6 T-GDI Hybrid", Hybrid, 1598, 230),
    row("AH", "Ioniq 5", Electric, 0, 229),
];

const KIA: [EngineRow; 8] = [
    row("AA", "1.0 T-GDI", Petrol, 998, 120),
    row("AB", "1.5 T-GDI", Petrol, 1482, 160),
    row("AC", "1.6 T-GDI GT", Petrol, 1591, 204),
    row("AD", "1.6 CRDi", Diesel, 1598, 136),
    row("AE", "2.0 CRDi", Diesel, 1995, 185),
    row("AF", "2.2 CRDi AWD", Diesel, 2199, 200),
    row("AG", "1.6 GDI Hybrid", Hybrid, 1580, 141),
    row("AH", "EV6", Electric, 0, 229),
];

const VOLVO: [EngineRow; 8] = [
    row("AA", "T2", Petrol, 1477, 129),
    row("AB", "T4", Petrol, 1969, 190),
    row("AC", "B5", Petrol, 1969, 250),
    row("AD", "D3", Diesel, 1969, 150),
    row("AE", "D4", Diesel, 1969, 190),
    row("AF", "D5 AWD", Diesel, 1969, 235),
    row("AG", "T8 Recharge AWD", Hybrid, 1969, 455),
    row("AH", "XC40 Recharge", Electric, 0, 408),
];

const TESLA: [EngineRow; 8] = [
    row("AA", "Standard Range", Electric, 0, 283),
    row("AB", "Standard Range Plus", Electric, 0, 325),
    row("AC", "Long Range", Electric, 0, 351),
    row("AD", "Long Range AWD", Electric, 0, 440),
    row("AE", "Performance", Electric, 0, 513),
    row("AF", "Plaid", Electric, 0, 1020),
    row("AG", "Mid Range", Electric, 0, 300),
    row("AH", "Performance AWD", Electric, 0, 462),
];

/// Engine rows for a modelled manufacturer.
pub fn engine_rows(manufacturer: &str) -> Option<&'static [EngineRow]> {
    let rows: &'static [EngineRow] = match manufacturer {
        "Volkswagen" => &VOLKSWAGEN,
        "Audi" => &AUDI,
        "BMW" => &BMW,
        "Mercedes-Benz" => &MERCEDES_BENZ,
        "Skoda" => &SKODA,
        "Toyota" => &TOYOTA,
        "Ford" => &FORD,
        "Opel" => &OPEL,
        "Renault" => &RENAULT,
        "Peugeot" => &PEUGEOT,
        "Hyundai" => &HYUNDAI,
        "Kia" => &KIA,
        "Volvo" => &VOLVO,
        "Tesla" => &TESLA,
        _ => return None,
    };
    Some(rows)
}

/// Decodes the engine for a manufacturer and 2-character code.
///
/// Total over all inputs: anything not in the tables yields
/// [`DEFAULT_ENGINE`].
pub fn decode_engine(manufacturer: &str, engine_code: &str) -> EngineSpec {
    let row = engine_rows(manufacturer)
        .and_then(|rows| rows.iter().find(|r| r.code == engine_code))
        .unwrap_or(&DEFAULT_ENGINE);

    EngineSpec {
        version_label: row.label.to_string(),
        fuel_type: row.fuel,
        displacement_cc: row.displacement_cc,
        power_hp: row.power_hp,
    }
}
