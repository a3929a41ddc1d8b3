//! Decoded vehicle data structures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse geographic grouping of a country of origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Europe,
    Asia,
    America,
    Other,
}

/// Manufacturer resolved from a WMI prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManufacturerInfo {
    pub name: String,
    pub country_of_origin: String,
    pub region: Region,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    Petrol,
    Diesel,
    Hybrid,
    Electric,
}

/// Engine variant decoded from the manufacturer and the 2-character engine code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSpec {
    pub version_label: String,
    pub fuel_type: FuelType,
    pub displacement_cc: u32,
    pub power_hp: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transmission {
    Automatic,
    AutomaticDsg,
    Manual,
    SemiAutomatic,
    Cvt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriveType {
    FrontWheel,
    RearWheel,
    FourByFour,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    New,
    Demonstration,
    Used,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccidentStatus {
    AccidentFree,
    PostAccident,
}

/// Damage category shown alongside the accident status.
///
/// The first four variants are outcomes for accident-free vehicles, the rest
/// for post-accident vehicles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageStatus {
    NoDamage,
    StoneChips,
    MinorScratches,
    SmallDents,
    NoVisibleDamage,
    RepairedDamage,
    MinorBodyworkDamage,
    MajorBodyworkDamage,
    MechanicalDamage,
}

/// Provenance and condition heuristics for a decoded vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleStatus {
    pub condition: Condition,
    pub accident_status: AccidentStatus,
    pub damage_status: DamageStatus,
    pub imported: bool,
    pub registered_in_poland: bool,
    pub first_owner: bool,
    /// Never derivable from a VIN; always `false`.
    pub disabled_adapted: bool,
}

/// Complete result of decoding one VIN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub vin: String,
    pub manufacturer: String,
    pub country_of_origin: String,
    pub region: Region,
    pub model: String,
    pub generation: Option<String>,
    pub version: String,
    pub production_year: i32,
    pub fuel_type: FuelType,
    pub displacement_cc: u32,
    pub power_hp: u32,
    pub transmission: Transmission,
    pub drive_type: DriveType,
    pub color: String,
    pub paint_finish: String,
    pub mileage_km: u32,
    pub seats: u8,
    pub condition: Condition,
    pub accident_status: AccidentStatus,
    pub damage_status: DamageStatus,
    pub imported: bool,
    pub registered_in_poland: bool,
    pub first_owner: bool,
    pub disabled_adapted: bool,
    pub registration_plate: String,
}

impl VehicleRecord {
    /// Status fields regrouped into a [`VehicleStatus`].
    pub fn status(&self) -> VehicleStatus {
        VehicleStatus {
            condition: self.condition,
            accident_status: self.accident_status,
            damage_status: self.damage_status,
            imported: self.imported,
            registered_in_poland: self.registered_in_poland,
            first_owner: self.first_owner,
            disabled_adapted: self.disabled_adapted,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Region::Europe => "Europe",
            Region::Asia => "Asia",
            Region::America => "America",
            Region::Other => "Other",
        })
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FuelType::Petrol => "Petrol",
            FuelType::Diesel => "Diesel",
            FuelType::Hybrid => "Hybrid",
            FuelType::Electric => "Electric",
        })
    }
}

impl fmt::Display for Transmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Transmission::Automatic => "Automatic",
            Transmission::AutomaticDsg => "Automatic (DSG)",
            Transmission::Manual => "Manual",
            Transmission::SemiAutomatic => "Semi-automatic",
            Transmission::Cvt => "CVT",
        })
    }
}

impl fmt::Display for DriveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DriveType::FrontWheel => "Front-wheel drive",
            DriveType::RearWheel => "Rear-wheel drive",
            DriveType::FourByFour => "4x4",
        })
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Condition::New => "New",
            Condition::Demonstration => "Demonstration",
            Condition::Used => "Used",
        })
    }
}

impl fmt::Display for AccidentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AccidentStatus::AccidentFree => "Accident-free",
            AccidentStatus::PostAccident => "Post-accident",
        })
    }
}

impl fmt::Display for DamageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DamageStatus::NoDamage => "No damage",
            DamageStatus::StoneChips => "Stone chips",
            DamageStatus::MinorScratches => "Minor scratches",
            DamageStatus::SmallDents => "Small dents",
            DamageStatus::NoVisibleDamage => "No visible damage",
            DamageStatus::RepairedDamage => "Repaired damage",
            DamageStatus::MinorBodyworkDamage => "Minor bodywork damage",
            DamageStatus::MajorBodyworkDamage => "Major bodywork damage",
            DamageStatus::MechanicalDamage => "Mechanical damage",
        })
    }
}
