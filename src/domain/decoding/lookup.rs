//! VIN lookup orchestration.
//!
//! [`VinDecoder`] runs the full pipeline for one VIN:
//!
//! 1. structural validation ([`Vin::parse`])
//! 2. segment split ([`split`])
//! 3. manufacturer resolution; an unknown WMI ends the lookup with `Ok(None)`
//! 4. engine, attribute, model, status and synthetic-field decoding
//!
//! Every stage is pure. The only inputs besides the VIN are the reference
//! year used for model-year disambiguation and vehicle age, and the
//! [`ModelCatalog`] that supplies model names.
//!
//! # Examples
//!
//! ```ignore
//! let decoder = VinDecoder::new(2026);
//! let record = decoder.lookup("WVWZZZ1JZXW000001")?.expect("known WMI");
//! assert_eq!(record.manufacturer, "Volkswagen");
//! ```

use std::fmt;
use std::sync::Arc;

use chrono::{Datelike, Utc};

use crate::domain::decoding::attributes::{
    decode_color, decode_drive, decode_paint_finish, decode_transmission,
};
use crate::domain::decoding::catalog::{GENERIC_MODELS, ModelCatalog, PlaceholderCatalog};
use crate::domain::decoding::engine::decode_engine;
use crate::domain::decoding::manufacturer::resolve_manufacturer;
use crate::domain::decoding::status::derive_status;
use crate::domain::decoding::synthesis::{
    mileage, model_index, registration_plate, seats_count,
};
use crate::domain::entities::VehicleRecord;
use crate::domain::segments::{decode_model_year, split, vehicle_age};
use crate::domain::vin::{InvalidVinFormat, Vin};

const TRANSMISSION_INDEX: usize = 6;
const DRIVE_INDEX: usize = 7;
const COLOR_INDEX: usize = 11;
const PAINT_FINISH_INDEX: usize = 12;

/// Stateless VIN decoder bound to a reference year and a model catalog.
#[derive(Clone)]
pub struct VinDecoder {
    reference_year: i32,
    catalog: Arc<dyn ModelCatalog>,
}

impl VinDecoder {
    /// Creates a decoder with a fixed reference year and the placeholder catalog.
    pub fn new(reference_year: i32) -> Self {
        Self {
            reference_year,
            catalog: Arc::new(PlaceholderCatalog),
        }
    }

    /// Creates a decoder whose reference year is the current UTC year.
    pub fn current() -> Self {
        Self::new(Utc::now().year())
    }

    /// Replaces the model catalog.
    pub fn with_catalog(mut self, catalog: Arc<dyn ModelCatalog>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Returns a copy of this decoder using another reference year.
    pub fn with_reference_year(&self, reference_year: i32) -> Self {
        Self {
            reference_year,
            catalog: Arc::clone(&self.catalog),
        }
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// Decodes a raw VIN string.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidVinFormat`] when the input is not a structurally valid
    /// VIN. An unknown manufacturer is reported as `Ok(None)`.
    pub fn lookup(&self, raw: &str) -> Result<Option<VehicleRecord>, InvalidVinFormat> {
        let vin = Vin::parse(raw)?;
        Ok(self.decode(&vin))
    }

    /// Decodes an already validated VIN.
    pub fn decode(&self, vin: &Vin) -> Option<VehicleRecord> {
        let segments = split(vin);
        let manufacturer = resolve_manufacturer(segments.wmi)?;

        let production_year = decode_model_year(segments.model_year_char, self.reference_year);
        let age = vehicle_age(self.reference_year, production_year);

        let engine = decode_engine(&manufacturer.name, segments.engine_code());

        let models = match self.catalog.models(&manufacturer.name) {
            [] => GENERIC_MODELS,
            models => models,
        };
        let model = &models[model_index(vin, models.len())];

        let status = derive_status(vin, &manufacturer.country_of_origin, age);
        let bytes = vin.as_bytes();

        Some(VehicleRecord {
            vin: vin.to_string(),
            model: model.name.to_string(),
            generation: model.generation_for(production_year).map(str::to_string),
            version: engine.version_label,
            production_year,
            fuel_type: engine.fuel_type,
            displacement_cc: engine.displacement_cc,
            power_hp: engine.power_hp,
            transmission: decode_transmission(bytes[TRANSMISSION_INDEX] as char),
            drive_type: decode_drive(bytes[DRIVE_INDEX] as char, &manufacturer.name),
            color: decode_color(bytes[COLOR_INDEX] as char).to_string(),
            paint_finish: decode_paint_finish(bytes[PAINT_FINISH_INDEX] as char).to_string(),
            mileage_km: mileage(vin, age),
            seats: seats_count(&manufacturer.name, model.name),
            condition: status.condition,
            accident_status: status.accident_status,
            damage_status: status.damage_status,
            imported: status.imported,
            registered_in_poland: status.registered_in_poland,
            first_owner: status.first_owner,
            disabled_adapted: status.disabled_adapted,
            registration_plate: registration_plate(vin),
            manufacturer: manufacturer.name,
            country_of_origin: manufacturer.country_of_origin,
            region: manufacturer.region,
        })
    }
}

impl Default for VinDecoder {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Debug for VinDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VinDecoder")
            .field("reference_year", &self.reference_year)
            .finish_non_exhaustive()
    }
}

/// Decodes a VIN using the current UTC year and the placeholder catalog.
///
/// # Errors
///
/// See [`VinDecoder::lookup`].
pub fn lookup(raw: &str) -> Result<Option<VehicleRecord>, InvalidVinFormat> {
    VinDecoder::current().lookup(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decoding::catalog::CatalogModel;
    use crate::domain::entities::{
        AccidentStatus, Condition, DamageStatus, DriveType, FuelType, Region, Transmission,
    };

    const REFERENCE_YEAR: i32 = 2026;

    fn decoder() -> VinDecoder {
        VinDecoder::new(REFERENCE_YEAR)
    }

    fn decode(raw: &str) -> VehicleRecord {
        decoder()
            .lookup(raw)
            .expect("valid VIN")
            .expect("known manufacturer")
    }

    /// Base VIN with the model-year character replaced.
    fn with_year(year_char: char) -> String {
        let mut raw: Vec<char> = "WVWZZZ1JZXW000001".chars().collect();
        raw[9] = year_char;
        raw.into_iter().collect()
    }

    #[test]
    fn test_known_volkswagen_vin() {
        let record = decode("WVWZZZ1JZXW000001");

        assert_eq!(record.vin, "WVWZZZ1JZXW000001");
        assert_eq!(record.manufacturer, "Volkswagen");
        assert_eq!(record.country_of_origin, "Germany");
        assert_eq!(record.region, Region::Europe);
        assert_eq!(record.production_year, 1999);

        // engine code "ZZ" is not tabulated
        assert_eq!(record.version, "2.0");
        assert_eq!(record.fuel_type, FuelType::Petrol);
        assert_eq!(record.displacement_cc, 2000);
        assert_eq!(record.power_hp, 150);

        assert_eq!(record.transmission, Transmission::Manual);
        assert_eq!(record.drive_type, DriveType::FrontWheel);
        assert_eq!(record.color, "White");
        assert_eq!(record.paint_finish, "Standard");
    }

    #[test]
    fn test_known_volkswagen_vin_synthetic_fields() {
        let record = decode("WVWZZZ1JZXW000001");

        assert_eq!(record.model, "Multivan");
        assert_eq!(record.generation, None);
        assert_eq!(record.seats, 7);
        assert_eq!(record.mileage_km, 222_026);
        assert_eq!(record.registration_plate, "LDQQQQR");

        assert_eq!(record.condition, Condition::Used);
        assert_eq!(record.accident_status, AccidentStatus::AccidentFree);
        assert_eq!(record.damage_status, DamageStatus::NoDamage);
        assert!(record.imported);
        assert!(record.registered_in_poland);
        assert!(!record.first_owner);
        assert!(!record.disabled_adapted);
    }

    #[test]
    fn test_short_vin_is_a_format_error() {
        assert_eq!(decoder().lookup("SHORT123"), Err(InvalidVinFormat::Length(8)));
    }

    #[test]
    fn test_unknown_wmi_is_not_found() {
        assert_eq!(decoder().lookup("ZZZ1234567890ABCD"), Ok(None));
    }

    #[test]
    fn test_lowercase_is_rejected() {
        assert!(matches!(
            decoder().lookup("wvwzzz1jzxw000001"),
            Err(InvalidVinFormat::Character { position: 0, .. })
        ));
    }

    #[test]
    fn test_lookup_is_deterministic() {
        for raw in ["WVWZZZ1JZXW000001", "WBA3A5C51CF256985", "5YJ3E1EA7KF317000"] {
            assert_eq!(decoder().lookup(raw), decoder().lookup(raw), "{raw}");
        }
    }

    #[test]
    fn test_one_year_old_vehicle_is_new() {
        // 'S' = 2025
        let record = decode(&with_year('S'));
        assert_eq!(record.production_year, 2025);
        assert_eq!(record.condition, Condition::New);
    }

    #[test]
    fn test_older_vehicles_are_never_new() {
        // 'R' = 2024 (age 2), 'P' = 2023 (age 3)
        for c in ['R', 'P'] {
            assert_ne!(decode(&with_year(c)).condition, Condition::New, "{c}");
        }
    }

    #[test]
    fn test_four_year_old_vehicle_is_never_demonstration() {
        // 'N' = 2022
        let record = decode(&with_year('N'));
        assert_eq!(record.condition, Condition::Used);
    }

    #[test]
    fn test_future_model_year_wraps_back_one_cycle() {
        // 'V' = 2027 is after the reference year
        assert_eq!(decode(&with_year('V')).production_year, 1997);
        assert_eq!(decode(&with_year('T')).production_year, 2026);
    }

    #[test]
    fn test_earliest_reference_year_never_reads_as_new() {
        // 'Y' = 2030, two cycles ahead of 1980
        let record = VinDecoder::new(1980)
            .lookup(&with_year('Y'))
            .unwrap()
            .unwrap();

        assert_eq!(record.production_year, 1970);
        assert_eq!(record.condition, Condition::Used);
    }

    #[test]
    fn test_reference_year_changes_age_dependent_fields() {
        let raw = with_year('L'); // 2020
        let early = VinDecoder::new(2020).lookup(&raw).unwrap().unwrap();
        let late = decoder().lookup(&raw).unwrap().unwrap();

        assert_eq!(early.production_year, late.production_year);
        assert_eq!(early.condition, Condition::New);
        assert!(late.mileage_km > early.mileage_km);
    }

    #[test]
    fn test_with_reference_year_keeps_catalog() {
        let base = decoder();
        let shifted = base.with_reference_year(2030);
        assert_eq!(shifted.reference_year(), 2030);
        assert_eq!(base.reference_year(), REFERENCE_YEAR);
        assert!(Arc::ptr_eq(&base.catalog, &shifted.catalog));
    }

    struct SingleModel;

    impl ModelCatalog for SingleModel {
        fn models(&self, manufacturer: &str) -> &[CatalogModel] {
            const ONLY: &[CatalogModel] = &[CatalogModel {
                name: "Test Roadster",
                generations: &[(1990, "Mk1")],
            }];
            if manufacturer == "Volkswagen" { ONLY } else { &[] }
        }
    }

    #[test]
    fn test_custom_catalog() {
        let decoder = decoder().with_catalog(Arc::new(SingleModel));

        let vw = decoder.lookup("WVWZZZ1JZXW000001").unwrap().unwrap();
        assert_eq!(vw.model, "Test Roadster");
        assert_eq!(vw.generation.as_deref(), Some("Mk1"));
        assert_eq!(vw.seats, 2);

        // empty catalog entry falls back to the generic list
        let bmw = decoder.lookup("WBA3A5C51CF256985").unwrap().unwrap();
        assert!(GENERIC_MODELS.iter().any(|m| m.name == bmw.model));
        assert_eq!(bmw.generation, None);
    }

    #[test]
    fn test_record_matches_status_block() {
        let record = decode("WBA3A5C51CF256985");
        let vin = Vin::parse("WBA3A5C51CF256985").unwrap();
        let age = vehicle_age(REFERENCE_YEAR, record.production_year);
        assert_eq!(record.status(), derive_status(&vin, &record.country_of_origin, age));
    }
}
