use vin_decoder::domain::decoding::VinDecoder;
use vin_decoder::domain::decoding::manufacturer::WMI_TABLE;
use vin_decoder::domain::entities::{AccidentStatus, Condition, DamageStatus};
use vin_decoder::domain::segments::split;
use vin_decoder::{InvalidVinFormat, Vin, format_for_display, validate_structure};

const ALPHABET: &[u8] = b"ABCDEFGHJKLMNPRSTUVWXYZ0123456789";

/// Deterministic pseudo-random VIN bodies over the legal alphabet.
fn sample_vins(wmi: &str, count: usize) -> Vec<String> {
    (0..count)
        .map(|seed| {
            let body: String = (0..14)
                .map(|i| ALPHABET[(seed * 7 + i * 13 + seed * i) % ALPHABET.len()] as char)
                .collect();
            format!("{wmi}{body}")
        })
        .collect()
}

#[test]
fn test_every_tabulated_wmi_decodes() {
    let decoder = VinDecoder::new(2026);

    for &(wmi, name) in WMI_TABLE {
        for raw in sample_vins(wmi, 3) {
            let record = decoder
                .lookup(&raw)
                .unwrap_or_else(|e| panic!("{raw}: {e}"))
                .unwrap_or_else(|| panic!("{raw} should be found"));
            assert_eq!(record.manufacturer, name);
            assert_eq!(record.vin, raw);
        }
    }
}

#[test]
fn test_decoding_is_deterministic() {
    let decoder = VinDecoder::new(2026);

    for raw in sample_vins("WVW", 50) {
        assert_eq!(decoder.lookup(&raw), decoder.lookup(&raw));
        assert_eq!(
            decoder.lookup(&raw),
            VinDecoder::new(2026).lookup(&raw),
            "{raw}"
        );
    }
}

#[test]
fn test_split_is_total_for_valid_vins() {
    for raw in sample_vins("TMB", 40) {
        let vin = Vin::parse(&raw).unwrap();
        let seg = split(&vin);
        assert_eq!(seg.wmi.len() + seg.vds.len() + seg.vis.len(), 17);
        assert_eq!(seg.engine_code().len(), 2);
    }
}

#[test]
fn test_format_validation_boundary() {
    assert!(validate_structure("WVWZZZ1JZXW000001"));
    assert!(!validate_structure("WVWZZZ1JZXW00000"));
    assert!(!validate_structure("WVWZZZ1JZXW0000011"));
    assert!(!validate_structure(""));

    for banned in ['I', 'O', 'Q', 'a', '-', ' '] {
        let raw = format!("WVWZZZ1JZXW00000{banned}");
        assert!(!validate_structure(&raw), "{raw:?}");
        assert!(matches!(
            Vin::parse(&raw),
            Err(InvalidVinFormat::Character { position: 16, .. })
        ));
    }
}

#[test]
fn test_display_format() {
    assert_eq!(format_for_display("WVWBZZZ1JW123456X"), "WVW-BZZZ1J-W123456X");
    assert_eq!(format_for_display("ABC"), "ABC");
    assert_eq!(format_for_display("ABCD"), "ABC-D");
}

#[test]
fn test_condition_tracks_age() {
    let decoder = VinDecoder::new(2026);

    for raw in sample_vins("WBA", 60) {
        let record = decoder.lookup(&raw).unwrap().unwrap();
        let age = 2026 - record.production_year;

        match record.condition {
            Condition::New => assert!(age <= 1, "{raw}: new at age {age}"),
            Condition::Demonstration => assert!((2..=3).contains(&age), "{raw}: demo at {age}"),
            Condition::Used => assert!(age >= 2, "{raw}: used at age {age}"),
        }
    }
}

#[test]
fn test_damage_consistent_with_accident_status() {
    let decoder = VinDecoder::new(2026);
    let accident_free_outcomes = [
        DamageStatus::NoDamage,
        DamageStatus::StoneChips,
        DamageStatus::MinorScratches,
        DamageStatus::SmallDents,
    ];

    for raw in sample_vins("5YJ", 60) {
        let record = decoder.lookup(&raw).unwrap().unwrap();
        assert_eq!(
            accident_free_outcomes.contains(&record.damage_status),
            record.accident_status == AccidentStatus::AccidentFree,
            "{raw}"
        );
    }
}

#[test]
fn test_records_serialize_round_trip() {
    let record = VinDecoder::new(2026)
        .lookup("WVWZZZ1JZXW000001")
        .unwrap()
        .unwrap();

    let json = serde_json::to_string(&record).unwrap();
    let back: vin_decoder::VehicleRecord = serde_json::from_str(&json).unwrap();

    assert_eq!(back, record);
}
