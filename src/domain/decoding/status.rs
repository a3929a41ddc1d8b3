//! Condition and provenance heuristics derived from VIN character codes.
//!
//! Each rule reads one fixed VIN position and compares its character code,
//! reduced modulo a small constant, against a threshold that depends on the
//! vehicle's age band. The moduli and thresholds are part of the observable
//! output and must not change.

use crate::domain::decoding::synthesis::{POLISH_CITY_CODES, registration_plate};
use crate::domain::entities::{AccidentStatus, Condition, DamageStatus, VehicleStatus};
use crate::domain::vin::Vin;

pub const POLAND: &str = "Poland";

const POST_ACCIDENT_DAMAGE: [DamageStatus; 5] = [
    DamageStatus::NoVisibleDamage,
    DamageStatus::RepairedDamage,
    DamageStatus::MinorBodyworkDamage,
    DamageStatus::MajorBodyworkDamage,
    DamageStatus::MechanicalDamage,
];

const MINOR_DAMAGE: [DamageStatus; 3] = [
    DamageStatus::StoneChips,
    DamageStatus::MinorScratches,
    DamageStatus::SmallDents,
];

/// Derives the full status block for a vehicle of the given age.
///
/// The registration check uses the plate synthesized from the same VIN.
pub fn derive_status(vin: &Vin, country_of_origin: &str, age: u32) -> VehicleStatus {
    let plate = registration_plate(vin);
    let accident_status = accident_status(vin, age);

    VehicleStatus {
        condition: condition(vin, age),
        accident_status,
        damage_status: damage_status(vin, accident_status),
        imported: imported(vin, country_of_origin),
        registered_in_poland: registered_in_poland(vin, &plate),
        first_owner: first_owner(vin, age),
        disabled_adapted: false,
    }
}

/// Vehicles built in Poland are never imported; others are ~70% imported.
pub fn imported(vin: &Vin, country_of_origin: &str) -> bool {
    if country_of_origin == POLAND {
        return false;
    }
    vin.code_at(8) % 10 < 7
}

/// A plate carrying a Polish city prefix is registered in Poland; otherwise ~80% are.
pub fn registered_in_poland(vin: &Vin, plate: &str) -> bool {
    if POLISH_CITY_CODES.iter().any(|code| plate.starts_with(code)) {
        return true;
    }
    vin.code_at(11) % 10 < 8
}

pub fn first_owner(vin: &Vin, age: u32) -> bool {
    let threshold = match age {
        0..=2 => 8,
        3..=5 => 5,
        _ => 2,
    };
    vin.code_at(15) % 10 < threshold
}

/// New up to one year; Demonstration or Used up to three; Used afterwards.
pub fn condition(vin: &Vin, age: u32) -> Condition {
    match age {
        0..=1 => Condition::New,
        2..=3 if vin.code_sum(0..17) % 5 == 0 => Condition::Demonstration,
        _ => Condition::Used,
    }
}

pub fn accident_status(vin: &Vin, age: u32) -> AccidentStatus {
    let divisor = match age {
        0..=2 => 20,
        3..=5 => 7,
        _ => 4,
    };

    if vin.code_at(16) % divisor == 0 {
        AccidentStatus::PostAccident
    } else {
        AccidentStatus::AccidentFree
    }
}

/// Damage category conditional on the accident status.
///
/// Post-accident vehicles pick one of five categories from index 14.
/// Accident-free vehicles read index 13: 90% no damage, otherwise one of
/// three minor categories.
pub fn damage_status(vin: &Vin, accident_status: AccidentStatus) -> DamageStatus {
    match accident_status {
        AccidentStatus::PostAccident => POST_ACCIDENT_DAMAGE[(vin.code_at(14) % 5) as usize],
        AccidentStatus::AccidentFree => {
            let code = vin.code_at(13);
            if code % 10 < 9 {
                DamageStatus::NoDamage
            } else {
                MINOR_DAMAGE[(code % 3) as usize]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a VIN from a base by overwriting single positions.
    fn vin_with(base: &str, overrides: &[(usize, char)]) -> Vin {
        let mut chars: Vec<char> = base.chars().collect();
        for &(i, c) in overrides {
            chars[i] = c;
        }
        Vin::parse(&chars.into_iter().collect::<String>()).unwrap()
    }

    const BASE: &str = "WVWZZZ1JZXW000001";

    #[test]
    fn test_imported_never_for_poland() {
        for c in ['0', '1', 'A', 'Z'] {
            let v = vin_with(BASE, &[(8, c)]);
            assert!(!imported(&v, POLAND));
        }
    }

    #[test]
    fn test_imported_threshold() {
        // '6' = 54 -> 4 (< 7), '9' = 57 -> 7 (not < 7)
        assert!(imported(&vin_with(BASE, &[(8, '6')]), "Germany"));
        assert!(!imported(&vin_with(BASE, &[(8, '9')]), "Germany"));
        // 'F' = 70 -> 0, 'H' = 72 -> 2, 'Y' = 89 -> 9
        assert!(imported(&vin_with(BASE, &[(8, 'F')]), "Japan"));
        assert!(imported(&vin_with(BASE, &[(8, 'H')]), "Japan"));
        assert!(!imported(&vin_with(BASE, &[(8, 'Y')]), "Japan"));
    }

    #[test]
    fn test_registered_by_plate_prefix() {
        // 'Y' = 89 -> 9 fails the fallback, so only the prefix can make this true
        let v = vin_with(BASE, &[(11, 'Y')]);
        assert!(registered_in_poland(&v, "WA12345"));
        assert!(registered_in_poland(&v, "GA00000"));
    }

    #[test]
    fn test_registered_fallback_threshold() {
        // 'Y' = 89 -> 9, 'X' = 88 -> 8, 'W' = 87 -> 7
        assert!(!registered_in_poland(&vin_with(BASE, &[(11, 'Y')]), "DE-ABC1"));
        assert!(!registered_in_poland(&vin_with(BASE, &[(11, 'X')]), "DE-ABC1"));
        assert!(registered_in_poland(&vin_with(BASE, &[(11, 'W')]), "DE-ABC1"));
    }

    #[test]
    fn test_derived_status_uses_synthesized_plate() {
        let v = vin_with(BASE, &[(11, 'Y')]);
        assert!(derive_status(&v, "Germany", 5).registered_in_poland);
    }

    #[test]
    fn test_first_owner_age_bands() {
        // 'W' = 87 -> 7, '4' = 52 -> 2
        let seven = vin_with(BASE, &[(15, 'W')]);
        assert!(first_owner(&seven, 2));
        assert!(!first_owner(&seven, 3));
        assert!(!first_owner(&seven, 6));

        let two = vin_with(BASE, &[(15, '4')]);
        assert!(first_owner(&two, 0));
        assert!(first_owner(&two, 5));
        assert!(!first_owner(&two, 6));

        let eight = vin_with(BASE, &[(15, '0')]); // 48 -> 8
        assert!(!first_owner(&eight, 1));

        let one = vin_with(BASE, &[(15, 'G')]); // 71 -> 1
        assert!(first_owner(&one, 40));
    }

    #[test]
    fn test_condition_new_up_to_one_year() {
        let v = Vin::parse(BASE).unwrap();
        assert_eq!(condition(&v, 0), Condition::New);
        assert_eq!(condition(&v, 1), Condition::New);
    }

    #[test]
    fn test_condition_demonstration_band() {
        // Pick the last character so the code sum is a multiple of 5.
        let base_sum: u32 = BASE[..16].bytes().map(u32::from).sum();
        let last = "ABCDEFGHJKLMNPRSTUVWXYZ0123456789"
            .chars()
            .find(|&c| (base_sum + c as u32) % 5 == 0)
            .unwrap();
        let demo = vin_with(BASE, &[(16, last)]);

        assert_eq!(condition(&demo, 1), Condition::New);
        assert_eq!(condition(&demo, 2), Condition::Demonstration);
        assert_eq!(condition(&demo, 3), Condition::Demonstration);
        assert_eq!(condition(&demo, 4), Condition::Used);

        let other = "ABCDEFGHJKLMNPRSTUVWXYZ0123456789"
            .chars()
            .find(|&c| (base_sum + c as u32) % 5 != 0)
            .unwrap();
        let used = vin_with(BASE, &[(16, other)]);
        assert_eq!(condition(&used, 2), Condition::Used);
        assert_eq!(condition(&used, 3), Condition::Used);
    }

    #[test]
    fn test_accident_status_divisors_by_age() {
        // 'P' = 80: divisible by 20 and 4, not by 7
        let p = vin_with(BASE, &[(16, 'P')]);
        assert_eq!(accident_status(&p, 2), AccidentStatus::PostAccident);
        assert_eq!(accident_status(&p, 3), AccidentStatus::AccidentFree);
        assert_eq!(accident_status(&p, 6), AccidentStatus::PostAccident);

        // 'F' = 70: divisible by 7 only
        let f = vin_with(BASE, &[(16, 'F')]);
        assert_eq!(accident_status(&f, 2), AccidentStatus::AccidentFree);
        assert_eq!(accident_status(&f, 5), AccidentStatus::PostAccident);
        assert_eq!(accident_status(&f, 6), AccidentStatus::AccidentFree);

        // '4' = 52: divisible by 4 only
        let four = vin_with(BASE, &[(16, '4')]);
        assert_eq!(accident_status(&four, 0), AccidentStatus::AccidentFree);
        assert_eq!(accident_status(&four, 4), AccidentStatus::AccidentFree);
        assert_eq!(accident_status(&four, 11), AccidentStatus::PostAccident);
    }

    #[test]
    fn test_damage_post_accident_categories() {
        // index 14: 'A' = 65 -> 0, 'B' = 66 -> 1, 'C' = 67 -> 2, 'D' = 68 -> 3, 'E' = 69 -> 4
        let expected = [
            ('A', DamageStatus::NoVisibleDamage),
            ('B', DamageStatus::RepairedDamage),
            ('C', DamageStatus::MinorBodyworkDamage),
            ('D', DamageStatus::MajorBodyworkDamage),
            ('E', DamageStatus::MechanicalDamage),
        ];
        for (c, damage) in expected {
            let v = vin_with(BASE, &[(14, c)]);
            assert_eq!(damage_status(&v, AccidentStatus::PostAccident), damage);
        }
    }

    #[test]
    fn test_damage_accident_free_mostly_none() {
        // index 13 codes ending in 9: '1' = 49, 'E' = 69, 'Y' = 89
        assert_eq!(
            damage_status(&vin_with(BASE, &[(13, '0')]), AccidentStatus::AccidentFree),
            DamageStatus::NoDamage
        );
        assert_eq!(
            damage_status(&vin_with(BASE, &[(13, 'E')]), AccidentStatus::AccidentFree),
            DamageStatus::StoneChips
        );
        assert_eq!(
            damage_status(&vin_with(BASE, &[(13, '1')]), AccidentStatus::AccidentFree),
            DamageStatus::MinorScratches
        );
        assert_eq!(
            damage_status(&vin_with(BASE, &[(13, 'Y')]), AccidentStatus::AccidentFree),
            DamageStatus::SmallDents
        );
    }

    #[test]
    fn test_accident_free_never_reports_post_accident_categories() {
        for c in "ABCDEFGHJKLMNPRSTUVWXYZ0123456789".chars() {
            let damage = damage_status(&vin_with(BASE, &[(13, c)]), AccidentStatus::AccidentFree);
            assert!(!POST_ACCIDENT_DAMAGE.contains(&damage), "{c}: {damage}");
        }
    }

    #[test]
    fn test_disabled_adapted_is_always_false() {
        for age in [0, 2, 5, 30] {
            let status = derive_status(&Vin::parse(BASE).unwrap(), "Germany", age);
            assert!(!status.disabled_adapted);
        }
    }
}
