//! Model catalog used to attach a model name and generation to a decoded VIN.
//!
//! A VIN does not encode a marketing model name in any portable way, so the
//! decoder picks one deterministically from a [`ModelCatalog`]. The bundled
//! [`PlaceholderCatalog`] is a short fixed list; a real catalog can be plugged
//! in through [`crate::domain::decoding::VinDecoder::with_catalog`].

/// A model together with its generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogModel {
    pub name: &'static str,
    /// `(first production year, label)` pairs in ascending year order.
    pub generations: &'static [(i32, &'static str)],
}

impl CatalogModel {
    /// Latest generation that started on or before `production_year`.
    pub fn generation_for(&self, production_year: i32) -> Option<&'static str> {
        self.generations
            .iter()
            .rev()
            .find(|(since, _)| *since <= production_year)
            .map(|&(_, label)| label)
    }
}

/// Source of model names per manufacturer.
pub trait ModelCatalog: Send + Sync {
    /// Models known for a manufacturer. An empty slice means "no data".
    fn models(&self, manufacturer: &str) -> &[CatalogModel];
}

const fn model(name: &'static str, generations: &'static [(i32, &'static str)]) -> CatalogModel {
    CatalogModel { name, generations }
}

/// Body-style names used for manufacturers without catalog entries.
pub const GENERIC_MODELS: &[CatalogModel] = &[
    model("Sedan", &[]),
    model("Hatchback", &[]),
    model("Estate", &[]),
    model("SUV", &[]),
    model("Coupe", &[]),
];

const VOLKSWAGEN: &[CatalogModel] = &[
    model("Golf", &[(1997, "IV"), (2003, "V"), (2008, "VI"), (2012, "VII"), (2019, "VIII")]),
    model("Passat", &[(1996, "B5"), (2005, "B6"), (2010, "B7"), (2014, "B8")]),
    model("Tiguan", &[(2007, "I"), (2016, "II"), (2023, "III")]),
    model("Multivan", &[(2003, "T5"), (2015, "T6"), (2021, "T7")]),
];

const AUDI: &[CatalogModel] = &[
    model("A4", &[(2000, "B6"), (2004, "B7"), (2007, "B8"), (2015, "B9")]),
    model("A6", &[(1997, "C5"), (2004, "C6"), (2011, "C7"), (2018, "C8")]),
    model("Q5", &[(2008, "8R"), (2016, "FY")]),
    model("A5 Cabrio", &[(2009, "8F"), (2017, "F5")]),
];

const BMW: &[CatalogModel] = &[
    model("3 Series", &[(1998, "E46"), (2005, "E90"), (2012, "F30"), (2019, "G20")]),
    model("5 Series", &[(1995, "E39"), (2003, "E60"), (2010, "F10"), (2017, "G30")]),
    model("X5", &[(1999, "E53"), (2006, "E70"), (2013, "F15"), (2018, "G05")]),
    model("Z4 Roadster", &[(2002, "E85"), (2009, "E89"), (2018, "G29")]),
];

const MERCEDES_BENZ: &[CatalogModel] = &[
    model("C-Class", &[(2000, "W203"), (2007, "W204"), (2014, "W205"), (2021, "W206")]),
    model("E-Class", &[(2002, "W211"), (2009, "W212"), (2016, "W213"), (2023, "W214")]),
    model("E-Class Coupe", &[(2009, "C207"), (2017, "C238")]),
    model("V-Class Van", &[(2003, "W639"), (2014, "W447")]),
];

const SKODA: &[CatalogModel] = &[
    model("Octavia", &[(1996, "I"), (2004, "II"), (2013, "III"), (2020, "IV")]),
    model("Fabia", &[(1999, "I"), (2007, "II"), (2014, "III"), (2021, "IV")]),
    model("Superb", &[(2001, "I"), (2008, "II"), (2015, "III"), (2024, "IV")]),
    model("Kodiaq", &[(2016, "I"), (2024, "II")]),
];

const TOYOTA: &[CatalogModel] = &[
    model("Corolla", &[(2001, "E120"), (2006, "E150"), (2012, "E170"), (2018, "E210")]),
    model("Yaris", &[(1999, "I"), (2005, "II"), (2011, "III"), (2020, "IV")]),
    model("RAV4", &[(2000, "II"), (2005, "III"), (2012, "IV"), (2018, "V")]),
    model("Proace Verso Van", &[(2016, "I")]),
];

const FORD: &[CatalogModel] = &[
    model("Focus", &[(1998, "Mk1"), (2004, "Mk2"), (2011, "Mk3"), (2018, "Mk4")]),
    model("Mondeo", &[(2000, "Mk3"), (2007, "Mk4"), (2014, "Mk5")]),
    model("Kuga", &[(2008, "I"), (2012, "II"), (2019, "III")]),
    model("Mustang Coupe", &[(2004, "S197"), (2014, "S550"), (2023, "S650")]),
];

const OPEL: &[CatalogModel] = &[
    model("Astra", &[(1998, "G"), (2004, "H"), (2009, "J"), (2015, "K"), (2021, "L")]),
    model("Corsa", &[(2000, "C"), (2006, "D"), (2014, "E"), (2019, "F")]),
    model("Insignia", &[(2008, "A"), (2017, "B")]),
    model("Zafira", &[(1999, "A"), (2005, "B"), (2011, "C")]),
];

const RENAULT: &[CatalogModel] = &[
    model("Clio", &[(1998, "II"), (2005, "III"), (2012, "IV"), (2019, "V")]),
    model("Megane", &[(2002, "II"), (2008, "III"), (2016, "IV")]),
    model("Captur", &[(2013, "I"), (2019, "II")]),
    model("Trafic Van", &[(2001, "II"), (2014, "III")]),
];

const PEUGEOT: &[CatalogModel] = &[
    model("208", &[(2012, "I"), (2019, "II")]),
    model("308", &[(2007, "I"), (2013, "II"), (2021, "III")]),
    model("3008", &[(2009, "I"), (2016, "II"), (2023, "III")]),
    model("RCZ Coupe", &[(2010, "I")]),
];

const HYUNDAI: &[CatalogModel] = &[
    model("i30", &[(2007, "FD"), (2012, "GD"), (2017, "PD")]),
    model("Tucson", &[(2004, "JM"), (2015, "TL"), (2020, "NX4")]),
    model("Kona", &[(2017, "OS"), (2023, "SX2")]),
    model("Ioniq", &[(2016, "AE")]),
];

const KIA: &[CatalogModel] = &[
    model("Ceed", &[(2006, "ED"), (2012, "JD"), (2018, "CD")]),
    model("Sportage", &[(2004, "II"), (2010, "III"), (2015, "IV"), (2021, "V")]),
    model("Picanto", &[(2004, "I"), (2011, "II"), (2017, "III")]),
    model("Carnival Van", &[(2014, "YP"), (2020, "KA4")]),
];

const VOLVO: &[CatalogModel] = &[
    model("XC60", &[(2008, "I"), (2017, "II")]),
    model("XC90", &[(2002, "I"), (2014, "II")]),
    model("V60", &[(2010, "I"), (2018, "II")]),
    model("S60", &[(2000, "I"), (2010, "II"), (2018, "III")]),
];

const TESLA: &[CatalogModel] = &[
    model("Model S", &[(2012, "I"), (2021, "Refresh")]),
    model("Model 3", &[(2017, "I"), (2023, "Highland")]),
    model("Model X", &[(2015, "I")]),
    model("Model Y", &[(2020, "I"), (2025, "Juniper")]),
];

const PORSCHE: &[CatalogModel] = &[
    model("911", &[(1997, "996"), (2004, "997"), (2011, "991"), (2019, "992")]),
    model("Cayenne", &[(2002, "9PA"), (2010, "92A"), (2017, "9YA")]),
    model("Boxster Roadster", &[(1996, "986"), (2004, "987"), (2012, "981"), (2016, "718")]),
];

const FIAT: &[CatalogModel] = &[
    model("Panda", &[(2003, "II"), (2011, "III")]),
    model("500", &[(2007, "I"), (2020, "II")]),
    model("Tipo", &[(2015, "II")]),
    model("Doblo Van", &[(2000, "I"), (2010, "II")]),
];

/// Small fixed catalog covering the most common manufacturers.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderCatalog;

impl ModelCatalog for PlaceholderCatalog {
    fn models(&self, manufacturer: &str) -> &[CatalogModel] {
        match manufacturer {
            "Volkswagen" => VOLKSWAGEN,
            "Audi" => AUDI,
            "BMW" => BMW,
            "Mercedes-Benz" => MERCEDES_BENZ,
            "Skoda" => SKODA,
            "Toyota" => TOYOTA,
            "Ford" => FORD,
            "Opel" => OPEL,
            "Renault" => RENAULT,
            "Peugeot" => PEUGEOT,
            "Hyundai" => HYUNDAI,
            "Kia" => KIA,
            "Volvo" => VOLVO,
            "Tesla" => TESLA,
            "Porsche" => PORSCHE,
            "Fiat" => FIAT,
            _ => GENERIC_MODELS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decoding::manufacturer::WMI_TABLE;

    #[test]
    fn test_generation_selection() {
        let golf = VOLKSWAGEN[0];
        assert_eq!(golf.generation_for(1996), None);
        assert_eq!(golf.generation_for(1997), Some("IV"));
        assert_eq!(golf.generation_for(2011), Some("VI"));
        assert_eq!(golf.generation_for(2012), Some("VII"));
        assert_eq!(golf.generation_for(2030), Some("VIII"));
    }

    #[test]
    fn test_generic_models_have_no_generations() {
        for m in GENERIC_MODELS {
            assert_eq!(m.generation_for(2020), None);
        }
    }

    #[test]
    fn test_every_manufacturer_has_models() {
        let catalog = PlaceholderCatalog;
        for &(_, name) in WMI_TABLE {
            assert!(!catalog.models(name).is_empty(), "{name}");
        }
    }

    #[test]
    fn test_generations_are_sorted() {
        let catalog = PlaceholderCatalog;
        for &(_, name) in WMI_TABLE {
            for m in catalog.models(name) {
                assert!(
                    m.generations.windows(2).all(|w| w[0].0 < w[1].0),
                    "{name} {}",
                    m.name
                );
            }
        }
    }

    #[test]
    fn test_unknown_manufacturer_uses_generic_list() {
        assert_eq!(PlaceholderCatalog.models("Lada"), GENERIC_MODELS);
    }
}
