//! Kenyan agriculture reference data.
//!
//! Fills the plan form selects and backs `regai catalog`. Keys are the
//! values sent on the wire; labels are for display.

use serde::Serialize;

/// Agronomic profile of one supported crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CropProfile {
    pub key: &'static str,
    pub planting_seasons: &'static [&'static str],
    pub companion_crops: &'static [&'static str],
    pub cover_crops: &'static [&'static str],
    pub soil_ph: &'static str,
    pub rainfall_needs: &'static str,
}

impl CropProfile {
    /// `sweet_potato` -> `Sweet Potato`
    pub fn label(&self) -> String {
        title_case(self.key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SoilType {
    pub key: &'static str,
    pub description: &'static str,
}

impl SoilType {
    pub fn label(&self) -> String {
        title_case(self.key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Region {
    pub key: &'static str,
    pub counties: &'static [&'static str],
}

impl Region {
    pub fn label(&self) -> String {
        title_case(self.key)
    }
}

/// A `(value, label)` pair for a select control.
pub type SelectOption = (&'static str, &'static str);

pub const CROPS: &[CropProfile] = &[
    CropProfile {
        key: "maize",
        planting_seasons: &["March-May (Long rains)", "October-December (Short rains)"],
        companion_crops: &["beans", "cowpeas", "groundnuts"],
        cover_crops: &["desmodium", "brachiaria grass", "lablab"],
        soil_ph: "6.0-7.5",
        rainfall_needs: "500-1200mm annually",
    },
    CropProfile {
        key: "beans",
        planting_seasons: &["March-May", "September-November"],
        companion_crops: &["maize", "sorghum", "millet"],
        cover_crops: &["mucuna", "lablab", "canavalia"],
        soil_ph: "6.0-7.0",
        rainfall_needs: "300-600mm per season",
    },
    CropProfile {
        key: "sorghum",
        planting_seasons: &["March-May", "October-December"],
        companion_crops: &["beans", "cowpeas", "pigeon peas"],
        cover_crops: &["brachiaria", "rhodes grass"],
        soil_ph: "6.0-8.5",
        rainfall_needs: "300-700mm annually",
    },
    CropProfile {
        key: "sweet_potato",
        planting_seasons: &["March-May", "September-December"],
        companion_crops: &["beans", "maize"],
        cover_crops: &["sweet potato vines", "lablab"],
        soil_ph: "5.8-6.2",
        rainfall_needs: "600-1000mm annually",
    },
];

pub const SOILS: &[SoilType] = &[
    SoilType {
        key: "clay",
        description: "Heavy soil, retains water well, may need drainage",
    },
    SoilType {
        key: "loamy",
        description: "Ideal soil, good drainage and nutrient retention",
    },
    SoilType {
        key: "sandy",
        description: "Light soil, drains quickly, needs organic matter",
    },
    SoilType {
        key: "volcanic",
        description: "Fertile soil, good for most crops, pH may be high",
    },
    SoilType {
        key: "black_cotton",
        description: "Swells when wet, cracks when dry, needs careful management",
    },
];

pub const REGIONS: &[Region] = &[
    Region {
        key: "central",
        counties: &["Kiambu", "Murang'a", "Nyeri", "Kirinyaga", "Nyandarua"],
    },
    Region {
        key: "eastern",
        counties: &["Machakos", "Kitui", "Makueni", "Embu", "Tharaka Nithi"],
    },
    Region {
        key: "western",
        counties: &["Kakamega", "Vihiga", "Bungoma", "Busia"],
    },
    Region {
        key: "rift_valley",
        counties: &["Nakuru", "Uasin Gishu", "Trans Nzoia", "Kericho", "Bomet"],
    },
    Region {
        key: "nyanza",
        counties: &["Kisumu", "Siaya", "Kisii", "Nyamira", "Migori"],
    },
    Region {
        key: "coast",
        counties: &["Mombasa", "Kilifi", "Kwale", "Taita Taveta"],
    },
    Region {
        key: "north_eastern",
        counties: &["Garissa", "Wajir", "Mandera"],
    },
    Region {
        key: "northern",
        counties: &["Turkana", "Marsabit", "Samburu", "Isiolo"],
    },
];

pub const EXPERIENCE_LEVELS: &[SelectOption] = &[
    ("beginner", "Beginner (0-2 years)"),
    ("intermediate", "Intermediate (3-10 years)"),
    ("experienced", "Experienced (10+ years)"),
];

pub const GOALS: &[SelectOption] = &[
    ("improve_soil", "Improve soil health"),
    ("increase_yield", "Increase yields"),
    ("water_conservation", "Conserve water"),
    ("carbon_sequestration", "Sequester carbon"),
    ("reduce_costs", "Reduce input costs"),
];

pub fn crop(key: &str) -> Option<&'static CropProfile> {
    CROPS.iter().find(|c| c.key == key)
}

pub fn soil(key: &str) -> Option<&'static SoilType> {
    SOILS.iter().find(|s| s.key == key)
}

/// Every county across all regions, sorted.
pub fn counties() -> Vec<&'static str> {
    let mut all: Vec<_> = REGIONS.iter().flat_map(|r| r.counties.iter().copied()).collect();
    all.sort_unstable();
    all
}

/// Region a county belongs to (case-insensitive).
pub fn region_of(county: &str) -> Option<&'static Region> {
    REGIONS
        .iter()
        .find(|r| r.counties.iter().any(|c| c.eq_ignore_ascii_case(county)))
}

fn title_case(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
