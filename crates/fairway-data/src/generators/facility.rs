//! Facility and bay generation.

use fake::Fake;
use fake::faker::address::en::CityName;
use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use time::{Date, Duration};
use uuid::Uuid;

use super::{new_id, round2};
use crate::catalog;
use crate::config::DateRange;

/// Generated facility dimension row.
#[derive(Debug, Clone, serde::Serialize)]
pub struct GeneratedFacility {
    pub facility_id: Uuid,
    pub facility_name: String,
    pub facility_type: &'static str,
    pub country: String,
    pub region: String,
    pub city: String,
    pub num_bays: u8,
    pub operating_hours_start: u8,
    pub operating_hours_end: u8,
    pub is_commercial: bool,
    pub opening_date: Date,
    pub is_active: bool,
}

/// Generated bay dimension row.
#[derive(Debug, Clone, serde::Serialize)]
pub struct GeneratedBay {
    pub bay_id: Uuid,
    pub facility_id: Uuid,
    pub bay_name: String,
    pub bay_number: u8,
    pub simulator_model: &'static str,
    pub simulator_name: &'static str,
    pub serial_number: String,
    pub installation_date: Date,
    pub is_active: bool,
    pub hourly_rate: f64,
}

/// Configuration for facility generation.
#[derive(Debug, Clone)]
pub struct FacilityGenConfig {
    /// Bay count range for commercial facilities (residential always gets 1).
    pub commercial_bays: (u8, u8),
    /// Hourly rate range for commercial bays, in USD.
    pub hourly_rate_range: (f64, f64),
    /// How far back a facility may have opened, in days.
    pub opening_window_days: (i64, i64),
}

impl Default for FacilityGenConfig {
    fn default() -> Self {
        Self {
            commercial_bays: (1, 8),
            hourly_rate_range: (30.0, 80.0),
            opening_window_days: (30, 1000),
        }
    }
}

/// Generates facilities and the bays they own.
pub struct FacilityGenerator {
    config: FacilityGenConfig,
    type_weights: WeightedIndex<f64>,
    region_weights: WeightedIndex<f64>,
    model_weights: WeightedIndex<f64>,
}

impl FacilityGenerator {
    /// Creates a new facility generator with default configuration.
    pub fn new() -> Self {
        Self::with_config(FacilityGenConfig::default())
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: FacilityGenConfig) -> Self {
        Self {
            config,
            type_weights: WeightedIndex::new(catalog::FACILITY_TYPES.iter().map(|t| t.weight))
                .unwrap(),
            region_weights: WeightedIndex::new(catalog::REGIONS.iter().map(|r| r.weight)).unwrap(),
            model_weights: WeightedIndex::new(catalog::SIMULATOR_MODELS.iter().map(|m| m.weight))
                .unwrap(),
        }
    }

    /// Generates `count` facilities and all of their bays.
    pub fn generate_batch(
        &self,
        count: usize,
        range: &DateRange,
        rng: &mut impl Rng,
    ) -> (Vec<GeneratedFacility>, Vec<GeneratedBay>) {
        let mut facilities = Vec::with_capacity(count);
        let mut bays = Vec::new();

        for _ in 0..count {
            let facility = self.generate_facility(range, rng);
            bays.extend(self.generate_bays(&facility, range, rng));
            facilities.push(facility);
        }

        (facilities, bays)
    }

    fn generate_facility(&self, range: &DateRange, rng: &mut impl Rng) -> GeneratedFacility {
        let facility_type = &catalog::FACILITY_TYPES[self.type_weights.sample(rng)];
        let region = &catalog::REGIONS[self.region_weights.sample(rng)];
        let country = region.countries[rng.gen_range(0..region.countries.len())];
        let city: String = CityName().fake_with_rng(rng);

        let num_bays = if facility_type.residential {
            1
        } else {
            rng.gen_range(self.config.commercial_bays.0..=self.config.commercial_bays.1)
        };

        let base_name = catalog::FACILITY_NAMES[rng.gen_range(0..catalog::FACILITY_NAMES.len())];
        let facility_name = format!("{base_name} {city}");

        let (min_days, max_days) = self.config.opening_window_days;

        GeneratedFacility {
            facility_id: new_id(rng),
            facility_name,
            facility_type: facility_type.id,
            country: country.to_string(),
            region: region.name.to_string(),
            city,
            num_bays,
            operating_hours_start: rng.gen_range(6..=9),
            operating_hours_end: rng.gen_range(20..=23),
            is_commercial: !facility_type.residential,
            opening_date: range.end - Duration::days(rng.gen_range(min_days..=max_days)),
            is_active: rng.r#gen::<f64>() >= 0.05,
        }
    }

    fn generate_bays(
        &self,
        facility: &GeneratedFacility,
        range: &DateRange,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedBay> {
        (1..=facility.num_bays)
            .map(|bay_number| {
                let model = &catalog::SIMULATOR_MODELS[self.model_weights.sample(rng)];
                let bay_name = if facility.num_bays == 1 {
                    format!("{} Bay", facility.facility_name)
                } else {
                    format!("Bay {bay_number}")
                };

                let hourly_rate = if facility.is_commercial {
                    let (min_rate, max_rate) = self.config.hourly_rate_range;
                    round2(rng.gen_range(min_rate..max_rate))
                } else {
                    0.0
                };

                GeneratedBay {
                    bay_id: new_id(rng),
                    facility_id: facility.facility_id,
                    bay_name,
                    bay_number,
                    simulator_model: model.code,
                    simulator_name: model.name,
                    serial_number: format!("FW-{}", rng.gen_range(100_000..1_000_000)),
                    installation_date: range.end - Duration::days(rng.gen_range(30..=730)),
                    is_active: rng.r#gen::<f64>() >= 0.02,
                    hourly_rate,
                }
            })
            .collect()
    }
}

impl Default for FacilityGenerator {
    fn default() -> Self {
        Self::new()
    }
}
