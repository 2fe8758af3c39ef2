//! Synthetic observation generator.
//!
//! Produces plausible stand-in records from the static tables in
//! `stations`, for demos and whenever a live feed is unavailable. Seeded
//! construction gives reproducible output.

use chrono::{DateTime, Duration, FixedOffset};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::classify::{classify_landslide_level, classify_river_status, round_to};
use crate::error::ProviderError;
use crate::logging::DataSource;
use crate::model::{
    jst_now, LandslideObservation, RiverObservation, RoadObservation, RoadStatus, SourceTag,
};
use crate::stations::{LANDSLIDE_AREAS, RIVER_STATIONS, ROAD_SECTIONS};

use super::ObservationSource;

pub struct SyntheticSource {
    rng: StdRng,
}

impl SyntheticSource {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    pub fn generate_rivers(&mut self) -> Vec<RiverObservation> {
        self.generate_rivers_at(jst_now())
    }

    /// Water level is the warning level scaled by U(0.3, 1.15).
    pub fn generate_rivers_at(&mut self, now: DateTime<FixedOffset>) -> Vec<RiverObservation> {
        RIVER_STATIONS
            .iter()
            .map(|st| {
                let level = round_to(st.warning_level_m * self.rng.gen_range(0.3..1.15), 2);
                RiverObservation {
                    station_id: st.station_id.to_string(),
                    name: st.name.to_string(),
                    river: st.river.to_string(),
                    lat: st.lat,
                    lon: st.lon,
                    water_level_m: level,
                    warning_level_m: st.warning_level_m,
                    danger_level_m: st.danger_level_m,
                    status: classify_river_status(level, st.warning_level_m, st.danger_level_m),
                    observed_at: now,
                    source: SourceTag::Mock,
                }
            })
            .collect()
    }

    pub fn generate_roads(&mut self) -> Vec<RoadObservation> {
        self.generate_roads_at(jst_now())
    }

    /// A random non-empty subset of the road sections, each closed or
    /// restricted since 1–48 hours ago.
    pub fn generate_roads_at(&mut self, now: DateTime<FixedOffset>) -> Vec<RoadObservation> {
        let count = self.rng.gen_range(1..=ROAD_SECTIONS.len());
        let active: Vec<_> = ROAD_SECTIONS.choose_multiple(&mut self.rng, count).collect();

        active
            .into_iter()
            .map(|rd| {
                let status = if self.rng.gen_bool(0.5) {
                    RoadStatus::Closed
                } else {
                    RoadStatus::Restricted
                };
                let hours_ago = self.rng.gen_range(1..=48);
                RoadObservation {
                    road_id: rd.road_id.to_string(),
                    road_name: rd.road_name.to_string(),
                    section: rd.section.to_string(),
                    lat: rd.lat,
                    lon: rd.lon,
                    cause: rd.cause.to_string(),
                    status,
                    since: now - Duration::hours(hours_ago),
                    updated_at: now,
                }
            })
            .collect()
    }

    pub fn generate_landslides(&mut self) -> Vec<LandslideObservation> {
        self.generate_landslides_at(jst_now())
    }

    /// Risk is the area's base risk scaled by U(0.5, 1.4), capped at 1.0.
    pub fn generate_landslides_at(&mut self, now: DateTime<FixedOffset>) -> Vec<LandslideObservation> {
        LANDSLIDE_AREAS
            .iter()
            .map(|area| {
                let risk = round_to(area.base_risk * self.rng.gen_range(0.5..1.4), 2).min(1.0);
                LandslideObservation {
                    area_id: area.area_id.to_string(),
                    name: area.name.to_string(),
                    prefecture: area.prefecture.to_string(),
                    lat: area.lat,
                    lon: area.lon,
                    risk_score: risk,
                    warning_level: classify_landslide_level(risk),
                    observed_at: now,
                    source: SourceTag::Mock,
                }
            })
            .collect()
    }
}

impl ObservationSource for SyntheticSource {
    fn kind(&self) -> DataSource {
        DataSource::Synthetic
    }

    fn rivers(&mut self) -> Result<Vec<RiverObservation>, ProviderError> {
        Ok(self.generate_rivers())
    }

    fn roads(&mut self) -> Result<Vec<RoadObservation>, ProviderError> {
        Ok(self.generate_roads())
    }

    fn landslides(&mut self) -> Result<Vec<LandslideObservation>, ProviderError> {
        Ok(self.generate_landslides())
    }
}
