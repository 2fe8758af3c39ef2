//! Status and warning-level derivation.
//!
//! Every provider builds its records through these functions, so a
//! record's status can never disagree with its own numbers.

use crate::model::{LandslideLevel, RiverStatus};

/// Derives a river status from the water level.
///
///   level >= danger  →  danger
///   level >= warning →  warning
///   otherwise        →  normal
pub fn classify_river_status(water_level_m: f64, warning_level_m: f64, danger_level_m: f64) -> RiverStatus {
    if water_level_m >= danger_level_m {
        RiverStatus::Danger
    } else if water_level_m >= warning_level_m {
        RiverStatus::Warning
    } else {
        RiverStatus::Normal
    }
}

/// Derives a landslide warning level from a risk score in [0, 1].
pub fn classify_landslide_level(risk_score: f64) -> LandslideLevel {
    if risk_score >= 0.8 {
        LandslideLevel::VeryHigh
    } else if risk_score >= 0.6 {
        LandslideLevel::High
    } else if risk_score >= 0.4 {
        LandslideLevel::Moderate
    } else {
        LandslideLevel::Low
    }
}

/// Rounds to `places` decimal places, half away from zero.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
