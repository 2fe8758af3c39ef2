//! Location-based composite risk scoring.
//!
//! Each category score is the *maximum* proximity-weighted severity among
//! that category's observations, so the worst nearby hazard dominates.
//! Categories are then blended into a single overall figure.

use crate::classify::round_to;
use crate::geo::{haversine_km, proximity_weight};
use crate::model::{
    LandslideObservation, RiskLevel, RiskQuery, RiskResult, RiverObservation, RiverStatus,
    RoadObservation, RoadStatus,
};

// ---------------------------------------------------------------------------
// Blend weights and severity multipliers
// ---------------------------------------------------------------------------

pub const RIVER_WEIGHT: f64 = 0.4;
pub const ROAD_WEIGHT: f64 = 0.25;
pub const LANDSLIDE_WEIGHT: f64 = 0.35;

fn river_multiplier(status: RiverStatus) -> f64 {
    match status {
        RiverStatus::Danger => 1.0,
        RiverStatus::Warning => 0.6,
        RiverStatus::Normal => 0.1,
    }
}

fn road_multiplier(status: RoadStatus) -> f64 {
    match status {
        RoadStatus::Closed => 1.0,
        RoadStatus::Restricted => 0.6,
    }
}

/// Best score and explanation strings for one category.
#[derive(Debug, Default)]
struct CategoryScore {
    score: f64,
    factors: Vec<String>,
}

impl CategoryScore {
    fn offer(&mut self, score: f64) {
        if score > self.score {
            self.score = score;
        }
    }
}

fn weight_at(query: &RiskQuery, lat: f64, lon: f64) -> f64 {
    proximity_weight(haversine_km(query.lat, query.lon, lat, lon))
}

fn score_rivers(query: &RiskQuery, rivers: &[RiverObservation]) -> CategoryScore {
    let mut category = CategoryScore::default();
    for river in rivers {
        let w = weight_at(query, river.lat, river.lon);
        if w <= 0.0 {
            continue;
        }
        category.offer(w * river_multiplier(river.status));
        if matches!(river.status, RiverStatus::Danger | RiverStatus::Warning) {
            category.factors.push(format!(
                "{}({})が{}レベル",
                river.name,
                river.river,
                river.status.as_str()
            ));
        }
    }
    category
}

// Every road in range reports a factor, whatever its status. Rivers and
// landslides only report at elevated severity.
fn score_roads(query: &RiskQuery, roads: &[RoadObservation]) -> CategoryScore {
    let mut category = CategoryScore::default();
    for road in roads {
        let w = weight_at(query, road.lat, road.lon);
        if w <= 0.0 {
            continue;
        }
        category.offer(w * road_multiplier(road.status));
        category.factors.push(format!(
            "{} {}が{}により{}",
            road.road_name,
            road.section,
            road.cause,
            road.status.as_str()
        ));
    }
    category
}

fn score_landslides(query: &RiskQuery, landslides: &[LandslideObservation]) -> CategoryScore {
    let mut category = CategoryScore::default();
    for area in landslides {
        let w = weight_at(query, area.lat, area.lon);
        if w <= 0.0 {
            continue;
        }
        category.offer(w * area.risk_score);
        if area.warning_level.is_high_risk() {
            category.factors.push(format!(
                "{}が土砂災害{}レベル",
                area.name,
                area.warning_level.as_str()
            ));
        }
    }
    category
}

/// Computes the composite risk at `query` from one snapshot of observations.
///
/// Total over any finite input: empty collections yield all-zero scores,
/// `RiskLevel::Low`, and no factors. The overall score is blended from the
/// unrounded category scores, then rounded to 3 decimals; category scores
/// in the result are rounded independently.
pub fn compute_risk(
    query: RiskQuery,
    rivers: &[RiverObservation],
    roads: &[RoadObservation],
    landslides: &[LandslideObservation],
) -> RiskResult {
    let river = score_rivers(&query, rivers);
    let road = score_roads(&query, roads);
    let landslide = score_landslides(&query, landslides);

    let blended =
        river.score * RIVER_WEIGHT + road.score * ROAD_WEIGHT + landslide.score * LANDSLIDE_WEIGHT;
    let overall = round_to(blended, 3).min(1.0);

    let mut contributing_factors = river.factors;
    contributing_factors.extend(road.factors);
    contributing_factors.extend(landslide.factors);

    RiskResult {
        query,
        overall_score: overall,
        river_risk: round_to(river.score, 3),
        road_risk: round_to(road.score, 3),
        landslide_risk: round_to(landslide.score, 3),
        level: RiskLevel::from_score(overall),
        contributing_factors,
    }
}
