/// Integration tests for the composite risk engine
///
/// These tests verify:
/// 1. Empty snapshots score zero
/// 2. The worked examples (river at the query point, road 10 km away)
/// 3. Severity classification boundaries
/// 4. Observations beyond the 30 km radius never change any score
/// 5. Contributing-factor wording and ordering
/// 6. Overall score stays in [0, 1] over randomized snapshots

use chrono::{DateTime, FixedOffset};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use infrascope::compute_risk;
use infrascope::geo::EARTH_RADIUS_KM;
use infrascope::model::{
    jst_now, LandslideLevel, LandslideObservation, RiskLevel, RiskQuery, RiverObservation,
    RiverStatus, RoadObservation, RoadStatus, SourceTag,
};

// ---------------------------------------------------------------------------
// Test Helpers
// ---------------------------------------------------------------------------

const BASE: RiskQuery = RiskQuery { lat: 35.6812, lon: 139.7671 };

fn now() -> DateTime<FixedOffset> {
    jst_now()
}

/// Latitude `km` kilometres due north of `BASE`.
fn north_of_base(km: f64) -> f64 {
    BASE.lat + (km / EARTH_RADIUS_KM).to_degrees()
}

fn river_at(name: &str, status: RiverStatus, lat: f64, lon: f64) -> RiverObservation {
    RiverObservation {
        station_id: format!("T-{}", name),
        name: name.to_string(),
        river: "荒川".to_string(),
        lat,
        lon,
        water_level_m: 5.0,
        warning_level_m: 4.0,
        danger_level_m: 7.0,
        status,
        observed_at: now(),
        source: SourceTag::Mock,
    }
}

fn road_at(name: &str, status: RoadStatus, lat: f64, lon: f64) -> RoadObservation {
    RoadObservation {
        road_id: format!("T-{}", name),
        road_name: name.to_string(),
        section: "八王子〜相模原".to_string(),
        lat,
        lon,
        cause: "土砂崩れ".to_string(),
        status,
        since: now(),
        updated_at: now(),
    }
}

fn landslide_at(name: &str, risk_score: f64, level: LandslideLevel, lat: f64, lon: f64) -> LandslideObservation {
    LandslideObservation {
        area_id: format!("T-{}", name),
        name: name.to_string(),
        prefecture: "東京都".to_string(),
        lat,
        lon,
        risk_score,
        warning_level: level,
        observed_at: now(),
        source: SourceTag::Mock,
    }
}

// ---------------------------------------------------------------------------
// Basic Properties
// ---------------------------------------------------------------------------

#[test]
fn test_empty_snapshot_scores_zero() {
    let result = compute_risk(BASE, &[], &[], &[]);
    assert_eq!(result.query, BASE);
    assert_eq!(result.river_risk, 0.0);
    assert_eq!(result.road_risk, 0.0);
    assert_eq!(result.landslide_risk, 0.0);
    assert_eq!(result.overall_score, 0.0);
    assert_eq!(result.level, RiskLevel::Low);
    assert!(result.contributing_factors.is_empty());
}

#[test]
fn test_remote_location_scores_zero() {
    let rivers = vec![river_at("岩淵水門", RiverStatus::Danger, BASE.lat, BASE.lon)];
    let result = compute_risk(RiskQuery::new(0.0, 0.0), &rivers, &[], &[]);
    assert_eq!(result.overall_score, 0.0);
    assert_eq!(result.level, RiskLevel::Low);
}

// ---------------------------------------------------------------------------
// Worked Examples
// ---------------------------------------------------------------------------

#[test]
fn test_danger_river_at_query_point() {
    let rivers = vec![river_at("岩淵水門", RiverStatus::Danger, BASE.lat, BASE.lon)];
    let result = compute_risk(BASE, &rivers, &[], &[]);

    assert_eq!(result.river_risk, 1.0);
    assert_eq!(result.overall_score, 0.4);
    assert_eq!(result.level, RiskLevel::Moderate);
    assert_eq!(result.contributing_factors, vec!["岩淵水門(荒川)がdangerレベル"]);
}

#[test]
fn test_closed_road_ten_km_away() {
    let roads = vec![road_at("国道16号", RoadStatus::Closed, north_of_base(10.0), BASE.lon)];
    let result = compute_risk(BASE, &[], &roads, &[]);

    assert_eq!(result.road_risk, 0.667);
    assert_eq!(result.overall_score, 0.167);
    assert_eq!(result.level, RiskLevel::Low);
}

#[test]
fn test_all_categories_at_query_point_are_critical() {
    let rivers = vec![river_at("a", RiverStatus::Danger, BASE.lat, BASE.lon)];
    let roads = vec![road_at("b", RoadStatus::Closed, BASE.lat, BASE.lon)];
    let areas = vec![landslide_at("c", 1.0, LandslideLevel::VeryHigh, BASE.lat, BASE.lon)];
    let result = compute_risk(BASE, &rivers, &roads, &areas);

    assert_eq!(result.overall_score, 1.0);
    assert_eq!(result.level, RiskLevel::Critical);
}

// ---------------------------------------------------------------------------
// Severity Classification
// ---------------------------------------------------------------------------

#[test]
fn test_severity_boundaries() {
    let cases = [
        (1.0, RiskLevel::Critical),
        (0.75, RiskLevel::Critical),
        (0.749, RiskLevel::High),
        (0.5, RiskLevel::High),
        (0.499, RiskLevel::Moderate),
        (0.25, RiskLevel::Moderate),
        (0.249, RiskLevel::Low),
        (0.0, RiskLevel::Low),
    ];
    for (score, expected) in cases {
        assert_eq!(RiskLevel::from_score(score), expected, "score {}", score);
    }
}

// ---------------------------------------------------------------------------
// Proximity Threshold
// ---------------------------------------------------------------------------

#[test]
fn test_observations_beyond_radius_change_nothing() {
    let rivers = vec![river_at("near", RiverStatus::Warning, north_of_base(5.0), BASE.lon)];
    let roads = vec![road_at("near", RoadStatus::Restricted, north_of_base(12.0), BASE.lon)];
    let areas = vec![landslide_at("near", 0.5, LandslideLevel::Moderate, north_of_base(20.0), BASE.lon)];
    let before = compute_risk(BASE, &rivers, &roads, &areas);

    let far = north_of_base(31.0);
    let mut rivers_far = rivers.clone();
    rivers_far.push(river_at("far", RiverStatus::Danger, far, BASE.lon));
    let mut roads_far = roads.clone();
    roads_far.push(road_at("far", RoadStatus::Closed, far, BASE.lon));
    let mut areas_far = areas.clone();
    areas_far.push(landslide_at("far", 1.0, LandslideLevel::VeryHigh, far, BASE.lon));
    let after = compute_risk(BASE, &rivers_far, &roads_far, &areas_far);

    assert_eq!(before, after);
}

#[test]
fn test_observation_just_past_radius_contributes_nothing() {
    let roads = vec![road_at("edge", RoadStatus::Closed, north_of_base(30.01), BASE.lon)];
    let result = compute_risk(BASE, &[], &roads, &[]);
    assert_eq!(result.road_risk, 0.0);
    assert!(result.contributing_factors.is_empty());
}

// ---------------------------------------------------------------------------
// Contributing Factors
// ---------------------------------------------------------------------------

#[test]
fn test_factor_order_is_rivers_roads_landslides() {
    let rivers = vec![
        river_at("R-1", RiverStatus::Warning, BASE.lat, BASE.lon),
        river_at("R-2", RiverStatus::Normal, BASE.lat, BASE.lon),
        river_at("R-3", RiverStatus::Danger, BASE.lat, BASE.lon),
    ];
    let roads = vec![road_at("国道246号", RoadStatus::Restricted, BASE.lat, BASE.lon)];
    let areas = vec![
        landslide_at("強羅地区", 0.85, LandslideLevel::VeryHigh, BASE.lat, BASE.lon),
        landslide_at("日原地区", 0.3, LandslideLevel::Low, BASE.lat, BASE.lon),
        landslide_at("北部", 0.65, LandslideLevel::High, BASE.lat, BASE.lon),
    ];

    let result = compute_risk(BASE, &rivers, &roads, &areas);
    assert_eq!(
        result.contributing_factors,
        vec![
            "R-1(荒川)がwarningレベル",
            "R-3(荒川)がdangerレベル",
            "国道246号 八王子〜相模原が土砂崩れによりrestricted",
            "強羅地区が土砂災害very_highレベル",
            "北部が土砂災害highレベル",
        ]
    );
}

// Roads report regardless of severity while rivers and landslides gate on
// it. Pin the asymmetry so any change to it is deliberate.
#[test]
fn test_every_nearby_road_reports_but_only_elevated_rivers_and_landslides() {
    let rivers = vec![river_at("平常", RiverStatus::Normal, BASE.lat, BASE.lon)];
    let roads = vec![
        road_at("規制", RoadStatus::Restricted, north_of_base(25.0), BASE.lon),
        road_at("通行止め", RoadStatus::Closed, north_of_base(1.0), BASE.lon),
    ];
    let areas = vec![landslide_at("中", 0.5, LandslideLevel::Moderate, BASE.lat, BASE.lon)];

    let result = compute_risk(BASE, &rivers, &roads, &areas);
    assert_eq!(result.contributing_factors.len(), 2);
    assert!(result.contributing_factors.iter().all(|f| f.contains("により")));
}

#[test]
fn test_duplicate_observations_are_not_deduplicated() {
    let river = river_at("dup", RiverStatus::Danger, BASE.lat, BASE.lon);
    let result = compute_risk(BASE, &[river.clone(), river], &[], &[]);
    assert_eq!(result.contributing_factors.len(), 2);
    assert_eq!(result.river_risk, 1.0);
}

// ---------------------------------------------------------------------------
// Randomized Bounds
// ---------------------------------------------------------------------------

/// A point within ~0.5° of `BASE`, so plenty of them fall inside the radius.
fn jitter(rng: &mut StdRng) -> (f64, f64) {
    (BASE.lat + rng.gen_range(-0.5..0.5), BASE.lon + rng.gen_range(-0.5..0.5))
}

#[test]
fn test_scores_stay_in_unit_range_for_random_snapshots() {
    let mut rng = StdRng::seed_from_u64(0x1f5c);
    let river_statuses = [RiverStatus::Normal, RiverStatus::Warning, RiverStatus::Danger];
    let levels = [
        LandslideLevel::Low,
        LandslideLevel::Moderate,
        LandslideLevel::High,
        LandslideLevel::VeryHigh,
    ];

    for _ in 0..300 {
        let rivers: Vec<_> = (0..rng.gen_range(0..10))
            .map(|i| {
                let (lat, lon) = jitter(&mut rng);
                river_at(&i.to_string(), river_statuses[rng.gen_range(0..3)], lat, lon)
            })
            .collect();
        let roads: Vec<_> = (0..rng.gen_range(0..10))
            .map(|i| {
                let (lat, lon) = jitter(&mut rng);
                let status = if rng.gen_bool(0.5) { RoadStatus::Closed } else { RoadStatus::Restricted };
                road_at(&i.to_string(), status, lat, lon)
            })
            .collect();
        let areas: Vec<_> = (0..rng.gen_range(0..10))
            .map(|i| {
                let (lat, lon) = jitter(&mut rng);
                landslide_at(&i.to_string(), rng.gen_range(0.0..=1.0), levels[rng.gen_range(0..4)], lat, lon)
            })
            .collect();

        let (qlat, qlon) = jitter(&mut rng);
        let result = compute_risk(RiskQuery::new(qlat, qlon), &rivers, &roads, &areas);

        for score in [result.overall_score, result.river_risk, result.road_risk, result.landslide_risk] {
            assert!((0.0..=1.0).contains(&score), "score {} out of range: {:?}", score, result);
        }
        assert_eq!(result.level, RiskLevel::from_score(result.overall_score));
    }
}
