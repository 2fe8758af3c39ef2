/// JMA (Japan Meteorological Agency) bosai feed client
///
/// Retrieves flood, sediment-disaster (landslide) and weather warning maps
/// from the JMA bosai JSON endpoints and normalizes them into observation
/// records placed at prefecture centroids.
///
/// Feeds: https://www.jma.go.jp/bosai/
///
/// All three feeds share the same loose shape: a JSON object keyed by JMA
/// area code whose values are objects. Entries that don't fit are skipped
/// rather than failing the whole feed.

use std::time::Duration;

use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Value};

use crate::classify::{classify_landslide_level, classify_river_status, round_to};
use crate::error::ProviderError;
use crate::logging::DataSource;
use crate::model::{
    jst_now, LandslideObservation, RiverObservation, RoadObservation, SourceTag, WeatherWarning,
};
use crate::stations::find_prefecture;

use super::ObservationSource;

pub const JMA_FLOOD_URL: &str = "https://www.jma.go.jp/bosai/flood/data/warning/map.json";
pub const JMA_SEDIMENT_URL: &str = "https://www.jma.go.jp/bosai/sediment/data/warning/map.json";
pub const JMA_WARNING_URL: &str = "https://www.jma.go.jp/bosai/warning/data/warning/map.json";

/// Flood map levels are mapped onto a synthetic gauge scale with these
/// thresholds, so level 3 is `warning` and level 4+ is `danger`.
pub const FLOOD_WARNING_LEVEL: f64 = 3.0;
pub const FLOOD_DANGER_LEVEL: f64 = 4.0;

/// Sediment levels are divided by this to give a risk score.
pub const SEDIMENT_MAX_LEVEL: f64 = 5.0;

/// JMA warning kind codes.
static WARNING_TYPES: &[(&str, &str)] = &[
    ("33", "大雨"),
    ("03", "洪水"),
    ("04", "暴風"),
    ("05", "暴風雪"),
    ("06", "大雪"),
    ("07", "波浪"),
    ("08", "高潮"),
    ("10", "大雨特別"),
    ("13", "暴風特別"),
    ("17", "高潮特別"),
];

pub fn warning_type_name(code: &str) -> String {
    WARNING_TYPES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| format!("警報({})", code))
}

// ============================================================================
// Client
// ============================================================================

pub struct JmaSource {
    client: reqwest::blocking::Client,
}

impl JmaSource {
    pub fn new(timeout: Duration, connect_timeout: Duration) -> Result<Self, ProviderError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;
        Ok(Self { client })
    }
}

/// GET a feed and return its body text.
pub fn fetch_feed(client: &reqwest::blocking::Client, url: &str) -> Result<String, ProviderError> {
    let response = client
        .get(url)
        .header("Accept", "application/json")
        .send()?;

    if !response.status().is_success() {
        return Err(ProviderError::Status(response.status().as_u16()));
    }

    Ok(response.text()?)
}

impl ObservationSource for JmaSource {
    fn kind(&self) -> DataSource {
        DataSource::Jma
    }

    fn rivers(&mut self) -> Result<Vec<RiverObservation>, ProviderError> {
        let body = fetch_feed(&self.client, JMA_FLOOD_URL)?;
        parse_flood_map(&body, jst_now())
    }

    fn roads(&mut self) -> Result<Vec<RoadObservation>, ProviderError> {
        // JARTIC offers no public feed
        Err(ProviderError::Unsupported("roads"))
    }

    fn landslides(&mut self) -> Result<Vec<LandslideObservation>, ProviderError> {
        let body = fetch_feed(&self.client, JMA_SEDIMENT_URL)?;
        parse_sediment_map(&body, jst_now())
    }

    fn weather_warnings(&mut self) -> Result<Vec<WeatherWarning>, ProviderError> {
        let body = fetch_feed(&self.client, JMA_WARNING_URL)?;
        parse_warning_map(&body)
    }
}

// ============================================================================
// Parsers
// ============================================================================

fn area_map(body: &str) -> Result<Map<String, Value>, ProviderError> {
    match serde_json::from_str::<Value>(body)? {
        Value::Object(map) => Ok(map),
        other => Err(ProviderError::Malformed(format!(
            "expected an object keyed by area code, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Null, false, zero and empty strings/arrays/objects count as missing, so
/// a blank long-form key still falls through to its short form.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// First of `keys` present in `map` with a non-blank value.
fn first_present<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().filter_map(|k| map.get(*k)).find(|v| !is_blank(v))
}

/// Reads `level` (or its short form `l`) as an integer. Accepts numbers
/// and numeric strings; anything else is `None`.
fn entry_level(info: &Map<String, Value>) -> Option<i64> {
    let raw = first_present(info, &["level", "l"])?;
    match raw {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Flood warning map → river observations, one per warned area.
pub fn parse_flood_map(
    body: &str,
    now: DateTime<FixedOffset>,
) -> Result<Vec<RiverObservation>, ProviderError> {
    let mut results = Vec::new();

    for (area_code, info) in area_map(body)? {
        let Some(info) = info.as_object() else { continue };
        let Some(level) = entry_level(info).filter(|l| *l >= 1) else { continue };
        let Some(pref) = find_prefecture(&area_code) else { continue };

        let water_level_m = level as f64;
        results.push(RiverObservation {
            station_id: format!("JMA-FL-{}", area_code),
            name: format!("{} 洪水警報域", pref.name),
            river: pref.name.to_string(),
            lat: pref.lat,
            lon: pref.lon,
            water_level_m,
            warning_level_m: FLOOD_WARNING_LEVEL,
            danger_level_m: FLOOD_DANGER_LEVEL,
            status: classify_river_status(water_level_m, FLOOD_WARNING_LEVEL, FLOOD_DANGER_LEVEL),
            observed_at: now,
            source: SourceTag::Live,
        });
    }

    Ok(results)
}

/// Sediment-disaster warning map → landslide observations.
pub fn parse_sediment_map(
    body: &str,
    now: DateTime<FixedOffset>,
) -> Result<Vec<LandslideObservation>, ProviderError> {
    let mut results = Vec::new();

    for (area_code, info) in area_map(body)? {
        let Some(info) = info.as_object() else { continue };
        let Some(level) = entry_level(info).filter(|l| *l >= 1) else { continue };
        let Some(pref) = find_prefecture(&area_code) else { continue };

        let risk_score = round_to((level as f64 / SEDIMENT_MAX_LEVEL).min(1.0), 2);
        results.push(LandslideObservation {
            area_id: format!("JMA-SD-{}", area_code),
            name: format!("{} 土砂災害警戒区域", pref.name),
            prefecture: pref.name.to_string(),
            lat: pref.lat,
            lon: pref.lon,
            risk_score,
            warning_level: classify_landslide_level(risk_score),
            observed_at: now,
            source: SourceTag::Live,
        });
    }

    Ok(results)
}

/// Weather warning map → active warnings. Cancelled (`解除`) and
/// status-less entries are dropped.
pub fn parse_warning_map(body: &str) -> Result<Vec<WeatherWarning>, ProviderError> {
    let mut results = Vec::new();

    for (area_code, info) in area_map(body)? {
        let Some(info) = info.as_object() else { continue };
        let Some(warnings) = first_present(info, &["warnings", "w"]).and_then(Value::as_array)
        else {
            continue;
        };
        let Some(pref) = find_prefecture(&area_code) else { continue };

        for w in warnings {
            let status = w.get("status").and_then(Value::as_str).unwrap_or("");
            if status.is_empty() || status == "解除" {
                continue;
            }
            let code = w
                .get("code")
                .filter(|c| !is_blank(c))
                .or_else(|| w.get("kind").and_then(|k| k.get("code")))
                .and_then(Value::as_str)
                .unwrap_or("");

            results.push(WeatherWarning {
                area_code: area_code.clone(),
                area_name: pref.name.to_string(),
                lat: pref.lat,
                lon: pref.lon,
                warning_type: warning_type_name(code),
                status: status.to_string(),
            });
        }
    }

    Ok(results)
}

// ============================================================================
// Tests
// ============================================================================
