/// Core data types for the InfraScope risk service.
///
/// This module defines the shared domain model imported by all other modules.
/// Observation records are immutable snapshots of one refresh cycle; the
/// engine and the summary generator only ever borrow them.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

/// JST offset in seconds. All observation timestamps are rendered in JST.
pub const JST_OFFSET_SECS: i32 = 9 * 3600;

/// Returns the JST fixed offset (+09:00).
pub fn jst() -> FixedOffset {
    FixedOffset::east_opt(JST_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Current wall-clock time in JST.
pub fn jst_now() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&jst())
}

// ---------------------------------------------------------------------------
// Status enums
// ---------------------------------------------------------------------------

/// River gauge status, derived from the water level against the station's
/// thresholds (see `classify::classify_river_status`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiverStatus {
    Normal,
    Warning,
    Danger,
}

impl RiverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiverStatus::Normal => "normal",
            RiverStatus::Warning => "warning",
            RiverStatus::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadStatus {
    Closed,
    Restricted,
}

impl RoadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoadStatus::Closed => "closed",
            RoadStatus::Restricted => "restricted",
        }
    }

    /// Japanese display label used in the situation report.
    pub fn label(&self) -> &'static str {
        match self {
            RoadStatus::Closed => "通行止め",
            RoadStatus::Restricted => "通行規制",
        }
    }
}

/// Landslide warning level, in ascending order of severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandslideLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl LandslideLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LandslideLevel::Low => "low",
            LandslideLevel::Moderate => "moderate",
            LandslideLevel::High => "high",
            LandslideLevel::VeryHigh => "very_high",
        }
    }

    /// `high` and `very_high` areas are reported individually.
    pub fn is_high_risk(&self) -> bool {
        matches!(self, LandslideLevel::High | LandslideLevel::VeryHigh)
    }
}

/// Where a record came from: the live JMA feed or the synthetic generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceTag {
    Live,
    Mock,
}

/// Composite risk severity, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    /// Classifies an overall score. Boundaries are inclusive on the
    /// lower edge: 0.75 is critical, 0.5 high, 0.25 moderate.
    pub fn from_score(overall: f64) -> Self {
        if overall >= 0.75 {
            RiskLevel::Critical
        } else if overall >= 0.5 {
            RiskLevel::High
        } else if overall >= 0.25 {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

// ---------------------------------------------------------------------------
// Observation records
// ---------------------------------------------------------------------------

/// One river gauge reading.
///
/// `status` must agree with the thresholds; providers build it through
/// `classify::classify_river_status` and the engine trusts it as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiverObservation {
    pub station_id: String,
    pub name: String,
    pub river: String,
    pub lat: f64,
    pub lon: f64,
    pub water_level_m: f64,
    pub warning_level_m: f64,
    pub danger_level_m: f64,
    pub status: RiverStatus,
    pub observed_at: DateTime<FixedOffset>,
    pub source: SourceTag,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadObservation {
    pub road_id: String,
    pub road_name: String,
    pub section: String,
    pub lat: f64,
    pub lon: f64,
    /// Free text, e.g. "土砂崩れ".
    pub cause: String,
    pub status: RoadStatus,
    pub since: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandslideObservation {
    pub area_id: String,
    pub name: String,
    pub prefecture: String,
    pub lat: f64,
    pub lon: f64,
    /// In [0.0, 1.0].
    pub risk_score: f64,
    pub warning_level: LandslideLevel,
    pub observed_at: DateTime<FixedOffset>,
    pub source: SourceTag,
}

/// An active JMA weather warning for a prefecture. Informational only;
/// not consumed by the risk engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherWarning {
    pub area_code: String,
    pub area_name: String,
    pub lat: f64,
    pub lon: f64,
    pub warning_type: String,
    pub status: String,
}

// ---------------------------------------------------------------------------
// Query and result types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskQuery {
    pub lat: f64,
    pub lon: f64,
}

impl RiskQuery {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    #[serde(flatten)]
    pub query: RiskQuery,
    pub overall_score: f64,
    pub river_risk: f64,
    pub road_risk: f64,
    pub landslide_risk: f64,
    pub level: RiskLevel,
    /// River factors first, then roads, then landslides.
    pub contributing_factors: Vec<String>,
}

/// Counts behind the situation report, for consumers that don't want to
/// parse the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SnapshotCounts {
    pub river_stations: usize,
    pub danger_rivers: usize,
    pub warning_rivers: usize,
    pub road_closures: usize,
    pub road_restrictions: usize,
    pub landslide_high_risk_areas: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary: String,
    pub generated_at: DateTime<FixedOffset>,
    pub data_snapshot: SnapshotCounts,
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// All three observation collections from one refresh cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub rivers: Vec<RiverObservation>,
    pub roads: Vec<RoadObservation>,
    pub landslides: Vec<LandslideObservation>,
}

impl Snapshot {
    pub fn risk_at(&self, query: RiskQuery) -> RiskResult {
        crate::risk::compute_risk(query, &self.rivers, &self.roads, &self.landslides)
    }

    pub fn summary(&self) -> SummaryResult {
        crate::summary::generate_summary(&self.rivers, &self.roads, &self.landslides)
    }
}
