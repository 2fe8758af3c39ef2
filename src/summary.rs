/// Situation summary generation.
///
/// Renders a four-section Japanese report (rivers, roads, landslides,
/// overall assessment) from one snapshot, plus the counts behind it.
///
/// # Clock injection
/// `generate_summary_at` takes the generation time as a parameter so tests
/// stay deterministic; `generate_summary` uses the current JST time.

use chrono::{DateTime, FixedOffset};

use crate::model::{
    jst_now, LandslideObservation, RiverObservation, RiverStatus, RoadObservation, RoadStatus,
    SnapshotCounts, SourceTag, SummaryResult,
};

pub const REPORT_TITLE: &str = "【InfraScope 状況サマリー】";

pub const SOURCE_LIVE_NOTE: &str = "  ※ データソース: 気象庁 防災情報API（リアルタイム）";
pub const SOURCE_MOCK_NOTE: &str = "  ※ データソース: モックデータ（デモ用）";

pub const ASSESSMENT_WIDESPREAD: &str =
    "現在、複数の重大リスクが同時発生しています。広域的な警戒が必要です。";
pub const ASSESSMENT_LOCALIZED: &str =
    "一部地域で注意が必要な状況です。最新情報を継続的に確認してください。";
pub const ASSESSMENT_CLEAR: &str =
    "現時点で重大なリスクは検出されていません。引き続き監視を継続します。";

/// Picks the overall assessment from the number of severe items
/// (danger rivers + closed roads + high-risk landslide areas).
pub fn assessment_for(critical_count: usize) -> &'static str {
    match critical_count {
        0 => ASSESSMENT_CLEAR,
        1 | 2 => ASSESSMENT_LOCALIZED,
        _ => ASSESSMENT_WIDESPREAD,
    }
}

pub fn generate_summary(
    rivers: &[RiverObservation],
    roads: &[RoadObservation],
    landslides: &[LandslideObservation],
) -> SummaryResult {
    generate_summary_at(rivers, roads, landslides, jst_now())
}

pub fn generate_summary_at(
    rivers: &[RiverObservation],
    roads: &[RoadObservation],
    landslides: &[LandslideObservation],
    now: DateTime<FixedOffset>,
) -> SummaryResult {
    let danger: Vec<&RiverObservation> =
        rivers.iter().filter(|r| r.status == RiverStatus::Danger).collect();
    let warning: Vec<&RiverObservation> =
        rivers.iter().filter(|r| r.status == RiverStatus::Warning).collect();
    let closed = roads.iter().filter(|r| r.status == RoadStatus::Closed).count();
    let restricted = roads.iter().filter(|r| r.status == RoadStatus::Restricted).count();
    let high_risk: Vec<&LandslideObservation> =
        landslides.iter().filter(|a| a.warning_level.is_high_risk()).collect();

    let counts = SnapshotCounts {
        river_stations: rivers.len(),
        danger_rivers: danger.len(),
        warning_rivers: warning.len(),
        road_closures: closed,
        road_restrictions: restricted,
        landslide_high_risk_areas: high_risk.len(),
    };

    let mut lines: Vec<String> = vec![REPORT_TITLE.to_string(), String::new()];

    // Rivers
    lines.push(format!(
        "■ 河川水位: 観測局{}箇所中、危険{}箇所、警戒{}箇所",
        counts.river_stations, counts.danger_rivers, counts.warning_rivers
    ));
    for r in &danger {
        lines.push(format!(
            "  - {}（{}）: 水位 {:.2}m （危険水位 {:.2}m） ⚠ 危険",
            r.name, r.river, r.water_level_m, r.danger_level_m
        ));
    }
    for r in &warning {
        lines.push(format!(
            "  - {}（{}）: 水位 {:.2}m （警戒水位 {:.2}m） 警戒",
            r.name, r.river, r.water_level_m, r.warning_level_m
        ));
    }
    lines.push(String::new());

    // The first river record decides the source note; no rivers means mock.
    let live = rivers.first().map(|r| r.source) == Some(SourceTag::Live);
    lines.push(if live { SOURCE_LIVE_NOTE } else { SOURCE_MOCK_NOTE }.to_string());
    lines.push(String::new());

    // Roads: every road is listed, not just closures
    lines.push(format!(
        "■ 道路状況: 通行止め{}箇所、通行規制{}箇所",
        counts.road_closures, counts.road_restrictions
    ));
    for rd in roads {
        lines.push(format!(
            "  - {} {}: {}による{}",
            rd.road_name,
            rd.section,
            rd.cause,
            rd.status.label()
        ));
    }
    lines.push(String::new());

    // Landslides
    lines.push(format!(
        "■ 土砂災害警戒: 警戒区域{}箇所中、高リスク{}箇所",
        landslides.len(),
        counts.landslide_high_risk_areas
    ));
    for a in &high_risk {
        lines.push(format!(
            "  - {}（{}）: リスクスコア {:.2}（{}）",
            a.name,
            a.prefecture,
            a.risk_score,
            a.warning_level.as_str()
        ));
    }
    lines.push(String::new());

    let critical_count =
        counts.danger_rivers + counts.road_closures + counts.landslide_high_risk_areas;
    lines.push(format!("■ 総合評価: {}", assessment_for(critical_count)));

    SummaryResult {
        summary: lines.join("\n"),
        generated_at: now,
        data_snapshot: counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assessment_thresholds() {
        assert_eq!(assessment_for(0), ASSESSMENT_CLEAR);
        assert_eq!(assessment_for(1), ASSESSMENT_LOCALIZED);
        assert_eq!(assessment_for(2), ASSESSMENT_LOCALIZED);
        assert_eq!(assessment_for(3), ASSESSMENT_WIDESPREAD);
        assert_eq!(assessment_for(40), ASSESSMENT_WIDESPREAD);
    }

    #[test]
    fn test_empty_snapshot_report() {
        let now = jst_now();
        let result = generate_summary_at(&[], &[], &[], now);
        assert_eq!(result.generated_at, now);
        assert_eq!(result.data_snapshot, SnapshotCounts::default());
        assert!(result.summary.starts_with(REPORT_TITLE));
        assert!(result.summary.contains(SOURCE_MOCK_NOTE));
        assert!(result.summary.ends_with(ASSESSMENT_CLEAR));
    }
}
