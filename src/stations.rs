/// Static reference registry for InfraScope.
///
/// Defines the river stations, road sections and landslide areas the
/// synthetic generator draws from, and the prefecture centroids used to
/// place JMA area-coded warnings on the map. This is the single source of
/// truth for these tables; other modules should look entries up here
/// rather than hardcoding identifiers or coordinates.

// ---------------------------------------------------------------------------
// River stations
// ---------------------------------------------------------------------------

/// A river gauge station with its MLIT-style alert thresholds, in metres.
pub struct RiverStation {
    pub station_id: &'static str,
    pub name: &'static str,
    pub river: &'static str,
    /// WGS84 latitude.
    pub lat: f64,
    /// WGS84 longitude.
    pub lon: f64,
    pub warning_level_m: f64,
    pub danger_level_m: f64,
}

pub static RIVER_STATIONS: &[RiverStation] = &[
    RiverStation { station_id: "R001", name: "荒川 岩淵水門", river: "荒川", lat: 35.7830, lon: 139.7280, warning_level_m: 4.0, danger_level_m: 7.0 },
    RiverStation { station_id: "R002", name: "多摩川 田園調布", river: "多摩川", lat: 35.5900, lon: 139.6680, warning_level_m: 5.0, danger_level_m: 8.5 },
    RiverStation { station_id: "R003", name: "利根川 栗橋", river: "利根川", lat: 36.1310, lon: 139.7020, warning_level_m: 6.0, danger_level_m: 9.0 },
    RiverStation { station_id: "R004", name: "江戸川 野田", river: "江戸川", lat: 35.9560, lon: 139.8740, warning_level_m: 4.5, danger_level_m: 7.5 },
    RiverStation { station_id: "R005", name: "鶴見川 亀の甲橋", river: "鶴見川", lat: 35.5100, lon: 139.6440, warning_level_m: 3.5, danger_level_m: 5.5 },
    RiverStation { station_id: "R006", name: "淀川 枚方", river: "淀川", lat: 34.8140, lon: 135.6530, warning_level_m: 5.5, danger_level_m: 8.0 },
    RiverStation { station_id: "R007", name: "信濃川 大河津", river: "信濃川", lat: 37.6400, lon: 138.8200, warning_level_m: 6.5, danger_level_m: 10.0 },
    RiverStation { station_id: "R008", name: "筑後川 瀬ノ下", river: "筑後川", lat: 33.2800, lon: 130.5200, warning_level_m: 5.0, danger_level_m: 8.0 },
];

// ---------------------------------------------------------------------------
// Road sections
// ---------------------------------------------------------------------------

/// A road section that may be closed or restricted. No public feed exists
/// for these, so they are only ever produced synthetically.
pub struct RoadSection {
    pub road_id: &'static str,
    pub road_name: &'static str,
    pub section: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub cause: &'static str,
}

pub static ROAD_SECTIONS: &[RoadSection] = &[
    RoadSection { road_id: "RD001", road_name: "国道16号", section: "八王子〜相模原", lat: 35.6320, lon: 139.3380, cause: "土砂崩れ" },
    RoadSection { road_id: "RD002", road_name: "国道246号", section: "厚木〜秦野", lat: 35.3960, lon: 139.2770, cause: "冠水" },
    RoadSection { road_id: "RD003", road_name: "首都高速5号線", section: "板橋〜戸田", lat: 35.7920, lon: 139.6810, cause: "路面凍結" },
    RoadSection { road_id: "RD004", road_name: "国道1号", section: "箱根峠付近", lat: 35.2000, lon: 139.0200, cause: "土砂崩れ" },
    RoadSection { road_id: "RD005", road_name: "名神高速", section: "関ヶ原〜米原", lat: 35.3700, lon: 136.4600, cause: "積雪" },
];

// ---------------------------------------------------------------------------
// Landslide warning areas
// ---------------------------------------------------------------------------

pub struct LandslideArea {
    pub area_id: &'static str,
    pub name: &'static str,
    pub prefecture: &'static str,
    pub lat: f64,
    pub lon: f64,
    /// Typical risk score; the generator scatters around this.
    pub base_risk: f64,
}

pub static LANDSLIDE_AREAS: &[LandslideArea] = &[
    LandslideArea { area_id: "LS001", name: "箱根町強羅地区", prefecture: "神奈川県", lat: 35.2470, lon: 139.0590, base_risk: 0.7 },
    LandslideArea { area_id: "LS002", name: "伊豆大島北部", prefecture: "東京都", lat: 34.7840, lon: 139.3530, base_risk: 0.6 },
    LandslideArea { area_id: "LS003", name: "奥多摩町日原地区", prefecture: "東京都", lat: 35.8530, lon: 139.0200, base_risk: 0.5 },
    LandslideArea { area_id: "LS004", name: "広島市安佐北区", prefecture: "広島県", lat: 34.5100, lon: 132.4800, base_risk: 0.8 },
    LandslideArea { area_id: "LS005", name: "熊本県南阿蘇村", prefecture: "熊本県", lat: 32.8800, lon: 131.0500, base_risk: 0.75 },
    LandslideArea { area_id: "LS006", name: "奈良県十津川村", prefecture: "奈良県", lat: 34.0600, lon: 135.7200, base_risk: 0.65 },
];

// ---------------------------------------------------------------------------
// Prefecture centroids
// ---------------------------------------------------------------------------

/// A prefecture keyed by its 2-digit JMA code (the leading two digits of
/// every JMA area code inside it).
pub struct Prefecture {
    pub code: &'static str,
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

pub static PREFECTURES: &[Prefecture] = &[
    Prefecture { code: "01", name: "北海道", lat: 43.06, lon: 141.35 },
    Prefecture { code: "02", name: "青森県", lat: 40.82, lon: 140.74 },
    Prefecture { code: "03", name: "岩手県", lat: 39.70, lon: 141.15 },
    Prefecture { code: "04", name: "宮城県", lat: 38.27, lon: 140.87 },
    Prefecture { code: "05", name: "秋田県", lat: 39.72, lon: 140.10 },
    Prefecture { code: "06", name: "山形県", lat: 38.24, lon: 140.34 },
    Prefecture { code: "07", name: "福島県", lat: 37.75, lon: 140.47 },
    Prefecture { code: "08", name: "茨城県", lat: 36.34, lon: 140.45 },
    Prefecture { code: "09", name: "栃木県", lat: 36.57, lon: 139.88 },
    Prefecture { code: "10", name: "群馬県", lat: 36.39, lon: 139.06 },
    Prefecture { code: "11", name: "埼玉県", lat: 35.86, lon: 139.65 },
    Prefecture { code: "12", name: "千葉県", lat: 35.61, lon: 140.12 },
    Prefecture { code: "13", name: "東京都", lat: 35.69, lon: 139.69 },
    Prefecture { code: "14", name: "神奈川県", lat: 35.45, lon: 139.64 },
    Prefecture { code: "15", name: "新潟県", lat: 37.90, lon: 139.02 },
    Prefecture { code: "16", name: "富山県", lat: 36.70, lon: 137.21 },
    Prefecture { code: "17", name: "石川県", lat: 36.59, lon: 136.63 },
    Prefecture { code: "18", name: "福井県", lat: 36.07, lon: 136.22 },
    Prefecture { code: "19", name: "山梨県", lat: 35.66, lon: 138.57 },
    Prefecture { code: "20", name: "長野県", lat: 36.23, lon: 138.18 },
    Prefecture { code: "21", name: "岐阜県", lat: 35.39, lon: 136.72 },
    Prefecture { code: "22", name: "静岡県", lat: 34.98, lon: 138.38 },
    Prefecture { code: "23", name: "愛知県", lat: 35.18, lon: 136.91 },
    Prefecture { code: "24", name: "三重県", lat: 34.73, lon: 136.51 },
    Prefecture { code: "25", name: "滋賀県", lat: 35.00, lon: 135.87 },
    Prefecture { code: "26", name: "京都府", lat: 35.02, lon: 135.76 },
    Prefecture { code: "27", name: "大阪府", lat: 34.69, lon: 135.52 },
    Prefecture { code: "28", name: "兵庫県", lat: 34.69, lon: 135.18 },
    Prefecture { code: "29", name: "奈良県", lat: 34.69, lon: 135.83 },
    Prefecture { code: "30", name: "和歌山県", lat: 34.23, lon: 135.17 },
    Prefecture { code: "31", name: "鳥取県", lat: 35.50, lon: 134.24 },
    Prefecture { code: "32", name: "島根県", lat: 35.47, lon: 133.05 },
    Prefecture { code: "33", name: "岡山県", lat: 34.66, lon: 133.93 },
    Prefecture { code: "34", name: "広島県", lat: 34.40, lon: 132.46 },
    Prefecture { code: "35", name: "山口県", lat: 34.19, lon: 131.47 },
    Prefecture { code: "36", name: "徳島県", lat: 34.07, lon: 134.56 },
    Prefecture { code: "37", name: "香川県", lat: 34.34, lon: 134.04 },
    Prefecture { code: "38", name: "愛媛県", lat: 33.84, lon: 132.77 },
    Prefecture { code: "39", name: "高知県", lat: 33.56, lon: 133.53 },
    Prefecture { code: "40", name: "福岡県", lat: 33.61, lon: 130.42 },
    Prefecture { code: "41", name: "佐賀県", lat: 33.25, lon: 130.30 },
    Prefecture { code: "42", name: "長崎県", lat: 32.74, lon: 129.87 },
    Prefecture { code: "43", name: "熊本県", lat: 32.79, lon: 130.74 },
    Prefecture { code: "44", name: "大分県", lat: 33.24, lon: 131.61 },
    Prefecture { code: "45", name: "宮崎県", lat: 31.91, lon: 131.42 },
    Prefecture { code: "46", name: "鹿児島県", lat: 31.56, lon: 130.56 },
    Prefecture { code: "47", name: "沖縄県", lat: 26.21, lon: 127.68 },
];

/// Looks up the prefecture containing a JMA area code such as "130010".
/// Returns `None` for codes shorter than two characters or unknown prefixes.
pub fn find_prefecture(area_code: &str) -> Option<&'static Prefecture> {
    let prefix = area_code.get(..2)?;
    PREFECTURES.iter().find(|p| p.code == prefix)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
