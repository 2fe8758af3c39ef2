/// Great-circle distance and proximity decay.

/// Mean Earth radius used for all distance computations.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Observations at or beyond this distance contribute nothing.
pub const PROXIMITY_THRESHOLD_KM: f64 = 30.0;

/// Returns the haversine distance in kilometres between two points given
/// in degrees. Defined for any finite input, geographically meaningful or not.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Linear decay from 1 at distance 0 to 0 at `PROXIMITY_THRESHOLD_KM`.
pub fn proximity_weight(distance_km: f64) -> f64 {
    if distance_km >= PROXIMITY_THRESHOLD_KM {
        return 0.0;
    }
    (1.0 - distance_km / PROXIMITY_THRESHOLD_KM).max(0.0)
}
