/// Geographic position
///
/// Longitude and latitude in degrees, altitude in feet. Positions read for
/// 2-D objects (waypoints, markers, parking) keep an altitude of zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub lon: f32,
    pub lat: f32,
    pub alt: f32,
}

impl Pos {
    /// Create a position on the ground plane (altitude zero)
    pub fn new(lon: f32, lat: f32) -> Self {
        Self { lon, lat, alt: 0.0 }
    }

    pub fn with_altitude(lon: f32, lat: f32, alt: f32) -> Self {
        Self { lon, lat, alt }
    }

    /// Check if coordinates are within valid ranges
    ///
    /// Valid ranges: lat ∈ [-90, 90], lon ∈ [-180, 180]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}
