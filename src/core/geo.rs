use serde::{Deserialize, Serialize};

const MAX_LATITUDE: f64 = 90.0;
const MAX_LONGITUDE: f64 = 180.0;

/// Represents a geographical coordinate with latitude and longitude.
///
/// The hosted SDK takes centers as `[lng, lat]` arrays; use
/// [`LatLng::to_lng_lat`] and [`LatLng::from_lng_lat`] at that boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Builds a coordinate from the SDK's `[lng, lat]` ordering.
    pub const fn from_lng_lat(pair: [f64; 2]) -> Self {
        Self::new(pair[1], pair[0])
    }

    pub const fn to_lng_lat(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && self.lat.abs() <= MAX_LATITUDE
            && self.lng.abs() <= MAX_LONGITUDE
    }
}

impl Default for LatLng {
    fn default() -> Self {
        crate::core::constants::DEFAULT_CENTER
    }
}

impl From<[f64; 2]> for LatLng {
    fn from(pair: [f64; 2]) -> Self {
        Self::from_lng_lat(pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lng_lat_ordering() {
        let tokyo = LatLng::from_lng_lat([139.7671, 35.6812]);
        assert_eq!(tokyo.lat, 35.6812);
        assert_eq!(tokyo.lng, 139.7671);
        assert_eq!(tokyo.to_lng_lat(), [139.7671, 35.6812]);
    }

    #[test]
    fn test_validity() {
        assert!(LatLng::default().is_valid());
        assert!(!LatLng::new(91.0, 0.0).is_valid());
        assert!(!LatLng::new(0.0, -180.5).is_valid());
        assert!(!LatLng::new(f64::NAN, 0.0).is_valid());
    }
}
