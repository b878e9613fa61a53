use serde::{Deserialize, Serialize};

use crate::models::location::GeoPoint;

/// Statute miles per degree of arc (60 nautical miles).
const MILES_PER_DEGREE: f64 = 60.0 * 1.1515;
const KM_PER_MILE: f64 = 1.609344;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DistanceUnit {
    #[default]
    #[serde(rename = "mi")]
    Miles,
    #[serde(rename = "km")]
    Kilometers,
}

impl DistanceUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            DistanceUnit::Miles => "mi",
            DistanceUnit::Kilometers => "km",
        }
    }
}

/// Great-circle distance by the spherical law of cosines. Identical points
/// are exactly zero; acos never sees an argument outside [-1, 1].
pub fn calculate_distance_value(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    unit: DistanceUnit,
) -> f64 {
    if lat1 == lat2 && lon1 == lon2 {
        return 0.0;
    }

    let rad_lat1 = lat1.to_radians();
    let rad_lat2 = lat2.to_radians();
    let theta = (lon1 - lon2).to_radians();

    let cosine = rad_lat1.sin() * rad_lat2.sin() + rad_lat1.cos() * rad_lat2.cos() * theta.cos();
    let miles = cosine.clamp(-1.0, 1.0).acos().to_degrees() * MILES_PER_DEGREE;

    match unit {
        DistanceUnit::Miles => miles,
        DistanceUnit::Kilometers => miles * KM_PER_MILE,
    }
}

pub fn distance_between(a: &GeoPoint, b: &GeoPoint, unit: DistanceUnit) -> f64 {
    calculate_distance_value(a.lat, a.lng, b.lat, b.lng, unit)
}

pub fn format_coordinates(lat: f64, lng: f64) -> String {
    // `+ 0.0` folds negative zero into zero
    format!("{:.6}, {:.6}", lat + 0.0, lng + 0.0)
}

pub fn format_address(
    address: &str,
    city: &str,
    state: &str,
    zip_code: &str,
    country: Option<&str>,
) -> String {
    format!("{address}, {city}, {state} {zip_code}, {}", country.unwrap_or("USA"))
}
