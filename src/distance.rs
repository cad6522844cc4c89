//! Great-circle distance between two Placekeys' decoded centroids.

use h3o::LatLng;

/// Mean Earth radius, in kilometers, used for the Haversine formula. Fixed
/// at the value the original implementation uses rather than `h3o`'s own
/// (more precise) radius constant.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two `(lat, lng)` points in degrees, in
/// meters.
pub(crate) fn haversine_m(
    lat1: f64,
    lng1: f64,
    lat2: f64,
    lng2: f64,
) -> f64 {
    let a = LatLng::new(lat1, lng1)
        .expect("a decoded cell centroid is always a valid coordinate");
    let b = LatLng::new(lat2, lng2)
        .expect("a decoded cell centroid is always a valid coordinate");

    a.distance_rads(b) * EARTH_RADIUS_KM * 1000.0
}

#[cfg(test)]
#[path = "./distance_tests.rs"]
mod tests;
