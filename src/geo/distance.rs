//! Great-circle distance helpers.
//!
//! Most of the search works on the haversine of the central angle, `hav(θ) = sin²(θ / 2)`, rather
//! than on distances: it is monotonic in the true distance over `[0, π]`, so comparisons are valid
//! without the inverse trigonometry.

use crate::geo::{GeoBox, EARTH_RADIUS_KM};

pub(crate) const RAD: f64 = std::f64::consts::PI / 180.;

/// Great-circle distance in kilometers between two longitude/latitude pairs in degrees.
///
/// ```
/// use kdbush::geo::distance;
///
/// // Jakarta to Surabaya
/// let d = distance(106.8456, -6.2088, 112.7521, -7.2575);
/// assert!((d - 663.).abs() < 5.);
/// ```
pub fn distance(lng1: f64, lat1: f64, lng2: f64, lat2: f64) -> f64 {
    let h = haver_sin_dist(lng1, lat1, lng2, lat2, f64::cos(lat1 * RAD));
    // rounding can push h a hair above 1 for antipodal points
    2. * EARTH_RADIUS_KM * f64::asin(f64::sqrt(h.min(1.)))
}

#[inline]
pub(crate) fn haver_sin(theta: f64) -> f64 {
    let s = f64::sin(theta / 2.);
    s * s
}

#[inline]
fn haver_sin_dist_partial(haver_sin_dlng: f64, cos_lat1: f64, lat1: f64, lat2: f64) -> f64 {
    cos_lat1 * f64::cos(lat2 * RAD) * haver_sin_dlng + haver_sin((lat1 - lat2) * RAD)
}

/// The haversine of the central angle between two points. `cos_lat1` is `cos(lat1)`, hoisted out
/// because the search calls this many times with the same query point.
#[inline]
pub(crate) fn haver_sin_dist(lng1: f64, lat1: f64, lng2: f64, lat2: f64, cos_lat1: f64) -> f64 {
    let haver_sin_dlng = haver_sin((lng1 - lng2) * RAD);
    haver_sin_dist_partial(haver_sin_dlng, cos_lat1, lat1, lat2)
}

/// A lower bound for [`haver_sin_dist`] from a location to any point inside `bbox`.
pub(crate) fn box_dist(lng: f64, lat: f64, cos_lat: f64, bbox: &GeoBox) -> f64 {
    // query point is between minimum and maximum longitudes
    if lng >= bbox.min_lng && lng <= bbox.max_lng {
        if lat < bbox.min_lat {
            return haver_sin((lat - bbox.min_lat) * RAD);
        }
        if lat > bbox.max_lat {
            return haver_sin((lat - bbox.max_lat) * RAD);
        }
        return 0.;
    }

    // query point is west or east of the bounding box;
    // calculate the extremum for great circle distance from query point to the closest longitude
    let haver_sin_dlng = f64::min(
        haver_sin((lng - bbox.min_lng) * RAD),
        haver_sin((lng - bbox.max_lng) * RAD),
    );
    let extremum_lat = vertex_lat(lat, haver_sin_dlng);

    // if extremum is inside the box, return the distance to it
    if extremum_lat > bbox.min_lat && extremum_lat < bbox.max_lat {
        return haver_sin_dist_partial(haver_sin_dlng, cos_lat, lat, extremum_lat);
    }

    // otherwise return the distance to one of the bbox corners (whichever is closest)
    f64::min(
        haver_sin_dist_partial(haver_sin_dlng, cos_lat, lat, bbox.min_lat),
        haver_sin_dist_partial(haver_sin_dlng, cos_lat, lat, bbox.max_lat),
    )
}

/// Latitude of the point on the meridian `dlng` away (given as its haversine) where the distance
/// to a point at `lat` has its extremum.
fn vertex_lat(lat: f64, haver_sin_dlng: f64) -> f64 {
    let cos_dlng = 1. - 2. * haver_sin_dlng;
    if cos_dlng <= 0. {
        return if lat > 0. { 90. } else { -90. };
    }
    f64::atan(f64::tan(lat * RAD) / cos_dlng) / RAD
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn haver_sin_basics() {
        assert_eq!(haver_sin(0.), 0.);
        assert!((haver_sin(std::f64::consts::PI) - 1.).abs() < 1e-12);
        // periodic, so only meaningful up to half a turn
        assert!((haver_sin(3. * std::f64::consts::PI) - 1.).abs() < 1e-12);
    }

    #[test]
    fn distance_is_symmetric_and_zero_on_self() {
        assert_eq!(distance(12.5, 41.9, 12.5, 41.9), 0.);
        let a = distance(-74.0, 40.7, -0.1, 51.5);
        let b = distance(-0.1, 51.5, -74.0, 40.7);
        assert!((a - b).abs() < 1e-6);
        // New York to London
        assert!((a - 5570.).abs() < 30.);
    }

    #[test]
    fn antipodes() {
        let d = distance(0., 0., 180., 0.);
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn box_dist_inside_and_beside() {
        let bbox = GeoBox::new(10., 10., 20., 20.);
        let cos_lat = |lat: f64| f64::cos(lat * RAD);

        assert_eq!(box_dist(15., 15., cos_lat(15.), &bbox), 0.);
        // due south of the box: pure latitude gap
        assert!((box_dist(15., 0., cos_lat(0.), &bbox) - haver_sin(10. * RAD)).abs() < 1e-15);
        // due north of the box
        assert!((box_dist(15., 30., cos_lat(30.), &bbox) - haver_sin(10. * RAD)).abs() < 1e-15);
    }

    #[test]
    fn box_dist_never_overestimates() {
        let boxes = [
            GeoBox::new(10., 10., 20., 20.),
            GeoBox::new(-170., -80., -160., 75.),
            GeoBox::new(0., -90., 180., 90.),
            GeoBox::new(-30., 60., -20., 62.),
        ];
        let queries = [(0., 0.), (25., 15.), (-100., 45.), (170., -60.), (-25., 89.)];

        for bbox in boxes.iter() {
            for &(lng, lat) in queries.iter() {
                let bound = box_dist(lng, lat, f64::cos(lat * RAD), bbox);
                for i in 0..=20 {
                    for j in 0..=20 {
                        let p_lng = bbox.min_lng + (bbox.max_lng - bbox.min_lng) * i as f64 / 20.;
                        let p_lat = bbox.min_lat + (bbox.max_lat - bbox.min_lat) * j as f64 / 20.;
                        let d = haver_sin_dist(lng, lat, p_lng, p_lat, f64::cos(lat * RAD));
                        assert!(
                            bound <= d + 1e-12,
                            "bound {bound} > {d} for ({lng}, {lat}) to ({p_lng}, {p_lat})"
                        );
                    }
                }
            }
        }
    }
}
