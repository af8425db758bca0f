//! Geographic queries over a [`KDBush`][crate::KDBush] index whose points are longitude/latitude
//! pairs in degrees (x = longitude, y = latitude).
//!
//! Distances are great-circle distances on a sphere of radius [`EARTH_RADIUS_KM`]. Longitudes are
//! not wrapped at the antimeridian: a query near ±180° only sees neighbors on its own side.

#![warn(missing_docs)]

mod around;
mod distance;
mod r#type;

pub use around::around;
pub use distance::distance;
pub use r#type::{GeoBox, LngLat};

/// Mean Earth radius, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;
