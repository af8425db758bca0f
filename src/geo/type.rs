use geo_traits::{
    CoordTrait, Dimensions, GeometryTrait, GeometryType, RectTrait, UnimplementedGeometryCollection,
    UnimplementedLine, UnimplementedLineString, UnimplementedMultiLineString,
    UnimplementedMultiPoint, UnimplementedMultiPolygon, UnimplementedPoint, UnimplementedPolygon,
    UnimplementedTriangle,
};

use crate::point::Point;

/// A longitude/latitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LngLat {
    /// Longitude, in `[-180, 180]`
    pub lng: f64,
    /// Latitude, in `[-90, 90]`
    pub lat: f64,
}

impl LngLat {
    /// Create a new coordinate from a longitude and a latitude.
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

impl Point for LngLat {
    #[inline]
    fn x(&self) -> f64 {
        self.lng
    }

    #[inline]
    fn y(&self) -> f64 {
        self.lat
    }
}

impl CoordTrait for LngLat {
    type T = f64;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn x(&self) -> Self::T {
        self.lng
    }

    fn y(&self) -> Self::T {
        self.lat
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.lng,
            1 => self.lat,
            _ => panic!("Invalid index of coord"),
        }
    }
}

/// An axis-aligned longitude/latitude box, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBox {
    /// Western edge
    pub min_lng: f64,
    /// Southern edge
    pub min_lat: f64,
    /// Eastern edge
    pub max_lng: f64,
    /// Northern edge
    pub max_lat: f64,
}

impl GeoBox {
    /// The whole globe.
    pub const WORLD: GeoBox = GeoBox {
        min_lng: -180.,
        min_lat: -90.,
        max_lng: 180.,
        max_lat: 90.,
    };

    /// Create a new box from its south-west and north-east corners.
    pub fn new(min_lng: f64, min_lat: f64, max_lng: f64, max_lat: f64) -> Self {
        Self {
            min_lng,
            min_lat,
            max_lng,
            max_lat,
        }
    }

    /// Split this box at `value` along `axis` (0 for longitude, 1 for latitude), returning the
    /// lower and upper halves. Both halves include the split line.
    pub(crate) fn split(&self, axis: usize, value: f64) -> (GeoBox, GeoBox) {
        let mut lower = *self;
        let mut upper = *self;
        if axis == 0 {
            lower.max_lng = value;
            upper.min_lng = value;
        } else {
            lower.max_lat = value;
            upper.min_lat = value;
        }
        (lower, upper)
    }
}

impl GeometryTrait for GeoBox {
    type T = f64;
    type PointType<'b>
        = UnimplementedPoint<f64>
    where
        Self: 'b;
    type LineStringType<'b>
        = UnimplementedLineString<f64>
    where
        Self: 'b;
    type PolygonType<'b>
        = UnimplementedPolygon<f64>
    where
        Self: 'b;
    type MultiPointType<'b>
        = UnimplementedMultiPoint<f64>
    where
        Self: 'b;
    type MultiLineStringType<'b>
        = UnimplementedMultiLineString<f64>
    where
        Self: 'b;
    type MultiPolygonType<'b>
        = UnimplementedMultiPolygon<f64>
    where
        Self: 'b;
    type GeometryCollectionType<'b>
        = UnimplementedGeometryCollection<f64>
    where
        Self: 'b;
    type RectType<'b>
        = GeoBox
    where
        Self: 'b;
    type TriangleType<'b>
        = UnimplementedTriangle<f64>
    where
        Self: 'b;
    type LineType<'b>
        = UnimplementedLine<f64>
    where
        Self: 'b;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn as_type(
        &self,
    ) -> GeometryType<
        '_,
        UnimplementedPoint<f64>,
        UnimplementedLineString<f64>,
        UnimplementedPolygon<f64>,
        UnimplementedMultiPoint<f64>,
        UnimplementedMultiLineString<f64>,
        UnimplementedMultiPolygon<f64>,
        UnimplementedGeometryCollection<f64>,
        GeoBox,
        UnimplementedTriangle<f64>,
        UnimplementedLine<f64>,
    > {
        GeometryType::Rect(self)
    }
}

impl RectTrait for GeoBox {
    type CoordType<'a>
        = LngLat
    where
        Self: 'a;

    fn min(&self) -> Self::CoordType<'_> {
        LngLat::new(self.min_lng, self.min_lat)
    }

    fn max(&self) -> Self::CoordType<'_> {
        LngLat::new(self.max_lng, self.max_lat)
    }
}
