use num_traits::ToPrimitive;

/// Anything that exposes a pair of planar coordinates.
///
/// For geographic queries `x` is the longitude and `y` is the latitude, both in degrees.
pub trait Point {
    /// The x coordinate (longitude).
    fn x(&self) -> f64;

    /// The y coordinate (latitude).
    fn y(&self) -> f64;
}

impl<P: Point + ?Sized> Point for &P {
    #[inline]
    fn x(&self) -> f64 {
        (**self).x()
    }

    #[inline]
    fn y(&self) -> f64 {
        (**self).y()
    }
}

// Values that don't fit in an f64 become NaN, which never matches a query.
impl<T: ToPrimitive + Copy> Point for (T, T) {
    #[inline]
    fn x(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::NAN)
    }

    #[inline]
    fn y(&self) -> f64 {
        self.1.to_f64().unwrap_or(f64::NAN)
    }
}

impl<T: ToPrimitive + Copy> Point for [T; 2] {
    #[inline]
    fn x(&self) -> f64 {
        self[0].to_f64().unwrap_or(f64::NAN)
    }

    #[inline]
    fn y(&self) -> f64 {
        self[1].to_f64().unwrap_or(f64::NAN)
    }
}

#[cfg(test)]
mod test {
    use super::Point;

    #[test]
    fn numeric_pairs() {
        assert_eq!((3_i32, -4_i32).x(), 3.);
        assert_eq!((3_i32, -4_i32).y(), -4.);
        assert_eq!([1.5_f32, 2.5_f32].y(), 2.5);
        let p = (7_u16, 8_u16);
        assert_eq!((&p).x(), 7.);
    }
}
