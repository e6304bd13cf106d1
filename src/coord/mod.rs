mod mercator;

pub use mercator::{project, unproject};

use geo_types::Point;

/// Trait for types that can provide a WGS84 location.
///
/// Implemented for `(f64, f64)` tuples and `geo_types::Point<f64>`, both read
/// as `(longitude, latitude)`. This allows functions to accept either type.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude).
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}
