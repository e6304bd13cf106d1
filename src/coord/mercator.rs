use crate::coord::Coordinate;
use crate::index::constants::BASE;
use geo_types::Point;
use std::f64::consts::PI;

/// Projects a WGS84 `(lon, lat)` location onto the GeoHex plane.
///
/// This is a spherical Mercator with a fixed half circumference of [`BASE`]
/// meters. Latitudes of exactly +-90 degrees have no finite image.
///
/// # Example
/// ```
/// use geohex_rs::project;
///
/// let xy = project(&(139.745433, 35.65858));
/// assert!((xy.x() - 15556390.440080063).abs() < 1e-6);
/// ```
pub fn project<C: Coordinate>(coord: &C) -> Point<f64> {
    let x = coord.x() * BASE / 180.0;
    let y = ((90.0 + coord.y()) * PI / 360.0).tan().ln() / (PI / 180.0);
    Point::new(x, y * (BASE / 180.0))
}

/// Inverse of [`project`], returning `(lon, lat)` in degrees.
pub fn unproject(x: f64, y: f64) -> Point<f64> {
    let lat = 180.0 / PI * (2.0 * (((y / BASE) * 180.0) * PI / 180.0).exp().atan() - PI / 2.0);
    let lon = (x / BASE) * 180.0;
    Point::new(lon, lat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project() {
        let xy = project(&(139.745433, 35.65858));

        assert!((xy.x() - 15556390.440080063).abs() < 1e-6);
        assert!((xy.y() - 4253743.631945749).abs() < 1e-6);
    }

    #[test]
    fn test_unproject() {
        let loc = unproject(15556390.440080063, 4253743.631945749);

        assert!((loc.x() - 139.745433).abs() < 1e-9);
        assert!((loc.y() - 35.65858).abs() < 1e-9);
    }

    #[test]
    fn test_origin_and_extent() {
        let origin = project(&(0.0, 0.0));
        assert!(origin.x().abs() < 1e-9);
        assert!(origin.y().abs() < 1e-6);

        let east = project(&(180.0, 0.0));
        assert!((east.x() - BASE).abs() < 1e-6);
    }

    #[test]
    fn test_roundtrip() {
        for &(lon, lat) in &[(-179.5, -84.0), (-73.98, 40.75), (0.0, 0.0), (151.2, -33.86)] {
            let xy = project(&(lon, lat));
            let back = unproject(xy.x(), xy.y());

            assert!((back.x() - lon).abs() < 1e-9);
            assert!((back.y() - lat).abs() < 1e-9);
        }
    }
}
