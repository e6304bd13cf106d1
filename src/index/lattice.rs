use crate::coord::{Coordinate, project, unproject};
use crate::error::GeoHexError;
use crate::index::constants::{BASE, K, MAX_LEVEL, MIN_LEVEL, POW3};
use geo_types::Point;
use serde::{Deserialize, Serialize};

/// A cell address in the oblique hexagonal lattice of one level.
///
/// `reversed` records that the axes were swapped while folding a seam cell
/// into its canonical order. Two coordinates are equal only when both axes
/// and the flag match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LatticeCoord {
    pub x: i64,
    pub y: i64,
    pub reversed: bool,
}

impl LatticeCoord {
    pub fn new(x: i64, y: i64) -> Self {
        Self {
            x,
            y,
            reversed: false,
        }
    }
}

pub(crate) fn check_level(level: u8) -> Result<(), GeoHexError> {
    if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
        return Err(GeoHexError::LevelOutOfRange(level));
    }
    Ok(())
}

/// Edge length of a cell at `level`, in projected meters.
///
/// Each level is exactly a third of the one above it.
///
/// # Example
/// ```
/// use geohex_rs::cell_size;
///
/// let size = cell_size(1).unwrap();
/// assert!((size - 247376.6461728395).abs() < 1e-6);
/// ```
pub fn cell_size(level: u8) -> Result<f64, GeoHexError> {
    check_level(level)?;
    Ok(BASE / POW3[level as usize + 3] as f64)
}

/// Width of the valid lattice diamond at `level`: `3^(level + 2)`.
///
/// Levels past the power table have no bound and return `i64::MAX`.
pub fn max_hsteps(level: u8) -> i64 {
    POW3.get(level as usize + 2).copied().unwrap_or(i64::MAX)
}

/// Lattice units along both axes for a level: `(unit_x, unit_y)`.
fn units(level: u8) -> Result<(f64, f64), GeoHexError> {
    let size = cell_size(level)?;
    Ok((6.0 * size, 6.0 * size * *K))
}

/// Folds a raw lattice pair into the canonical diamond of `level`.
///
/// Pairs straddling the seam (`|x - y| == 3^(level + 2)` with `x > y`) are
/// swapped into smaller-first order and flagged `reversed`. Pairs beyond the
/// diamond are translated back across the seam by one period.
///
/// # Example
/// ```
/// use geohex_rs::normalize_lattice;
///
/// let coord = normalize_lattice(15556390, 4253743, 1);
/// assert_eq!((coord.x, coord.y, coord.reversed), (15556363, 4253770, false));
/// ```
pub fn normalize_lattice(x: i64, y: i64, level: u8) -> LatticeCoord {
    let max_steps = max_hsteps(level);
    let steps = x.abs_diff(y);
    let bound = max_steps.unsigned_abs();

    if steps == bound && x > y {
        LatticeCoord {
            x: y,
            y: x,
            reversed: true,
        }
    } else if steps > bound {
        // One period back across the seam; saturates at the i64 range.
        if x > y {
            LatticeCoord::new(x.saturating_sub(max_steps), y.saturating_add(max_steps))
        } else {
            LatticeCoord::new(x.saturating_add(max_steps), y.saturating_sub(max_steps))
        }
    } else {
        LatticeCoord::new(x, y)
    }
}

fn in_upper_triangle(qx: f64, qy: f64) -> bool {
    qy > -qx + 1.0 && qy < 2.0 * qx && qy > 0.5 * qx
}

fn in_lower_triangle(qx: f64, qy: f64) -> bool {
    qy < -qx + 1.0 && qy > (2.0 * qx) - 1.0 && qy < (0.5 * qx) + 0.5
}

/// Converts a lattice position to an integer step, rejecting NaN, infinities
/// and values outside the i64 range.
fn lattice_step(v: f64) -> Option<i64> {
    (v.is_finite() && v >= i64::MIN as f64 && v < i64::MAX as f64).then_some(v as i64)
}

/// Finds the lattice cell containing a WGS84 `(lon, lat)` location.
///
/// # Errors
///
/// - [`GeoHexError::LevelOutOfRange`] if the level is outside 1-15
/// - [`GeoHexError::InvalidLocation`] if the location has no finite lattice
///   position (NaN input, latitudes beyond the poles, or coordinates too large
///   for an i64 lattice step)
pub fn location_to_lattice<C: Coordinate>(
    coord: &C,
    level: u8,
) -> Result<LatticeCoord, GeoHexError> {
    let (unit_x, unit_y) = units(level)?;
    let k = *K;

    let xy = project(coord);
    let pos_x = (xy.x() + xy.y() / k) / unit_x;
    let pos_y = (xy.y() - k * xy.x()) / unit_y;

    let x0 = pos_x.floor();
    let y0 = pos_y.floor();
    let qx = pos_x - x0;
    let qy = pos_y - y0;

    // Rounding alone misplaces points near the skewed cell edges.
    let (hx, hy) = if in_upper_triangle(qx, qy) {
        (x0 + 1.0, y0 + 1.0)
    } else if in_lower_triangle(qx, qy) {
        (x0, y0)
    } else {
        (pos_x.round(), pos_y.round())
    };

    let (Some(hx), Some(hy)) = (lattice_step(hx), lattice_step(hy)) else {
        return Err(GeoHexError::InvalidLocation(format!(
            "({}, {}) has no lattice position",
            coord.x(),
            coord.y()
        )));
    };

    Ok(normalize_lattice(hx, hy, level))
}

/// Centroid of a lattice cell as `(lon, lat)`, before any seam correction.
pub(crate) fn lattice_center(coord: &LatticeCoord, level: u8) -> Result<Point<f64>, GeoHexError> {
    let (unit_x, unit_y) = units(level)?;
    let k = *K;

    let lat = (k * coord.x as f64 * unit_x + coord.y as f64 * unit_y) / 2.0;
    let lon = (lat - coord.y as f64 * unit_y) / k;

    Ok(unproject(lon, lat))
}
