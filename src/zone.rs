use crate::coord::Coordinate;
use crate::error::GeoHexError;
use crate::index::{
    LatticeCoord, code_to_lattice, decode_code, lattice_to_code, location_to_lattice,
};
use geo_types::Point;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A single cell in the GeoHex grid.
///
/// Each `Zone` ties together the cell's code, its centroid in WGS84 and its
/// lattice coordinate at one level. Zones are plain values: every constructor
/// recomputes them from scratch.
///
/// # Example
///
/// ```
/// use geohex_rs::Zone;
///
/// # fn main() -> Result<(), geohex_rs::GeoHexError> {
/// // Tokyo Tower, as (lon, lat)
/// let zone = Zone::from_location(&(139.745433, 35.65858), 11)?;
/// assert_eq!(zone.code, "XM48854457273");
/// println!("Center: ({}, {})", zone.lat(), zone.lon());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// GeoHex code, `level + 2` characters long
    pub code: String,
    /// Cell centroid as a `(lon, lat)` point
    pub center: Point<f64>,
    /// Lattice coordinate of the cell
    pub lattice: LatticeCoord,
    /// Level (1-15), where higher values mean smaller cells
    pub level: u8,
}

impl Zone {
    /// Create a Zone from a WGS84 location given as `(lon, lat)`.
    ///
    /// # Example
    /// ```
    /// use geohex_rs::Zone;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), geohex_rs::GeoHexError> {
    /// // From tuple
    /// let zone = Zone::from_location(&(139.745433, 35.65858), 7)?;
    /// // From Point
    /// let same = Zone::from_location(&Point::new(139.745433, 35.65858), 7)?;
    /// assert_eq!(zone, same);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_location(coord: &impl Coordinate, level: u8) -> Result<Self, GeoHexError> {
        let lattice = location_to_lattice(coord, level)?;
        Self::from_lattice(&lattice, level)
    }

    /// Create a Zone from a GeoHex code.
    ///
    /// The result is re-encoded from the decoded lattice, so its code is
    /// always the canonical one.
    ///
    /// # Example
    /// ```
    /// use geohex_rs::Zone;
    ///
    /// # fn main() -> Result<(), geohex_rs::GeoHexError> {
    /// let zone = Zone::from_location(&(139.745433, 35.65858), 9)?;
    /// let restored = Zone::from_code(&zone.code)?;
    /// assert_eq!(zone.code, restored.code);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_code(code: &str) -> Result<Self, GeoHexError> {
        let (lattice, level) = decode_code(code)?;
        Self::from_lattice(&lattice, level)
    }

    /// Create a Zone from a lattice coordinate.
    pub fn from_lattice(lattice: &LatticeCoord, level: u8) -> Result<Self, GeoHexError> {
        let (code, center) = lattice_to_code(lattice, level)?;

        Ok(Self {
            code,
            center,
            lattice: *lattice,
            level,
        })
    }

    /// Returns the latitude of the cell centroid in degrees.
    pub fn lat(&self) -> f64 {
        self.center.y()
    }

    /// Returns the longitude of the cell centroid in degrees.
    pub fn lon(&self) -> f64 {
        self.center.x()
    }
}

/// Resolves the lattice coordinate of the cell containing a location.
pub fn lattice_for_location(
    coord: &impl Coordinate,
    level: u8,
) -> Result<LatticeCoord, GeoHexError> {
    location_to_lattice(coord, level)
}

/// Resolves the lattice coordinate addressed by a code.
pub fn lattice_for_code(code: &str) -> Result<LatticeCoord, GeoHexError> {
    code_to_lattice(code)
}

/// Resolves the zone containing a location. See [`Zone::from_location`].
pub fn zone_for_location(coord: &impl Coordinate, level: u8) -> Result<Zone, GeoHexError> {
    Zone::from_location(coord, level)
}

/// Resolves the zone addressed by a code. See [`Zone::from_code`].
pub fn zone_for_code(code: &str) -> Result<Zone, GeoHexError> {
    Zone::from_code(code)
}

/// Resolves the zone at a lattice coordinate. See [`Zone::from_lattice`].
pub fn zone_for_lattice(lattice: &LatticeCoord, level: u8) -> Result<Zone, GeoHexError> {
    Zone::from_lattice(lattice, level)
}

/// Resolves many locations in parallel, keeping input order.
///
/// Fails with the first error encountered.
pub fn zones_for_locations<C>(coords: &[C], level: u8) -> Result<Vec<Zone>, GeoHexError>
where
    C: Coordinate + Sync,
{
    let zones = coords
        .par_iter()
        .map(|c| Zone::from_location(c, level))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(count = zones.len(), level, "resolved zones for locations");
    Ok(zones)
}

/// Resolves many codes in parallel, keeping input order.
pub fn zones_for_codes<S>(codes: &[S]) -> Result<Vec<Zone>, GeoHexError>
where
    S: AsRef<str> + Sync,
{
    let zones = codes
        .par_iter()
        .map(|c| Zone::from_code(c.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(count = zones.len(), "resolved zones for codes");
    Ok(zones)
}
