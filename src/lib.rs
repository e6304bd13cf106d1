//! # geohex-rs
//!
//! GeoHex v3.2 geocoding: every location on Earth falls in a hexagonal cell
//! per level (1-15), addressed both by an integer lattice coordinate and by a
//! short code such as `XM48854457273`.
//!
//! ### 1. `Zone` - Single Cell Operations
//!
//! ```
//! use geohex_rs::Zone;
//!
//! # fn main() -> Result<(), geohex_rs::GeoHexError> {
//! let zone = Zone::from_location(&(139.745433, 35.65858), 11)?;
//! println!("{} at ({}, {})", zone.code, zone.lat(), zone.lon());
//!
//! let same = Zone::from_code(&zone.code)?;
//! assert_eq!(zone.lattice, same.lattice);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. Lattice Operations
//!
//! ```
//! use geohex_rs::{lattice_for_code, normalize_lattice, zone_for_lattice};
//!
//! # fn main() -> Result<(), geohex_rs::GeoHexError> {
//! let lattice = lattice_for_code("XM48854457273")?;
//! assert_eq!((lattice.x, lattice.y), (912000, -325774));
//! assert_eq!(normalize_lattice(lattice.x, lattice.y, 11), lattice);
//!
//! let zone = zone_for_lattice(&lattice, 11)?;
//! assert_eq!(zone.code, "XM48854457273");
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `ZoneCsv` - CSV File Conversion
//!
//! ```no_run
//! use geohex_rs::{CsvZoneConfig, ZoneCsv};
//!
//! let config = CsvZoneConfig::from_coords("Longitude", "Latitude", 9).with_center(true);
//! "stations.csv".to_zone_csv("output.csv", &config).unwrap();
//! ```
//!

pub mod coord;
pub mod error;
pub mod index;
pub mod io;
pub mod zone;

pub use coord::{Coordinate, project, unproject};
pub use error::GeoHexError;
pub use index::{
    BASE, GEOHEX_VERSION, KEY, LatticeCoord, MAX_LEVEL, MIN_LEVEL, cell_size, code_level,
    code_to_lattice, lattice_to_code, location_to_lattice, max_hsteps, normalize_lattice,
};
pub use io::{CsvZoneConfig, ZoneCsv, ZoneSource, csv_to_zone_csv};
pub use zone::{
    Zone, lattice_for_code, lattice_for_location, zone_for_code, zone_for_lattice,
    zone_for_location, zones_for_codes, zones_for_locations,
};

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::point;

    fn sample_locations() -> Vec<(f64, f64)> {
        let mut locations = vec![(180.0, 0.0), (-180.0, 0.0), (180.0, 45.0), (-180.0, -45.0)];
        for i in 0..30 {
            for j in 0..17 {
                let lon = -180.0 + f64::from(i) * 12.37;
                let lat = -80.0 + f64::from(j) * 9.83;
                locations.push((lon, lat));
            }
        }
        locations
    }

    #[test]
    fn test_end_to_end_workflow() -> Result<(), GeoHexError> {
        let tokyo = point! { x: 139.745433, y: 35.65858 };

        let lattice = lattice_for_location(&tokyo, 11)?;
        assert_eq!(lattice, LatticeCoord::new(912000, -325774));

        let zone = zone_for_lattice(&lattice, 11)?;
        assert_eq!(zone.code, "XM48854457273");
        assert!((zone.lat() - 35.658618718910624).abs() < 1e-9);
        assert!((zone.lon() - 139.7454091799466).abs() < 1e-9);

        assert_eq!(lattice_for_code(&zone.code)?, lattice);
        assert_eq!(zone_for_code(&zone.code)?, zone);
        assert_eq!(zone_for_location(&tokyo, 11)?, zone);
        Ok(())
    }

    #[test]
    fn test_known_codes() -> Result<(), GeoHexError> {
        let cases = [
            ((-0.1276, 51.5072), "QE01666152227", "QE016661522"),
            ((151.2093, -33.8688), "MW61432865460", "MW614328653"),
            ((-73.9857, 40.7484), "PF38183086444", "PF381830864"),
            ((139.745433, 35.65858), "XM48854457273", "XM488544572"),
        ];

        for (loc, fine, coarse) in cases {
            assert_eq!(zone_for_location(&loc, 11)?.code, fine);
            assert_eq!(zone_for_location(&loc, 9)?.code, coarse);
        }
        Ok(())
    }

    #[test]
    fn test_code_roundtrip_every_level() -> Result<(), GeoHexError> {
        for level in MIN_LEVEL..=MAX_LEVEL {
            for loc in sample_locations() {
                let zone = zone_for_location(&loc, level)?;
                let back = zone_for_code(&zone.code)?;

                assert_eq!(back.code, zone.code, "level {} at {:?}", level, loc);
                assert_eq!((back.lattice.x, back.lattice.y), (zone.lattice.x, zone.lattice.y));
                assert_eq!(back.center, zone.center);
            }
        }
        Ok(())
    }

    fn assert_lattice_roundtrip(x: i64, y: i64, level: u8) -> Result<(), GeoHexError> {
        let p = max_hsteps(level);
        let lattice = normalize_lattice(x, y, level);
        let (code, _) = lattice_to_code(&lattice, level)?;
        let decoded = code_to_lattice(&code)?;

        assert_eq!(
            (decoded.x, decoded.y),
            (lattice.x, lattice.y),
            "level {} raw ({}, {}) code {}",
            level,
            x,
            y,
            code
        );
        if (lattice.x - lattice.y).abs() < p {
            assert_eq!(decoded, lattice);
        } else {
            // Seam cells come back in smaller-first order.
            assert_eq!(decoded.y - decoded.x, p);
        }
        Ok(())
    }

    #[test]
    fn test_lattice_roundtrip_exhaustive_low_levels() -> Result<(), GeoHexError> {
        for level in 1..=2u8 {
            let p = max_hsteps(level);
            for x in -p..=p {
                for y in -p..=p {
                    assert_lattice_roundtrip(x, y, level)?;
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_lattice_roundtrip_sampled_all_levels() -> Result<(), GeoHexError> {
        for level in MIN_LEVEL..=MAX_LEVEL {
            let p = max_hsteps(level);
            for i in -20..=20i64 {
                for j in -20..=20i64 {
                    assert_lattice_roundtrip(p * i / 20, p * j / 20 + j.signum(), level)?;
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_zone_for_code_is_canonical() -> Result<(), GeoHexError> {
        let level = 2u8;
        for packed in 0..=888usize {
            if packed.to_string().bytes().any(|b| b == b'9') {
                continue;
            }
            for body in 0..81u8 {
                let code = format!(
                    "{}{}{}{}",
                    KEY[packed / 30] as char,
                    KEY[packed % 30] as char,
                    body / 9,
                    body % 9
                );
                let zone = zone_for_code(&code)?;
                assert_eq!(zone.level, level);
                assert_eq!(zone_for_code(&zone.code)?.code, zone.code, "from {}", code);
            }
        }
        Ok(())
    }

    #[test]
    fn test_determinism() -> Result<(), GeoHexError> {
        for loc in sample_locations().into_iter().take(40) {
            let a = zone_for_location(&loc, 13)?;
            let b = zone_for_location(&loc, 13)?;

            assert_eq!(a.code, b.code);
            assert_eq!(a.lattice, b.lattice);
            assert_eq!(a.center.x().to_bits(), b.center.x().to_bits());
            assert_eq!(a.center.y().to_bits(), b.center.y().to_bits());
        }
        Ok(())
    }

    #[test]
    fn test_zone_contains_location() -> Result<(), GeoHexError> {
        for level in [3u8, 8, 12] {
            // The hand-placed seam points sit on exact cell corners.
            for loc in sample_locations().into_iter().skip(4).step_by(7) {
                let zone = zone_for_location(&loc, level)?;
                let xy = project(&loc);
                let center = project(&zone.center);

                // Within one circumradius, allowing for the seam wrap.
                let dx = (xy.x() - center.x()).abs();
                let dx = dx.min((2.0 * BASE - dx).abs());
                let dy = xy.y() - center.y();
                let size = cell_size(level)?;
                assert!((dx * dx + dy * dy).sqrt() <= 2.0 * size + 1e-6, "{:?}", loc);
            }
        }
        Ok(())
    }

    #[test]
    fn test_parallel_matches_sequential() -> Result<(), GeoHexError> {
        let locations = sample_locations();
        let zones = zones_for_locations(&locations, 7)?;
        let codes: Vec<&str> = zones.iter().map(|z| z.code.as_str()).collect();
        let decoded = zones_for_codes(&codes)?;

        for ((loc, zone), back) in locations.iter().zip(&zones).zip(&decoded) {
            assert_eq!(zone, &zone_for_location(loc, 7)?);
            assert_eq!(back.code, zone.code);
        }
        Ok(())
    }
}
