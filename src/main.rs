use geohex_rs::{GeoHexError, Zone, zone_for_code};

fn main() -> Result<(), GeoHexError> {
    let lon = 139.745433;
    let lat = 35.65858;

    let zone = Zone::from_location(&(lon, lat), 11)?;

    println!("GeoHex code: {}", zone.code);
    println!("Center: ({}, {})", zone.lat(), zone.lon());
    println!("Lattice: ({}, {})", zone.lattice.x, zone.lattice.y);

    let restored = zone_for_code(&zone.code)?;
    let json =
        serde_json::to_string_pretty(&restored).map_err(|e| GeoHexError::IoError(e.to_string()))?;
    println!("{}", json);

    Ok(())
}
