use crate::error::GeoHexError;
use crate::index::constants::{KEY, MAX_LEVEL, POW3};
use crate::index::lattice::{
    LatticeCoord, check_level, lattice_center, max_hsteps, normalize_lattice,
};
use geo_types::Point;

/// Longitude given to every cell sitting on the seam.
pub(crate) const SEAM_LON: f64 = -180.0;

/// Balanced trit extraction of one axis, most significant position first.
fn trits(mut rem: i64, level: u8, out: &mut [u8]) {
    for (i, trit) in out.iter_mut().enumerate() {
        let pow = POW3[level as usize + 2 - i];
        let half = (pow + 1) / 2;

        if rem >= half {
            *trit = 2;
            rem -= pow;
        } else if rem <= -half {
            *trit = 0;
            rem += pow;
        } else {
            *trit = 1;
        }
    }
}

/// Rewrites the leading trit pair of cells that also have a twin encoding
/// on the other side of the seam, so only one of the two is ever emitted.
///
/// Applies only east of the prime meridian and on the seam itself, and only
/// when positions 1 and 2 agree on both axes.
pub(crate) fn fold_seam_prefix(tx: &mut [u8], ty: &mut [u8], lon: f64) {
    if !(lon == SEAM_LON || lon >= 0.0) {
        return;
    }
    if tx[1] != ty[1] || tx[2] != ty[2] {
        return;
    }

    match (tx[0], ty[0]) {
        (2, 1) => {
            tx[0] = 1;
            ty[0] = 2;
        }
        (1, 0) => {
            tx[0] = 0;
            ty[0] = 1;
        }
        _ => {}
    }
}

/// Inverse of [`fold_seam_prefix`] over the three leading base-9 digits.
pub(crate) fn unfold_seam_prefix(prefix: &mut [u8; 3]) {
    let free = |d: u8| !matches!(d, 1 | 2 | 5);

    if matches!(prefix[0], 1 | 5) && free(prefix[1]) && free(prefix[2]) {
        prefix[0] = if prefix[0] == 5 { 7 } else { 3 };
    }
}

/// Encodes a lattice coordinate as a GeoHex code.
///
/// Returns the code with the cell centroid as `(lon, lat)`. Cells on the
/// seam report a longitude of exactly -180.
///
/// # Example
/// ```
/// use geohex_rs::{LatticeCoord, lattice_to_code};
///
/// # fn main() -> Result<(), geohex_rs::GeoHexError> {
/// let (code, center) = lattice_to_code(&LatticeCoord::new(912000, -325774), 11)?;
/// assert_eq!(code, "XM48854457273");
/// assert!((center.y() - 35.658618718910624).abs() < 1e-9);
/// # Ok(())
/// # }
/// ```
pub fn lattice_to_code(
    coord: &LatticeCoord,
    level: u8,
) -> Result<(String, Point<f64>), GeoHexError> {
    check_level(level)?;

    let mut center = lattice_center(coord, level)?;
    let (mut hx, mut hy) = (coord.x, coord.y);

    if hx.abs_diff(hy) == max_hsteps(level).unsigned_abs() {
        if hx > hy {
            std::mem::swap(&mut hx, &mut hy);
        }
        center.set_x(SEAM_LON);
    }

    let digits = level as usize + 3;
    let mut tx = [0u8; MAX_LEVEL as usize + 3];
    let mut ty = [0u8; MAX_LEVEL as usize + 3];
    trits(hx, level, &mut tx[..digits]);
    trits(hy, level, &mut ty[..digits]);
    fold_seam_prefix(&mut tx, &mut ty, center.x());

    let base9: Vec<u8> = (0..digits).map(|i| tx[i] * 3 + ty[i]).collect();
    let packed = base9[..3]
        .iter()
        .fold(0usize, |acc, &d| acc * 10 + d as usize);

    let mut code = String::with_capacity(level as usize + 2);
    code.push(KEY[packed / 30] as char);
    code.push(KEY[packed % 30] as char);
    code.extend(base9[3..].iter().map(|&d| (b'0' + d) as char));

    Ok((code, center))
}

fn key_index(c: char) -> Result<usize, GeoHexError> {
    KEY.iter()
        .position(|&k| k as char == c)
        .ok_or(GeoHexError::InvalidCodeCharacter(c))
}

/// Level carried by a code, validated against the supported range.
pub fn code_level(code: &str) -> Result<u8, GeoHexError> {
    if let Some(c) = code.chars().find(|c| !c.is_ascii()) {
        return Err(GeoHexError::InvalidCodeCharacter(c));
    }
    if code.len() < 2 {
        return Err(GeoHexError::InvalidCodeLength(code.len()));
    }

    let level = u8::try_from(code.len() - 2).unwrap_or(u8::MAX);
    check_level(level)?;
    Ok(level)
}

/// Decodes a GeoHex code into its normalized lattice coordinate.
///
/// The level is implied by the code length (`len - 2`).
///
/// # Example
/// ```
/// use geohex_rs::{LatticeCoord, code_to_lattice};
///
/// # fn main() -> Result<(), geohex_rs::GeoHexError> {
/// let coord = code_to_lattice("XM48854457273")?;
/// assert_eq!(coord, LatticeCoord::new(912000, -325774));
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`GeoHexError::InvalidCodeLength`] - Fewer than two characters
/// - [`GeoHexError::LevelOutOfRange`] - Implied level outside 1-15
/// - [`GeoHexError::InvalidCodeCharacter`] - Unknown prefix letter or a digit outside 0-8
/// - [`GeoHexError::InvalidCodePrefix`] - Prefix letters that no cell encodes to
pub fn code_to_lattice(code: &str) -> Result<LatticeCoord, GeoHexError> {
    decode_code(code).map(|(coord, _)| coord)
}

/// Decodes a code into its lattice coordinate and the level it encodes.
pub(crate) fn decode_code(code: &str) -> Result<(LatticeCoord, u8), GeoHexError> {
    let level = code_level(code)?;
    let mut chars = code.chars();

    let (Some(c1), Some(c2)) = (chars.next(), chars.next()) else {
        return Err(GeoHexError::InvalidCodeLength(code.len()));
    };
    let packed = key_index(c1)? * 30 + key_index(c2)?;

    // Leading zero digits are lost in the packed value.
    let decimal = format!("{:03}", packed);
    if decimal.len() != 3 || decimal.bytes().any(|b| b > b'8') {
        return Err(GeoHexError::InvalidCodePrefix(code[..2].to_string()));
    }

    let mut prefix = [0u8; 3];
    for (d, b) in prefix.iter_mut().zip(decimal.bytes()) {
        *d = b - b'0';
    }
    unfold_seam_prefix(&mut prefix);

    let mut base9 = prefix.to_vec();
    for c in chars {
        match c {
            '0'..='8' => base9.push(c as u8 - b'0'),
            _ => return Err(GeoHexError::InvalidCodeCharacter(c)),
        }
    }

    let (mut hx, mut hy) = (0i64, 0i64);
    for (i, &d) in base9.iter().enumerate() {
        let pow = POW3[level as usize + 2 - i];
        match d / 3 {
            0 => hx -= pow,
            2 => hx += pow,
            _ => {}
        }
        match d % 3 {
            0 => hy -= pow,
            2 => hy += pow,
            _ => {}
        }
    }

    Ok((normalize_lattice(hx, hy, level), level))
}
