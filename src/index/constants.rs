use std::f64::consts::PI;
use std::sync::LazyLock;

/// GeoHex format version implemented by this crate
pub const GEOHEX_VERSION: &str = "3.2";

/// Half the projected circumference of the GeoHex sphere, in meters
pub const BASE: f64 = 20037508.34;

/// Code prefix alphabet, upper case then lower case
pub const KEY: &[u8; 52] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Minimum level
pub const MIN_LEVEL: u8 = 1;

/// Maximum level
pub const MAX_LEVEL: u8 = 15;

/// Powers of three, 3^0 through 3^(MAX_LEVEL + 3)
pub const POW3: [i64; MAX_LEVEL as usize + 4] = pow3_table();

/// Skew of the lattice basis, tan(30 deg)
pub(crate) static K: LazyLock<f64> = LazyLock::new(|| (PI * (30.0 / 180.0)).tan());

const fn pow3_table() -> [i64; MAX_LEVEL as usize + 4] {
    let mut table = [1i64; MAX_LEVEL as usize + 4];
    let mut i = 1;
    while i < table.len() {
        table[i] = table[i - 1] * 3;
        i += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow3_table() {
        assert_eq!(POW3[0], 1);
        assert_eq!(POW3[1], 3);
        assert_eq!(POW3[13], 1594323);
        assert_eq!(POW3[18], 387420489);
        assert!(POW3[POW3.len() - 1] < i64::from(i32::MAX));
    }

    #[test]
    fn test_key_alphabet() {
        assert_eq!(KEY[0], b'A');
        assert_eq!(KEY[25], b'Z');
        assert_eq!(KEY[26], b'a');
        assert_eq!(KEY[51], b'z');
    }

    #[test]
    fn test_skew() {
        assert!((*K - 1.0 / 3.0_f64.sqrt()).abs() < 1e-15);
    }
}
