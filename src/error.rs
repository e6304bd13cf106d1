/// Error type for geohex-rs operations.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoHexError {
    /// The code is too short to carry a level (fewer than 2 characters).
    InvalidCodeLength(usize),
    /// A code character is outside the alphabet for its position.
    InvalidCodeCharacter(char),
    /// The two leading letters do not pack a three digit base-9 prefix.
    InvalidCodePrefix(String),
    /// The level is outside the supported range (1-15).
    LevelOutOfRange(u8),
    /// The location has no finite lattice position (NaN, beyond the poles, or out of range).
    InvalidLocation(String),
    /// File I/O error.
    IoError(String),
    /// CSV parsing or reading error.
    CsvError(String),
}

impl std::fmt::Display for GeoHexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoHexError::InvalidCodeLength(len) => write!(f, "Invalid code length: {}", len),
            GeoHexError::InvalidCodeCharacter(c) => write!(f, "Invalid code character: {:?}", c),
            GeoHexError::InvalidCodePrefix(p) => write!(f, "Invalid code prefix: {}", p),
            GeoHexError::LevelOutOfRange(l) => write!(f, "Level out of range: {}", l),
            GeoHexError::InvalidLocation(msg) => write!(f, "Invalid location: {}", msg),
            GeoHexError::IoError(msg) => write!(f, "IO error: {}", msg),
            GeoHexError::CsvError(msg) => write!(f, "CSV error: {}", msg),
        }
    }
}

impl std::error::Error for GeoHexError {}
