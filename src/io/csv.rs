use crate::error::GeoHexError;
use crate::zone::Zone;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

enum SourceIndices {
    Code(usize),
    Coordinates {
        lon_idx: usize,
        lat_idx: usize,
        level: u8,
    },
}

/// Specifies how to find the cell of each CSV row.
#[derive(Debug, Clone)]
pub enum ZoneSource {
    /// A column holding GeoHex codes
    CodeColumn(String),
    /// Separate longitude and latitude columns, resolved at a fixed level
    CoordinateColumns {
        lon_column: String,
        lat_column: String,
        level: u8,
    },
}

/// Configuration for CSV to GeoHex conversion.
#[derive(Debug, Clone)]
pub struct CsvZoneConfig {
    pub source: ZoneSource,
    pub exclude_columns: Vec<String>,
    pub include_center: bool,
}

impl CsvZoneConfig {
    /// Create config for a CSV with separate longitude/latitude columns.
    ///
    /// # Example
    /// ```
    /// use geohex_rs::CsvZoneConfig;
    ///
    /// let config = CsvZoneConfig::from_coords("Longitude", "Latitude", 9);
    /// ```
    pub fn from_coords(
        lon_column: impl Into<String>,
        lat_column: impl Into<String>,
        level: u8,
    ) -> Self {
        Self {
            source: ZoneSource::CoordinateColumns {
                lon_column: lon_column.into(),
                lat_column: lat_column.into(),
                level,
            },
            exclude_columns: Vec::new(),
            include_center: false,
        }
    }

    /// Create config for a CSV with a column of GeoHex codes.
    ///
    /// The output carries the canonical code and the centroid of each cell.
    pub fn from_code(code_column: impl Into<String>) -> Self {
        Self {
            source: ZoneSource::CodeColumn(code_column.into()),
            exclude_columns: Vec::new(),
            include_center: true,
        }
    }

    pub fn exclude(mut self, columns: Vec<String>) -> Self {
        self.exclude_columns = columns;
        self
    }

    /// Include centroid `lat`/`lon` columns in the output.
    pub fn with_center(mut self, include: bool) -> Self {
        self.include_center = include;
        self
    }
}

pub trait ZoneCsv {
    fn to_zone_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvZoneConfig,
    ) -> Result<(), GeoHexError>;
}

impl<P: AsRef<Path>> ZoneCsv for P {
    fn to_zone_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvZoneConfig,
    ) -> Result<(), GeoHexError> {
        csv_to_zone_csv(self, output_path, config)
    }
}

fn parse_coordinate(
    record: &csv::StringRecord,
    idx: usize,
    name: &str,
) -> Result<f64, GeoHexError> {
    let value = record
        .get(idx)
        .ok_or_else(|| GeoHexError::CsvError(format!("Missing {} column at index {}", name, idx)))?
        .trim();

    value
        .parse()
        .map_err(|_| GeoHexError::CsvError(format!("Invalid {}: '{}'", name, value)))
}

/// Converts a CSV file with location or code columns to a CSV file with GeoHex codes.
///
/// Streams output to minimize memory usage for large files. The first output
/// column is `geohex`, followed by `lat`/`lon` when centroids are requested,
/// then every input column that is neither a source column nor excluded.
///
/// # Example with coordinate columns
///
/// ```no_run
/// use geohex_rs::{csv_to_zone_csv, CsvZoneConfig};
///
/// let config = CsvZoneConfig::from_coords("Longitude", "Latitude", 9)
///     .exclude(vec!["Notes".into()]);
///
/// csv_to_zone_csv("stations.csv", "output.csv", &config).unwrap();
/// ```
///
/// # Example with a code column
///
/// ```no_run
/// use geohex_rs::{CsvZoneConfig, ZoneCsv};
///
/// let config = CsvZoneConfig::from_code("geohex");
/// "cells.csv".to_zone_csv("centers.csv", &config).unwrap();
/// ```
pub fn csv_to_zone_csv(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvZoneConfig,
) -> Result<(), GeoHexError> {
    let file = File::open(csv_path).map_err(|e| GeoHexError::IoError(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| GeoHexError::CsvError(e.to_string()))?
        .clone();

    let find = |col: &str| {
        headers
            .iter()
            .position(|h| h == col)
            .ok_or_else(|| GeoHexError::CsvError(format!("Column '{}' not found", col)))
    };

    let (source_indices, mut exclude_indices) = match &config.source {
        ZoneSource::CodeColumn(col) => {
            let idx = find(col.as_str())?;
            (SourceIndices::Code(idx), HashSet::from([idx]))
        }
        ZoneSource::CoordinateColumns {
            lon_column,
            lat_column,
            level,
        } => {
            let lon_idx = find(lon_column.as_str())?;
            let lat_idx = find(lat_column.as_str())?;
            (
                SourceIndices::Coordinates {
                    lon_idx,
                    lat_idx,
                    level: *level,
                },
                HashSet::from([lon_idx, lat_idx]),
            )
        }
    };

    for col_name in &config.exclude_columns {
        if let Some(idx) = headers.iter().position(|h| h == col_name) {
            exclude_indices.insert(idx);
        }
    }

    let out_file = File::create(output_path).map_err(|e| GeoHexError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(out_file);

    let mut header_row: Vec<&str> = vec!["geohex"];
    if config.include_center {
        header_row.push("lat");
        header_row.push("lon");
    }
    for (i, h) in headers.iter().enumerate() {
        if !exclude_indices.contains(&i) {
            header_row.push(h);
        }
    }
    writer
        .write_record(&header_row)
        .map_err(|e| GeoHexError::CsvError(e.to_string()))?;

    let mut rows = 0usize;
    for result in reader.records() {
        let record = result.map_err(|e| GeoHexError::CsvError(e.to_string()))?;

        let zone = match &source_indices {
            SourceIndices::Code(idx) => {
                let code = record.get(*idx).ok_or_else(|| {
                    GeoHexError::CsvError(format!("Missing code column at index {}", idx))
                })?;
                Zone::from_code(code.trim())
            }
            SourceIndices::Coordinates {
                lon_idx,
                lat_idx,
                level,
            } => {
                let lon = parse_coordinate(&record, *lon_idx, "longitude")?;
                let lat = parse_coordinate(&record, *lat_idx, "latitude")?;
                Zone::from_location(&(lon, lat), *level)
            }
        }
        .inspect_err(|e| tracing::trace!(row = rows + 1, error = %e, "failed to resolve zone"))?;

        let mut row: Vec<String> = vec![zone.code.clone()];
        if config.include_center {
            row.push(zone.lat().to_string());
            row.push(zone.lon().to_string());
        }
        for (i, field) in record.iter().enumerate() {
            if !exclude_indices.contains(&i) {
                row.push(field.to_string());
            }
        }
        writer
            .write_record(&row)
            .map_err(|e| GeoHexError::CsvError(e.to_string()))?;
        rows += 1;
    }

    writer
        .flush()
        .map_err(|e| GeoHexError::IoError(e.to_string()))?;

    tracing::debug!(rows, "wrote geohex csv");
    Ok(())
}
