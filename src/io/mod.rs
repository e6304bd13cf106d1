pub mod csv;

pub use self::csv::{CsvZoneConfig, ZoneCsv, ZoneSource, csv_to_zone_csv};
