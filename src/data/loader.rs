use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{Catalog, EarthquakeRecord};

// ---------------------------------------------------------------------------
// Column layout
// ---------------------------------------------------------------------------

// Zero-based positions of the fields consumed from each catalog row. The
// surrounding columns are ignored but must exist for the row to count.
const REGION_COL: usize = 4;
const LATITUDE_COL: usize = 8;
const LONGITUDE_COL: usize = 9;
const MAGNITUDE_COL: usize = 10;
const MIN_COLUMNS: usize = 11;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    /// The catalog file could not be read at all. Terminal for the load:
    /// the caller gets no partial data.
    #[error("cannot read catalog file {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load an earthquake catalog from a CSV file.
///
/// The file is read to the end in one scoped operation and released before
/// parsing begins. An unreadable file fails the whole load with
/// [`LoadError::SourceUnavailable`]; every per-row problem is recoverable
/// and only costs that row (logged at warn level).
pub fn load_catalog(path: &Path) -> Result<Catalog, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed = parse_catalog(&text);
    for line in &parsed.malformed {
        log::warn!("invalid numeric value in catalog row: {line}");
    }

    Ok(Catalog::from_records(parsed.records))
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Records and rejects from one pass over a catalog file's text.
#[derive(Debug, Default)]
pub struct Parsed {
    /// Accepted records, in file order.
    pub records: Vec<EarthquakeRecord>,
    /// Raw text of rows that had the right shape and non-empty fields but
    /// failed numeric parsing. Short rows and rows with empty required
    /// fields are dropped without a trace.
    pub malformed: Vec<String>,
}

/// Parse catalog text into records.
///
/// The first line is a header and is skipped unconditionally; nothing in it
/// is validated. Every other line is split on the literal `,` character with
/// no quote or escape handling, matching the source format:
///
/// ```text
/// col0,col1,col2,col3,region,col5,col6,col7,latitude,longitude,magnitude
/// ```
///
/// A row is skipped silently when it has fewer than 11 fields or when
/// region, latitude, longitude, or magnitude is empty after trimming. A row
/// with the full shape whose latitude, longitude, or magnitude does not
/// parse as a float lands in [`Parsed::malformed`] instead.
pub fn parse_catalog(text: &str) -> Parsed {
    let mut parsed = Parsed::default();

    for line in text.lines().skip(1) {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < MIN_COLUMNS {
            continue;
        }

        let region = fields[REGION_COL].trim();
        let latitude = fields[LATITUDE_COL].trim();
        let longitude = fields[LONGITUDE_COL].trim();
        let magnitude = fields[MAGNITUDE_COL].trim();

        if region.is_empty() || latitude.is_empty() || longitude.is_empty() || magnitude.is_empty()
        {
            continue;
        }

        match (
            latitude.parse::<f64>(),
            longitude.parse::<f64>(),
            magnitude.parse::<f64>(),
        ) {
            (Ok(latitude), Ok(longitude), Ok(magnitude)) => {
                parsed.records.push(EarthquakeRecord {
                    region: region.to_string(),
                    latitude,
                    longitude,
                    magnitude,
                });
            }
            _ => parsed.malformed.push(line.to_string()),
        }
    }

    parsed
}
