use std::fmt;

// ---------------------------------------------------------------------------
// EarthquakeRecord – one observation from the catalog
// ---------------------------------------------------------------------------

/// A single earthquake observation (one row of the source catalog).
///
/// Plain immutable value object: all fields are fixed when the row is
/// parsed. A record only exists if its region was non-empty and all three
/// numeric fields parsed, so downstream code never re-validates.
#[derive(Debug, Clone, PartialEq)]
pub struct EarthquakeRecord {
    /// Region label, non-empty.
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
    /// No range enforcement: whatever parsed is kept.
    pub magnitude: f64,
}

// ---------------------------------------------------------------------------
// MagnitudeBucket – severity class of a magnitude reading
// ---------------------------------------------------------------------------

/// One of the three magnitude severity classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MagnitudeBucket {
    Low,
    Medium,
    High,
}

impl MagnitudeBucket {
    /// All buckets in ascending severity order.
    pub const ALL: [MagnitudeBucket; 3] = [
        MagnitudeBucket::Low,
        MagnitudeBucket::Medium,
        MagnitudeBucket::High,
    ];

    /// Classify a magnitude: `< 4.0` is Low, `[4.0, 7.0)` is Medium,
    /// `>= 7.0` is High. A magnitude exactly on a boundary lands in the
    /// upper bucket.
    pub fn classify(magnitude: f64) -> Self {
        if magnitude < 4.0 {
            MagnitudeBucket::Low
        } else if magnitude < 7.0 {
            MagnitudeBucket::Medium
        } else {
            MagnitudeBucket::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MagnitudeBucket::Low => "Low",
            MagnitudeBucket::Medium => "Medium",
            MagnitudeBucket::High => "High",
        }
    }
}

impl fmt::Display for MagnitudeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Catalog – the complete loaded record store
// ---------------------------------------------------------------------------

/// The record store: every record parsed from one catalog file.
///
/// Insertion order is file order and records are never sorted, deduplicated,
/// updated, or removed after the load. The field is private so the only way
/// to obtain a `Catalog` with different contents is to load again.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<EarthquakeRecord>,
}

impl Catalog {
    /// Wrap the records produced by a load, keeping their order.
    pub fn from_records(records: Vec<EarthquakeRecord>) -> Self {
        Catalog { records }
    }

    /// All records, in file order.
    pub fn records(&self) -> &[EarthquakeRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_magnitudes_land_in_the_upper_bucket() {
        assert_eq!(MagnitudeBucket::classify(3.999), MagnitudeBucket::Low);
        assert_eq!(MagnitudeBucket::classify(4.0), MagnitudeBucket::Medium);
        assert_eq!(MagnitudeBucket::classify(6.999), MagnitudeBucket::Medium);
        assert_eq!(MagnitudeBucket::classify(7.0), MagnitudeBucket::High);
    }

    #[test]
    fn extreme_magnitudes_still_classify() {
        assert_eq!(MagnitudeBucket::classify(0.0), MagnitudeBucket::Low);
        assert_eq!(MagnitudeBucket::classify(-2.0), MagnitudeBucket::Low);
        assert_eq!(MagnitudeBucket::classify(12.5), MagnitudeBucket::High);
    }

    #[test]
    fn catalog_preserves_insertion_order() {
        let records = vec![
            EarthquakeRecord {
                region: "Alsace".to_string(),
                latitude: 48.3,
                longitude: 7.4,
                magnitude: 2.1,
            },
            EarthquakeRecord {
                region: "Bretagne".to_string(),
                latitude: 48.1,
                longitude: -2.8,
                magnitude: 3.4,
            },
        ];
        let catalog = Catalog::from_records(records.clone());
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records(), records.as_slice());
    }
}
