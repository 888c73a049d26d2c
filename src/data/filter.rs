use super::model::Catalog;

// ---------------------------------------------------------------------------
// Magnitude threshold filter
// ---------------------------------------------------------------------------

/// Return indices of records with `magnitude >= threshold`, in store order.
///
/// Pure projection over the catalog: it never mutates the store and can be
/// recomputed whenever the threshold moves. The threshold is not clamped;
/// the UI slider happens to cover `0..=10` but any float is accepted here.
pub fn filtered_indices(catalog: &Catalog, threshold: f64) -> Vec<usize> {
    catalog
        .records()
        .iter()
        .enumerate()
        .filter(|(_, record)| record.magnitude >= threshold)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::EarthquakeRecord;

    fn catalog_with_magnitudes(magnitudes: &[f64]) -> Catalog {
        Catalog::from_records(
            magnitudes
                .iter()
                .map(|&magnitude| EarthquakeRecord {
                    region: "Provence".to_string(),
                    latitude: 43.9,
                    longitude: 5.2,
                    magnitude,
                })
                .collect(),
        )
    }

    #[test]
    fn keeps_records_at_or_above_threshold_in_order() {
        let catalog = catalog_with_magnitudes(&[2.0, 4.0, 5.0, 5.0, 9.0]);
        assert_eq!(filtered_indices(&catalog, 5.0), vec![2, 3, 4]);
    }

    #[test]
    fn threshold_is_inclusive() {
        let catalog = catalog_with_magnitudes(&[4.0]);
        assert_eq!(filtered_indices(&catalog, 4.0), vec![0]);
    }

    #[test]
    fn negative_threshold_keeps_everything() {
        let catalog = catalog_with_magnitudes(&[0.0, 3.0, 8.0]);
        assert_eq!(filtered_indices(&catalog, -1.0), vec![0, 1, 2]);
    }

    #[test]
    fn threshold_above_slider_range_still_applies() {
        let catalog = catalog_with_magnitudes(&[9.5, 11.0]);
        assert_eq!(filtered_indices(&catalog, 10.5), vec![1]);
    }

    #[test]
    fn empty_catalog_yields_no_indices() {
        let catalog = catalog_with_magnitudes(&[]);
        assert!(filtered_indices(&catalog, 0.0).is_empty());
    }
}
