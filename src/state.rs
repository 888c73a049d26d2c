use crate::color::RegionColors;
use crate::data::filter::filtered_indices;
use crate::data::model::Catalog;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which dashboard view is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewTab {
    Magnitudes,
    Records,
    Regions,
}

impl ViewTab {
    pub const ALL: [ViewTab; 3] = [ViewTab::Magnitudes, ViewTab::Records, ViewTab::Regions];

    pub fn label(self) -> &'static str {
        match self {
            ViewTab::Magnitudes => "Magnitudes",
            ViewTab::Records => "Records",
            ViewTab::Regions => "Regions",
        }
    }
}

/// The full UI state, independent of rendering.
///
/// Every chart and table is re-derived from the catalog on demand; the
/// only cached view is `visible_indices`, recomputed synchronously each
/// time the threshold moves.
pub struct AppState {
    /// Loaded catalog (None until a file is opened).
    pub catalog: Option<Catalog>,

    /// Magnitude threshold applied to the record table.
    pub threshold: f64,

    /// Indices of records at or above the threshold (cached).
    pub visible_indices: Vec<usize>,

    /// Region → colour assignment for the region chart.
    pub region_colors: Option<RegionColors>,

    /// Active dashboard view.
    pub active_tab: ViewTab,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            catalog: None,
            threshold: 5.0,
            visible_indices: Vec::new(),
            region_colors: None,
            active_tab: ViewTab::Magnitudes,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded catalog and derive the initial views.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.region_colors = Some(RegionColors::from_catalog(&catalog));
        self.catalog = Some(catalog);
        self.status_message = None;
        self.refilter();
    }

    /// Recompute `visible_indices` for the current threshold.
    pub fn refilter(&mut self) {
        self.visible_indices = match &self.catalog {
            Some(catalog) => filtered_indices(catalog, self.threshold),
            None => Vec::new(),
        };
    }

    /// Move the magnitude threshold and refresh the filtered view.
    pub fn set_threshold(&mut self, threshold: f64) {
        self.threshold = threshold;
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::EarthquakeRecord;

    fn catalog() -> Catalog {
        Catalog::from_records(
            [2.0, 5.0, 8.0]
                .iter()
                .map(|&magnitude| EarthquakeRecord {
                    region: "Auvergne".to_string(),
                    latitude: 45.5,
                    longitude: 3.1,
                    magnitude,
                })
                .collect(),
        )
    }

    #[test]
    fn set_catalog_applies_the_default_threshold() {
        let mut state = AppState::default();
        state.set_catalog(catalog());
        assert_eq!(state.visible_indices, vec![1, 2]);
    }

    #[test]
    fn moving_the_threshold_refilters() {
        let mut state = AppState::default();
        state.set_catalog(catalog());

        state.set_threshold(0.0);
        assert_eq!(state.visible_indices, vec![0, 1, 2]);

        state.set_threshold(8.0);
        assert_eq!(state.visible_indices, vec![2]);
    }

    #[test]
    fn without_a_catalog_nothing_is_visible() {
        let mut state = AppState::default();
        state.refilter();
        assert!(state.visible_indices.is_empty());
    }
}
