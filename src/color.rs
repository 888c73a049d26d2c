use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::{Catalog, MagnitudeBucket};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Bucket colors
// ---------------------------------------------------------------------------

/// Fixed traffic-light colours for the three magnitude severity classes.
pub fn bucket_color(bucket: MagnitudeBucket) -> Color32 {
    match bucket {
        MagnitudeBucket::Low => Color32::from_rgb(46, 204, 113),
        MagnitudeBucket::Medium => Color32::from_rgb(243, 156, 18),
        MagnitudeBucket::High => Color32::from_rgb(231, 76, 60),
    }
}

// ---------------------------------------------------------------------------
// Color mapping: region name → Color32
// ---------------------------------------------------------------------------

/// Maps the regions present in a catalog to distinct colours.
#[derive(Debug, Clone)]
pub struct RegionColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl RegionColors {
    /// Assign a colour to every region present in the catalog.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let regions: BTreeSet<&str> = catalog
            .records()
            .iter()
            .map(|record| record.region.as_str())
            .collect();

        let palette = generate_palette(regions.len());
        let mapping: BTreeMap<String, Color32> = regions
            .into_iter()
            .zip(palette)
            .map(|(region, color)| (region.to_string(), color))
            .collect();

        RegionColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a region.
    pub fn color_for(&self, region: &str) -> Color32 {
        self.mapping
            .get(region)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::EarthquakeRecord;

    #[test]
    fn palette_has_requested_length() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(7).len(), 7);
    }

    #[test]
    fn duplicate_regions_share_one_color() {
        let catalog = Catalog::from_records(vec![
            EarthquakeRecord {
                region: "Alsace".to_string(),
                latitude: 48.3,
                longitude: 7.4,
                magnitude: 2.0,
            },
            EarthquakeRecord {
                region: "Alsace".to_string(),
                latitude: 48.4,
                longitude: 7.5,
                magnitude: 3.0,
            },
        ]);
        let colors = RegionColors::from_catalog(&catalog);
        assert_eq!(colors.mapping.len(), 1);
    }

    #[test]
    fn unknown_region_falls_back_to_the_default() {
        let colors = RegionColors::from_catalog(&Catalog::default());
        assert_eq!(colors.color_for("Nowhere"), Color32::GRAY);
    }
}
