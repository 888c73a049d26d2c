use std::f32::consts::TAU;

use eframe::egui::{self, Color32, Pos2, RichText, Shape, Stroke, Ui, Vec2};
use egui_plot::{Bar, BarChart, Plot};

use super::empty_hint;
use crate::color::bucket_color;
use crate::data::aggregate::{self, MagnitudeHistogram};
use crate::data::model::MagnitudeBucket;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Magnitude pie chart
// ---------------------------------------------------------------------------

/// Render the magnitude severity pie chart.
pub fn magnitude_pie(ui: &mut Ui, state: &AppState) {
    let catalog = match &state.catalog {
        Some(catalog) => catalog,
        None => {
            empty_hint(ui);
            return;
        }
    };

    if catalog.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("The catalog holds no records");
        });
        return;
    }

    let histogram = aggregate::bucketize(catalog.records());
    ui.heading("Magnitude distribution");

    // Legend with per-bucket counts.
    ui.horizontal(|ui: &mut Ui| {
        for bucket in MagnitudeBucket::ALL {
            let text = format!("■ {} ({})", bucket.label(), histogram.count(bucket));
            ui.label(RichText::new(text).color(bucket_color(bucket)));
        }
    });
    ui.add_space(8.0);

    draw_pie(ui, &histogram);
}

fn draw_pie(ui: &mut Ui, histogram: &MagnitudeHistogram) {
    let side = ui.available_size().min_elem().clamp(100.0, 420.0);
    let (response, painter) = ui.allocate_painter(Vec2::splat(side), egui::Sense::hover());

    let center = response.rect.center();
    let radius = side * 0.45;
    let total = histogram.total() as f32;

    // Sectors start at 12 o'clock and run clockwise.
    let mut start_angle = -TAU / 4.0;
    for bucket in MagnitudeBucket::ALL {
        let count = histogram.count(bucket);
        if count == 0 {
            continue;
        }
        let sweep = count as f32 / total * TAU;
        fill_sector(
            &painter,
            center,
            radius,
            start_angle,
            start_angle + sweep,
            bucket_color(bucket),
        );
        start_angle += sweep;
    }

    painter.circle_stroke(center, radius, Stroke::new(1.0, Color32::DARK_GRAY));
}

/// Fill a circular sector as a fan of thin triangles. Sectors can sweep
/// more than half a turn, so one convex polygon per triangle.
fn fill_sector(
    painter: &egui::Painter,
    center: Pos2,
    radius: f32,
    start_angle: f32,
    end_angle: f32,
    fill: Color32,
) {
    let sweep = end_angle - start_angle;
    let steps = (sweep.abs() / 0.05).ceil().max(1.0) as usize;

    let point_at = |angle: f32| center + radius * Vec2::new(angle.cos(), angle.sin());

    let mut prev = point_at(start_angle);
    for i in 1..=steps {
        let next = point_at(start_angle + sweep * i as f32 / steps as f32);
        painter.add(Shape::convex_polygon(
            vec![center, prev, next],
            fill,
            Stroke::NONE,
        ));
        prev = next;
    }
}

// ---------------------------------------------------------------------------
// Region proportion bar chart
// ---------------------------------------------------------------------------

/// Render the per-region proportion bar chart.
pub fn region_bars(ui: &mut Ui, state: &AppState) {
    let catalog = match &state.catalog {
        Some(catalog) => catalog,
        None => {
            empty_hint(ui);
            return;
        }
    };

    if catalog.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("The catalog holds no records");
        });
        return;
    }

    let proportions = aggregate::region_proportions(catalog.records());
    ui.heading("Share of records per region");

    // Region legend; bar order matches the legend (BTreeMap order).
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for region in proportions.keys() {
            let color = state
                .region_colors
                .as_ref()
                .map(|colors| colors.color_for(region))
                .unwrap_or(Color32::GRAY);
            ui.label(RichText::new(format!("■ {region}")).color(color));
        }
    });
    ui.add_space(8.0);

    let bars: Vec<Bar> = proportions
        .iter()
        .enumerate()
        .map(|(i, (region, fraction))| {
            let color = state
                .region_colors
                .as_ref()
                .map(|colors| colors.color_for(region))
                .unwrap_or(Color32::GRAY);
            Bar::new(i as f64, *fraction)
                .name(region)
                .fill(color)
                .width(0.6)
        })
        .collect();

    Plot::new("region_bars")
        .x_axis_label("Region")
        .y_axis_label("Proportion of records")
        .include_y(0.0)
        .include_y(1.0)
        .allow_boxed_zoom(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}
