use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};

use super::{error_box, heatmap, subheader, wordcloud, View, ViewContext};
use crate::color::{HISTOGRAM_BLUE, SET2};
use crate::data::dataset::Dataset;
use crate::data::stats::{correlation_matrix, histogram, kde_curve, outcome_counts, OutcomeCount};

pub struct VisualizationView;

impl View for VisualizationView {
    fn title(&self) -> &'static str {
        "Visualisasi Data"
    }

    fn show(&self, ui: &mut Ui, ctx: &mut ViewContext<'_>) -> anyhow::Result<()> {
        let dataset = ctx.services.dataset.get()?;

        chart_section(ui, "Distribusi Kadar Glukosa", |ui| glucose_histogram(ui, dataset));
        chart_section(
            ui,
            "Perbandingan Outcome (Negatif vs Positif Diabetes)",
            |ui| outcome_chart(ui, dataset),
        );
        chart_section(ui, "Heatmap Korelasi Antar Fitur", |ui| {
            let matrix = correlation_matrix(dataset)?;
            heatmap::paint(ui, &matrix);
            Ok(())
        });
        chart_section(ui, "WordCloud Fitur", |ui| {
            wordcloud::paint(ui, &column_text(dataset));
            Ok(())
        });
        Ok(())
    }
}

/// Each chart fails on its own; the error replaces only that chart.
fn chart_section(ui: &mut Ui, title: &str, draw: impl FnOnce(&mut Ui) -> anyhow::Result<()>) {
    subheader(ui, title);
    if let Err(e) = draw(ui) {
        log::warn!("chart '{title}' failed: {e:#}");
        error_box(ui, &format!("{e:#}"));
    }
}

/// Word cloud input: the column names joined by spaces.
pub fn column_text(dataset: &Dataset) -> String {
    dataset.column_names().join(" ")
}

// ---------------------------------------------------------------------------
// Glucose histogram with KDE overlay
// ---------------------------------------------------------------------------

fn glucose_histogram(ui: &mut Ui, dataset: &Dataset) -> anyhow::Result<()> {
    let values = dataset.require_numeric("Glucose")?;
    let hist = histogram(&values)?;
    let width = hist.bin_width();

    let bars: Vec<Bar> = hist
        .centers()
        .into_iter()
        .zip(&hist.counts)
        .map(|(x, &count)| Bar::new(x, count as f64).width(width))
        .collect();
    let kde = kde_curve(&values, width, 200);

    Plot::new("glucose_histogram")
        .height(280.0)
        .legend(Legend::default())
        .x_axis_label("Kadar Glukosa")
        .y_axis_label("Frekuensi")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .color(HISTOGRAM_BLUE.gamma_multiply(0.55))
                    .name("Glucose"),
            );
            if let Some(points) = kde {
                plot_ui.line(
                    Line::new(PlotPoints::from(points))
                        .color(HISTOGRAM_BLUE)
                        .width(2.0)
                        .name("KDE"),
                );
            }
        });
    Ok(())
}

// ---------------------------------------------------------------------------
// Outcome count bars
// ---------------------------------------------------------------------------

fn outcome_chart(ui: &mut Ui, dataset: &Dataset) -> anyhow::Result<()> {
    let counts = outcome_counts(dataset)?;
    let bars: Vec<Bar> = counts
        .iter()
        .zip(SET2)
        .map(|(c, color)| {
            Bar::new(c.value as f64, c.count as f64)
                .width(0.6)
                .name(c.label)
                .fill(color)
        })
        .collect();

    Plot::new("outcome_counts")
        .height(260.0)
        .x_axis_label("Outcome")
        .y_axis_label("Jumlah")
        .include_x(-0.6)
        .include_x(1.6)
        .include_y(0.0)
        .x_axis_formatter(move |mark, _range| category_tick(&counts, mark.value))
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
    Ok(())
}

/// Tick text for the outcome axis: category label at its bar, blank elsewhere.
fn category_tick(counts: &[OutcomeCount], x: f64) -> String {
    counts
        .iter()
        .find(|c| (x - c.value as f64).abs() < 1e-6)
        .map(|c| c.label.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::data::loader::read_csv;
    use crate::services::testing::services;
    use crate::state::PredictionForm;
    use crate::ui::testing::run_frame;

    #[test]
    fn ticks_name_categories() {
        let ds = read_csv("Outcome\n1\n1\n0\n".as_bytes()).unwrap();
        let counts = outcome_counts(&ds).unwrap();
        assert_eq!(category_tick(&counts, 0.0), "Negatif Diabetes");
        assert_eq!(category_tick(&counts, 1.0), "Positif Diabetes");
        assert_eq!(category_tick(&counts, 0.5), "");
    }

    #[test]
    fn word_cloud_text_is_column_names() {
        let ds = read_csv("Glucose,BMI,Outcome\n1,2.0,0\n".as_bytes()).unwrap();
        assert_eq!(column_text(&ds), "Glucose BMI Outcome");
    }

    #[test]
    fn renders_headless() {
        let (services, reads, _) = services(Ok(0));
        let config = AppConfig::default();
        let mut form = PredictionForm::default();
        run_frame(|ui| {
            let mut ctx = ViewContext {
                services: &services,
                config: &config,
                prediction: &mut form,
            };
            VisualizationView.show(ui, &mut ctx).unwrap();
        });
        assert_eq!(reads.get(), 1);
    }

    #[test]
    fn one_broken_chart_does_not_stop_the_rest() {
        // No Glucose or Outcome column: both charts fail, the view still renders.
        let ds = read_csv("Age,BMI\n30,22.5\n40,31.0\n".as_bytes()).unwrap();
        let mut drawn = Vec::new();
        run_frame(|ui| {
            chart_section(ui, "a", |ui| glucose_histogram(ui, &ds));
            chart_section(ui, "b", |ui| outcome_chart(ui, &ds));
            chart_section(ui, "c", |ui| {
                heatmap::paint(ui, &correlation_matrix(&ds)?);
                drawn.push("heatmap");
                Ok(())
            });
        });
        assert_eq!(drawn, vec!["heatmap"]);
    }
}
