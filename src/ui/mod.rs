/// Views and the menu router.
///
/// Each [`Menu`] entry maps to exactly one [`View`]; the central panel only
/// ever renders that one.

pub mod dataset_view;
pub mod heatmap;
pub mod home;
pub mod panels;
pub mod prediction;
pub mod visualization;
pub mod wordcloud;

use eframe::egui::{Color32, RichText, Ui};

use crate::config::AppConfig;
use crate::services::Services;
use crate::state::{Menu, PredictionForm};

/// Everything a view may read or touch during one frame.
pub struct ViewContext<'a> {
    pub services: &'a Services,
    pub config: &'a AppConfig,
    pub prediction: &'a mut PredictionForm,
}

pub trait View {
    fn title(&self) -> &'static str;

    /// Draw the view body. Errors end the view for this frame and are shown
    /// in its place.
    fn show(&self, ui: &mut Ui, ctx: &mut ViewContext<'_>) -> anyhow::Result<()>;
}

/// Dispatch table from menu entry to view.
pub fn view_for(menu: Menu) -> &'static dyn View {
    match menu {
        Menu::Home => &home::HomeView,
        Menu::ShowDataset => &dataset_view::DatasetView,
        Menu::VisualizeData => &visualization::VisualizationView,
        Menu::PredictDiabetes => &prediction::PredictionView,
    }
}

/// Render the view selected by `menu`: title, then body or its error.
pub fn render(ui: &mut Ui, menu: Menu, ctx: &mut ViewContext<'_>) {
    let view = view_for(menu);
    ui.heading(RichText::new(view.title()).size(26.0).strong());
    ui.add_space(8.0);
    if let Err(e) = view.show(ui, ctx) {
        log::error!("{} view failed: {e:#}", menu.label());
        error_box(ui, &format!("Error: {e:#}"));
    }
}

/// Section sub-heading.
pub fn subheader(ui: &mut Ui, text: &str) {
    ui.add_space(12.0);
    ui.label(RichText::new(text).size(19.0).strong());
    ui.add_space(4.0);
}

/// Red message block.
pub fn error_box(ui: &mut Ui, text: &str) {
    message_box(ui, text, Color32::from_rgb(255, 230, 230), Color32::from_rgb(160, 20, 20));
}

/// Green message block.
pub fn success_box(ui: &mut Ui, text: RichText) {
    eframe::egui::Frame::default()
        .fill(Color32::from_rgb(223, 245, 228))
        .inner_margin(10.0)
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.label(text.color(Color32::from_rgb(20, 110, 45)));
        });
}

fn message_box(ui: &mut Ui, text: &str, fill: Color32, fg: Color32) {
    eframe::egui::Frame::default()
        .fill(fill)
        .inner_margin(10.0)
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(text).color(fg));
        });
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_menu_entry_has_its_own_view() {
        let titles: Vec<&str> = Menu::ALL.iter().map(|m| view_for(*m).title()).collect();
        assert_eq!(
            titles,
            [
                "Prediksi Diabetes Menggunakan Machine Learning",
                "Dataset Diabetes",
                "Visualisasi Data",
                "Prediksi Diabetes",
            ]
        );
    }

    #[test]
    fn view_errors_are_rendered_not_raised() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::rooted_at(dir.path());
        let services = Services::from_config(&config);
        let mut form = PredictionForm::default();
        testing::run_frame(|ui| {
            let mut ctx = ViewContext {
                services: &services,
                config: &config,
                prediction: &mut form,
            };
            // No diabetes.csv in the temp dir.
            render(ui, Menu::ShowDataset, &mut ctx);
        });
        assert!(!services.dataset.is_loaded());
    }
}
