use eframe::egui::{self, RichText, Ui};

use super::{View, ViewContext};

pub struct HomeView;

impl View for HomeView {
    fn title(&self) -> &'static str {
        "Prediksi Diabetes Menggunakan Machine Learning"
    }

    fn show(&self, ui: &mut Ui, ctx: &mut ViewContext<'_>) -> anyhow::Result<()> {
        // A missing file is drawn as the loader's error placeholder.
        let uri = format!("file://{}", ctx.config.home_image_path.display());
        ui.vertical_centered(|ui: &mut Ui| {
            ui.add(
                egui::Image::new(uri)
                    .max_width(ui.available_width())
                    .maintain_aspect_ratio(true),
            );
            ui.label(RichText::new("Ilustrasi Prediksi Diabetes").italics().weak());
        });
        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui: &mut Ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            ui.label("Selamat datang di aplikasi ");
            ui.label(RichText::new("Prediksi Diabetes").strong());
            ui.label(
                "! Aplikasi ini bertujuan untuk membantu Anda memahami risiko diabetes \
                 berdasarkan data kesehatan Anda. Anda dapat melihat dataset yang digunakan, \
                 memvisualisasikan data, dan melakukan prediksi risiko diabetes secara interaktif.",
            );
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::services::Services;
    use crate::state::PredictionForm;
    use crate::ui::testing::run_frame;

    #[test]
    fn renders_without_image_or_data() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::rooted_at(dir.path());
        let services = Services::from_config(&config);
        let mut form = PredictionForm::default();
        run_frame(|ui| {
            let mut ctx = ViewContext {
                services: &services,
                config: &config,
                prediction: &mut form,
            };
            HomeView.show(ui, &mut ctx).unwrap();
        });
        assert!(!services.dataset.is_loaded());
        assert!(!services.model.is_loaded());
    }
}
