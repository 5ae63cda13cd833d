use eframe::egui;

use crate::config::AppConfig;
use crate::services::Services;
use crate::state::AppState;
use crate::ui::{self, panels, ViewContext};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DiabetesApp {
    pub config: AppConfig,
    pub services: Services,
    pub state: AppState,
}

impl DiabetesApp {
    pub fn new(config: AppConfig) -> Self {
        let services = Services::from_config(&config);
        Self {
            config,
            services,
            state: AppState::default(),
        }
    }
}

impl eframe::App for DiabetesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Left side panel: menu ----
        let action = egui::SidePanel::left("menu_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| panels::side_panel(ui, &mut self.state, &self.services))
            .inner;
        if action.reload {
            self.services.invalidate();
        }

        // ---- Central panel: the selected view ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let mut view_ctx = ViewContext {
                        services: &self.services,
                        config: &self.config,
                        prediction: &mut self.state.prediction,
                    };
                    ui::render(ui, self.state.menu, &mut view_ctx);
                });
        });
    }
}
