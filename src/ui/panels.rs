use eframe::egui::{self, RichText, Ui};

use crate::services::Services;
use crate::state::{AppState, Menu};

// ---------------------------------------------------------------------------
// Left side panel – menu
// ---------------------------------------------------------------------------

/// What the side panel asked the app to do this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SidePanelAction {
    pub reload: bool,
}

/// Render the sidebar menu and cache status.
pub fn side_panel(ui: &mut Ui, state: &mut AppState, services: &Services) -> SidePanelAction {
    let mut action = SidePanelAction::default();

    ui.add_space(4.0);
    ui.strong("Pilih Menu");
    egui::ComboBox::from_id_salt("menu")
        .width(ui.available_width())
        .selected_text(state.menu.label())
        .show_ui(ui, |ui: &mut Ui| {
            for menu in Menu::ALL {
                ui.selectable_value(&mut state.menu, menu, menu.label());
            }
        });

    ui.add_space(16.0);
    ui.separator();
    ui.label(RichText::new(status_line(services)).small().weak());
    if ui.small_button("Muat Ulang Data").clicked() {
        action.reload = true;
    }
    action
}

fn status_line(services: &Services) -> String {
    let mark = |loaded: bool| if loaded { "dimuat" } else { "belum dimuat" };
    format!(
        "Dataset: {}\nModel: {}",
        mark(services.dataset.is_loaded()),
        mark(services.model.is_loaded())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::services;
    use crate::ui::testing::run_frame;

    #[test]
    fn status_reflects_caches() {
        let (services, _, _) = services(Ok(1));
        assert_eq!(status_line(&services), "Dataset: belum dimuat\nModel: belum dimuat");
        services.dataset.get().unwrap();
        assert_eq!(status_line(&services), "Dataset: dimuat\nModel: belum dimuat");
    }

    #[test]
    fn renders_without_changing_selection() {
        let (services, _, _) = services(Ok(1));
        let mut state = AppState::default();
        let mut action = SidePanelAction { reload: true };
        run_frame(|ui| action = side_panel(ui, &mut state, &services));
        assert_eq!(state.menu, Menu::Home);
        assert!(!action.reload);
    }
}
