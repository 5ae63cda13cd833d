use crate::ml::PredictionInput;

// ---------------------------------------------------------------------------
// Menu
// ---------------------------------------------------------------------------

/// The sidebar menu. Exactly one entry is active per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Menu {
    #[default]
    Home,
    ShowDataset,
    VisualizeData,
    PredictDiabetes,
}

impl Menu {
    /// Entries in sidebar order.
    pub const ALL: [Menu; 4] = [
        Menu::Home,
        Menu::ShowDataset,
        Menu::VisualizeData,
        Menu::PredictDiabetes,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Menu::Home => "Home",
            Menu::ShowDataset => "Tampilkan Dataset",
            Menu::VisualizeData => "Visualisasi Data",
            Menu::PredictDiabetes => "Prediksi Diabetes",
        }
    }
}

// ---------------------------------------------------------------------------
// Prediction form
// ---------------------------------------------------------------------------

/// Where the prediction form is in its cycle. `PredictRequested` only lasts
/// for the duration of the button handler, so it has no variant here.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PredictionPhase {
    #[default]
    Idle,
    /// Inputs edited since the last result.
    FormFilled,
    /// Display text of the predicted label.
    Succeeded(String),
    /// User-facing error message.
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct PredictionForm {
    pub input: PredictionInput,
    pub phase: PredictionPhase,
}

impl PredictionForm {
    /// Any edit clears a shown result.
    pub fn mark_edited(&mut self) {
        self.phase = PredictionPhase::FormFilled;
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. Loaded data lives in
/// [`crate::services::Services`], not here.
#[derive(Debug, Default)]
pub struct AppState {
    pub menu: Menu,
    pub prediction: PredictionForm,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_is_the_initial_menu() {
        assert_eq!(AppState::default().menu, Menu::Home);
        assert_eq!(Menu::ALL[0], Menu::default());
    }

    #[test]
    fn menu_labels() {
        let labels: Vec<&str> = Menu::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(
            labels,
            ["Home", "Tampilkan Dataset", "Visualisasi Data", "Prediksi Diabetes"]
        );
    }

    #[test]
    fn editing_clears_result() {
        let mut form = PredictionForm {
            phase: PredictionPhase::Succeeded("Positif Diabetes".into()),
            ..Default::default()
        };
        form.mark_edited();
        assert_eq!(form.phase, PredictionPhase::FormFilled);
    }
}
