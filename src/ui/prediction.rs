use eframe::egui::{self, RichText, Ui};

use super::{error_box, success_box, View, ViewContext};
use crate::config::model_location;
use crate::ml::features::{FeatureSpec, FEATURE_SPECS};
use crate::ml::{outcome_text, FeatureFrame, ModelError, PredictionInput};
use crate::services::ModelCache;
use crate::state::{PredictionForm, PredictionPhase};

pub struct PredictionView;

impl View for PredictionView {
    fn title(&self) -> &'static str {
        "Prediksi Diabetes"
    }

    fn show(&self, ui: &mut Ui, ctx: &mut ViewContext<'_>) -> anyhow::Result<()> {
        ui.label("Masukkan data kesehatan Anda di bawah ini untuk memprediksi kemungkinan diabetes.");
        ui.add_space(8.0);

        let form = &mut *ctx.prediction;
        if input_form(ui, &mut form.input) {
            form.mark_edited();
        }

        ui.add_space(8.0);
        if ui.button(RichText::new("Prediksi").size(16.0)).clicked() {
            submit(form, &ctx.services.model);
        }

        match &form.phase {
            PredictionPhase::Succeeded(result) => success_box(
                ui,
                RichText::new(format!("Hasil prediksi: {result}")).strong(),
            ),
            PredictionPhase::Failed(message) => error_box(ui, message),
            PredictionPhase::Idle | PredictionPhase::FormFilled => {}
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Prediction request
// ---------------------------------------------------------------------------

/// Run one prediction and store the outcome on the form. Errors end up in
/// `PredictionPhase::Failed`; nothing escapes.
pub fn submit(form: &mut PredictionForm, models: &ModelCache) {
    form.phase = match predict(&form.input, models) {
        Ok(text) => {
            log::info!("Prediction for {:?}: {text}", form.input);
            PredictionPhase::Succeeded(text.to_string())
        }
        Err(e) => {
            log::error!("Prediction failed: {e}");
            PredictionPhase::Failed(error_message(&e))
        }
    };
}

/// Assemble the one-row frame, predict, and map the first label to text.
pub fn predict(input: &PredictionInput, models: &ModelCache) -> Result<&'static str, ModelError> {
    let frame = FeatureFrame::single(input);
    let model = models.get()?;
    let labels = model.predict(&frame)?;
    let label = labels
        .first()
        .copied()
        .ok_or_else(|| ModelError::Prediction("model returned no labels".into()))?;
    Ok(outcome_text(label))
}

/// User-facing text for a failed prediction.
pub fn error_message(error: &ModelError) -> String {
    match error {
        ModelError::FileMissing { path } => {
            let (file, folder) = model_location(path);
            format!("Model tidak ditemukan! Pastikan file '{file}' ada di folder '{folder}'.")
        }
        other => format!("Terjadi kesalahan dalam prediksi: {other}"),
    }
}

// ---------------------------------------------------------------------------
// Input widgets
// ---------------------------------------------------------------------------

/// Draw the seven inputs. Returns true when any value changed.
fn input_form(ui: &mut Ui, input: &mut PredictionInput) -> bool {
    let [glucose, blood_pressure, skin_thickness, insulin, bmi, dpf, age] = &FEATURE_SPECS;
    let mut changed = false;
    egui::Grid::new("prediction_form")
        .num_columns(2)
        .spacing([24.0, 8.0])
        .show(ui, |ui: &mut Ui| {
            changed |= int_input(ui, glucose, &mut input.glucose);
            changed |= int_input(ui, blood_pressure, &mut input.blood_pressure);
            changed |= int_input(ui, skin_thickness, &mut input.skin_thickness);
            changed |= int_input(ui, insulin, &mut input.insulin);
            changed |= float_input(ui, bmi, &mut input.bmi);
            changed |= float_input(ui, dpf, &mut input.diabetes_pedigree_function);
            changed |= int_input(ui, age, &mut input.age);
        });
    changed
}

// The widget clamps to the feature's bounds.
fn int_input(ui: &mut Ui, spec: &FeatureSpec, value: &mut u32) -> bool {
    ui.label(spec.label).on_hover_text(spec.name);
    let changed = ui
        .add(
            egui::DragValue::new(value)
                .range(spec.min as u32..=spec.max as u32)
                .speed(1.0),
        )
        .changed();
    ui.end_row();
    changed
}

fn float_input(ui: &mut Ui, spec: &FeatureSpec, value: &mut f64) -> bool {
    ui.label(spec.label).on_hover_text(spec.name);
    let changed = ui
        .add(
            egui::DragValue::new(value)
                .range(spec.min..=spec.max)
                .speed(0.01)
                .fixed_decimals(2),
        )
        .changed();
    ui.end_row();
    changed
}
