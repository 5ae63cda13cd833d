// ---------------------------------------------------------------------------
// Feature schema
// ---------------------------------------------------------------------------

/// Column names in the exact order the model was trained on.
pub const FEATURE_NAMES: [&str; 7] = [
    "Glucose",
    "BloodPressure",
    "SkinThickness",
    "Insulin",
    "BMI",
    "DiabetesPedigreeFunction",
    "Age",
];

/// Form metadata for one feature: label, widget bounds and default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

/// Specs in [`FEATURE_NAMES`] order.
pub const FEATURE_SPECS: [FeatureSpec; 7] = [
    FeatureSpec { name: "Glucose", label: "Kadar Glukosa", min: 0.0, max: 200.0, default: 85.0 },
    FeatureSpec { name: "BloodPressure", label: "Tekanan Darah (mm Hg)", min: 0.0, max: 150.0, default: 70.0 },
    FeatureSpec { name: "SkinThickness", label: "Ketebalan Kulit (mm)", min: 0.0, max: 100.0, default: 20.0 },
    FeatureSpec { name: "Insulin", label: "Insulin (IU/mL)", min: 0.0, max: 900.0, default: 79.0 },
    FeatureSpec { name: "BMI", label: "BMI (Body Mass Index)", min: 0.0, max: 70.0, default: 25.0 },
    FeatureSpec { name: "DiabetesPedigreeFunction", label: "Diabetes Pedigree Function", min: 0.0, max: 3.0, default: 0.5 },
    FeatureSpec { name: "Age", label: "Usia", min: 0.0, max: 120.0, default: 33.0 },
];

// ---------------------------------------------------------------------------
// PredictionInput – the form values
// ---------------------------------------------------------------------------

/// The seven health measurements entered in the prediction form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionInput {
    pub glucose: u32,
    pub blood_pressure: u32,
    pub skin_thickness: u32,
    pub insulin: u32,
    pub bmi: f64,
    pub diabetes_pedigree_function: f64,
    pub age: u32,
}

impl Default for PredictionInput {
    fn default() -> Self {
        let d = |i: usize| FEATURE_SPECS[i].default;
        Self {
            glucose: d(0) as u32,
            blood_pressure: d(1) as u32,
            skin_thickness: d(2) as u32,
            insulin: d(3) as u32,
            bmi: d(4),
            diabetes_pedigree_function: d(5),
            age: d(6) as u32,
        }
    }
}

impl PredictionInput {
    /// Values in [`FEATURE_NAMES`] order.
    pub fn to_row(&self) -> [f64; 7] {
        [
            f64::from(self.glucose),
            f64::from(self.blood_pressure),
            f64::from(self.skin_thickness),
            f64::from(self.insulin),
            self.bmi,
            self.diabetes_pedigree_function,
            f64::from(self.age),
        ]
    }
}

// ---------------------------------------------------------------------------
// FeatureFrame – named rows handed to the classifier
// ---------------------------------------------------------------------------

/// A small table of feature rows with named columns.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureFrame {
    columns: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl FeatureFrame {
    #[cfg(test)]
    pub fn new(columns: Vec<String>, rows: Vec<Vec<f64>>) -> Self {
        Self { columns, rows }
    }

    /// A one-row frame from form input, columns in training order.
    pub fn single(input: &PredictionInput) -> Self {
        Self {
            columns: FEATURE_NAMES.iter().map(|c| c.to_string()).collect(),
            rows: vec![input.to_row().to_vec()],
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_defaults() {
        let input = PredictionInput::default();
        assert_eq!(
            (input.glucose, input.blood_pressure, input.skin_thickness, input.insulin, input.age),
            (85, 70, 20, 79, 33)
        );
        assert_eq!((input.bmi, input.diabetes_pedigree_function), (25.0, 0.5));
    }

    #[test]
    fn defaults_match_specs() {
        let row = PredictionInput::default().to_row();
        for (value, spec) in row.iter().zip(FEATURE_SPECS.iter()) {
            assert_eq!(*value, spec.default, "{}", spec.name);
            assert!(spec.min <= spec.default && spec.default <= spec.max);
        }
    }

    #[test]
    fn specs_follow_training_order() {
        let names: Vec<&str> = FEATURE_SPECS.iter().map(|s| s.name).collect();
        assert_eq!(names, FEATURE_NAMES.to_vec());
    }

    #[test]
    fn single_row_frame() {
        let frame = FeatureFrame::single(&PredictionInput::default());
        assert_eq!(frame.columns(), FEATURE_NAMES.map(String::from).as_slice());
        assert_eq!(frame.rows(), &[vec![85.0, 70.0, 20.0, 79.0, 25.0, 0.5, 33.0]]);
    }
}
