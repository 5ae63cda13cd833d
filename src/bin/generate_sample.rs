//! Writes a synthetic Pima-style `diabetes.csv`, a logistic-regression
//! model artifact at `model/diabetes_model.json`, and the home illustration
//! `kesehatan diabetes.jpg` into the current directory.
//!
//! The model coefficients are fixed; nothing is fitted here. Outcomes are
//! drawn from the same logistic model so the charts show real structure.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;

const FEATURES: [&str; 7] = [
    "Glucose",
    "BloodPressure",
    "SkinThickness",
    "Insulin",
    "BMI",
    "DiabetesPedigreeFunction",
    "Age",
];
const COEFFICIENTS: [f64; 7] = [0.035, -0.012, 0.001, -0.001, 0.09, 0.9, 0.03];
const INTERCEPT: f64 = -8.6;
const ROWS: usize = 768;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    /// Zero with probability `p`, the Pima convention for a missing reading.
    fn zero_or(&mut self, p: f64, value: f64) -> f64 {
        if self.next_f64() < p {
            0.0
        } else {
            value
        }
    }
}

struct Patient {
    pregnancies: u32,
    features: [f64; 7],
    outcome: u8,
}

fn generate_patient(rng: &mut SimpleRng) -> Patient {
    let pregnancies = rng.gauss(3.8, 3.4).round().clamp(0.0, 17.0) as u32;
    let glucose = rng.gauss(121.0, 30.0).round().clamp(44.0, 199.0);
    let glucose = rng.zero_or(0.006, glucose);
    let blood_pressure = rng.gauss(69.0, 12.0).round().clamp(24.0, 122.0);
    let skin = rng.gauss(29.0, 10.0).round().clamp(7.0, 99.0);
    let skin = rng.zero_or(0.30, skin);
    let insulin = rng.gauss(155.0, 110.0).round().clamp(14.0, 846.0);
    let insulin = rng.zero_or(0.48, insulin);
    let bmi = (rng.gauss(32.0, 7.0).clamp(18.2, 67.1) * 10.0).round() / 10.0;
    let dpf = (rng.gauss(-0.9, 0.6).exp().clamp(0.078, 2.42) * 1000.0).round() / 1000.0;
    let age = (21.0 + rng.gauss(0.0, 12.0).abs()).round().min(81.0);

    let features = [glucose, blood_pressure, skin, insulin, bmi, dpf, age];
    let z: f64 = features
        .iter()
        .zip(COEFFICIENTS)
        .map(|(x, w)| x * w)
        .sum::<f64>()
        + INTERCEPT;
    let p = 1.0 / (1.0 + (-z).exp());
    let outcome = u8::from(rng.next_f64() < p);

    Patient {
        pregnancies,
        features,
        outcome,
    }
}

fn write_csv(path: &Path, patients: &[Patient]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV")?;
    let mut header = vec!["Pregnancies"];
    header.extend(FEATURES);
    header.push("Outcome");
    writer.write_record(&header)?;

    for p in patients {
        let [glucose, bp, skin, insulin, bmi, dpf, age] = p.features;
        writer.write_record([
            p.pregnancies.to_string(),
            format!("{glucose:.0}"),
            format!("{bp:.0}"),
            format!("{skin:.0}"),
            format!("{insulin:.0}"),
            format!("{bmi:.1}"),
            format!("{dpf:.3}"),
            format!("{age:.0}"),
            p.outcome.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_model(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).context("creating model directory")?;
    }
    let artifact = json!({
        "feature_names": FEATURES,
        "estimator": {
            "kind": "logistic_regression",
            "coefficients": COEFFICIENTS,
            "intercept": INTERCEPT,
            "threshold": 0.5
        }
    });
    std::fs::write(path, serde_json::to_vec_pretty(&artifact)?).context("writing model")?;
    Ok(())
}

/// Soft blue gradient with a red drop in the middle.
fn write_illustration(path: &Path) -> Result<()> {
    let (w, h) = (960u32, 540u32);
    let (cx, cy, r) = (w as f64 / 2.0, h as f64 / 2.0 + 30.0, 120.0);
    let img = image::RgbImage::from_fn(w, h, |x, y| {
        let t = y as f64 / h as f64;
        let (dx, dy) = (x as f64 - cx, y as f64 - cy);
        // Circle plus a tapered tip above it.
        let in_body = dx * dx + dy * dy <= r * r;
        let in_tip = dy < 0.0 && dy > -2.2 * r && dx.abs() <= r * (1.0 + dy / (2.2 * r));
        if in_body || in_tip {
            image::Rgb([200, 40, 55])
        } else {
            image::Rgb([
                (225.0 + 30.0 * t) as u8,
                (238.0 + 17.0 * t) as u8,
                255,
            ])
        }
    });
    img.save(path).context("writing illustration")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let patients: Vec<Patient> = (0..ROWS).map(|_| generate_patient(&mut rng)).collect();
    let positives = patients.iter().filter(|p| p.outcome == 1).count();

    write_csv(Path::new("diabetes.csv"), &patients)?;
    write_model(&Path::new("model").join("diabetes_model.json"))?;
    write_illustration(Path::new("kesehatan diabetes.jpg"))?;

    println!(
        "Wrote {ROWS} rows ({positives} positive) to diabetes.csv, model/diabetes_model.json and 'kesehatan diabetes.jpg'"
    );
    Ok(())
}
