use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::dataset::{CellValue, Dataset};

// ---------------------------------------------------------------------------
// Dataset source seam
// ---------------------------------------------------------------------------

/// Something that can produce the dataset. The dashboard reads a CSV file;
/// tests substitute in-memory sources.
pub trait DatasetSource {
    fn read(&self) -> Result<Dataset>;

    /// Human readable origin, used in log lines.
    fn origin(&self) -> String;
}

/// The dataset CSV at a fixed path.
#[derive(Debug, Clone)]
pub struct CsvFile {
    path: PathBuf,
}

impl CsvFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for CsvFile {
    fn read(&self) -> Result<Dataset> {
        load_csv(&self.path)
    }

    fn origin(&self) -> String {
        self.path.display().to_string()
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load a CSV file with a header row. Cell types are inferred per cell.
pub fn load_csv(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;
    read_csv(file).with_context(|| format!("parsing CSV {}", path.display()))
}

/// Parse CSV text from any reader.
pub fn read_csv<R: Read>(input: R) -> Result<Dataset> {
    let mut reader = csv::Reader::from_reader(input);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        rows.push(record.iter().map(guess_cell_type).collect());
    }

    Dataset::new(headers, rows)
}

/// Cell spellings read as missing, compared case-insensitively.
const NULL_MARKERS: [&str; 8] = ["", "nan", "na", "n/a", "null", "none", "<na>", "#n/a"];

fn guess_cell_type(s: &str) -> CellValue {
    let s = s.trim();
    if NULL_MARKERS.iter().any(|m| s.eq_ignore_ascii_case(m)) {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    CellValue::Text(s.to_string())
}
