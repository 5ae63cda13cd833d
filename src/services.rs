use std::cell::OnceCell;

use anyhow::Result;

use crate::config::AppConfig;
use crate::data::dataset::Dataset;
use crate::data::loader::{CsvFile, DatasetSource};
use crate::ml::loader::{ModelFile, ModelSource};
use crate::ml::{Classifier, ModelError};

// ---------------------------------------------------------------------------
// Process-lifetime caches
// ---------------------------------------------------------------------------

/// Write-once dataset cache. A failed read is not stored, so the next frame
/// tries again.
pub struct DatasetCache {
    source: Box<dyn DatasetSource>,
    cell: OnceCell<Dataset>,
}

impl DatasetCache {
    pub fn new(source: impl DatasetSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            cell: OnceCell::new(),
        }
    }

    /// The cached dataset, reading the source on first use.
    pub fn get(&self) -> Result<&Dataset> {
        if let Some(dataset) = self.cell.get() {
            return Ok(dataset);
        }
        let dataset = self.source.read()?;
        log::info!(
            "Loaded dataset from {}: {} rows, columns {:?}",
            self.source.origin(),
            dataset.n_rows(),
            dataset.column_names()
        );
        Ok(self.cell.get_or_init(|| dataset))
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Drop the cached value; the next `get` re-reads the source.
    pub fn invalidate(&mut self) {
        if self.cell.take().is_some() {
            log::debug!("Dataset cache cleared");
        }
    }
}

/// Write-once model cache.
pub struct ModelCache {
    source: Box<dyn ModelSource>,
    cell: OnceCell<Box<dyn Classifier>>,
}

impl ModelCache {
    pub fn new(source: impl ModelSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            cell: OnceCell::new(),
        }
    }

    /// The cached model, deserializing it on first use.
    pub fn get(&self) -> Result<&dyn Classifier, ModelError> {
        if let Some(model) = self.cell.get() {
            return Ok(model.as_ref());
        }
        let model = self.source.load()?;
        log::info!("Loaded model from {}", self.source.origin());
        Ok(self.cell.get_or_init(|| model).as_ref())
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn invalidate(&mut self) {
        if self.cell.take().is_some() {
            log::debug!("Model cache cleared");
        }
    }
}

// ---------------------------------------------------------------------------
// Services – built once in main, borrowed by every view
// ---------------------------------------------------------------------------

pub struct Services {
    pub dataset: DatasetCache,
    pub model: ModelCache,
}

impl Services {
    pub fn new(dataset: DatasetCache, model: ModelCache) -> Self {
        Self { dataset, model }
    }

    /// File-backed services at the configured paths.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            DatasetCache::new(CsvFile::new(&config.dataset_path)),
            ModelCache::new(ModelFile::new(&config.model_path)),
        )
    }

    /// Clear both caches.
    pub fn invalidate(&mut self) {
        log::info!("Reloading dataset and model on next use");
        self.dataset.invalidate();
        self.model.invalidate();
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Counting doubles shared by the view tests.

    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::data::loader::read_csv;
    use crate::ml::{FeatureFrame, Label};

    pub const SAMPLE_CSV: &str = "\
Pregnancies,Glucose,BloodPressure,SkinThickness,Insulin,BMI,DiabetesPedigreeFunction,Age,Outcome
6,148,72,35,0,33.6,0.627,50,1
1,85,66,29,0,26.6,0.351,31,0
8,183,64,0,0,23.3,0.672,32,1
1,89,66,23,94,28.1,0.167,21,0
0,137,40,35,168,43.1,2.288,33,1
";

    pub struct CountingDataset {
        pub reads: Rc<Cell<usize>>,
        pub csv: &'static str,
    }

    impl DatasetSource for CountingDataset {
        fn read(&self) -> Result<Dataset> {
            self.reads.set(self.reads.get() + 1);
            read_csv(self.csv.as_bytes())
        }

        fn origin(&self) -> String {
            "memory".into()
        }
    }

    /// Returns a fixed label, or a fixed error message, for every row.
    pub struct FixedModel(pub Result<Label, String>);

    impl Classifier for FixedModel {
        fn predict(&self, features: &FeatureFrame) -> Result<Vec<Label>, ModelError> {
            match &self.0 {
                Ok(label) => Ok(vec![*label; features.rows().len()]),
                Err(msg) => Err(ModelError::Prediction(msg.clone())),
            }
        }
    }

    pub struct CountingModel {
        pub loads: Rc<Cell<usize>>,
        pub result: Result<Label, String>,
    }

    impl ModelSource for CountingModel {
        fn load(&self) -> Result<Box<dyn Classifier>, ModelError> {
            self.loads.set(self.loads.get() + 1);
            Ok(Box::new(FixedModel(self.result.clone())))
        }

        fn origin(&self) -> String {
            "memory".into()
        }
    }

    /// Services over in-memory doubles, plus the read/load counters.
    pub fn services(model: Result<Label, String>) -> (Services, Rc<Cell<usize>>, Rc<Cell<usize>>) {
        let reads = Rc::new(Cell::new(0));
        let loads = Rc::new(Cell::new(0));
        let services = Services::new(
            DatasetCache::new(CountingDataset { reads: reads.clone(), csv: SAMPLE_CSV }),
            ModelCache::new(CountingModel { loads: loads.clone(), result: model }),
        );
        (services, reads, loads)
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use crate::ml::{FeatureFrame, PredictionInput};
    use pretty_assertions::assert_eq;

    #[test]
    fn dataset_is_read_once() {
        let (services, reads, _) = services(Ok(1));
        let first = services.dataset.get().unwrap().clone();
        let second = services.dataset.get().unwrap();
        assert_eq!(&first, second);
        assert_eq!(reads.get(), 1);
    }

    #[test]
    fn model_is_deserialized_once() {
        let (services, _, loads) = services(Ok(0));
        let frame = FeatureFrame::single(&PredictionInput::default());
        for _ in 0..3 {
            assert_eq!(services.model.get().unwrap().predict(&frame).unwrap(), vec![0]);
        }
        assert_eq!(loads.get(), 1);
    }

    #[test]
    fn invalidate_forces_reload() {
        let (mut services, reads, loads) = services(Ok(1));
        services.dataset.get().unwrap();
        services.model.get().unwrap();
        services.invalidate();
        assert!(!services.dataset.is_loaded() && !services.model.is_loaded());
        services.dataset.get().unwrap();
        services.model.get().unwrap();
        assert_eq!((reads.get(), loads.get()), (2, 2));
    }

    #[test]
    fn failed_loads_are_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let services = Services::from_config(&AppConfig::rooted_at(dir.path()));
        assert!(services.dataset.get().is_err());
        assert!(matches!(services.model.get(), Err(ModelError::FileMissing { .. })));
        assert!(!services.dataset.is_loaded());

        std::fs::write(dir.path().join("diabetes.csv"), SAMPLE_CSV).unwrap();
        assert_eq!(services.dataset.get().unwrap().n_rows(), 5);
    }
}
