/// Data layer: core types, loading, and statistics.
///
/// Architecture:
/// ```text
///   diabetes.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  column names + rows of CellValue
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  describe, correlation, histogram / KDE, outcome counts
///   └──────────┘
/// ```

pub mod dataset;
pub mod loader;
pub mod stats;
