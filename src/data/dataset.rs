use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring the common Pandas dtypes.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Try to interpret the value as an `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table. Rows are stored in file order and every row has
/// exactly `columns.len()` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Dataset {
    /// Build a dataset, rejecting rows whose width differs from the header.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> anyhow::Result<Self> {
        if let Some((i, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != columns.len())
        {
            anyhow::bail!(
                "row {i} has {} fields but the header has {}",
                row.len(),
                columns.len()
            );
        }
        Ok(Self { columns, rows })
    }

    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// A column is numeric when every non-null cell is an integer or a float.
    pub fn is_numeric(&self, idx: usize) -> bool {
        self.rows.iter().all(|row| match &row[idx] {
            CellValue::Integer(_) | CellValue::Float(_) | CellValue::Null => true,
            CellValue::Text(_) => false,
        })
    }

    /// Names of all numeric columns, in header order.
    pub fn numeric_column_names(&self) -> Vec<&str> {
        (0..self.n_cols())
            .filter(|&i| self.is_numeric(i))
            .map(|i| self.columns[i].as_str())
            .collect()
    }

    /// Values of a numeric column, `None` for null cells.
    ///
    /// Returns `None` if the column is absent or not numeric.
    pub fn numeric_column(&self, name: &str) -> Option<Vec<Option<f64>>> {
        let idx = self.column_index(name)?;
        if !self.is_numeric(idx) {
            return None;
        }
        Some(self.rows.iter().map(|row| row[idx].as_f64()).collect())
    }

    /// Like [`Dataset::numeric_column`] but as an error for the view layer.
    pub fn require_numeric(&self, name: &str) -> anyhow::Result<Vec<Option<f64>>> {
        match self.column_index(name) {
            None => anyhow::bail!("column '{name}' not found in dataset"),
            Some(_) => self
                .numeric_column(name)
                .ok_or_else(|| anyhow::anyhow!("column '{name}' is not numeric")),
        }
    }
}
