//! Descriptive statistics and chart inputs computed over the dataset.
//!
//! Everything here is pure: the views call these functions once per frame
//! and only draw the results.

use anyhow::Result;

use super::dataset::Dataset;
use crate::ml::{NEGATIVE_TEXT, POSITIVE_TEXT};

// ---------------------------------------------------------------------------
// describe()
// ---------------------------------------------------------------------------

/// Per-column summary, the same rows `DataFrame.describe()` produces.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub name: String,
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n − 1 denominator).
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
    pub max: f64,
}

impl ColumnSummary {
    /// Summarise the non-null values of one column. Empty input yields NaN
    /// everywhere except `count`.
    pub fn from_values(name: &str, values: &[Option<f64>]) -> Self {
        let mut xs: Vec<f64> = values.iter().flatten().copied().collect();
        xs.sort_by(f64::total_cmp);

        let count = xs.len();
        let mean = mean(&xs);
        ColumnSummary {
            name: name.to_string(),
            count,
            mean,
            std: sample_std(&xs, mean),
            min: xs.first().copied().unwrap_or(f64::NAN),
            q25: quantile_sorted(&xs, 0.25),
            q50: quantile_sorted(&xs, 0.50),
            q75: quantile_sorted(&xs, 0.75),
            max: xs.last().copied().unwrap_or(f64::NAN),
        }
    }

    /// `(label, value)` pairs in display order.
    pub fn rows(&self) -> [(&'static str, f64); 8] {
        [
            ("count", self.count as f64),
            ("mean", self.mean),
            ("std", self.std),
            ("min", self.min),
            ("25%", self.q25),
            ("50%", self.q50),
            ("75%", self.q75),
            ("max", self.max),
        ]
    }
}

/// Summaries for every numeric column, in header order.
pub fn describe(dataset: &Dataset) -> Vec<ColumnSummary> {
    dataset
        .numeric_column_names()
        .into_iter()
        .filter_map(|name| {
            let values = dataset.numeric_column(name)?;
            Some(ColumnSummary::from_values(name, &values))
        })
        .collect()
}

fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return f64::NAN;
    }
    xs.iter().sum::<f64>() / xs.len() as f64
}

fn sample_std(xs: &[f64], mean: f64) -> f64 {
    if xs.len() < 2 {
        return f64::NAN;
    }
    let ss: f64 = xs.iter().map(|x| (x - mean).powi(2)).sum();
    (ss / (xs.len() - 1) as f64).sqrt()
}

/// Linear interpolation between closest ranks on sorted input.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

// ---------------------------------------------------------------------------
// Pearson correlation
// ---------------------------------------------------------------------------

/// Pearson coefficient over the rows where both values are present.
/// NaN when fewer than two pairs remain or either side has zero variance.
pub fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> f64 {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect();
    if pairs.len() < 2 {
        return f64::NAN;
    }
    let n = pairs.len() as f64;
    let mx = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let my = pairs.iter().map(|p| p.1).sum::<f64>() / n;

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (x, y) in &pairs {
        let dx = x - mx;
        let dy = y - my;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    if sxx == 0.0 || syy == 0.0 {
        return f64::NAN;
    }
    (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0)
}

/// Square correlation matrix over the numeric columns.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    /// Row-major, `values[i][j]` is corr(columns[i], columns[j]).
    pub values: Vec<Vec<f64>>,
}

pub fn correlation_matrix(dataset: &Dataset) -> Result<CorrelationMatrix> {
    let names = dataset.numeric_column_names();
    if names.is_empty() {
        anyhow::bail!("dataset has no numeric columns to correlate");
    }
    let series: Vec<Vec<Option<f64>>> = names
        .iter()
        .map(|n| dataset.require_numeric(n))
        .collect::<Result<_>>()?;

    let k = series.len();
    let mut values = vec![vec![f64::NAN; k]; k];
    for i in 0..k {
        for j in i..k {
            let r = pearson(&series[i], &series[j]);
            values[i][j] = r;
            values[j][i] = r;
        }
    }
    Ok(CorrelationMatrix {
        columns: names.into_iter().map(str::to_string).collect(),
        values,
    })
}

// ---------------------------------------------------------------------------
// Histogram + KDE
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// `counts.len() + 1` bin edges.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn bin_width(&self) -> f64 {
        self.edges[1] - self.edges[0]
    }

    /// Bin centres, for drawing bars.
    pub fn centers(&self) -> Vec<f64> {
        self.edges.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect()
    }
}

/// Upper bound on histogram bins; a far outlier would otherwise ask for
/// millions of them.
pub const MAX_BINS: usize = 1000;

/// Histogram with the bin count chosen by the `auto` rule: the smaller of
/// the Sturges and Freedman–Diaconis widths (Sturges alone if the IQR is 0).
/// The count never exceeds the number of values or [`MAX_BINS`].
///
/// Non-finite values are left out.
pub fn histogram(values: &[Option<f64>]) -> Result<Histogram> {
    let mut xs = finite_values(values);
    if xs.is_empty() {
        anyhow::bail!("no finite values to bin");
    }
    xs.sort_by(f64::total_cmp);

    let (lo, hi) = (xs[0], xs[xs.len() - 1]);
    if hi == lo {
        return Ok(Histogram {
            edges: vec![lo - 0.5, lo + 0.5],
            counts: vec![xs.len()],
        });
    }

    let n = xs.len() as f64;
    let range = hi - lo;
    let sturges = range / (n.log2() + 1.0);
    let iqr = quantile_sorted(&xs, 0.75) - quantile_sorted(&xs, 0.25);
    let fd = 2.0 * iqr / n.cbrt();
    let width = if fd > 0.0 { fd.min(sturges) } else { sturges };
    let bins = ((range / width).ceil() as usize).clamp(1, xs.len().min(MAX_BINS));

    let step = range / bins as f64;
    let edges: Vec<f64> = (0..=bins).map(|i| lo + step * i as f64).collect();
    let mut counts = vec![0usize; bins];
    for x in &xs {
        let idx = (((x - lo) / step) as usize).min(bins - 1);
        counts[idx] += 1;
    }
    Ok(Histogram { edges, counts })
}

/// Gaussian KDE (Scott bandwidth) evaluated on `points` evenly spaced
/// samples over the data range, scaled so it overlays a count histogram
/// whose bins are `bin_width` wide.
///
/// Returns `None` when the bandwidth is degenerate.
pub fn kde_curve(values: &[Option<f64>], bin_width: f64, points: usize) -> Option<Vec<[f64; 2]>> {
    let xs = finite_values(values);
    if xs.len() < 2 || points < 2 {
        return None;
    }
    let n = xs.len() as f64;
    let bw = sample_std(&xs, mean(&xs)) * n.powf(-0.2);
    if !bw.is_finite() || bw <= 0.0 {
        return None;
    }

    let lo = xs.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let norm = 1.0 / (n * bw * (2.0 * std::f64::consts::PI).sqrt());
    let scale = n * bin_width;

    Some(
        (0..points)
            .map(|i| {
                let x = lo + (hi - lo) * i as f64 / (points - 1) as f64;
                let density: f64 = xs
                    .iter()
                    .map(|xi| (-0.5 * ((x - xi) / bw).powi(2)).exp())
                    .sum::<f64>()
                    * norm;
                [x, density * scale]
            })
            .collect(),
    )
}

fn finite_values(values: &[Option<f64>]) -> Vec<f64> {
    let xs: Vec<f64> = values.iter().flatten().copied().filter(|x| x.is_finite()).collect();
    let dropped = values.iter().flatten().count() - xs.len();
    if dropped > 0 {
        log::warn!("{dropped} non-finite values left out of the histogram");
    }
    xs
}

// ---------------------------------------------------------------------------
// Outcome counts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeCount {
    pub value: i64,
    pub label: &'static str,
    pub count: usize,
}

/// Count the `Outcome` column. Always returns the negative category first
/// and the positive one second, whatever their counts.
pub fn outcome_counts(dataset: &Dataset) -> Result<[OutcomeCount; 2]> {
    let values = dataset.require_numeric("Outcome")?;
    let mut counts = [
        OutcomeCount { value: 0, label: NEGATIVE_TEXT, count: 0 },
        OutcomeCount { value: 1, label: POSITIVE_TEXT, count: 0 },
    ];
    let mut skipped = 0usize;
    for v in values.into_iter().flatten() {
        match v {
            v if v == 0.0 => counts[0].count += 1,
            v if v == 1.0 => counts[1].count += 1,
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        log::warn!("{skipped} Outcome values outside {{0, 1}} were not counted");
    }
    Ok(counts)
}
