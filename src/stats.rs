//! Error statistics comparing sampled distances with the distance expected
//! under random projection, plus the summary scalars and fitted curve a
//! plotting layer needs.

use std::f64::consts::PI;

use serde::Serialize;

use crate::models::common::HighDimError;

/// Theoretical pairwise distance after projecting a standard normal cloud
/// from `dimension` to `projected_dimension` with unnormalised Gaussian axes.
///
/// A coordinate difference in the original space has variance 2, so each
/// projected coordinate difference has variance `2 * dimension`, and the
/// squared distance sums `projected_dimension` of those.
pub fn expected_distance(dimension: usize, projected_dimension: usize) -> f64 {
    (2.0 * dimension as f64 * projected_dimension as f64).sqrt()
}

/// Rescales original-space distances by `sqrt(projected_dimension)` so they
/// are comparable with projected distances.
pub fn scaled_distances(distances: &[f64], projected_dimension: usize) -> Vec<f64> {
    let scale = (projected_dimension as f64).sqrt();
    distances.iter().map(|d| d * scale).collect()
}

pub fn percent_error(expected: f64, observed: f64) -> Result<f64, HighDimError> {
    if expected == 0.0 {
        return Err(HighDimError::DivisionByZero);
    }
    Ok(100.0 * ((observed - expected).abs() / expected))
}

fn ensure_non_empty(distances: &[f64]) -> Result<(), HighDimError> {
    if distances.is_empty() {
        return Err(HighDimError::InvalidParameter(
            "no distances to compare against the expectation".to_string(),
        ));
    }
    Ok(())
}

/// Percent error of the mean of `distances` against [`expected_distance`].
pub fn average_percent_error(
    distances: &[f64],
    dimension: usize,
    projected_dimension: usize,
) -> Result<f64, HighDimError> {
    ensure_non_empty(distances)?;
    let average = distances.iter().sum::<f64>() / distances.len() as f64;
    percent_error(expected_distance(dimension, projected_dimension), average)
}

/// Percent error of `expected - max_deviation` against the expectation,
/// where `max_deviation` is the largest `|distance - expected|`.
///
/// The deviation is always subtracted, so a sample far *above* the
/// expectation is scored as if it were equally far below it.
pub fn max_percent_error(
    distances: &[f64],
    dimension: usize,
    projected_dimension: usize,
) -> Result<f64, HighDimError> {
    ensure_non_empty(distances)?;
    let expected = expected_distance(dimension, projected_dimension);
    let max_deviation = distances
        .iter()
        .map(|d| (d - expected).abs())
        .fold(0.0_f64, f64::max);
    percent_error(expected, expected - max_deviation)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercentErrors {
    pub average: f64,
    pub max: f64,
}

impl PercentErrors {
    pub fn compute(
        distances: &[f64],
        dimension: usize,
        projected_dimension: usize,
    ) -> Result<Self, HighDimError> {
        Ok(Self {
            average: average_percent_error(distances, dimension, projected_dimension)?,
            max: max_percent_error(distances, dimension, projected_dimension)?,
        })
    }
}

/// How well original-space (scaled) and projected distances match the
/// theoretical projected distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionErrorReport {
    pub dimension: usize,
    pub projected_dimension: usize,
    pub expected_distance: f64,
    pub original_scaled: PercentErrors,
    pub projected: PercentErrors,
}

impl ProjectionErrorReport {
    /// `original_distances` are the unscaled pairwise distances of the
    /// original cluster; they are scaled by `sqrt(projected_dimension)` here.
    pub fn compute(
        original_distances: &[f64],
        projected_distances: &[f64],
        dimension: usize,
        projected_dimension: usize,
    ) -> Result<Self, HighDimError> {
        let scaled = scaled_distances(original_distances, projected_dimension);
        Ok(Self {
            dimension,
            projected_dimension,
            expected_distance: expected_distance(dimension, projected_dimension),
            original_scaled: PercentErrors::compute(&scaled, dimension, projected_dimension)?,
            projected: PercentErrors::compute(
                projected_distances,
                dimension,
                projected_dimension,
            )?,
        })
    }
}

/// Population moments and range of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub variance: f64,
    pub standard_deviation: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    pub fn of(values: &[f64]) -> Result<Self, HighDimError> {
        if values.is_empty() {
            return Err(HighDimError::InvalidParameter(
                "cannot summarise an empty sample".to_string(),
            ));
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        Ok(Self {
            count: values.len(),
            mean,
            variance,
            standard_deviation: variance.sqrt(),
            min: values.iter().copied().fold(f64::INFINITY, f64::min),
            max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        })
    }
}

/// Density of `N(mean, standard_deviation^2)` at `x`. A zero deviation has
/// no density; it yields `0.0` everywhere.
pub fn normal_pdf(x: f64, mean: f64, standard_deviation: f64) -> f64 {
    if standard_deviation <= 0.0 {
        return 0.0;
    }
    let z = (x - mean) / standard_deviation;
    (-0.5 * z * z).exp() / (standard_deviation * (2.0 * PI).sqrt())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
    pub density: f64,
}

/// Equal-width bins over `[min, max]`, normalised so the bar areas sum to 1.
/// The last bin is closed on the right.
pub fn histogram(values: &[f64], bins: usize) -> Result<Vec<HistogramBin>, HighDimError> {
    if bins == 0 {
        return Err(HighDimError::InvalidParameter(
            "histogram needs at least one bin".to_string(),
        ));
    }
    let summary = Summary::of(values)?;
    let (lo, hi) = if summary.max > summary.min {
        (summary.min, summary.max)
    } else {
        (summary.min - 0.5, summary.max + 0.5)
    };
    let width = (hi - lo) / bins as f64;

    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    let total = values.len() as f64;
    Ok(counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: lo + i as f64 * width,
            upper: lo + (i + 1) as f64 * width,
            count,
            density: count as f64 / (total * width),
        })
        .collect())
}

/// Everything an external renderer needs to draw a density histogram with
/// a fitted normal curve overlaid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionPlot {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend: String,
    pub summary: Summary,
    pub sorted_values: Vec<f64>,
    pub fitted_curve: Vec<f64>,
    pub histogram: Vec<HistogramBin>,
}

impl DistributionPlot {
    pub fn build(
        values: &[f64],
        bins: usize,
        title: &str,
        x_label: &str,
        legend: &str,
    ) -> Result<Self, HighDimError> {
        let summary = Summary::of(values)?;
        let mut sorted_values = values.to_vec();
        sorted_values.sort_by(f64::total_cmp);
        let fitted_curve = sorted_values
            .iter()
            .map(|&x| normal_pdf(x, summary.mean, summary.standard_deviation))
            .collect();

        Ok(Self {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: "PDF".to_string(),
            legend: legend.to_string(),
            summary,
            sorted_values,
            fitted_curve,
            histogram: histogram(values, bins)?,
        })
    }
}
