use rand::Rng;
use rand_distr::{Distribution, Normal};

use super::common::{validate_dimension, validate_distribution, HighDimError};

/// Draws `dimension` coordinates i.i.d. from `N(mean, standard_deviation^2)`.
pub fn generate_values<R: Rng + ?Sized>(
    dimension: usize,
    mean: f64,
    standard_deviation: f64,
    rng: &mut R,
) -> Result<Vec<f64>, HighDimError> {
    validate_dimension(dimension)?;
    validate_distribution(mean, standard_deviation)?;
    let normal = Normal::new(mean, standard_deviation)
        .map_err(|e| HighDimError::InvalidParameter(e.to_string()))?;
    Ok((0..dimension).map(|_| normal.sample(rng)).collect())
}

/// A single sample from a spherical Gaussian in `dimension`-space.
///
/// `values` stays empty until [`GaussianPoint::generate`] is called; calling
/// it again replaces the sample with a fresh independent one.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianPoint {
    pub dimension: usize,
    pub mean: f64,
    pub standard_deviation: f64,
    pub values: Vec<f64>,
}

impl GaussianPoint {
    pub fn new(dimension: usize, mean: f64, standard_deviation: f64) -> Result<Self, HighDimError> {
        validate_dimension(dimension)?;
        validate_distribution(mean, standard_deviation)?;
        Ok(Self {
            dimension,
            mean,
            standard_deviation,
            values: Vec::new(),
        })
    }

    /// Wraps already-computed coordinates, e.g. the output of a projection.
    /// The dimension is taken from `values`.
    pub fn from_values(
        mean: f64,
        standard_deviation: f64,
        values: Vec<f64>,
    ) -> Result<Self, HighDimError> {
        validate_dimension(values.len())?;
        validate_distribution(mean, standard_deviation)?;
        Ok(Self {
            dimension: values.len(),
            mean,
            standard_deviation,
            values,
        })
    }

    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), HighDimError> {
        self.values = generate_values(self.dimension, self.mean, self.standard_deviation, rng)?;
        Ok(())
    }

    pub fn is_generated(&self) -> bool {
        self.values.len() == self.dimension
    }
}
