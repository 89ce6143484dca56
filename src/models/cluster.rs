use rand::Rng;

use super::common::{validate_count, validate_dimension, validate_distribution, HighDimError};
use super::pairwise::PairwiseSet;
use super::point::GaussianPoint;
use crate::distance::{euclidean_distance, origin_distance, pairwise_angle};

/// `count` independent samples from the same spherical Gaussian.
///
/// Points are identified by their index in `points`, which is also the row
/// and column used in the pairwise matrices. A cluster of `count` points in
/// `dimension`-space holds `O(count * dimension)` values; the pairwise
/// computations cost `O(count^2)` memory and `O(count^2 * dimension)` time.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianCluster {
    pub count: usize,
    pub dimension: usize,
    pub mean: f64,
    pub standard_deviation: f64,
    pub points: Vec<GaussianPoint>,
}

impl GaussianCluster {
    pub fn new(
        count: usize,
        dimension: usize,
        mean: f64,
        standard_deviation: f64,
    ) -> Result<Self, HighDimError> {
        validate_count(count)?;
        validate_dimension(dimension)?;
        validate_distribution(mean, standard_deviation)?;
        Ok(Self {
            count,
            dimension,
            mean,
            standard_deviation,
            points: Vec::new(),
        })
    }

    /// Replaces `points` with `count` freshly sampled points.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), HighDimError> {
        let mut points = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            let mut point = GaussianPoint::new(self.dimension, self.mean, self.standard_deviation)?;
            point.generate(rng)?;
            points.push(point);
        }
        self.points = points;
        log::debug!(
            "generated cluster of {} points in dimension {}",
            self.count,
            self.dimension
        );
        Ok(())
    }

    /// True once `points` holds `count` generated points that share the
    /// cluster's dimension and distribution parameters.
    pub fn is_generated(&self) -> bool {
        self.points.len() == self.count
            && self.points.iter().all(|p| {
                p.is_generated()
                    && p.dimension == self.dimension
                    && p.mean == self.mean
                    && p.standard_deviation == self.standard_deviation
            })
    }

    pub(crate) fn ensure_generated(&self) -> Result<(), HighDimError> {
        if !self.is_generated() {
            return Err(HighDimError::InvalidParameter(
                "cluster has not been generated".to_string(),
            ));
        }
        Ok(())
    }

    /// Distance of every point from the origin, in index order.
    pub fn origin_distances(&self) -> Result<Vec<f64>, HighDimError> {
        self.ensure_generated()?;
        Ok(self
            .points
            .iter()
            .map(|p| origin_distance(&p.values))
            .collect())
    }

    pub fn cluster_distances(&self) -> Result<PairwiseSet, HighDimError> {
        self.ensure_generated()?;
        PairwiseSet::compute(&self.points, euclidean_distance)
    }

    /// Angles in degrees, measured at the origin between the rays towards
    /// each pair of points.
    pub fn cluster_angles(&self) -> Result<PairwiseSet, HighDimError> {
        self.ensure_generated()?;
        PairwiseSet::compute(&self.points, pairwise_angle)
    }
}
