use rand::Rng;
use rand_distr::StandardNormal;

use crate::distance::dot_product;
use crate::models::cluster::GaussianCluster;
use crate::models::common::HighDimError;
use crate::models::point::GaussianPoint;

/// A random linear map from `source_dimension` to `axes.len()` dimensions.
///
/// Each axis is a vector of i.i.d. standard normal coordinates, and the
/// projected coordinate along it is a plain dot product. There is no
/// `1/sqrt(k)` normalisation, so projected pairwise distances grow like
/// `sqrt(k)` times the original ones (see [`crate::stats::expected_distance`]).
#[derive(Debug, Clone, PartialEq)]
pub struct RandomProjection {
    source_dimension: usize,
    axes: Vec<Vec<f64>>,
}

impl RandomProjection {
    /// Draws `target_dimension` independent axes of length `source_dimension`.
    /// Requires `0 < target_dimension < source_dimension`.
    pub fn sample<R: Rng + ?Sized>(
        source_dimension: usize,
        target_dimension: usize,
        rng: &mut R,
    ) -> Result<Self, HighDimError> {
        if target_dimension == 0 || target_dimension >= source_dimension {
            return Err(HighDimError::InvalidParameter(format!(
                "projected dimension must be in 1..{}, got {}",
                source_dimension, target_dimension
            )));
        }

        let axes: Vec<Vec<f64>> = (0..target_dimension)
            .map(|_| {
                (0..source_dimension)
                    .map(|_| rng.sample::<f64, _>(StandardNormal))
                    .collect::<Vec<f64>>()
            })
            .collect();

        Ok(Self {
            source_dimension,
            axes,
        })
    }

    /// Builds a projection from explicit axes, all of the same length.
    pub fn from_axes(axes: Vec<Vec<f64>>) -> Result<Self, HighDimError> {
        let source_dimension = match axes.first() {
            Some(axis) if !axis.is_empty() => axis.len(),
            _ => {
                return Err(HighDimError::InvalidParameter(
                    "projection needs at least one non-empty axis".to_string(),
                ))
            }
        };
        if let Some(axis) = axes.iter().find(|a| a.len() != source_dimension) {
            return Err(HighDimError::DimensionMismatch {
                left: source_dimension,
                right: axis.len(),
            });
        }
        Ok(Self {
            source_dimension,
            axes,
        })
    }

    pub fn source_dimension(&self) -> usize {
        self.source_dimension
    }

    pub fn target_dimension(&self) -> usize {
        self.axes.len()
    }

    pub fn apply(&self, values: &[f64]) -> Result<Vec<f64>, HighDimError> {
        self.axes
            .iter()
            .map(|axis| dot_product(values, axis).map_err(HighDimError::from))
            .collect()
    }

    /// Projects every point of `cluster` with the same axes. The new cluster
    /// keeps the original generation parameters as metadata.
    ///
    /// O(count * source_dimension * target_dimension).
    pub fn project_cluster(
        &self,
        cluster: &GaussianCluster,
    ) -> Result<GaussianCluster, HighDimError> {
        if cluster.dimension != self.source_dimension {
            return Err(HighDimError::DimensionMismatch {
                left: cluster.dimension,
                right: self.source_dimension,
            });
        }
        cluster.ensure_generated()?;

        let mut projected = GaussianCluster::new(
            cluster.count,
            self.target_dimension(),
            cluster.mean,
            cluster.standard_deviation,
        )?;
        projected.points = cluster
            .points
            .iter()
            .map(|p| {
                GaussianPoint::from_values(p.mean, p.standard_deviation, self.apply(&p.values)?)
            })
            .collect::<Result<Vec<_>, HighDimError>>()?;

        Ok(projected)
    }
}

/// Projects `cluster` from its dimension `d` down to `target_dimension`
/// (`k < d`) through a freshly sampled [`RandomProjection`]. The original
/// cluster is left untouched, and `rng` is not advanced when the cluster or
/// `target_dimension` is rejected.
pub fn project_to_subspace<R: Rng + ?Sized>(
    cluster: &GaussianCluster,
    target_dimension: usize,
    rng: &mut R,
) -> Result<GaussianCluster, HighDimError> {
    cluster.ensure_generated()?;
    let projection = RandomProjection::sample(cluster.dimension, target_dimension, rng)?;
    let projected = projection.project_cluster(cluster)?;
    log::debug!(
        "projected {} points from dimension {} to {}",
        projected.count,
        cluster.dimension,
        target_dimension
    );
    Ok(projected)
}
