//! Keyed record forms of the domain types, kept apart from the types
//! themselves so that nothing in the geometry depends on serde.

use serde::{Deserialize, Serialize};

use crate::models::cluster::GaussianCluster;
use crate::models::common::HighDimError;
use crate::models::point::GaussianPoint;
use crate::stats::ProjectionErrorReport;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub dimension: usize,
    pub mean: f64,
    pub standard_deviation: f64,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterRecord {
    pub count: usize,
    pub dimension: usize,
    pub mean: f64,
    pub standard_deviation: f64,
    pub points: Vec<PointRecord>,
}

pub fn point_record(point: &GaussianPoint) -> PointRecord {
    PointRecord {
        dimension: point.dimension,
        mean: point.mean,
        standard_deviation: point.standard_deviation,
        values: point.values.clone(),
    }
}

pub fn cluster_record(cluster: &GaussianCluster) -> ClusterRecord {
    ClusterRecord {
        count: cluster.count,
        dimension: cluster.dimension,
        mean: cluster.mean,
        standard_deviation: cluster.standard_deviation,
        points: cluster.points.iter().map(point_record).collect(),
    }
}

/// Rebuilds a cluster, checking every point against the cluster's
/// parameters.
pub fn cluster_from_record(record: ClusterRecord) -> Result<GaussianCluster, HighDimError> {
    let mut cluster = GaussianCluster::new(
        record.count,
        record.dimension,
        record.mean,
        record.standard_deviation,
    )?;

    if record.points.len() != record.count {
        return Err(HighDimError::InvalidParameter(format!(
            "cluster record declares {} points but holds {}",
            record.count,
            record.points.len()
        )));
    }

    let mut points = Vec::with_capacity(record.points.len());
    for p in record.points {
        if p.dimension != record.dimension {
            return Err(HighDimError::DimensionMismatch {
                left: record.dimension,
                right: p.dimension,
            });
        }
        if p.values.len() != p.dimension {
            return Err(HighDimError::DimensionMismatch {
                left: p.dimension,
                right: p.values.len(),
            });
        }
        if p.mean != record.mean || p.standard_deviation != record.standard_deviation {
            return Err(HighDimError::InvalidParameter(
                "point parameters differ from the cluster's".to_string(),
            ));
        }
        points.push(GaussianPoint::from_values(p.mean, p.standard_deviation, p.values)?);
    }
    cluster.points = points;

    Ok(cluster)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorPair {
    #[serde(rename = "Original Dimension Scaled")]
    pub original_dimension_scaled: String,
    #[serde(rename = "Projected Dimension")]
    pub projected_dimension: String,
}

/// Percent-error document, values rendered as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentErrorRecord {
    #[serde(rename = "Average")]
    pub average: ErrorPair,
    #[serde(rename = "Max")]
    pub max: ErrorPair,
}

/// Values are written with `{:?}` so whole numbers keep their trailing `.0`.
pub fn percent_error_record(report: &ProjectionErrorReport) -> PercentErrorRecord {
    PercentErrorRecord {
        average: ErrorPair {
            original_dimension_scaled: format!("{:?}", report.original_scaled.average),
            projected_dimension: format!("{:?}", report.projected.average),
        },
        max: ErrorPair {
            original_dimension_scaled: format!("{:?}", report.original_scaled.max),
            projected_dimension: format!("{:?}", report.projected.max),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{rngs::StdRng, SeedableRng};

    use crate::stats::PercentErrors;

    fn generated() -> GaussianCluster {
        let mut cluster = GaussianCluster::new(3, 4, 0.5, 2.0).unwrap();
        cluster.generate(&mut StdRng::seed_from_u64(10)).unwrap();
        cluster
    }

    #[test]
    fn test_cluster_record_field_names() {
        let value = serde_json::to_value(cluster_record(&generated())).unwrap();
        assert_eq!(value["count"], 3);
        assert_eq!(value["dimension"], 4);
        assert_eq!(value["mean"], 0.5);
        assert_eq!(value["standard_deviation"], 2.0);
        let point = &value["points"][0];
        assert_eq!(point["dimension"], 4);
        assert_eq!(point["mean"], 0.5);
        assert_eq!(point["standard_deviation"], 2.0);
        assert_eq!(point["values"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_json_round_trip() {
        let cluster = generated();
        let json = serde_json::to_string(&cluster_record(&cluster)).unwrap();
        let record: ClusterRecord = serde_json::from_str(&json).unwrap();
        let decoded = cluster_from_record(record).unwrap();
        assert_eq!(decoded.count, cluster.count);
        assert_eq!(decoded.dimension, cluster.dimension);
        assert_eq!(decoded.mean, cluster.mean);
        assert_eq!(decoded.standard_deviation, cluster.standard_deviation);
        for (a, b) in decoded.points.iter().zip(&cluster.points) {
            assert_eq!(a.values.len(), b.values.len());
            for (x, y) in a.values.iter().zip(&b.values) {
                assert!((x - y).abs() <= 1e-12 * y.abs().max(1.0));
            }
        }
    }

    #[test]
    fn test_decode_rejects_inconsistent_records() {
        let mut record = cluster_record(&generated());
        record.points.pop();
        assert!(cluster_from_record(record).is_err());

        let mut record = cluster_record(&generated());
        record.points[1].values.push(1.0);
        assert_eq!(
            cluster_from_record(record),
            Err(HighDimError::DimensionMismatch { left: 4, right: 5 })
        );

        let mut record = cluster_record(&generated());
        record.points[2].mean = 9.0;
        assert!(cluster_from_record(record).is_err());
    }

    #[test]
    fn test_percent_error_record_keys() {
        let report = ProjectionErrorReport {
            dimension: 10,
            projected_dimension: 2,
            expected_distance: 40f64.sqrt(),
            original_scaled: PercentErrors { average: 1.5, max: 7.0 },
            projected: PercentErrors { average: 2.5, max: 9.0 },
        };
        let value = serde_json::to_value(percent_error_record(&report)).unwrap();
        assert_eq!(value["Average"]["Original Dimension Scaled"], "1.5");
        assert_eq!(value["Average"]["Projected Dimension"], "2.5");
        assert_eq!(value["Max"]["Original Dimension Scaled"], "7.0");
        assert_eq!(value["Max"]["Projected Dimension"], "9.0");
    }
}
