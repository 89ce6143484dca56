use std::fs;

use highdim::analysis::{run_analysis, AnalysisParams};
use highdim::encoding::{cluster_from_record, ClusterRecord, PercentErrorRecord};
use highdim::stats::expected_distance;

fn params(root: &std::path::Path) -> AnalysisParams {
    AnalysisParams {
        count: 30,
        dimension: 400,
        projected: Some(40),
        mean: 0.0,
        standard_deviation: 1.0,
        seed: Some(2024),
        output_root: root.to_path_buf(),
        histogram_bins: 10,
        verbose: false,
    }
}

#[test]
fn test_full_run_writes_every_document() {
    let root = tempfile::tempdir().unwrap();
    let outcome = run_analysis(&params(root.path())).unwrap();

    let dir = &outcome.output_dir;
    assert!(dir.starts_with(root.path()));
    assert!(dir
        .file_name()
        .unwrap()
        .to_string_lossy()
        .starts_with("output_"));

    let expected = [
        "c30_d400_m0.0_s1.0_cluster.json",
        "c30_d400_m0.0_s1.0_origin_dists.json",
        "c30_d400_m0.0_s1.0_origin_dists_plot.json",
        "c30_d400_m0.0_s1.0_cluster_dists.json",
        "c30_d400_m0.0_s1.0_cluster_dists_matrix.json",
        "c30_d400_m0.0_s1.0_cluster_angles.json",
        "c30_d400_m0.0_s1.0_cluster_angles_matrix.json",
        "c30_d40_m0.0_s1.0_projected_cluster.json",
        "c30_d40_m0.0_s1.0_projected_origin_dists.json",
        "c30_d40_m0.0_s1.0_projected_cluster_dists.json",
        "c30_d40_m0.0_s1.0_projected_cluster_angles.json",
        "c30_d40_m0.0_s1.0_projected_cluster_angles_matrix.json",
        "c30_d40_m0.0_s1.0_scaled_cluster_dists.json",
        "c30_d400_p40_m0.0_s1.0_percent_error.json",
    ];
    for name in expected {
        assert!(dir.join(name).exists(), "missing {}", name);
    }
    assert!(outcome.files.iter().all(|f| f.exists()));
}

#[test]
fn test_cluster_documents_decode() {
    let root = tempfile::tempdir().unwrap();
    let outcome = run_analysis(&params(root.path())).unwrap();

    let json =
        fs::read_to_string(outcome.output_dir.join("c30_d40_m0.0_s1.0_projected_cluster.json"))
            .unwrap();
    let record: ClusterRecord = serde_json::from_str(&json).unwrap();
    let projected = cluster_from_record(record).unwrap();
    assert_eq!(projected.count, 30);
    assert_eq!(projected.dimension, 40);

    let dists: Vec<f64> = serde_json::from_str(
        &fs::read_to_string(outcome.output_dir.join("c30_d400_m0.0_s1.0_cluster_dists.json"))
            .unwrap(),
    )
    .unwrap();
    assert_eq!(dists.len(), 30 * 29 / 2);

    let matrix: Vec<Vec<f64>> = serde_json::from_str(
        &fs::read_to_string(
            outcome
                .output_dir
                .join("c30_d400_m0.0_s1.0_cluster_dists_matrix.json"),
        )
        .unwrap(),
    )
    .unwrap();
    assert_eq!(matrix.len(), 30);
    assert_eq!(matrix[0][1], dists[0]);
    assert_eq!(matrix[28][29], dists[dists.len() - 1]);
}

#[test]
fn test_projected_distances_match_theory() {
    let root = tempfile::tempdir().unwrap();
    let outcome = run_analysis(&params(root.path())).unwrap();
    let projection = outcome.projection.unwrap();
    let report = projection.report.unwrap();

    assert_eq!(report.expected_distance, expected_distance(400, 40));
    assert!(report.original_scaled.average < 5.0, "{:?}", report);
    assert!(report.projected.average < 15.0, "{:?}", report);
    // The worst single deviation bounds the deviation of the mean.
    assert!(report.projected.max >= report.projected.average - 1e-9);

    let json = fs::read_to_string(
        outcome
            .output_dir
            .join("c30_d400_p40_m0.0_s1.0_percent_error.json"),
    )
    .unwrap();
    let record: PercentErrorRecord = serde_json::from_str(&json).unwrap();
    let average: f64 = record.average.projected_dimension.parse().unwrap();
    assert_eq!(average, report.projected.average);
}

#[test]
fn test_single_point_run_skips_percent_error() {
    let root = tempfile::tempdir().unwrap();
    let mut p = params(root.path());
    p.count = 1;
    p.dimension = 2;
    p.projected = Some(1);
    let outcome = run_analysis(&p).unwrap();

    assert!(outcome.geometry.cluster_distances.is_none());
    let projection = outcome.projection.unwrap();
    assert!(projection.report.is_none());
    let dists: Vec<f64> = serde_json::from_str(
        &fs::read_to_string(outcome.output_dir.join("c1_d2_m0.0_s1.0_cluster_dists.json"))
            .unwrap(),
    )
    .unwrap();
    assert!(dists.is_empty());
}

#[test]
fn test_invalid_projection_is_rejected() {
    let root = tempfile::tempdir().unwrap();
    let mut p = params(root.path());
    p.projected = Some(400);
    assert!(run_analysis(&p).is_err());
}
