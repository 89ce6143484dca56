use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;

use crate::encoding::{cluster_record, percent_error_record};
use crate::models::cluster::GaussianCluster;
use crate::models::common::{
    validate_count, validate_dimension, validate_distribution, HighDimError,
};
use crate::projection::project_to_subspace;
use crate::stats::{scaled_distances, DistributionPlot, ProjectionErrorReport, Summary};

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisParams {
    pub count: usize,
    pub dimension: usize,
    pub projected: Option<usize>,
    pub mean: f64,
    pub standard_deviation: f64,
    pub seed: Option<u64>,
    pub output_root: PathBuf,
    pub histogram_bins: usize,
    pub verbose: bool,
}

impl AnalysisParams {
    pub fn validate(&self) -> Result<(), HighDimError> {
        validate_count(self.count)?;
        validate_dimension(self.dimension)?;
        validate_distribution(self.mean, self.standard_deviation)?;
        if let Some(projected) = self.projected {
            if projected == 0 || projected >= self.dimension {
                return Err(HighDimError::InvalidParameter(
                    "the projected dimension must be positive and smaller than the dimension"
                        .to_string(),
                ));
            }
        }
        if self.histogram_bins == 0 {
            return Err(HighDimError::InvalidParameter(
                "histogram bins must be a positive, non-zero value".to_string(),
            ));
        }
        Ok(())
    }
}

/// Picks the seed for a run; without an explicit one a random seed is drawn
/// so the run can still be reproduced from the recorded value.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}

pub fn rng_from_seed(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn output_dir_name(now: &DateTime<Local>) -> String {
    format!("output_{}", now.format("%Y-%m-%d_%H-%M-%S"))
}

/// `c{count}_d{dimension}_m{mean}_s{standard_deviation}`; floats keep their
/// decimal point (`0.0`, not `0`).
pub fn file_prefix(count: usize, dimension: usize, mean: f64, standard_deviation: f64) -> String {
    format!(
        "c{}_d{}_m{:?}_s{:?}",
        count, dimension, mean, standard_deviation
    )
}

pub fn percent_error_prefix(
    count: usize,
    dimension: usize,
    projected: usize,
    mean: f64,
    standard_deviation: f64,
) -> String {
    format!(
        "c{}_d{}_p{}_m{:?}_s{:?}",
        count, dimension, projected, mean, standard_deviation
    )
}

fn legend(dimension: usize, count: usize) -> String {
    format!("Dimension: {}\nNumber of Points: {}", dimension, count)
}

/// Writes pretty-printed JSON documents into one run directory.
pub struct OutputWriter {
    dir: PathBuf,
    verbose: bool,
    histogram_bins: usize,
    files: Vec<PathBuf>,
}

impl OutputWriter {
    pub fn create(
        dir: PathBuf,
        verbose: bool,
        histogram_bins: usize,
    ) -> Result<Self, HighDimError> {
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            verbose,
            histogram_bins,
            files: Vec::new(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn write_json<T: Serialize + ?Sized>(
        &mut self,
        name: &str,
        value: &T,
    ) -> Result<PathBuf, HighDimError> {
        let json = serde_json::to_string_pretty(value)?;
        let path = self.dir.join(name);
        fs::write(&path, &json)?;
        if self.verbose {
            println!("{}", json);
        }
        log::debug!("wrote {}", path.display());
        self.files.push(path.clone());
        Ok(path)
    }

    /// Writes `values` as `<stem>.json` and, when non-empty, its plot data
    /// as `<stem>_plot.json`.
    fn write_distribution(
        &mut self,
        stem: &str,
        values: &[f64],
        title: &str,
        x_label: &str,
        legend: &str,
    ) -> Result<Option<Summary>, HighDimError> {
        self.write_json(&format!("{}.json", stem), values)?;
        if values.is_empty() {
            log::warn!("{} is empty, skipping plot data", stem);
            return Ok(None);
        }
        let plot = DistributionPlot::build(values, self.histogram_bins, title, x_label, legend)?;
        self.write_json(&format!("{}_plot.json", stem), &plot)?;
        Ok(Some(plot.summary))
    }
}

/// Summaries of the three distributions computed for one cluster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeometrySummary {
    pub origin_distances: Option<Summary>,
    pub cluster_distances: Option<Summary>,
    pub cluster_angles: Option<Summary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionOutcome {
    pub projected_dimension: usize,
    pub geometry: GeometrySummary,
    pub scaled_distances: Option<Summary>,
    pub report: Option<ProjectionErrorReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisOutcome {
    pub output_dir: PathBuf,
    pub seed: u64,
    pub geometry: GeometrySummary,
    pub projection: Option<ProjectionOutcome>,
    pub files: Vec<PathBuf>,
}

/// Writes the cluster, its three geometry distributions and the two
/// pairwise matrices under `prefix`, returning the summaries and the
/// pairwise distances.
fn analyse_cluster(
    writer: &mut OutputWriter,
    cluster: &GaussianCluster,
    prefix: &str,
    label: &str,
) -> Result<(GeometrySummary, Vec<f64>), HighDimError> {
    let legend = legend(cluster.dimension, cluster.count);

    writer.write_json(&format!("{}_{}cluster.json", prefix, label), &cluster_record(cluster))?;

    let origin = cluster.origin_distances()?;
    let origin_distances = writer.write_distribution(
        &format!("{}_{}origin_dists", prefix, label),
        &origin,
        "Distances From Origin",
        "Distance",
        &legend,
    )?;

    let distances = cluster.cluster_distances()?;
    let cluster_distances = writer.write_distribution(
        &format!("{}_{}cluster_dists", prefix, label),
        &distances.values,
        "Distances Between Pairs",
        "Distance",
        &legend,
    )?;
    writer.write_json(
        &format!("{}_{}cluster_dists_matrix.json", prefix, label),
        &distances.matrix.rows(),
    )?;

    let angles = cluster.cluster_angles()?;
    let cluster_angles = writer.write_distribution(
        &format!("{}_{}cluster_angles", prefix, label),
        &angles.values,
        "Angles Between Pairs",
        "Angle (degrees)",
        &legend,
    )?;
    writer.write_json(
        &format!("{}_{}cluster_angles_matrix.json", prefix, label),
        &angles.matrix.rows(),
    )?;

    Ok((
        GeometrySummary {
            origin_distances,
            cluster_distances,
            cluster_angles,
        },
        distances.values,
    ))
}

/// Generates a cluster, writes its geometry, and when a projected dimension
/// is set, projects it and compares the projected distances against the
/// theoretical expectation.
pub fn run_analysis(params: &AnalysisParams) -> Result<AnalysisOutcome, HighDimError> {
    params.validate()?;

    let seed = resolve_seed(params.seed);
    let mut rng = rng_from_seed(seed);
    let dir = params.output_root.join(output_dir_name(&Local::now()));
    let mut writer = OutputWriter::create(dir, params.verbose, params.histogram_bins)?;
    log::info!(
        "analysing {} points in dimension {} (seed {}), writing to {}",
        params.count,
        params.dimension,
        seed,
        writer.dir().display()
    );

    let mut cluster = GaussianCluster::new(
        params.count,
        params.dimension,
        params.mean,
        params.standard_deviation,
    )?;
    cluster.generate(&mut rng)?;

    let prefix = file_prefix(
        params.count,
        params.dimension,
        params.mean,
        params.standard_deviation,
    );
    let (geometry, original_distances) = analyse_cluster(&mut writer, &cluster, &prefix, "")?;
    log::info!("original cluster analysed");

    let projection = match params.projected {
        Some(projected) => Some(analyse_projection(
            &mut writer,
            &cluster,
            &original_distances,
            projected,
            &mut rng,
        )?),
        None => None,
    };

    Ok(AnalysisOutcome {
        output_dir: writer.dir().to_path_buf(),
        seed,
        geometry,
        projection,
        files: writer.files,
    })
}

fn analyse_projection(
    writer: &mut OutputWriter,
    cluster: &GaussianCluster,
    original_distances: &[f64],
    projected: usize,
    rng: &mut StdRng,
) -> Result<ProjectionOutcome, HighDimError> {
    let projected_cluster = project_to_subspace(cluster, projected, rng)?;
    let prefix = file_prefix(
        cluster.count,
        projected,
        cluster.mean,
        cluster.standard_deviation,
    );
    let (geometry, projected_distances) =
        analyse_cluster(writer, &projected_cluster, &prefix, "projected_")?;

    let scaled = scaled_distances(original_distances, projected);
    let scaled_summary = writer.write_distribution(
        &format!("{}_scaled_cluster_dists", prefix),
        &scaled,
        "Distances Between Pairs (Scaled)",
        "Distance",
        &legend(projected, cluster.count),
    )?;

    let report = if projected_distances.is_empty() {
        log::warn!("a single point has no pairwise distances, skipping percent error");
        None
    } else {
        let report = ProjectionErrorReport::compute(
            original_distances,
            &projected_distances,
            cluster.dimension,
            projected,
        )?;
        let prefix = percent_error_prefix(
            cluster.count,
            cluster.dimension,
            projected,
            cluster.mean,
            cluster.standard_deviation,
        );
        writer.write_json(
            &format!("{}_percent_error.json", prefix),
            &percent_error_record(&report),
        )?;
        log::info!(
            "percent error vs expected distance {:.4}: scaled avg {:.4}%, projected avg {:.4}%",
            report.expected_distance,
            report.original_scaled.average,
            report.projected.average
        );
        Some(report)
    };

    Ok(ProjectionOutcome {
        projected_dimension: projected,
        geometry,
        scaled_distances: scaled_summary,
        report,
    })
}
