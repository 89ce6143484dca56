use std::path::PathBuf;

use clap::Parser;

use crate::analysis::AnalysisParams;
use crate::config_loader::Config;
use crate::models::common::HighDimError;

/// Tool for analyzing Gaussians in high dimension.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct HighDimArgs {
    /// Detailed console logging; every JSON document is echoed to stdout.
    #[arg(short, long)]
    pub verbose: bool,

    /// Number of points in the distribution.
    #[arg(short, long)]
    pub count: Option<usize>,

    /// Dimensional size of the space, number of axes.
    #[arg(short, long)]
    pub dimension: Option<usize>,

    /// Projected dimensional size of the space.
    #[arg(short, long)]
    pub projected: Option<usize>,

    /// Target mean of the distribution.
    #[arg(short, long, allow_negative_numbers = true)]
    pub mean: Option<f64>,

    /// Target standard deviation of the distribution.
    #[arg(short, long, allow_negative_numbers = true)]
    pub standard_deviation: Option<f64>,

    /// Seed for the random source; drawn at random when absent.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path of the TOML config file holding the defaults.
    #[arg(long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Directory in which the timestamped output directory is created.
    #[arg(long)]
    pub output_root: Option<PathBuf>,
}

impl HighDimArgs {
    /// Command-line values win over the config file.
    pub fn into_params(self, config: Config) -> Result<AnalysisParams, HighDimError> {
        let params = AnalysisParams {
            count: self.count.unwrap_or(config.defaults.count),
            dimension: self.dimension.unwrap_or(config.defaults.dimension),
            projected: self.projected.or(config.defaults.projected),
            mean: self.mean.unwrap_or(config.defaults.mean),
            standard_deviation: self
                .standard_deviation
                .unwrap_or(config.defaults.standard_deviation),
            seed: self.seed.or(config.seed),
            output_root: self.output_root.unwrap_or(config.output.root_dir),
            histogram_bins: config.output.histogram_bins,
            verbose: self.verbose,
        };
        params.validate()?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> HighDimArgs {
        HighDimArgs::try_parse_from(std::iter::once("highdim").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults_come_from_config() {
        let params = parse(&[]).into_params(Config::default()).unwrap();
        assert_eq!(params.count, 50);
        assert_eq!(params.dimension, 400);
        assert_eq!(params.projected, None);
        assert_eq!(params.mean, 0.0);
        assert_eq!(params.standard_deviation, 1.0);
        assert!(!params.verbose);
    }

    #[test]
    fn test_short_flags_override_config() {
        let params = parse(&["-v", "-c", "20", "-d", "1000", "-p", "100", "-m", "-1.5", "-s", "2"])
            .into_params(Config::default())
            .unwrap();
        assert!(params.verbose);
        assert_eq!(params.count, 20);
        assert_eq!(params.dimension, 1000);
        assert_eq!(params.projected, Some(100));
        assert_eq!(params.mean, -1.5);
        assert_eq!(params.standard_deviation, 2.0);
    }

    #[test]
    fn test_long_flags() {
        let params = parse(&["--standard-deviation", "0.5", "--seed", "9", "--output-root", "out"])
            .into_params(Config::default())
            .unwrap();
        assert_eq!(params.standard_deviation, 0.5);
        assert_eq!(params.seed, Some(9));
        assert_eq!(params.output_root, PathBuf::from("out"));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(parse(&["-c", "0"]).into_params(Config::default()).is_err());
        assert!(parse(&["-d", "0"]).into_params(Config::default()).is_err());
        assert!(parse(&["-d", "10", "-p", "10"])
            .into_params(Config::default())
            .is_err());
        assert!(parse(&["-s", "-1"]).into_params(Config::default()).is_err());
        assert!(HighDimArgs::try_parse_from(["highdim", "-c", "-3"]).is_err());
    }
}
