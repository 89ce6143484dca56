use std::fmt;

use crate::distance::DistanceError;

#[derive(Debug, Clone, PartialEq)]
pub enum HighDimError {
    InvalidParameter(String),
    DimensionMismatch { left: usize, right: usize },
    DegenerateAngle,
    NonFinite,
    DivisionByZero,
    Io(String),
    Config(String),
    Serialization(String),
}

impl fmt::Display for HighDimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HighDimError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            HighDimError::DimensionMismatch { left, right } => {
                write!(f, "Dimension mismatch: {} vs {}", left, right)
            }
            HighDimError::DegenerateAngle => {
                write!(f, "Angle is undefined against a zero-length vector")
            }
            HighDimError::NonFinite => write!(f, "Coordinates must be finite"),
            HighDimError::DivisionByZero => {
                write!(f, "Percent error is undefined for a zero expectation")
            }
            HighDimError::Io(msg) => write!(f, "I/O failed: {}", msg),
            HighDimError::Config(msg) => write!(f, "Failed to load config: {}", msg),
            HighDimError::Serialization(msg) => write!(f, "Serialization failed: {}", msg),
        }
    }
}

impl std::error::Error for HighDimError {}

impl From<DistanceError> for HighDimError {
    fn from(err: DistanceError) -> Self {
        match err {
            DistanceError::DimensionMismatch { left, right } => {
                HighDimError::DimensionMismatch { left, right }
            }
            DistanceError::DegenerateAngle => HighDimError::DegenerateAngle,
            DistanceError::NonFinite => HighDimError::NonFinite,
        }
    }
}

impl From<std::io::Error> for HighDimError {
    fn from(err: std::io::Error) -> Self {
        HighDimError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for HighDimError {
    fn from(err: serde_json::Error) -> Self {
        HighDimError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for HighDimError {
    fn from(err: toml::de::Error) -> Self {
        HighDimError::Config(err.to_string())
    }
}

// Shared parameter checks. All of these run before any randomness is drawn.

pub fn validate_dimension(dimension: usize) -> Result<(), HighDimError> {
    if dimension == 0 {
        return Err(HighDimError::InvalidParameter(
            "dimension must be a positive, non-zero value".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_count(count: usize) -> Result<(), HighDimError> {
    if count == 0 {
        return Err(HighDimError::InvalidParameter(
            "count must be a positive, non-zero value".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_distribution(mean: f64, standard_deviation: f64) -> Result<(), HighDimError> {
    if !mean.is_finite() {
        return Err(HighDimError::InvalidParameter(format!(
            "mean must be finite, got {}",
            mean
        )));
    }
    if !standard_deviation.is_finite() || standard_deviation < 0.0 {
        return Err(HighDimError::InvalidParameter(format!(
            "standard deviation must be finite and non-negative, got {}",
            standard_deviation
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_bad_parameters() {
        assert!(validate_dimension(0).is_err());
        assert!(validate_count(0).is_err());
        assert!(validate_distribution(0.0, -0.5).is_err());
        assert!(validate_distribution(f64::NAN, 1.0).is_err());
        assert!(validate_distribution(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_accepts_zero_deviation_and_negative_mean() {
        assert!(validate_dimension(1).is_ok());
        assert!(validate_count(1).is_ok());
        assert!(validate_distribution(-3.0, 0.0).is_ok());
    }

    #[test]
    fn test_distance_error_conversion() {
        let err: HighDimError = DistanceError::DimensionMismatch { left: 2, right: 3 }.into();
        assert_eq!(err, HighDimError::DimensionMismatch { left: 2, right: 3 });
        let err: HighDimError = DistanceError::DegenerateAngle.into();
        assert_eq!(err, HighDimError::DegenerateAngle);
        let err: HighDimError = DistanceError::NonFinite.into();
        assert_eq!(err, HighDimError::NonFinite);
    }
}
