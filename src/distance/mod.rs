pub mod angle;
pub mod euclidean;

pub use angle::pairwise_angle;
pub use euclidean::{dot_product, euclidean_distance, origin_distance};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistanceError {
    DimensionMismatch { left: usize, right: usize },
    DegenerateAngle,
    NonFinite,
}

fn check_dimensions(x: &[f64], y: &[f64]) -> Result<(), DistanceError> {
    if x.len() != y.len() {
        return Err(DistanceError::DimensionMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    Ok(())
}
