use super::{check_dimensions, euclidean_distance, origin_distance, DistanceError};

/// Angle in degrees at the origin between the rays towards `x` and `y`,
/// computed from the three side lengths with the Law of Cosines:
///
/// `acos((|x|^2 + |y|^2 - |x-y|^2) / (2|x||y|))`
///
/// The angle does not depend on the length of either vector, so each one is
/// first divided by its largest coordinate magnitude. This keeps the side
/// lengths near 1 for coordinates anywhere in the finite `f64` range. The
/// ratio is clamped to `[-1, 1]` since rounding can push nearly
/// (anti)parallel vectors just outside the domain of `acos`.
///
/// Returns `DistanceError::NonFinite` if a coordinate is NaN or infinite and
/// `DistanceError::DegenerateAngle` if either vector has zero length.
pub fn pairwise_angle(x: &[f64], y: &[f64]) -> Result<f64, DistanceError> {
    check_dimensions(x, y)?;

    let x = rescaled(x)?;
    let y = rescaled(y)?;

    let xo_dist = origin_distance(&x);
    let yo_dist = origin_distance(&y);
    let xy_dist = euclidean_distance(&x, &y)?;

    let length_sum = xo_dist.powi(2) + yo_dist.powi(2) - xy_dist.powi(2);
    let ratio = length_sum / (2.0 * xo_dist * yo_dist);
    if !ratio.is_finite() {
        return Err(DistanceError::NonFinite);
    }

    Ok(ratio.clamp(-1.0, 1.0).acos().to_degrees())
}

/// `x` divided by its largest coordinate magnitude.
fn rescaled(x: &[f64]) -> Result<Vec<f64>, DistanceError> {
    let scale = x.iter().try_fold(0.0_f64, |acc, &v| {
        if v.is_finite() {
            Ok(acc.max(v.abs()))
        } else {
            Err(DistanceError::NonFinite)
        }
    })?;
    if scale == 0.0 {
        return Err(DistanceError::DegenerateAngle);
    }
    Ok(x.iter().map(|&v| v / scale).collect())
}
