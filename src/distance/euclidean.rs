use super::{check_dimensions, DistanceError};

/// L2 norm of `values`, computed on coordinates divided by the largest
/// magnitude so the squares neither underflow nor overflow. A NaN
/// coordinate yields NaN.
fn scaled_norm<I>(values: I) -> f64
where
    I: Iterator<Item = f64> + Clone,
{
    let scale = values.clone().fold(0.0_f64, |acc, v| {
        if acc.is_nan() || v.is_nan() {
            f64::NAN
        } else {
            acc.max(v.abs())
        }
    });
    if scale == 0.0 || !scale.is_finite() {
        return scale;
    }
    scale
        * values
            .map(|v| {
                let r = v / scale;
                r * r
            })
            .sum::<f64>()
            .sqrt()
}

/// Euclidean distance between two points of equal dimension.
pub fn euclidean_distance(x: &[f64], y: &[f64]) -> Result<f64, DistanceError> {
    check_dimensions(x, y)?;
    Ok(scaled_norm(x.iter().zip(y.iter()).map(|(&a, &b)| a - b)))
}

/// Distance from the zero vector of the same dimension, i.e. the L2 norm.
pub fn origin_distance(x: &[f64]) -> f64 {
    scaled_norm(x.iter().copied())
}

pub fn dot_product(x: &[f64], y: &[f64]) -> Result<f64, DistanceError> {
    check_dimensions(x, y)?;
    Ok(x.iter().zip(y.iter()).map(|(&a, &b)| a * b).sum())
}
