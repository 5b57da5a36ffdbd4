use crate::error::GeometryError;

use super::{Matrix3, Vector3};

/// Builds the matrix that rotates by `theta` radians around the unit
/// vector `axis` (Rodrigues' formula).
///
/// # Errors
///
/// Returns [`GeometryError::NonUnitAxis`] if `axis` is not of unit length.
pub fn rotation_matrix(axis: &Vector3, theta: f64) -> Result<Matrix3, GeometryError> {
    let len_sq = axis.norm_squared();
    if (len_sq - 1.0).abs() > 1.0e-8 {
        return Err(GeometryError::NonUnitAxis(len_sq));
    }

    let cross = axis.cross_matrix();
    let c = theta.cos();
    let s = theta.sin();
    Ok(Matrix3::identity() * c + cross * s + axis * axis.transpose() * (1.0 - c))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn quarter_turn_around_z() {
        let r = rotation_matrix(&Vector3::z(), FRAC_PI_2).unwrap();
        let v = r * Vector3::x();
        assert_relative_eq!(v, Vector3::y(), epsilon = 1e-12);
    }

    #[test]
    fn half_turn_around_x_flips_y_and_z() {
        let r = rotation_matrix(&Vector3::x(), PI).unwrap();
        let v = r * Vector3::new(1.0, 2.0, 3.0);
        assert_relative_eq!(v, Vector3::new(1.0, -2.0, -3.0), epsilon = 1e-12);
    }

    #[test]
    fn rotation_is_orthogonal() {
        let axis = Vector3::new(1.0, 1.0, 1.0).normalize();
        let r = rotation_matrix(&axis, 0.7).unwrap();
        assert_relative_eq!(r * r.transpose(), Matrix3::identity(), epsilon = 1e-12);
    }

    #[test]
    fn non_unit_axis_is_rejected() {
        let err = rotation_matrix(&Vector3::new(0.0, 0.0, 2.0), 1.0).unwrap_err();
        assert_eq!(err, GeometryError::NonUnitAxis(4.0));
    }
}
