use super::{Point3, Vector3};

/// Checks whether all `points` sit in one plane.
///
/// Point sets that span no plane at all (fewer than three distinct points,
/// or all points on one line) are trivially planar. Otherwise a normal is
/// built from the first point and two points that are not collinear with
/// it, and every point must satisfy
/// `|(x - x0) · n| < tol * (1 + |n| * |x - x0|)`.
#[must_use]
pub fn is_planar(points: &[Point3], tol: f64) -> bool {
    let Some(normal) = find_normal(points, tol) else {
        return true;
    };
    let x0 = points[0];
    let norm_normal = normal.norm();

    points.iter().all(|x| {
        let d = x - x0;
        d.dot(&normal).abs() < tol * (1.0 + norm_normal * d.norm())
    })
}

/// Returns a (non-normalized) normal of the plane through `points[0]` and
/// the first two points that span a triangle with it.
fn find_normal(points: &[Point3], tol: f64) -> Option<Vector3> {
    let x0 = points.first()?;
    let direction = points
        .iter()
        .map(|x| x - x0)
        .find(|d| d.norm_squared() > tol)?;

    points
        .iter()
        .map(|x| direction.cross(&(x - x0)))
        .find(|n| n.norm_squared() > tol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::PLANARITY_TOLERANCE;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn square_in_xy_plane_is_planar() {
        let pts = [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(0.0, 1.0, 0.0)];
        assert!(is_planar(&pts, PLANARITY_TOLERANCE));
    }

    #[test]
    fn tilted_plane_is_planar() {
        let pts = [p(0.0, 0.0, 0.0), p(1.0, 0.0, 1.0), p(0.0, 1.0, 0.0), p(1.0, 1.0, 1.0)];
        assert!(is_planar(&pts, PLANARITY_TOLERANCE));
    }

    #[test]
    fn tetrahedron_corners_are_not_planar() {
        let pts = [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(0.0, 0.0, 1.0)];
        assert!(!is_planar(&pts, PLANARITY_TOLERANCE));
    }

    #[test]
    fn collinear_points_are_planar() {
        let pts = [p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0), p(2.0, 2.0, 2.0)];
        assert!(is_planar(&pts, PLANARITY_TOLERANCE));
    }

    #[test]
    fn repeated_first_point_does_not_hide_a_bend() {
        let pts = [
            p(0.0, 0.0, 0.0),
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(0.0, 1.0, 0.0),
            p(0.0, 0.0, 1.0),
        ];
        assert!(!is_planar(&pts, PLANARITY_TOLERANCE));
    }

    #[test]
    fn empty_set_is_planar() {
        assert!(is_planar(&[], PLANARITY_TOLERANCE));
    }
}
