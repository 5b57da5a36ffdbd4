use tracing::debug;

use crate::math::{Point2, FLAT_AXIS_TOLERANCE};

use super::{Mesh, Points};

/// Drops the third coordinate of a mesh that lies in the `z = 0` plane.
#[derive(Debug, Clone, Copy)]
pub struct CollapseFlatAxis {
    tolerance: f64,
}

impl Default for CollapseFlatAxis {
    fn default() -> Self {
        Self::new(FLAT_AXIS_TOLERANCE)
    }
}

impl CollapseFlatAxis {
    /// Creates a new `CollapseFlatAxis` operation. A point is flat when
    /// `|z| < tolerance`.
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// Executes the collapse, returning `true` if the points became planar.
    ///
    /// Points that are already planar, or any spatial point off the plane,
    /// leave the mesh unchanged.
    pub fn execute(&self, mesh: &mut Mesh) -> bool {
        let Points::Spatial(points) = &mesh.points else {
            return false;
        };
        if !points.iter().all(|p| p.z.abs() < self.tolerance) {
            return false;
        }

        let planar = points.iter().map(|p| Point2::new(p.x, p.y)).collect();
        mesh.points = Points::Planar(planar);
        debug!("collapsed flat third axis");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point3;

    fn mesh_of(points: Vec<Point3>) -> Mesh {
        Mesh::new(Points::Spatial(points), vec![])
    }

    #[test]
    fn zero_z_becomes_planar() {
        let mut mesh = mesh_of(vec![Point3::new(0.0, 1.0, 0.0), Point3::new(2.0, 3.0, 0.0)]);
        assert!(CollapseFlatAxis::default().execute(&mut mesh));
        assert_eq!(
            mesh.points,
            Points::Planar(vec![Point2::new(0.0, 1.0), Point2::new(2.0, 3.0)])
        );
    }

    #[test]
    fn one_raised_point_keeps_three_dimensions() {
        let mut mesh = mesh_of(vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 1.0e-6)]);
        let before = mesh.clone();
        assert!(!CollapseFlatAxis::default().execute(&mut mesh));
        assert_eq!(mesh, before);
    }

    #[test]
    fn noise_below_tolerance_is_flattened() {
        let mut mesh = mesh_of(vec![Point3::new(0.0, 0.0, 1.0e-14), Point3::new(1.0, 0.0, -1.0e-14)]);
        assert!(CollapseFlatAxis::default().execute(&mut mesh));
        assert_eq!(mesh.points.dimension(), 2);
    }

    #[test]
    fn custom_tolerance() {
        let mut mesh = mesh_of(vec![Point3::new(0.0, 0.0, 1.0e-6)]);
        assert!(CollapseFlatAxis::new(1.0e-3).execute(&mut mesh));
    }

    #[test]
    fn planar_points_are_left_alone() {
        let mut mesh = Mesh::new(Points::Planar(vec![Point2::new(1.0, 1.0)]), vec![]);
        assert!(!CollapseFlatAxis::default().execute(&mut mesh));
    }
}
