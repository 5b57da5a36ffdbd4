pub mod planarity;
pub mod rotation;

pub use planarity::is_planar;
pub use rotation::rotation_matrix;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3x3 matrix type.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Relative tolerance used when checking that a plane surface is flat.
pub const PLANARITY_TOLERANCE: f64 = 1.0e-15;

/// Absolute tolerance under which a third coordinate counts as zero.
pub const FLAT_AXIS_TOLERANCE: f64 = 1.0e-13;
