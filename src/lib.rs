pub mod engine;
pub mod error;
pub mod math;
pub mod mesh;
pub mod options;
pub mod script;

pub use engine::{generate_mesh, MeshReader};
pub use error::{GeoscriptError, Result};
pub use mesh::Mesh;
pub use options::{MeshFormat, MeshOptions, TargetDimension};
pub use script::Geometry;
