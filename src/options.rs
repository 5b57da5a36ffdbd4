use std::fmt;
use std::path::PathBuf;

/// Topological dimension the engine meshes up to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetDimension {
    One,
    Two,
    #[default]
    Three,
}

impl TargetDimension {
    /// The engine flag selecting this dimension, e.g. `-3`.
    #[must_use]
    pub fn flag(self) -> &'static str {
        match self {
            Self::One => "-1",
            Self::Two => "-2",
            Self::Three => "-3",
        }
    }
}

/// Mesh file formats the engine can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeshFormat {
    /// The engine's native format.
    #[default]
    Msh,
    /// Legacy VTK. The engine does not write physical tags to it.
    Vtk,
    /// Medit. Only basic element types; tags survive as integers.
    Mesh,
    Med,
    Unv,
}

impl MeshFormat {
    /// Name passed to the engine's `-format` flag.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Msh => "msh",
            Self::Vtk => "vtk",
            Self::Mesh => "mesh",
            Self::Med => "med",
            Self::Unv => "unv",
        }
    }

    /// File extension of the output file, without the dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        self.name()
    }

    /// Engine arguments this format needs beyond `-format`.
    #[must_use]
    pub fn implied_args(self) -> &'static [&'static str] {
        match self {
            // Ask the engine to keep physical tags in the element tags.
            Self::Mesh => &["-string", "Mesh.SaveElementTagType=2;"],
            _ => &[],
        }
    }
}

impl fmt::Display for MeshFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Options controlling engine invocation and mesh post-processing.
#[derive(Debug, Clone)]
pub struct MeshOptions {
    /// Dimension to mesh up to.
    pub dim: TargetDimension,
    /// Drop points no retained cell references.
    pub prune_vertices: bool,
    /// Drop the third coordinate if every point has `z == 0`.
    pub prune_flat_third_axis: bool,
    /// Keep only the highest-dimensional cell blocks.
    pub filter_cells_by_dimension: bool,
    /// Format the engine writes.
    pub output_format: MeshFormat,
    /// Engine executable. Located automatically when `None`.
    pub executable: Option<PathBuf>,
    /// Appended verbatim to the engine's arguments.
    pub extra_args: Vec<String>,
    /// Write the script here and keep it, instead of a temporary file.
    pub keep_script: Option<PathBuf>,
    /// Log engine output line by line.
    pub verbose: bool,
    /// Directory for temporary files. The system temp dir when `None`.
    pub work_dir: Option<PathBuf>,
}

impl Default for MeshOptions {
    fn default() -> Self {
        Self {
            dim: TargetDimension::Three,
            prune_vertices: true,
            prune_flat_third_axis: false,
            filter_cells_by_dimension: false,
            output_format: MeshFormat::Msh,
            executable: None,
            extra_args: Vec::new(),
            keep_script: None,
            verbose: true,
            work_dir: None,
        }
    }
}
