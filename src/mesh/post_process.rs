use crate::error::MeshError;
use crate::options::MeshOptions;

use super::{CollapseFlatAxis, FilterCellsByDimension, Mesh, PruneOrphanVertices};

/// The post-processing pipeline run on every decoded mesh.
///
/// Stages run in a fixed order: cell filtering, then vertex pruning, then
/// flat-axis collapse. Filtering first matters, since dropping boundary
/// blocks is what leaves vertices orphaned.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostProcess {
    filter_cells: bool,
    prune_vertices: bool,
    collapse_flat_axis: bool,
}

impl PostProcess {
    /// Creates the pipeline enabled by `options`.
    #[must_use]
    pub fn new(options: &MeshOptions) -> Self {
        Self::from_flags(
            options.filter_cells_by_dimension,
            options.prune_vertices,
            options.prune_flat_third_axis,
        )
    }

    #[must_use]
    pub fn from_flags(filter_cells: bool, prune_vertices: bool, collapse_flat_axis: bool) -> Self {
        Self {
            filter_cells,
            prune_vertices,
            collapse_flat_axis,
        }
    }

    /// Executes the enabled stages on `mesh`.
    ///
    /// # Errors
    ///
    /// Returns an error if vertex pruning finds inconsistent cell indices or
    /// point data.
    pub fn execute(&self, mut mesh: Mesh) -> Result<Mesh, MeshError> {
        if self.filter_cells {
            FilterCellsByDimension::new().execute(&mut mesh);
        }
        if self.prune_vertices {
            PruneOrphanVertices::new().execute(&mut mesh)?;
        }
        if self.collapse_flat_axis {
            CollapseFlatAxis::default().execute(&mut mesh);
        }
        Ok(mesh)
    }
}
