use tracing::debug;

use super::Mesh;

/// Keeps only the cell blocks of the highest topological dimension present.
///
/// Meshing a volume also emits the boundary triangles and edges; meshing a
/// surface also emits its boundary lines. If any volumetric block is present
/// only volumetric blocks survive, otherwise if any surface block is present
/// only surface blocks survive, otherwise nothing is removed. Cell data is
/// dropped together with its block.
#[derive(Debug, Default, Clone, Copy)]
pub struct FilterCellsByDimension;

impl FilterCellsByDimension {
    /// Creates a new `FilterCellsByDimension` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the filter, modifying the mesh in-place.
    pub fn execute(&self, mesh: &mut Mesh) {
        let has = |dim| mesh.cells.iter().any(|b| b.cell_type().dimension() == Some(dim));
        let keep = if has(3) {
            3
        } else if has(2) {
            2
        } else {
            return;
        };

        let before = mesh.cells.len();
        mesh.cells
            .retain(|b| b.cell_type().dimension() == Some(keep));
        debug!(
            dimension = keep,
            dropped = before - mesh.cells.len(),
            "filtered cell blocks"
        );
    }
}
