mod cell_type;
mod collapse_axis;
mod data;
mod filter_cells;
mod post_process;
mod prune_vertices;

pub use cell_type::CellType;
pub use collapse_axis::CollapseFlatAxis;
pub use data::{DataArray, DataValues};
pub use filter_cells::FilterCellsByDimension;
pub use post_process::PostProcess;
pub use prune_vertices::PruneOrphanVertices;

use std::collections::BTreeMap;

use crate::error::MeshError;
use crate::math::{Point2, Point3};

/// Named data arrays, keyed by field name.
pub type DataMap = BTreeMap<String, DataArray>;

/// Mesh vertex coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Points {
    /// Points in a plane, after the third axis has been collapsed.
    Planar(Vec<Point2>),
    /// Points in space.
    Spatial(Vec<Point3>),
}

impl Default for Points {
    fn default() -> Self {
        Self::Spatial(Vec::new())
    }
}

impl Points {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Planar(p) => p.len(),
            Self::Spatial(p) => p.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of coordinates per point.
    #[must_use]
    pub fn dimension(&self) -> usize {
        match self {
            Self::Planar(_) => 2,
            Self::Spatial(_) => 3,
        }
    }

    /// Keeps only the points at `indices`, in that order.
    fn select(&self, indices: &[usize]) -> Self {
        match self {
            Self::Planar(p) => Self::Planar(indices.iter().map(|&i| p[i]).collect()),
            Self::Spatial(p) => Self::Spatial(indices.iter().map(|&i| p[i]).collect()),
        }
    }
}

/// Connectivity of all cells of one type, plus the data attached to them.
#[derive(Debug, Clone, PartialEq)]
pub struct CellBlock {
    cell_type: CellType,
    nodes_per_cell: usize,
    connectivity: Vec<usize>,
    /// Per-cell data, one row per cell.
    pub cell_data: DataMap,
}

impl CellBlock {
    /// Creates a block from flat, row-major connectivity.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::RaggedBlock`] if `connectivity` is not a whole
    /// number of `nodes_per_cell`-sized rows.
    pub fn new(
        cell_type: CellType,
        nodes_per_cell: usize,
        connectivity: Vec<usize>,
    ) -> Result<Self, MeshError> {
        if nodes_per_cell == 0 || connectivity.len() % nodes_per_cell != 0 {
            return Err(MeshError::RaggedBlock {
                cell_type: cell_type.to_string(),
                len: connectivity.len(),
                nodes_per_cell,
            });
        }
        Ok(Self {
            cell_type,
            nodes_per_cell,
            connectivity,
            cell_data: DataMap::new(),
        })
    }

    /// Creates a block from one vertex-index array per cell.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::RaggedBlock`] if the cells differ in length.
    pub fn from_cells<const N: usize>(
        cell_type: CellType,
        cells: &[[usize; N]],
    ) -> Result<Self, MeshError> {
        Self::new(cell_type, N, cells.iter().flatten().copied().collect())
    }

    /// Attaches a per-cell data array.
    #[must_use]
    pub fn with_data(mut self, name: impl Into<String>, array: DataArray) -> Self {
        self.cell_data.insert(name.into(), array);
        self
    }

    #[must_use]
    pub fn cell_type(&self) -> &CellType {
        &self.cell_type
    }

    #[must_use]
    pub fn nodes_per_cell(&self) -> usize {
        self.nodes_per_cell
    }

    /// Flat, row-major vertex indices.
    #[must_use]
    pub fn connectivity(&self) -> &[usize] {
        &self.connectivity
    }

    /// Iterates over the cells, one slice of vertex indices each.
    pub fn cells(&self) -> impl Iterator<Item = &[usize]> {
        self.connectivity.chunks_exact(self.nodes_per_cell)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.connectivity.len() / self.nodes_per_cell
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.connectivity.is_empty()
    }
}

/// A discretized mesh as produced by a decoder and consumed by the
/// post-processing stages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub points: Points,
    pub cells: Vec<CellBlock>,
    /// Per-point data, one row per point.
    pub point_data: DataMap,
    /// Global data, e.g. physical group names mapped to `[tag, dim]`.
    pub field_data: DataMap,
}

impl Mesh {
    #[must_use]
    pub fn new(points: Points, cells: Vec<CellBlock>) -> Self {
        Self {
            points,
            cells,
            ..Self::default()
        }
    }

    /// Returns the block of the given type, if present.
    #[must_use]
    pub fn block(&self, cell_type: &CellType) -> Option<&CellBlock> {
        self.cells.iter().find(|b| b.cell_type() == cell_type)
    }

    /// Checks that every data array lines up with what it annotates.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::DataLength`] for the first array whose row
    /// count differs from its point or cell count, or whose values do not
    /// form whole rows.
    pub fn check_data(&self) -> Result<(), MeshError> {
        check_rows(&self.point_data, self.points.len())?;
        for block in &self.cells {
            check_rows(&block.cell_data, block.len())?;
        }
        Ok(())
    }
}

fn check_rows(data: &DataMap, expected: usize) -> Result<(), MeshError> {
    for (name, array) in data {
        if !array.is_rectangular() || array.rows() != expected {
            return Err(MeshError::DataLength {
                name: name.clone(),
                expected,
                got: array.rows(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn ragged_block_is_rejected() {
        let err = CellBlock::new(CellType::Triangle, 3, vec![0, 1, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            MeshError::RaggedBlock {
                cell_type: "triangle".into(),
                len: 4,
                nodes_per_cell: 3
            }
        );
    }

    #[test]
    fn cells_iterate_by_row() {
        let block = CellBlock::from_cells(CellType::Line, &[[0, 1], [1, 2]]).unwrap();
        let cells: Vec<_> = block.cells().collect();
        assert_eq!(cells, vec![&[0, 1][..], &[1, 2][..]]);
        assert_eq!(block.len(), 2);
    }

    #[test]
    fn misaligned_point_data_is_reported() {
        let mut mesh = Mesh::new(
            Points::Spatial(vec![Point3::origin(), Point3::origin()]),
            vec![],
        );
        mesh.point_data
            .insert("t".into(), DataArray::float(vec![1.0, 2.0, 3.0]));
        assert_eq!(
            mesh.check_data().unwrap_err(),
            MeshError::DataLength {
                name: "t".into(),
                expected: 2,
                got: 3
            }
        );
    }
}
