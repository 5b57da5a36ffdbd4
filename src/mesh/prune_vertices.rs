use tracing::debug;

use crate::error::MeshError;

use super::{DataMap, Mesh};

/// Removes points that no cell references and renumbers the rest.
///
/// Surviving points keep their relative order and are renumbered densely
/// from zero; every cell block and every point-data array is rewritten to
/// match.
#[derive(Debug, Default, Clone, Copy)]
pub struct PruneOrphanVertices;

impl PruneOrphanVertices {
    /// Creates a new `PruneOrphanVertices` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the pruning, modifying the mesh in-place.
    ///
    /// # Errors
    ///
    /// Returns an error if a cell references a point that does not exist or
    /// a point-data array does not have one row per point. The mesh is left
    /// unchanged in that case.
    pub fn execute(&self, mesh: &mut Mesh) -> Result<(), MeshError> {
        let num_points = mesh.points.len();
        mesh.check_data()?;

        let mut used = vec![false; num_points];
        for block in &mesh.cells {
            for &index in block.connectivity() {
                let slot = used
                    .get_mut(index)
                    .ok_or_else(|| MeshError::IndexOutOfRange {
                        cell_type: block.cell_type().to_string(),
                        index,
                        num_points,
                    })?;
                *slot = true;
            }
        }

        let kept: Vec<usize> = (0..num_points).filter(|&i| used[i]).collect();
        if kept.len() == num_points {
            return Ok(());
        }

        let point_data = mesh
            .point_data
            .iter()
            .map(|(name, array)| Ok((name.clone(), array.select_rows(&kept)?)))
            .collect::<Result<DataMap, MeshError>>()?;

        let mut remap = vec![usize::MAX; num_points];
        for (new, &old) in kept.iter().enumerate() {
            remap[old] = new;
        }
        for block in &mut mesh.cells {
            for index in &mut block.connectivity {
                *index = remap[*index];
            }
        }

        mesh.points = mesh.points.select(&kept);
        mesh.point_data = point_data;

        debug!(
            kept = kept.len(),
            removed = num_points - kept.len(),
            "pruned orphan vertices"
        );
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::mesh::{CellBlock, CellType, DataArray, Points};

    fn line_of_points(n: u32) -> Points {
        Points::Spatial((0..n).map(|i| Point3::new(f64::from(i), 0.0, 0.0)).collect())
    }

    #[test]
    fn keeps_only_referenced_points_in_order() {
        let cells = CellBlock::from_cells(CellType::Line, &[[7, 3], [1, 5]]).unwrap();
        let mut mesh = Mesh::new(line_of_points(10), vec![cells]);
        mesh.point_data
            .insert("id".into(), DataArray::int((0..10).collect()));

        PruneOrphanVertices::new().execute(&mut mesh).unwrap();

        let Points::Spatial(points) = &mesh.points else {
            panic!("points changed dimension");
        };
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![1.0, 3.0, 5.0, 7.0]);
        assert_eq!(mesh.cells[0].connectivity(), &[3, 1, 0, 2]);
        assert_eq!(mesh.point_data["id"], DataArray::int(vec![1, 3, 5, 7]));
    }

    #[test]
    fn indices_shared_between_blocks_map_consistently() {
        let tris = CellBlock::from_cells(CellType::Triangle, &[[2, 4, 6]]).unwrap();
        let lines = CellBlock::from_cells(CellType::Line, &[[6, 2]]).unwrap();
        let mut mesh = Mesh::new(line_of_points(8), vec![tris, lines]);

        PruneOrphanVertices::new().execute(&mut mesh).unwrap();

        assert_eq!(mesh.points.len(), 3);
        assert_eq!(mesh.cells[0].connectivity(), &[0, 1, 2]);
        assert_eq!(mesh.cells[1].connectivity(), &[2, 0]);
    }

    #[test]
    fn mesh_without_cells_loses_all_points() {
        let mut mesh = Mesh::new(line_of_points(3), vec![]);
        PruneOrphanVertices::new().execute(&mut mesh).unwrap();
        assert!(mesh.points.is_empty());
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let cells = CellBlock::from_cells(CellType::Line, &[[0, 4]]).unwrap();
        let mut mesh = Mesh::new(line_of_points(3), vec![cells]);
        let before = mesh.clone();

        let err = PruneOrphanVertices::new().execute(&mut mesh).unwrap_err();
        assert_eq!(
            err,
            MeshError::IndexOutOfRange {
                cell_type: "line".into(),
                index: 4,
                num_points: 3
            }
        );
        assert_eq!(mesh, before);
    }
}
