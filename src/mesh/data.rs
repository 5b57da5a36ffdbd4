use crate::error::MeshError;

/// Values stored in a [`DataArray`].
#[derive(Debug, Clone, PartialEq)]
pub enum DataValues {
    Int(Vec<i64>),
    Float(Vec<f64>),
}

impl DataValues {
    fn len(&self) -> usize {
        match self {
            Self::Int(v) => v.len(),
            Self::Float(v) => v.len(),
        }
    }
}

/// A row-major table of per-point, per-cell or global values.
///
/// Each row holds `components` values, so a scalar field has one component
/// and a vector field three.
#[derive(Debug, Clone, PartialEq)]
pub struct DataArray {
    values: DataValues,
    components: usize,
}

impl DataArray {
    /// Creates an array of `components`-wide rows. A width of zero is
    /// treated as one.
    #[must_use]
    pub fn new(values: DataValues, components: usize) -> Self {
        Self {
            values,
            components: components.max(1),
        }
    }

    /// A scalar integer array, e.g. physical tags.
    #[must_use]
    pub fn int(values: Vec<i64>) -> Self {
        Self::new(DataValues::Int(values), 1)
    }

    /// A scalar float array.
    #[must_use]
    pub fn float(values: Vec<f64>) -> Self {
        Self::new(DataValues::Float(values), 1)
    }

    #[must_use]
    pub fn values(&self) -> &DataValues {
        &self.values
    }

    #[must_use]
    pub fn components(&self) -> usize {
        self.components
    }

    /// Number of complete rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.values.len() / self.components
    }

    /// Whether the value count is a whole number of rows.
    #[must_use]
    pub fn is_rectangular(&self) -> bool {
        self.values.len() % self.components == 0
    }

    /// Returns a new array made of the given rows, in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::RowOutOfRange`] if an entry of `rows` is not
    /// below [`rows`](Self::rows).
    pub fn select_rows(&self, rows: &[usize]) -> Result<Self, MeshError> {
        let available = self.rows();
        if let Some(&row) = rows.iter().find(|&&r| r >= available) {
            return Err(MeshError::RowOutOfRange {
                row,
                rows: available,
            });
        }
        let width = self.components;
        let values = match &self.values {
            DataValues::Int(v) => DataValues::Int(gather(v, rows, width)),
            DataValues::Float(v) => DataValues::Float(gather(v, rows, width)),
        };
        Ok(Self::new(values, width))
    }
}

fn gather<T: Copy>(values: &[T], rows: &[usize], width: usize) -> Vec<T> {
    rows.iter()
        .flat_map(|&r| values[r * width..(r + 1) * width].iter().copied())
        .collect()
}
