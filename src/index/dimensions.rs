use crate::coord::ContainerSize;
use crate::error::SeatGridError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AspectRatio {
    pub width: u32,
    pub height: u32,
}

/// Number of columns and rows of the grid overlaid on the map image.
///
/// A `columns x rows` grid has `(columns + 1) * (rows + 1)` addressable
/// intersections; pins snap to those, not to cell interiors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridDimensions {
    pub columns: u32,
    pub rows: u32,
}

/// Pixel size of one grid cell for a given container size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellSize {
    pub width: f64,
    pub height: f64,
}

/// Derives grid dimensions from a multiplier and an aspect ratio.
///
/// Pure arithmetic. Callers must pass a positive multiplier and positive aspect
/// components; use [`GridDimensions::try_new`] for values that come from outside
/// the program.
///
/// # Example
/// ```
/// use seatgrid_rs::{AspectRatio, compute_grid_dimensions};
///
/// let dims = compute_grid_dimensions(4, AspectRatio { width: 8, height: 15 });
/// assert_eq!((dims.columns, dims.rows), (32, 60));
/// ```
pub const fn compute_grid_dimensions(multiplier: u32, aspect_ratio: AspectRatio) -> GridDimensions {
    GridDimensions {
        columns: multiplier * aspect_ratio.width,
        rows: multiplier * aspect_ratio.height,
    }
}

/// Divides the container size by the grid dimensions, per axis.
///
/// A grid with zero columns or rows is a configuration error.
pub fn compute_cell_size(container: &ContainerSize, dimensions: &GridDimensions) -> CellSize {
    debug_assert!(
        dimensions.columns > 0 && dimensions.rows > 0,
        "grid must have at least one column and one row"
    );

    CellSize {
        width: container.width / dimensions.columns as f64,
        height: container.height / dimensions.rows as f64,
    }
}

impl GridDimensions {
    /// Checked version of [`compute_grid_dimensions`].
    pub fn try_new(multiplier: u32, aspect_ratio: AspectRatio) -> Result<Self, SeatGridError> {
        if multiplier == 0 {
            return Err(SeatGridError::InvalidDimension(
                "Grid multiplier must be positive".to_string(),
            ));
        }
        if aspect_ratio.width == 0 || aspect_ratio.height == 0 {
            return Err(SeatGridError::InvalidDimension(
                "Aspect ratio components must be positive".to_string(),
            ));
        }

        let columns = multiplier.checked_mul(aspect_ratio.width);
        let rows = multiplier.checked_mul(aspect_ratio.height);
        match (columns, rows) {
            (Some(columns), Some(rows)) => Ok(Self { columns, rows }),
            _ => Err(SeatGridError::InvalidDimension(
                "Grid dimensions overflow".to_string(),
            )),
        }
    }

    pub const fn total_cells(&self) -> u64 {
        self.columns as u64 * self.rows as u64
    }

    pub const fn total_intersections(&self) -> u64 {
        (self.columns as u64 + 1) * (self.rows as u64 + 1)
    }

    /// Returns true if `(x, y)` addresses one of the grid's intersections.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        (0..=self.columns as i64).contains(&x) && (0..=self.rows as i64).contains(&y)
    }

    pub fn cell_size(&self, container: &ContainerSize) -> CellSize {
        compute_cell_size(container, self)
    }
}
