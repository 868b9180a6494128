use crate::coord::{ContainerSize, Coordinate};
use crate::index::constants::GRID_DIMENSIONS;
use crate::index::dimensions::GridDimensions;
use geo_types::Point;

impl GridDimensions {
    /// Snaps a container-relative pixel position to the nearest grid intersection.
    ///
    /// Returns `(grid_x, grid_y)`. The position is expected to be clamped into the
    /// container already; out-of-range input gives out-of-range indices.
    pub fn snap_to_grid(&self, coord: &impl Coordinate, container: &ContainerSize) -> (i64, i64) {
        let cell = self.cell_size(container);

        let grid_x = (coord.x() / cell.width).round() as i64;
        let grid_y = (coord.y() / cell.height).round() as i64;

        (grid_x, grid_y)
    }

    /// Converts a grid intersection to its pixel position inside the container.
    pub fn grid_to_position(&self, grid_x: i64, grid_y: i64, container: &ContainerSize) -> Point<f64> {
        let cell = self.cell_size(container);

        Point::new(grid_x as f64 * cell.width, grid_y as f64 * cell.height)
    }

    /// Converts a grid intersection to a percentage of the container size.
    ///
    /// Not clamped: indices outside the grid give values outside `[0, 100]`.
    pub fn grid_to_percentage(&self, grid_x: i64, grid_y: i64) -> (f64, f64) {
        (
            grid_x as f64 / self.columns as f64 * 100.0,
            grid_y as f64 / self.rows as f64 * 100.0,
        )
    }

    /// Converts fractional container offsets (`0.0..=1.0`) to the nearest intersection.
    pub fn percentage_to_grid(&self, x_fraction: f64, y_fraction: f64) -> (i64, i64) {
        (
            (x_fraction * self.columns as f64).round() as i64,
            (y_fraction * self.rows as f64).round() as i64,
        )
    }
}

/// Snaps a pixel position on the arena grid to `(grid_x, grid_y)`.
///
/// # Example
/// ```
/// use seatgrid_rs::{ContainerSize, snap_to_grid};
///
/// # fn main() -> Result<(), seatgrid_rs::SeatGridError> {
/// let container = ContainerSize::new(320.0, 600.0)?;
/// assert_eq!(snap_to_grid(&(104.0, 56.0), &container), (10, 6));
/// # Ok(())
/// # }
/// ```
pub fn snap_to_grid(coord: &impl Coordinate, container: &ContainerSize) -> (i64, i64) {
    GRID_DIMENSIONS.snap_to_grid(coord, container)
}

pub fn grid_to_position(grid_x: i64, grid_y: i64, container: &ContainerSize) -> Point<f64> {
    GRID_DIMENSIONS.grid_to_position(grid_x, grid_y, container)
}

/// Converts an arena grid intersection to `(percentage_x, percentage_y)`.
///
/// # Example
/// ```
/// use seatgrid_rs::grid_to_percentage;
///
/// assert_eq!(grid_to_percentage(16, 30), (50.0, 50.0));
/// ```
pub fn grid_to_percentage(grid_x: i64, grid_y: i64) -> (f64, f64) {
    GRID_DIMENSIONS.grid_to_percentage(grid_x, grid_y)
}

pub fn percentage_to_grid(x_fraction: f64, y_fraction: f64) -> (i64, i64) {
    GRID_DIMENSIONS.percentage_to_grid(x_fraction, y_fraction)
}
