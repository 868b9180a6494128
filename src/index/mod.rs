pub mod constants;
mod dimensions;
mod identifier;
mod indexing;

pub use constants::{ASPECT_RATIO, COLUMNS, GRID_DIMENSIONS, GRID_MULTIPLIER, ROWS};
pub use dimensions::{AspectRatio, CellSize, GridDimensions, compute_cell_size, compute_grid_dimensions};
pub use identifier::{GridCoordinates, format_grid_coordinates, parse_grid_coordinates};
pub use indexing::{grid_to_percentage, grid_to_position, percentage_to_grid, snap_to_grid};
