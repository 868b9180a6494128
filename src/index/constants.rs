use crate::index::dimensions::{AspectRatio, GridDimensions, compute_grid_dimensions};

/// Number of grid lines per aspect-ratio unit
pub const GRID_MULTIPLIER: u32 = 4;

/// Aspect ratio of the arena floor plan image (width:height)
pub const ASPECT_RATIO: AspectRatio = AspectRatio {
    width: 8,
    height: 15,
};

/// Grid dimensions of the arena floor plan
pub const GRID_DIMENSIONS: GridDimensions = compute_grid_dimensions(GRID_MULTIPLIER, ASPECT_RATIO);

/// Number of grid columns (32)
pub const COLUMNS: u32 = GRID_DIMENSIONS.columns;

/// Number of grid rows (60)
pub const ROWS: u32 = GRID_DIMENSIONS.rows;

/// Marker preceding the column index in a location token
pub(crate) const COLUMN_MARKER: u8 = b'X';

/// Marker preceding the row index in a location token
pub(crate) const ROW_MARKER: u8 = b'Y';
