use crate::coord::{ContainerBounds, Coordinate};
use crate::index::{GRID_DIMENSIONS, GridDimensions};
use crate::position::GridPosition;
use tracing::debug;

/// Vertical lift applied in interactive mode so the pin sits above the finger.
pub const INTERACTIVE_OFFSET_Y: f64 = 60.0;

/// Maps page-space pointer positions onto the grid of a measured container.
///
/// # Example
/// ```
/// use seatgrid_rs::{ContainerBounds, PointerMapper, INTERACTIVE_OFFSET_Y};
///
/// # fn main() -> Result<(), seatgrid_rs::SeatGridError> {
/// let bounds = ContainerBounds::new(0.0, 100.0, 320.0, 600.0)?;
/// let mapper = PointerMapper::new(bounds).offset_y(INTERACTIVE_OFFSET_Y);
///
/// let position = mapper.locate(&(160.0, 460.0));
/// assert_eq!(position.token(), "X16Y30");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerMapper {
    bounds: ContainerBounds,
    dimensions: GridDimensions,
    offset_y: f64,
}

impl PointerMapper {
    pub fn new(bounds: ContainerBounds) -> Self {
        Self {
            bounds,
            dimensions: GRID_DIMENSIONS,
            offset_y: 0.0,
        }
    }

    /// Subtracts `offset_y` pixels from every pointer y before mapping.
    pub fn offset_y(mut self, offset_y: f64) -> Self {
        self.offset_y = offset_y;
        self
    }

    pub fn dimensions(mut self, dimensions: GridDimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn bounds(&self) -> &ContainerBounds {
        &self.bounds
    }

    /// Converts a page-space pointer position to a grid position.
    ///
    /// The pointer is clamped into the container first, so the result is always
    /// on the grid.
    pub fn locate(&self, page: &impl Coordinate) -> GridPosition {
        let relative = self
            .bounds
            .clamp_relative(page.x(), page.y() - self.offset_y);
        let position =
            GridPosition::from_pixel_on(&self.dimensions, &relative, &self.bounds.size());

        debug!(
            page_x = page.x(),
            page_y = page.y(),
            grid_x = position.grid_x,
            grid_y = position.grid_y,
            "pointer mapped to grid"
        );

        position
    }
}
