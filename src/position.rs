use crate::coord::{ContainerSize, Coordinate};
use crate::error::SeatGridError;
use crate::index::{GRID_DIMENSIONS, GridCoordinates, GridDimensions, parse_grid_coordinates};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A pinned location on the seating chart.
///
/// Carries both the snapped grid intersection and its position as a percentage
/// of the container, so a pin can be placed without knowing the rendered size.
///
/// # Example
///
/// ```
/// use seatgrid_rs::{ContainerSize, GridPosition};
///
/// # fn main() -> Result<(), seatgrid_rs::SeatGridError> {
/// let container = ContainerSize::new(320.0, 600.0)?;
/// let position = GridPosition::from_pixel(&(104.0, 56.0), &container);
///
/// assert_eq!(position.token(), "X10Y6");
/// assert_eq!(position.percentage_y, 10.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridPosition {
    /// Column of the grid intersection
    pub grid_x: i64,
    /// Row of the grid intersection
    pub grid_y: i64,
    /// Horizontal offset as a percentage of the container width
    pub percentage_x: f64,
    /// Vertical offset as a percentage of the container height
    pub percentage_y: f64,
}

impl GridPosition {
    /// Creates a position for an intersection of the arena grid.
    pub fn from_grid(grid_x: i64, grid_y: i64) -> Self {
        Self::from_grid_on(&GRID_DIMENSIONS, grid_x, grid_y)
    }

    pub fn from_grid_on(dimensions: &GridDimensions, grid_x: i64, grid_y: i64) -> Self {
        let (percentage_x, percentage_y) = dimensions.grid_to_percentage(grid_x, grid_y);

        Self {
            grid_x,
            grid_y,
            percentage_x,
            percentage_y,
        }
    }

    /// Snaps a container-relative pixel position onto the arena grid.
    pub fn from_pixel(coord: &impl Coordinate, container: &ContainerSize) -> Self {
        Self::from_pixel_on(&GRID_DIMENSIONS, coord, container)
    }

    pub fn from_pixel_on(
        dimensions: &GridDimensions,
        coord: &impl Coordinate,
        container: &ContainerSize,
    ) -> Self {
        let (grid_x, grid_y) = dimensions.snap_to_grid(coord, container);
        Self::from_grid_on(dimensions, grid_x, grid_y)
    }

    /// Restores a position from a location token such as `X10Y15`.
    ///
    /// # Example
    /// ```
    /// use seatgrid_rs::GridPosition;
    ///
    /// # fn main() -> Result<(), seatgrid_rs::SeatGridError> {
    /// let position = GridPosition::from_token("X16Y30")?;
    /// assert_eq!((position.percentage_x, position.percentage_y), (50.0, 50.0));
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_token(location: &str) -> Result<Self, SeatGridError> {
        let coords = parse_grid_coordinates(location)
            .ok_or_else(|| SeatGridError::InvalidLocation(location.to_string()))?;

        Ok(Self::from_grid(coords.x, coords.y))
    }

    pub fn coordinates(&self) -> GridCoordinates {
        GridCoordinates::new(self.grid_x, self.grid_y)
    }

    pub fn token(&self) -> String {
        self.coordinates().token()
    }

    /// Returns true if the position lies on the arena grid.
    pub fn is_in_bounds(&self) -> bool {
        GRID_DIMENSIONS.contains(self.grid_x, self.grid_y)
    }

    /// Builds the shareable path `{origin}/{arena}/{token}`.
    pub fn share_path(&self, origin: &str, arena: &str) -> String {
        format!("{}/{}/{}", origin.trim_end_matches('/'), arena, self.token())
    }
}

/// Debug overlay text: grid intersection and percentages to one decimal.
impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Grid: ({}, {}) Percentage: ({:.1}% {:.1}%)",
            self.grid_x, self.grid_y, self.percentage_x, self.percentage_y
        )
    }
}

impl From<GridCoordinates> for GridPosition {
    fn from(coords: GridCoordinates) -> Self {
        Self::from_grid(coords.x, coords.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{AspectRatio, compute_grid_dimensions};
    use geo_types::Point;

    #[test]
    fn test_from_pixel() -> Result<(), SeatGridError> {
        let container = ContainerSize::new(320.0, 600.0)?;
        let position = GridPosition::from_pixel(&(160.0, 600.0), &container);

        assert_eq!(position.grid_x, 16);
        assert_eq!(position.grid_y, 60);
        assert_eq!(position.percentage_x, 50.0);
        assert_eq!(position.percentage_y, 100.0);
        Ok(())
    }

    #[test]
    fn test_tuple_and_point_same_result() -> Result<(), SeatGridError> {
        let container = ContainerSize::new(375.0, 703.125)?;
        let from_tuple = GridPosition::from_pixel(&(201.3, 402.7), &container);
        let from_point = GridPosition::from_pixel(&Point::new(201.3, 402.7), &container);

        assert_eq!(from_tuple, from_point);
        Ok(())
    }

    #[test]
    fn test_from_token() -> Result<(), SeatGridError> {
        let position = GridPosition::from_token("X0Y0")?;
        assert_eq!((position.percentage_x, position.percentage_y), (0.0, 0.0));

        let position = GridPosition::from_token("X32Y60")?;
        assert_eq!((position.percentage_x, position.percentage_y), (100.0, 100.0));
        Ok(())
    }

    #[test]
    fn test_from_token_invalid() {
        assert_eq!(
            GridPosition::from_token("garbage"),
            Err(SeatGridError::InvalidLocation("garbage".to_string()))
        );
    }

    #[test]
    fn test_token_round_trip() -> Result<(), SeatGridError> {
        let original = GridPosition::from_grid(12, 47);
        let restored = GridPosition::from_token(&original.token())?;
        assert_eq!(original, restored);
        Ok(())
    }

    #[test]
    fn test_is_in_bounds() {
        assert!(GridPosition::from_grid(32, 60).is_in_bounds());
        assert!(!GridPosition::from_grid(33, 60).is_in_bounds());
        assert!(!GridPosition::from_grid(-1, 0).is_in_bounds());
    }

    #[test]
    fn test_share_path() {
        let position = GridPosition::from_grid(10, 15);
        assert_eq!(
            position.share_path("https://example.com", "salen"),
            "https://example.com/salen/X10Y15"
        );
        assert_eq!(
            position.share_path("https://example.com/", "salen"),
            "https://example.com/salen/X10Y15"
        );
    }

    #[test]
    fn test_debug_overlay_text() {
        let position = GridPosition::from_grid(5, 15);
        assert_eq!(position.to_string(), "Grid: (5, 15) Percentage: (15.6% 25.0%)");
    }

    #[test]
    fn test_custom_dimensions() -> Result<(), SeatGridError> {
        let dims = compute_grid_dimensions(1, AspectRatio { width: 4, height: 4 });
        let container = ContainerSize::new(100.0, 100.0)?;
        let position = GridPosition::from_pixel_on(&dims, &(50.0, 24.0), &container);

        assert_eq!(position.coordinates(), GridCoordinates::new(2, 1));
        assert_eq!((position.percentage_x, position.percentage_y), (50.0, 25.0));
        Ok(())
    }
}
