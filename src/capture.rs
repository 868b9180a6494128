use crate::coord::ContainerBounds;
use crate::error::SeatGridError;
use crate::index::{GRID_DIMENSIONS, GridCoordinates, GridDimensions};
use crate::io::{CaptureTargetsToCsv, CaptureTargetsToJson};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

const PROGRESS_BAR_WIDTH: u64 = 30;

/// Iterates every intersection of the grid, row by row, left to right.
///
/// Yields exactly `dimensions.total_intersections()` coordinates, starting at
/// `X0Y0` and ending at `X{columns}Y{rows}`.
///
/// # Example
/// ```
/// use seatgrid_rs::{GRID_DIMENSIONS, all_locations};
///
/// let tokens: Vec<String> = all_locations(&GRID_DIMENSIONS).map(|c| c.token()).collect();
/// assert_eq!(tokens.len(), 33 * 61);
/// assert_eq!(tokens[0], "X0Y0");
/// assert_eq!(tokens[1], "X1Y0");
/// assert_eq!(tokens.last().map(String::as_str), Some("X32Y60"));
/// ```
pub fn all_locations(dimensions: &GridDimensions) -> impl Iterator<Item = GridCoordinates> + use<> {
    let columns = dimensions.columns as i64;
    let rows = dimensions.rows as i64;

    (0..=rows).flat_map(move |y| (0..=columns).map(move |x| GridCoordinates::new(x, y)))
}

/// One pre-rendered location: where to tap and where to save the screenshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureTarget {
    pub token: String,
    pub grid_x: i64,
    pub grid_y: i64,
    pub percentage_x: f64,
    pub percentage_y: f64,
    /// Page-space x of the intersection
    pub tap_x: f64,
    /// Page-space y of the intersection
    pub tap_y: f64,
    pub file_name: String,
}

impl CaptureTarget {
    pub fn coordinates(&self) -> GridCoordinates {
        GridCoordinates::new(self.grid_x, self.grid_y)
    }
}

/// The ordered set of tap targets needed to capture one image per location.
///
/// # Example
/// ```
/// use seatgrid_rs::{CapturePlan, ContainerBounds};
///
/// # fn main() -> Result<(), seatgrid_rs::SeatGridError> {
/// let bounds = ContainerBounds::new(0.0, 60.0, 375.0, 703.125)?;
/// let plan = CapturePlan::new(bounds);
///
/// assert_eq!(plan.len(), 33 * 61);
/// assert_eq!(plan.targets()[0].file_name, "X0Y0.png");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapturePlan {
    bounds: ContainerBounds,
    dimensions: GridDimensions,
    targets: Vec<CaptureTarget>,
}

impl CapturePlan {
    pub fn new(bounds: ContainerBounds) -> Self {
        Self::with_dimensions(bounds, GRID_DIMENSIONS)
    }

    pub fn with_dimensions(bounds: ContainerBounds, dimensions: GridDimensions) -> Self {
        let cell = dimensions.cell_size(&bounds.size());
        let locations: Vec<GridCoordinates> = all_locations(&dimensions).collect();

        let targets: Vec<CaptureTarget> = locations
            .par_iter()
            .map(|coords| {
                let (percentage_x, percentage_y) = dimensions.grid_to_percentage(coords.x, coords.y);
                CaptureTarget {
                    token: coords.token(),
                    grid_x: coords.x,
                    grid_y: coords.y,
                    percentage_x,
                    percentage_y,
                    tap_x: bounds.left + coords.x as f64 * cell.width,
                    tap_y: bounds.top + coords.y as f64 * cell.height,
                    file_name: coords.file_name(),
                }
            })
            .collect();

        info!(
            targets = targets.len(),
            columns = dimensions.columns,
            rows = dimensions.rows,
            "capture plan built"
        );

        Self {
            bounds,
            dimensions,
            targets,
        }
    }

    pub fn bounds(&self) -> &ContainerBounds {
        &self.bounds
    }

    pub fn dimensions(&self) -> &GridDimensions {
        &self.dimensions
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn targets(&self) -> &[CaptureTarget] {
        &self.targets
    }

    pub fn iter(&self) -> impl Iterator<Item = &CaptureTarget> {
        self.targets.iter()
    }

    /// Writes one row per target to a CSV manifest.
    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<(), SeatGridError> {
        self.targets.to_csv(path)
    }

    /// Serializes the whole plan, including bounds and grid dimensions.
    pub fn to_json(&self) -> Result<String, SeatGridError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SeatGridError::SerializationError(e.to_string()))
    }

    /// Serializes only the targets as a JSON array.
    pub fn targets_to_json(&self) -> Result<String, SeatGridError> {
        self.targets.to_json()
    }
}

/// Renders a fixed-width text progress bar, e.g. `[███▒▒…] 3/30 10%`.
pub fn progress_bar(current: u64, goal: u64) -> String {
    let percentage = if goal == 0 {
        100
    } else {
        (current.saturating_mul(100) / goal).min(100)
    };
    let filled = percentage * PROGRESS_BAR_WIDTH / 100;
    let empty = PROGRESS_BAR_WIDTH - filled;

    format!(
        "[{}{}] {}/{} {}%",
        "█".repeat(filled as usize),
        "▒".repeat(empty as usize),
        current,
        goal,
        percentage
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::GridPosition;
    use crate::pointer::PointerMapper;

    #[test]
    fn test_all_locations_count_and_order() {
        let locations: Vec<GridCoordinates> = all_locations(&GRID_DIMENSIONS).collect();

        assert_eq!(locations.len() as u64, GRID_DIMENSIONS.total_intersections());
        assert_eq!(locations[0], GridCoordinates::new(0, 0));
        assert_eq!(locations[32], GridCoordinates::new(32, 0));
        assert_eq!(locations[33], GridCoordinates::new(0, 1));
        assert!(locations.iter().all(|c| GRID_DIMENSIONS.contains(c.x, c.y)));
    }

    #[test]
    fn test_tap_targets_map_back_to_their_token() -> Result<(), SeatGridError> {
        let bounds = ContainerBounds::new(0.0, 83.5, 375.0, 688.25)?;
        let plan = CapturePlan::new(bounds);
        let mapper = PointerMapper::new(bounds);

        for target in plan.iter() {
            let position: GridPosition = mapper.locate(&(target.tap_x, target.tap_y));
            assert_eq!(position.token(), target.token);
        }
        Ok(())
    }

    #[test]
    fn test_targets_follow_enumeration_order() -> Result<(), SeatGridError> {
        let bounds = ContainerBounds::new(0.0, 0.0, 320.0, 600.0)?;
        let plan = CapturePlan::new(bounds);

        let expected: Vec<String> = all_locations(&GRID_DIMENSIONS).map(|c| c.token()).collect();
        let actual: Vec<String> = plan.iter().map(|t| t.token.clone()).collect();
        assert_eq!(actual, expected);

        let last = &plan.targets()[plan.len() - 1];
        assert_eq!(last.file_name, "X32Y60.png");
        assert_eq!((last.tap_x, last.tap_y), (320.0, 600.0));
        assert_eq!(last.coordinates(), GridCoordinates::new(32, 60));
        Ok(())
    }

    #[test]
    fn test_plan_to_json() -> Result<(), SeatGridError> {
        let dims = GridDimensions::try_new(1, crate::index::AspectRatio { width: 1, height: 1 })?;
        let bounds = ContainerBounds::new(0.0, 0.0, 10.0, 10.0)?;
        let plan = CapturePlan::with_dimensions(bounds, dims);

        let json = plan.to_json()?;
        let restored: CapturePlan = serde_json::from_str(&json)
            .map_err(|e| SeatGridError::SerializationError(e.to_string()))?;
        assert_eq!(restored, plan);
        assert_eq!(restored.len(), 4);
        Ok(())
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(
            progress_bar(0, 10),
            format!("[{}] 0/10 0%", "▒".repeat(30))
        );
        assert_eq!(
            progress_bar(5, 10),
            format!("[{}{}] 5/10 50%", "█".repeat(15), "▒".repeat(15))
        );
        assert_eq!(
            progress_bar(2013, 2013),
            format!("[{}] 2013/2013 100%", "█".repeat(30))
        );
        assert!(progress_bar(0, 0).ends_with("0/0 100%"));
    }

    #[test]
    fn test_tap_point_offset_by_bounds() -> Result<(), SeatGridError> {
        let bounds = ContainerBounds::new(5.0, 7.0, 320.0, 600.0)?;
        let plan = CapturePlan::new(bounds);
        let target = &plan.targets()[33 + 1];

        assert_eq!(target.token, "X1Y1");
        assert_eq!((target.tap_x, target.tap_y), (15.0, 17.0));
        Ok(())
    }
}
