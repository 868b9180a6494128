//! # seatgrid-rs
//!
//! There are currently three main entry points.
//!
//! ### 1. `GridPosition` - Pixel / Token Mapping
//!
//! ```
//! use seatgrid_rs::{ContainerSize, GridPosition};
//!
//! # fn main() -> Result<(), seatgrid_rs::SeatGridError> {
//! let container = ContainerSize::new(375.0, 703.125)?;
//! let position = GridPosition::from_pixel(&(187.5, 351.0), &container);
//! println!("{}", position.token());
//!
//! let restored = GridPosition::from_token(&position.token())?;
//! assert_eq!(position, restored);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `PointerMapper` - Page-Space Pointer Events
//!
//! ```
//! use seatgrid_rs::{ContainerBounds, PointerMapper, INTERACTIVE_OFFSET_Y};
//!
//! # fn main() -> Result<(), seatgrid_rs::SeatGridError> {
//! let bounds = ContainerBounds::new(0.0, 80.0, 375.0, 703.125)?;
//! let mapper = PointerMapper::new(bounds).offset_y(INTERACTIVE_OFFSET_Y);
//!
//! let position = mapper.locate(&(200.0, 500.0));
//! println!("{}", position.share_path("https://example.com", "salen"));
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `CapturePlan` - One Image Per Location
//!
//! ```no_run
//! use seatgrid_rs::{CapturePlan, ContainerBounds};
//!
//! # fn main() -> Result<(), seatgrid_rs::SeatGridError> {
//! let plan = CapturePlan::new(ContainerBounds::new(0.0, 60.0, 375.0, 703.125)?);
//! plan.write_csv("salen.csv")?;
//! # Ok(())
//! # }
//! ```
//!

pub mod capture;
pub mod coord;
pub mod error;
pub mod index;
pub mod io;
pub mod pointer;
pub mod position;
pub mod share;

pub use capture::{CapturePlan, CaptureTarget, all_locations, progress_bar};
pub use coord::{ContainerBounds, ContainerSize, Coordinate};
pub use error::SeatGridError;
pub use index::{
    ASPECT_RATIO, AspectRatio, COLUMNS, CellSize, GRID_DIMENSIONS, GRID_MULTIPLIER, GridCoordinates,
    GridDimensions, ROWS, compute_cell_size, compute_grid_dimensions, format_grid_coordinates,
    grid_to_percentage, grid_to_position, parse_grid_coordinates, percentage_to_grid, snap_to_grid,
};
pub use io::{CaptureTargetsToCsv, CaptureTargetsToJson, write_capture_csv};
pub use pointer::{INTERACTIVE_OFFSET_Y, PointerMapper};
pub use position::GridPosition;
pub use share::{LocationMetadata, MapImageConfig, MapImageRequest, PinPlacement};

pub use geo_types;
