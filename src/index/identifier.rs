use crate::error::SeatGridError;
use crate::index::constants::{COLUMN_MARKER, ROW_MARKER};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A grid intersection addressed by column (`x`) and row (`y`).
///
/// Displays as its location token, e.g. `X10Y15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCoordinates {
    pub x: i64,
    pub y: i64,
}

impl GridCoordinates {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Returns the location token, e.g. `X10Y15`.
    pub fn token(&self) -> String {
        format_grid_coordinates(self.x, self.y)
    }

    /// Returns the image file name for this location, e.g. `X10Y15.png`.
    pub fn file_name(&self) -> String {
        format!("{}.png", self.token())
    }
}

impl fmt::Display for GridCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X{}Y{}", self.x, self.y)
    }
}

/// Strict parsing: the whole input must be a location token.
///
/// Use [`parse_grid_coordinates`] to find a token embedded in a larger string.
impl FromStr for GridCoordinates {
    type Err = SeatGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match match_token_at(s, 0) {
            Some((coords, end)) if end == s.len() => Ok(coords),
            _ => Err(SeatGridError::InvalidLocation(s.to_string())),
        }
    }
}

/// Encodes a grid intersection as a location token.
///
/// The token is used as a URL path segment and as an image file stem:
/// an uppercase `X`, the column in plain decimal, an uppercase `Y`, the row.
///
/// # Example
/// ```
/// use seatgrid_rs::format_grid_coordinates;
///
/// assert_eq!(format_grid_coordinates(10, 15), "X10Y15");
/// assert_eq!(format_grid_coordinates(0, 0), "X0Y0");
/// ```
pub fn format_grid_coordinates(grid_x: i64, grid_y: i64) -> String {
    GridCoordinates::new(grid_x, grid_y).to_string()
}

/// Finds the first `X<digits>Y<digits>` token in `location`.
///
/// The match is not anchored: leading and trailing characters are ignored as
/// long as a complete token is present. Returns `None` when there is no token,
/// or when a digit run does not fit in an `i64`.
///
/// # Example
/// ```
/// use seatgrid_rs::{GridCoordinates, parse_grid_coordinates};
///
/// assert_eq!(parse_grid_coordinates("X10Y15"), Some(GridCoordinates::new(10, 15)));
/// assert_eq!(parse_grid_coordinates("salen/X3Y4.png"), Some(GridCoordinates::new(3, 4)));
/// assert_eq!(parse_grid_coordinates("X5Y"), None);
/// ```
pub fn parse_grid_coordinates(location: &str) -> Option<GridCoordinates> {
    location
        .bytes()
        .enumerate()
        .filter(|&(_, b)| b == COLUMN_MARKER)
        .find_map(|(i, _)| match_token_at(location, i).map(|(coords, _)| coords))
}

/// Matches a token starting exactly at byte `start`, returning it and the byte
/// offset just past its last digit.
fn match_token_at(location: &str, start: usize) -> Option<(GridCoordinates, usize)> {
    let bytes = location.as_bytes();
    if bytes.get(start) != Some(&COLUMN_MARKER) {
        return None;
    }

    let x_start = start + 1;
    let x_end = x_start + digit_run(&bytes[x_start..]);
    if x_end == x_start || bytes.get(x_end) != Some(&ROW_MARKER) {
        return None;
    }

    let y_start = x_end + 1;
    let y_end = y_start + digit_run(&bytes[y_start..]);
    if y_end == y_start {
        return None;
    }

    // Offsets bound ASCII digit runs, so they are char boundaries
    let x = location[x_start..x_end].parse::<i64>().ok()?;
    let y = location[y_start..y_end].parse::<i64>().ok()?;

    Some((GridCoordinates::new(x, y), y_end))
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
