use crate::error::SeatGridError;
use crate::index::{GridCoordinates, parse_grid_coordinates};
use crate::position::GridPosition;
use crate::share::config::MapImageConfig;
use crate::share::metadata::arena_display_name;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Pin placement and sizing for a rendered map image.
///
/// Sizes are in pixels and scale with the image width, with fixed minimums.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinPlacement {
    pub percentage_x: f64,
    pub percentage_y: f64,
    pub pin_size: f64,
    pub dot_size: f64,
    pub label_font_size: f64,
    pub coordinate_font_size: f64,
}

/// A validated request for a map image with a pinned location.
#[derive(Debug, Clone, PartialEq)]
pub struct MapImageRequest {
    pub arena: String,
    pub location: GridCoordinates,
    pub width: u32,
    pub height: u32,
    position: GridPosition,
    base_url: String,
}

impl MapImageRequest {
    /// Validates raw query parameters.
    ///
    /// Checks, in order: required parameters, arena, image size, location format,
    /// location range. An absent or empty size falls back to the configured default.
    ///
    /// # Example
    /// ```
    /// use seatgrid_rs::{MapImageConfig, MapImageRequest, SeatGridError};
    ///
    /// let config = MapImageConfig::default();
    ///
    /// let request = MapImageRequest::from_query(Some("salen"), Some("X16Y30"), None, None, &config)?;
    /// assert_eq!(request.file_name(), "map-salen-X16Y30-1200x630.png");
    ///
    /// let err = MapImageRequest::from_query(Some("salen"), Some("nowhere"), None, None, &config);
    /// assert!(matches!(err, Err(SeatGridError::InvalidLocation(_))));
    /// # Ok::<(), SeatGridError>(())
    /// ```
    pub fn from_query(
        arena: Option<&str>,
        location: Option<&str>,
        width: Option<&str>,
        height: Option<&str>,
        config: &MapImageConfig,
    ) -> Result<Self, SeatGridError> {
        Self::validate(arena, location, width, height, config).inspect_err(|e| {
            warn!(error = %e, "rejected map image request");
        })
    }

    fn validate(
        arena: Option<&str>,
        location: Option<&str>,
        width: Option<&str>,
        height: Option<&str>,
        config: &MapImageConfig,
    ) -> Result<Self, SeatGridError> {
        let arena = arena
            .filter(|a| !a.is_empty())
            .ok_or(SeatGridError::MissingParameter("arena"))?;
        let location = location
            .filter(|l| !l.is_empty())
            .ok_or(SeatGridError::MissingParameter("location"))?;

        if !config.is_supported_arena(arena) {
            return Err(SeatGridError::UnsupportedArena(arena.to_string()));
        }

        let width = parse_size(width, config.default_width)?;
        let height = parse_size(height, config.default_height)?;
        if !config.is_valid_size(width) || !config.is_valid_size(height) {
            return Err(SeatGridError::InvalidImageSize(format!(
                "Width and height must be between {} and {} pixels",
                config.min_size, config.max_size
            )));
        }

        let coords = parse_grid_coordinates(location)
            .ok_or_else(|| SeatGridError::InvalidLocation(location.to_string()))?;
        if !config.dimensions.contains(coords.x, coords.y) {
            return Err(SeatGridError::LocationOutOfRange {
                x: coords.x,
                y: coords.y,
            });
        }

        let position = GridPosition::from_grid_on(&config.dimensions, coords.x, coords.y);
        debug!(arena, token = %coords, width, height, "accepted map image request");

        Ok(Self {
            arena: arena.to_string(),
            location: coords,
            width,
            height,
            position,
            base_url: config.base_url.clone(),
        })
    }

    pub fn position(&self) -> &GridPosition {
        &self.position
    }

    pub fn pin(&self) -> PinPlacement {
        let width = self.width as f64;

        PinPlacement {
            percentage_x: self.position.percentage_x,
            percentage_y: self.position.percentage_y,
            pin_size: (width * 0.04).max(30.0),
            dot_size: (width * 0.008).max(6.0),
            label_font_size: (width * 0.012).max(12.0),
            coordinate_font_size: (width * 0.01).max(10.0),
        }
    }

    /// Download name, e.g. `map-salen-X10Y15-1200x630.png`.
    pub fn file_name(&self) -> String {
        format!(
            "map-{}-{}-{}x{}.png",
            self.arena, self.location, self.width, self.height
        )
    }

    /// URL of the arena floor plan image.
    pub fn map_asset_url(&self) -> String {
        format!("{}/arena/{}.svg", self.base_url.trim_end_matches('/'), self.arena)
    }

    pub fn arena_label(&self) -> String {
        arena_display_name(&self.arena)
    }
}

fn parse_size(raw: Option<&str>, default: u32) -> Result<u32, SeatGridError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(default),
        Some(s) => s
            .parse::<u32>()
            .map_err(|_| SeatGridError::InvalidImageSize(format!("'{}' is not a pixel size", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(
        arena: Option<&str>,
        location: Option<&str>,
        width: Option<&str>,
        height: Option<&str>,
    ) -> Result<MapImageRequest, SeatGridError> {
        MapImageRequest::from_query(arena, location, width, height, &MapImageConfig::default())
    }

    #[test]
    fn test_valid_request() -> Result<(), SeatGridError> {
        let req = request(Some("salen"), Some("X10Y15"), Some("800"), Some("600"))?;

        assert_eq!(req.location, GridCoordinates::new(10, 15));
        assert_eq!((req.width, req.height), (800, 600));
        assert_eq!(req.position().percentage_x, 31.25);
        assert_eq!(req.position().percentage_y, 25.0);
        assert_eq!(req.file_name(), "map-salen-X10Y15-800x600.png");
        assert_eq!(req.map_asset_url(), "http://localhost:9100/arena/salen.svg");
        assert_eq!(req.arena_label(), "Salen Arena");
        Ok(())
    }

    #[test]
    fn test_default_size() -> Result<(), SeatGridError> {
        let req = request(Some("salen"), Some("X0Y0"), None, Some(""))?;
        assert_eq!((req.width, req.height), (1200, 630));
        Ok(())
    }

    #[test]
    fn test_missing_parameters() {
        assert_eq!(
            request(None, Some("X1Y1"), None, None),
            Err(SeatGridError::MissingParameter("arena"))
        );
        assert_eq!(
            request(Some("salen"), Some(""), None, None),
            Err(SeatGridError::MissingParameter("location"))
        );
    }

    #[test]
    fn test_unsupported_arena() {
        assert_eq!(
            request(Some("hallen"), Some("X1Y1"), None, None),
            Err(SeatGridError::UnsupportedArena("hallen".to_string()))
        );
    }

    #[test]
    fn test_invalid_size() {
        assert!(matches!(
            request(Some("salen"), Some("X1Y1"), Some("199"), None),
            Err(SeatGridError::InvalidImageSize(_))
        ));
        assert!(matches!(
            request(Some("salen"), Some("X1Y1"), None, Some("2001")),
            Err(SeatGridError::InvalidImageSize(_))
        ));
        assert!(matches!(
            request(Some("salen"), Some("X1Y1"), Some("wide"), None),
            Err(SeatGridError::InvalidImageSize(_))
        ));
    }

    #[test]
    fn test_validation_order() {
        // Arena is checked before size, size before location
        assert!(matches!(
            request(Some("hallen"), Some("garbage"), Some("1"), None),
            Err(SeatGridError::UnsupportedArena(_))
        ));
        assert!(matches!(
            request(Some("salen"), Some("garbage"), Some("1"), None),
            Err(SeatGridError::InvalidImageSize(_))
        ));
    }

    #[test]
    fn test_invalid_location() {
        assert_eq!(
            request(Some("salen"), Some("X5Y"), None, None),
            Err(SeatGridError::InvalidLocation("X5Y".to_string()))
        );
    }

    #[test]
    fn test_location_out_of_range() {
        assert_eq!(
            request(Some("salen"), Some("X33Y0"), None, None),
            Err(SeatGridError::LocationOutOfRange { x: 33, y: 0 })
        );
        assert_eq!(
            request(Some("salen"), Some("X0Y61"), None, None),
            Err(SeatGridError::LocationOutOfRange { x: 0, y: 61 })
        );
    }

    #[test]
    fn test_unanchored_location_is_accepted() -> Result<(), SeatGridError> {
        let req = request(Some("salen"), Some("seat-X4Y8"), None, None)?;
        assert_eq!(req.location, GridCoordinates::new(4, 8));
        assert_eq!(req.file_name(), "map-salen-X4Y8-1200x630.png");
        Ok(())
    }

    #[test]
    fn test_pin_sizes() -> Result<(), SeatGridError> {
        let large = request(Some("salen"), Some("X16Y30"), Some("2000"), None)?.pin();
        assert_eq!(large.pin_size, 80.0);
        assert_eq!(large.dot_size, 16.0);
        assert_eq!(large.label_font_size, 24.0);
        assert_eq!(large.coordinate_font_size, 20.0);
        assert_eq!((large.percentage_x, large.percentage_y), (50.0, 50.0));

        let small = request(Some("salen"), Some("X16Y30"), Some("200"), None)?.pin();
        assert_eq!(small.pin_size, 30.0);
        assert_eq!(small.dot_size, 6.0);
        assert_eq!(small.label_font_size, 12.0);
        assert_eq!(small.coordinate_font_size, 10.0);
        Ok(())
    }

    #[test]
    fn test_configured_base_url() -> Result<(), SeatGridError> {
        let config = MapImageConfig::new().asset_host(Some("seats.example.app"));
        let req = MapImageRequest::from_query(Some("salen"), Some("X1Y1"), None, None, &config)?;
        assert_eq!(req.map_asset_url(), "https://seats.example.app/arena/salen.svg");
        Ok(())
    }
}
