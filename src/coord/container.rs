use crate::error::SeatGridError;
use geo_types::{Rect, coord};
use serde::{Deserialize, Serialize};

/// On-screen pixel size of the rendered map image at the moment of interaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

impl ContainerSize {
    /// Creates a container size, rejecting non-positive or non-finite values.
    ///
    /// # Example
    /// ```
    /// use seatgrid_rs::ContainerSize;
    ///
    /// assert!(ContainerSize::new(320.0, 600.0).is_ok());
    /// assert!(ContainerSize::new(0.0, 600.0).is_err());
    /// ```
    pub fn new(width: f64, height: f64) -> Result<Self, SeatGridError> {
        if !(width.is_finite() && width > 0.0) {
            return Err(SeatGridError::InvalidDimension(format!(
                "Container width must be positive, got {}",
                width
            )));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(SeatGridError::InvalidDimension(format!(
                "Container height must be positive, got {}",
                height
            )));
        }
        Ok(Self { width, height })
    }
}

/// Measured bounding box of the map container in page coordinates.
///
/// Mirrors what a layout engine reports for an element: the offset of its
/// top-left corner plus its rendered size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerBounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Result<Self, SeatGridError> {
        ContainerSize::new(width, height)?;
        Ok(Self {
            left,
            top,
            width,
            height,
        })
    }

    pub fn from_rect(rect: &Rect<f64>) -> Result<Self, SeatGridError> {
        Self::new(rect.min().x, rect.min().y, rect.width(), rect.height())
    }

    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.left, y: self.top },
            coord! { x: self.left + self.width, y: self.top + self.height },
        )
    }

    pub fn size(&self) -> ContainerSize {
        ContainerSize {
            width: self.width,
            height: self.height,
        }
    }

    /// Converts a page-space point to container-relative pixels, clamped into
    /// `[0, width] x [0, height]`.
    pub fn clamp_relative(&self, page_x: f64, page_y: f64) -> (f64, f64) {
        let relative_x = page_x - self.left;
        let relative_y = page_y - self.top;

        (
            relative_x.clamp(0.0, self.width),
            relative_y.clamp(0.0, self.height),
        )
    }
}
