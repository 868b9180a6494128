use crate::capture::CaptureTarget;
use crate::error::SeatGridError;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Trait for writing collections of [`CaptureTarget`]s as a CSV manifest.
///
/// Implemented for `[CaptureTarget]` and `Vec<CaptureTarget>`.
pub trait CaptureTargetsToCsv {
    /// Writes the manifest to a file, replacing it if it exists.
    fn to_csv(&self, path: impl AsRef<Path>) -> Result<(), SeatGridError>;
}

impl CaptureTargetsToCsv for [CaptureTarget] {
    fn to_csv(&self, path: impl AsRef<Path>) -> Result<(), SeatGridError> {
        let file = File::create(path).map_err(|e| SeatGridError::IoError(e.to_string()))?;
        write_capture_csv(file, self)
    }
}

impl CaptureTargetsToCsv for Vec<CaptureTarget> {
    fn to_csv(&self, path: impl AsRef<Path>) -> Result<(), SeatGridError> {
        self.as_slice().to_csv(path)
    }
}

/// Streams a CSV manifest of capture targets to any writer.
///
/// Columns: `token,grid_x,grid_y,percentage_x,percentage_y,tap_x,tap_y,file_name`.
///
/// # Example
///
/// ```
/// use seatgrid_rs::{CapturePlan, ContainerBounds, write_capture_csv};
///
/// # fn main() -> Result<(), seatgrid_rs::SeatGridError> {
/// let plan = CapturePlan::new(ContainerBounds::new(0.0, 0.0, 320.0, 600.0)?);
///
/// let mut buffer = Vec::new();
/// write_capture_csv(&mut buffer, plan.targets())?;
///
/// let text = String::from_utf8(buffer).unwrap();
/// assert!(text.starts_with("token,grid_x,grid_y"));
/// # Ok(())
/// # }
/// ```
pub fn write_capture_csv<W: Write>(
    writer: W,
    targets: &[CaptureTarget],
) -> Result<(), SeatGridError> {
    let mut writer = csv::Writer::from_writer(writer);

    for target in targets {
        writer
            .serialize(target)
            .map_err(|e| SeatGridError::CsvError(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| SeatGridError::CsvError(e.to_string()))?;

    Ok(())
}
