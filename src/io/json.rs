use crate::capture::CaptureTarget;
use crate::error::SeatGridError;

/// Trait for serializing collections of [`CaptureTarget`]s as JSON.
///
/// Implemented for `[CaptureTarget]` and `Vec<CaptureTarget>`.
pub trait CaptureTargetsToJson {
    /// Serializes the targets as a pretty-printed JSON array.
    fn to_json(&self) -> Result<String, SeatGridError>;
}

impl CaptureTargetsToJson for [CaptureTarget] {
    fn to_json(&self) -> Result<String, SeatGridError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SeatGridError::SerializationError(e.to_string()))
    }
}

impl CaptureTargetsToJson for Vec<CaptureTarget> {
    fn to_json(&self) -> Result<String, SeatGridError> {
        self.as_slice().to_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::CapturePlan;
    use crate::coord::ContainerBounds;

    #[test]
    fn test_targets_to_json() -> Result<(), SeatGridError> {
        let bounds = ContainerBounds::new(0.0, 0.0, 320.0, 600.0)?;
        let plan = CapturePlan::new(bounds);

        let json = plan.targets().to_json()?;
        let value: serde_json::Value = serde_json::from_str(&json)
            .map_err(|e| SeatGridError::SerializationError(e.to_string()))?;

        let items = value
            .as_array()
            .ok_or_else(|| SeatGridError::SerializationError("expected array".to_string()))?;
        assert_eq!(items.len(), plan.len());
        assert_eq!(items[0]["token"], "X0Y0");
        assert_eq!(items[0]["file_name"], "X0Y0.png");
        assert_eq!(items[1]["tap_x"], 10.0);
        Ok(())
    }
}
