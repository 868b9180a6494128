pub mod csv;
pub mod json;

pub use csv::{CaptureTargetsToCsv, write_capture_csv};
pub use json::CaptureTargetsToJson;
