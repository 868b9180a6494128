/// Error type for seatgrid-rs operations.
#[derive(Debug, PartialEq)]
pub enum SeatGridError {
    /// A grid or container dimension is invalid (e.g., zero or negative).
    InvalidDimension(String),
    /// The location token is not of the form `X<int>Y<int>`.
    InvalidLocation(String),
    /// The location token parsed, but lies outside the grid.
    LocationOutOfRange { x: i64, y: i64 },
    /// A required request parameter is missing.
    MissingParameter(&'static str),
    /// The arena is not one of the configured arenas.
    UnsupportedArena(String),
    /// The requested image width or height is unparseable or out of bounds.
    InvalidImageSize(String),
    /// File I/O error.
    IoError(String),
    /// CSV writing error.
    CsvError(String),
    /// JSON serialization error.
    SerializationError(String),
}

impl std::fmt::Display for SeatGridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeatGridError::InvalidDimension(msg) => write!(f, "Invalid dimension: {}", msg),
            SeatGridError::InvalidLocation(loc) => {
                write!(f, "Invalid location format '{}'. Use format like X10Y15", loc)
            }
            SeatGridError::LocationOutOfRange { x, y } => {
                write!(f, "Location X{}Y{} is outside the grid", x, y)
            }
            SeatGridError::MissingParameter(name) => {
                write!(f, "Missing required parameter: {}", name)
            }
            SeatGridError::UnsupportedArena(arena) => write!(f, "Unsupported arena: {}", arena),
            SeatGridError::InvalidImageSize(msg) => write!(f, "Invalid image size: {}", msg),
            SeatGridError::IoError(msg) => write!(f, "IO error: {}", msg),
            SeatGridError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            SeatGridError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for SeatGridError {}
