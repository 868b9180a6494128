pub mod config;
pub mod metadata;
pub mod request;

pub use config::MapImageConfig;
pub use metadata::{LocationMetadata, arena_display_name};
pub use request::{MapImageRequest, PinPlacement};
