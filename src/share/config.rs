use crate::index::{GRID_DIMENSIONS, GridDimensions};

pub const DEFAULT_IMAGE_WIDTH: u32 = 1200;
pub const DEFAULT_IMAGE_HEIGHT: u32 = 630;
pub const MIN_IMAGE_SIZE: u32 = 200;
pub const MAX_IMAGE_SIZE: u32 = 2000;

/// Where arena assets are served from when no deployment host is set
pub const DEFAULT_ASSET_BASE_URL: &str = "http://localhost:9100";

/// Environment variable holding the deployment host name
pub const ASSET_HOST_ENV: &str = "VERCEL_URL";

/// Settings for validating and rendering map-image requests.
///
/// # Example
/// ```
/// use seatgrid_rs::MapImageConfig;
///
/// let config = MapImageConfig::new()
///     .arenas(vec!["salen".into(), "hallen".into()])
///     .size_bounds(100, 4000);
///
/// assert!(config.is_supported_arena("hallen"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MapImageConfig {
    pub arenas: Vec<String>,
    pub default_width: u32,
    pub default_height: u32,
    pub min_size: u32,
    pub max_size: u32,
    pub base_url: String,
    pub dimensions: GridDimensions,
}

impl Default for MapImageConfig {
    fn default() -> Self {
        Self {
            arenas: vec!["salen".to_string()],
            default_width: DEFAULT_IMAGE_WIDTH,
            default_height: DEFAULT_IMAGE_HEIGHT,
            min_size: MIN_IMAGE_SIZE,
            max_size: MAX_IMAGE_SIZE,
            base_url: DEFAULT_ASSET_BASE_URL.to_string(),
            dimensions: GRID_DIMENSIONS,
        }
    }
}

impl MapImageConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config with the asset host taken from `VERCEL_URL`, if set.
    pub fn from_env() -> Self {
        let host = std::env::var(ASSET_HOST_ENV).ok();
        Self::default().asset_host(host.as_deref())
    }

    /// Serves assets from `https://{host}`; `None` or an empty host keeps the current base URL.
    pub fn asset_host(mut self, host: Option<&str>) -> Self {
        if let Some(host) = host.map(str::trim).filter(|h| !h.is_empty()) {
            self.base_url = format!("https://{}", host);
        }
        self
    }

    pub fn arenas(mut self, arenas: Vec<String>) -> Self {
        self.arenas = arenas;
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn default_size(mut self, width: u32, height: u32) -> Self {
        self.default_width = width;
        self.default_height = height;
        self
    }

    pub fn size_bounds(mut self, min_size: u32, max_size: u32) -> Self {
        self.min_size = min_size;
        self.max_size = max_size;
        self
    }

    pub fn dimensions(mut self, dimensions: GridDimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn is_supported_arena(&self, arena: &str) -> bool {
        self.arenas.iter().any(|a| a == arena)
    }

    pub fn is_valid_size(&self, size: u32) -> bool {
        (self.min_size..=self.max_size).contains(&size)
    }
}
