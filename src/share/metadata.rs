use serde::{Deserialize, Serialize};

/// Human-readable arena name, e.g. `salen` -> `Salen Arena`.
pub fn arena_display_name(arena: &str) -> String {
    let mut chars = arena.chars();
    match chars.next() {
        Some(first) => format!("{}{} Arena", first.to_uppercase(), chars.as_str()),
        None => "Arena".to_string(),
    }
}

/// Page title and description for a shared location.
///
/// # Example
/// ```
/// use seatgrid_rs::LocationMetadata;
///
/// let meta = LocationMetadata::new("salen", "X10Y15");
/// assert_eq!(meta.title, "Salen Arena - X10Y15");
/// assert_eq!(meta.description, "Location X10Y15 in Salen Arena");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationMetadata {
    pub title: String,
    pub description: String,
}

impl LocationMetadata {
    pub fn new(arena: &str, location: &str) -> Self {
        let name = arena_display_name(arena);

        Self {
            title: format!("{} - {}", name, location),
            description: format!("Location {} in {}", location, name),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_display_name() {
        assert_eq!(arena_display_name("salen"), "Salen Arena");
        assert_eq!(arena_display_name("østhallen"), "Østhallen Arena");
        assert_eq!(arena_display_name(""), "Arena");
    }

    #[test]
    fn test_overrides() {
        let meta = LocationMetadata::new("salen", "X0Y0")
            .with_title("My seat")
            .with_description("Come find me");

        assert_eq!(meta.title, "My seat");
        assert_eq!(meta.description, "Come find me");
    }
}
