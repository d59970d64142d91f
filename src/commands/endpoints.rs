//! Catalog URLs built from the configured API root.

/// Number of location areas per `map` page
pub const PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// First page of the location area listing.
    pub fn first_location_page(&self) -> String {
        format!(
            "{}/location-area?offset=0&limit={}",
            self.base_url, PAGE_SIZE
        )
    }

    pub fn location_area(&self, name: &str) -> String {
        format!("{}/location-area/{}", self.base_url, name)
    }

    pub fn pokemon(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, name)
    }
}
