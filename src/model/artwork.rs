use serde::Serialize;

/// Square artwork in three sizes.
///
/// Sizes are also addressable by their API aliases (`150x`, `480x`, `1000x`)
/// through [`Artwork::get`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Artwork {
    /// 150x150 image URL
    pub small: Option<String>,
    /// 480x480 image URL
    pub medium: Option<String>,
    /// 1000x1000 image URL
    pub large: Option<String>,
}

impl Artwork {
    pub fn new(small: Option<String>, medium: Option<String>, large: Option<String>) -> Self {
        Self {
            small,
            medium,
            large,
        }
    }

    /// Look up a size by name or alias.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "small" | "150x" => self.small.as_deref(),
            "medium" | "480x" => self.medium.as_deref(),
            "large" | "1000x" => self.large.as_deref(),
            _ => None,
        }
    }

    /// True for the placeholder used when the API sent no artwork.
    pub fn is_empty(&self) -> bool {
        self.small.is_none() && self.medium.is_none() && self.large.is_none()
    }
}

/// Wide profile banner in two sizes (`640x`, `2000x`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoverPhoto {
    /// 640px wide image URL
    pub small: Option<String>,
    /// 2000px wide image URL
    pub large: Option<String>,
}

impl CoverPhoto {
    pub fn new(small: Option<String>, large: Option<String>) -> Self {
        Self { small, large }
    }

    /// Look up a size by name or alias.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "small" | "640x" => self.small.as_deref(),
            "large" | "2000x" => self.large.as_deref(),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.small.is_none() && self.large.is_none()
    }
}
