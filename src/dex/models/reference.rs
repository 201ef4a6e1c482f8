//! # Reference and Detail Payload
//!
//! A `Reference` is the lightweight entry returned by the collection endpoint.
//! A `DetailPayload` is the part of the per-entry record the UI consumes.

use serde::Deserialize;

/// Named pointer to a detail resource, in API response order
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Reference {
    pub name: String,
    #[serde(rename = "url")]
    pub detail_url: String,
}

impl Reference {
    pub fn new(name: impl Into<String>, detail_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail_url: detail_url.into(),
        }
    }

    /// Case-insensitive substring match against an already lower-cased needle
    pub fn matches_filter(&self, lowered_filter: &str) -> bool {
        lowered_filter.is_empty() || self.name.to_lowercase().contains(lowered_filter)
    }
}

/// Detail record for a single entry
///
/// Only the display sprite is kept. The upstream API sends `null` for
/// entries without artwork, hence the `Option`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetailPayload {
    pub image_url: Option<String>,
}

impl DetailPayload {
    pub fn with_image(image_url: impl Into<String>) -> Self {
        Self {
            image_url: Some(image_url.into()),
        }
    }
}
