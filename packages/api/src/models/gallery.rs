//! Gallery events and their photos.

use serde::{Deserialize, Serialize};

use crate::envelope::lenient_vec;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryItem {
    pub id: String,
    #[serde(default)]
    pub event_id: String,
    #[serde(default)]
    pub photo_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<Box<GalleryEvent>>,
}

/// An event as listed by `GET /galleries` and `GET /events`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryEvent {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub gallery: Vec<GalleryItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_gallery_items: Option<u64>,
}

impl GalleryEvent {
    /// First photo, used as the event's cover.
    pub fn cover(&self) -> Option<&str> {
        self.gallery
            .iter()
            .map(|item| item.photo_url.as_str())
            .find(|url| !url.is_empty())
    }

    pub fn photo_count(&self) -> u64 {
        self.total_gallery_items
            .unwrap_or(self.gallery.len() as u64)
    }
}

/// `GET /galleries/event/:id`: an event with every photo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventGallery {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub gallery: Vec<GalleryItem>,
    #[serde(default)]
    pub total_gallery_items: u64,
}
