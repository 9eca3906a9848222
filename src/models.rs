//! Domain records shared by the API client, the store and the views.

use serde::{Deserialize, Serialize};

/// An image record returned by `images/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cat {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    /// Breed metadata attached to the image, empty when the API omits it.
    #[serde(default)]
    pub breeds: Vec<Breed>,
}

impl Cat {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            width: None,
            height: None,
            breeds: Vec::new(),
        }
    }

    /// First attached breed, if any.
    pub fn breed(&self) -> Option<&Breed> {
        self.breeds.first()
    }

    /// "WxH" when both dimensions are known.
    pub fn dimensions(&self) -> Option<String> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some(format!("{}x{}", w, h)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breed {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub temperament: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub life_span: Option<String>,
    #[serde(default)]
    pub wikipedia_url: Option<String>,
}

/// Link between a favorite record id and the image it marks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteId {
    pub id: u64,
    pub image_id: String,
}

impl FavoriteId {
    pub fn new(id: u64, image_id: impl Into<String>) -> Self {
        Self {
            id,
            image_id: image_id.into(),
        }
    }
}

/// Wire shape of an entry from the `favourites` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FavoriteRecord {
    pub id: u64,
    pub image_id: String,
    #[serde(default)]
    pub sub_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl From<FavoriteRecord> for FavoriteId {
    fn from(record: FavoriteRecord) -> Self {
        Self {
            id: record.id,
            image_id: record.image_id,
        }
    }
}
