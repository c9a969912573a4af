use serde::Serialize;
use url::Url;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedItem {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "image")]
    pub image_url: Url,
}

impl FeedItem {
    pub fn new(id: Uuid, image_url: Url) -> Self {
        Self {
            id,
            description: None,
            location: None,
            image_url,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_location(mut self, location: Option<String>) -> Self {
        self.location = location;
        self
    }
}
