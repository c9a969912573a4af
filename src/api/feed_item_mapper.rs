//! Validates a transport response and decodes the feed payload.
//!
//! Expected body on status 200:
//!
//! ```json
//! { "items": [ { "id": "<uuid>", "description": "..", "location": "..", "image": "<absolute url>" } ] }
//! ```

use log::debug;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use url::Url;
use uuid::Uuid;

use crate::api::http_client::HttpResponse;
use crate::domain::{FeedItem, LoadResult};
use crate::errors::LoadError;

const OK_200: u16 = 200;
const HYPHENATED_UUID_LEN: usize = 36;

#[derive(Debug, Deserialize)]
struct Root {
    items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    #[serde(deserialize_with = "deserialize_hyphenated_uuid")]
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    image: Url,
}

/// Only the 8-4-4-4-12 form is a valid id; simple, braced and URN forms are not.
fn deserialize_hyphenated_uuid<'de, D>(deserializer: D) -> Result<Uuid, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw.len() != HYPHENATED_UUID_LEN {
        return Err(de::Error::custom(format!(
            "expected a hyphenated UUID, got '{}'",
            raw
        )));
    }

    Uuid::parse_str(&raw).map_err(de::Error::custom)
}

impl From<Item> for FeedItem {
    fn from(item: Item) -> Self {
        FeedItem::new(item.id, item.image)
            .with_description(item.description)
            .with_location(item.location)
    }
}

/// Turn a response into a feed.
///
/// Anything but a 200 is rejected without looking at the body. A single
/// malformed entry rejects the whole payload.
pub fn map(response: &HttpResponse) -> LoadResult {
    if response.status != OK_200 {
        debug!("Rejecting feed response with status {}", response.status);
        return Err(LoadError::InvalidData);
    }

    let root: Root = serde_json::from_slice(&response.body).map_err(|e| {
        debug!("Rejecting feed payload: {}", e);
        LoadError::InvalidData
    })?;

    Ok(root.items.into_iter().map(FeedItem::from).collect())
}
