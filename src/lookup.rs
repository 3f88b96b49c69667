//! Where registered image sizes come from.
//!
//! The checks only need a resolved list of sizes. Fetching that list is
//! behind [`SizeLookup`] so it can be a REST call, a file, or a stub.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::AppError;

/// A named image size registered for an attachment, e.g. `medium` at 300x300
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredSize {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl RegisteredSize {
    pub fn new(name: &str, width: u32, height: u32) -> Self {
        Self {
            name: name.to_owned(),
            width,
            height,
        }
    }
}

#[async_trait]
pub trait SizeLookup: Send + Sync {
    async fn registered_sizes(&self, attachment_id: u64) -> Result<Vec<RegisteredSize>, AppError>;
}

/// A fixed list, returned for every attachment
#[derive(Debug, Clone, Default)]
pub struct StaticSizes(pub Vec<RegisteredSize>);

#[async_trait]
impl SizeLookup for StaticSizes {
    async fn registered_sizes(&self, _attachment_id: u64) -> Result<Vec<RegisteredSize>, AppError> {
        Ok(self.0.clone())
    }
}

#[derive(Debug, Deserialize)]
struct MediaResponse {
    #[serde(default)]
    media_details: Option<MediaDetails>,
}

#[derive(Debug, Deserialize)]
struct MediaDetails {
    #[serde(default)]
    sizes: Option<BTreeMap<String, SizeDetails>>,
}

// The endpoint also sends file, mime_type and source_url which are not needed
#[derive(Debug, Deserialize)]
struct SizeDetails {
    #[serde(default)]
    width: Option<u32>,
    #[serde(default)]
    height: Option<u32>,
}

impl From<MediaResponse> for Vec<RegisteredSize> {
    fn from(response: MediaResponse) -> Self {
        response
            .media_details
            .and_then(|details| details.sizes)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(name, size)| match (size.width, size.height) {
                (Some(width), Some(height)) => Some(RegisteredSize {
                    name,
                    width,
                    height,
                }),
                _ => {
                    debug!("Skipping registered size {} without dimensions", name);
                    None
                }
            })
            .collect()
    }
}

/// Reads `media_details.sizes` from the WordPress media endpoint
#[derive(Debug, Clone)]
pub struct RestSizeLookup {
    base_url: String,
    client: reqwest::Client,
}

pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

impl RestSizeLookup {
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, DEFAULT_LOOKUP_TIMEOUT)
    }

    /// `timeout` bounds both connecting and the whole request
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client: reqwest::Client::builder()
                .connect_timeout(timeout)
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
        }
    }

    /// Example: `https://example.com/wp-json/wp/v2/media/42`
    pub fn media_url(&self, attachment_id: u64) -> String {
        format!("{}/wp-json/wp/v2/media/{}", self.base_url, attachment_id)
    }
}

#[async_trait]
impl SizeLookup for RestSizeLookup {
    async fn registered_sizes(&self, attachment_id: u64) -> Result<Vec<RegisteredSize>, AppError> {
        let url = self.media_url(attachment_id);
        debug!("Fetching registered sizes from {}", url);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(AppError::Lookup {
                status: response.status().as_u16(),
                attachment_id,
            });
        }

        let media: MediaResponse = response.json().await?;
        let sizes: Vec<RegisteredSize> = media.into();
        debug!(
            "Attachment {} has {} registered sizes",
            attachment_id,
            sizes.len()
        );
        Ok(sizes)
    }
}
