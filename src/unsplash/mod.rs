mod error;
mod resource;

pub use error::UnsplashError;
pub use resource::Photo;

use log::*;
use serde::Deserialize;

const BASE_URL: &str = "https://api.unsplash.com";

/// Access-key value shipped in documentation; treated the same as no key.
///
const PLACEHOLDER_ACCESS_KEY: &str = "YOUR_UNSPLASH_ACCESS_KEY";

const RANDOM_PHOTO_PARAMS: [(&str, &str); 2] =
    [("orientation", "landscape"), ("query", "nature,abstract")];

/// Wire format of the random-photo response; only the full-size URL is used.
///
#[derive(Deserialize)]
struct PhotoModel {
    urls: Option<UrlsModel>,
}

#[derive(Deserialize)]
struct UrlsModel {
    full: Option<String>,
}

/// Responsible for asynchronous interaction with the photo service. An
/// instance only exists when a usable access key was configured.
///
pub struct Unsplash {
    access_key: String,
    base_url: String,
    http_client: reqwest::Client,
}

impl Unsplash {
    /// Resolve the photo-background capability from the configured key.
    /// An absent, empty, or placeholder key yields `MissingAccessKey`.
    ///
    pub fn from_config(access_key: Option<&str>) -> Result<Unsplash, UnsplashError> {
        match access_key {
            Some(key) if !key.trim().is_empty() && key != PLACEHOLDER_ACCESS_KEY => {
                Ok(Unsplash::with_base_url(key, BASE_URL))
            }
            _ => Err(UnsplashError::MissingAccessKey),
        }
    }

    /// Returns a new instance for the given access key and base URL.
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be created. This should never happen
    /// in practice as reqwest::Client::builder().build() only fails on
    /// invalid configuration, which we don't use.
    pub(crate) fn with_base_url(access_key: &str, base_url: &str) -> Unsplash {
        Unsplash {
            access_key: access_key.to_owned(),
            base_url: base_url.to_owned(),
            http_client: reqwest::Client::builder()
                .build()
                .expect("Failed to create HTTP client - this should never happen"),
        }
    }

    /// Returns a random landscape photo descriptor or an error.
    ///
    pub async fn random_photo(&self) -> Result<Photo, UnsplashError> {
        debug!("Requesting a random background photo...");
        let response = self
            .http_client
            .get(format!("{}/photos/random", self.base_url))
            .query(&RANDOM_PHOTO_PARAMS)
            .header("Authorization", format!("Client-ID {}", self.access_key))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!("Photo request failed with status {}", status);
            return Err(UnsplashError::Status(status.as_u16()));
        }

        let response_bytes = response.bytes().await?;
        let model: PhotoModel = serde_json::from_slice(&response_bytes).map_err(|e| {
            error!(
                "Failed to deserialize photo response: {}. Response body: {}",
                e,
                String::from_utf8_lossy(&response_bytes)
            );
            UnsplashError::MalformedResponse(e.to_string())
        })?;

        let full_url = model
            .urls
            .and_then(|urls| urls.full)
            .ok_or(UnsplashError::MissingImageUrl)?;

        debug!("Received photo descriptor.");
        Ok(Photo { full_url })
    }
}
