mod error;
mod resource;

pub use error::QuoteError;
pub use resource::Quote;

use log::*;
use serde::Deserialize;

const BASE_URL: &str = "https://api.zenquotes.io/v1";

/// Wire format of one quotation in the service response. The service returns
/// an ordered list and only the first element is used.
///
#[derive(Deserialize)]
struct QuoteModel {
    q: String,
    a: String,
}

/// Responsible for asynchronous interaction with the quote service including
/// transformation of response data into explicitly-defined types.
///
pub struct ZenQuotes {
    base_url: String,
    http_client: reqwest::Client,
}

impl ZenQuotes {
    /// Returns a new instance pointed at the public service.
    ///
    pub fn new() -> ZenQuotes {
        ZenQuotes::with_base_url(BASE_URL)
    }

    /// Returns a new instance for the given base URL.
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be created. This should never happen
    /// in practice as reqwest::Client::builder().build() only fails on
    /// invalid configuration, which we don't use.
    pub(crate) fn with_base_url(base_url: &str) -> ZenQuotes {
        ZenQuotes {
            base_url: base_url.to_owned(),
            http_client: reqwest::Client::builder()
                .build()
                .expect("Failed to create HTTP client - this should never happen"),
        }
    }

    /// Returns one random quotation or an error. Exactly one request is made
    /// per call; there are no retries.
    ///
    pub async fn random(&self) -> Result<Quote, QuoteError> {
        debug!("Requesting a random quote...");
        let response = self
            .http_client
            .get(format!("{}/random", self.base_url))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!("Quote request failed with status {}", status);
            return Err(QuoteError::Status(status.as_u16()));
        }

        let response_bytes = response.bytes().await?;
        let quotes: Vec<QuoteModel> = serde_json::from_slice(&response_bytes).map_err(|e| {
            error!(
                "Failed to deserialize quote response: {}. Response body: {}",
                e,
                String::from_utf8_lossy(&response_bytes)
            );
            QuoteError::MalformedResponse(e.to_string())
        })?;

        let first = quotes.into_iter().next().ok_or_else(|| {
            QuoteError::MalformedResponse("response contained no quotes".to_string())
        })?;

        debug!("Received quote attributed to {}.", first.a);
        Ok(Quote {
            text: first.q,
            author: first.a,
        })
    }
}
