use crate::state::{Background, Refresh, State};
use crate::ui::theme;
use crate::unsplash::Unsplash;
use crate::zenquotes::ZenQuotes;
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    FetchQuote { seq: u64 },
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    quotes: ZenQuotes,
    unsplash: Option<Unsplash>,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state and the service clients
    /// resolved at startup.
    ///
    pub fn new(
        state: &'a Arc<Mutex<State>>,
        quotes: ZenQuotes,
        unsplash: Option<Unsplash>,
    ) -> Self {
        Handler {
            state,
            quotes,
            unsplash,
        }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::FetchQuote { seq } => self.fetch_quote(seq).await,
        }
        Ok(())
    }

    /// Fetch one quote and apply the outcome to state. Fetch errors are
    /// converted into the failed display phase here and never propagate.
    ///
    async fn fetch_quote(&mut self, seq: u64) {
        info!("Fetching a new quote...");
        let outcome = match self.quotes.random().await {
            Ok(quote) => {
                info!("Received quote attributed to {}.", quote.author);
                let background = self.resolve_background().await;
                Ok(Refresh { quote, background })
            }
            Err(e) => Err(e),
        };

        let mut state = self.state.lock().await;
        state.complete_refresh(seq, outcome);
    }

    /// Resolve the background for this refresh: the photo path when the
    /// capability is present, the flat-color path otherwise or after any
    /// photo failure. The two paths are mutually exclusive per refresh.
    ///
    async fn resolve_background(&self) -> Background {
        if let Some(unsplash) = &self.unsplash {
            match unsplash.random_photo().await {
                Ok(photo) => {
                    info!("Applying photo background.");
                    return Background::Photo {
                        url: photo.full_url,
                    };
                }
                Err(e) => warn!("Falling back to color background: {}", e),
            }
        }
        Background::Color(theme::random_background())
    }
}
