//! Application state management module.
//!
//! This module contains the core state management for the application:
//! - The explicit refresh phase machine (`Phase`)
//! - The currently displayed quote, share links, and background
//! - The request sequence fence guarding against stale fetch completions

use crate::app::NetworkEventSender;
use crate::events::network::Event as NetworkEvent;
use crate::logger::LogBuffer;
use crate::share::{self, ShareLink, ShareTarget};
use crate::ui::theme::{ColorSpec, Theme, BACKGROUND_PALETTE};
use crate::zenquotes::{Quote, QuoteError};
use chrono::{DateTime, Local};
use log::*;

/// Fixed label shown in the quote region while a fetch is in flight.
///
pub const LOADING_MESSAGE: &str = "Loading quote...";

/// Fixed message shown in the quote region after a failed fetch.
///
pub const FAILURE_MESSAGE: &str = "Could not load the quote. Try again.";

/// Specify the refresh phases. The refresh control is enabled in every
/// phase except `Loading`.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Specify the currently applied page background.
///
#[derive(Clone, Debug, PartialEq)]
pub enum Background {
    Color(ColorSpec),
    Photo { url: String },
}

/// Payload of a successful refresh: the parsed quote and the background
/// resolved for it.
///
#[derive(Debug)]
pub struct Refresh {
    pub quote: Quote,
    pub background: Background,
}

/// Single owner of everything the interface displays.
///
pub struct State {
    phase: Phase,
    latest_seq: u64,
    quote: Option<Quote>,
    share_links: Vec<ShareLink>,
    background: Background,
    fetched_at: Option<DateTime<Local>>,
    theme: Theme,
    spinner_index: usize,
    show_log: bool,
    log_buffer: LogBuffer,
    net_sender: NetworkEventSender,
}

impl State {
    /// Return new instance with the given network event sender, base theme,
    /// and captured-log buffer.
    ///
    pub fn new(net_sender: NetworkEventSender, theme: Theme, log_buffer: LogBuffer) -> State {
        State {
            phase: Phase::Idle,
            latest_seq: 0,
            quote: None,
            share_links: vec![],
            background: Background::Color(BACKGROUND_PALETTE[0]),
            fetched_at: None,
            theme,
            spinner_index: 0,
            show_log: false,
            log_buffer,
            net_sender,
        }
    }

    /// Send a network event for asynchronous handling.
    ///
    fn dispatch(&self, event: NetworkEvent) {
        if let Err(e) = self.net_sender.send(event) {
            error!("Failed to dispatch network event: {}", e);
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The refresh control is disabled only while a fetch is in flight.
    ///
    pub fn refresh_enabled(&self) -> bool {
        self.phase != Phase::Loading
    }

    /// Enter the loading phase and dispatch one fetch, tagged with the next
    /// request sequence number. Requests made while already loading are
    /// dropped; the in-flight fetch proceeds undisturbed.
    ///
    pub fn request_refresh(&mut self) {
        if !self.refresh_enabled() {
            debug!("Ignoring refresh request while a fetch is in flight.");
            return;
        }
        self.latest_seq += 1;
        self.phase = Phase::Loading;
        debug!("Dispatching quote fetch {}...", self.latest_seq);
        self.dispatch(NetworkEvent::FetchQuote {
            seq: self.latest_seq,
        });
    }

    /// Apply the outcome of fetch `seq`. Completions that are stale (a newer
    /// fetch has been dispatched) or duplicated (the phase already left
    /// Loading) are discarded, so the latest dispatched request always wins
    /// and re-enabling is idempotent.
    ///
    /// On success the display text, share links, and background are updated
    /// in that order before the control is re-enabled. On failure the quote
    /// region shows the fixed failure message while share links and
    /// background keep their previous values.
    ///
    pub fn complete_refresh(&mut self, seq: u64, outcome: Result<Refresh, QuoteError>) {
        if self.phase != Phase::Loading || seq != self.latest_seq {
            debug!(
                "Discarding stale completion for fetch {} (latest is {}).",
                seq, self.latest_seq
            );
            return;
        }
        match outcome {
            Ok(Refresh { quote, background }) => {
                let share_links = share::derive_share_links(&quote.text, &quote.author);
                self.quote = Some(quote);
                self.share_links = share_links;
                self.background = background;
                self.fetched_at = Some(Local::now());
                self.phase = Phase::Loaded;
                info!("Displayed a new quote.");
            }
            Err(e) => {
                error!("Failed to refresh quote: {}", e);
                self.quote = None;
                self.phase = Phase::Failed;
            }
        }
    }

    /// Return the text for the quote region. Exactly one of the loading
    /// label, the quoted text, or the failure message is visible at a time.
    ///
    pub fn quote_text(&self) -> String {
        match self.phase {
            Phase::Idle => String::new(),
            Phase::Loading => LOADING_MESSAGE.to_string(),
            Phase::Failed => FAILURE_MESSAGE.to_string(),
            Phase::Loaded => match &self.quote {
                Some(quote) => format!("\"{}\"", quote.text),
                None => String::new(),
            },
        }
    }

    /// Return the text for the author region; empty outside of Loaded.
    ///
    pub fn author_text(&self) -> String {
        match (self.phase, &self.quote) {
            (Phase::Loaded, Some(quote)) => format!("- {}", quote.author),
            _ => String::new(),
        }
    }

    pub fn share_links(&self) -> &[ShareLink] {
        &self.share_links
    }

    /// Return the share URL for the platform, once one has been derived.
    ///
    pub fn share_url(&self, target: ShareTarget) -> Option<&str> {
        self.share_links
            .iter()
            .find(|link| link.target == target)
            .map(|link| link.url.as_str())
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    /// Return the active color scheme: the photo background forces the dark
    /// light-on-dark scheme, otherwise the configured base theme applies.
    ///
    pub fn scheme(&self) -> Theme {
        match self.background {
            Background::Photo { .. } => Theme::dark(),
            Background::Color(_) => self.theme.clone(),
        }
    }

    pub fn fetched_at(&self) -> Option<DateTime<Local>> {
        self.fetched_at
    }

    pub fn spinner_index(&self) -> usize {
        self.spinner_index
    }

    pub fn advance_spinner_index(&mut self) {
        self.spinner_index = (self.spinner_index + 1) % crate::ui::SPINNER_FRAME_COUNT;
    }

    pub fn show_log(&self) -> bool {
        self.show_log
    }

    pub fn toggle_log(&mut self) {
        self.show_log = !self.show_log;
    }

    /// Snapshot the captured log entries for the log pane.
    ///
    pub fn log_entries(&self) -> Vec<String> {
        self.log_buffer
            .lock()
            .map(|entries| entries.iter().cloned().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};
    use std::collections::VecDeque;
    use std::sync::mpsc::Receiver;
    use std::sync::{Arc, Mutex};

    fn test_state() -> (State, Receiver<NetworkEvent>) {
        let (tx, rx) = std::sync::mpsc::channel();
        let buffer = Arc::new(Mutex::new(VecDeque::new()));
        (State::new(tx, Theme::light(), buffer), rx)
    }

    fn refresh_with(quote: Quote) -> Refresh {
        Refresh {
            quote,
            background: Background::Color(BACKGROUND_PALETTE[1]),
        }
    }

    #[test]
    fn initial_state_is_idle_and_enabled() {
        let (state, _rx) = test_state();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.refresh_enabled());
        assert_eq!(state.quote_text(), "");
        assert_eq!(state.author_text(), "");
        assert!(state.share_links().is_empty());
    }

    #[test]
    fn request_refresh_disables_control_and_dispatches_once() {
        let (mut state, rx) = test_state();
        state.request_refresh();

        assert_eq!(state.phase(), Phase::Loading);
        assert!(!state.refresh_enabled());
        assert_eq!(state.quote_text(), LOADING_MESSAGE);
        assert_eq!(state.author_text(), "");
        assert_eq!(rx.try_recv().unwrap(), NetworkEvent::FetchQuote { seq: 1 });
    }

    #[test]
    fn requests_while_loading_are_dropped() {
        let (mut state, rx) = test_state();
        state.request_refresh();
        state.request_refresh();

        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn successful_completion_populates_regions_and_reenables() {
        let (mut state, _rx) = test_state();
        state.request_refresh();
        state.complete_refresh(
            1,
            Ok(refresh_with(Quote {
                text: "Be yourself.".to_string(),
                author: "Oscar Wilde".to_string(),
            })),
        );

        assert_eq!(state.phase(), Phase::Loaded);
        assert!(state.refresh_enabled());
        assert_eq!(state.quote_text(), "\"Be yourself.\"");
        assert_eq!(state.author_text(), "- Oscar Wilde");
        assert_eq!(state.share_links().len(), 2);
        assert!(state
            .share_url(ShareTarget::Twitter)
            .unwrap()
            .contains("%22Be%20yourself.%22%20-%20Oscar%20Wilde"));
        assert_eq!(
            state.background(),
            &Background::Color(BACKGROUND_PALETTE[1])
        );
        assert!(state.fetched_at().is_some());
    }

    #[test]
    fn failed_completion_shows_failure_message_and_reenables() {
        let (mut state, _rx) = test_state();
        state.request_refresh();
        state.complete_refresh(1, Err(QuoteError::Status(500)));

        assert_eq!(state.phase(), Phase::Failed);
        assert!(state.refresh_enabled());
        assert_eq!(state.quote_text(), FAILURE_MESSAGE);
        assert_eq!(state.author_text(), "");
    }

    #[test]
    fn failure_preserves_previous_share_links_and_background() {
        let (mut state, _rx) = test_state();
        state.request_refresh();
        state.complete_refresh(1, Ok(refresh_with(Faker.fake())));
        let links = state.share_links().to_vec();
        let background = state.background().clone();

        state.request_refresh();
        state.complete_refresh(2, Err(QuoteError::MalformedResponse("empty".to_string())));

        assert_eq!(state.share_links(), links.as_slice());
        assert_eq!(state.background(), &background);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let (mut state, _rx) = test_state();
        state.request_refresh();
        state.complete_refresh(1, Ok(refresh_with(Faker.fake())));
        state.request_refresh();

        // A late response from the first fetch arrives after the second
        // was dispatched; the display must stay in the loading phase.
        state.complete_refresh(1, Ok(refresh_with(Faker.fake())));
        assert_eq!(state.phase(), Phase::Loading);
        assert_eq!(state.quote_text(), LOADING_MESSAGE);

        let winner: Quote = Faker.fake();
        state.complete_refresh(2, Ok(refresh_with(winner.clone())));
        assert_eq!(state.phase(), Phase::Loaded);
        assert_eq!(state.quote_text(), format!("\"{}\"", winner.text));
    }

    #[test]
    fn duplicate_completion_is_a_noop() {
        let (mut state, _rx) = test_state();
        state.request_refresh();
        let quote: Quote = Faker.fake();
        state.complete_refresh(1, Ok(refresh_with(quote.clone())));
        state.complete_refresh(1, Err(QuoteError::Status(500)));

        assert_eq!(state.phase(), Phase::Loaded);
        assert_eq!(state.quote_text(), format!("\"{}\"", quote.text));
    }

    #[test]
    fn photo_background_switches_to_dark_scheme() {
        let (mut state, _rx) = test_state();
        state.request_refresh();
        state.complete_refresh(
            1,
            Ok(Refresh {
                quote: Faker.fake(),
                background: Background::Photo {
                    url: "https://images.example/full.jpg".to_string(),
                },
            }),
        );

        assert_eq!(state.scheme().name, Theme::dark().name);
    }

    #[test]
    fn spinner_index_wraps_around() {
        let (mut state, _rx) = test_state();
        for _ in 0..crate::ui::SPINNER_FRAME_COUNT {
            state.advance_spinner_index();
        }
        assert_eq!(state.spinner_index(), 0);
    }
}
