use crate::share::ShareTarget;
use crate::state::State;
use anyhow::Result;
use clipboard::{ClipboardContext, ClipboardProvider};
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            if event::poll(tick_rate).unwrap() {
                if let CrosstermEvent::Key(key) = event::read().unwrap() {
                    if tx_clone.send(Event::Input(key)).is_err() {
                        break;
                    }
                }
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(event) if event.kind == KeyEventKind::Press => match event {
                KeyEvent {
                    code: KeyCode::Char('c'),
                    modifiers: KeyModifiers::CONTROL,
                    ..
                } => {
                    debug!("Processing exit terminal event '{:?}'...", event);
                    return Ok(false);
                }
                KeyEvent {
                    code: KeyCode::Char('q'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    debug!("Processing exit terminal event '{:?}'...", event);
                    return Ok(false);
                }
                KeyEvent {
                    code: KeyCode::Char('r'),
                    modifiers: KeyModifiers::NONE,
                    ..
                }
                | KeyEvent {
                    code: KeyCode::Enter,
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    debug!("Processing refresh terminal event '{:?}'...", event);
                    state.request_refresh();
                }
                KeyEvent {
                    code: KeyCode::Char('t'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    debug!("Processing copy tweet link event '{:?}'...", event);
                    copy_share_url(state, ShareTarget::Twitter);
                }
                KeyEvent {
                    code: KeyCode::Char('w'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    debug!("Processing copy WhatsApp link event '{:?}'...", event);
                    copy_share_url(state, ShareTarget::WhatsApp);
                }
                KeyEvent {
                    code: KeyCode::Char('l'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    debug!("Processing toggle log pane event '{:?}'...", event);
                    state.toggle_log();
                }
                _ => {
                    debug!("Skipping processing of terminal event '{:?}'...", event);
                }
            },
            Event::Input(_) => (),
            Event::Tick => {
                state.advance_spinner_index();
            }
        }
        Ok(true)
    }
}

/// Copy the share URL for the platform to the system clipboard, once one
/// has been derived.
///
fn copy_share_url(state: &State, target: ShareTarget) {
    match state.share_url(target) {
        Some(url) => match ClipboardContext::new() {
            Ok(mut ctx) => match ctx.set_contents(url.to_string()) {
                Ok(_) => {
                    info!("{} share link copied to clipboard", target.label());
                }
                Err(e) => {
                    warn!("Failed to copy to clipboard: {}", e);
                }
            },
            Err(e) => {
                warn!("Failed to initialize clipboard: {}", e);
            }
        },
        None => debug!("No {} share link to copy yet.", target.label()),
    }
}
