//! Speech dispatcher
//!
//! Turns `speak(text)` into exactly one utterance on the host engine.
//! Engines often publish their voice list lazily, some time after
//! startup, and some never announce it at all. The dispatcher therefore
//! races the engine's voices-changed notification against a short timer
//! before settling on a voice, and falls back to the engine default when
//! nothing suitable shows up.

use std::cell::{Cell, RefCell};
use std::time::Duration;

use log::debug;

use super::host::SpeechHost;
use super::text::normalize_text;
use super::utterance::Utterance;
use super::voice::{find_default_voice, Voice};

/// Default language tag prefix for voice selection
pub const DEFAULT_LOCALE_PREFIX: &str = "en-";

/// Default upper bound on waiting for the voice list
pub const DEFAULT_VOICE_WAIT: Duration = Duration::from_millis(100);

/// Tunables for voice resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOptions {
    /// Only default voices whose language starts with this are used
    pub locale_prefix: String,

    /// How long to wait for the voice list before giving up
    pub voice_wait: Duration,
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self {
            locale_prefix: DEFAULT_LOCALE_PREFIX.to_string(),
            voice_wait: DEFAULT_VOICE_WAIT,
        }
    }
}

/// What the dispatcher is doing right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatcherState {
    /// Nothing resolving, engine silent
    Idle,
    /// At least one `speak` call is waiting for a voice
    ResolvingVoice,
    /// The engine is playing an utterance
    Speaking,
}

/// Speaks text through a [`SpeechHost`], one utterance at a time
///
/// The most recent `speak` call always wins: starting a new call silences
/// the engine, and an older call that is still resolving its voice gives
/// up instead of submitting. If the newer call is dropped before it
/// submits, the older one speaks after all.
pub struct SpeechDispatcher<H> {
    host: H,
    options: DispatchOptions,

    /// Last ticket handed out
    generation: Cell<u64>,

    /// Tickets of `speak` calls currently resolving a voice
    resolving: RefCell<Vec<u64>>,

    /// Newest ticket that reached the engine
    submitted: Cell<u64>,
}

impl<H: SpeechHost> SpeechDispatcher<H> {
    /// Create a dispatcher with default options
    pub fn new(host: H) -> Self {
        Self::with_options(host, DispatchOptions::default())
    }

    pub fn with_options(host: H, options: DispatchOptions) -> Self {
        Self {
            host,
            options,
            generation: Cell::new(0),
            resolving: RefCell::new(Vec::new()),
            submitted: Cell::new(0),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn options(&self) -> &DispatchOptions {
        &self.options
    }

    pub fn state(&self) -> DispatcherState {
        if !self.resolving.borrow().is_empty() {
            DispatcherState::ResolvingVoice
        } else if self.host.is_supported() && self.host.is_speaking() {
            DispatcherState::Speaking
        } else {
            DispatcherState::Idle
        }
    }

    /// Speak `text` aloud
    ///
    /// Does nothing on hosts without speech synthesis. Markup in `text`
    /// is stripped so only the visible words are spoken.
    pub async fn speak(&self, text: &str) {
        if !self.host.is_supported() {
            debug!("Speech synthesis unavailable, not speaking");
            return;
        }

        let ticket = self.generation.get() + 1;
        self.generation.set(ticket);

        if !self.resolving.borrow().is_empty() || self.host.is_speaking() {
            debug!("Canceling current speech");
            self.host.cancel_current();
        }

        let guard = TicketGuard::enter(&self.resolving, ticket);
        let voice = self.resolve_voice().await;

        if self.is_superseded(ticket) {
            debug!("Dropping superseded request");
            return;
        }
        drop(guard);

        let utterance = Utterance::new(normalize_text(text), voice);
        debug!(
            "Submitting {:?} with voice {:?}",
            utterance.text(),
            utterance.voice().map(|v| v.name.as_str())
        );
        self.submitted.set(ticket);
        self.host.submit(utterance);
    }

    /// Has a newer call submitted, or is one still on its way?
    fn is_superseded(&self, ticket: u64) -> bool {
        self.submitted.get() > ticket || self.resolving.borrow().iter().any(|&t| t > ticket)
    }

    /// Find a voice, waiting once for a late voice list
    async fn resolve_voice(&self) -> Option<Voice> {
        if let Some(voice) = self.query_voice() {
            return Some(voice);
        }

        debug!(
            "No {}* default voice yet, waiting up to {:?}",
            self.options.locale_prefix, self.options.voice_wait
        );
        let changed = self.host.voices_changed();
        let deadline = self.host.delay(self.options.voice_wait);
        tokio::select! {
            _ = changed => debug!("Voice list changed"),
            _ = deadline => debug!("Voice wait timed out"),
        }

        let voice = self.query_voice();
        if voice.is_none() {
            debug!("No matching voice, using engine default");
        }
        voice
    }

    fn query_voice(&self) -> Option<Voice> {
        let voices = self.host.list_voices();
        find_default_voice(&voices, &self.options.locale_prefix).cloned()
    }
}

/// Keeps a ticket in the resolving set until dropped, including when the
/// `speak` future is abandoned mid-resolution
struct TicketGuard<'a> {
    tickets: &'a RefCell<Vec<u64>>,
    ticket: u64,
}

impl<'a> TicketGuard<'a> {
    fn enter(tickets: &'a RefCell<Vec<u64>>, ticket: u64) -> Self {
        tickets.borrow_mut().push(ticket);
        Self { tickets, ticket }
    }
}

impl Drop for TicketGuard<'_> {
    fn drop(&mut self) {
        let ticket = self.ticket;
        self.tickets.borrow_mut().retain(|&t| t != ticket);
    }
}
