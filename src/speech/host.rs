//! Capabilities the dispatcher needs from the host speech engine
//!
//! The engine is a process-wide singleton on most platforms. Instead of
//! reaching for it globally, the dispatcher is handed a [`SpeechHost`],
//! which lets tests substitute a deterministic fake.

use std::time::Duration;

use futures::future::LocalBoxFuture;

use super::utterance::Utterance;
use super::voice::Voice;

/// A one-shot notification
///
/// Resolves at most once. Dropping it before it fires detaches whatever
/// listener backs it.
pub type Notification = LocalBoxFuture<'static, ()>;

/// Speech engine capabilities supplied by the host
///
/// All methods take `&self`: the dispatcher runs on a single thread and
/// hosts use interior mutability for engine calls that mutate state.
pub trait SpeechHost {
    /// Is speech synthesis available at all?
    fn is_supported(&self) -> bool;

    /// Is the engine currently speaking?
    fn is_speaking(&self) -> bool;

    /// Silence the utterance in progress, if any
    fn cancel_current(&self);

    /// Voices the engine has published so far
    ///
    /// May be empty while the engine is still loading.
    fn list_voices(&self) -> Vec<Voice>;

    /// Fires once the next time the engine's voice list changes
    fn voices_changed(&self) -> Notification;

    /// Hand an utterance over to the engine
    fn submit(&self, utterance: Utterance);

    /// Fires once after `duration` has elapsed
    fn delay(&self, duration: Duration) -> Notification;
}

impl<H: SpeechHost + ?Sized> SpeechHost for &H {
    fn is_supported(&self) -> bool {
        (**self).is_supported()
    }

    fn is_speaking(&self) -> bool {
        (**self).is_speaking()
    }

    fn cancel_current(&self) {
        (**self).cancel_current()
    }

    fn list_voices(&self) -> Vec<Voice> {
        (**self).list_voices()
    }

    fn voices_changed(&self) -> Notification {
        (**self).voices_changed()
    }

    fn submit(&self, utterance: Utterance) {
        (**self).submit(utterance)
    }

    fn delay(&self, duration: Duration) -> Notification {
        (**self).delay(duration)
    }
}
