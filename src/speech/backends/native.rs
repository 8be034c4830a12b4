//! Native TTS host using the tts crate
//!
//! The `tts` crate provides a unified interface to:
//! - Speech Dispatcher on Linux
//! - AVFoundation on macOS/iOS
//! - SAPI/WinRT on Windows
//!
//! None of these report voice list changes, so `voices_changed` never
//! fires here and the dispatcher's timer always decides.

use std::cell::RefCell;
use std::time::Duration;

use futures::future;
use log::{debug, error, warn};
use tts::Tts as TtsCrate;

use crate::speech::{Notification, SpeechHost, Utterance, Voice};
use crate::{Result, VocalizeError};

/// Speech host backed by the platform TTS engine
///
/// `delay` is a tokio timer, so `speak` must be driven from inside a
/// tokio runtime with the time driver enabled. Any other executor panics
/// on the first voice wait.
pub struct TtsHost {
    /// The tts crate's TTS instance, absent when no engine could start
    tts: Option<RefCell<TtsCrate>>,
}

impl TtsHost {
    /// Create a host, failing if no TTS engine is available
    pub fn try_new() -> Result<Self> {
        debug!("Creating native TTS host");

        let tts = TtsCrate::default()
            .map_err(|e| VocalizeError::Speech(format!("Failed to initialize TTS: {}", e)))?;

        debug!("Native TTS host created successfully");

        Ok(Self {
            tts: Some(RefCell::new(tts)),
        })
    }

    /// Create a host, degrading to "unsupported" if no engine is available
    pub fn new() -> Self {
        Self::try_new().unwrap_or_else(|e| {
            warn!("{}; speech disabled", e);
            Self::unsupported()
        })
    }

    /// A host without speech synthesis
    pub fn unsupported() -> Self {
        Self { tts: None }
    }

    /// Convert an engine voice, marking the engine's current voice as default
    fn convert_voice(voice: &tts::Voice, current: Option<&str>) -> Voice {
        let id = voice.id();
        let is_default = current == Some(id.as_str());
        Voice {
            name: voice.name(),
            language: voice.language().to_string(),
            is_default,
            id,
        }
    }
}

impl Default for TtsHost {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeechHost for TtsHost {
    fn is_supported(&self) -> bool {
        self.tts.is_some()
    }

    fn is_speaking(&self) -> bool {
        let Some(tts) = &self.tts else {
            return false;
        };
        let tts = tts.borrow();
        if !tts.supported_features().is_speaking {
            return false;
        }
        tts.is_speaking().unwrap_or_else(|e| {
            warn!("Failed to query speaking state: {}", e);
            false
        })
    }

    fn cancel_current(&self) {
        let Some(tts) = &self.tts else {
            return;
        };
        debug!("Canceling speech");
        if let Err(e) = tts.borrow_mut().stop() {
            error!("Failed to cancel speech: {}", e);
        }
    }

    fn list_voices(&self) -> Vec<Voice> {
        let Some(tts) = &self.tts else {
            return Vec::new();
        };
        let tts = tts.borrow();
        let features = tts.supported_features();
        if !features.voice {
            return Vec::new();
        }

        let current = if features.get_voice {
            tts.voice().ok().flatten().map(|v| v.id())
        } else {
            None
        };

        match tts.voices() {
            Ok(voices) => voices
                .iter()
                .map(|v| Self::convert_voice(v, current.as_deref()))
                .collect(),
            Err(e) => {
                warn!("Failed to get voices: {}", e);
                Vec::new()
            }
        }
    }

    fn voices_changed(&self) -> Notification {
        Box::pin(future::pending::<()>())
    }

    fn submit(&self, utterance: Utterance) {
        let Some(tts) = &self.tts else {
            return;
        };
        let (text, voice) = utterance.into_parts();
        if text.is_empty() {
            return;
        }

        let mut tts = tts.borrow_mut();
        if let Some(voice) = voice {
            select_voice(&mut tts, &voice);
        }

        debug!("Speaking: {}", text);
        if let Err(e) = tts.speak(text, false) {
            error!("Failed to speak: {}", e);
        }
    }

    /// Requires a tokio runtime with time enabled
    fn delay(&self, duration: Duration) -> Notification {
        Box::pin(tokio::time::sleep(duration))
    }
}

/// Switch the engine to the voice with the same id
fn select_voice(tts: &mut TtsCrate, voice: &Voice) {
    let voices = match tts.voices() {
        Ok(voices) => voices,
        Err(e) => {
            warn!("Failed to get voices: {}", e);
            return;
        }
    };

    match voices.iter().find(|v| v.id() == voice.id) {
        Some(engine_voice) => {
            debug!("Selecting voice: {}", voice.name);
            if let Err(e) = tts.set_voice(engine_voice) {
                warn!("Failed to set voice: {}", e);
            }
        }
        None => warn!("Voice {} is no longer available", voice.id),
    }
}
