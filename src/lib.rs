//! vocalize - speak generated words aloud
//!
//! Pronounces short strings through the host's text-to-speech engine.
//! The [`speech::SpeechDispatcher`] waits a bounded time for the engine
//! to publish its voices, picks the default English voice and makes sure
//! only the most recent request is ever heard.

pub mod config;
pub mod error;
pub mod speech;

pub use error::{Result, VocalizeError};
pub use speech::{SpeechDispatcher, SpeechHost, Utterance, Voice};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "vocalize";
