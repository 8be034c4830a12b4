//! Platform speech hosts

// Native TTS host using the tts crate (cross-platform)
pub mod native;

pub use native::TtsHost;
