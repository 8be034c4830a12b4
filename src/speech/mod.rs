//! Speech dispatch system

pub mod backends;
pub mod dispatcher;
pub mod host;
pub mod text;
pub mod utterance;
pub mod voice;

pub use dispatcher::{DispatchOptions, DispatcherState, SpeechDispatcher};
pub use host::{Notification, SpeechHost};
pub use text::normalize_text;
pub use utterance::Utterance;
pub use voice::{find_default_voice, Voice};
