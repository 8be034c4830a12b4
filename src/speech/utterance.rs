//! A single request to speak

use super::voice::Voice;

/// One discrete request to speak `text` with an optional voice
///
/// Built fresh for every `speak` call and handed over to the engine.
/// Without a voice the engine falls back to its own default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    text: String,
    voice: Option<Voice>,
}

impl Utterance {
    pub fn new(text: impl Into<String>, voice: Option<Voice>) -> Self {
        Self {
            text: text.into(),
            voice,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn voice(&self) -> Option<&Voice> {
        self.voice.as_ref()
    }

    /// Split into text and voice for the engine
    pub fn into_parts(self) -> (String, Option<Voice>) {
        (self.text, self.voice)
    }
}
