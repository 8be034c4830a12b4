//! Voice descriptors published by the speech engine

/// A synthetic speaking profile offered by the host engine
///
/// Voices are enumerated by the engine and only read by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    /// Engine-specific identifier
    pub id: String,

    /// Human readable name
    pub name: String,

    /// BCP 47 language tag, e.g. "en-US"
    pub language: String,

    /// Whether the platform marks this voice as its default
    pub is_default: bool,
}

impl Voice {
    /// Create a new voice descriptor
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        language: impl Into<String>,
        is_default: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            language: language.into(),
            is_default,
        }
    }

    /// Does this voice speak a language under the given tag prefix?
    pub fn matches_locale(&self, prefix: &str) -> bool {
        self.language.starts_with(prefix)
    }
}

/// Pick the first platform default voice whose language starts with `prefix`
pub fn find_default_voice<'a>(voices: &'a [Voice], prefix: &str) -> Option<&'a Voice> {
    voices
        .iter()
        .find(|voice| voice.is_default && voice.matches_locale(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voices() -> Vec<Voice> {
        vec![
            Voice::new("fr", "Amelie", "fr-FR", true),
            Voice::new("gb", "Daniel", "en-GB", false),
            Voice::new("us", "Samantha", "en-US", true),
            Voice::new("au", "Karen", "en-AU", true),
        ]
    }

    #[test]
    fn test_first_default_english_voice() {
        let voices = voices();
        let voice = find_default_voice(&voices, "en-").unwrap();
        assert_eq!(voice.id, "us");
    }

    #[test]
    fn test_non_default_voices_skipped() {
        let voices = vec![Voice::new("gb", "Daniel", "en-GB", false)];
        assert!(find_default_voice(&voices, "en-").is_none());
    }

    #[test]
    fn test_bare_language_tag_does_not_match() {
        // "en" has no region, so it is not under "en-"
        let voices = vec![Voice::new("en", "Plain", "en", true)];
        assert!(find_default_voice(&voices, "en-").is_none());
    }

    #[test]
    fn test_empty_list() {
        assert!(find_default_voice(&[], "en-").is_none());
    }
}
