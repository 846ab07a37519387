use std::fmt;

/// The outcome of one translation request.
#[derive(Debug, Clone, PartialEq)]
pub struct Translated {
    /// Source language, as detected by the backend or given by the caller.
    pub src: String,
    /// Destination language.
    pub dest: String,
    /// The text that was translated, verbatim.
    pub origin: String,
    /// The translated text.
    pub text: String,
    /// Phonetic transliteration of the translation, when available.
    pub pronunciation: Option<String>,
    /// Detection confidence reported by the backend (0.0 when unknown).
    pub confidence: f64,
}

impl fmt::Display for Translated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Translated(src={}, confidence={}, dest={}, text={}, pronunciation={})",
            self.src,
            self.confidence,
            self.dest,
            self.text,
            self.pronunciation.as_deref().unwrap_or_default()
        )
    }
}
