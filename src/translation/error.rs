use thiserror::Error;

use super::language::LanguageKind;

/// Errors raised by a [`Translator`](super::Translator).
#[derive(Error, Debug)]
pub enum TranslateError {
    /// A source or destination language could not be resolved.
    #[error("invalid {kind} language: '{code}'")]
    InvalidLanguage { kind: LanguageKind, code: String },

    /// The request could not be sent or the body could not be read.
    #[error("request to translation backend failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("translation backend returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The backend answered with something other than the expected array.
    #[error("malformed response from translation backend: {0}")]
    MalformedResponse(String),

    /// A configured service host does not form a valid URL.
    #[error("invalid service url '{host}': {source}")]
    ServiceUrl {
        host: String,
        #[source]
        source: url::ParseError,
    },

    /// A configured proxy URL was rejected.
    #[error("invalid proxy '{proxy}': {source}")]
    Proxy {
        proxy: String,
        #[source]
        source: reqwest::Error,
    },
}

impl TranslateError {
    /// Returns `true` for errors caused by an unrecognised language.
    pub const fn is_invalid_language(&self) -> bool {
        matches!(self, Self::InvalidLanguage { .. })
    }
}
