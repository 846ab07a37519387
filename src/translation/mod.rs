//! Translation client for the Google Translate web endpoint.

mod client;
mod error;
mod language;
mod model;
mod response;

pub use client::{GoogleTranslator, Translator};
pub use error::TranslateError;
pub use language::{
    AUTO, DEFAULT_DEST, LanguageKind, SUPPORTED_LANGUAGES, is_supported, normalize,
    resolve_destination, resolve_source,
};
pub use model::Translated;
