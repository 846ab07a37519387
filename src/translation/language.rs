//! Language codes understood by the translation backend.

use crate::translation::TranslateError;

/// Source language value that asks the backend to detect the language.
pub const AUTO: &str = "auto";

/// Destination used when the caller does not name one.
pub const DEFAULT_DEST: &str = "en";

/// Supported language codes and their names.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("af", "afrikaans"),
    ("sq", "albanian"),
    ("am", "amharic"),
    ("ar", "arabic"),
    ("hy", "armenian"),
    ("az", "azerbaijani"),
    ("eu", "basque"),
    ("be", "belarusian"),
    ("bn", "bengali"),
    ("bs", "bosnian"),
    ("bg", "bulgarian"),
    ("ca", "catalan"),
    ("ceb", "cebuano"),
    ("ny", "chichewa"),
    ("zh-cn", "chinese (simplified)"),
    ("zh-tw", "chinese (traditional)"),
    ("co", "corsican"),
    ("hr", "croatian"),
    ("cs", "czech"),
    ("da", "danish"),
    ("nl", "dutch"),
    ("en", "english"),
    ("eo", "esperanto"),
    ("et", "estonian"),
    ("tl", "filipino"),
    ("fi", "finnish"),
    ("fr", "french"),
    ("fy", "frisian"),
    ("gl", "galician"),
    ("ka", "georgian"),
    ("de", "german"),
    ("el", "greek"),
    ("gu", "gujarati"),
    ("ht", "haitian creole"),
    ("ha", "hausa"),
    ("haw", "hawaiian"),
    ("iw", "hebrew"),
    ("he", "hebrew"),
    ("hi", "hindi"),
    ("hmn", "hmong"),
    ("hu", "hungarian"),
    ("is", "icelandic"),
    ("ig", "igbo"),
    ("id", "indonesian"),
    ("ga", "irish"),
    ("it", "italian"),
    ("ja", "japanese"),
    ("jw", "javanese"),
    ("kn", "kannada"),
    ("kk", "kazakh"),
    ("km", "khmer"),
    ("ko", "korean"),
    ("ku", "kurdish (kurmanji)"),
    ("ky", "kyrgyz"),
    ("lo", "lao"),
    ("la", "latin"),
    ("lv", "latvian"),
    ("lt", "lithuanian"),
    ("lb", "luxembourgish"),
    ("mk", "macedonian"),
    ("mg", "malagasy"),
    ("ms", "malay"),
    ("ml", "malayalam"),
    ("mt", "maltese"),
    ("mi", "maori"),
    ("mr", "marathi"),
    ("mn", "mongolian"),
    ("my", "myanmar (burmese)"),
    ("ne", "nepali"),
    ("no", "norwegian"),
    ("or", "odia"),
    ("ps", "pashto"),
    ("fa", "persian"),
    ("pl", "polish"),
    ("pt", "portuguese"),
    ("pa", "punjabi"),
    ("ro", "romanian"),
    ("ru", "russian"),
    ("sm", "samoan"),
    ("gd", "scots gaelic"),
    ("sr", "serbian"),
    ("st", "sesotho"),
    ("sn", "shona"),
    ("sd", "sindhi"),
    ("si", "sinhala"),
    ("sk", "slovak"),
    ("sl", "slovenian"),
    ("so", "somali"),
    ("es", "spanish"),
    ("su", "sundanese"),
    ("sw", "swahili"),
    ("sv", "swedish"),
    ("tg", "tajik"),
    ("ta", "tamil"),
    ("te", "telugu"),
    ("th", "thai"),
    ("tr", "turkish"),
    ("uk", "ukrainian"),
    ("ur", "urdu"),
    ("ug", "uyghur"),
    ("uz", "uzbek"),
    ("vi", "vietnamese"),
    ("cy", "welsh"),
    ("xh", "xhosa"),
    ("yi", "yiddish"),
    ("yo", "yoruba"),
    ("zu", "zulu"),
];

/// Codes the backend rejects but which have a well-known replacement.
const SPECIAL_CASES: &[(&str, &str)] = &[("ee", "et")];

/// Which side of a request a language code was given for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageKind {
    Source,
    Destination,
}

impl std::fmt::Display for LanguageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Destination => f.write_str("destination"),
        }
    }
}

/// Strips any region suffix (`es_MX` -> `es`) and lowercases.
pub fn normalize(code: &str) -> String {
    code.split('_').next().unwrap_or_default().to_lowercase()
}

/// Returns `true` if `code` is a supported language code.
pub fn is_supported(code: &str) -> bool {
    SUPPORTED_LANGUAGES.iter().any(|(c, _)| *c == code)
}

/// Resolves a user-supplied language to a backend code.
///
/// Accepts a supported code, a special-case alias or a language name, in
/// that order. `auto` is only accepted for the source side.
pub fn resolve(code: &str, kind: LanguageKind) -> Result<String, TranslateError> {
    let normalized = normalize(code);

    if kind == LanguageKind::Source && normalized == AUTO {
        return Ok(normalized);
    }
    if is_supported(&normalized) {
        return Ok(normalized);
    }
    if let Some((_, replacement)) = SPECIAL_CASES.iter().find(|(alias, _)| *alias == normalized) {
        return Ok((*replacement).to_string());
    }
    if let Some((found, _)) = SUPPORTED_LANGUAGES
        .iter()
        .find(|(_, name)| *name == normalized)
    {
        return Ok((*found).to_string());
    }

    Err(TranslateError::InvalidLanguage {
        kind,
        code: code.to_string(),
    })
}

/// Resolves the optional source language, defaulting to detection.
pub fn resolve_source(src: Option<&str>) -> Result<String, TranslateError> {
    src.map_or_else(
        || Ok(AUTO.to_string()),
        |code| resolve(code, LanguageKind::Source),
    )
}

/// Resolves the optional destination language, defaulting to English.
pub fn resolve_destination(dest: Option<&str>) -> Result<String, TranslateError> {
    resolve(dest.unwrap_or(DEFAULT_DEST), LanguageKind::Destination)
}
