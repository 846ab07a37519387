//! Parser for the backend's nested-array response body.
//!
//! The body is a positional JSON array rather than an object:
//!
//! ```text
//! [
//!   [["hola","hello",null,null,10], [null,null,"ola","heˈlō"]],  // sentences + transliteration
//!   null,
//!   "en",                                                        // detected source
//!   ...,
//!   0.98,                                                        // confidence
//!   ...,
//!   [["en"],null,[0.98],["en"]]                                  // language detection block
//! ]
//! ```

use serde_json::Value;

use super::error::TranslateError;
use super::language::AUTO;
use super::model::Translated;

/// Destinations for which a missing transliteration falls back to the
/// translated text instead of the original.
const EXCLUDES: &[&str] = &["en", "ca", "fr"];

/// Builds a [`Translated`] from a raw response body.
///
/// `src` and `dest` are the resolved languages that were sent in the request.
pub fn parse_translation(
    body: &str,
    origin: &str,
    src: &str,
    dest: &str,
) -> Result<Translated, TranslateError> {
    let data: Value = serde_json::from_str(body)
        .map_err(|e| TranslateError::MalformedResponse(e.to_string()))?;

    let rows = data
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslateError::MalformedResponse("missing sentence list".to_string()))?;

    let text: String = rows
        .iter()
        .filter_map(|row| row.get(0).and_then(Value::as_str))
        .collect();

    let mut pronunciation = rows
        .iter()
        .find(|row| row.get(0).is_some_and(Value::is_null))
        .and_then(|row| row.get(2))
        .and_then(Value::as_str)
        .filter(|pron| !pron.is_empty())
        .map_or_else(|| origin.to_string(), str::to_string);
    if EXCLUDES.contains(&dest) && pronunciation == origin {
        pronunciation.clone_from(&text);
    }

    Ok(Translated {
        src: detected_source(&data).unwrap_or_else(|| requested_source(src)),
        dest: dest.to_string(),
        origin: origin.to_string(),
        text,
        pronunciation: Some(pronunciation),
        confidence: confidence(&data).unwrap_or(0.0),
    })
}

fn detected_source(data: &Value) -> Option<String> {
    let from_block: Option<String> = data
        .get(8)
        .and_then(|block| block.get(0))
        .and_then(Value::as_array)
        .map(|codes| codes.iter().filter_map(Value::as_str).collect());

    from_block
        .filter(|code| !code.is_empty())
        .or_else(|| data.get(2).and_then(Value::as_str).map(str::to_string))
}

fn requested_source(src: &str) -> String {
    if src == AUTO {
        String::new()
    } else {
        src.to_string()
    }
}

fn confidence(data: &Value) -> Option<f64> {
    let from_block = data.get(8).and_then(Value::as_array).and_then(|block| {
        let idx = block.len().checked_sub(2)?;
        block.get(idx)?.get(0)?.as_f64()
    });

    from_block.or_else(|| data.get(6).and_then(Value::as_f64))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const HELLO_ES: &str = r#"[[["hola","hello",null,null,10],[null,null,"ˈōla","həˈlō"]],null,"en",null,null,null,0.97,[],[["en"],null,[0.97],["en"]]]"#;

    #[test]
    fn test_parse_translation_full_response() {
        let result = parse_translation(HELLO_ES, "hello", "auto", "es").unwrap();

        assert_eq!(result.src, "en");
        assert_eq!(result.dest, "es");
        assert_eq!(result.origin, "hello");
        assert_eq!(result.text, "hola");
        assert_eq!(result.pronunciation.as_deref(), Some("ˈōla"));
        assert!((result.confidence - 0.97).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_translation_joins_sentences() {
        let body = r#"[[["Hallo. ","Hello. ",null,null,10],["Welt","World",null,null,10]],null,"en"]"#;
        let result = parse_translation(body, "Hello. World", "auto", "de").unwrap();

        assert_eq!(result.text, "Hallo. Welt");
    }

    #[test]
    fn test_parse_translation_pronunciation_falls_back_to_origin() {
        let body = r#"[[["Hallo","Hello",null,null,10]],null,"en"]"#;
        let result = parse_translation(body, "Hello", "en", "de").unwrap();

        assert_eq!(result.pronunciation.as_deref(), Some("Hello"));
    }

    #[test]
    fn test_parse_translation_pronunciation_uses_text_for_excluded_dest() {
        let body = r#"[[["Hello","Hola",null,null,10]],null,"es"]"#;
        let result = parse_translation(body, "Hola", "auto", "en").unwrap();

        assert_eq!(result.pronunciation.as_deref(), Some("Hello"));
    }

    #[test]
    fn test_parse_translation_detected_source_from_top_level() {
        let body = r#"[[["Bonjour","Hello",null,null,10]],null,"en",null,null,null,0.5]"#;
        let result = parse_translation(body, "Hello", "auto", "fr").unwrap();

        assert_eq!(result.src, "en");
        assert!((result.confidence - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_translation_source_never_auto() {
        let body = r#"[[["Bonjour","Hello",null,null,10]]]"#;

        let detected = parse_translation(body, "Hello", "auto", "fr").unwrap();
        assert_ne!(detected.src, "auto");
        assert!((detected.confidence - 0.0).abs() < f64::EPSILON);

        let declared = parse_translation(body, "Hello", "en", "fr").unwrap();
        assert_eq!(declared.src, "en");
    }

    #[test]
    fn test_parse_translation_not_json() {
        let result = parse_translation("<html>", "hello", "auto", "es");
        assert!(matches!(result, Err(TranslateError::MalformedResponse(_))));
    }

    #[test]
    fn test_parse_translation_missing_sentences() {
        let result = parse_translation(r#"{"error":"nope"}"#, "hello", "auto", "es");
        assert!(matches!(result, Err(TranslateError::MalformedResponse(_))));
    }
}
