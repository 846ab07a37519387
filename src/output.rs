//! Rendering of translation results for the terminal.
//!
//! ## Design Principles
//!
//! - The result block goes to stdout, as plain text, for piping
//! - Progress and log output go to stderr
//! - Errors other than an unknown language go to stderr via `main`

use std::io::{self, Write};

use crate::translation::Translated;

/// Printed in place of a result when a language code cannot be resolved.
pub const INVALID_LANGUAGE_MESSAGE: &str = "Invalid language given";

/// Formats a translation as the four-line display block.
///
/// ```text
/// [en] hello
///     ->
/// [es] hola
/// [pron.] ˈōla
/// ```
pub fn format_translation(translated: &Translated) -> String {
    format!(
        "[{}] {}\n    ->\n[{}] {}\n[pron.] {}",
        translated.src,
        translated.origin,
        translated.dest,
        translated.text,
        translated.pronunciation.as_deref().unwrap_or_default()
    )
}

/// Writes `message` and a trailing newline to stdout.
pub fn print_message(message: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{message}")?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Translated {
        Translated {
            src: "en".to_string(),
            dest: "es".to_string(),
            origin: "hello".to_string(),
            text: "hola".to_string(),
            pronunciation: Some("ola".to_string()),
            confidence: 1.0,
        }
    }

    #[test]
    fn test_format_translation_layout() {
        let rendered = format_translation(&sample());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines, vec!["[en] hello", "    ->", "[es] hola", "[pron.] ola"]);
    }

    #[test]
    fn test_format_translation_without_pronunciation() {
        let translated = Translated {
            pronunciation: None,
            ..sample()
        };

        let rendered = format_translation(&translated);
        assert!(rendered.ends_with("[pron.] "));
        assert_eq!(rendered.lines().count(), 4);
    }

    #[test]
    fn test_format_translation_keeps_original_verbatim() {
        let translated = Translated {
            origin: "  Grüße, 世界!  ".to_string(),
            ..sample()
        };

        let rendered = format_translation(&translated);
        assert!(rendered.starts_with("[en]   Grüße, 世界!  \n"));
    }
}
