use anyhow::{Context, Result};

use crate::output::{INVALID_LANGUAGE_MESSAGE, format_translation, print_message};
use crate::translation::Translator;
use crate::ui::Spinner;

pub struct TranslateOptions {
    pub text: String,
    pub dest: Option<String>,
    pub src: Option<String>,
}

/// Translates once and prints the result block to stdout.
pub async fn run_translate<T>(translator: &mut T, options: &TranslateOptions) -> Result<()>
where
    T: Translator + ?Sized,
{
    let spinner = Spinner::new("Translating...");
    let message = translate_message(translator, options).await;
    spinner.stop();

    print_message(&message?).context("Failed to write to stdout")
}

/// Performs the single translation and renders what should be printed.
///
/// The translator is closed before the outcome is inspected, so it is
/// released exactly once on every path. An unknown language becomes
/// [`INVALID_LANGUAGE_MESSAGE`]; every other error is returned.
pub async fn translate_message<T>(translator: &mut T, options: &TranslateOptions) -> Result<String>
where
    T: Translator + ?Sized,
{
    let outcome = translator
        .translate(
            &options.text,
            options.dest.as_deref(),
            options.src.as_deref(),
        )
        .await;
    translator.close().await;

    match outcome {
        Ok(translated) => Ok(format_translation(&translated)),
        Err(e) if e.is_invalid_language() => Ok(INVALID_LANGUAGE_MESSAGE.to_string()),
        Err(e) => Err(e).context("Translation failed"),
    }
}
