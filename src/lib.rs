//! # gtrans - Google Translate from the command line
//!
//! `gtrans` sends one piece of text to the Google Translate web endpoint and
//! prints the translation together with the detected source language and a
//! pronunciation hint.
//!
//! ## Quick Start
//!
//! ```bash
//! # Detect the source language, translate to English
//! gtrans "Guten Morgen"
//!
//! # Pick both languages
//! gtrans --src en --dest ja "good morning"
//! ```
//!
//! Output:
//!
//! ```text
//! [en] good morning
//!     ->
//! [ja] おはようございます
//! [pron.] Ohayōgozaimasu
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// HTTP session settings for the translation client.
pub mod config;

/// Rendering of results for stdout.
pub mod output;

/// Translation client for the Google Translate web endpoint.
pub mod translation;

/// Terminal UI components (spinner).
pub mod ui;
