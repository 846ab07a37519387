use async_trait::async_trait;
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use reqwest::Client;
use url::Url;

use super::error::TranslateError;
use super::language::{resolve_destination, resolve_source};
use super::model::Translated;
use super::response::parse_translation;
use crate::config::ClientConfig;

const TRANSLATE_PATH: &str = "/translate_a/single";

/// Data sections requested from the backend: translation, transliteration,
/// language detection and dictionary.
const DATA_TYPES: &[&str] = &["t", "rm", "ld", "bd"];

/// A translation backend.
///
/// Implementations hold a session that is opened on first use and released
/// by [`Translator::close`].
#[async_trait]
pub trait Translator: Send {
    /// Translates `text` into `dest` (default `en`) from `src` (default: detect).
    async fn translate(
        &mut self,
        text: &str,
        dest: Option<&str>,
        src: Option<&str>,
    ) -> Result<Translated, TranslateError>;

    /// Releases the session. Calling it again is a no-op.
    async fn close(&mut self);

    /// Translates each text in order with the same languages.
    async fn translate_all(
        &mut self,
        texts: &[String],
        dest: Option<&str>,
        src: Option<&str>,
    ) -> Result<Vec<Translated>, TranslateError> {
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.translate(text, dest, src).await?);
        }
        Ok(results)
    }
}

/// Client for the Google Translate web endpoint.
///
/// The session holds one HTTP client per configured proxy; each request goes
/// through one of them, picked at random.
pub struct GoogleTranslator {
    config: ClientConfig,
    sessions: Vec<Client>,
}

impl GoogleTranslator {
    pub const fn new(config: ClientConfig) -> Self {
        Self {
            config,
            sessions: Vec::new(),
        }
    }

    /// Returns `true` while an HTTP session is open.
    pub fn is_open(&self) -> bool {
        !self.sessions.is_empty()
    }

    fn session(&mut self) -> Result<&Client, TranslateError> {
        if self.sessions.is_empty() {
            let proxies: Vec<Option<&str>> = if self.config.proxies.is_empty() {
                vec![None]
            } else {
                self.config.proxies.iter().map(Option::as_deref).collect()
            };
            let clients = proxies
                .into_iter()
                .map(|proxy| self.open_client(proxy))
                .collect::<Result<Vec<_>, _>>()?;
            self.sessions = clients;
        }

        let index = if self.sessions.len() == 1 {
            0
        } else {
            rand::rng().random_range(0..self.sessions.len())
        };
        Ok(&self.sessions[index])
    }

    fn open_client(&self, proxy: Option<&str>) -> Result<Client, TranslateError> {
        let builder = Client::builder()
            .user_agent(&self.config.user_agent)
            .timeout(self.config.timeout);

        let builder = match proxy {
            Some(proxy) => {
                debug!("Opening client through proxy {proxy}");
                let proxy_config =
                    reqwest::Proxy::all(proxy).map_err(|source| TranslateError::Proxy {
                        proxy: proxy.to_string(),
                        source,
                    })?;
                builder.proxy(proxy_config)
            }
            None => builder.no_proxy(),
        };

        Ok(builder.build()?)
    }

    fn request_url(&self, text: &str, src: &str, dest: &str) -> Result<Url, TranslateError> {
        let host = pick(&self.config.service_urls)
            .map_or(crate::config::DEFAULT_SERVICE_URL, String::as_str);
        build_url(host, text, src, dest)
    }
}

impl Default for GoogleTranslator {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &mut self,
        text: &str,
        dest: Option<&str>,
        src: Option<&str>,
    ) -> Result<Translated, TranslateError> {
        let dest = resolve_destination(dest)?;
        let src = resolve_source(src)?;

        let url = self.request_url(text, &src, &dest)?;
        debug!("GET {url}");

        let response = self.session()?.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                debug!("Failed to read error body for status {status}: {e}");
                String::new()
            });
            return Err(TranslateError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let translated = parse_translation(&body, text, &src, &dest)?;
        debug!("{translated}");

        Ok(translated)
    }

    async fn close(&mut self) {
        if !self.sessions.is_empty() {
            self.sessions.clear();
            debug!("Closed translation session");
        }
    }
}

/// Picks one entry, at random when there is more than one.
fn pick<T>(items: &[T]) -> Option<&T> {
    if items.len() == 1 {
        items.first()
    } else {
        items.choose(&mut rand::rng())
    }
}

fn build_url(host: &str, text: &str, src: &str, dest: &str) -> Result<Url, TranslateError> {
    let mut params = vec![
        ("client", "gtx"),
        ("sl", src),
        ("tl", dest),
        ("hl", dest),
        ("ie", "UTF-8"),
        ("oe", "UTF-8"),
    ];
    params.extend(DATA_TYPES.iter().map(|dt| ("dt", *dt)));
    params.push(("q", text));

    let base = if host.contains("://") {
        format!("{}{TRANSLATE_PATH}", host.trim_end_matches('/'))
    } else {
        format!("https://{}{TRANSLATE_PATH}", host.trim_end_matches('/'))
    };

    Url::parse_with_params(&base, &params)
        .map_err(|source| TranslateError::ServiceUrl {
            host: host.to_string(),
            source,
        })
}
