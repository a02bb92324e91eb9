//! HTTP implementations of the lookup clients.
//!
//! Both clients issue a single idempotent GET, require a 2xx status and decode
//! a JSON array. Words are percent-encoded in both requests, so multi-word or
//! punctuated queries reach the server intact.

use super::{DefinitionClient, LookupError, SynonymClient};
use crate::domain::{DefinitionEntry, Result, SynoscopeError, WeightedWord};
use crate::Config;
use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Related-word lookup against a Datamuse-style endpoint.
///
/// Requests look like `{base}?{param}={word}&max={max_results}` and the
/// response is an array of `{ "word": .., "score": .. }` objects (the
/// `text` / `relevance` spelling is accepted too).
#[derive(Debug, Clone)]
pub struct HttpSynonymClient {
    client: reqwest::Client,
    base_url: String,
    param: String,
    max_results: usize,
}

impl HttpSynonymClient {
    /// Builds a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SynoscopeError::Http`] if the underlying HTTP client cannot be
    /// constructed (for example when no TLS backend is available).
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: build_client(config.request_timeout())?,
            base_url: config.synonym_url.clone(),
            param: config.synonym_param.clone(),
            max_results: config.max_results,
        })
    }

    #[must_use]
    pub fn request_url(&self, word: &str) -> String {
        format!(
            "{}?{}={}&max={}",
            self.base_url,
            self.param,
            utf8_percent_encode(word, NON_ALPHANUMERIC),
            self.max_results
        )
    }
}

#[async_trait]
impl SynonymClient for HttpSynonymClient {
    async fn lookup(&self, word: &str) -> std::result::Result<Vec<WeightedWord>, LookupError> {
        let url = self.request_url(word);
        tracing::debug!(%url, "requesting related words");
        let wire: Vec<WireWord> = get_json(&self.client, &url).await?;
        Ok(normalize_relevance(wire))
    }
}

/// Dictionary lookup against a `{base}{word}` endpoint returning entries with
/// nested sense groups.
#[derive(Debug, Clone)]
pub struct HttpDefinitionClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDefinitionClient {
    /// Builds a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SynoscopeError::Http`] if the HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: build_client(config.request_timeout())?,
            base_url: config.definition_url.clone(),
        })
    }

    #[must_use]
    pub fn request_url(&self, word: &str) -> String {
        format!(
            "{}{}",
            self.base_url,
            utf8_percent_encode(word, NON_ALPHANUMERIC)
        )
    }
}

#[async_trait]
impl DefinitionClient for HttpDefinitionClient {
    async fn lookup(&self, word: &str) -> std::result::Result<Vec<DefinitionEntry>, LookupError> {
        let url = self.request_url(word);
        tracing::debug!(%url, "requesting definition");
        get_json(&self.client, &url).await
    }
}

/// Wire shape of one related word.
#[derive(Debug, Deserialize)]
struct WireWord {
    #[serde(alias = "word")]
    text: String,
    #[serde(default, alias = "score")]
    relevance: f64,
}

/// Converts wire words into weighted words with relevance in `[0, 1]`.
///
/// Some services report unbounded integer scores; when any score exceeds one
/// every score is divided by the maximum so that ranking is preserved.
fn normalize_relevance(words: Vec<WireWord>) -> Vec<WeightedWord> {
    let max = words
        .iter()
        .map(|w| w.relevance)
        .filter(|r| r.is_finite())
        .fold(0.0_f64, f64::max);
    let scale = if max > 1.0 { max } else { 1.0 };

    words
        .into_iter()
        .filter(|w| !w.text.trim().is_empty())
        .map(|w| WeightedWord::new(w.text, w.relevance / scale))
        .collect()
}

fn build_client(timeout: Option<Duration>) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| SynoscopeError::Http(e.to_string()))
}

async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> std::result::Result<T, LookupError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| LookupError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        tracing::debug!(status = status.as_u16(), %url, "lookup rejected");
        return Err(LookupError::Status(status.as_u16()));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| LookupError::Transport(e.to_string()))?;

    serde_json::from_slice(&body).map_err(|e| LookupError::Decode(e.to_string()))
}
