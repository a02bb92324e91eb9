//! Lookup clients for related words and dictionary definitions.
//!
//! The state machine only sees the two object-safe traits defined here. The
//! production implementations in [`http`] talk to public JSON APIs; tests swap
//! in in-memory doubles.
//!
//! # Failure model
//!
//! Every lookup resolves to either a decoded payload or a [`LookupError`].
//! Errors are values, not panics: the orchestrators turn them into visible
//! state (search) or a dismissible notice (definitions) and never propagate
//! them further.

pub mod http;

use crate::domain::{DefinitionEntry, WeightedWord};
use async_trait::async_trait;
use thiserror::Error;

pub use http::{HttpDefinitionClient, HttpSynonymClient};

/// Why a lookup did not produce a payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The request never produced a response (DNS, TLS, connection reset, timeout).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server answered with a non-success status code.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The response body was not the expected JSON shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Finds words related to a query word, ranked most relevant first.
#[async_trait]
pub trait SynonymClient: Send + Sync {
    async fn lookup(&self, word: &str) -> Result<Vec<WeightedWord>, LookupError>;
}

/// Fetches dictionary entries for a word.
#[async_trait]
pub trait DefinitionClient: Send + Sync {
    async fn lookup(&self, word: &str) -> Result<Vec<DefinitionEntry>, LookupError>;
}
