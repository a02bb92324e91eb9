//! Synoscope: explore related words as a cluster of weighted bubbles.
//!
//! Synoscope is the session core of a word explorer:
//! - Type a word and its related words fan out around it, sized by relevance
//! - Tap a related word to drill down into its own neighbourhood
//! - Long-press any bubble for its dictionary definition
//! - Tap the central label to go back to typing
//! - Past searches are kept in a bounded, de-duplicated history

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Interactive shell (main.rs)                        │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Runtime (runtime/)                                 │  ← Single scheduler
//! │  - Session owns state and in-flight tasks           │
//! │  - Presenter hook for animations                    │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling and request tokens                │
//! │  - Search and definition workflows                  │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Clients       │   │ Layout        │   │ UI            │
//! │ (client/)     │   │ (layout/)     │   │ (ui/)         │
//! │ - Synonyms    │   │ - Placement   │   │ - Text render │
//! │ - Definitions │   │ - Sizing      │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Infrastructure and Observability           │
//! │  - Words, bubbles, history, definitions (domain/)   │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Rotating log file (observability/)               │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! Read from `$XDG_CONFIG_HOME/synoscope/config.toml` (or
//! `~/.config/synoscope/config.toml`); every key is optional:
//!
//! ```toml
//! synonym_url = "https://api.datamuse.com/words"
//! synonym_param = "ml"
//! max_results = 24
//! definition_url = "https://api.dictionaryapi.dev/api/v2/entries/en/"
//! request_timeout_secs = 10
//! history_capacity = 50
//! trace_level = "debug"
//!
//! [timing]
//! collapse_ms = 200
//! stagger_ms = 30
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use synoscope::app::{handle_event, Event, HandlerContext, SessionState};
//! use synoscope::domain::CanvasSize;
//! use synoscope::layout::{RelevanceSizer, RingLayout};
//!
//! let ctx = HandlerContext::new(
//!     Arc::new(RingLayout::new(RelevanceSizer::default())),
//!     Arc::new(RelevanceSizer::default()),
//! );
//! let mut state = SessionState::default();
//! let canvas = CanvasSize::new(390.0, 844.0);
//!
//! handle_event(&mut state, &ctx, Event::Submit { word: String::new(), canvas });
//! assert!(state.bubbles().is_empty());
//! ```

pub mod app;
pub mod client;
pub mod domain;
pub mod infrastructure;
pub mod layout;
pub mod observability;
pub mod runtime;
pub mod ui;

pub use app::{handle_event, Action, Event, Mode, SearchStatus, SessionState, SessionView, Timing};
pub use domain::{Result, SynoscopeError};
pub use runtime::Session;

use domain::history::DEFAULT_HISTORY_CAPACITY;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Runtime configuration, loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the related-word service.
    pub synonym_url: String,

    /// Query parameter that carries the word (`ml` = "means like").
    pub synonym_param: String,

    /// Upper bound on related words requested per search.
    pub max_results: usize,

    /// Dictionary endpoint; the percent-encoded word is appended.
    pub definition_url: String,

    /// Per-request timeout. Unset means the transport's own behaviour.
    pub request_timeout_secs: Option<u64>,

    /// Number of past searches kept before the oldest is evicted.
    pub history_capacity: usize,

    /// Log filter used when `RUST_LOG` is unset. Default: `"info"`
    pub trace_level: Option<String>,

    /// Write logs to a rotating file under the data directory.
    pub log_file: bool,

    pub timing: Timing,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            synonym_url: "https://api.datamuse.com/words".to_string(),
            synonym_param: "ml".to_string(),
            max_results: 24,
            definition_url: "https://api.dictionaryapi.dev/api/v2/entries/en/".to_string(),
            request_timeout_secs: None,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            trace_level: None,
            log_file: true,
            timing: Timing::default(),
        }
    }
}

impl Config {
    /// Parses and validates a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SynoscopeError::Io`] if the file cannot be read,
    /// [`SynoscopeError::Parse`] if it is not valid TOML for this shape, and
    /// [`SynoscopeError::Config`] if a value is out of range.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Loads `path` if given, otherwise the default location.
    ///
    /// A missing default file yields [`Config::default`]; a missing explicit
    /// file is an error.
    ///
    /// # Errors
    ///
    /// See [`Config::from_file`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// `$XDG_CONFIG_HOME/synoscope/config.toml`, or under `~/.config`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        infrastructure::get_config_dir().map(|dir| dir.join("config.toml"))
    }

    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            return Err(SynoscopeError::Config("max_results must be positive".to_string()));
        }
        if self.history_capacity == 0 {
            return Err(SynoscopeError::Config("history_capacity must be positive".to_string()));
        }
        if self.synonym_url.trim().is_empty() || self.definition_url.trim().is_empty() {
            return Err(SynoscopeError::Config("service URLs must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Initializes tracing and builds a session from configuration.
///
/// # Errors
///
/// Returns an error if an HTTP client cannot be constructed.
pub fn initialize(config: &Config) -> Result<Session> {
    observability::init_tracing(config);
    tracing::debug!(
        synonym_url = %config.synonym_url,
        definition_url = %config.definition_url,
        history_capacity = config.history_capacity,
        "initializing synoscope"
    );
    Session::from_config(config)
}
