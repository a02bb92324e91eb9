//! Mode and status types for the session state machine.
//!
//! # State Machine
//!
//! The session is always in exactly one [`Mode`]:
//! - **Editing**: the central placeholder accepts text; no result bubbles exist
//! - **Browsing**: the central label shows the query (or a search status) and
//!   the result cluster surrounds it
//!
//! ```text
//!            submit(word ≠ "")              tap central label
//!  Editing ─────────────────────▶ Browsing ─────────────────▶ Editing
//!     ▲        submit("")              │  submit / drill-down
//!     └────────────────────────────────┘◀───────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use synoscope::app::{Mode, SearchStatus};
//!
//! let mode = Mode::default();
//! assert_eq!(mode, Mode::Editing);
//! assert_eq!(SearchStatus::ConnectionFailed.message(), "Server connection failed.");
//! ```

use serde::Serialize;

/// Which surface the central bubble presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// The user is typing a word into the central placeholder.
    ///
    /// No result bubbles exist in this mode.
    #[default]
    Editing,

    /// A query has been committed; the central label is read-only.
    ///
    /// Tapping the label returns to [`Mode::Editing`]. Result bubbles may be
    /// present, or absent while a lookup is pending or after it failed.
    Browsing,
}

/// Outcome of a failed search, shown on the central label in place of the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    /// The service answered but had nothing for the word (or refused it).
    WordNotFound,

    /// The service could not be reached or answered with garbage.
    ConnectionFailed,
}

impl SearchStatus {
    /// The literal user-facing text for this status.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::WordNotFound => "Word not found. Tap to try again.",
            Self::ConnectionFailed => "Server connection failed.",
        }
    }
}

impl std::fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Which visual transition an animation batch belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationPhase {
    /// Existing bubbles converge on the center before a new search.
    Collapse,

    /// New bubbles fan out from the center to their targets.
    Expand,

    /// Bubbles converge on the center before returning to editing.
    ResetCollapse,
}
