//! Session state container.
//!
//! This module defines [`SessionState`], the single source of truth for
//! everything the presentation layer shows: the mode, the query, the bubble
//! cluster, the definition overlay, loading flags and search history.
//!
//! # Ownership
//!
//! Fields are crate-private. Outside the crate the state is read through
//! accessors and the [`SessionView`](super::view::SessionView) projection,
//! and changed only through [`handle_event`](super::handle_event). That
//! keeps a single writer role even though several workflows may be in flight.
//!
//! # Staleness
//!
//! Workflows run across suspension points (animations, network calls) and are
//! never cancelled. Each workflow captures a [`RequestToken`] from an [`Epoch`]
//! when it starts; completions carrying a token that is no longer current are
//! discarded. Search and reset share one epoch, definitions have their own.
//!
//! # Invariants
//!
//! - `bubbles` is non-empty only in [`Mode::Browsing`]
//! - `scale_target`, if set, is [`BubbleId::CENTER`] or an id in `bubbles`
//! - `revealed` only contains ids present in `bubbles`
//!
//! # Example
//!
//! ```rust
//! use synoscope::app::{Mode, SessionState};
//!
//! let state = SessionState::new(50);
//! assert_eq!(state.mode(), Mode::Editing);
//! assert!(state.bubbles().is_empty());
//! assert!(state.invariant_violation().is_none());
//! ```

use super::actions::{BubbleMove, Easing};
use super::modes::{Mode, SearchStatus};
use crate::domain::{BubbleId, CanvasSize, History, Placement, Point, PositionedBubble};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::Serialize;
use std::collections::HashSet;
use std::time::Duration;

/// Identifies one run of a workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct RequestToken(u64);

impl std::fmt::Display for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "r{}", self.0)
    }
}

/// Monotonic token source; only the most recently issued token is current.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Epoch {
    latest: u64,
}

impl Epoch {
    /// Issues a new token, making every earlier token stale.
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    #[must_use]
    pub const fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}

/// The definition panel anchored near a bubble.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefinitionOverlay {
    pub word: String,
    pub text: String,
    pub anchor: Point,
    /// Top edge chosen by the [`PositionPlacer`](super::PositionPlacer).
    pub y: f64,
}

/// Text of the notice shown when a definition lookup fails.
pub const DEFINITION_UNAVAILABLE: &str = "Definition unavailable.";

/// Central session state container.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub(crate) mode: Mode,

    /// Current text of the central bubble.
    ///
    /// In editing mode this is the text being typed; in browsing mode it is the
    /// committed query word, which survives failed searches.
    pub(crate) query: String,

    /// Outcome of the last failed search, displayed instead of the query.
    pub(crate) status: Option<SearchStatus>,

    pub(crate) bubbles: Vec<PositionedBubble>,

    /// Bubbles whose entrance animation has completed.
    pub(crate) revealed: HashSet<BubbleId>,

    /// Bubble currently shrunk under long-press feedback.
    pub(crate) scale_target: Option<BubbleId>,

    pub(crate) definition_overlay: Option<DefinitionOverlay>,

    /// Dismissible message shown after a definition lookup failed.
    pub(crate) definition_notice: Option<String>,

    pub(crate) loading_definition: bool,

    /// A related-word lookup for the current query is outstanding.
    pub(crate) searching: bool,

    pub(crate) history: History,

    /// Radius pinned onto the editing placeholder until the text changes.
    pub(crate) pinned_placeholder_size: Option<f64>,

    /// Canvas size of the most recent search or reset.
    pub(crate) canvas: CanvasSize,

    pub(crate) search_epoch: Epoch,
    pub(crate) definition_epoch: Epoch,
    next_bubble_id: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(crate::domain::history::DEFAULT_HISTORY_CAPACITY)
    }
}

impl SessionState {
    /// Creates an empty editing session.
    #[must_use]
    pub fn new(history_capacity: usize) -> Self {
        Self {
            mode: Mode::Editing,
            query: String::new(),
            status: None,
            bubbles: Vec::new(),
            revealed: HashSet::new(),
            scale_target: None,
            definition_overlay: None,
            definition_notice: None,
            loading_definition: false,
            searching: false,
            history: History::with_capacity(history_capacity),
            pinned_placeholder_size: None,
            canvas: CanvasSize::default(),
            search_epoch: Epoch::default(),
            definition_epoch: Epoch::default(),
            next_bubble_id: BubbleId::CENTER.0 + 1,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn status(&self) -> Option<SearchStatus> {
        self.status
    }

    /// Text shown on the central bubble: the status message after a failed
    /// search, the query otherwise.
    #[must_use]
    pub fn label(&self) -> &str {
        self.status.map_or(self.query.as_str(), |status| status.message())
    }

    #[must_use]
    pub fn bubbles(&self) -> &[PositionedBubble] {
        &self.bubbles
    }

    #[must_use]
    pub fn bubble(&self, id: BubbleId) -> Option<&PositionedBubble> {
        self.bubbles.iter().find(|b| b.id == id)
    }

    #[must_use]
    pub fn is_revealed(&self, id: BubbleId) -> bool {
        self.revealed.contains(&id)
    }

    #[must_use]
    pub const fn scale_target(&self) -> Option<BubbleId> {
        self.scale_target
    }

    #[must_use]
    pub const fn definition_overlay(&self) -> Option<&DefinitionOverlay> {
        self.definition_overlay.as_ref()
    }

    #[must_use]
    pub fn definition_notice(&self) -> Option<&str> {
        self.definition_notice.as_deref()
    }

    #[must_use]
    pub const fn loading_definition(&self) -> bool {
        self.loading_definition
    }

    #[must_use]
    pub const fn searching(&self) -> bool {
        self.searching
    }

    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub const fn pinned_placeholder_size(&self) -> Option<f64> {
        self.pinned_placeholder_size
    }

    #[must_use]
    pub const fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Whether a long press on `id` can start right now.
    #[must_use]
    pub fn is_pressable(&self, id: BubbleId) -> bool {
        if id.is_center() {
            self.mode == Mode::Browsing
        } else {
            self.bubble(id).is_some()
        }
    }

    /// Word represented by a pressable bubble.
    #[must_use]
    pub fn word_for(&self, id: BubbleId) -> Option<&str> {
        if id.is_center() {
            (self.mode == Mode::Browsing && !self.query.is_empty()).then_some(self.query.as_str())
        } else {
            self.bubble(id).map(|b| b.item.text.as_str())
        }
    }

    /// Fuzzy-matches the text being typed against the search history.
    ///
    /// Returns up to `limit` past words, best match first. Empty outside
    /// editing mode or while the input is empty.
    #[must_use]
    pub fn history_suggestions(&self, limit: usize) -> Vec<String> {
        let needle = self.query.trim();
        if self.mode != Mode::Editing || needle.is_empty() {
            return Vec::new();
        }

        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(i64, &str)> = self
            .history
            .words()
            .filter(|word| *word != needle)
            .filter_map(|word| matcher.fuzzy_match(word, needle).map(|score| (score, word)))
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, word)| word.to_string())
            .collect()
    }

    /// Describes the first broken invariant, if any.
    #[must_use]
    pub fn invariant_violation(&self) -> Option<&'static str> {
        if !self.bubbles.is_empty() && self.mode != Mode::Browsing {
            return Some("bubbles present outside browsing mode");
        }
        if let Some(target) = self.scale_target {
            if !target.is_center() && self.bubble(target).is_none() {
                return Some("scale target references a missing bubble");
            }
        }
        if self.revealed.iter().any(|id| self.bubble(*id).is_none()) {
            return Some("revealed set references a missing bubble");
        }
        None
    }

    /// Turns layout placements into bubbles with fresh ids, all parked at `origin`.
    pub(crate) fn spawn_bubbles(&mut self, placements: &[Placement], origin: Point) -> Vec<BubbleId> {
        let mut ids = Vec::with_capacity(placements.len());
        for placement in placements {
            let id = BubbleId(self.next_bubble_id);
            self.next_bubble_id += 1;
            self.bubbles.push(PositionedBubble {
                id,
                item: placement.item.clone(),
                position: origin,
            });
            ids.push(id);
        }
        ids
    }

    /// Sends every bubble to `center`, returning the moves for the presenter.
    pub(crate) fn converge_on(&mut self, center: Point, duration: Duration) -> Vec<BubbleMove> {
        self.bubbles
            .iter_mut()
            .map(|bubble| {
                let from = bubble.position;
                bubble.position = center;
                BubbleMove {
                    id: bubble.id,
                    from,
                    to: center,
                    delay: Duration::ZERO,
                    duration,
                    easing: Easing::EaseInOut,
                }
            })
            .collect()
    }

    /// Drops the cluster together with everything that refers to its ids.
    pub(crate) fn clear_bubbles(&mut self) {
        self.bubbles.clear();
        self.revealed.clear();
        if self.scale_target.is_some_and(|id| !id.is_center()) {
            self.scale_target = None;
        }
    }
}
