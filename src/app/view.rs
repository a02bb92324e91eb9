//! Render-ready projection of the session state.
//!
//! A [`SessionView`] is computed from [`SessionState`] after every event that
//! asks for a render. It carries no logic, only display-ready data such as
//! bubble radii and reveal flags, and serializes to JSON for external
//! front ends.

use super::modes::{Mode, SearchStatus};
use super::state::{DefinitionOverlay, SessionState};
use crate::domain::{BubbleId, Point, WeightedWord};
use crate::layout::BubbleSizer;
use serde::Serialize;

/// Number of history suggestions offered while typing.
pub const SUGGESTION_LIMIT: usize = 5;

/// Complete view model for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    pub mode: Mode,

    /// Text on the central bubble (query, typed text, or status message).
    pub label: String,

    /// Committed query in browsing mode, typed text in editing mode.
    pub query: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SearchStatus>,

    pub center: CenterView,

    pub bubbles: Vec<BubbleView>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay: Option<DefinitionOverlay>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,

    pub loading_definition: bool,
    pub searching: bool,

    /// Past searches, most recent first.
    pub history: Vec<String>,

    /// History words fuzzy-matching the text being typed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

/// The central bubble or editing placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CenterView {
    pub position: Point,
    pub radius: f64,
    /// Shrunk under long-press feedback.
    pub scaled: bool,
    /// The editable placeholder, present only in editing mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<WeightedWord>,
}

/// One result bubble.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BubbleView {
    pub id: BubbleId,
    pub word: String,
    pub relevance: f64,
    pub radius: f64,
    pub position: Point,
    pub revealed: bool,
    pub scaled: bool,
}

impl SessionState {
    /// Computes the view model for the current state.
    #[must_use]
    pub fn view(&self, sizer: &dyn BubbleSizer) -> SessionView {
        let center_word = match self.mode {
            Mode::Editing => WeightedWord::new(self.query.as_str(), 1.0)
                .with_size_override(self.pinned_placeholder_size),
            Mode::Browsing => WeightedWord::new(self.label(), 1.0),
        };

        let bubbles = self
            .bubbles
            .iter()
            .map(|bubble| BubbleView {
                id: bubble.id,
                word: bubble.item.text.clone(),
                relevance: bubble.item.relevance,
                radius: sizer.radius(&bubble.item),
                position: bubble.position,
                revealed: self.is_revealed(bubble.id),
                scaled: self.scale_target == Some(bubble.id),
            })
            .collect();

        SessionView {
            mode: self.mode,
            label: self.label().to_string(),
            query: self.query.clone(),
            status: self.status,
            center: CenterView {
                position: self.canvas.center(),
                radius: sizer.radius(&center_word),
                scaled: self.scale_target == Some(BubbleId::CENTER),
                placeholder: (self.mode == Mode::Editing).then(|| center_word.clone()),
            },
            bubbles,
            overlay: self.definition_overlay.clone(),
            notice: self.definition_notice.clone(),
            loading_definition: self.loading_definition,
            searching: self.searching,
            history: self.history.words().map(str::to_string).collect(),
            suggestions: self.history_suggestions(SUGGESTION_LIMIT),
        }
    }
}
