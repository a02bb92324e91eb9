//! Event handling and state transition logic.
//!
//! This module implements the single mutation entry point of the session:
//! gestures from the presentation and completions from the runtime's
//! in-flight tasks both arrive as [`Event`]s, and [`handle_event`] translates
//! them into state changes and follow-up [`Action`]s.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the presentation or from finished runtime tasks
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations happen in the search and definition workflows
//! 4. Actions are collected and returned for the runtime to execute
//!
//! Completion events carry the [`RequestToken`] of the workflow step that
//! asked for them. A token that is no longer current means a later gesture
//! superseded the workflow, and the completion is dropped.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use synoscope::app::{handle_event, Action, Event, HandlerContext, Mode, SessionState};
//! use synoscope::domain::CanvasSize;
//! use synoscope::layout::{RelevanceSizer, RingLayout};
//!
//! let ctx = HandlerContext::new(
//!     Arc::new(RingLayout::new(RelevanceSizer::default())),
//!     Arc::new(RelevanceSizer::default()),
//! );
//! let mut state = SessionState::default();
//! let (render, actions) = handle_event(
//!     &mut state,
//!     &ctx,
//!     Event::Submit { word: "happy".into(), canvas: CanvasSize::new(400.0, 800.0) },
//! );
//! assert!(render);
//! assert_eq!(state.mode(), Mode::Browsing);
//! assert!(matches!(actions[0], Action::FetchSynonyms { .. }));
//! ```

use super::actions::{Action, Timing};
use super::modes::{AnimationPhase, Mode};
use super::placer::PositionPlacer;
use super::state::{RequestToken, SessionState};
use super::{definition, search};
use crate::client::LookupError;
use crate::domain::{BubbleId, CanvasSize, DefinitionEntry, Point, WeightedWord};
use crate::layout::{BubbleSizer, LayoutProvider};
use std::sync::Arc;

/// Gestures from the presentation and completions of runtime tasks.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The text in the editing placeholder changed.
    InputChanged { text: String },

    /// Typed text was committed.
    Submit { word: String, canvas: CanvasSize },

    /// A result bubble was tapped; its word becomes the new query.
    BubbleSelected { id: BubbleId, canvas: CanvasSize },

    /// A past search was picked from the history list.
    HistorySelected { word: String, canvas: CanvasSize },

    /// The central label was tapped; returns to editing when browsing.
    CenterTapped { canvas: CanvasSize },

    /// A long press started on a bubble (or the central label).
    LongPressBegan { target: BubbleId },

    /// The long press ended without a release on the target.
    LongPressCancelled,

    /// The long press completed; the target's word gets defined.
    LongPressReleased { target: BubbleId, anchor: Point },

    /// Defines an arbitrary word next to `anchor`.
    Define { word: String, anchor: Point },

    /// Tap outside the overlay.
    DismissOverlay,

    /// The presentation was laid out at a new size.
    CanvasResized { canvas: CanvasSize },

    /// The presenter finished playing an animation batch.
    AnimationFinished {
        token: RequestToken,
        phase: AnimationPhase,
    },

    /// A related-word lookup completed.
    SynonymsLoaded {
        token: RequestToken,
        word: String,
        result: Result<Vec<WeightedWord>, LookupError>,
    },

    /// A definition lookup completed.
    DefinitionLoaded {
        token: RequestToken,
        word: String,
        anchor: Point,
        result: Result<Vec<DefinitionEntry>, LookupError>,
    },
}

/// Pure collaborators the handler consults while transitioning.
#[derive(Clone)]
pub struct HandlerContext {
    pub layout: Arc<dyn LayoutProvider>,
    pub sizer: Arc<dyn BubbleSizer>,
    pub placer: PositionPlacer,
    pub timing: Timing,
}

impl HandlerContext {
    #[must_use]
    pub fn new(layout: Arc<dyn LayoutProvider>, sizer: Arc<dyn BubbleSizer>) -> Self {
        Self {
            layout,
            sizer,
            placer: PositionPlacer::default(),
            timing: Timing::default(),
        }
    }

    #[must_use]
    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }
}

impl std::fmt::Debug for HandlerContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerContext")
            .field("placer", &self.placer)
            .field("timing", &self.timing)
            .finish_non_exhaustive()
    }
}

/// Processes an event, mutates session state, and returns actions to execute.
///
/// # Returns
///
/// `(render, actions)`: whether the presentation should re-render, and the
/// actions to execute in order. Lookup failures never surface as errors; they
/// degrade into state (a status label, a notice).
///
/// # Tracing
///
/// Each call creates a debug-level span with the event for diagnostics.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut SessionState, ctx: &HandlerContext, event: Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event = ?event).entered();

    match event {
        Event::InputChanged { text } => {
            if state.mode != Mode::Editing {
                tracing::debug!("input ignored while browsing");
                return (false, vec![]);
            }
            state.query = text;
            state.pinned_placeholder_size = None;
            (true, vec![])
        }
        Event::Submit { word, canvas } | Event::HistorySelected { word, canvas } => {
            (true, search::submit(state, ctx, &word, canvas))
        }
        Event::BubbleSelected { id, canvas } => {
            let Some(word) = state.bubble(id).map(|b| b.item.text.clone()) else {
                tracing::debug!(%id, "selected bubble no longer exists");
                return (false, vec![]);
            };
            (true, search::submit(state, ctx, &word, canvas))
        }
        Event::CenterTapped { canvas } => match state.mode {
            Mode::Browsing => (true, search::reset(state, ctx, canvas)),
            Mode::Editing => (false, vec![Action::FocusInput]),
        },
        Event::LongPressBegan { target } => (definition::press(state, target), vec![]),
        Event::LongPressCancelled => {
            let changed = state.scale_target.take().is_some();
            (changed, vec![])
        }
        Event::LongPressReleased { target, anchor } => (true, definition::release(state, target, anchor)),
        Event::Define { word, anchor } => (true, definition::define(state, &word, anchor)),
        Event::DismissOverlay => {
            let changed = state.definition_overlay.take().is_some() | state.definition_notice.take().is_some();
            (changed, vec![])
        }
        Event::CanvasResized { canvas } => {
            let changed = state.canvas != canvas;
            state.canvas = canvas;
            (changed, vec![])
        }
        Event::AnimationFinished { token, phase } => {
            if !state.search_epoch.is_current(token) {
                tracing::debug!(%token, ?phase, "stale animation completion discarded");
                return (false, vec![]);
            }
            match phase {
                AnimationPhase::Collapse => (true, search::after_collapse(state, token)),
                AnimationPhase::Expand => {
                    search::after_expand(state);
                    (true, vec![])
                }
                AnimationPhase::ResetCollapse => (true, search::after_reset_collapse(state, ctx)),
            }
        }
        Event::SynonymsLoaded { token, word, result } => {
            if !state.search_epoch.is_current(token) {
                tracing::debug!(%token, %word, "stale related-word result discarded");
                return (false, vec![]);
            }
            (true, search::synonyms_loaded(state, ctx, token, &word, result))
        }
        Event::DefinitionLoaded {
            token,
            word,
            anchor,
            result,
        } => {
            if !state.definition_epoch.is_current(token) {
                tracing::debug!(%token, %word, "stale definition discarded");
                return (false, vec![]);
            }
            definition::definition_loaded(state, ctx, token, &word, anchor, result);
            (true, vec![])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{AnimationBatch, SearchStatus};
    use crate::domain::{Definition, Placement, SenseGroup, NO_DEFINITION_FOUND};

    /// Lays words out on a horizontal line, 10 units apart.
    struct LineLayout;

    impl LayoutProvider for LineLayout {
        fn layout(&self, _canvas: CanvasSize, _origin: &str, words: &[WeightedWord]) -> Vec<Placement> {
            words
                .iter()
                .zip(1_u32..)
                .map(|(word, i)| Placement {
                    item: word.clone(),
                    target: Point::new(f64::from(i) * 10.0, 0.0),
                })
                .collect()
        }
    }

    /// Radius equals the label length.
    struct LengthSizer;

    impl BubbleSizer for LengthSizer {
        fn radius(&self, word: &WeightedWord) -> f64 {
            word.size_override
                .unwrap_or_else(|| f64::from(u32::try_from(word.text.len()).unwrap()))
        }
    }

    const CANVAS: CanvasSize = CanvasSize::new(400.0, 800.0);

    fn ctx() -> HandlerContext {
        HandlerContext::new(Arc::new(LineLayout), Arc::new(LengthSizer))
    }

    fn submit(state: &mut SessionState, word: &str) -> Vec<Action> {
        handle_event(
            state,
            &ctx(),
            Event::Submit {
                word: word.to_string(),
                canvas: CANVAS,
            },
        )
        .1
    }

    fn fetch_token(actions: &[Action]) -> RequestToken {
        match actions {
            [Action::FetchSynonyms { token, .. }] => *token,
            other => panic!("expected a single fetch, got {other:?}"),
        }
    }

    fn animation(actions: &[Action]) -> &AnimationBatch {
        match actions {
            [Action::Animate(batch)] => batch,
            other => panic!("expected a single animation, got {other:?}"),
        }
    }

    fn load(state: &mut SessionState, token: RequestToken, word: &str, words: &[(&str, f64)]) -> Vec<Action> {
        let result = Ok(words.iter().map(|(w, r)| WeightedWord::new(*w, *r)).collect());
        handle_event(
            state,
            &ctx(),
            Event::SynonymsLoaded {
                token,
                word: word.to_string(),
                result,
            },
        )
        .1
    }

    fn finish(state: &mut SessionState, batch: &AnimationBatch) -> Vec<Action> {
        handle_event(
            state,
            &ctx(),
            Event::AnimationFinished {
                token: batch.token,
                phase: batch.phase,
            },
        )
        .1
    }

    /// Runs a whole successful search and returns the state.
    fn browsing(word: &str, words: &[(&str, f64)]) -> SessionState {
        let mut state = SessionState::default();
        let token = fetch_token(&submit(&mut state, word));
        let actions = load(&mut state, token, word, words);
        let batch = animation(&actions).clone();
        finish(&mut state, &batch);
        state
    }

    #[test]
    fn first_submit_fetches_immediately() {
        let mut state = SessionState::default();
        let actions = submit(&mut state, "happy");

        assert_eq!(state.mode(), Mode::Browsing);
        assert_eq!(state.query(), "happy");
        assert!(state.searching());
        assert!(matches!(&actions[..], [Action::FetchSynonyms { word, .. }] if word == "happy"));
        assert_eq!(state.history().words().collect::<Vec<_>>(), vec!["happy"]);
    }

    #[test]
    fn results_expand_from_center_with_stagger() {
        let mut state = SessionState::default();
        let token = fetch_token(&submit(&mut state, "happy"));

        let actions = load(&mut state, token, "happy", &[("glad", 0.9), ("joyful", 0.7)]);
        let batch = animation(&actions);

        assert_eq!(batch.phase, AnimationPhase::Expand);
        assert_eq!(state.bubbles().len(), 2);
        assert!(batch.moves.iter().all(|m| m.from == CANVAS.center()));
        assert!(batch.moves[1].delay > batch.moves[0].delay);
        assert_eq!(state.bubbles()[1].position, Point::new(20.0, 0.0));
        assert!(state.bubbles().iter().all(|b| !b.id.is_center()));
        assert!(state.bubbles().iter().all(|b| !state.is_revealed(b.id)));
    }

    #[test]
    fn expansion_completion_reveals_every_bubble() {
        let state = browsing("happy", &[("glad", 0.9), ("joyful", 0.7)]);

        assert_eq!(state.mode(), Mode::Browsing);
        assert_eq!(state.query(), "happy");
        assert!(state.bubbles().iter().all(|b| state.is_revealed(b.id)));
        assert!(state.invariant_violation().is_none());
    }

    #[test]
    fn empty_submit_returns_to_editing_without_lookup() {
        let mut state = SessionState::default();
        let actions = submit(&mut state, "   ");

        assert!(actions.is_empty());
        assert_eq!(state.mode(), Mode::Editing);
        assert!(state.bubbles().is_empty());
        assert!(state.history().is_empty());
    }

    #[test]
    fn drill_down_collapses_before_fetching() {
        let mut state = browsing("happy", &[("glad", 0.9), ("joyful", 0.7)]);
        let glad = state.bubbles()[0].id;

        let (_, actions) = handle_event(&mut state, &ctx(), Event::BubbleSelected { id: glad, canvas: CANVAS });
        let batch = animation(&actions).clone();

        assert_eq!(batch.phase, AnimationPhase::Collapse);
        assert!(batch.moves.iter().all(|m| m.to == CANVAS.center()));
        assert_eq!(state.query(), "glad");
        assert_eq!(state.bubbles().len(), 2);

        let actions = finish(&mut state, &batch);
        assert!(matches!(&actions[..], [Action::FetchSynonyms { word, .. }] if word == "glad"));
        assert!(state.bubbles().is_empty());
        assert_eq!(state.history().words().collect::<Vec<_>>(), vec!["glad", "happy"]);
    }

    #[test]
    fn empty_result_shows_word_not_found() {
        let mut state = SessionState::default();
        let token = fetch_token(&submit(&mut state, "zzzz"));
        load(&mut state, token, "zzzz", &[]);

        assert_eq!(state.mode(), Mode::Browsing);
        assert_eq!(state.status(), Some(SearchStatus::WordNotFound));
        assert_eq!(state.label(), "Word not found. Tap to try again.");
        assert_eq!(state.query(), "zzzz");
        assert!(!state.searching());
    }

    #[test]
    fn lookup_errors_map_to_statuses() {
        let cases = [
            (LookupError::Status(404), SearchStatus::WordNotFound),
            (LookupError::Transport("refused".into()), SearchStatus::ConnectionFailed),
            (LookupError::Decode("not json".into()), SearchStatus::ConnectionFailed),
        ];
        for (error, expected) in cases {
            let mut state = SessionState::default();
            let token = fetch_token(&submit(&mut state, "happy"));
            handle_event(
                &mut state,
                &ctx(),
                Event::SynonymsLoaded {
                    token,
                    word: "happy".into(),
                    result: Err(error),
                },
            );
            assert_eq!(state.status(), Some(expected));
            assert!(state.bubbles().is_empty());
        }
    }

    #[test]
    fn later_submit_wins_when_earlier_resolves_last() {
        let mut state = SessionState::default();
        let a = fetch_token(&submit(&mut state, "a"));
        let b = fetch_token(&submit(&mut state, "b"));

        load(&mut state, b, "b", &[("bee", 0.5)]);
        let (render, actions) = handle_event(
            &mut state,
            &ctx(),
            Event::SynonymsLoaded {
                token: a,
                word: "a".into(),
                result: Ok(vec![WeightedWord::new("ay", 0.5)]),
            },
        );

        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.query(), "b");
        assert_eq!(state.bubbles().len(), 1);
        assert_eq!(state.bubbles()[0].item.text, "bee");
    }

    #[test]
    fn resubmitting_keeps_history_order() {
        let mut state = SessionState::default();
        submit(&mut state, "happy");
        submit(&mut state, "sad");
        let before: Vec<String> = state.history().words().map(str::to_string).collect();
        submit(&mut state, "happy");
        let after: Vec<String> = state.history().words().map(str::to_string).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn reset_collapses_then_returns_to_editing() {
        let mut state = browsing("happy", &[("glad", 0.9)]);

        let (_, actions) = handle_event(&mut state, &ctx(), Event::CenterTapped { canvas: CANVAS });
        let batch = animation(&actions).clone();
        assert_eq!(batch.phase, AnimationPhase::ResetCollapse);
        assert_eq!(batch.moves[0].duration, Timing::default().reset_collapse());

        let actions = finish(&mut state, &batch);

        assert_eq!(actions, vec![Action::FocusInput]);
        assert_eq!(state.mode(), Mode::Editing);
        assert_eq!(state.query(), "");
        assert!(state.bubbles().is_empty());
        assert_eq!(state.pinned_placeholder_size(), Some(5.0));
    }

    #[test]
    fn reset_after_failure_pins_status_size() {
        let mut state = SessionState::default();
        let token = fetch_token(&submit(&mut state, "zzzz"));
        load(&mut state, token, "zzzz", &[]);

        let (_, actions) = handle_event(&mut state, &ctx(), Event::CenterTapped { canvas: CANVAS });

        assert_eq!(actions, vec![Action::FocusInput]);
        assert!(state.status().is_none());
        let expected = f64::from(u32::try_from(SearchStatus::WordNotFound.message().len()).unwrap());
        assert_eq!(state.pinned_placeholder_size(), Some(expected));
    }

    #[test]
    fn reset_supersedes_pending_search() {
        let mut state = SessionState::default();
        let token = fetch_token(&submit(&mut state, "happy"));
        handle_event(&mut state, &ctx(), Event::CenterTapped { canvas: CANVAS });

        let (render, _) = handle_event(
            &mut state,
            &ctx(),
            Event::SynonymsLoaded {
                token,
                word: "happy".into(),
                result: Ok(vec![WeightedWord::new("glad", 0.9)]),
            },
        );

        assert!(!render);
        assert_eq!(state.mode(), Mode::Editing);
        assert!(state.bubbles().is_empty());
    }

    #[test]
    fn typing_clears_pinned_size_only_while_editing() {
        let mut state = browsing("happy", &[("glad", 0.9)]);
        let (render, _) = handle_event(&mut state, &ctx(), Event::InputChanged { text: "x".into() });
        assert!(!render);
        assert_eq!(state.query(), "happy");

        let mut state = SessionState::default();
        state.pinned_placeholder_size = Some(30.0);
        handle_event(&mut state, &ctx(), Event::InputChanged { text: "h".into() });
        assert_eq!(state.query(), "h");
        assert!(state.pinned_placeholder_size().is_none());
    }

    fn definition_result(groups: Vec<SenseGroup>) -> Result<Vec<DefinitionEntry>, LookupError> {
        Ok(vec![DefinitionEntry {
            word: "happy".into(),
            senses: groups,
        }])
    }

    fn define(state: &mut SessionState, word: &str) -> RequestToken {
        let (_, actions) = handle_event(
            state,
            &ctx(),
            Event::Define {
                word: word.into(),
                anchor: Point::new(100.0, 100.0),
            },
        );
        match &actions[..] {
            [Action::FetchDefinition { token, .. }] => *token,
            other => panic!("expected a definition fetch, got {other:?}"),
        }
    }

    fn deliver(state: &mut SessionState, token: RequestToken, result: Result<Vec<DefinitionEntry>, LookupError>) -> bool {
        handle_event(
            state,
            &ctx(),
            Event::DefinitionLoaded {
                token,
                word: "happy".into(),
                anchor: Point::new(100.0, 100.0),
                result,
            },
        )
        .0
    }

    #[test]
    fn definition_overlay_uses_first_definition() {
        let mut state = browsing("happy", &[("glad", 0.9)]);
        let token = define(&mut state, "happy");
        assert!(state.loading_definition());

        deliver(
            &mut state,
            token,
            definition_result(vec![SenseGroup {
                part_of_speech: Some("adjective".into()),
                definitions: vec![Definition {
                    definition: "Feeling pleasure.".into(),
                    example: None,
                }],
            }]),
        );

        let overlay = state.definition_overlay().unwrap();
        assert_eq!(overlay.text, "Feeling pleasure.");
        assert_eq!(overlay.anchor, Point::new(100.0, 100.0));
        assert_eq!(overlay.y, 156.0);
        assert!(!state.loading_definition());
    }

    #[test]
    fn empty_first_sense_group_shows_placeholder_text() {
        let mut state = SessionState::default();
        let token = define(&mut state, "happy");
        deliver(
            &mut state,
            token,
            definition_result(vec![SenseGroup {
                part_of_speech: None,
                definitions: vec![],
            }]),
        );
        assert_eq!(state.definition_overlay().unwrap().text, NO_DEFINITION_FOUND);
    }

    #[test]
    fn failed_definition_clears_overlay_and_sets_notice() {
        let mut state = SessionState::default();
        let token = define(&mut state, "happy");
        deliver(&mut state, token, Err(LookupError::Status(404)));

        assert!(state.definition_overlay().is_none());
        assert_eq!(state.definition_notice(), Some("Definition unavailable."));
        assert!(!state.loading_definition());

        let (render, _) = handle_event(&mut state, &ctx(), Event::DismissOverlay);
        assert!(render);
        assert!(state.definition_notice().is_none());
    }

    #[test]
    fn stale_definition_is_discarded() {
        let mut state = SessionState::default();
        let first = define(&mut state, "happy");
        let second = define(&mut state, "happy");

        assert!(!deliver(&mut state, first, Err(LookupError::Status(500))));
        assert!(state.loading_definition());
        assert!(deliver(&mut state, second, definition_result(vec![])));
        assert_eq!(state.definition_overlay().unwrap().text, NO_DEFINITION_FOUND);
    }

    #[test]
    fn submit_supersedes_pending_definition() {
        let mut state = SessionState::default();
        let token = define(&mut state, "happy");
        submit(&mut state, "sad");
        assert!(!deliver(&mut state, token, definition_result(vec![])));
        assert!(state.definition_overlay().is_none());
    }

    #[test]
    fn reset_supersedes_pending_definition() {
        let mut state = browsing("happy", &[("glad", 0.9)]);
        let token = define(&mut state, "glad");

        let (_, actions) = handle_event(&mut state, &ctx(), Event::CenterTapped { canvas: CANVAS });
        assert!(!state.loading_definition());
        let batch = animation(&actions).clone();
        finish(&mut state, &batch);

        assert!(!deliver(&mut state, token, definition_result(vec![])));
        assert_eq!(state.mode(), Mode::Editing);
        assert!(state.definition_overlay().is_none());
        assert!(state.definition_notice().is_none());
    }

    #[test]
    fn reset_clears_definition_notice() {
        let mut state = browsing("happy", &[("glad", 0.9)]);
        let token = define(&mut state, "glad");
        deliver(&mut state, token, Err(LookupError::Status(404)));
        assert!(state.definition_notice().is_some());

        handle_event(&mut state, &ctx(), Event::CenterTapped { canvas: CANVAS });

        assert!(state.definition_notice().is_none());
    }

    #[test]
    fn resized_canvas_places_overlay_before_any_search() {
        let mut state = SessionState::default();
        let (render, _) = handle_event(&mut state, &ctx(), Event::CanvasResized { canvas: CANVAS });
        assert!(render);
        assert_eq!(state.canvas(), CANVAS);

        let token = define(&mut state, "happy");
        deliver(&mut state, token, definition_result(vec![]));

        assert_eq!(state.definition_overlay().unwrap().y, 156.0);
    }

    #[test]
    fn resizing_to_the_same_canvas_does_not_render() {
        let mut state = SessionState::default();
        handle_event(&mut state, &ctx(), Event::CanvasResized { canvas: CANVAS });
        let (render, actions) = handle_event(&mut state, &ctx(), Event::CanvasResized { canvas: CANVAS });
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn long_press_on_result_bubble_defines_its_word() {
        let mut state = browsing("happy", &[("glad", 0.9)]);
        let glad = state.bubbles()[0].id;

        let (render, _) = handle_event(&mut state, &ctx(), Event::LongPressBegan { target: glad });
        assert!(render);
        assert_eq!(state.scale_target(), Some(glad));

        let (_, actions) = handle_event(
            &mut state,
            &ctx(),
            Event::LongPressReleased {
                target: glad,
                anchor: Point::new(10.0, 0.0),
            },
        );
        assert!(matches!(&actions[..], [Action::FetchDefinition { word, .. }] if word == "glad"));

        let token = match &actions[0] {
            Action::FetchDefinition { token, .. } => *token,
            _ => unreachable!(),
        };
        deliver(&mut state, token, Err(LookupError::Transport("offline".into())));
        assert!(state.scale_target().is_none());
    }

    #[test]
    fn center_long_press_requires_browsing() {
        let mut state = SessionState::default();
        let (render, _) = handle_event(&mut state, &ctx(), Event::LongPressBegan { target: BubbleId::CENTER });
        assert!(!render);
        assert!(state.scale_target().is_none());

        let (_, actions) = handle_event(
            &mut state,
            &ctx(),
            Event::LongPressReleased {
                target: BubbleId::CENTER,
                anchor: Point::default(),
            },
        );
        assert!(actions.is_empty());

        let mut state = browsing("happy", &[("glad", 0.9)]);
        let (_, actions) = handle_event(
            &mut state,
            &ctx(),
            Event::LongPressReleased {
                target: BubbleId::CENTER,
                anchor: Point::default(),
            },
        );
        assert!(matches!(&actions[..], [Action::FetchDefinition { word, .. }] if word == "happy"));
    }

    #[test]
    fn long_press_on_unknown_bubble_is_ignored() {
        let mut state = browsing("happy", &[("glad", 0.9)]);
        handle_event(&mut state, &ctx(), Event::LongPressBegan { target: BubbleId(999) });
        assert!(state.scale_target().is_none());
        assert!(state.invariant_violation().is_none());
    }

    #[test]
    fn cancelled_long_press_clears_feedback() {
        let mut state = browsing("happy", &[("glad", 0.9)]);
        let glad = state.bubbles()[0].id;
        handle_event(&mut state, &ctx(), Event::LongPressBegan { target: glad });
        let (render, _) = handle_event(&mut state, &ctx(), Event::LongPressCancelled);
        assert!(render);
        assert!(state.scale_target().is_none());
    }
}
