//! Search workflow: submit, drill-down and reset.
//!
//! Each step is a plain state transition. Suspension points (the collapse
//! animation, the related-word lookup, the entrance animation) are expressed
//! as actions, and the matching completion events re-enter here through the
//! handler. Every step after the first checks its [`RequestToken`] against the
//! search epoch, so a later submit or reset silently supersedes it.

use super::actions::{Action, AnimationBatch, BubbleMove, Easing};
use super::handler::HandlerContext;
use super::modes::{AnimationPhase, Mode, SearchStatus};
use super::state::{RequestToken, SessionState};
use crate::client::LookupError;
use crate::domain::{CanvasSize, WeightedWord};

/// Starts a search for `word`.
///
/// Shared by committing typed text, tapping a result bubble and picking a
/// history entry.
pub(super) fn submit(
    state: &mut SessionState,
    ctx: &HandlerContext,
    word: &str,
    canvas: CanvasSize,
) -> Vec<Action> {
    let word = word.trim();
    let token = state.search_epoch.issue();
    state.definition_epoch.issue();
    state.canvas = canvas;

    state.query = word.to_string();
    state.status = None;
    state.searching = false;
    state.definition_overlay = None;
    state.definition_notice = None;
    state.loading_definition = false;
    state.scale_target = None;

    if !word.is_empty() && state.history.record(word) {
        tracing::debug!(word, entries = state.history.len(), "recorded in history");
    }

    if state.bubbles.is_empty() {
        return after_collapse(state, token);
    }

    tracing::debug!(%token, bubbles = state.bubbles.len(), "collapsing previous results");
    let moves = state.converge_on(canvas.center(), ctx.timing.collapse());
    vec![Action::Animate(AnimationBatch {
        token,
        phase: AnimationPhase::Collapse,
        moves,
    })]
}

/// Second step of [`submit`]: the old cluster is gone, fetch the new one.
pub(super) fn after_collapse(state: &mut SessionState, token: RequestToken) -> Vec<Action> {
    state.clear_bubbles();
    state.mode = Mode::Browsing;

    if state.query.is_empty() {
        tracing::debug!(%token, "empty submit, back to editing");
        state.mode = Mode::Editing;
        return vec![];
    }

    state.searching = true;
    vec![Action::FetchSynonyms {
        token,
        word: state.query.clone(),
    }]
}

/// Third step of [`submit`]: lay out the results or show why there are none.
pub(super) fn synonyms_loaded(
    state: &mut SessionState,
    ctx: &HandlerContext,
    token: RequestToken,
    word: &str,
    result: Result<Vec<WeightedWord>, LookupError>,
) -> Vec<Action> {
    state.searching = false;

    let words = match result {
        Ok(words) if !words.is_empty() => words,
        Ok(_) => {
            tracing::debug!(word, "no related words");
            state.status = Some(SearchStatus::WordNotFound);
            return vec![];
        }
        Err(err) => {
            tracing::warn!(word, error = %err, "related-word lookup failed");
            state.status = Some(match err {
                LookupError::Status(_) => SearchStatus::WordNotFound,
                LookupError::Transport(_) | LookupError::Decode(_) => SearchStatus::ConnectionFailed,
            });
            return vec![];
        }
    };

    state.query = word.to_string();
    let center = state.canvas.center();
    let placements = ctx.layout.layout(state.canvas, word, &words);
    let ids = state.spawn_bubbles(&placements, center);

    let moves: Vec<BubbleMove> = ids
        .iter()
        .zip(&placements)
        .enumerate()
        .map(|(rank, (id, placement))| BubbleMove {
            id: *id,
            from: center,
            to: placement.target,
            delay: ctx.timing.expand_delay(rank),
            duration: ctx.timing.expand(),
            easing: Easing::ENTRANCE,
        })
        .collect();

    for (bubble, placement) in state.bubbles.iter_mut().zip(&placements) {
        bubble.position = placement.target;
    }

    tracing::debug!(word, bubbles = moves.len(), "expanding results");
    vec![Action::Animate(AnimationBatch {
        token,
        phase: AnimationPhase::Expand,
        moves,
    })]
}

/// Final step of [`submit`]: the entrance cascade has settled.
pub(super) fn after_expand(state: &mut SessionState) {
    let ids: Vec<_> = state.bubbles.iter().map(|b| b.id).collect();
    state.revealed.extend(ids);
}

/// Returns from browsing to an empty editing placeholder.
///
/// Ignored outside browsing mode. Supersedes any in-flight search or
/// definition.
pub(super) fn reset(state: &mut SessionState, ctx: &HandlerContext, canvas: CanvasSize) -> Vec<Action> {
    if state.mode != Mode::Browsing {
        tracing::debug!("reset ignored outside browsing mode");
        return vec![];
    }

    let token = state.search_epoch.issue();
    state.definition_epoch.issue();
    state.canvas = canvas;
    state.searching = false;
    state.loading_definition = false;
    state.definition_overlay = None;
    state.definition_notice = None;

    if state.bubbles.is_empty() {
        return after_reset_collapse(state, ctx);
    }

    let moves = state.converge_on(canvas.center(), ctx.timing.reset_collapse());
    vec![Action::Animate(AnimationBatch {
        token,
        phase: AnimationPhase::ResetCollapse,
        moves,
    })]
}

/// Second step of [`reset`].
pub(super) fn after_reset_collapse(state: &mut SessionState, ctx: &HandlerContext) -> Vec<Action> {
    state.clear_bubbles();
    state.scale_target = None;
    state.pinned_placeholder_size = Some(ctx.sizer.radius(&WeightedWord::new(state.label(), 1.0)));
    state.query.clear();
    state.status = None;
    state.mode = Mode::Editing;
    tracing::debug!(pinned = ?state.pinned_placeholder_size, "reset to editing");
    vec![Action::FocusInput]
}
