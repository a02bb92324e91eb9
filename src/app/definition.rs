//! Long-press-to-define workflow.

use super::actions::Action;
use super::handler::HandlerContext;
use super::state::{DefinitionOverlay, RequestToken, SessionState, DEFINITION_UNAVAILABLE};
use crate::client::LookupError;
use crate::domain::{BubbleId, DefinitionEntry, Point};

/// Starts shrink feedback on `target` if it can be defined.
pub(super) fn press(state: &mut SessionState, target: BubbleId) -> bool {
    if !state.is_pressable(target) {
        tracing::debug!(%target, "long press on unknown target ignored");
        return false;
    }
    state.scale_target = Some(target);
    true
}

/// Resolves a released long press to a word and defines it.
pub(super) fn release(state: &mut SessionState, target: BubbleId, anchor: Point) -> Vec<Action> {
    let word = state
        .is_pressable(target)
        .then(|| state.word_for(target))
        .flatten()
        .map(str::to_string);

    match word {
        Some(word) => define(state, &word, anchor),
        None => {
            tracing::debug!(%target, "long press released on unknown target");
            state.scale_target = None;
            vec![]
        }
    }
}

/// Looks up `word` and shows its first definition next to `anchor`.
pub(super) fn define(state: &mut SessionState, word: &str, anchor: Point) -> Vec<Action> {
    let token = state.definition_epoch.issue();
    state.loading_definition = true;
    state.definition_overlay = None;
    state.definition_notice = None;

    tracing::debug!(%token, word, "defining");
    vec![Action::FetchDefinition {
        token,
        word: word.to_string(),
        anchor,
    }]
}

/// Applies a definition lookup result.
pub(super) fn definition_loaded(
    state: &mut SessionState,
    ctx: &HandlerContext,
    token: RequestToken,
    word: &str,
    anchor: Point,
    result: Result<Vec<DefinitionEntry>, LookupError>,
) {
    match result.as_deref().map(<[DefinitionEntry]>::first) {
        Ok(Some(entry)) => {
            state.definition_overlay = Some(DefinitionOverlay {
                word: word.to_string(),
                text: entry.display_text(),
                anchor,
                y: ctx.placer.place_overlay(anchor.y, state.canvas.height),
            });
        }
        Ok(None) => {
            tracing::debug!(%token, word, "no dictionary entry");
            state.definition_overlay = None;
            state.definition_notice = Some(DEFINITION_UNAVAILABLE.to_string());
        }
        Err(err) => {
            tracing::warn!(%token, word, error = %err, "definition lookup failed");
            state.definition_overlay = None;
            state.definition_notice = Some(DEFINITION_UNAVAILABLE.to_string());
        }
    }

    state.loading_definition = false;
    state.scale_target = None;
}
