//! Actions representing side effects to be executed by the session runtime.
//!
//! This module defines the [`Action`] type, the imperative commands produced by
//! the event handler. Actions bridge pure state transitions and effectful work
//! such as network lookups and animations. Every effect that completes later
//! carries the [`RequestToken`] of the workflow that requested it, so its
//! completion can be recognised as current or stale.
//!
//! # Example
//!
//! ```rust
//! use synoscope::app::{Action, Timing};
//!
//! let timing = Timing::default();
//! assert_eq!(timing.stagger().as_millis(), 30);
//! let actions: Vec<Action> = vec![Action::FocusInput];
//! assert_eq!(actions.len(), 1);
//! ```

use super::modes::AnimationPhase;
use super::state::RequestToken;
use crate::domain::{BubbleId, Point};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Animation timing parameters, in milliseconds.
///
/// These describe how the presentation should move bubbles. The state machine
/// never sleeps on them; it waits for the presenter's completion signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Collapse of the previous cluster before a new search.
    pub collapse_ms: u64,
    /// Collapse of the cluster before returning to editing.
    pub reset_collapse_ms: u64,
    /// Pause before the first bubble starts expanding.
    pub entrance_delay_ms: u64,
    /// Extra delay per result rank during the expansion.
    pub stagger_ms: u64,
    /// Duration of a single bubble's expansion.
    pub expand_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            collapse_ms: 200,
            reset_collapse_ms: 300,
            entrance_delay_ms: 100,
            stagger_ms: 30,
            expand_ms: 450,
        }
    }
}

impl Timing {
    #[must_use]
    pub const fn collapse(&self) -> Duration {
        Duration::from_millis(self.collapse_ms)
    }

    #[must_use]
    pub const fn reset_collapse(&self) -> Duration {
        Duration::from_millis(self.reset_collapse_ms)
    }

    #[must_use]
    pub const fn entrance_delay(&self) -> Duration {
        Duration::from_millis(self.entrance_delay_ms)
    }

    #[must_use]
    pub const fn stagger(&self) -> Duration {
        Duration::from_millis(self.stagger_ms)
    }

    #[must_use]
    pub const fn expand(&self) -> Duration {
        Duration::from_millis(self.expand_ms)
    }

    /// Start delay of the bubble at `rank` in the expansion cascade.
    #[must_use]
    pub fn expand_delay(&self, rank: usize) -> Duration {
        let rank = u32::try_from(rank).unwrap_or(u32::MAX);
        self.entrance_delay() + self.stagger().saturating_mul(rank)
    }
}

/// Interpolation curve for a bubble move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    EaseInOut,
    Spring { response: f64, damping: f64 },
}

impl Easing {
    /// The springy curve used for the entrance cascade.
    pub const ENTRANCE: Self = Self::Spring {
        response: 0.5,
        damping: 0.7,
    };
}

/// One bubble travelling from `from` to `to`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BubbleMove {
    pub id: BubbleId,
    pub from: Point,
    pub to: Point,
    pub delay: Duration,
    pub duration: Duration,
    pub easing: Easing,
}

/// A set of moves that belong to one visual transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationBatch {
    pub token: RequestToken,
    pub phase: AnimationPhase,
    pub moves: Vec<BubbleMove>,
}

impl AnimationBatch {
    /// Time until the last move of the batch has finished.
    #[must_use]
    pub fn settle_time(&self) -> Duration {
        self.moves
            .iter()
            .map(|m| m.delay + m.duration)
            .max()
            .unwrap_or_default()
    }
}

/// Commands representing side effects to be executed by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Plays an animation batch. The runtime reports
    /// [`Event::AnimationFinished`](super::Event::AnimationFinished) with the
    /// batch's token and phase once the presenter signals completion.
    Animate(AnimationBatch),

    /// Looks up related words. Completes with
    /// [`Event::SynonymsLoaded`](super::Event::SynonymsLoaded).
    FetchSynonyms { token: RequestToken, word: String },

    /// Looks up a definition. Completes with
    /// [`Event::DefinitionLoaded`](super::Event::DefinitionLoaded).
    FetchDefinition {
        token: RequestToken,
        word: String,
        anchor: Point,
    },

    /// Moves keyboard focus to the central text input.
    FocusInput,
}
