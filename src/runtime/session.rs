//! The session driver: one owner of the state, one scheduler for every effect.

use super::presenter::{Presenter, TimedPresenter};
use crate::app::{handle_event, Action, Event, HandlerContext, SessionState, SessionView};
use crate::client::{DefinitionClient, HttpDefinitionClient, HttpSynonymClient, SynonymClient};
use crate::domain::{BubbleId, CanvasSize, Point, Result};
use crate::layout::{RelevanceSizer, RingLayout};
use crate::Config;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::Instrument;

/// Canvas used until the presentation reports a real size.
pub const DEFAULT_CANVAS: CanvasSize = CanvasSize::new(390.0, 844.0);

/// Owns [`SessionState`] and runs the effects its handler asks for.
///
/// Every gesture goes through [`Session::dispatch`]. Lookups and animations
/// become tasks in a [`JoinSet`]; each resolves to a completion [`Event`] that
/// [`Session::next`] feeds back into the handler. Tasks are never aborted by
/// later gestures, their completions are simply recognised as stale.
pub struct Session {
    state: SessionState,
    ctx: HandlerContext,
    synonyms: Arc<dyn SynonymClient>,
    definitions: Arc<dyn DefinitionClient>,
    presenter: Arc<dyn Presenter>,
    tasks: JoinSet<Event>,
}

impl Session {
    #[must_use]
    pub fn new(
        state: SessionState,
        ctx: HandlerContext,
        synonyms: Arc<dyn SynonymClient>,
        definitions: Arc<dyn DefinitionClient>,
    ) -> Self {
        let mut session = Self {
            state,
            ctx,
            synonyms,
            definitions,
            presenter: Arc::new(TimedPresenter),
            tasks: JoinSet::new(),
        };
        if session.canvas() == CanvasSize::default() {
            session.set_canvas(DEFAULT_CANVAS);
        }
        session
    }

    /// Builds a session with HTTP clients and the default layout.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be constructed.
    pub fn from_config(config: &Config) -> Result<Self> {
        let sizer = RelevanceSizer::default();
        let ctx = HandlerContext::new(Arc::new(RingLayout::new(sizer)), Arc::new(sizer))
            .with_timing(config.timing);
        Ok(Self::new(
            SessionState::new(config.history_capacity),
            ctx,
            Arc::new(HttpSynonymClient::new(config)?),
            Arc::new(HttpDefinitionClient::new(config)?),
        ))
    }

    #[must_use]
    pub fn with_presenter(mut self, presenter: Arc<dyn Presenter>) -> Self {
        self.presenter = presenter;
        self
    }

    #[must_use]
    pub fn with_canvas(mut self, canvas: CanvasSize) -> Self {
        self.set_canvas(canvas);
        self
    }

    /// Reports the presentation's size; later layouts and overlay
    /// placement use it.
    pub fn set_canvas(&mut self, canvas: CanvasSize) {
        self.dispatch(Event::CanvasResized { canvas });
    }

    #[must_use]
    pub const fn canvas(&self) -> CanvasSize {
        self.state.canvas()
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn view(&self) -> SessionView {
        self.state.view(self.ctx.sizer.as_ref())
    }

    /// Number of lookups and animations still in flight.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Runs one event through the handler and starts the resulting effects.
    ///
    /// Returns whether the presentation should re-render. Must be called from
    /// within a tokio runtime.
    pub fn dispatch(&mut self, event: Event) -> bool {
        let (render, actions) = handle_event(&mut self.state, &self.ctx, event);
        for action in actions {
            self.execute(action);
        }
        if let Some(violation) = self.state.invariant_violation() {
            tracing::error!(violation, "session invariant broken");
        }
        render
    }

    fn execute(&mut self, action: Action) {
        let span = tracing::Span::current();
        match action {
            Action::Animate(batch) => {
                let done = self.presenter.animate(&batch);
                let (token, phase) = (batch.token, batch.phase);
                self.tasks.spawn(
                    async move {
                        done.await;
                        Event::AnimationFinished { token, phase }
                    }
                    .instrument(span),
                );
            }
            Action::FetchSynonyms { token, word } => {
                let client = Arc::clone(&self.synonyms);
                self.tasks.spawn(
                    async move {
                        let result = client.lookup(&word).await;
                        Event::SynonymsLoaded { token, word, result }
                    }
                    .instrument(span),
                );
            }
            Action::FetchDefinition { token, word, anchor } => {
                let client = Arc::clone(&self.definitions);
                self.tasks.spawn(
                    async move {
                        let result = client.lookup(&word).await;
                        Event::DefinitionLoaded {
                            token,
                            word,
                            anchor,
                            result,
                        }
                    }
                    .instrument(span),
                );
            }
            Action::FocusInput => self.presenter.focus_input(),
        }
    }

    /// Waits for the next in-flight task and feeds its completion back.
    ///
    /// Returns `None` when nothing is in flight, otherwise whether the
    /// completion asked for a re-render.
    pub async fn next(&mut self) -> Option<bool> {
        loop {
            match self.tasks.join_next().await? {
                Ok(event) => return Some(self.dispatch(event)),
                Err(err) => tracing::warn!(error = %err, "session task did not complete"),
            }
        }
    }

    /// Drives every in-flight task, and everything they trigger, to completion.
    pub async fn settle(&mut self) {
        while self.next().await.is_some() {}
    }

    /// Commits `word` as the new query.
    pub fn submit(&mut self, word: &str) -> bool {
        self.dispatch(Event::Submit {
            word: word.to_string(),
            canvas: self.canvas(),
        })
    }

    /// Taps the central label: back to editing when browsing.
    pub fn reset(&mut self) -> bool {
        self.dispatch(Event::CenterTapped { canvas: self.canvas() })
    }

    pub fn define(&mut self, word: &str, anchor: Point) -> bool {
        self.dispatch(Event::Define {
            word: word.to_string(),
            anchor,
        })
    }

    /// Drills down into a result bubble.
    pub fn select_bubble(&mut self, id: BubbleId) -> bool {
        self.dispatch(Event::BubbleSelected {
            id,
            canvas: self.canvas(),
        })
    }

    /// Searches the history entry at `index` (0 = most recent).
    pub fn select_history(&mut self, index: usize) -> bool {
        let Some(word) = self.state.history().get(index).map(|entry| entry.word.clone()) else {
            tracing::debug!(index, "no history entry at index");
            return false;
        };
        self.dispatch(Event::HistorySelected {
            word,
            canvas: self.canvas(),
        })
    }

    pub fn type_text(&mut self, text: &str) -> bool {
        self.dispatch(Event::InputChanged {
            text: text.to_string(),
        })
    }

    /// A complete long press on `target`, released at `anchor`.
    pub fn long_press(&mut self, target: BubbleId, anchor: Point) -> bool {
        let began = self.dispatch(Event::LongPressBegan { target });
        self.dispatch(Event::LongPressReleased { target, anchor }) || began
    }

    pub fn dismiss_overlay(&mut self) -> bool {
        self.dispatch(Event::DismissOverlay)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("ctx", &self.ctx)
            .field("pending", &self.tasks.len())
            .field("canvas", &self.state.canvas())
            .finish_non_exhaustive()
    }
}
