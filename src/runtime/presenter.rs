//! Presentation hook for animations and input focus.

use crate::app::AnimationBatch;
use futures_util::future::BoxFuture;

/// Plays animation batches and owns keyboard focus.
///
/// The future returned by [`Presenter::animate`] resolves once the batch has
/// visually settled; the session then reports completion to the state machine.
/// Implementations must resolve it eventually, even when the batch is empty.
pub trait Presenter: Send + Sync {
    fn animate(&self, batch: &AnimationBatch) -> BoxFuture<'static, ()>;

    /// Moves focus to the central text input. No-op by default.
    fn focus_input(&self) {}
}

/// Headless presenter that waits out each batch's settle time.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimedPresenter;

impl Presenter for TimedPresenter {
    fn animate(&self, batch: &AnimationBatch) -> BoxFuture<'static, ()> {
        Box::pin(tokio::time::sleep(batch.settle_time()))
    }
}

/// Presenter that completes every animation immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantPresenter;

impl Presenter for InstantPresenter {
    fn animate(&self, _batch: &AnimationBatch) -> BoxFuture<'static, ()> {
        Box::pin(std::future::ready(()))
    }
}
