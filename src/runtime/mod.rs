//! Async runtime around the state machine.
//!
//! [`Session`] is the single scheduler: it applies every event to the state in
//! order and turns the handler's actions into tokio tasks. The [`Presenter`]
//! is the seam to whatever draws the bubbles.
//!
//! # Example
//!
//! ```rust,no_run
//! use synoscope::runtime::Session;
//! use synoscope::Config;
//!
//! # async fn demo() -> synoscope::Result<()> {
//! let mut session = Session::from_config(&Config::default())?;
//! session.submit("happy");
//! session.settle().await;
//! println!("{} related words", session.state().bubbles().len());
//! # Ok(())
//! # }
//! ```

mod presenter;
mod session;

pub use presenter::{InstantPresenter, Presenter, TimedPresenter};
pub use session::{Session, DEFAULT_CANVAS};
