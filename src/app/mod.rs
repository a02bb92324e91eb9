//! Application layer coordinating state, events, and actions.
//!
//! This module is the session state machine. It sits between the runtime
//! (which owns in-flight tasks and talks to the network and the presenter) and
//! the domain layer, and it never performs I/O itself.
//!
//! # Architecture
//!
//! ```text
//! Gestures → Events → Event Handler → State Mutations → Actions → Runtime tasks
//!                          ↑                                          ↓
//!                          └───────────── Completion events ──────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands and animation descriptions
//! - [`handler`]: Event processing and the single mutation entry point
//! - [`modes`]: Mode, search status and animation phase types
//! - [`placer`]: Definition overlay placement
//! - [`state`]: Central session state container and request tokens
//! - [`view`]: Render-ready projection of the state

pub mod actions;
mod definition;
pub mod handler;
pub mod modes;
pub mod placer;
mod search;
pub mod state;
pub mod view;

pub use actions::{Action, AnimationBatch, BubbleMove, Easing, Timing};
pub use handler::{handle_event, Event, HandlerContext};
pub use modes::{AnimationPhase, Mode, SearchStatus};
pub use placer::PositionPlacer;
pub use state::{DefinitionOverlay, RequestToken, SessionState};
pub use view::{BubbleView, CenterView, SessionView};
