//! Text rendering of the session view for the interactive shell.
//!
//! ```text
//! SessionState → view → SessionView → render → text
//! ```
//!
//! # Example
//!
//! ```rust
//! use synoscope::layout::RelevanceSizer;
//! use synoscope::ui::render;
//! use synoscope::SessionState;
//!
//! let state = SessionState::default();
//! let text = render(&state.view(&RelevanceSizer::default()));
//! assert!(text.starts_with("[editing]"));
//! ```

pub mod renderer;

pub use renderer::{render, render_history};
