//! Domain layer for Synoscope.
//!
//! This module contains the core data types of the word explorer, independent
//! of the state machine, the network clients and presentation concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`word`]: Weighted words, bubbles and canvas geometry
//! - [`history`]: Search history with uniqueness and eviction rules
//! - [`definition`]: Dictionary entries and first-definition extraction
//!
//! # Examples
//!
//! ```
//! use synoscope::domain::{CanvasSize, WeightedWord};
//!
//! let word = WeightedWord::new("glad", 0.9);
//! let canvas = CanvasSize::new(400.0, 800.0);
//! assert_eq!(canvas.center().x, 200.0);
//! assert_eq!(word.relevance, 0.9);
//! ```

pub mod definition;
pub mod error;
pub mod history;
pub mod word;

pub use definition::{Definition, DefinitionEntry, SenseGroup, NO_DEFINITION_FOUND};
pub use error::{Result, SynoscopeError};
pub use history::{History, HistoryEntry};
pub use word::{BubbleId, CanvasSize, Placement, Point, PositionedBubble, WeightedWord};
