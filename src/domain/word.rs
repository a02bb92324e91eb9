//! Word, bubble and canvas geometry types.
//!
//! These are the plain data entities shared by the state machine, the layout
//! collaborators and the presentation projection. None of them carry behaviour
//! beyond small constructors and geometric helpers.

use serde::{Deserialize, Serialize};

/// A point on the canvas, in presentation units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size of the drawing surface the bubble cluster is laid out on.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the center of the canvas, where the query bubble sits and where
    /// every collapse animation converges.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A word together with its relevance to the current query.
///
/// `relevance` is always kept inside `[0, 1]`. `size_override` is only used for
/// the editing placeholder, where it pins the rendered radius to the size of
/// the previously searched word so the placeholder does not visibly pop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedWord {
    pub text: String,
    pub relevance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_override: Option<f64>,
}

impl WeightedWord {
    /// Creates a weighted word, clamping `relevance` into `[0, 1]`.
    ///
    /// Non-finite relevance values are treated as zero.
    ///
    /// ```
    /// use synoscope::domain::WeightedWord;
    ///
    /// assert_eq!(WeightedWord::new("glad", 1.4).relevance, 1.0);
    /// assert_eq!(WeightedWord::new("glad", f64::NAN).relevance, 0.0);
    /// ```
    #[must_use]
    pub fn new(text: impl Into<String>, relevance: f64) -> Self {
        let relevance = if relevance.is_finite() {
            relevance.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            text: text.into(),
            relevance,
            size_override: None,
        }
    }

    #[must_use]
    pub fn with_size_override(mut self, size: Option<f64>) -> Self {
        self.size_override = size;
        self
    }
}

/// Opaque bubble identifier.
///
/// Identifiers are handed out by the session state and never reused within a
/// process. [`BubbleId::CENTER`] is reserved for the central query bubble (or
/// the editing placeholder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BubbleId(pub u64);

impl BubbleId {
    /// Fixed identifier of the central bubble.
    pub const CENTER: Self = Self(0);

    #[must_use]
    pub const fn is_center(self) -> bool {
        self.0 == Self::CENTER.0
    }
}

impl std::fmt::Display for BubbleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A result word placed on the canvas.
///
/// `id` is stable for the lifetime of one result set; moving a bubble mutates
/// `position` only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedBubble {
    pub id: BubbleId,
    pub item: WeightedWord,
    pub position: Point,
}

/// Where the layout collaborator wants a word to end up.
///
/// Identity is assigned by the session state when placements become bubbles,
/// so layouts never need to know about the reserved central id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub item: WeightedWord,
    pub target: Point,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_half_of_each_dimension() {
        let canvas = CanvasSize::new(390.0, 844.0);
        assert_eq!(canvas.center(), Point::new(195.0, 422.0));
    }

    #[test]
    fn relevance_is_clamped() {
        assert_eq!(WeightedWord::new("a", -0.2).relevance, 0.0);
        assert_eq!(WeightedWord::new("a", 0.35).relevance, 0.35);
        assert_eq!(WeightedWord::new("a", f64::INFINITY).relevance, 0.0);
    }

    #[test]
    fn center_id_is_reserved() {
        assert!(BubbleId::CENTER.is_center());
        assert!(!BubbleId(7).is_center());
        assert_eq!(BubbleId(7).to_string(), "#7");
    }
}
