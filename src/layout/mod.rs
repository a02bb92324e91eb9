//! Layout and sizing collaborators.
//!
//! The state machine treats both as pure functions behind traits: given the
//! same inputs they must return the same output and have no side effects.
//! [`RingLayout`] and [`RelevanceSizer`] are small deterministic defaults used
//! by the binary; richer packing algorithms plug in through the same traits.

use crate::domain::{CanvasSize, Placement, Point, WeightedWord};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Turns a ranked list of words into on-canvas target positions.
///
/// Implementations return one [`Placement`] per input word, in input order.
pub trait LayoutProvider: Send + Sync {
    fn layout(&self, canvas: CanvasSize, origin: &str, words: &[WeightedWord]) -> Vec<Placement>;
}

/// Derives a bubble's visual radius from its word and relevance.
pub trait BubbleSizer: Send + Sync {
    fn radius(&self, word: &WeightedWord) -> f64;
}

/// Radius grows with relevance and never gets too small for its label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelevanceSizer {
    pub min_radius: f64,
    pub max_radius: f64,
    /// Approximate label width per character.
    pub char_width: f64,
    pub padding: f64,
}

impl Default for RelevanceSizer {
    fn default() -> Self {
        Self {
            min_radius: 26.0,
            max_radius: 56.0,
            char_width: 8.0,
            padding: 12.0,
        }
    }
}

impl BubbleSizer for RelevanceSizer {
    fn radius(&self, word: &WeightedWord) -> f64 {
        if let Some(size) = word.size_override {
            return size;
        }
        let by_relevance = self.min_radius + (self.max_radius - self.min_radius) * word.relevance;
        #[allow(clippy::cast_precision_loss)]
        let by_label = word.text.chars().count() as f64 * self.char_width / 2.0 + self.padding;
        by_relevance.max(by_label)
    }
}

/// Places words on concentric rings around the canvas center, in rank order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RingLayout {
    pub sizer: RelevanceSizer,
    pub gap: f64,
}

impl RingLayout {
    #[must_use]
    pub fn new(sizer: RelevanceSizer) -> Self {
        Self { sizer, gap: 10.0 }
    }
}

impl LayoutProvider for RingLayout {
    fn layout(&self, canvas: CanvasSize, origin: &str, words: &[WeightedWord]) -> Vec<Placement> {
        let center = canvas.center();
        let origin_radius = self.sizer.radius(&WeightedWord::new(origin, 1.0));
        let slot = self.sizer.max_radius.mul_add(2.0, self.gap);

        let mut placements = Vec::with_capacity(words.len());
        let mut remaining = words.iter();
        let mut ring = 0_u32;

        while placements.len() < words.len() {
            let ring_radius = origin_radius + self.gap + self.sizer.max_radius + f64::from(ring) * slot;
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let capacity = ((TAU * ring_radius) / slot).floor().max(1.0) as usize;
            let count = capacity.min(words.len() - placements.len());
            let offset = -FRAC_PI_2 + f64::from(ring) * 0.5;

            for (slot_index, word) in remaining.by_ref().take(count).enumerate() {
                #[allow(clippy::cast_precision_loss)]
                let angle = offset + TAU * slot_index as f64 / count as f64;
                let radius = self.sizer.radius(word);
                let target = Point::new(
                    clamp_axis(ring_radius.mul_add(angle.cos(), center.x), radius, canvas.width),
                    clamp_axis(ring_radius.mul_add(angle.sin(), center.y), radius, canvas.height),
                );
                placements.push(Placement {
                    item: word.clone(),
                    target,
                });
            }
            ring += 1;
        }

        placements
    }
}

fn clamp_axis(value: f64, radius: f64, extent: f64) -> f64 {
    if extent <= radius * 2.0 {
        return extent / 2.0;
    }
    value.clamp(radius, extent - radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> Vec<WeightedWord> {
        let n = u32::try_from(n).unwrap();
        (0..n)
            .map(|i| WeightedWord::new(format!("w{i}"), 1.0 - f64::from(i) / f64::from(n)))
            .collect()
    }

    #[test]
    fn sizer_honours_override() {
        let sizer = RelevanceSizer::default();
        let pinned = WeightedWord::new("anything", 0.1).with_size_override(Some(71.0));
        assert_eq!(sizer.radius(&pinned), 71.0);
    }

    #[test]
    fn more_relevant_words_are_larger() {
        let sizer = RelevanceSizer::default();
        assert!(sizer.radius(&WeightedWord::new("a", 0.9)) > sizer.radius(&WeightedWord::new("b", 0.2)));
    }

    #[test]
    fn long_labels_get_room() {
        let sizer = RelevanceSizer::default();
        let long = WeightedWord::new("incomprehensibilities", 0.0);
        assert!(sizer.radius(&long) > sizer.min_radius);
    }

    #[test]
    fn layout_is_deterministic_and_ordered() {
        let layout = RingLayout::new(RelevanceSizer::default());
        let canvas = CanvasSize::new(800.0, 800.0);
        let input = words(20);

        let first = layout.layout(canvas, "happy", &input);
        let second = layout.layout(canvas, "happy", &input);

        assert_eq!(first, second);
        assert_eq!(first.len(), 20);
        for (placement, word) in first.iter().zip(&input) {
            assert_eq!(&placement.item, word);
        }
    }

    #[test]
    fn placements_stay_on_canvas() {
        let layout = RingLayout::new(RelevanceSizer::default());
        let canvas = CanvasSize::new(390.0, 700.0);
        for placement in layout.layout(canvas, "happy", &words(40)) {
            assert!((0.0..=canvas.width).contains(&placement.target.x));
            assert!((0.0..=canvas.height).contains(&placement.target.y));
        }
    }

    #[test]
    fn empty_input_yields_no_placements() {
        let layout = RingLayout::default();
        assert!(layout.layout(CanvasSize::new(100.0, 100.0), "x", &[]).is_empty());
    }
}
