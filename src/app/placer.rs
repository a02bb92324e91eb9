//! Vertical placement of the definition overlay.
//!
//! The overlay sits just below the bubble that anchored it, or just above when
//! there is not enough room below. Distances are measured from a fixed neutral
//! bubble radius rather than the anchoring bubble's real radius, so overlays
//! for small bubbles float slightly further away than strictly necessary.

/// Height reserved for the overlay panel.
pub const OVERLAY_HEIGHT: f64 = 140.0;

/// Radius assumed for the anchoring bubble.
pub const REFERENCE_RADIUS: f64 = 44.0;

/// Gap between the bubble edge and the overlay.
pub const OVERLAY_MARGIN: f64 = 12.0;

/// Computes the overlay's top edge for a given anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionPlacer {
    pub overlay_height: f64,
    pub reference_radius: f64,
    pub margin: f64,
}

impl Default for PositionPlacer {
    fn default() -> Self {
        Self {
            overlay_height: OVERLAY_HEIGHT,
            reference_radius: REFERENCE_RADIUS,
            margin: OVERLAY_MARGIN,
        }
    }
}

impl PositionPlacer {
    /// Returns the y coordinate of the overlay's top edge.
    ///
    /// Below the anchor when the whole overlay fits above `canvas_height`,
    /// above it otherwise. When neither side fits the result is clamped to the
    /// top of the canvas.
    ///
    /// ```
    /// use synoscope::app::PositionPlacer;
    ///
    /// let placer = PositionPlacer::default();
    /// assert_eq!(placer.place_overlay(100.0, 800.0), 156.0);
    /// assert_eq!(placer.place_overlay(700.0, 800.0), 504.0);
    /// ```
    #[must_use]
    pub fn place_overlay(&self, anchor_y: f64, canvas_height: f64) -> f64 {
        let clearance = self.reference_radius + self.margin;
        let below = anchor_y + clearance;
        if below + self.overlay_height > canvas_height {
            (anchor_y - clearance - self.overlay_height).max(0.0)
        } else {
            below
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn prefers_below() {
        let placer = PositionPlacer::default();
        assert_eq!(placer.place_overlay(0.0, 400.0), 56.0);
    }

    #[test]
    fn flips_above_near_bottom_edge() {
        let placer = PositionPlacer::default();
        // 300 + 56 + 140 = 496 > 480
        assert_eq!(placer.place_overlay(300.0, 480.0), 104.0);
    }

    #[test]
    fn exact_fit_below_is_kept() {
        let placer = PositionPlacer::default();
        assert_eq!(placer.place_overlay(104.0, 300.0), 160.0);
    }

    #[test]
    fn clamps_when_no_side_fits() {
        let placer = PositionPlacer::default();
        assert_eq!(placer.place_overlay(100.0, 200.0), 0.0);
    }

    proptest! {
        #[test]
        fn overlay_stays_in_bounds_when_a_fit_exists(
            height in 100.0f64..2000.0,
            fraction in 0.0f64..=1.0,
        ) {
            let placer = PositionPlacer::default();
            let anchor_y = height * fraction;
            let clearance = placer.reference_radius + placer.margin;
            let fits_below = anchor_y + clearance + placer.overlay_height <= height;
            let fits_above = anchor_y - clearance - placer.overlay_height >= 0.0;

            let y = placer.place_overlay(anchor_y, height);

            if fits_below || fits_above {
                prop_assert!(y >= 0.0);
                prop_assert!(y + placer.overlay_height <= height);
            }
        }
    }
}
