//! Scroll-reveal model shared between the server and the browser.
//!
//! Sections fade in the first time they enter the viewport. The server
//! renders each animated block with `data-reveal-*` attributes; the
//! browser script (`static/js/reveal.js`) observes the block and flips it
//! to visible exactly once. The latch logic lives here so the contract is
//! testable without a browser: visibility is one-way, and a browser
//! without `IntersectionObserver` shows everything immediately.

use std::fmt;

use serde::Serialize;

/// Fraction of an element that must be in the viewport before it reveals.
pub const DEFAULT_THRESHOLD: f32 = 0.1;

/// Milliseconds of extra delay added per column in a staggered grid.
pub const COLUMN_STAGGER_MS: u32 = 100;

/// Milliseconds of extra delay added per row within a column.
pub const ROW_STAGGER_MS: u32 = 150;

// =============================================================================
// Threshold
// =============================================================================

/// Visibility threshold for triggering a reveal, kept inside `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Threshold(f32);

impl Threshold {
    /// Create a threshold, clamping out-of-range values.
    ///
    /// Values below 0.0 clamp to 0.0, above 1.0 clamp to 1.0. A NaN input
    /// falls back to the default so a bad value can never disable reveals.
    #[must_use]
    pub fn new(fraction: f32) -> Self {
        if fraction.is_nan() {
            return Self::default();
        }
        Self(fraction.clamp(0.0, 1.0))
    }

    /// Returns the threshold as a fraction in `0.0..=1.0`.
    #[must_use]
    pub const fn fraction(self) -> f32 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Visibility latch
// =============================================================================

/// Whether a block has revealed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatchState {
    /// Still waiting for the element to intersect the viewport.
    Hidden,
    /// Revealed. The latch never returns to `Hidden`.
    Visible,
}

/// One-way visibility latch driven by intersection reports.
///
/// Mirrors the browser behavior: an element becomes visible the first
/// time enough of it intersects the viewport and stays visible from then
/// on, even when it later scrolls back out.
#[derive(Debug, Clone, Copy)]
pub struct VisibilityLatch {
    threshold: Threshold,
    state: LatchState,
}

impl VisibilityLatch {
    /// Create a latch that starts hidden.
    #[must_use]
    pub const fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            state: LatchState::Hidden,
        }
    }

    /// Create a latch for a browser without `IntersectionObserver`.
    ///
    /// Content must never be trapped invisible, so the latch starts out
    /// already visible.
    #[must_use]
    pub const fn unsupported(threshold: Threshold) -> Self {
        Self {
            threshold,
            state: LatchState::Visible,
        }
    }

    /// Feed an intersection report into the latch.
    ///
    /// `visible_fraction` is how much of the element currently intersects
    /// the viewport. Reaching the threshold latches the element visible;
    /// reports after that are ignored.
    pub fn observe(&mut self, visible_fraction: f32) {
        if self.state == LatchState::Visible {
            return;
        }
        if visible_fraction >= self.threshold.fraction() {
            self.state = LatchState::Visible;
        }
    }

    /// Current latch state.
    #[must_use]
    pub const fn state(&self) -> LatchState {
        self.state
    }

    /// Returns `true` once the element has revealed.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        matches!(self.state, LatchState::Visible)
    }
}

// =============================================================================
// Reveal view model
// =============================================================================

/// Slide direction for the hidden state of a reveal block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealDirection {
    /// Starts shifted down, slides up into place.
    Up,
    /// Starts shifted up, slides down into place.
    Down,
}

impl RevealDirection {
    /// Value rendered into the `data-reveal-direction` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for RevealDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-block reveal settings rendered as `data-reveal-*` attributes.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Reveal {
    delay_ms: u32,
    direction: RevealDirection,
    threshold: Threshold,
}

impl Reveal {
    /// A reveal with an explicit delay and direction.
    #[must_use]
    pub fn new(delay_ms: u32, direction: RevealDirection) -> Self {
        Self {
            delay_ms,
            direction,
            threshold: Threshold::default(),
        }
    }

    /// Reveal settings for a cell of a column grid.
    ///
    /// Each column adds 100 ms and each row inside a column adds 150 ms,
    /// so cells cascade diagonally. Even columns slide up, odd columns
    /// slide down.
    #[must_use]
    pub fn staggered(column: u32, row: u32) -> Self {
        let direction = if column % 2 == 0 {
            RevealDirection::Up
        } else {
            RevealDirection::Down
        };
        Self::new(column * COLUMN_STAGGER_MS + row * ROW_STAGGER_MS, direction)
    }

    /// Override the visibility threshold.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = threshold;
        self
    }

    /// Delay in milliseconds before the transition starts.
    #[must_use]
    pub const fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Slide direction while hidden.
    #[must_use]
    pub const fn direction(&self) -> RevealDirection {
        self.direction
    }

    /// Visibility threshold for this block.
    #[must_use]
    pub const fn threshold(&self) -> Threshold {
        self.threshold
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_default_is_ten_percent() {
        assert!((Threshold::default().fraction() - 0.1).abs() < f32::EPSILON);
    }

    #[test]
    fn test_threshold_clamps_out_of_range() {
        assert!((Threshold::new(-0.5).fraction()).abs() < f32::EPSILON);
        assert!((Threshold::new(3.0).fraction() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_threshold_nan_falls_back_to_default() {
        let threshold = Threshold::new(f32::NAN);
        assert!((threshold.fraction() - DEFAULT_THRESHOLD).abs() < f32::EPSILON);
    }

    #[test]
    fn test_latch_starts_hidden() {
        let latch = VisibilityLatch::new(Threshold::default());
        assert_eq!(latch.state(), LatchState::Hidden);
        assert!(!latch.is_visible());
    }

    #[test]
    fn test_latch_stays_hidden_below_threshold() {
        let mut latch = VisibilityLatch::new(Threshold::default());
        latch.observe(0.05);
        assert!(!latch.is_visible());
    }

    #[test]
    fn test_latch_flips_at_exact_threshold() {
        let mut latch = VisibilityLatch::new(Threshold::default());
        latch.observe(0.1);
        assert!(latch.is_visible());
    }

    #[test]
    fn test_latch_never_retracts() {
        let mut latch = VisibilityLatch::new(Threshold::default());
        latch.observe(0.5);
        assert!(latch.is_visible());

        // Scrolling the element back out of the viewport reports 0.0.
        latch.observe(0.0);
        assert!(latch.is_visible());
    }

    #[test]
    fn test_latch_zero_threshold_reveals_on_any_report() {
        let mut latch = VisibilityLatch::new(Threshold::new(0.0));
        latch.observe(0.0);
        assert!(latch.is_visible());
    }

    #[test]
    fn test_unsupported_browser_shows_content() {
        let latch = VisibilityLatch::unsupported(Threshold::default());
        assert!(latch.is_visible());
    }

    #[test]
    fn test_direction_attribute_values() {
        assert_eq!(RevealDirection::Up.as_str(), "up");
        assert_eq!(RevealDirection::Down.as_str(), "down");
    }

    #[test]
    fn test_staggered_first_cell_has_no_delay() {
        let reveal = Reveal::staggered(0, 0);
        assert_eq!(reveal.delay_ms(), 0);
        assert_eq!(reveal.direction(), RevealDirection::Up);
    }

    #[test]
    fn test_staggered_delay_cascades_by_column_and_row() {
        assert_eq!(Reveal::staggered(0, 1).delay_ms(), 150);
        assert_eq!(Reveal::staggered(1, 0).delay_ms(), 100);
        assert_eq!(Reveal::staggered(2, 1).delay_ms(), 350);
    }

    #[test]
    fn test_staggered_odd_columns_slide_down() {
        assert_eq!(Reveal::staggered(1, 0).direction(), RevealDirection::Down);
        assert_eq!(Reveal::staggered(2, 0).direction(), RevealDirection::Up);
    }

    #[test]
    fn test_with_threshold_overrides_default() {
        let reveal = Reveal::new(0, RevealDirection::Up).with_threshold(Threshold::new(0.25));
        assert!((reveal.threshold().fraction() - 0.25).abs() < f32::EPSILON);
    }
}
