//! Scroll-triggered fade-in.
//!
//! Page sections start hidden and fade in when enough of them enters the
//! viewport. The browser reports intersection ratios; this decides what they
//! mean.

/// Default fraction of the element that must be visible.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Delay between consecutive cards in a staggered group.
pub const STAGGER_STEP_MS: u32 = 100;

/// Tracks whether an observed element has been revealed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTrigger {
    threshold: f64,
    trigger_once: bool,
    revealed: bool,
}

impl Default for RevealTrigger {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD, true)
    }
}

impl RevealTrigger {
    /// `threshold` is clamped to `0.0..=1.0`.
    pub fn new(threshold: f64, trigger_once: bool) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            trigger_once,
            revealed: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn trigger_once(&self) -> bool {
        self.trigger_once
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed an intersection ratio; returns whether the element should show.
    ///
    /// A zero ratio never counts as visible, even with a zero threshold.
    pub fn observe(&mut self, intersection_ratio: f64) -> bool {
        if self.revealed && self.trigger_once {
            return true;
        }
        let visible = intersection_ratio > 0.0 && intersection_ratio >= self.threshold;
        self.revealed = visible;
        visible
    }
}

/// Animation delay for the `index`-th item of a staggered group.
pub fn stagger_delay_ms(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(STAGGER_STEP_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_section_observer() {
        let trigger = RevealTrigger::default();
        assert_eq!(trigger.threshold(), 0.1);
        assert!(trigger.trigger_once());
        assert!(!trigger.is_revealed());
    }

    #[test]
    fn below_threshold_stays_hidden() {
        let mut trigger = RevealTrigger::default();
        assert!(!trigger.observe(0.05));
        assert!(!trigger.is_revealed());
    }

    #[test]
    fn trigger_once_latches() {
        let mut trigger = RevealTrigger::default();
        assert!(trigger.observe(0.3));
        assert!(trigger.observe(0.0));
        assert!(trigger.is_revealed());
    }

    #[test]
    fn repeating_trigger_hides_again() {
        let mut trigger = RevealTrigger::new(0.5, false);
        assert!(trigger.observe(0.6));
        assert!(!trigger.observe(0.2));
        assert!(!trigger.is_revealed());
    }

    #[test]
    fn zero_ratio_never_reveals() {
        let mut trigger = RevealTrigger::new(0.0, true);
        assert!(!trigger.observe(0.0));
        assert!(trigger.observe(0.01));
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(RevealTrigger::new(4.0, true).threshold(), 1.0);
        assert_eq!(RevealTrigger::new(-1.0, true).threshold(), 0.0);
        assert_eq!(RevealTrigger::new(f64::NAN, true).threshold(), DEFAULT_THRESHOLD);
    }

    #[test]
    fn stagger_steps_by_100ms() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(1), 100);
        assert_eq!(stagger_delay_ms(3), 300);
    }
}
