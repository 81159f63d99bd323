//! Button sampling and debounce bookkeeping
//!
//! Mechanical buttons bounce; any edge on any of the four inputs arms a
//! single settle timer, further edges are ignored while it is armed, and
//! when it fires the inputs are sampled exactly once. The resulting
//! [`ButtonSample`] is the only input the grind timer ever sees.

/// The four logical buttons, in priority order
///
/// When several inputs are asserted in one sample, only the highest
/// priority one is honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GrindButton {
    /// Run while held (continuous mode)
    Manual,
    /// Full carafe preset
    FullCarafe,
    /// Half carafe preset
    HalfCarafe,
    /// Single cup preset
    SingleCup,
}

/// Debounced instantaneous state of the four button inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonSample {
    pub manual: bool,
    pub full_carafe: bool,
    pub half_carafe: bool,
    pub single_cup: bool,
}

impl ButtonSample {
    /// Sample with no buttons asserted
    pub const fn released() -> Self {
        Self {
            manual: false,
            full_carafe: false,
            half_carafe: false,
            single_cup: false,
        }
    }

    /// Sample with exactly one button asserted
    pub const fn pressed(button: GrindButton) -> Self {
        let mut s = Self::released();
        match button {
            GrindButton::Manual => s.manual = true,
            GrindButton::FullCarafe => s.full_carafe = true,
            GrindButton::HalfCarafe => s.half_carafe = true,
            GrindButton::SingleCup => s.single_cup = true,
        }
        s
    }

    /// Check if any button is asserted
    pub fn any_pressed(&self) -> bool {
        self.manual || self.full_carafe || self.half_carafe || self.single_cup
    }

    /// The highest-priority asserted button, if any
    ///
    /// Priority: Manual > FullCarafe > HalfCarafe > SingleCup.
    pub fn highest_priority(&self) -> Option<GrindButton> {
        if self.manual {
            Some(GrindButton::Manual)
        } else if self.full_carafe {
            Some(GrindButton::FullCarafe)
        } else if self.half_carafe {
            Some(GrindButton::HalfCarafe)
        } else if self.single_cup {
            Some(GrindButton::SingleCup)
        } else {
            None
        }
    }
}

/// Settle-timer bookkeeping for the debouncer
///
/// Tracks whether the settle window is open. The actual delay runs in
/// the firmware; this type enforces that edges during the window do not
/// re-arm it.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    armed: bool,
}

impl Debouncer {
    /// Create a disarmed debouncer
    pub const fn new() -> Self {
        Self { armed: false }
    }

    /// Record a raw button edge.
    ///
    /// Returns `true` if the edge armed the settle timer, `false` if the
    /// timer was already armed and the edge is to be ignored.
    pub fn edge(&mut self) -> bool {
        if self.armed {
            return false;
        }
        self.armed = true;
        true
    }

    /// Record the settle timer firing.
    ///
    /// Disarms first, before the sample is acted on, so a new edge can
    /// arm the next window. Returns `false` if the timer was not armed
    /// (a spurious fire, which callers should drop).
    pub fn settle(&mut self) -> bool {
        if !self.armed {
            return false;
        }
        self.armed = false;
        true
    }

    /// Check if the settle timer is armed
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        let all = ButtonSample {
            manual: true,
            full_carafe: true,
            half_carafe: true,
            single_cup: true,
        };
        assert_eq!(all.highest_priority(), Some(GrindButton::Manual));

        let presets = ButtonSample {
            full_carafe: true,
            half_carafe: true,
            single_cup: true,
            ..ButtonSample::released()
        };
        assert_eq!(presets.highest_priority(), Some(GrindButton::FullCarafe));

        let small = ButtonSample {
            half_carafe: true,
            single_cup: true,
            ..ButtonSample::released()
        };
        assert_eq!(small.highest_priority(), Some(GrindButton::HalfCarafe));

        assert_eq!(
            ButtonSample::pressed(GrindButton::SingleCup).highest_priority(),
            Some(GrindButton::SingleCup)
        );
        assert_eq!(ButtonSample::released().highest_priority(), None);
    }

    #[test]
    fn test_any_pressed() {
        assert!(!ButtonSample::released().any_pressed());
        assert!(ButtonSample::pressed(GrindButton::Manual).any_pressed());
    }

    #[test]
    fn test_edges_during_settle_window_ignored() {
        let mut d = Debouncer::new();

        assert!(d.edge());
        assert!(d.is_armed());

        // Bounce: further edges must not re-arm
        assert!(!d.edge());
        assert!(!d.edge());
        assert!(d.is_armed());

        assert!(d.settle());
        assert!(!d.is_armed());

        // Next press arms a new window
        assert!(d.edge());
    }

    #[test]
    fn test_spurious_settle_dropped() {
        let mut d = Debouncer::new();
        assert!(!d.settle());
    }
}
