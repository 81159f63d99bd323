//! 4-digit 7-segment panel driver
//!
//! Seven shared segment lines plus four digit-enable lines. The panel
//! shows whatever [`DigitFrame`] the display multiplexer produced for
//! the current refresh slot; all digit enables are blanked before the
//! next one is asserted so no instant ever lights two positions
//! (ghosting).

use quern_core::display::{DigitFrame, DIGIT_COUNT};
use quern_hal::OutputPin;

/// Number of segment lines (a..g)
pub const SEGMENT_COUNT: usize = 7;

/// Panel wiring configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelConfig {
    /// Segment lines sink current (lit = low)
    pub active_low_segments: bool,
    /// Digit-enable lines sink current (selected = low)
    pub active_low_digits: bool,
}

impl Default for PanelConfig {
    /// Reference board wiring: active-low segments, active-high enables
    fn default() -> Self {
        Self {
            active_low_segments: true,
            active_low_digits: false,
        }
    }
}

/// Multiplexed 7-segment panel over HAL pins
pub struct SevenSegmentPanel<S: OutputPin, D: OutputPin> {
    segments: [S; SEGMENT_COUNT],
    digits: [D; DIGIT_COUNT],
    config: PanelConfig,
}

impl<S: OutputPin, D: OutputPin> SevenSegmentPanel<S, D> {
    /// Create a panel driver with everything blanked
    pub fn new(segments: [S; SEGMENT_COUNT], digits: [D; DIGIT_COUNT], config: PanelConfig) -> Self {
        let mut panel = Self {
            segments,
            digits,
            config,
        };
        panel.blank();
        panel
    }

    /// Show one refresh slot.
    ///
    /// Order matters: deselect every digit first, then set up the
    /// segment lines, then assert the single new enable.
    pub fn show(&mut self, frame: &DigitFrame) {
        for digit in self.digits.iter_mut() {
            digit.set_state(self.config.active_low_digits);
        }

        let mask = frame.segments();
        for (bit, segment) in self.segments.iter_mut().enumerate() {
            let lit = mask & (1 << bit) != 0;
            segment.set_state(lit != self.config.active_low_segments);
        }

        let enables = frame.digit_enables();
        for (digit, enabled) in self.digits.iter_mut().zip(enables) {
            if enabled {
                digit.set_state(!self.config.active_low_digits);
            }
        }
    }

    /// Clear the display: all segments dark, no digit selected
    pub fn blank(&mut self) {
        for segment in self.segments.iter_mut() {
            segment.set_state(self.config.active_low_segments);
        }
        for digit in self.digits.iter_mut() {
            digit.set_state(self.config.active_low_digits);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    /// Mock pin sharing its level through a cell so the panel can own it
    /// while the test observes it.
    struct MockPin<'a> {
        level: &'a Cell<bool>,
    }

    impl OutputPin for MockPin<'_> {
        fn set_high(&mut self) {
            self.level.set(true);
        }
        fn set_low(&mut self) {
            self.level.set(false);
        }
        fn toggle(&mut self) {
            self.level.set(!self.level.get());
        }
        fn is_set_high(&self) -> bool {
            self.level.get()
        }
    }

    fn harness() -> ([Cell<bool>; SEGMENT_COUNT], [Cell<bool>; DIGIT_COUNT]) {
        (
            core::array::from_fn(|_| Cell::new(false)),
            core::array::from_fn(|_| Cell::new(false)),
        )
    }

    fn panel<'a>(
        seg_levels: &'a [Cell<bool>; SEGMENT_COUNT],
        dig_levels: &'a [Cell<bool>; DIGIT_COUNT],
        config: PanelConfig,
    ) -> SevenSegmentPanel<MockPin<'a>, MockPin<'a>> {
        let segments = core::array::from_fn(|i| MockPin {
            level: &seg_levels[i],
        });
        let digits = core::array::from_fn(|i| MockPin {
            level: &dig_levels[i],
        });
        SevenSegmentPanel::new(segments, digits, config)
    }

    #[test]
    fn test_new_blanks_everything() {
        let (segs, digs) = harness();
        let _panel = panel(&segs, &digs, PanelConfig::default());

        // Active-low segments idle high, active-high enables idle low
        assert!(segs.iter().all(|s| s.get()));
        assert!(digs.iter().all(|d| !d.get()));
    }

    #[test]
    fn test_show_selects_single_digit() {
        let (segs, digs) = harness();
        let mut p = panel(&segs, &digs, PanelConfig::default());

        p.show(&DigitFrame {
            position: 2,
            value: 1,
        });

        let selected: u32 = digs.iter().map(|d| d.get() as u32).sum();
        assert_eq!(selected, 1);
        assert!(digs[2].get());
    }

    #[test]
    fn test_show_drives_segment_pattern() {
        let (segs, digs) = harness();
        let mut p = panel(&segs, &digs, PanelConfig::default());

        // "1" lights segments b and c; active-low wiring pulls them low
        p.show(&DigitFrame {
            position: 0,
            value: 1,
        });
        assert!(!segs[1].get());
        assert!(!segs[2].get());
        assert!(segs[0].get());
        assert!(segs[6].get());
    }

    #[test]
    fn test_blank_after_show() {
        let (segs, digs) = harness();
        let mut p = panel(&segs, &digs, PanelConfig::default());

        p.show(&DigitFrame {
            position: 3,
            value: 8,
        });
        p.blank();

        assert!(segs.iter().all(|s| s.get()));
        assert!(digs.iter().all(|d| !d.get()));
    }

    #[test]
    fn test_active_high_segment_wiring() {
        let (segs, digs) = harness();
        let config = PanelConfig {
            active_low_segments: false,
            active_low_digits: false,
        };
        let mut p = panel(&segs, &digs, config);

        p.show(&DigitFrame {
            position: 0,
            value: 8,
        });
        assert!(segs.iter().all(|s| s.get()));
    }
}
