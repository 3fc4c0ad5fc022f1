//! Debounced navigation event translation
//!
//! Polled once per tick by the main loop. Each accepted tick samples
//! both button ladders, wakes the display, and latches the matching
//! navigation flags; a single shared timestamp then gates the next
//! accept for 150ms. The launcher owns the long-press detector, and
//! while it asserts one the gate is bypassed so a held button can
//! repeat every tick instead of at a 150ms-quantised rate.

use crate::board::button::{Button, NAV_LADDER, VOL_LADDER, decode_ladder};
use crate::board::io::{AdcChannel, BoardIo};

/// Minimum spacing between two accepted presses (ms).
pub const DEBOUNCE_MS: u64 = 150;

/// Latched navigation flags shared with the launcher.
///
/// Single writer (the translator), single reader (the launcher), which
/// clears them after consuming each UI tick. Two flags can latch in the
/// same tick when both ladders report a press at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavFlags {
    pub prev_press: bool,
    pub next_press: bool,
    pub sel_press: bool,
    pub esc_press: bool,
    pub up_press: bool,
    pub down_press: bool,
    pub any_key_press: bool,
}

impl NavFlags {
    /// Reader-side reset, called after the flags have been consumed.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn latch(&mut self, button: Button) {
        match button {
            Button::Left => self.prev_press = true,
            Button::Right => self.next_press = true,
            Button::Confirm => self.sel_press = true,
            Button::Back => self.esc_press = true,
            Button::VolUp => self.up_press = true,
            Button::VolDown => self.down_press = true,
            // Power never reaches navigation; powering off goes through
            // the long-press hardware reset instead.
            Button::Power => {}
        }
    }
}

/// Translates raw ladder samples into [`NavFlags`] behind a shared
/// debounce window. One instance per device; the gate timestamp is
/// owned here and nothing else may reset it.
#[derive(Debug, Default)]
pub struct EventTranslator {
    last_accepted_ms: u64,
}

impl EventTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// One poll tick. `now_ms` must come from a monotonic millisecond
    /// clock. `long_press` is the launcher's sustained-press signal and
    /// bypasses the debounce gate while asserted.
    pub fn poll(
        &mut self,
        now_ms: u64,
        long_press: bool,
        io: &mut impl BoardIo,
        flags: &mut NavFlags,
    ) {
        if now_ms.saturating_sub(self.last_accepted_ms) < DEBOUNCE_MS && !long_press {
            return;
        }

        // Both ladders every tick: a navigation press does not mask a
        // simultaneous volume press.
        let nav = decode_ladder(io.read_raw_adc(AdcChannel::NavLadder), &NAV_LADDER);
        let vol = decode_ladder(io.read_raw_adc(AdcChannel::VolLadder), &VOL_LADDER);

        // An idle tick leaves the gate timestamp alone: the 150ms
        // window spaces genuine presses, it does not throttle polling.
        if nav.is_none() && vol.is_none() {
            return;
        }

        io.wake_display();
        flags.any_key_press = true;

        for button in [nav, vol].into_iter().flatten() {
            flags.latch(button);
        }

        self.last_accepted_ms = now_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::io::DigitalLine;

    // Unpressed ladders are pulled to the rail.
    const IDLE: u16 = 4095;

    struct FakeIo {
        nav_raw: u16,
        vol_raw: u16,
        wakes: u32,
    }

    impl FakeIo {
        fn idle() -> Self {
            Self {
                nav_raw: IDLE,
                vol_raw: IDLE,
                wakes: 0,
            }
        }
    }

    impl BoardIo for FakeIo {
        fn read_raw_adc(&mut self, channel: AdcChannel) -> u16 {
            match channel {
                AdcChannel::NavLadder => self.nav_raw,
                AdcChannel::VolLadder => self.vol_raw,
                AdcChannel::Battery => 0,
            }
        }

        fn read_digital(&mut self, _line: DigitalLine) -> bool {
            false
        }

        fn wake_display(&mut self) {
            self.wakes += 1;
        }
    }

    #[test]
    fn press_latches_mapped_flag_and_wakes_display() {
        let mut io = FakeIo::idle();
        io.nav_raw = 0; // Right
        let mut tr = EventTranslator::new();
        let mut flags = NavFlags::default();

        tr.poll(200, false, &mut io, &mut flags);

        assert!(flags.next_press);
        assert!(flags.any_key_press);
        assert!(!flags.prev_press && !flags.sel_press && !flags.esc_press);
        assert!(!flags.up_press && !flags.down_press);
        assert_eq!(io.wakes, 1);
    }

    #[test]
    fn second_press_inside_window_is_rejected() {
        let mut io = FakeIo::idle();
        io.nav_raw = 2655; // Confirm, held
        let mut tr = EventTranslator::new();
        let mut flags = NavFlags::default();

        tr.poll(200, false, &mut io, &mut flags);
        flags.clear();

        tr.poll(349, false, &mut io, &mut flags);
        assert_eq!(flags, NavFlags::default());
        assert_eq!(io.wakes, 1);

        // Exactly one debounce window later the press is accepted.
        tr.poll(350, false, &mut io, &mut flags);
        assert!(flags.sel_press);
        assert_eq!(io.wakes, 2);
    }

    #[test]
    fn long_press_bypasses_the_gate() {
        let mut io = FakeIo::idle();
        io.vol_raw = 2205; // Vol Up, held with launcher long-press asserted
        let mut tr = EventTranslator::new();
        let mut flags = NavFlags::default();

        tr.poll(200, false, &mut io, &mut flags);
        assert!(flags.up_press);
        flags.clear();

        tr.poll(210, true, &mut io, &mut flags);
        assert!(flags.up_press);
        assert_eq!(io.wakes, 2);
    }

    #[test]
    fn idle_ticks_mutate_nothing() {
        let mut io = FakeIo::idle();
        let mut tr = EventTranslator::new();
        let mut flags = NavFlags::default();

        for now in (200..1000).step_by(10) {
            tr.poll(now, false, &mut io, &mut flags);
        }

        assert_eq!(flags, NavFlags::default());
        assert_eq!(io.wakes, 0);
        assert_eq!(tr.last_accepted_ms, 0);
    }

    #[test]
    fn idle_ticks_do_not_extend_the_window() {
        let mut io = FakeIo::idle();
        io.nav_raw = 3470; // Back
        let mut tr = EventTranslator::new();
        let mut flags = NavFlags::default();

        tr.poll(200, false, &mut io, &mut flags);
        flags.clear();

        // Release, then press again 151ms after the first accept. The
        // idle ticks in between must not have moved the timestamp.
        io.nav_raw = IDLE;
        tr.poll(260, false, &mut io, &mut flags);
        tr.poll(340, false, &mut io, &mut flags);

        io.nav_raw = 3470;
        tr.poll(351, false, &mut io, &mut flags);
        assert!(flags.esc_press);
    }

    #[test]
    fn both_ladders_latch_in_one_tick() {
        let mut io = FakeIo::idle();
        io.nav_raw = 1470; // Left
        io.vol_raw = 0; // Vol Down
        let mut tr = EventTranslator::new();
        let mut flags = NavFlags::default();

        tr.poll(200, false, &mut io, &mut flags);

        assert!(flags.prev_press);
        assert!(flags.down_press);
        assert!(flags.any_key_press);
        assert_eq!(io.wakes, 1);
    }

    #[test]
    fn power_latches_no_navigation_flag() {
        let mut flags = NavFlags::default();
        flags.latch(Button::Power);
        assert_eq!(flags, NavFlags::default());
    }
}
