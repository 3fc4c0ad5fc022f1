//! Button definitions and ADC ladder decoding for the XTEink X4
//!
//! Most buttons sit on resistance ladders read through a shared ADC
//! channel. Decoding compares a raw 12-bit sample against an ordered
//! table of calibrated center values.

/// All physical buttons on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    // Navigation cluster (GPIO1 ladder)
    Right,
    Left,
    Confirm,
    Back,
    // Volume pair (GPIO2 ladder)
    VolUp,
    VolDown,
    // Discrete digital button
    Power,
}

impl Button {
    pub const fn name(self) -> &'static str {
        match self {
            Button::Right => "Right",
            Button::Left => "Left",
            Button::Confirm => "Confirm",
            Button::Back => "Back",
            Button::VolUp => "Vol Up",
            Button::VolDown => "Vol Down",
            Button::Power => "Power",
        }
    }
}

impl core::fmt::Display for Button {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Calibration for one ladder: `(center, button)` steps in ascending
/// center order plus a shared tolerance, all in raw 12-bit counts.
///
/// Centers must be strictly increasing and neighbouring centers more
/// than `2 * threshold` apart, so the match windows cannot overlap.
pub struct LadderCalibration {
    pub steps: &'static [(u16, Button)],
    pub threshold: u16,
}

/// Raw-count tolerance shared by both ladders (from reference firmware).
pub const LADDER_THRESHOLD: u16 = 100;

pub const NAV_LADDER: LadderCalibration = LadderCalibration {
    steps: &[
        (3, Button::Right), // Near ground
        (1470, Button::Left),
        (2655, Button::Confirm),
        (3470, Button::Back),
    ],
    threshold: LADDER_THRESHOLD,
};

pub const VOL_LADDER: LadderCalibration = LadderCalibration {
    steps: &[
        (3, Button::VolDown), // Near ground
        (2205, Button::VolUp),
    ],
    threshold: LADDER_THRESHOLD,
};

/// Classify one raw ladder sample.
///
/// Steps are tested in ascending center order and the first step whose
/// upper bound exceeds the sample wins, so the effective windows are the
/// half-open bands `(-inf, c1+t), [c1+t, c2+t), ..` rather than bands
/// centered on each step. The centers were ported from reference
/// firmware that classifies exactly this way; symmetric bands would
/// move the boundary between adjacent buttons on real hardware.
pub fn decode_ladder(raw: u16, cal: &LadderCalibration) -> Option<Button> {
    for &(center, button) in cal.steps {
        if raw < center.saturating_add(cal.threshold) {
            return Some(button);
        }
    }
    None
}
