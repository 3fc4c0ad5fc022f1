// Li-ion battery voltage estimation
//
// GPIO0 reads the cell through a 100K/100K divider (2:1). Raw 12-bit
// counts scale against the 3.3V rail, times two for the actual cell
// voltage. Linear approximation: 4200mV = 100%, 3300mV = 0%.
//
// While the charger is active it perturbs the sense rail, so a reading
// below 3300mV with USB present is reported as 0% instead of trusted;
// the UI treats "0% while charging" as a known quirk, not a fault.

use crate::board::io::{AdcChannel, BoardIo, DigitalLine};

const ADC_MAX: u32 = 4095;
const ADC_REF_MV: u32 = 3300;
const DIVIDER_MULT: u32 = 2;

const VBAT_FULL_MV: u32 = 4200;
const VBAT_EMPTY_MV: u32 = 3300;

/// Cell voltage in millivolts from one raw battery-channel sample.
pub fn raw_to_battery_mv(raw: u16) -> u32 {
    raw as u32 * ADC_REF_MV * DIVIDER_MULT / ADC_MAX
}

/// Battery percentage from a raw sample plus the charge-detect level.
///
/// Total over its inputs: out-of-range samples clamp to 0 or 100.
pub fn estimate(raw: u16, is_charging: bool) -> u8 {
    let mv = raw_to_battery_mv(raw);

    // Charge-path noise guard, checked before the linear formula.
    if is_charging && mv < VBAT_EMPTY_MV {
        return 0;
    }

    if mv >= VBAT_FULL_MV {
        100
    } else if mv <= VBAT_EMPTY_MV {
        0
    } else {
        ((mv - VBAT_EMPTY_MV) * 100 / (VBAT_FULL_MV - VBAT_EMPTY_MV)) as u8
    }
}

/// On-demand battery query over the board's raw reads.
pub fn read_percentage(io: &mut impl BoardIo) -> u8 {
    let raw = io.read_raw_adc(AdcChannel::Battery);
    let charging = io.read_digital(DigitalLine::UsbDetect);
    estimate(raw, charging)
}
