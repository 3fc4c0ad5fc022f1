//! ESP32-C3 peripheral bindings for the X4 input/power subsystem.

use esp_hal::{
    Blocking,
    analog::adc::{Adc, AdcConfig, AdcPin, Attenuation},
    gpio::{Input, InputConfig, Pull},
    peripherals::{ADC1, GPIO0, GPIO1, GPIO2, Peripherals},
    rtc_cntl::Rtc,
};

use crate::board::io::{AdcChannel, BoardIo, DigitalLine};
use crate::drivers::power::SystemControl;

/// Input and sensing hardware, implementing [`BoardIo`].
pub struct X4Io {
    adc: Adc<'static, ADC1<'static>, Blocking>,
    nav: AdcPin<GPIO1<'static>, ADC1<'static>>,
    vol: AdcPin<GPIO2<'static>, ADC1<'static>>,
    battery: AdcPin<GPIO0<'static>, ADC1<'static>>,
    usb_detect: Input<'static>,
    power_btn: Input<'static>,
    display_wake: bool,
}

impl X4Io {
    /// True if an accepted press asked for a display wake since the
    /// last call. The display service drains this once per refresh.
    pub fn take_display_wake(&mut self) -> bool {
        core::mem::take(&mut self.display_wake)
    }
}

impl BoardIo for X4Io {
    fn read_raw_adc(&mut self, channel: AdcChannel) -> u16 {
        match channel {
            AdcChannel::NavLadder => nb::block!(self.adc.read_oneshot(&mut self.nav)).unwrap(),
            AdcChannel::VolLadder => nb::block!(self.adc.read_oneshot(&mut self.vol)).unwrap(),
            AdcChannel::Battery => nb::block!(self.adc.read_oneshot(&mut self.battery)).unwrap(),
        }
    }

    fn read_digital(&mut self, line: DigitalLine) -> bool {
        match line {
            DigitalLine::UsbDetect => self.usb_detect.is_high(),
            DigitalLine::PowerButton => self.power_btn.is_low(),
        }
    }

    fn wake_display(&mut self) {
        self.display_wake = true;
    }
}

/// Chip-level restart/sleep, implementing [`SystemControl`].
pub struct X4SystemControl {
    rtc: Rtc<'static>,
}

impl SystemControl for X4SystemControl {
    fn restart(&mut self) {
        esp_hal::system::software_reset()
    }

    fn deep_sleep(&mut self) {
        // Unreferenced on the X4: the policy layer redirects power-off
        // to restart(). No wake sources are armed.
        self.rtc.sleep_deep(&[])
    }
}

/// Complete board hardware for this subsystem, ready for the drivers.
pub struct Board {
    pub io: X4Io,
    pub system: X4SystemControl,
}

impl Board {
    pub fn init(p: Peripherals) -> Self {
        let mut adc_cfg = AdcConfig::new();

        // 11dB attenuation for the full 0-3.3V range. Raw counts, no
        // calibration scheme: the ladder centers are calibrated in raw
        // counts, not millivolts.
        let nav = adc_cfg.enable_pin(p.GPIO1, Attenuation::_11dB);
        let vol = adc_cfg.enable_pin(p.GPIO2, Attenuation::_11dB);
        let battery = adc_cfg.enable_pin(p.GPIO0, Attenuation::_11dB);
        let adc = Adc::new(p.ADC1, adc_cfg);

        let power_btn = Input::new(p.GPIO3, InputConfig::default().with_pull(Pull::Up));
        let usb_detect = Input::new(p.GPIO20, InputConfig::default().with_pull(Pull::None));

        Board {
            io: X4Io {
                adc,
                nav,
                vol,
                battery,
                usb_detect,
                power_btn,
                display_wake: false,
            },
            system: X4SystemControl {
                rtc: Rtc::new(p.LPWR),
            },
        }
    }
}
