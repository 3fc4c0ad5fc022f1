// x4-io entry point: cooperative polling loop for the input/power core
//
// Boot sequence: logger -> board -> drivers, then a 10ms poll loop.
// The loop plays the launcher's part during bring-up: it drains the
// navigation flags after each tick, reports the battery every few
// seconds, and routes a 2s power-button hold through the supervised
// power policy instead of the raw chip reset.

#![no_std]
#![no_main]

use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use esp_hal::time::Instant;
use log::info;

use x4_io::board::{Board, BoardIo, DigitalLine};
use x4_io::drivers::battery;
use x4_io::drivers::input::{EventTranslator, NavFlags};
use x4_io::drivers::power::PowerPolicy;

esp_bootloader_esp_idf::esp_app_desc!();

const POLL_INTERVAL_MS: u32 = 10;
const POWER_LONG_PRESS_MS: u64 = 2000;
const BATTERY_REPORT_MS: u64 = 10_000;

fn now_ms() -> u64 {
    Instant::now().duration_since_epoch().as_millis()
}

#[esp_hal::main]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    info!("booting...");

    let board = Board::init(peripherals);
    let mut io = board.io;
    let mut policy = PowerPolicy::new(board.system);

    let mut translator = EventTranslator::new();
    let mut flags = NavFlags::default();
    let mut power_held_since: Option<u64> = None;
    let mut next_battery_report: u64 = 0;
    let delay = Delay::new();

    info!("input/power subsystem ready.");

    loop {
        let now = now_ms();

        // The launcher owns the long-press detector; nothing asserts it
        // during bring-up, so the debounce gate is always armed here.
        translator.poll(now, false, &mut io, &mut flags);

        if flags.any_key_press {
            info!(
                "keys: prev={} next={} sel={} esc={} up={} down={}",
                flags.prev_press,
                flags.next_press,
                flags.sel_press,
                flags.esc_press,
                flags.up_press,
                flags.down_press,
            );
            // Reader-side contract: consume once, then clear.
            flags.clear();
        }

        if io.take_display_wake() {
            info!("display wake requested");
        }

        // A 2s hold on the (navigation-ignored) power button goes
        // through the safety policy, never straight to the chip.
        if io.read_digital(DigitalLine::PowerButton) {
            let held_since = *power_held_since.get_or_insert(now);
            if now - held_since >= POWER_LONG_PRESS_MS {
                power_held_since = None;
                policy.request_power_off();
            }
        } else {
            power_held_since = None;
        }
        policy.check_reboot_condition();

        if now >= next_battery_report {
            info!("battery: {}%", battery::read_percentage(&mut io));
            next_battery_report = now + BATTERY_REPORT_MS;
        }

        delay.delay_millis(POLL_INTERVAL_MS);
    }
}
