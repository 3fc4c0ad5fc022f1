//! Power-off policy for the X4
//!
//! The power-sense pin on some units floats or reads low at boot, so a
//! true deep-sleep power-off immediately wakes and sleeps again in a
//! reboot loop. Every generic power-off entry point in the system lands
//! here and is overridden: a full power-off request becomes a
//! supervised restart, and the periodic reboot-condition check does
//! nothing at all. Physical power-off is a long-press hardware reset,
//! outside this subsystem.

use log::warn;

/// Chip-level restart/sleep operations, implemented by the board layer.
pub trait SystemControl {
    /// Supervised software restart.
    fn restart(&mut self);

    /// Unguarded deep sleep. The path exists on the chip; the policy
    /// never takes it on this hardware revision.
    fn deep_sleep(&mut self);
}

impl<C: SystemControl + ?Sized> SystemControl for &mut C {
    fn restart(&mut self) {
        (**self).restart()
    }

    fn deep_sleep(&mut self) {
        (**self).deep_sleep()
    }
}

/// Safety gate in front of [`SystemControl`].
pub struct PowerPolicy<C: SystemControl> {
    control: C,
}

impl<C: SystemControl> PowerPolicy<C> {
    pub fn new(control: C) -> Self {
        Self { control }
    }

    /// Generic "power off" entry point. Always restarts; deep sleep is
    /// disabled on this revision.
    pub fn request_power_off(&mut self) {
        warn!("power off requested; restarting instead (deep sleep disabled on X4)");
        self.control.restart();
    }

    /// Historic button/timer poll that used to decide on powering off.
    /// Must never move the device to a lower power state here.
    pub fn check_reboot_condition(&mut self) {}
}
