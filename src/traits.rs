extern crate robot_traits;

use self::robot_traits::Led;
use hal::blocking::delay::DelayMs;
use hal::blocking::i2c::Write;

use crate::RelayCycler;

/// Drives the relay as a plain on/off indicator. Bus errors are dropped.
impl<T: Write, D: DelayMs<u16>> Led for RelayCycler<T, D> {
    fn led_on(&mut self) {
        if self.relay_on().is_err() {
            warn!("relay on: write to {:#04x} failed", crate::I2C_ADDRESS);
        }
    }

    fn led_off(&mut self) {
        if self.relay_off().is_err() {
            warn!("relay off: write to {:#04x} failed", crate::I2C_ADDRESS);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::robot_traits::Led;
    use crate::mock;
    use crate::RelayCycler;

    #[test]
    fn led_drives_output_register() {
        let (bus, sleeper, log) = mock::pair(None);
        let mut relay = RelayCycler::new(bus, sleeper);
        relay.led_on();
        relay.led_off();
        assert_eq!(mock::writes(&log), vec![(0x09, 0xFF), (0x09, 0x00)]);
    }

    #[test]
    fn led_swallows_bus_errors() {
        let (bus, sleeper, log) = mock::pair(Some(0));
        let mut relay = RelayCycler::new(bus, sleeper);
        relay.led_on();
        relay.led_off();
        assert_eq!(mock::writes(&log), vec![(0x09, 0x00)]);
    }
}
