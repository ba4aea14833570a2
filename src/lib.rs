//! Cycles a relay wired to an MCP23008-style I2C GPIO expander.
//!
//! The expander sits at a fixed address on the bus. After a two-write
//! initialization every pin of the output register is driven high and then
//! low, once per cycle, with a fixed settling delay after every write.
extern crate embedded_hal as hal;
#[macro_use]
extern crate log;

#[cfg(feature = "traits")]
pub mod traits;

use hal::blocking::delay::DelayMs;
use hal::blocking::i2c::Write;
use std::path::PathBuf;

/// Index of the I2C bus the expander hangs off (`/dev/i2c-1` on a Pi).
pub const I2C_BUS: u8 = 1;
pub const I2C_ADDRESS: u8 = 0x20;

/// Delay after every register write, in milliseconds.
pub const STATE_DELAY_MS: u16 = 500;
/// Cycle count used by the fixed-count entry point.
pub const DEFAULT_CYCLES: u32 = 10;

enum Register {
    Config = 0x00, // Configuration register, cleared on init
    Direction = 0x06, // Pin direction register, 0x00 puts every pin in output mode
    Output = 0x09, // Output latch, drives the relay
}

const OUTPUT_ON: u8 = 0xFF; // All output pins high
const OUTPUT_OFF: u8 = 0x00; // All output pins low

/// Path of the character device for the given I2C bus index.
pub fn bus_path(index: u8) -> PathBuf {
    PathBuf::from(format!("/dev/i2c-{}", index))
}

pub struct RelayCycler<T: Write, D: DelayMs<u16>> {
    device: T,
    delay: D,
}

impl<T: Write, D: DelayMs<u16>> RelayCycler<T, D> {
    /// Wraps an already opened bus. Nothing is written until `init` or `run`.
    pub fn new(device: T, delay: D) -> RelayCycler<T, D> {
        RelayCycler { device, delay }
    }

    /// Gives back the bus and the delay provider. The relay keeps whatever
    /// state it was last driven to.
    pub fn release(self) -> (T, D) {
        (self.device, self.delay)
    }

    fn write_register(&mut self, register: Register, value: u8) -> Result<(), T::Error> {
        let register = register as u8;
        debug!("write {:#04x} <- {:#04x}", register, value);
        self.device.write(I2C_ADDRESS, &[register, value])?;
        self.delay.delay_ms(STATE_DELAY_MS);
        Ok(())
    }

    /// Clears the configuration register and switches every pin to output.
    pub fn init(&mut self) -> Result<(), T::Error> {
        info!("Initializing expander at {:#04x}", I2C_ADDRESS);
        self.write_register(Register::Config, 0x00)?;
        self.write_register(Register::Direction, 0x00)
    }

    /// Energizes the relay.
    pub fn relay_on(&mut self) -> Result<(), T::Error> {
        self.write_register(Register::Output, OUTPUT_ON)
    }

    /// De-energizes the relay.
    pub fn relay_off(&mut self) -> Result<(), T::Error> {
        self.write_register(Register::Output, OUTPUT_OFF)
    }

    /// One on/off toggle of the relay.
    pub fn cycle(&mut self) -> Result<(), T::Error> {
        self.relay_on()?;
        self.relay_off()
    }

    /// Initializes the expander and then toggles the relay `cycles` times.
    ///
    /// The first failed write aborts the run; nothing after it is written
    /// and the relay is left in the state it was last driven to.
    pub fn run(&mut self, cycles: u32) -> Result<(), T::Error> {
        self.init()?;
        for i in 0..cycles {
            debug!("cycle {}/{}", i + 1, cycles);
            self.cycle()?;
        }
        info!("Completed {} cycles", cycles);
        Ok(())
    }
}
