use anyhow::Result;
use clap::Parser;
use linux_embedded_hal::{Delay, I2cdev};

use relay_cycler::{bus_path, RelayCycler, DEFAULT_CYCLES, I2C_BUS};

/// Toggle the relay on the I2C expander ten times
#[derive(Parser, Debug)]
#[command(name = "ten_cycle_relay", version, about)]
struct Cli {}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    Cli::parse();

    let device = I2cdev::new(bus_path(I2C_BUS))?;
    let mut relay = RelayCycler::new(device, Delay);
    relay.run(DEFAULT_CYCLES)?;
    Ok(())
}
