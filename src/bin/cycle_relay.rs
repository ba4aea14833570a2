use anyhow::Result;
use clap::Parser;
use linux_embedded_hal::{Delay, I2cdev};

use relay_cycler::{bus_path, RelayCycler, I2C_BUS};

/// Toggle the relay on the I2C expander a given number of times
#[derive(Parser, Debug)]
#[command(name = "cycle_relay", version, about)]
struct Cli {
    /// Number of on/off cycles
    cycles: u32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    // Parse before touching the bus: a bad count must not write anything.
    let cli = Cli::parse();

    let device = I2cdev::new(bus_path(I2C_BUS))?;
    let mut relay = RelayCycler::new(device, Delay);
    relay.run(cli.cycles)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn parses_cycle_count() {
        let cli = Cli::try_parse_from(["cycle_relay", "25"]).unwrap();
        assert_eq!(cli.cycles, 25);
    }

    #[test]
    fn zero_is_a_valid_count() {
        let cli = Cli::try_parse_from(["cycle_relay", "0"]).unwrap();
        assert_eq!(cli.cycles, 0);
    }

    #[test]
    fn count_is_required() {
        assert!(Cli::try_parse_from(["cycle_relay"]).is_err());
    }

    #[test]
    fn rejects_non_numeric_count() {
        assert!(Cli::try_parse_from(["cycle_relay", "ten"]).is_err());
        assert!(Cli::try_parse_from(["cycle_relay", "1.5"]).is_err());
    }

    #[test]
    fn rejects_negative_count() {
        assert!(Cli::try_parse_from(["cycle_relay", "-3"]).is_err());
    }
}
