//! TMP36 temperature reader
//!
//! Reads the current temperature from a TMP36 sensor connected to
//! channel 0 of an MCP3008 A/D converter on the Raspberry Pi SPI bus
//! and prints it in Celsius.
//!
//! ## Usage
//!
//! ```bash
//! read-temp          # one line: temperature in Celsius, 1 decimal
//! read-temp -v       # raw code, millivolts and both temperature units
//! ```
//!
//! Exit codes: 2 for a usage error, 255 if the SPI peripheral cannot be
//! opened.

use std::process;

use anyhow::Context;
use rppal::spi::{Bus, SlaveSelect};

use pisense::adapters::Mcp3008;
use pisense::app::Thermometer;
use pisense::domain::{SampleConverter, TemperatureSample};

/// Analog channel the TMP36 is wired to
const CHANNEL: u8 = 0;

/// Parse the option list: `-v` selects verbose output, anything else
/// (including `-h`) is a usage error.
fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<bool, ()> {
    let mut verbose = false;
    for arg in args {
        match arg.as_str() {
            "-v" => verbose = true,
            _ => return Err(()),
        }
    }
    Ok(verbose)
}

/// Render a sample the way the tool prints it
///
/// Verbose output keeps millivolts at 6 decimals while the temperatures
/// are rounded to 1, matching the original report format.
fn report(sample: &TemperatureSample, verbose: bool) -> String {
    if verbose {
        format!(
            "digital_value = {}\nmV = {:.6}\ntemp_C = {:.1}\ntemp_F = {:.1}\n",
            sample.raw, sample.millivolts, sample.celsius, sample.fahrenheit
        )
    } else {
        format!("{:.1}\n", sample.celsius)
    }
}

fn usage(name: &str) -> ! {
    eprintln!("Usage: {name} [-v]");
    eprintln!();
    eprintln!("Outputs temperature in celsius, as read from a TMP36 attached to an");
    eprintln!("MCP3008 A/D converter.");
    eprintln!();
    eprintln!("With -v, outputs summary (value read, plus intermediate values).");
    process::exit(2);
}

fn read_sample() -> anyhow::Result<TemperatureSample> {
    let adc = Mcp3008::new(Bus::Spi0, SlaveSelect::Ss0).context("MCP3008 setup failed")?;
    let mut thermometer = Thermometer::new(adc, SampleConverter::TMP36_ON_MCP3008, CHANNEL);
    let sample = thermometer.read().context("analog read failed")?;
    Ok(sample)
}

fn main() {
    env_logger::init();

    let mut args = std::env::args();
    let name = args.next().unwrap_or_else(|| "read-temp".into());
    let verbose = match parse_args(args) {
        Ok(verbose) => verbose,
        Err(()) => usage(&name),
    };

    match read_sample() {
        Ok(sample) => print!("{}", report(&sample, verbose)),
        Err(err) => {
            eprintln!("Error: {err:#}");
            process::exit(255);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(parse_args(args(&[])), Ok(false));
        assert_eq!(parse_args(args(&["-v"])), Ok(true));
        assert_eq!(parse_args(args(&["-h"])), Err(()));
        assert_eq!(parse_args(args(&["--bogus"])), Err(()));
        assert_eq!(parse_args(args(&["-v", "-h"])), Err(()));
    }

    #[test]
    fn test_verbose_report() {
        let sample = SampleConverter::TMP36_ON_MCP3008.convert(357);
        assert_eq!(
            report(&sample, true),
            "digital_value = 357\nmV = 1150.488281\ntemp_C = 65.0\ntemp_F = 149.1\n"
        );
    }

    #[test]
    fn test_quiet_report() {
        let sample = SampleConverter::TMP36_ON_MCP3008.convert(357);
        assert_eq!(report(&sample, false), "65.0\n");
    }
}
