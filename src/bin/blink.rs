//! LED blink utility
//!
//! Toggles an LED on BCM GPIO 17 (physical pin 11) at the interval given
//! on the command line, forever.
//!
//! ## Usage
//!
//! ```bash
//! blink 500          # toggle every 500ms
//! ```
//!
//! Exit codes: 2 for a usage error, 1 if the GPIO peripheral cannot be
//! opened.

use std::process;
use std::time::Duration;

use pisense::adapters::GpioOutput;
use pisense::app::Blinker;

/// LED pin, BCM numbering. BCM GPIO 17 is physical pin 11.
const LED_PIN: u8 = 17;

/// Parse the delay argument. A missing or non-numeric argument is a
/// usage error; a silent zero delay would spin the GPIO flat out.
fn parse_delay(args: &[String]) -> Result<u64, ()> {
    let arg = args.first().ok_or(())?;
    arg.parse().map_err(|_| ())
}

fn usage(name: &str) -> ! {
    eprintln!("Usage: {name} DELAY_IN_MS");
    process::exit(2);
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let name = args.first().map(String::as_str).unwrap_or("blink");
    let delay_ms = match parse_delay(&args[1..]) {
        Ok(ms) => ms,
        Err(()) => usage(name),
    };

    println!("Raspberry Pi blink, delay_ms = {delay_ms}");

    let pin = match GpioOutput::new(LED_PIN) {
        Ok(pin) => pin,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };

    // Runs until the process is terminated; the cancellation flag is
    // only cleared in tests.
    let mut blinker = Blinker::new(pin, Duration::from_millis(delay_ms));
    if let Err(err) = blinker.run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_delay() {
        assert_eq!(parse_delay(&args(&["500"])), Ok(500));
        assert_eq!(parse_delay(&args(&["0"])), Ok(0));
        assert_eq!(parse_delay(&args(&[])), Err(()));
        assert_eq!(parse_delay(&args(&["fast"])), Err(()));
        assert_eq!(parse_delay(&args(&["-5"])), Err(()));
    }
}
