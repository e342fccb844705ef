//! Blinker service - toggle loop with a cancellation flag

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::ports::digital::{DigitalError, DigitalOutputPort, Level};

/// Toggles a digital output at a fixed interval until cancelled
///
/// The shipped binary never clears the flag, so the loop runs until the
/// process is terminated. Tests clear the flag to run a bounded number
/// of transitions.
pub struct Blinker<P: DigitalOutputPort> {
    pin: P,
    interval: Duration,
    running: Arc<AtomicBool>,
}

impl<P: DigitalOutputPort> Blinker<P> {
    /// Create a blinker toggling at the given interval
    pub fn new(pin: P, interval: Duration) -> Self {
        Self {
            pin,
            interval,
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Handle for stopping the loop from another thread or a signal handler
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.running)
    }

    /// Run until the cancellation flag is cleared
    ///
    /// Alternates the output starting at high, sleeping for the configured
    /// interval after each transition. A write failure stops the loop and
    /// returns the error.
    pub fn run(&mut self) -> Result<(), DigitalError> {
        let mut level = Level::High;
        while self.running.load(Ordering::Relaxed) {
            self.pin.set_level(level)?;
            level = level.toggled();
            thread::sleep(self.interval);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fake pin recording levels and clearing the flag after a quota
    struct CountingPin {
        levels: Vec<Level>,
        remaining: usize,
        flag: Arc<AtomicBool>,
    }

    impl DigitalOutputPort for CountingPin {
        fn set_level(&mut self, level: Level) -> Result<(), DigitalError> {
            self.levels.push(level);
            self.remaining -= 1;
            if self.remaining == 0 {
                self.flag.store(false, Ordering::Relaxed);
            }
            Ok(())
        }
    }

    /// Fake pin that always fails
    struct BrokenPin;

    impl DigitalOutputPort for BrokenPin {
        fn set_level(&mut self, _level: Level) -> Result<(), DigitalError> {
            Err(DigitalError::Hardware("pin gone".into()))
        }
    }

    #[test]
    fn test_alternates_until_cancelled() {
        let flag = Arc::new(AtomicBool::new(true));
        let pin = CountingPin {
            levels: Vec::new(),
            remaining: 5,
            flag: Arc::clone(&flag),
        };
        let mut blinker = Blinker {
            pin,
            interval: Duration::ZERO,
            running: flag,
        };
        blinker.run().unwrap();
        assert_eq!(
            blinker.pin.levels,
            [
                Level::High,
                Level::Low,
                Level::High,
                Level::Low,
                Level::High
            ]
        );
    }

    #[test]
    fn test_cancelled_flag_prevents_any_write() {
        let flag = Arc::new(AtomicBool::new(false));
        let pin = CountingPin {
            levels: Vec::new(),
            remaining: 1,
            flag: Arc::clone(&flag),
        };
        let mut blinker = Blinker {
            pin,
            interval: Duration::ZERO,
            running: flag,
        };
        blinker.run().unwrap();
        assert!(blinker.pin.levels.is_empty());
    }

    #[test]
    fn test_write_failure_stops_loop() {
        let mut blinker = Blinker::new(BrokenPin, Duration::ZERO);
        assert!(blinker.run().is_err());
    }
}
