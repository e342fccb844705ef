//! Thermometer service - one conversion read through an analog port

use log::debug;

use crate::domain::{SampleConverter, TemperatureSample};
use crate::ports::analog::{AnalogError, AnalogPort};

/// Reads temperature samples from one channel of an analog port
///
/// Owns the port, the conversion parameters and the channel the sensor
/// is wired to. Each call to [`read`](Self::read) performs one converter
/// transaction and runs the full conversion pipeline on the result.
pub struct Thermometer<A: AnalogPort> {
    port: A,
    converter: SampleConverter,
    channel: u8,
}

impl<A: AnalogPort> Thermometer<A> {
    /// Create a thermometer reading the given channel
    pub fn new(port: A, converter: SampleConverter, channel: u8) -> Self {
        Self {
            port,
            converter,
            channel,
        }
    }

    /// Read one sample
    ///
    /// Port errors are returned unchanged; no conversion is attempted on
    /// a failed read.
    pub fn read(&mut self) -> Result<TemperatureSample, AnalogError> {
        let code = self.port.read_channel(self.channel)?;
        let sample = self.converter.convert(code);
        debug!(
            "channel {}: code {} -> {:.1}C",
            self.channel, code, sample.celsius
        );
        Ok(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fake analog port returning a fixed code or a fixed error
    struct FakeAdc(Result<u16, AnalogError>);

    impl AnalogPort for FakeAdc {
        fn read_channel(&mut self, _channel: u8) -> Result<u16, AnalogError> {
            self.0.clone()
        }
    }

    #[test]
    fn test_read_converts_sample() {
        let mut thermometer =
            Thermometer::new(FakeAdc(Ok(357)), SampleConverter::TMP36_ON_MCP3008, 0);
        let sample = thermometer.read().unwrap();
        assert_eq!(sample.raw, 357);
        assert!((sample.celsius - 65.05).abs() < 0.01);
    }

    #[test]
    fn test_read_surfaces_port_error() {
        let err = AnalogError::Hardware("spidev not present".into());
        let mut thermometer =
            Thermometer::new(FakeAdc(Err(err)), SampleConverter::TMP36_ON_MCP3008, 0);
        assert!(matches!(
            thermometer.read(),
            Err(AnalogError::Hardware(msg)) if msg.contains("spidev")
        ));
    }
}
