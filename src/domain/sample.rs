//! Temperature sample domain entity

/// One converted temperature measurement.
///
/// Carries every stage of the conversion pipeline, so callers that want
/// to show intermediate values (the raw code, the millivolt reading) can
/// do so without re-deriving them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TemperatureSample {
    /// Raw code as read from the converter (0-1023 for a 10-bit ADC)
    pub raw: u16,
    /// Sensor output voltage in millivolts
    pub millivolts: f64,
    /// Temperature in Celsius
    pub celsius: f64,
    /// Temperature in Fahrenheit
    pub fahrenheit: f64,
}
