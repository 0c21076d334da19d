// Touch-Sensor Implementierung
//
// Kapselt den digitalen GPIO-Eingang hinter dem TouchSensor Trait
// um Tests mit Mock-Implementierungen zu ermöglichen.

use embedded_hal::digital::InputPin;
use esp_core::{SensorError, TouchSensor};

/// GPIO Touch-Sensor
///
/// Liest die Touch-Leitung über einen digitalen Eingangs-Pin.
/// Generisch über `InputPin`, damit jeder esp-hal Input eingesetzt
/// werden kann.
pub struct GpioTouchSensor<P> {
    pin: P,
}

impl<P: InputPin> GpioTouchSensor<P> {
    /// Erstellt einen neuen GpioTouchSensor
    ///
    /// # Parameter
    /// - `pin`: konfigurierter Eingangs-Pin der Touch-Leitung
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: InputPin + Send> TouchSensor for GpioTouchSensor<P> {
    fn is_touched(&mut self) -> Result<bool, SensorError> {
        self.pin.is_high().map_err(|_| SensorError::ReadFailed)
    }
}
