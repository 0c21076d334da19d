// Status-LED Implementierung
//
// Kapselt den digitalen GPIO-Ausgang hinter dem StatusLed Trait
// um Tests mit Mock-Implementierungen zu ermöglichen.

use embedded_hal::digital::OutputPin;
use esp_core::{LedError, StatusLed};

/// GPIO Status-LED
///
/// Treibt die LED-Leitung über einen digitalen Ausgangs-Pin (push-pull).
/// Generisch über `OutputPin`, damit jeder esp-hal Output eingesetzt
/// werden kann.
pub struct GpioStatusLed<P> {
    pin: P,
}

impl<P: OutputPin> GpioStatusLed<P> {
    /// Erstellt eine neue GpioStatusLed
    ///
    /// # Parameter
    /// - `pin`: konfigurierter Ausgangs-Pin der LED-Leitung
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: OutputPin + Send> StatusLed for GpioStatusLed<P> {
    fn set(&mut self, on: bool) -> Result<(), LedError> {
        let result = if on {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(|_| LedError::WriteFailed)
    }
}
