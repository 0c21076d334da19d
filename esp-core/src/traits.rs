//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use crate::types::TouchStatus;

/// Fehler-Typ für Sensor-Leseoperationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    ReadFailed,
}

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    WriteFailed,
}

/// Fehler-Typ für die Status-Ausgabe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportError {
    WriteFailed,
}

/// Trait für Touch-Sensor Hardware-Zugriff
///
/// Abstrahiert das Lesen der digitalen Touch-Leitung. Die Leitung ist
/// strikt binär: berührt oder nicht berührt, keine Zwischenwerte.
///
/// # Implementierungen
/// - **Production:** GpioTouchSensor (ESP32 GPIO Input)
/// - **Testing:** MockTouchSensor (in-memory Mock)
pub trait TouchSensor: Send {
    /// Tastet die Touch-Leitung einmal ab
    ///
    /// # Fehlerbehandlung
    /// Gibt `SensorError::ReadFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn is_touched(&mut self) -> Result<bool, SensorError>;
}

/// Trait für Status-LED Hardware-Zugriff
///
/// Abstrahiert das Treiben der digitalen LED-Leitung.
///
/// # Implementierungen
/// - **Production:** GpioStatusLed (ESP32 GPIO Output)
/// - **Testing:** MockStatusLed (in-memory Mock)
pub trait StatusLed: Send {
    /// Setzt die LED-Leitung auf den gewünschten Zustand
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn set(&mut self, on: bool) -> Result<(), LedError>;
}

/// Trait für die serielle Status-Ausgabe
///
/// Pro Iteration wird genau eine Status-Zeile übertragen.
///
/// # Implementierungen
/// - **Production:** SerialStatusReporter (UART, 9600 Baud)
/// - **Testing:** MockReporter (sammelt Zeilen in-memory)
pub trait StatusReporter: Send {
    /// Überträgt die Status-Zeile für den übergebenen Status
    ///
    /// # Fehlerbehandlung
    /// Gibt `ReportError::WriteFailed` zurück wenn die Übertragung fehlschlägt
    fn report(&mut self, status: TouchStatus) -> Result<(), ReportError>;
}

/// Trait für die Zeitquelle der Poll-Schleife
///
/// Abstrahiert die blockierende Pause zwischen zwei Iterationen,
/// damit Tests eine Fake-Clock einsetzen können statt echt zu warten.
///
/// # Implementierungen
/// - **Production:** HalDelaySource (esp-hal Delay)
/// - **Testing:** MockDelay (zeichnet nur auf)
pub trait DelaySource: Send {
    /// Blockiert für die angegebene Anzahl Millisekunden
    fn delay_ms(&mut self, ms: u32);
}
