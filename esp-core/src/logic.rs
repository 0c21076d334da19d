//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use crate::traits::{StatusLed, StatusReporter, TouchSensor};
use crate::types::{MonitorError, TouchStatus};

/// Wertet den rohen Digital-Pegel der Touch-Leitung aus
///
/// Reine, gedächtnislose Funktion: keine Entprellung, keine Filterung,
/// keine Invertierung. Das Ergebnis hängt nur vom aktuellen Pegel ab.
///
/// # Beispiele
///
/// ```
/// # use esp_core::{evaluate_touch, TouchStatus};
/// assert_eq!(evaluate_touch(true), TouchStatus::Touched);
/// assert_eq!(evaluate_touch(false), TouchStatus::NotTouched);
/// ```
pub fn evaluate_touch(touched: bool) -> TouchStatus {
    TouchStatus::from_level(touched)
}

/// Führt eine komplette Sense-React-Iteration aus
///
/// Ablauf, strikt sequenziell:
/// 1. Touch-Leitung abtasten
/// 2. LED auf den abgetasteten Zustand setzen
/// 3. Status-Zeile ausgeben
///
/// Die Pause zwischen zwei Iterationen gehört nicht hierher - sie liegt
/// beim Aufrufer (Firmware-Schleife bzw. Test).
///
/// # Fehlerbehandlung
/// Capability-Fehler werden via `?` propagiert. Schlägt das Abtasten fehl,
/// bleiben LED und Ausgabe unberührt; schlägt das LED-Setzen fehl, entfällt
/// die Ausgabe dieser Iteration.
pub fn poll_iteration<S, L, R>(
    sensor: &mut S,
    led: &mut L,
    reporter: &mut R,
) -> Result<TouchStatus, MonitorError>
where
    S: TouchSensor,
    L: StatusLed,
    R: StatusReporter,
{
    let status = evaluate_touch(sensor.is_touched()?);
    led.set(status.led_on())?;
    reporter.report(status)?;
    Ok(status)
}
