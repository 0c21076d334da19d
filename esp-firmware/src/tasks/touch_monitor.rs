// Touch-Monitor Schleife - tastet den Sensor ab und spiegelt den Zustand
use defmt::{debug, error};

use esp_core::{DelaySource, StatusLed, StatusReporter, TouchSensor, poll_iteration};

/// Touch-Monitor Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Diese Funktion enthält die komplette Überwachungs-Schleife:
/// - Tastet die Touch-Leitung einmal pro Iteration ab
/// - Setzt die Status-LED auf den abgetasteten Zustand
/// - Gibt die Status-Zeile auf der seriellen Schnittstelle aus
/// - Pausiert danach für das konfigurierte Intervall
///
/// # Trait-basierte Abstraktion
/// Die generischen Parameter ermöglichen:
/// - Real Hardware (GpioTouchSensor, GpioStatusLed, ...) im Production-Code
/// - Mock Implementations in Host-Tests
///
/// # Fehlerbehandlung
/// Fehler einer Iteration werden geloggt und verworfen - die Schleife
/// terminiert nie und tastet in der nächsten Iteration erneut ab. Es gibt
/// keinen Zustand zwischen Iterationen, daher auch nichts aufzuräumen.
///
/// # Parameter
/// - `sensor`: Touch-Sensor (Hardware oder Mock)
/// - `led`: Status-LED (Hardware oder Mock)
/// - `reporter`: serielle Status-Ausgabe (Hardware oder Mock)
/// - `delay`: Zeitquelle für die Pause (Hardware oder Fake-Clock)
/// - `interval_ms`: Pause zwischen zwei Iterationen
pub fn touch_monitor_logic<S, L, R, D>(
    mut sensor: S,
    mut led: L,
    mut reporter: R,
    mut delay: D,
    interval_ms: u32,
) -> !
where
    S: TouchSensor,
    L: StatusLed,
    R: StatusReporter,
    D: DelaySource,
{
    loop {
        match poll_iteration(&mut sensor, &mut led, &mut reporter) {
            Ok(status) => debug!("Status: {}", status),
            Err(e) => error!("Iteration fehlgeschlagen: {}", e),
        }

        // Pause auch nach Fehlern: konstante Abtastrate, kein Busy-Loop
        delay.delay_ms(interval_ms);
    }
}
