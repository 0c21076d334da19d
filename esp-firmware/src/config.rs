// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

// ============================================================================
// Pin-Zuordnungen
// ============================================================================

/// GPIO-Pin für den Touch-Sensor (digitale Eingangs-Leitung)
/// Der Sensor liefert HIGH bei Berührung, LOW sonst
pub const TOUCH_GPIO_PIN: u8 = 7;

/// GPIO-Pin für die Status-LED (digitale Ausgangs-Leitung)
/// Die LED spiegelt den zuletzt abgetasteten Sensor-Zustand
pub const LED_GPIO_PIN: u8 = 13;

/// GPIO-Pin für die serielle Status-Ausgabe (UART1 TX)
/// UART0 bleibt für den defmt Diagnose-Kanal reserviert
pub const SERIAL_TX_PIN: u8 = 4;

// ============================================================================
// Serielle Schnittstelle
// ============================================================================

/// Baudrate der seriellen Status-Ausgabe
pub const SERIAL_BAUD_RATE: u32 = 9600;

// ============================================================================
// Poll-Schleife
// ============================================================================

/// Pause zwischen zwei Sense-React-Iterationen in Millisekunden
/// Begrenzt auch die Ausgaberate auf der seriellen Schnittstelle
pub const POLL_INTERVAL_MS: u32 = 200;
