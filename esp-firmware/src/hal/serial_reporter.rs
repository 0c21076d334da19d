// Serielle Status-Ausgabe
//
// Kapselt die UART-Schnittstelle hinter dem StatusReporter Trait
// um Tests mit Mock-Implementierungen zu ermöglichen.

use embedded_io::Write;
use esp_core::{ReportError, StatusReporter, TouchStatus};

/// Serieller Status-Reporter
///
/// Schreibt pro Iteration genau eine CRLF-terminierte Status-Zeile.
/// Generisch über `embedded_io::Write`, damit der blockierende esp-hal
/// UART-Treiber eingesetzt werden kann.
pub struct SerialStatusReporter<W> {
    tx: W,
}

impl<W: Write> SerialStatusReporter<W> {
    /// Erstellt einen neuen SerialStatusReporter
    ///
    /// # Parameter
    /// - `tx`: sendeseitig konfigurierte serielle Schnittstelle
    pub fn new(tx: W) -> Self {
        Self { tx }
    }
}

impl<W: Write + Send> StatusReporter for SerialStatusReporter<W> {
    fn report(&mut self, status: TouchStatus) -> Result<(), ReportError> {
        self.tx
            .write_all(status.message().as_bytes())
            .map_err(|_| ReportError::WriteFailed)?;
        self.tx
            .write_all(b"\r\n")
            .map_err(|_| ReportError::WriteFailed)?;
        self.tx.flush().map_err(|_| ReportError::WriteFailed)
    }
}
