//! Core Types für die Touch-Überwachung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use crate::traits::{LedError, ReportError, SensorError};

/// Ergebnis einer einzelnen Abtastung der Touch-Leitung
///
/// Es gibt genau zwei Zustände - die Abtastung ist strikt binär,
/// unbestimmte Pegel werden bereits vom Digital-Read der Plattform
/// auf HIGH oder LOW abgebildet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchStatus {
    Touched,
    NotTouched,
}

impl TouchStatus {
    /// Erstellt einen TouchStatus aus dem rohen Digital-Pegel
    pub fn from_level(touched: bool) -> Self {
        if touched {
            Self::Touched
        } else {
            Self::NotTouched
        }
    }

    /// Status-Text für die serielle Ausgabe
    pub fn message(&self) -> &'static str {
        match self {
            Self::Touched => "Touched!!",
            Self::NotTouched => "Not touched",
        }
    }

    /// Soll-Zustand der Status-LED für diesen Status
    pub fn led_on(&self) -> bool {
        matches!(self, Self::Touched)
    }
}

/// Fehler einer kompletten Poll-Iteration
///
/// Fasst die Fehler der einzelnen Hardware-Capabilities zusammen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorError {
    Sensor(SensorError),
    Led(LedError),
    Report(ReportError),
}

impl From<SensorError> for MonitorError {
    fn from(e: SensorError) -> Self {
        Self::Sensor(e)
    }
}

impl From<LedError> for MonitorError {
    fn from(e: LedError) -> Self {
        Self::Led(e)
    }
}

impl From<ReportError> for MonitorError {
    fn from(e: ReportError) -> Self {
        Self::Report(e)
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for TouchStatus {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.message())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MonitorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            MonitorError::Sensor(_) => defmt::write!(fmt, "sensor read failed"),
            MonitorError::Led(_) => defmt::write!(fmt, "LED write failed"),
            MonitorError::Report(_) => defmt::write!(fmt, "status report failed"),
        }
    }
}
