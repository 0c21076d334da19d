// Zeitquelle der Poll-Schleife
//
// Newtype über dem esp-hal Delay Treiber: DelaySource stammt aus
// esp-core und kann nicht direkt für den fremden Typ implementiert werden.

use embedded_hal::delay::DelayNs;
use esp_core::DelaySource;

/// Blockierende Zeitquelle auf Basis eines `DelayNs` Treibers
pub struct HalDelaySource<D> {
    delay: D,
}

impl<D: DelayNs> HalDelaySource<D> {
    /// Erstellt eine neue HalDelaySource
    ///
    /// # Parameter
    /// - `delay`: blockierender Delay-Treiber (z.B. `esp_hal::delay::Delay`)
    pub fn new(delay: D) -> Self {
        Self { delay }
    }
}

impl<D: DelayNs + Send> DelaySource for HalDelaySource<D> {
    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
