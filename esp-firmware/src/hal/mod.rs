// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter den Traits aus esp-core,
// um Testbarkeit und Wartbarkeit zu verbessern.

pub mod delay;
pub mod serial_reporter;
pub mod status_led;
pub mod touch_sensor;

pub use delay::HalDelaySource;
pub use serial_reporter::SerialStatusReporter;
pub use status_led::GpioStatusLed;
pub use touch_sensor::GpioTouchSensor;
