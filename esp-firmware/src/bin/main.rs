// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp-hal bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

use defmt::info;

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::uart::{Config as UartConfig, Uart};

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_touch_monitor::config::{LED_GPIO_PIN, POLL_INTERVAL_MS, SERIAL_BAUD_RATE, TOUCH_GPIO_PIN};
use esp_touch_monitor::hal::{GpioStatusLed, GpioTouchSensor, HalDelaySource, SerialStatusReporter};
use esp_touch_monitor::tasks::touch_monitor_logic;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Konfiguriert die beiden GPIO-Leitungen und die serielle Schnittstelle
/// (läuft genau einmal), dann geht die Firmware direkt in die
/// Endlos-Schleife über. Kehrt nie zurück.
#[esp_hal::main]
fn main() -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Touch-Leitung: digitaler Eingang, floating
    // Der Pegel kommt aktiv vom Sensor-Modul, kein interner Pull nötig
    let touch_pin = Input::new(
        peripherals.GPIO7,
        InputConfig::default().with_pull(Pull::None),
    );

    // LED-Leitung: digitaler Ausgang (push-pull), startet deasserted
    let led_pin = Output::new(peripherals.GPIO13, Level::Low, OutputConfig::default());

    // Serielle Status-Ausgabe: UART1, TX-only, 9600 Baud
    // UART0 bleibt für den defmt Diagnose-Kanal frei
    let uart_config = UartConfig::default().with_baudrate(SERIAL_BAUD_RATE);
    let uart = Uart::new(peripherals.UART1, uart_config)
        .expect("UART-Konfiguration fehlgeschlagen")
        .with_tx(peripherals.GPIO4);

    info!(
        "Touch-Monitor gestartet: Touch=GPIO{}, LED=GPIO{}, {} Baud, {} ms Intervall",
        TOUCH_GPIO_PIN, LED_GPIO_PIN, SERIAL_BAUD_RATE, POLL_INTERVAL_MS
    );

    // Capabilities einmalig erstellen und in die Schleife geben
    let sensor = GpioTouchSensor::new(touch_pin);
    let led = GpioStatusLed::new(led_pin);
    let reporter = SerialStatusReporter::new(uart);
    let delay = HalDelaySource::new(Delay::new());

    touch_monitor_logic(sensor, led, reporter, delay, POLL_INTERVAL_MS)
}
