// Task-Modul: Enthält die Endlos-Schleife der Firmware
//
// Kein Async-Runtime, keine Channels: die Überwachung ist strikt
// sequenziell und läuft direkt im Main-Thread.

pub mod touch_monitor;

// Re-export für einfachen Import
pub use touch_monitor::touch_monitor_logic;
