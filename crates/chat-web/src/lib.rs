//! chat-widget Web Frontend
//!
//! Leptos-based WASM chat widget. The DOM side of the message lifecycle:
//! a signal-backed transcript renderer, the query box, and the bindings that
//! hand submissions to `chat_core::QueryDispatcher`.

mod app;
mod components;
mod config;
mod input;
mod pages;
mod transcript;

pub use app::App;
pub use config::WidgetConfig;
pub use input::SignalInput;
pub use pages::ChatPage;
pub use transcript::DomTranscript;

use wasm_bindgen::prelude::*;

/// Level of records forwarded to the browser console
const LOG_LEVEL: log::Level = log::Level::Debug;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // tracing events reach the console through the `log` bridge
    wasm_logger::init(wasm_logger::Config::new(LOG_LEVEL));
    log::info!("Chat widget initialized");
    leptos::mount::mount_to_body(App);
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use log::{Level, LevelFilter, Log, Metadata, Record};

    struct CaptureLogger(Mutex<Vec<(Level, String)>>);

    impl Log for CaptureLogger {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &Record<'_>) {
            if let Ok(mut records) = self.0.lock() {
                records.push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static CAPTURED: CaptureLogger = CaptureLogger(Mutex::new(Vec::new()));

    #[test]
    fn test_tracing_events_reach_console_logger() {
        log::set_logger(&CAPTURED).unwrap();
        log::set_max_level(LevelFilter::Trace);

        tracing::warn!(status = 500, "Query failed");

        let records = CAPTURED.0.lock().unwrap();
        assert!(
            records
                .iter()
                .any(|(level, text)| *level == Level::Warn && text.contains("Query failed"))
        );
    }
}
