use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;
use wasm_bindgen::prelude::wasm_bindgen;

use super::{log_entries, observe, DEFAULT_TARGET};
use crate::options::ObserverOptions;

/// Route `tracing` events to the browser console.
///
/// Does nothing if a global subscriber is already installed.
pub fn init_logging() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    if tracing_subscriber::registry().with(fmt_layer).try_init().is_err() {
        tracing::debug!("a global subscriber is already installed");
    }
}

/// Log visibility changes of `#my-element` for as long as the page lives.
///
/// A missing element leaves the page without an observation.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    init_logging();

    match observe(DEFAULT_TARGET, &ObserverOptions::default(), log_entries) {
        Ok(handle) => handle.forget(),
        Err(err) => tracing::warn!("not observing {DEFAULT_TARGET}: {err}"),
    }
}
