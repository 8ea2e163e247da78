//! Parliament Speech Explorer - Main Entry Point
//!
//! Pure browser client: all data comes from the remote search/keyword
//! service configured in `config`. There is no server side in this crate.

use parliament_speech_explorer::app::App;

fn main() {
    // Log to browser console to confirm WASM loaded
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&"[WASM] Parliament Speech Explorer initialized".into());

    dioxus::launch(App);
}
