//! Trunk entry point for the browser build.
//!
//! The native build of this binary is an empty shell; everything real is
//! behind the `csr` feature the WASM build enables.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        leptos::mount::mount_to_body(client::app::App);
    }
}
