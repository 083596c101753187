pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

/// Browser entry point: logging, runtime config, then the app.
#[cfg(target_arch = "wasm32")]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already initialised: {}", err).into());
    }
    log::info!("Starting Store Admin frontend");

    leptos::spawn_local(config::init());
    router::mount_app();
}
