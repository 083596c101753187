#[cfg(target_arch = "wasm32")]
fn main() {
    storeadmin_frontend::start();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("storeadmin-frontend runs in the browser; build it for wasm32-unknown-unknown");
}
