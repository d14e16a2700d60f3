//! Binary entrypoint for the browser-hosted `gallery` application.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    gallery::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `gallery_app` for wasm32 with the `csr` feature."
    );
}
