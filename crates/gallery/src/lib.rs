//! Browser-hosted gallery for the `design_ui` variant families.
//!
//! The app renders every exported variant through the library's element
//! boundary so visual refinements can be reviewed against the real class
//! contract, without introducing app-local markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod app;

pub use app::GalleryApp;

/// Mounts the gallery onto the document body.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <GalleryApp /> })
}
