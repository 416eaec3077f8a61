//! Browser-hosted vector scope.
//!
//! This crate is a stub by default so the workspace builds on native targets
//! without requiring wasm toolchains. The host-testable pieces (payloads, view
//! state, renderer) live in `flambe_view`.
//!
//! Enable the real app with: `--features web` (and a wasm32 target).

/// Placeholder function for non-web (or non-wasm) builds.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn placeholder() {
    // No-op.
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;
