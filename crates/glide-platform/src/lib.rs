//! Platform runners: the browser (wasm32, via `web-sys`) and static HTML
//! pages for native builds.
//!
//! Both hosts render the same [`View`](glide_core::View) tree and ship the
//! carousel stylesheet alongside it, so a page rendered natively looks the
//! same as the first frame the browser runner mounts.

pub mod page;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use page::{PageOptions, render_page};
#[cfg(target_arch = "wasm32")]
pub use web::{WebApp, WebOptions, run_web_app};

/// Id of the element the app is mounted into when none is configured.
pub const DEFAULT_MOUNT_ID: &str = "app";
