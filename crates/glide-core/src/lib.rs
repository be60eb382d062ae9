//! # Views, Signals, and Hosts
//!
//! Glide keeps a widget's logic in plain Rust structs and describes its output
//! as a small retained view tree. There are four main pieces:
//!
//! - `View` / `Modifier`: what to render (tag, classes, transform, handlers).
//! - `Signal<T>` / `ValueRef<T>`: state that callbacks read synchronously.
//! - `Dispose` / `Scope`: cleanup guards that run exactly once.
//! - `Measure` / `InputSurface`: the seams a host (browser, headless) fills.
//!
//! ## Signals
//!
//! `Signal<T>` is a cloneable handle to a piece of state that the host
//! re-renders from:
//!
//! ```rust
//! use glide_core::*;
//!
//! let offset = signal(0.0f32);
//! offset.subscribe(|v| println!("offset is now {v}"));
//! offset.set(-400.0);
//! assert_eq!(offset.get(), -400.0);
//! ```
//!
//! Subscribers run after the new value is stored, so they may read (or even
//! write) the signal again.
//!
//! ## Value refs
//!
//! `ValueRef<T>` is the non-reactive sibling: a holder written wherever the
//! logical state is written and read directly from event handlers, so a
//! handler never sees a stale value waiting for a re-render.
//!
//! ## Hosts
//!
//! Widgets never talk to the DOM. Measurement goes through a `NodeRef` the
//! host binds to a `Measure`, and drags that must outlive the widget's bounds
//! open a capture session on the `InputSurface` provided with
//! [`with_input_surface`]. The `headless` module implements both seams for
//! tests and native rendering.

pub mod effects;
pub mod error;
pub mod geometry;
pub mod headless;
pub mod host;
pub mod input;
pub mod locals;
pub mod markup;
pub mod modifier;
pub mod prelude;
pub mod scope;
pub mod semantics;
pub mod signal;
pub mod state;
pub mod view;

pub use effects::*;
pub use error::*;
pub use geometry::*;
pub use host::*;
pub use input::*;
pub use locals::*;
pub use modifier::*;
pub use scope::*;
pub use semantics::*;
pub use signal::*;
pub use state::*;
pub use view::*;
