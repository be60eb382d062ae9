//! Seams between widgets and whatever renders them.

use std::rc::Rc;

use crate::{Dispose, PointerEvent, Result, ValueRef, View};

/// Width of a scrollable element's visible viewport and of its full content.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollExtent {
    pub viewport: f32,
    pub content: f32,
}

impl ScrollExtent {
    pub fn new(viewport: f32, content: f32) -> Self {
        Self { viewport, content }
    }
}

/// Live measurement of a rendered element.
pub trait Measure {
    fn extent(&self) -> ScrollExtent;
}

/// Handle a widget keeps to the element rendered from one of its views.
///
/// The host binds it when the element exists; reads always measure the live
/// element, nothing is cached.
#[derive(Clone, Default)]
pub struct NodeRef(ValueRef<Option<Rc<dyn Measure>>>);

impl NodeRef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&self, measure: Rc<dyn Measure>) {
        self.0.set(Some(measure));
    }

    pub fn is_bound(&self) -> bool {
        self.0.with(Option::is_some)
    }

    pub fn extent(&self) -> Option<ScrollExtent> {
        self.0.get().map(|m| m.extent())
    }
}

impl std::fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("bound", &self.is_bound())
            .finish()
    }
}

/// Listeners a widget installs on the global input surface while a drag is
/// in flight.
#[derive(Clone)]
pub struct CaptureHandlers {
    pub on_move: Rc<dyn Fn(PointerEvent)>,
    /// Receives both `Up` and `Cancel`.
    pub on_release: Rc<dyn Fn(PointerEvent)>,
}

impl std::fmt::Debug for CaptureHandlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CaptureHandlers { .. }")
    }
}

/// The page-wide input surface (the browser `window`), so a drag keeps
/// tracking after the pointer leaves the widget.
pub trait InputSurface {
    /// Installs `handlers` until the returned guard runs.
    fn capture(&self, handlers: CaptureHandlers) -> Result<Dispose>;
}

/// Something a host can mount: a view plus a way to hear that it changed.
pub trait Component {
    fn view(&self) -> View;

    /// Calls `f` after any state that affects [`Component::view`] changes.
    fn on_change(&self, f: Rc<dyn Fn()>);
}
