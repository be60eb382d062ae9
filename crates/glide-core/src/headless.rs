//! A host without a browser: settable measurements, an input surface that
//! records capture sessions, and helpers that deliver input to a view tree.
//! Used by tests and by native rendering.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use smallvec::SmallVec;

use crate::{
    CaptureHandlers, Dispose, InputSurface, Measure, PointerEvent, PointerPhase, Result,
    ScrollExtent, View,
};

/// Measurement with values the caller sets, standing in for layout.
#[derive(Debug, Default)]
pub struct StaticMeasure {
    extent: Cell<ScrollExtent>,
}

impl StaticMeasure {
    pub fn new(viewport: f32, content: f32) -> Rc<Self> {
        Rc::new(Self {
            extent: Cell::new(ScrollExtent::new(viewport, content)),
        })
    }

    pub fn set(&self, viewport: f32, content: f32) {
        self.extent.set(ScrollExtent::new(viewport, content));
    }
}

impl Measure for StaticMeasure {
    fn extent(&self) -> ScrollExtent {
        self.extent.get()
    }
}

type Sessions = Rc<RefCell<SmallVec<[(u64, CaptureHandlers); 1]>>>;

/// Input surface that keeps capture sessions in memory until their guard
/// runs. [`HeadlessSurface::dispatch`] plays the part of page-wide events.
#[derive(Default)]
pub struct HeadlessSurface {
    sessions: Sessions,
    next_id: Cell<u64>,
    opened: Cell<usize>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions whose listeners are still installed.
    pub fn active_sessions(&self) -> usize {
        self.sessions.borrow().len()
    }

    /// Number of sessions ever opened.
    pub fn sessions_opened(&self) -> usize {
        self.opened.get()
    }

    /// Delivers `event` to every active session. `Down` events belong to
    /// elements, not to the surface, and are ignored. Returns how many
    /// sessions received it.
    pub fn dispatch(&self, event: PointerEvent) -> usize {
        if event.phase == PointerPhase::Down {
            return 0;
        }
        let targets: SmallVec<[CaptureHandlers; 1]> =
            self.sessions.borrow().iter().map(|(_, h)| h.clone()).collect();
        for h in &targets {
            if event.is_release() {
                (h.on_release)(event.clone());
            } else {
                (h.on_move)(event.clone());
            }
        }
        targets.len()
    }
}

impl InputSurface for HeadlessSurface {
    fn capture(&self, handlers: CaptureHandlers) -> Result<Dispose> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.opened.set(self.opened.get() + 1);
        self.sessions.borrow_mut().push((id, handlers));

        let sessions = self.sessions.clone();
        Ok(Dispose::new(move || {
            sessions.borrow_mut().retain(|(sid, _)| *sid != id);
        }))
    }
}

impl std::fmt::Debug for HeadlessSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeadlessSurface")
            .field("active", &self.active_sessions())
            .field("opened", &self.opened.get())
            .finish()
    }
}

/// Delivers `event` to the first view (pre-order) that handles pointer-down.
pub fn press(root: &View, event: PointerEvent) -> bool {
    match root.find(|v| v.modifier.on_pointer_down.is_some()) {
        Some(v) => {
            if let Some(h) = &v.modifier.on_pointer_down {
                h(event);
            }
            true
        }
        None => false,
    }
}

/// Clicks the `nth` view tagged with `test_id`.
pub fn click_test_id(root: &View, test_id: &str, nth: usize) -> bool {
    let hit = root.by_test_id(test_id).into_iter().nth(nth);
    match hit.and_then(|v| v.modifier.on_click.clone()) {
        Some(cb) => {
            cb();
            true
        }
        None => false,
    }
}
