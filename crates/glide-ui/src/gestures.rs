//! # Swipe gesture
//!
//! Turns one horizontal drag into a carousel offset. Offsets are translations
//! of the slide list: `0` shows the first slide, `-container_width` the
//! second, down to `min_offset` for the last.
//!
//! A gesture is press → move × N → release:
//!
//! - [`SwipeGesture::begin`] snapshots the resting offset, the press
//!   coordinate and the list's measurements.
//! - [`SwipeGesture::drag`] maps a pointer coordinate to an offset clamped to
//!   `[min_offset, 0]`.
//! - [`SwipeGesture::release`] snaps to a slide boundary. A drag longer than
//!   the threshold moves one slide in the drag direction (`floor` when the
//!   list moved left, `ceil` when it moved right); a shorter one settles on
//!   the nearest boundary.
//!
//! The engine is pure: no signals, no host. [`Carousel`](crate::Carousel)
//! owns one and feeds it events.

use glide_core::ScrollExtent;

/// Default distance, in pixels, a drag must exceed to change slides.
pub const MIN_SWIPE_REQUIRED: f32 = 40.0;

/// Snapshot taken when a drag starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureState {
    /// Visible width of the list.
    pub container_width: f32,
    /// Full scrollable width of the list.
    pub content_width: f32,
    /// `container_width - content_width`, never above 0.
    pub min_offset: f32,
    pub start_pointer_x: f32,
    /// Resting offset before this gesture.
    pub committed_offset: f32,
    pub is_dragging: bool,
}

impl GestureState {
    pub fn begin(extent: ScrollExtent, start_pointer_x: f32, committed_offset: f32) -> Self {
        let container_width = finite_or_zero(extent.viewport);
        let content_width = finite_or_zero(extent.content);
        let min_offset = (container_width - content_width).min(0.0);
        Self {
            container_width,
            content_width,
            min_offset,
            start_pointer_x,
            committed_offset: clamp_offset(committed_offset, min_offset),
            is_dragging: true,
        }
    }

    /// Offset for the pointer at `pointer_x`.
    pub fn offset_at(&self, pointer_x: f32) -> f32 {
        let delta = self.start_pointer_x - pointer_x;
        clamp_offset(self.committed_offset - delta, self.min_offset)
    }
}

/// Where a released gesture comes to rest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snap {
    pub offset: f32,
    pub index: usize,
}

impl Snap {
    pub const START: Snap = Snap {
        offset: 0.0,
        index: 0,
    };
}

/// Clamps `candidate` into `[min_offset, 0]`.
pub fn clamp_offset(candidate: f32, min_offset: f32) -> f32 {
    if !candidate.is_finite() {
        return 0.0;
    }
    let min_offset = min_offset.min(0.0);
    // + 0.0 turns -0.0 into 0.0
    candidate.clamp(min_offset, 0.0) + 0.0
}

/// Snaps `current_offset` to a multiple of the container width.
///
/// Ties on the nearest-boundary path round toward positive infinity, the way
/// browsers round, so a half-slide drag from the first slide stays put.
/// The multiplier is kept inside `[ceil(min_offset / width), 0]`, which only
/// matters when the content is not a whole number of slides wide.
pub fn snap(state: &GestureState, current_offset: f32, threshold: f32) -> Snap {
    let width = state.container_width;
    if !(width.is_finite() && width > 0.0) {
        log::warn!("swipe released with unusable container width {width}; resetting to start");
        return Snap::START;
    }

    let diff = state.committed_offset - current_offset;
    let ratio = current_offset / width;
    let slides = if diff.abs() > threshold {
        if diff > 0.0 {
            ratio.floor()
        } else {
            ratio.ceil()
        }
    } else {
        (ratio + 0.5).floor()
    };
    let lowest = (state.min_offset / width).ceil();
    let slides = slides.clamp(lowest.min(0.0), 0.0);

    Snap {
        offset: slides * width + 0.0,
        index: (-slides) as usize,
    }
}

/// Offset showing slide `index` in a container `container_width` wide.
pub fn offset_for_index(container_width: f32, index: usize) -> f32 {
    let width = finite_or_zero(container_width).max(0.0);
    -(width * index as f32) + 0.0
}

fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() { v } else { 0.0 }
}

/// Gesture lifecycle: idle until [`begin`](Self::begin), dragging until
/// [`release`](Self::release) or [`cancel`](Self::cancel).
#[derive(Clone, Debug)]
pub struct SwipeGesture {
    state: Option<GestureState>,
    threshold: f32,
}

impl Default for SwipeGesture {
    fn default() -> Self {
        Self::new(MIN_SWIPE_REQUIRED)
    }
}

impl SwipeGesture {
    pub fn new(threshold: f32) -> Self {
        Self {
            state: None,
            threshold,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_some_and(|s| s.is_dragging)
    }

    pub fn state(&self) -> Option<&GestureState> {
        self.state.as_ref()
    }

    /// Starts a drag. Returns `false`, leaving the running drag untouched, if
    /// one is already in flight.
    pub fn begin(&mut self, extent: ScrollExtent, pointer_x: f32, committed_offset: f32) -> bool {
        if self.is_dragging() {
            return false;
        }
        self.state = Some(GestureState::begin(extent, pointer_x, committed_offset));
        true
    }

    /// Offset for the pointer at `pointer_x`, or `None` when idle or the
    /// coordinate is unusable.
    pub fn drag(&self, pointer_x: f32) -> Option<f32> {
        let state = self.state.filter(|s| s.is_dragging)?;
        pointer_x.is_finite().then(|| state.offset_at(pointer_x))
    }

    /// Ends the drag and returns where it rests, or `None` when idle.
    pub fn release(&mut self, current_offset: f32) -> Option<Snap> {
        let state = self.state.take().filter(|s| s.is_dragging)?;
        Some(snap(&state, current_offset, self.threshold))
    }

    /// Drops the drag without computing a resting place.
    pub fn cancel(&mut self) {
        self.state = None;
    }
}
