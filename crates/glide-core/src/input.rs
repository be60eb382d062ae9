//! Device-agnostic pointer input.
//!
//! Hosts convert platform mouse and touch events into [`PointerEvent`] at the
//! input boundary; everything above it only ever asks for
//! [`PointerEvent::position`].

use smallvec::SmallVec;

use crate::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// The device-specific payload of a pointer event.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerInput {
    /// Touch points that changed in this event, in platform order.
    Touch { changed_touches: SmallVec<[Vec2; 2]> },
    Mouse { position: Vec2 },
}

impl PointerInput {
    /// The coordinate the event is about: the first changed touch for touch
    /// input, the cursor for mouse input. `None` for a touch event that
    /// reports no changed touches.
    pub fn position(&self) -> Option<Vec2> {
        match self {
            PointerInput::Touch { changed_touches } => changed_touches.first().copied(),
            PointerInput::Mouse { position } => Some(*position),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub input: PointerInput,
}

impl PointerEvent {
    pub fn mouse(phase: PointerPhase, x: f32, y: f32) -> Self {
        Self {
            phase,
            input: PointerInput::Mouse {
                position: Vec2::new(x, y),
            },
        }
    }

    pub fn touch(phase: PointerPhase, changed_touches: impl IntoIterator<Item = Vec2>) -> Self {
        Self {
            phase,
            input: PointerInput::Touch {
                changed_touches: changed_touches.into_iter().collect(),
            },
        }
    }

    pub fn position(&self) -> Option<Vec2> {
        self.input.position()
    }

    /// True for the phases that end a gesture.
    pub fn is_release(&self) -> bool {
        matches!(self.phase, PointerPhase::Up | PointerPhase::Cancel)
    }
}
