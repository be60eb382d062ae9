pub use crate::effects::Dispose;
pub use crate::error::{GlideError, Result};
pub use crate::geometry::{Transform, Vec2};
pub use crate::host::{CaptureHandlers, Component, InputSurface, Measure, NodeRef, ScrollExtent};
pub use crate::input::{PointerEvent, PointerInput, PointerPhase};
pub use crate::locals::{input_surface, with_input_surface};
pub use crate::modifier::Modifier;
pub use crate::scope::{Scope, current_scope, on_scope_dispose};
pub use crate::semantics::{Role, Semantics};
pub use crate::signal::{Signal, signal};
pub use crate::state::ValueRef;
pub use crate::view::{Callback, View, ViewKind};
