//! # Locals
//!
//! Thread‑local values a host provides to everything built inside a closure.
//! Widgets read them once, at construction:
//!
//! ```rust
//! use std::rc::Rc;
//! use glide_core::*;
//! use glide_core::headless::HeadlessSurface;
//!
//! let surface = Rc::new(HeadlessSurface::new());
//! with_input_surface(surface, || {
//!     assert!(input_surface().is_some());
//! });
//! assert!(input_surface().is_none());
//! ```

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::InputSurface;

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>> = RefCell::new(Vec::new());
}

fn with_locals_frame<R>(f: impl FnOnce() -> R) -> R {
    // Non-panicking frame guard (ensures pop on unwind)
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    LOCALS_STACK.with(|st| st.borrow_mut().push(HashMap::new()));
    let _guard = Guard;
    f()
}

fn set_local_boxed(t: TypeId, v: Box<dyn Any>) {
    LOCALS_STACK.with(|st| {
        if let Some(top) = st.borrow_mut().last_mut() {
            top.insert(t, v);
        }
    });
}

fn local<T: Clone + 'static>() -> Option<T> {
    LOCALS_STACK.with(|st| {
        st.borrow()
            .iter()
            .rev()
            .find_map(|frame| frame.get(&TypeId::of::<T>()))
            .and_then(|v| v.downcast_ref::<T>())
            .cloned()
    })
}

pub fn with_input_surface<R>(surface: Rc<dyn InputSurface>, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        set_local_boxed(TypeId::of::<Rc<dyn InputSurface>>(), Box::new(surface));
        f()
    })
}

/// The innermost surface provided with [`with_input_surface`].
pub fn input_surface() -> Option<Rc<dyn InputSurface>> {
    local::<Rc<dyn InputSurface>>()
}
