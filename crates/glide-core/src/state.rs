use std::cell::RefCell;
use std::rc::Rc;

/// A value holder whose current value can be read synchronously inside a
/// callback, without waiting for a re-render.
///
/// Unlike [`Signal`](crate::Signal), writes do not notify anyone: this is the
/// place for snapshots that handlers need but the rendered output does not.
#[derive(Default)]
pub struct ValueRef<T>(Rc<RefCell<T>>);

impl<T> Clone for ValueRef<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> ValueRef<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    pub fn set(&self, value: T) {
        *self.0.borrow_mut() = value;
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0.borrow())
    }
}

impl<T: Clone> ValueRef<T> {
    pub fn get(&self) -> T {
        self.0.borrow().clone()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ValueRef<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ValueRef").field(&*self.0.borrow()).finish()
    }
}
