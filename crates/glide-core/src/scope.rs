use std::cell::RefCell;
use std::rc::{Rc, Weak};

thread_local! {
    static CURRENT_SCOPE: RefCell<Option<Weak<ScopeInner>>> = const { RefCell::new(None) };
}

/// Owner of cleanups for everything built while it is current.
///
/// Hosts create one per mounted app and dispose it on unmount; widgets
/// register their teardown with [`current_scope`] at construction.
pub struct Scope {
    inner: Rc<ScopeInner>,
}

struct ScopeInner {
    disposers: RefCell<Vec<Box<dyn FnOnce()>>>,
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl Scope {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(ScopeInner {
                disposers: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn run<R>(&self, f: impl FnOnce() -> R) -> R {
        // Restores the previous scope on unwind too.
        struct Restore(Option<Weak<ScopeInner>>);
        impl Drop for Restore {
            fn drop(&mut self) {
                let prev = self.0.take();
                CURRENT_SCOPE.with(|current| *current.borrow_mut() = prev);
            }
        }

        let prev = CURRENT_SCOPE.with(|current| {
            current
                .borrow_mut()
                .replace(Rc::downgrade(&self.inner))
        });
        let _restore = Restore(prev);
        f()
    }

    pub fn add_disposer(&self, disposer: impl FnOnce() + 'static) {
        self.inner.disposers.borrow_mut().push(Box::new(disposer));
    }

    pub fn dispose(self) {
        let disposers = std::mem::take(&mut *self.inner.disposers.borrow_mut());
        for disposer in disposers.into_iter().rev() {
            disposer();
        }
    }
}

impl Drop for ScopeInner {
    fn drop(&mut self) {
        let disposers = std::mem::take(self.disposers.get_mut());
        for disposer in disposers.into_iter().rev() {
            disposer();
        }
    }
}

impl Clone for Scope {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scope")
            .field("disposers", &self.inner.disposers.borrow().len())
            .finish()
    }
}

pub fn current_scope() -> Option<Scope> {
    CURRENT_SCOPE.with(|current| {
        current
            .borrow()
            .as_ref()
            .and_then(|weak| weak.upgrade().map(|inner| Scope { inner }))
    })
}

/// Registers `cleanup` with the current scope, if any.
pub fn on_scope_dispose(cleanup: impl FnOnce() + 'static) {
    if let Some(scope) = current_scope() {
        scope.add_disposer(cleanup);
    }
}
