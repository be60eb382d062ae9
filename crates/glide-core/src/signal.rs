use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone)]
pub struct Signal<T: 'static>(Rc<Inner<T>>);

struct Inner<T> {
    value: RefCell<T>,
    subs: RefCell<Vec<Rc<dyn Fn(&T)>>>,
}

impl<T: Clone> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(Inner {
            value: RefCell::new(value),
            subs: RefCell::new(Vec::new()),
        }))
    }

    pub fn get(&self) -> T {
        self.0.value.borrow().clone()
    }

    pub fn set(&self, v: T) {
        *self.0.value.borrow_mut() = v;
        self.notify();
    }

    /// Calls `f` with the new value after every write.
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) {
        self.0.subs.borrow_mut().push(Rc::new(f));
    }

    // Borrows are released before subscribers run.
    fn notify(&self) {
        let subs: Vec<Rc<dyn Fn(&T)>> = self.0.subs.borrow().clone();
        if subs.is_empty() {
            return;
        }
        let snapshot = self.get();
        for s in subs {
            s(&snapshot);
        }
    }
}

impl<T: Clone + std::fmt::Debug> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Signal").field(&*self.0.value.borrow()).finish()
    }
}

pub fn signal<T: Clone>(t: T) -> Signal<T> {
    Signal::new(t)
}
