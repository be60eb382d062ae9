use std::rc::Rc;

use smallvec::SmallVec;

use crate::{Callback, NodeRef, PointerEvent, Transform};

#[derive(Clone, Default)]
pub struct Modifier {
    /// Class names, rendered space separated in insertion order.
    pub classes: SmallVec<[&'static str; 2]>,
    pub transform: Option<Transform>,
    /// Rendered as `data-testid`.
    pub test_id: Option<&'static str>,
    pub on_pointer_down: Option<Rc<dyn Fn(PointerEvent)>>,
    pub on_click: Option<Callback>,
    /// Filled by the host with the rendered element's measurements.
    pub node_ref: Option<NodeRef>,
}

impl std::fmt::Debug for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Modifier")
            .field("classes", &self.classes)
            .field("transform", &self.transform)
            .field("test_id", &self.test_id)
            .field(
                "on_pointer_down",
                &self.on_pointer_down.as_ref().map(|_| "..."),
            )
            .field("on_click", &self.on_click.as_ref().map(|_| "..."))
            .field("node_ref", &self.node_ref)
            .finish()
    }
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn class(mut self, name: &'static str) -> Self {
        if !self.classes.contains(&name) {
            self.classes.push(name);
        }
        self
    }
    /// Adds `name` only when `on` holds.
    pub fn class_if(self, on: bool, name: &'static str) -> Self {
        if on { self.class(name) } else { self }
    }
    pub fn transform(mut self, t: Transform) -> Self {
        self.transform = Some(t);
        self
    }
    pub fn test_id(mut self, id: &'static str) -> Self {
        self.test_id = Some(id);
        self
    }
    pub fn on_pointer_down(mut self, f: impl Fn(PointerEvent) + 'static) -> Self {
        self.on_pointer_down = Some(Rc::new(f));
        self
    }
    pub fn on_click(mut self, f: impl Fn() + 'static) -> Self {
        self.on_click = Some(Rc::new(f));
        self
    }
    pub fn node_ref(mut self, r: NodeRef) -> Self {
        self.node_ref = Some(r);
        self
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| *c == name)
    }

    /// The `class` attribute value, if any class is set.
    pub fn class_attr(&self) -> Option<String> {
        (!self.classes.is_empty()).then(|| self.classes.join(" "))
    }

    /// The inline `style` attribute value, if any.
    pub fn style_attr(&self) -> Option<String> {
        self.transform
            .map(|t| format!("transform: {}", t.to_css()))
    }
}
