use crate::{Modifier, Semantics};
use std::rc::Rc;

pub type Callback = Rc<dyn Fn()>;

#[derive(Clone, Debug, PartialEq)]
pub enum ViewKind {
    Box,
    List,
    ListItem,
    Image {
        src: String,
        alt: String,
        draggable: bool,
    },
}

impl ViewKind {
    /// HTML tag the host renders this kind as.
    pub fn tag(&self) -> &'static str {
        match self {
            ViewKind::Box => "div",
            ViewKind::List => "ul",
            ViewKind::ListItem => "li",
            ViewKind::Image { .. } => "img",
        }
    }
}

#[derive(Clone, Debug)]
pub struct View {
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
    pub semantics: Option<Semantics>,
}

impl View {
    pub fn new(kind: ViewKind) -> Self {
        View {
            kind,
            modifier: Modifier::default(),
            children: vec![],
            semantics: None,
        }
    }
    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }
    pub fn child(mut self, kid: View) -> Self {
        self.children.push(kid);
        self
    }
    pub fn semantics(mut self, s: Semantics) -> Self {
        self.semantics = Some(s);
        self
    }

    /// Depth-first, pre-order walk over this view and its descendants.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a View)) {
        f(self);
        for c in &self.children {
            c.walk(f);
        }
    }

    pub fn find_all(&self, pred: impl Fn(&View) -> bool) -> Vec<&View> {
        let mut out = Vec::new();
        self.walk(&mut |v| {
            if pred(v) {
                out.push(v);
            }
        });
        out
    }

    pub fn find(&self, pred: impl Fn(&View) -> bool) -> Option<&View> {
        self.find_all(pred).into_iter().next()
    }

    pub fn by_test_id(&self, id: &str) -> Vec<&View> {
        self.find_all(|v| v.modifier.test_id == Some(id))
    }

    pub fn by_class(&self, class: &str) -> Vec<&View> {
        self.find_all(|v| v.modifier.has_class(class))
    }
}
