/// High‑level semantic role of a view, similar to ARIA roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Container,
    List,
    ListItem,
    Image,
    Button,
}

impl Role {
    /// Explicit ARIA role to emit, or `None` when the element's implicit role
    /// already says it.
    pub fn aria_role(self) -> Option<&'static str> {
        match self {
            Role::Button => Some("button"),
            Role::Container | Role::List | Role::ListItem | Role::Image => None,
        }
    }
}

/// Semantics attached to a `View`, used for accessibility attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct Semantics {
    pub role: Role,
    /// Human‑readable label for screen readers. Images render it as `alt`,
    /// everything else as `aria-label`.
    pub label: Option<String>,
}

impl Semantics {
    pub fn new(role: Role) -> Self {
        Self { role, label: None }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
