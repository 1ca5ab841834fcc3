/// High‑level semantic role of a view, similar to ARIA roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Text,
    Heading,
    Button,
    Link,
    Image,
    Navigation,
    Region,
    Container,
}

impl Role {
    pub fn aria(&self) -> &'static str {
        match self {
            Role::Text => "text",
            Role::Heading => "heading",
            Role::Button => "button",
            Role::Link => "link",
            Role::Image => "img",
            Role::Navigation => "navigation",
            Role::Region => "region",
            Role::Container => "group",
        }
    }
}

/// Semantics attached to a `View`, used for the accessibility tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Semantics {
    pub role: Role,
    /// Human‑readable label for screen readers. For buttons, this is the
    /// “name” that is announced.
    pub label: Option<String>,
    /// Marks the current item of a set, e.g. the highlighted nav link.
    pub current: bool,
}

impl Semantics {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            label: None,
            current: false,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn current(mut self, current: bool) -> Self {
        self.current = current;
        self
    }
}
