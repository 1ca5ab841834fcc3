use crate::Modifier;
use std::rc::Rc;

pub type ViewId = u64;

pub type Callback = Rc<dyn Fn()>;

#[derive(Clone)]
pub enum ViewKind {
    Surface,
    Box,
    Row,
    Column,
    /// Addressable page region; `key` doubles as its in-page anchor.
    Section {
        key: String,
    },
    Heading {
        text: String,
        level: u8,
    },
    Text {
        text: String,
        font_size: f32,
    },
    Button {
        text: String,
        active: bool,
        on_click: Option<Callback>,
    },
    Link {
        text: String,
        href: String,
        external: bool,
    },
    Image {
        src: String,
        alt: String,
        /// Shown in place of the image when it cannot be loaded.
        fallback: String,
    },
    Tag {
        text: String,
    },
    Spacer,
}

impl std::fmt::Debug for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Surface => write!(f, "Surface"),
            ViewKind::Box => write!(f, "Box"),
            ViewKind::Row => write!(f, "Row"),
            ViewKind::Column => write!(f, "Column"),
            ViewKind::Section { key } => f.debug_struct("Section").field("key", key).finish(),
            ViewKind::Heading { text, level } => f
                .debug_struct("Heading")
                .field("text", text)
                .field("level", level)
                .finish(),
            ViewKind::Text { text, font_size } => f
                .debug_struct("Text")
                .field("text", text)
                .field("font_size", font_size)
                .finish(),
            ViewKind::Button { text, active, .. } => f
                .debug_struct("Button")
                .field("text", text)
                .field("active", active)
                .field("on_click", &"<callback>")
                .finish(),
            ViewKind::Link {
                text,
                href,
                external,
            } => f
                .debug_struct("Link")
                .field("text", text)
                .field("href", href)
                .field("external", external)
                .finish(),
            ViewKind::Image { src, alt, fallback } => f
                .debug_struct("Image")
                .field("src", src)
                .field("alt", alt)
                .field("fallback", fallback)
                .finish(),
            ViewKind::Tag { text } => f.debug_struct("Tag").field("text", text).finish(),
            ViewKind::Spacer => write!(f, "Spacer"),
        }
    }
}

impl ViewKind {
    /// Visible text carried by the node itself (not its children).
    pub fn text(&self) -> Option<&str> {
        match self {
            ViewKind::Heading { text, .. }
            | ViewKind::Text { text, .. }
            | ViewKind::Button { text, .. }
            | ViewKind::Link { text, .. }
            | ViewKind::Tag { text } => Some(text),
            ViewKind::Image { fallback, .. } => Some(fallback),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct View {
    pub id: ViewId,
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
    pub semantics: Option<crate::semantics::Semantics>,
}

impl View {
    pub fn new(id: ViewId, kind: ViewKind) -> Self {
        View {
            id,
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
    pub fn semantics(mut self, s: crate::semantics::Semantics) -> Self {
        self.semantics = Some(s);
        self
    }

    /// Depth-first, pre-order.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a View)) {
        f(self);
        for c in &self.children {
            c.walk(f);
        }
    }

    pub fn find(&self, pred: impl Fn(&View) -> bool) -> Option<&View> {
        let mut found = None;
        self.walk(&mut |v| {
            if found.is_none() && pred(v) {
                found = Some(v);
            }
        });
        found
    }

    /// Keys of all `Section` nodes in document order.
    pub fn section_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        self.walk(&mut |v| {
            if let ViewKind::Section { key } = &v.kind {
                keys.push(key.clone());
            }
        });
        keys
    }
}
