#![allow(non_snake_case)]
//! Widgets, layout, scrolling, reveal animations, and HTML output.

pub mod anim;
pub mod html;
pub mod layout;
pub mod scroll;
pub mod visibility;

use std::rc::Rc;

use folio_core::*;

pub use anim::{ChildStyle, EntranceSequence, ItemTransition, Stagger};
pub use html::{HtmlOptions, render_fragment, render_html};
pub use layout::{LayoutTree, layout};
pub use scroll::ScrollState;
pub use visibility::{VisibilityObserver, VisibilityOptions};

pub fn Surface(modifier: Modifier, child: View) -> View {
    let mut v = View::new(0, ViewKind::Surface).modifier(modifier);
    v.children = vec![child];
    v
}

pub fn Box(modifier: Modifier) -> View {
    View::new(0, ViewKind::Box).modifier(modifier)
}

pub fn Row(modifier: Modifier) -> View {
    View::new(0, ViewKind::Row).modifier(modifier)
}

pub fn Column(modifier: Modifier) -> View {
    View::new(0, ViewKind::Column).modifier(modifier)
}

/// Page region addressable as `#key`.
pub fn Section(key: impl Into<String>, modifier: Modifier) -> View {
    let key = key.into();
    View::new(0, ViewKind::Section { key: key.clone() })
        .modifier(modifier)
        .semantics(Semantics::new(Role::Region).label(key))
}

pub fn Heading(level: u8, text: impl Into<String>) -> View {
    View::new(
        0,
        ViewKind::Heading {
            text: text.into(),
            level: level.clamp(1, 6),
        },
    )
    .semantics(Semantics::new(Role::Heading))
}

pub fn Text(text: impl Into<String>) -> View {
    View::new(
        0,
        ViewKind::Text {
            text: text.into(),
            font_size: 16.0,
        },
    )
}

pub fn Spacer() -> View {
    View::new(0, ViewKind::Spacer).modifier(Modifier::new().weight(1.0))
}

pub fn Button(text: impl Into<String>, on_click: impl Fn() + 'static) -> View {
    let text = text.into();
    View::new(
        0,
        ViewKind::Button {
            text: text.clone(),
            active: false,
            on_click: Some(Rc::new(on_click)),
        },
    )
    .semantics(Semantics::new(Role::Button).label(text))
}

pub fn Link(text: impl Into<String>, href: impl Into<String>) -> View {
    let href = href.into();
    let external = href.starts_with("http://") || href.starts_with("https://");
    View::new(
        0,
        ViewKind::Link {
            text: text.into(),
            href,
            external,
        },
    )
    .semantics(Semantics::new(Role::Link))
}

/// Image with a textual stand-in for when the source fails to load.
pub fn Image(
    modifier: Modifier,
    src: impl Into<String>,
    alt: impl Into<String>,
    fallback: impl Into<String>,
) -> View {
    let alt = alt.into();
    View::new(
        0,
        ViewKind::Image {
            src: src.into(),
            alt: alt.clone(),
            fallback: fallback.into(),
        },
    )
    .modifier(modifier)
    .semantics(Semantics::new(Role::Image).label(alt))
}

pub fn Tag(text: impl Into<String>) -> View {
    View::new(0, ViewKind::Tag { text: text.into() })
}

pub trait TextStyle {
    fn size(self, px: f32) -> View;
    fn color(self, c: Color) -> View;
}

impl TextStyle for View {
    fn size(mut self, px: f32) -> View {
        if let ViewKind::Text { font_size, .. } = &mut self.kind {
            *font_size = px;
        }
        self
    }

    fn color(mut self, c: Color) -> View {
        self.modifier.foreground = Some(Brush::Solid(c));
        self
    }
}

pub trait ButtonExt {
    /// Marks a button as the selected member of its group.
    fn active(self, on: bool) -> View;
}

impl ButtonExt for View {
    fn active(mut self, on: bool) -> View {
        if let ViewKind::Button { active, .. } = &mut self.kind {
            *active = on;
        }
        if let Some(s) = self.semantics.take() {
            self.semantics = Some(s.current(on));
        }
        self
    }
}

/// Extension trait for child building
pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
}

impl ViewExt for View {
    fn child(self, children: impl IntoChildren) -> Self {
        self.with_children(children.into_children())
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl IntoChildren for Option<View> {
    fn into_children(self) -> Vec<View> {
        self.into_iter().collect()
    }
}

impl<const N: usize> IntoChildren for [View; N] {
    fn into_children(self) -> Vec<View> {
        self.into()
    }
}

// Tuple implementations
macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H);

/// Assigns pre-order ids starting at 1. Identical trees get identical ids.
pub fn stamp_ids(root: &mut View) {
    fn stamp(v: &mut View, id: &mut u64) {
        v.id = *id;
        *id += 1;
        for c in &mut v.children {
            stamp(c, id);
        }
    }
    let mut id = 1u64;
    stamp(root, &mut id);
}

/// Runs the click handler of the node with `id`, if it has one.
pub fn dispatch_click(root: &View, id: ViewId) -> bool {
    let Some(v) = root.find(|v| v.id == id) else {
        return false;
    };
    if let ViewKind::Button {
        on_click: Some(cb), ..
    } = &v.kind
    {
        cb();
        return true;
    }
    if let Some(cb) = &v.modifier.on_click {
        cb();
        return true;
    }
    false
}
