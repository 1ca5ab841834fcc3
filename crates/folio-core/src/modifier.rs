use std::rc::Rc;

use taffy::{AlignItems, FlexWrap, JustifyContent};

use crate::Brush;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PaddingValues {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl PaddingValues {
    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            left: horizontal,
            right: horizontal,
            top: vertical,
            bottom: vertical,
        }
    }
}

#[derive(Clone, Default)]
pub struct Modifier {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub min_height: Option<f32>,
    pub max_width: Option<f32>,
    pub fill_max_width: bool,
    pub padding: Option<PaddingValues>,
    pub gap: Option<f32>,
    pub flex_grow: Option<f32>,
    pub flex_wrap: Option<FlexWrap>,
    pub justify_content: Option<JustifyContent>,
    pub align_items: Option<AlignItems>,
    pub background: Option<Brush>,
    /// Brush for text drawn inside this node; gradients clip to the glyphs.
    pub foreground: Option<Brush>,
    pub radius: Option<f32>,
    pub alpha: Option<f32>,
    pub translate: Option<(f32, f32)>,
    /// Stylesheet hook for renderers that have one.
    pub class: Option<String>,
    /// In-page target (`#key`) a click should scroll to.
    pub anchor: Option<String>,
    pub on_click: Option<Rc<dyn Fn()>>,
    pub semantics: Option<crate::Semantics>,
}

impl std::fmt::Debug for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Modifier")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("min_height", &self.min_height)
            .field("max_width", &self.max_width)
            .field("fill_max_width", &self.fill_max_width)
            .field("padding", &self.padding)
            .field("gap", &self.gap)
            .field("flex_grow", &self.flex_grow)
            .field("flex_wrap", &self.flex_wrap)
            .field("justify_content", &self.justify_content)
            .field("align_items", &self.align_items)
            .field("background", &self.background)
            .field("foreground", &self.foreground)
            .field("radius", &self.radius)
            .field("alpha", &self.alpha)
            .field("translate", &self.translate)
            .field("class", &self.class)
            .field("anchor", &self.anchor)
            .field("on_click", &self.on_click.as_ref().map(|_| "..."))
            .field("semantics", &self.semantics)
            .finish()
    }
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn width(mut self, w: f32) -> Self {
        self.width = Some(w);
        self
    }
    pub fn height(mut self, h: f32) -> Self {
        self.height = Some(h);
        self
    }
    pub fn min_height(mut self, h: f32) -> Self {
        self.min_height = Some(h);
        self
    }
    pub fn max_width(mut self, w: f32) -> Self {
        self.max_width = Some(w);
        self
    }
    pub fn fill_max_width(mut self) -> Self {
        self.fill_max_width = true;
        self
    }
    pub fn padding(mut self, v: f32) -> Self {
        self.padding = Some(PaddingValues {
            left: v,
            right: v,
            top: v,
            bottom: v,
        });
        self
    }
    pub fn padding_values(mut self, padding: PaddingValues) -> Self {
        self.padding = Some(padding);
        self
    }
    pub fn gap(mut self, g: f32) -> Self {
        self.gap = Some(g);
        self
    }
    pub fn weight(mut self, w: f32) -> Self {
        self.flex_grow = Some(w);
        self
    }
    pub fn wrap(mut self) -> Self {
        self.flex_wrap = Some(FlexWrap::Wrap);
        self
    }
    pub fn justify_content(mut self, j: JustifyContent) -> Self {
        self.justify_content = Some(j);
        self
    }
    pub fn align_items(mut self, a: AlignItems) -> Self {
        self.align_items = Some(a);
        self
    }
    pub fn center(self) -> Self {
        self.justify_content(JustifyContent::Center)
            .align_items(AlignItems::Center)
    }
    pub fn background(mut self, brush: impl Into<Brush>) -> Self {
        self.background = Some(brush.into());
        self
    }
    pub fn foreground(mut self, brush: impl Into<Brush>) -> Self {
        self.foreground = Some(brush.into());
        self
    }
    pub fn clip_rounded(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }
    pub fn alpha(mut self, a: f32) -> Self {
        self.alpha = Some(a.clamp(0.0, 1.0));
        self
    }
    pub fn translate(mut self, x: f32, y: f32) -> Self {
        self.translate = Some((x, y));
        self
    }
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
    pub fn anchor(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.anchor = Some(if key.starts_with('#') { key } else { format!("#{key}") });
        self
    }
    pub fn clickable(mut self, f: impl Fn() + 'static) -> Self {
        self.on_click = Some(Rc::new(f));
        self
    }
    pub fn semantics(mut self, s: crate::Semantics) -> Self {
        self.semantics = Some(s);
        self
    }
}
