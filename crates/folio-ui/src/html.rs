//! Static HTML output.
//!
//! Turns a composed `View` into markup. Layout is left to the browser's
//! flexbox, so the same modifier fields that drive taffy become inline
//! styles here. Click handlers cannot survive serialization; buttons with
//! an anchor carry it as `data-target` and the bundled script scrolls there.

use std::fmt::Write;

use folio_core::{Modifier, Role, View, ViewKind};

#[derive(Clone, Debug)]
pub struct HtmlOptions {
    pub lang: String,
    pub title: String,
    /// Extra CSS appended after the base stylesheet.
    pub stylesheet: Option<String>,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            lang: "en".into(),
            title: String::new(),
            stylesheet: None,
        }
    }
}

const BASE_CSS: &str = "html{scroll-behavior:smooth}\
body{margin:0;font-family:system-ui,sans-serif}\
.row{display:flex;flex-direction:row}\
.column,.box,.surface,section{display:flex;flex-direction:column}\
.tag{display:inline-block;padding:2px 8px;border-radius:999px;font-size:12px}\
.spacer{flex:1}\
.fallback[hidden]{display:none}";

const NAV_SCRIPT: &str = "document.addEventListener('click',function(e){\
var b=e.target.closest('[data-target]');if(!b)return;\
var t=document.querySelector(b.dataset.target);\
if(t){e.preventDefault();t.scrollIntoView({behavior:'smooth'});}});";

const IMG_ONERROR: &str = "this.hidden=true;this.nextElementSibling.hidden=false";

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Full document with head, base stylesheet and the anchor script.
pub fn render_html(root: &View, opts: &HtmlOptions) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n");
    let _ = writeln!(out, "<html lang=\"{}\">", escape(&opts.lang));
    out.push_str("<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape(&opts.title));
    let _ = write!(out, "<style>{BASE_CSS}");
    if let Some(css) = &opts.stylesheet {
        out.push_str(css);
    }
    out.push_str("</style>\n</head>\n<body>\n");
    out.push_str(&render_fragment(root));
    let _ = write!(out, "\n<script>{NAV_SCRIPT}</script>\n</body>\n</html>\n");
    out
}

/// Markup for `root` alone, without whitespace between elements.
pub fn render_fragment(root: &View) -> String {
    let mut out = String::new();
    write_view(&mut out, root);
    out
}

fn write_view(out: &mut String, v: &View) {
    let label = v
        .semantics
        .as_ref()
        .and_then(|s| s.label.as_deref())
        .map(escape);
    let current = v.semantics.as_ref().is_some_and(|s| s.current);

    match &v.kind {
        ViewKind::Surface | ViewKind::Box | ViewKind::Row | ViewKind::Column => {
            let class = match v.kind {
                ViewKind::Surface => "surface",
                ViewKind::Row => "row",
                ViewKind::Column => "column",
                _ => "box",
            };
            let nav = v
                .semantics
                .as_ref()
                .is_some_and(|s| s.role == Role::Navigation);
            let tag = if nav { "nav" } else { "div" };
            open(out, tag, class, &v.modifier);
            if nav && let Some(l) = &label {
                let _ = write!(out, " aria-label=\"{l}\"");
            }
            out.push('>');
            write_children(out, v);
            let _ = write!(out, "</{tag}>");
        }
        ViewKind::Section { key } => {
            let _ = write!(out, "<section id=\"{}\"", escape(key));
            attrs(out, "", &v.modifier);
            out.push('>');
            write_children(out, v);
            out.push_str("</section>");
        }
        ViewKind::Heading { text, level } => {
            let tag = format!("h{level}");
            open(out, &tag, "", &v.modifier);
            let _ = write!(out, ">{}</{tag}>", escape(text));
        }
        ViewKind::Text { text, font_size } => {
            out.push_str("<p");
            let mut style = style(&v.modifier);
            if *font_size != 16.0 {
                let _ = write!(style, "font-size:{font_size}px;");
            }
            common(out, "", &v.modifier, &style);
            let _ = write!(out, ">{}</p>", escape(text));
        }
        ViewKind::Button { text, active, .. } => {
            let class = if *active { "active" } else { "" };
            out.push_str("<button type=\"button\"");
            attrs(out, class, &v.modifier);
            if let Some(target) = &v.modifier.anchor {
                let _ = write!(out, " data-target=\"{}\"", escape(target));
            }
            if let Some(l) = &label
                && *l != escape(text)
            {
                let _ = write!(out, " aria-label=\"{l}\"");
            }
            if current {
                out.push_str(" aria-current=\"true\"");
            }
            let _ = write!(out, ">{}</button>", escape(text));
        }
        ViewKind::Link {
            text,
            href,
            external,
        } => {
            let _ = write!(out, "<a href=\"{}\"", escape(href));
            attrs(out, "", &v.modifier);
            if *external {
                out.push_str(" target=\"_blank\" rel=\"noopener noreferrer\"");
            }
            if current {
                out.push_str(" aria-current=\"true\"");
            }
            let _ = write!(out, ">{}</a>", escape(text));
        }
        ViewKind::Image { src, alt, fallback } => {
            let _ = write!(
                out,
                "<img src=\"{}\" alt=\"{}\" onerror=\"{IMG_ONERROR}\"",
                escape(src),
                escape(alt)
            );
            attrs(out, "", &v.modifier);
            let _ = write!(
                out,
                "><span class=\"fallback\" hidden>{}</span>",
                escape(fallback)
            );
        }
        ViewKind::Tag { text } => {
            open(out, "span", "tag", &v.modifier);
            let _ = write!(out, ">{}</span>", escape(text));
        }
        ViewKind::Spacer => out.push_str("<div class=\"spacer\"></div>"),
    }
}

fn write_children(out: &mut String, v: &View) {
    for c in &v.children {
        write_view(out, c);
    }
}

fn open(out: &mut String, tag: &str, class: &str, m: &Modifier) {
    let _ = write!(out, "<{tag}");
    attrs(out, class, m);
}

fn attrs(out: &mut String, class: &str, m: &Modifier) {
    common(out, class, m, &style(m));
}

fn common(out: &mut String, class: &str, m: &Modifier, style: &str) {
    let classes: Vec<&str> = [class, m.class.as_deref().unwrap_or("")]
        .into_iter()
        .filter(|c| !c.is_empty())
        .collect();
    if !classes.is_empty() {
        let _ = write!(out, " class=\"{}\"", escape(&classes.join(" ")));
    }
    if !style.is_empty() {
        let _ = write!(out, " style=\"{}\"", escape(style));
    }
}

fn style(m: &Modifier) -> String {
    let mut s = String::new();
    if let Some(w) = m.width {
        let _ = write!(s, "width:{w}px;");
    } else if m.fill_max_width {
        s.push_str("width:100%;");
    }
    if let Some(h) = m.height {
        let _ = write!(s, "height:{h}px;");
    }
    if let Some(h) = m.min_height {
        let _ = write!(s, "min-height:{h}px;");
    }
    if let Some(w) = m.max_width {
        let _ = write!(s, "max-width:{w}px;margin:0 auto;");
    }
    if let Some(p) = m.padding {
        let _ = write!(
            s,
            "padding:{}px {}px {}px {}px;",
            p.top, p.right, p.bottom, p.left
        );
    }
    if let Some(g) = m.gap {
        let _ = write!(s, "gap:{g}px;");
    }
    if let Some(g) = m.flex_grow {
        let _ = write!(s, "flex-grow:{g};");
    }
    if m.flex_wrap.is_some() {
        s.push_str("flex-wrap:wrap;");
    }
    if let Some(j) = m.justify_content {
        let _ = write!(s, "justify-content:{};", justify_css(j));
    }
    if let Some(a) = m.align_items {
        let _ = write!(s, "align-items:{};", align_css(a));
    }
    if let Some(b) = &m.background {
        let _ = write!(s, "background:{};", b.to_css());
    }
    if let Some(b) = &m.foreground {
        match b {
            folio_core::Brush::Solid(c) => {
                let _ = write!(s, "color:{};", c.to_css());
            }
            gradient => {
                let _ = write!(
                    s,
                    "background:{};-webkit-background-clip:text;background-clip:text;color:transparent;",
                    gradient.to_css()
                );
            }
        }
    }
    if let Some(r) = m.radius {
        let _ = write!(s, "border-radius:{r}px;");
    }
    if let Some(a) = m.alpha {
        let _ = write!(s, "opacity:{a};");
    }
    if let Some((x, y)) = m.translate {
        let _ = write!(s, "transform:translate({x}px,{y}px);");
    }
    s
}

fn justify_css(j: taffy::JustifyContent) -> &'static str {
    use taffy::JustifyContent as J;
    match j {
        J::Center => "center",
        J::End | J::FlexEnd => "flex-end",
        J::SpaceBetween => "space-between",
        J::SpaceAround => "space-around",
        J::SpaceEvenly => "space-evenly",
        _ => "flex-start",
    }
}

fn align_css(a: taffy::AlignItems) -> &'static str {
    use taffy::AlignItems as A;
    match a {
        A::Center => "center",
        A::End | A::FlexEnd => "flex-end",
        A::Stretch => "stretch",
        A::Baseline => "baseline",
        _ => "flex-start",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Button, ButtonExt, Column, Heading, Image, Link, Section, Tag, Text, ViewExt};

    #[test]
    fn escapes_text_and_attributes() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn section_fragment() {
        let v = Section("about", Modifier::new().min_height(600.0)).child((
            Heading(2, "About <me>"),
            Text("Hi").modifier(Modifier::new().alpha(0.5).translate(0.0, 20.0)),
            Tag("Rust"),
        ));
        insta::assert_snapshot!(render_fragment(&v), @r#"<section id="about" style="min-height:600px;"><h2>About &lt;me&gt;</h2><p style="opacity:0.5;transform:translate(0px,20px);">Hi</p><span class="tag">Rust</span></section>"#);
    }

    #[test]
    fn buttons_carry_target_and_state() {
        let v = Button("About", || {})
            .modifier(Modifier::new().anchor("about"))
            .active(true);
        let html = render_fragment(&v);
        assert!(html.starts_with("<button type=\"button\" class=\"active\" data-target=\"#about\""));
        assert!(html.contains("aria-current=\"true\""));
        assert!(html.ends_with(">About</button>"));
    }

    #[test]
    fn external_links_open_in_new_tab() {
        let html = render_fragment(&Link("GitHub", "https://github.com/MedAzizAbidii"));
        assert!(html.contains("target=\"_blank\""));
        let html = render_fragment(&Link("Contact", "#contact"));
        assert!(!html.contains("target="));
    }

    #[test]
    fn image_has_fallback() {
        let html = render_fragment(&Image(Modifier::new(), "me.jpg", "Profile", "MA"));
        assert!(html.contains("onerror="));
        assert!(html.ends_with("<span class=\"fallback\" hidden>MA</span>"));
    }

    #[test]
    fn document_sets_lang_and_title() {
        let doc = render_html(
            &Column(Modifier::new()),
            &HtmlOptions {
                lang: "fr".into(),
                title: "Portfolio".into(),
                stylesheet: None,
            },
        );
        assert!(doc.starts_with("<!DOCTYPE html>\n<html lang=\"fr\">"));
        assert!(doc.contains("<title>Portfolio</title>"));
        assert!(doc.contains("<div class=\"column\"></div>"));
    }
}
