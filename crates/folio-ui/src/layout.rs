//! Taffy-backed layout pass.
//!
//! The page is laid out at a fixed viewport width with unbounded height; the
//! result is a map from view id to absolute rect plus the extent of every
//! `Section`, which is what scroll tracking and visibility need.

use std::collections::HashMap;

use folio_core::{FolioError, Modifier, Rect, Result, Size, View, ViewId, ViewKind};
use taffy::prelude::*;

pub const CHAR_WIDTH_EM: f32 = 0.55;
pub const LINE_HEIGHT_EM: f32 = 1.4;

#[derive(Clone, Debug)]
enum NodeCtx {
    Text { text: String, font_px: f32 },
    Fixed { w: f32, h: f32 },
}

#[derive(Clone, Debug, Default)]
pub struct LayoutTree {
    rects: HashMap<ViewId, Rect>,
    sections: Vec<(String, Rect)>,
    content: Size,
}

impl LayoutTree {
    pub fn rect(&self, id: ViewId) -> Option<Rect> {
        self.rects.get(&id).copied()
    }

    /// Section extents in document order, absolute page coordinates.
    pub fn sections(&self) -> &[(String, Rect)] {
        &self.sections
    }

    pub fn anchor(&self, key: &str) -> Option<Rect> {
        self.sections
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, r)| *r)
    }

    pub fn content_height(&self) -> f32 {
        self.content.height
    }
}

fn font_px_for(kind: &ViewKind) -> f32 {
    match kind {
        ViewKind::Heading { level, .. } => match level {
            1 => 48.0,
            2 => 36.0,
            3 => 22.0,
            _ => 18.0,
        },
        ViewKind::Text { font_size, .. } => *font_size,
        ViewKind::Tag { .. } => 12.0,
        _ => 16.0,
    }
}

/// Greedy word wrap using the fixed-advance estimate. Always at least one line.
pub fn wrap_line_count(text: &str, font_px: f32, max_width: Option<f32>) -> usize {
    let char_w = font_px * CHAR_WIDTH_EM;
    let Some(max_w) = max_width.filter(|w| *w > char_w) else {
        return text.lines().count().max(1);
    };
    let max_chars = (max_w / char_w).floor().max(1.0) as usize;

    let mut lines = 0usize;
    for para in text.split('\n') {
        let mut current = 0usize;
        lines += 1;
        for word in para.split_whitespace() {
            let n = word.chars().count();
            if current == 0 {
                current = n;
            } else if current + 1 + n <= max_chars {
                current += 1 + n;
            } else {
                lines += 1;
                current = n;
            }
            // Words longer than a line break across several.
            while current > max_chars {
                lines += 1;
                current -= max_chars;
            }
        }
    }
    lines.max(1)
}

fn style_from_modifier(m: &Modifier, kind: &ViewKind) -> Style {
    let mut s = Style {
        display: Display::Flex,
        ..Default::default()
    };

    s.flex_direction = match kind {
        ViewKind::Row => FlexDirection::Row,
        _ => FlexDirection::Column,
    };
    s.align_items = Some(match kind {
        ViewKind::Row => AlignItems::FlexStart,
        _ => AlignItems::Stretch,
    });
    s.justify_content = Some(JustifyContent::FlexStart);

    if let Some(w) = m.flex_wrap {
        s.flex_wrap = w;
    }
    if let Some(j) = m.justify_content {
        s.justify_content = Some(j);
    }
    if let Some(a) = m.align_items {
        s.align_items = Some(a);
    }
    if let Some(g) = m.flex_grow {
        s.flex_grow = g;
    }
    if let Some(g) = m.gap {
        s.gap = taffy::geometry::Size {
            width: length(g),
            height: length(g),
        };
    }
    if let Some(p) = m.padding {
        s.padding = taffy::geometry::Rect {
            left: length(p.left),
            right: length(p.right),
            top: length(p.top),
            bottom: length(p.bottom),
        };
    }

    if let Some(w) = m.width {
        s.size.width = length(w.max(0.0));
    } else if m.fill_max_width {
        s.size.width = percent(1.0);
    }
    if let Some(h) = m.height {
        s.size.height = length(h.max(0.0));
    }
    if let Some(h) = m.min_height {
        s.min_size.height = length(h.max(0.0));
    }
    if let Some(w) = m.max_width {
        s.max_size.width = length(w.max(0.0));
    }
    s
}

fn leaf_ctx(v: &View) -> Option<NodeCtx> {
    match &v.kind {
        ViewKind::Image { .. } => Some(NodeCtx::Fixed {
            w: v.modifier.width.unwrap_or(160.0),
            h: v.modifier.height.unwrap_or(160.0),
        }),
        ViewKind::Spacer => None,
        kind => kind.text().map(|t| {
            let font_px = font_px_for(kind);
            // Buttons, links and tags carry their own padding.
            let text = match kind {
                ViewKind::Button { .. } | ViewKind::Tag { .. } | ViewKind::Link { .. } => {
                    format!("  {t}  ")
                }
                _ => t.to_string(),
            };
            NodeCtx::Text { text, font_px }
        }),
    }
}

fn build_node(
    v: &View,
    t: &mut TaffyTree<NodeCtx>,
    nodes_map: &mut HashMap<ViewId, NodeId>,
) -> Result<NodeId> {
    let style = style_from_modifier(&v.modifier, &v.kind);
    let map_err = |e: taffy::TaffyError| FolioError::Layout(e.to_string());

    let node = match leaf_ctx(v) {
        Some(ctx) if v.children.is_empty() => t.new_leaf_with_context(style, ctx).map_err(map_err)?,
        _ => {
            let mut kids = Vec::with_capacity(v.children.len());
            for c in &v.children {
                kids.push(build_node(c, t, nodes_map)?);
            }
            t.new_with_children(style, &kids).map_err(map_err)?
        }
    };
    nodes_map.insert(v.id, node);
    Ok(node)
}

/// Lays out `root` (ids must already be stamped, see `stamp_ids`) at the
/// viewport width. Height grows with content.
pub fn layout(root: &View, viewport: Size) -> Result<LayoutTree> {
    let mut taffy: TaffyTree<NodeCtx> = TaffyTree::new();
    // Absolute rects are sums of relative locations; rounding each step
    // lets adjacent siblings drift apart or overlap.
    taffy.disable_rounding();
    let mut nodes_map = HashMap::new();
    let root_node = build_node(root, &mut taffy, &mut nodes_map)?;
    let map_err = |e: taffy::TaffyError| FolioError::Layout(e.to_string());

    let mut rs = taffy.style(root_node).map_err(map_err)?.clone();
    rs.size.width = length(viewport.width);
    rs.min_size.height = length(viewport.height);
    taffy.set_style(root_node, rs).map_err(map_err)?;

    let available = taffy::geometry::Size {
        width: AvailableSpace::Definite(viewport.width),
        height: AvailableSpace::MaxContent,
    };

    taffy
        .compute_layout_with_measure(root_node, available, |known, avail, _node, ctx, _style| {
            match ctx {
                Some(NodeCtx::Text { text, font_px }) => {
                    let char_w = *font_px * CHAR_WIDTH_EM;
                    let natural_w = text.chars().count() as f32 * char_w;
                    let max_w = known.width.or(match avail.width {
                        AvailableSpace::Definite(w) => Some(w),
                        _ => None,
                    });
                    let width = known
                        .width
                        .unwrap_or_else(|| max_w.map_or(natural_w, |m| natural_w.min(m)));
                    let lines = wrap_line_count(text, *font_px, max_w);
                    taffy::geometry::Size {
                        width,
                        height: known
                            .height
                            .unwrap_or(lines as f32 * *font_px * LINE_HEIGHT_EM),
                    }
                }
                Some(NodeCtx::Fixed { w, h }) => taffy::geometry::Size {
                    width: known.width.unwrap_or(*w),
                    height: known.height.unwrap_or(*h),
                },
                None => taffy::geometry::Size::ZERO,
            }
        })
        .map_err(map_err)?;

    let mut out = LayoutTree::default();
    collect(root, &taffy, &nodes_map, (0.0, 0.0), &mut out)?;
    let root_layout = taffy.layout(root_node).map_err(map_err)?;
    out.content = Size {
        width: root_layout.size.width,
        height: root_layout.size.height,
    };
    log::debug!(
        "layout: {} nodes, {} sections, content height {:.0}",
        out.rects.len(),
        out.sections.len(),
        out.content.height
    );
    Ok(out)
}

fn collect(
    v: &View,
    t: &TaffyTree<NodeCtx>,
    nodes: &HashMap<ViewId, NodeId>,
    origin: (f32, f32),
    out: &mut LayoutTree,
) -> Result<()> {
    let Some(node) = nodes.get(&v.id) else {
        return Ok(());
    };
    let l = t
        .layout(*node)
        .map_err(|e| FolioError::Layout(e.to_string()))?;
    let rect = Rect {
        x: origin.0 + l.location.x,
        y: origin.1 + l.location.y,
        w: l.size.width,
        h: l.size.height,
    };
    out.rects.insert(v.id, rect);
    if let ViewKind::Section { key } = &v.kind {
        out.sections.push((key.clone(), rect));
    }
    for c in &v.children {
        collect(c, t, nodes, (rect.x, rect.y), out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Column, Section, Text, ViewExt, stamp_ids};

    #[test]
    fn wrap_counts_lines() {
        // 16px * 0.55 = 8.8px per char; 88px fits 10 chars.
        assert_eq!(wrap_line_count("hello world", 16.0, Some(88.0)), 2);
        assert_eq!(wrap_line_count("hello", 16.0, Some(88.0)), 1);
        assert_eq!(wrap_line_count("hello world", 16.0, None), 1);
        assert_eq!(wrap_line_count("", 16.0, Some(88.0)), 1);
        assert_eq!(wrap_line_count("abcdefghijklmnopqrstu", 16.0, Some(88.0)), 3);
    }

    #[test]
    fn sections_stack_in_document_order() {
        let mut page = Column(Modifier::new()).child((
            Section("home", Modifier::new().height(800.0)),
            Section("about", Modifier::new().height(600.0)),
            Section("projects", Modifier::new().height(700.0)),
        ));
        stamp_ids(&mut page);
        let tree = layout(&page, Size::new(1280.0, 800.0)).unwrap();

        let secs: Vec<(&str, f32, f32)> = tree
            .sections()
            .iter()
            .map(|(k, r)| (k.as_str(), r.y, r.h))
            .collect();
        assert_eq!(
            secs,
            vec![
                ("home", 0.0, 800.0),
                ("about", 800.0, 600.0),
                ("projects", 1400.0, 700.0)
            ]
        );
        assert_eq!(tree.content_height(), 2100.0);
        assert_eq!(tree.anchor("about").map(|r| r.y), Some(800.0));
        assert!(tree.anchor("contact").is_none());
        assert_eq!(tree.rect(3).map(|r| (r.y, r.h)), Some((800.0, 600.0)));
    }

    #[test]
    fn fractional_sections_stay_contiguous() {
        let para = || Text("a line of body copy that wraps").modifier(Modifier::new());
        let mut page = Column(Modifier::new()).child((
            Section("home", Modifier::new().padding(10.3)).child(para()),
            Section("about", Modifier::new().padding(7.7)).child((para(), para())),
            Section("projects", Modifier::new().padding(3.1)).child(para()),
        ));
        stamp_ids(&mut page);
        let tree = layout(&page, Size::new(390.0, 844.0)).unwrap();
        for pair in tree.sections().windows(2) {
            let (prev, next) = (pair[0].1, pair[1].1);
            assert!((next.y - prev.bottom()).abs() < 0.01, "{prev:?} {next:?}");
        }
    }

    #[test]
    fn min_height_grows_with_text() {
        let long = "word ".repeat(400);
        let mut page = Column(Modifier::new()).child((
            Section("home", Modifier::new().min_height(100.0))
                .child(Text(long).modifier(Modifier::new())),
            Section("about", Modifier::new().min_height(100.0)),
        ));
        stamp_ids(&mut page);
        let tree = layout(&page, Size::new(400.0, 300.0)).unwrap();
        let home = tree.anchor("home").unwrap();
        let about = tree.anchor("about").unwrap();
        assert!(home.h > 100.0);
        assert_eq!(about.y, home.bottom());
    }
}
